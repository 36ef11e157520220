//! End-to-end walks through what a visitor does on the site, driven through
//! the public API with the bundled content and a virtual clock.

use portfolio_site::contact::{settle, ContactError, ContactMessage, Notice};
use portfolio_site::content::{registry, Collection};
use portfolio_site::effects::{HoldPhase, ManualScheduler, TouchHold};
use portfolio_site::gallery::{GalleryController, GalleryKey, ItemId, KeyOutcome};
use portfolio_site::likes::{LikeCounter, LIKED_KEY, LIKES_KEY};
use portfolio_site::storage::{KeyValueStore, MemoryStore};

#[test]
fn test_browse_projects_in_lightbox() {
    let projects = registry(Collection::Projects).expect("bundled projects load");
    assert_eq!(projects.len(), 6);
    let second = projects[1].clone();
    let mut gallery = GalleryController::new(projects);

    assert_eq!(gallery.open(&second), Ok(1));
    assert_eq!(gallery.handle_key(GalleryKey::ArrowRight), KeyOutcome::Navigated);
    assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(3)));

    // walking backwards past the first project wraps to the last
    gallery.previous();
    gallery.previous();
    gallery.previous();
    assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(6)));

    assert_eq!(gallery.handle_key(GalleryKey::Info), KeyOutcome::PanelToggled);
    assert!(gallery.state().panel_open);
    assert_eq!(gallery.handle_key(GalleryKey::Escape), KeyOutcome::Closed);
    assert!(!gallery.is_open());
}

#[test]
fn test_three_item_walkthrough() {
    let artworks = registry(Collection::Artworks).expect("bundled artworks load");
    let first_three = artworks.iter().take(3).cloned().collect::<Vec<_>>();
    let three = portfolio_site::gallery::Registry::new(first_three).expect("ids are unique");
    let ids = three.iter().map(|i| i.id).collect::<Vec<_>>();
    let b = three[1].clone();
    let mut gallery = GalleryController::new(three);

    gallery.open(&b).expect("item is in registry");
    gallery.next();
    assert_eq!(gallery.selected().map(|i| i.id), Some(ids[2]));
    gallery.next();
    assert_eq!(gallery.selected().map(|i| i.id), Some(ids[0]));
    gallery.previous();
    assert_eq!(gallery.selected().map(|i| i.id), Some(ids[2]));
}

#[test]
fn test_art_tile_press_and_hold() {
    let mut hold = TouchHold::default();
    let mut sched = ManualScheduler::new();

    // a quick tap never lights the tile up
    sched.apply(hold.touch_start());
    sched.advance_ms(&mut hold, 400);
    sched.apply(hold.touch_end());
    sched.advance_ms(&mut hold, 2000);
    assert_eq!(hold.phase(), HoldPhase::Idle);

    sched.apply(hold.touch_start());
    sched.advance_ms(&mut hold, 600);
    assert!(hold.is_active());
    sched.apply(hold.touch_end());
    sched.advance_ms(&mut hold, 1000);
    assert!(hold.is_active());
    sched.advance_ms(&mut hold, 500);
    assert!(!hold.is_active());
    assert_eq!(sched.pending(), 0);
}

#[test]
fn test_like_survives_reload() {
    let mut counter = LikeCounter::load(MemoryStore::new()).expect("memory store works");
    assert_eq!(counter.state().label(), "0 people like this portfolio");
    counter.toggle().expect("memory store works");

    let store = counter.into_store();
    assert_eq!(store.get(LIKES_KEY), Ok(Some("1".to_string())));
    assert_eq!(store.get(LIKED_KEY), Ok(Some("true".to_string())));

    let reloaded = LikeCounter::load(store).expect("memory store works");
    assert!(reloaded.state().liked);
    assert_eq!(reloaded.state().label(), "1 person likes this portfolio");
}

#[test]
fn test_contact_without_relay_opens_mail_client() {
    let msg = ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice site".to_string(),
    };
    assert_eq!(msg.validate(), Ok(()));

    let notice = settle("me@example.com", &msg, Err(ContactError::NotConfigured));
    let Notice::OpenedMailClient { href } = &notice else {
        panic!("expected mail fallback, got {notice:?}");
    };
    assert!(href.starts_with("mailto:me@example.com?subject=Hello&body="));
    assert!(!notice.is_error());

    assert_eq!(settle("me@example.com", &msg, Ok(())), Notice::Sent);
}
