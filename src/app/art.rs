use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{self, Collection};
use crate::effects::{TouchHold, TouchHoldConfig};
use crate::gallery::{GalleryController, GalleryItem, Registry};

use super::lightbox::Lightbox;
use super::smart_image::SmartImage;
use super::timers::TimerDriver;

const SPARKLES: usize = 8;

#[component]
pub fn ArtPage() -> impl IntoView {
    let registry = content::registry(Collection::Artworks).unwrap_or_else(|e| {
        log::error!("art: {e}");
        Registry::empty()
    });
    let controller = RwSignal::new(GalleryController::new(registry.clone()));

    view! {
        <Title text="Art" />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <h1 class="text-4xl font-bold text-center text-cyan my-12">"Digital Art"</h1>
            <p class="text-center text-muted mb-12">
                "Click a piece for the full view. Arrow keys browse, " <code>"i"</code>
                " shows the details."
            </p>
            <div class="columns-1 sm:columns-2 lg:columns-3 gap-6">
                {registry
                    .iter()
                    .cloned()
                    .map(|artwork| view! { <ArtTile artwork=artwork controller=controller /> })
                    .collect_view()}
            </div>
        </div>
        <Lightbox controller=controller zoomable=true />
    }
}

#[component]
fn ArtTile(artwork: GalleryItem, controller: RwSignal<GalleryController>) -> impl IntoView {
    let hold = TimerDriver::new(TouchHold::new(TouchHoldConfig::default()));
    let active = move || hold.machine().with(|h| h.is_active());

    // a stale activation must not fire behind an opened or dismissed lightbox
    let is_open = Memo::new(move |_| controller.with(|c| c.is_open()));
    Effect::watch(
        move || is_open.get(),
        move |_, _, _| hold.send(|h| h.teardown()),
        false,
    );

    let open = {
        let artwork = artwork.clone();
        move |_: leptos::ev::MouseEvent| {
            controller.update(|c| {
                if let Err(e) = c.open(&artwork) {
                    log::warn!("art: {e}");
                }
            })
        }
    };

    view! {
        <figure
            class="group relative mb-6 break-inside-avoid cursor-pointer rounded-lg overflow-hidden"
            on:click=open
            on:touchstart=move |_| hold.send(|h| h.touch_start())
            on:touchend=move |_| hold.send(|h| h.touch_end())
            on:touchcancel=move |_| hold.send(|h| h.touch_end())
        >
            <SmartImage
                src=artwork.tile_image().to_string()
                alt=artwork.title.clone()
                img_class="w-full h-auto object-cover transition-transform duration-300 group-hover:scale-105"
            />
            <HoverSparkle active=Signal::derive(active) />
            <figcaption class=move || {
                format!(
                    "absolute inset-x-0 bottom-0 p-4 bg-gradient-to-t from-black/80 transition-opacity group-hover:opacity-100 {}",
                    if active() { "opacity-100" } else { "opacity-0" },
                )
            }>
                <h3 class="font-bold">{artwork.title.clone()}</h3>
                <p class="text-sm text-muted">{artwork.description().to_string()}</p>
            </figcaption>
        </figure>
    }
}

/// Particle overlay shown on hover, or while a touch-hold is active.
#[component]
fn HoverSparkle(active: Signal<bool>) -> impl IntoView {
    let sparkles = (0..SPARKLES)
        .map(|i| {
            // spread the particles around the tile without any randomness
            let left = (i * 37 + 11) % 90 + 5;
            let top = (i * 53 + 7) % 90 + 5;
            let delay = i * 150;
            view! {
                <span
                    class="sparkle absolute w-1.5 h-1.5 rounded-full bg-yellow"
                    style=format!("left: {left}%; top: {top}%; animation-delay: {delay}ms;")
                ></span>
            }
        })
        .collect_view();
    view! {
        <div class=move || {
            format!(
                "pointer-events-none absolute inset-0 transition-opacity duration-300 group-hover:opacity-100 {}",
                if active.get() { "opacity-100" } else { "opacity-0" },
            )
        }>{sparkles}</div>
    }
}
