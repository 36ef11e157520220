use leptos::prelude::*;
use log::warn;

use crate::config::SiteConfig;
use crate::likes::{LikeCounter, LikeState};
use crate::storage::{KeyValueStore, StorageError};

use super::home::SocialLinks;

type Counter = LikeCounter<Box<dyn KeyValueStore>>;

#[cfg(feature = "hydrate")]
fn open_store() -> Result<Box<dyn KeyValueStore>, StorageError> {
    Ok(Box::new(crate::storage::BrowserStore::local()?))
}

#[cfg(not(feature = "hydrate"))]
fn open_store() -> Result<Box<dyn KeyValueStore>, StorageError> {
    Ok(Box::new(crate::storage::MemoryStore::new()))
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let counter = StoredValue::new_local(None::<Counter>);
    let (likes, set_likes) = signal(LikeState::default());

    // storage is read after hydration so server and client markup agree
    Effect::new(move |_| match open_store().and_then(LikeCounter::load) {
        Ok(loaded) => {
            set_likes.set(loaded.state());
            counter.set_value(Some(loaded));
        }
        Err(e) => warn!("likes: {e}"),
    });

    let toggle = move |_: leptos::ev::MouseEvent| {
        let res = counter.try_update_value(|c| c.as_mut().map(|c| c.toggle()));
        match res.flatten() {
            Some(Ok(state)) => set_likes.set(state),
            Some(Err(e)) => warn!("likes: {e}"),
            None => {}
        }
    };

    view! {
        <footer class="mt-24 py-12 border-t border-muted/20 text-center">
            <div class="flex flex-col items-center gap-4">
                <button
                    class=move || {
                        if likes.get().liked {
                            "px-6 py-3 rounded-full bg-red text-background font-semibold transition-transform hover:scale-105"
                        } else {
                            "px-6 py-3 rounded-full border border-red text-red bg-red/10 font-semibold transition-transform hover:scale-105"
                        }
                    }
                    on:click=toggle
                >
                    {move || if likes.get().liked { "♥ " } else { "♡ " }}
                    {move || likes.get().button_text()}
                </button>
                <p class="text-sm text-muted">{move || likes.get().label()}</p>
                <SocialLinks />
                <p class="text-sm text-muted">
                    {format!("© {} {}", config.copyright_year(), config.owner)}
                </p>
            </div>
        </footer>
    }
}
