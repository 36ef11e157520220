//! Visitor "like" counter kept in the browser's local storage.
//!
//! The count is per-browser and unauthenticated; it is a vanity number.

use log::warn;

use crate::storage::{KeyValueStore, StorageError};

pub const LIKES_KEY: &str = "portfolio-likes";
pub const LIKED_KEY: &str = "user-liked-portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeState {
    pub count: u32,
    pub liked: bool,
}

impl LikeState {
    pub fn label(&self) -> String {
        if self.count == 1 {
            "1 person likes this portfolio".to_string()
        } else {
            format!("{} people like this portfolio", self.count)
        }
    }

    pub fn button_text(&self) -> &'static str {
        if self.liked {
            "Thanks for the love!"
        } else {
            "Like this portfolio"
        }
    }
}

pub struct LikeCounter<S> {
    store: S,
    state: LikeState,
}

impl<S: KeyValueStore> LikeCounter<S> {
    /// Reads the persisted count, seeding `"0"` on first visit.
    pub fn load(mut store: S) -> Result<Self, StorageError> {
        let count = match store.get(LIKES_KEY)? {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warn!("likes: ignoring unreadable count {raw:?}");
                0
            }),
            None => {
                store.set(LIKES_KEY, "0")?;
                0
            }
        };
        let liked = store.get(LIKED_KEY)?.as_deref() == Some("true");
        Ok(Self {
            store,
            state: LikeState { count, liked },
        })
    }

    pub fn state(&self) -> LikeState {
        self.state
    }

    /// Likes, or takes the like back if this visitor already liked.
    pub fn toggle(&mut self) -> Result<LikeState, StorageError> {
        let next = if self.state.liked {
            LikeState {
                count: self.state.count.saturating_sub(1),
                liked: false,
            }
        } else {
            LikeState {
                count: self.state.count.saturating_add(1),
                liked: true,
            }
        };
        self.store.set(LIKES_KEY, &next.count.to_string())?;
        self.store
            .set(LIKED_KEY, if next.liked { "true" } else { "false" })?;
        self.state = next;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
