//! Lightbox navigation over a fixed, ordered set of gallery items.
//!
//! [`GalleryController`] owns a [`Registry`] and answers "which item is being
//! viewed". Pages render whatever it selects and feed clicks, arrow keys and
//! swipes back in as commands.

mod controller;
mod image;
mod item;
mod keys;
mod registry;
pub mod zoom;

pub use controller::{GalleryController, NavigationState};
pub use image::{ImageSource, LoadState};
pub use item::{
    ArtworkDetails, Category, CategoryFilter, GalleryItem, ItemId, ItemKind, ProjectDetails,
};
pub use keys::{GalleryKey, KeyOutcome, ListenerSlot};
pub use registry::Registry;
pub use zoom::ZoomState;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("item {0} is not part of this gallery")]
    UnknownItem(ItemId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate gallery item id {0}")]
    DuplicateId(ItemId),
}
