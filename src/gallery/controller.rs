use log::{debug, warn};

use super::item::GalleryItem;
use super::keys::{GalleryKey, KeyOutcome};
use super::registry::Registry;
use super::zoom::ZoomState;
use super::GalleryError;

/// Read-only view of the controller handed to the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub current_index: Option<usize>,
    pub selected_item: Option<GalleryItem>,
    pub is_open: bool,
    pub panel_open: bool,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Tracks which registry item the lightbox is showing.
///
/// All transitions are synchronous, so repeated `next`/`previous` calls are
/// applied strictly in the order they are issued.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    registry: Registry,
    current: Option<usize>,
    panel_open: bool,
    zoom: ZoomState,
}

impl GalleryController {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            current: None,
            panel_open: false,
            zoom: ZoomState::default(),
        }
    }

    /// Opens the lightbox on `item`, matched by id.
    ///
    /// Passing an item from a different registry is a caller bug: the
    /// controller is left with no selection and navigation stays inert.
    pub fn open(&mut self, item: &GalleryItem) -> Result<usize, GalleryError> {
        self.panel_open = false;
        self.zoom.reset();
        match self.registry.position(item.id) {
            Some(index) => {
                debug!("gallery: open {} at {index}", item.id);
                self.current = Some(index);
                Ok(index)
            }
            None => {
                warn!("gallery: item {} is not in this registry", item.id);
                self.current = None;
                Err(GalleryError::UnknownItem(item.id))
            }
        }
    }

    pub fn close(&mut self) {
        self.current = None;
        self.panel_open = false;
        self.zoom.reset();
    }

    pub fn next(&mut self) {
        let len = self.registry.len();
        if len == 0 {
            return;
        }
        if let Some(i) = self.current {
            self.current = Some((i + 1) % len);
            self.zoom.reset();
        }
    }

    pub fn previous(&mut self) {
        let len = self.registry.len();
        if len == 0 {
            return;
        }
        if let Some(i) = self.current {
            self.current = Some((i + len - 1) % len);
            self.zoom.reset();
        }
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn handle_key(&mut self, key: GalleryKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            GalleryKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            GalleryKey::ArrowLeft if self.has_prev() => {
                self.previous();
                KeyOutcome::Navigated
            }
            GalleryKey::ArrowRight if self.has_next() => {
                self.next();
                KeyOutcome::Navigated
            }
            GalleryKey::Info => {
                self.toggle_panel();
                KeyOutcome::PanelToggled
            }
            GalleryKey::ArrowLeft | GalleryKey::ArrowRight => KeyOutcome::Ignored,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn selected(&self) -> Option<&GalleryItem> {
        self.current.and_then(|i| self.registry.get(i))
    }

    pub fn is_open(&self) -> bool {
        self.selected().is_some()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    // With wraparound "next" always exists once there are two items. A single
    // item would just navigate onto itself, so that case reports false.
    pub fn has_next(&self) -> bool {
        self.registry.len() > 1
    }

    pub fn has_prev(&self) -> bool {
        self.registry.len() > 1
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut ZoomState {
        &mut self.zoom
    }

    pub fn state(&self) -> NavigationState {
        let selected_item = self.selected().cloned();
        NavigationState {
            current_index: self.current,
            is_open: selected_item.is_some(),
            selected_item,
            panel_open: self.panel_open,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::testing::{artwork, registry_of};
    use crate::gallery::ItemId;

    #[test]
    fn test_open_next_previous_scenario() {
        let registry = registry_of(&[1, 2, 3]);
        let b = registry[1].clone();
        let mut gallery = GalleryController::new(registry);

        assert_eq!(gallery.open(&b), Ok(1));
        assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(2)));

        gallery.next();
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(3)));

        gallery.next();
        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(1)));

        gallery.previous();
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.selected().map(|i| i.id), Some(ItemId(3)));
    }

    #[test]
    fn test_open_resets_panel_and_close_is_idempotent() {
        let registry = registry_of(&[1, 2]);
        let a = registry[0].clone();
        let mut gallery = GalleryController::new(registry);

        gallery.open(&a).expect("item is in registry");
        gallery.toggle_panel();
        assert!(gallery.panel_open());
        assert_eq!(gallery.current_index(), Some(0));

        gallery.open(&a).expect("item is in registry");
        assert!(!gallery.panel_open());

        gallery.close();
        gallery.close();
        let state = gallery.state();
        assert!(!state.is_open);
        assert!(!state.panel_open);
        assert_eq!(state.selected_item, None);
        assert_eq!(state.current_index, None);
    }

    #[test]
    fn test_unknown_item_leaves_navigation_inert() {
        let mut gallery = GalleryController::new(registry_of(&[1, 2, 3]));
        let stranger = artwork(42);

        assert_eq!(
            gallery.open(&stranger),
            Err(GalleryError::UnknownItem(ItemId(42)))
        );
        assert!(!gallery.is_open());
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.current_index(), None);
    }

    #[test]
    fn test_empty_registry() {
        let mut gallery = GalleryController::new(Registry::empty());
        gallery.next();
        gallery.previous();
        assert!(!gallery.has_next());
        assert!(!gallery.has_prev());
        assert_eq!(gallery.current_index(), None);
    }

    #[test]
    fn test_single_item_registry() {
        let registry = registry_of(&[5]);
        let only = registry[0].clone();
        let mut gallery = GalleryController::new(registry);
        gallery.open(&only).expect("item is in registry");

        assert!(!gallery.has_next());
        assert!(!gallery.has_prev());
        gallery.next();
        assert_eq!(gallery.current_index(), Some(0));
        gallery.previous();
        assert_eq!(gallery.current_index(), Some(0));

        // arrows are disabled, other keys still work
        assert_eq!(gallery.handle_key(GalleryKey::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(gallery.handle_key(GalleryKey::ArrowLeft), KeyOutcome::Ignored);
        assert_eq!(gallery.handle_key(GalleryKey::Info), KeyOutcome::PanelToggled);
        assert!(gallery.panel_open());
    }

    #[test]
    fn test_toggle_panel_keeps_selection() {
        let registry = registry_of(&[1, 2, 3]);
        let c = registry[2].clone();
        let mut gallery = GalleryController::new(registry);
        gallery.open(&c).expect("item is in registry");
        gallery.toggle_panel();
        gallery.toggle_panel();
        gallery.toggle_panel();
        assert!(gallery.panel_open());
        assert_eq!(gallery.current_index(), Some(2));
    }

    #[test]
    fn test_key_table() {
        let registry = registry_of(&[1, 2, 3]);
        let a = registry[0].clone();
        let mut gallery = GalleryController::new(registry);

        // nothing is bound while closed
        assert_eq!(gallery.handle_key(GalleryKey::Escape), KeyOutcome::Ignored);

        gallery.open(&a).expect("item is in registry");
        assert_eq!(gallery.handle_key(GalleryKey::ArrowLeft), KeyOutcome::Navigated);
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.handle_key(GalleryKey::ArrowRight), KeyOutcome::Navigated);
        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.handle_key(GalleryKey::Info), KeyOutcome::PanelToggled);
        assert_eq!(gallery.handle_key(GalleryKey::Escape), KeyOutcome::Closed);
        assert!(!gallery.is_open());
        assert!(!gallery.panel_open());

        // a second Escape has nothing left to close
        assert_eq!(gallery.handle_key(GalleryKey::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn test_navigation_resets_zoom() {
        let registry = registry_of(&[1, 2]);
        let a = registry[0].clone();
        let mut gallery = GalleryController::new(registry);
        gallery.open(&a).expect("item is in registry");
        gallery.zoom_mut().click();
        assert!(gallery.zoom().is_zoomed());
        gallery.next();
        assert!(!gallery.zoom().is_zoomed());
    }

    #[test]
    fn test_is_open_only_changes_on_open_and_close() {
        let registry = registry_of(&[1, 2, 3]);
        let a = registry[0].clone();
        let mut gallery = GalleryController::new(registry);
        gallery.open(&a).expect("item is in registry");

        // browsing and zooming inside the lightbox keep it open
        gallery.next();
        gallery.previous();
        gallery.toggle_panel();
        gallery.zoom_mut().wheel(-1.0);
        gallery.zoom_mut().drag_start(0.0, 0.0);
        gallery.zoom_mut().drag_move(10.0, 10.0);
        assert_eq!(gallery.handle_key(GalleryKey::ArrowRight), KeyOutcome::Navigated);
        assert!(gallery.is_open());

        gallery.close();
        assert!(!gallery.is_open());
    }
}
