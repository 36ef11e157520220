#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Info,
}

impl GalleryKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "i" | "I" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Closed,
    Navigated,
    PanelToggled,
    Ignored,
}

/// Owns the window key listener of one lightbox. The listener exists only
/// while the lightbox is open and is never bound twice.
#[derive(Debug)]
pub struct ListenerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for ListenerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> ListenerSlot<H> {
    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Binds on open, removes on close, and leaves an existing binding alone.
    pub fn sync(&mut self, open: bool, bind: impl FnOnce() -> H, remove: impl FnOnce(H)) {
        match (open, self.handle.take()) {
            (true, None) => self.handle = Some(bind()),
            (true, Some(handle)) => self.handle = Some(handle),
            (false, Some(handle)) => remove(handle),
            (false, None) => {}
        }
    }

    /// Unmount: drops the listener whatever the open state.
    pub fn clear(&mut self, remove: impl FnOnce(H)) {
        if let Some(handle) = self.handle.take() {
            remove(handle);
        }
    }
}
