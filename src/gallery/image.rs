/// Load state of an image that may swap to a fallback before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: Option<String>,
    using_fallback: bool,
    state: LoadState,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.filter(|f| !f.is_empty()),
            using_fallback: false,
            state: LoadState::Loading,
        }
    }

    pub fn current(&self) -> &str {
        match (&self.fallback, self.using_fallback) {
            (Some(fallback), true) => fallback,
            _ => &self.primary,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn loaded(&mut self) {
        self.state = LoadState::Loaded;
    }

    /// Applies what a mounted `<img>` already reports. A load that finished
    /// before hydration attached listeners never fires `load`/`error` again.
    pub fn observe(&mut self, complete: bool, natural_width: u32) {
        if self.state != LoadState::Loading || !complete {
            return;
        }
        if natural_width > 0 {
            self.loaded();
        } else {
            self.errored();
        }
    }

    /// Primary failed: try the fallback once. Fallback failed: placeholder.
    pub fn errored(&mut self) {
        if !self.using_fallback && self.fallback.is_some() {
            self.using_fallback = true;
            self.state = LoadState::Loading;
        } else {
            self.state = LoadState::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_then_placeholder() {
        let mut img = ImageSource::new("/a.webp", Some("https://cdn/b.jpg".to_string()));
        assert_eq!(img.current(), "/a.webp");
        img.errored();
        assert_eq!(img.current(), "https://cdn/b.jpg");
        assert_eq!(img.state(), LoadState::Loading);
        img.errored();
        assert_eq!(img.state(), LoadState::Failed);
        assert_eq!(img.current(), "https://cdn/b.jpg");
    }

    #[test]
    fn test_no_fallback() {
        let mut img = ImageSource::new("/a.webp", Some(String::new()));
        img.errored();
        assert_eq!(img.state(), LoadState::Failed);

        let mut img = ImageSource::new("/a.webp", None);
        img.loaded();
        assert_eq!(img.state(), LoadState::Loaded);
    }

    #[test]
    fn test_observe_finished_before_hydration() {
        let mut img = ImageSource::new("/a.webp", None);
        img.observe(false, 0);
        assert_eq!(img.state(), LoadState::Loading);
        img.observe(true, 640);
        assert_eq!(img.state(), LoadState::Loaded);

        // a broken primary still moves on to the fallback
        let mut img = ImageSource::new("/a.webp", Some("/b.jpg".to_string()));
        img.observe(true, 0);
        assert_eq!(img.current(), "/b.jpg");
        assert_eq!(img.state(), LoadState::Loading);
    }

    #[test]
    fn test_observe_ignores_settled_images() {
        let mut img = ImageSource::new("/a.webp", None);
        img.errored();
        img.observe(true, 640);
        assert_eq!(img.state(), LoadState::Failed);
    }
}
