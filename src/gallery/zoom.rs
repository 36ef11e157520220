//! Click, wheel and drag zoom for the lightbox image.

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 4.0;
pub const WHEEL_STEP: f64 = 0.1;
pub const CLICK_SCALE: f64 = 2.0;
/// Pan is bounded so a zoomed image can't be dragged out of view.
pub const MAX_TRANSLATE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
    drag_origin: Option<(f64, f64)>,
    /// Set once a drag actually moved the image, so the trailing click
    /// doesn't also toggle zoom.
    dragged: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            drag_origin: None,
            dragged: false,
        }
    }
}

impl ZoomState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale,
            self.translate_x / self.scale,
            self.translate_y / self.scale
        )
    }

    pub fn click(&mut self) {
        if self.dragged {
            self.dragged = false;
            return;
        }
        if self.is_zoomed() {
            self.reset();
        } else {
            *self = Self {
                scale: CLICK_SCALE,
                ..Self::default()
            };
        }
    }

    /// `delta_y > 0` (scroll down) zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 { -WHEEL_STEP } else { WHEEL_STEP };
        let scale = (self.scale + step).clamp(MIN_SCALE, MAX_SCALE);
        if scale <= 1.0 {
            self.reset();
        } else {
            self.scale = scale;
        }
    }

    pub fn drag_start(&mut self, x: f64, y: f64) {
        if self.is_zoomed() {
            self.drag_origin = Some((x, y));
            self.dragged = false;
        }
    }

    pub fn drag_move(&mut self, x: f64, y: f64) {
        let Some((ox, oy)) = self.drag_origin else {
            return;
        };
        if !self.is_zoomed() {
            return;
        }
        self.translate_x = (self.translate_x + x - ox).clamp(-MAX_TRANSLATE, MAX_TRANSLATE);
        self.translate_y = (self.translate_y + y - oy).clamp(-MAX_TRANSLATE, MAX_TRANSLATE);
        self.drag_origin = Some((x, y));
        if x != ox || y != oy {
            self.dragged = true;
        }
    }

    pub fn drag_end(&mut self) {
        self.drag_origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_zoom() {
        let mut zoom = ZoomState::default();
        zoom.click();
        assert_eq!(zoom.scale(), CLICK_SCALE);
        zoom.click();
        assert_eq!(zoom, ZoomState::default());
    }

    #[test]
    fn test_wheel_clamps_and_snaps() {
        let mut zoom = ZoomState::default();
        for _ in 0..100 {
            zoom.wheel(-1.0);
        }
        assert_eq!(zoom.scale(), MAX_SCALE);

        zoom.drag_start(0.0, 0.0);
        zoom.drag_move(50.0, 0.0);
        zoom.drag_end();
        for _ in 0..100 {
            zoom.wheel(1.0);
        }
        // zooming back out to 1x drops the pan offset
        assert_eq!(zoom.scale(), 1.0);
        assert_eq!(zoom.translation(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_only_when_zoomed() {
        let mut zoom = ZoomState::default();
        zoom.drag_start(10.0, 10.0);
        assert!(!zoom.is_dragging());
        zoom.drag_move(100.0, 100.0);
        assert_eq!(zoom.translation(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_is_bounded() {
        let mut zoom = ZoomState::default();
        zoom.click();
        zoom.drag_start(0.0, 0.0);
        zoom.drag_move(150.0, -50.0);
        zoom.drag_move(400.0, -500.0);
        assert_eq!(zoom.translation(), (MAX_TRANSLATE, -MAX_TRANSLATE));
        zoom.drag_end();
        assert!(!zoom.is_dragging());

        // the click that ends a drag keeps the zoom
        zoom.click();
        assert!(zoom.is_zoomed());
        zoom.click();
        assert!(!zoom.is_zoomed());
    }
}
