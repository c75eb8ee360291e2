//! Camera module for pan/zoom transforms.

use crate::coords::{CanvasPoint, ScreenPoint};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom factor applied per wheel notch or zoom-button press.
pub const ZOOM_STEP_MULTIPLIER: f64 = 0.8;

/// Camera manages the view transform for the map canvas.
///
/// It handles panning (translation) and zooming (scaling), converting between
/// screen coordinates and canvas coordinates. `screen_to_canvas` and
/// `canvas_to_screen` are exact inverses for any `{translate, scale}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels.
    pub translate: Vec2,
    /// Current zoom level. Always positive.
    pub scale: f64,
    /// Minimum allowed zoom level.
    pub min_scale: f64,
    /// Maximum allowed zoom level.
    pub max_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            min_scale: 0.05,
            max_scale: 20.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, p: ScreenPoint) -> CanvasPoint {
        CanvasPoint(Point::new(
            (p.x() - self.translate.x) / self.scale,
            (p.y() - self.translate.y) / self.scale,
        ))
    }

    /// Convert a canvas point to screen coordinates.
    pub fn canvas_to_screen(&self, p: CanvasPoint) -> ScreenPoint {
        ScreenPoint(Point::new(
            p.x() * self.scale + self.translate.x,
            p.y() * self.scale + self.translate.y,
        ))
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.translate += delta;
    }

    /// Zoom to an absolute scale, keeping the given screen point fixed.
    ///
    /// The canvas point under `anchor` before the zoom maps back to `anchor`
    /// after it: `translate' = anchor - canvas * scale'`.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, new_scale: f64) {
        let new_scale = new_scale.clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }

        let canvas = self.screen_to_canvas(anchor);
        self.scale = new_scale;
        self.translate = anchor.0.to_vec2() - canvas.0.to_vec2() * new_scale;
    }

    /// Zoom one step in or out, keeping the given screen point fixed.
    pub fn zoom_step(&mut self, anchor: ScreenPoint, zoom_in: bool) {
        let new_scale = if zoom_in {
            self.scale / ZOOM_STEP_MULTIPLIER
        } else {
            self.scale * ZOOM_STEP_MULTIPLIER
        };
        self.zoom_at(anchor, new_scale);
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.translate = Vec2::ZERO;
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_identity() {
        let camera = Camera::new();
        let screen = ScreenPoint::new(100.0, 200.0);
        let canvas = camera.screen_to_canvas(screen);
        assert!((canvas.x() - 100.0).abs() < f64::EPSILON);
        assert!((canvas.y() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut camera = Camera::new();
        camera.translate = Vec2::new(30.0, -20.0);
        camera.scale = 1.5;

        let original = ScreenPoint::new(123.0, 456.0);
        let canvas = camera.screen_to_canvas(original);
        let back = camera.canvas_to_screen(canvas);

        assert!((back.x() - original.x()).abs() < 1e-10);
        assert!((back.y() - original.y()).abs() < 1e-10);

        let canvas = CanvasPoint::new(-42.0, 17.5);
        let screen = camera.canvas_to_screen(canvas);
        let back = camera.screen_to_canvas(screen);

        assert!((back.x() - canvas.x()).abs() < 1e-10);
        assert!((back.y() - canvas.y()).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut camera = Camera::new();
        camera.translate = Vec2::new(50.0, 75.0);
        camera.scale = 2.0;

        let anchor = ScreenPoint::new(320.0, 240.0);
        let before = camera.screen_to_canvas(anchor);
        camera.zoom_at(anchor, 3.5);
        let after = camera.screen_to_canvas(anchor);

        assert!((before.x() - after.x()).abs() < 1e-10);
        assert!((before.y() - after.y()).abs() < 1e-10);
        assert!((camera.scale - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        camera.zoom_at(ScreenPoint::ZERO, 0.001);
        assert!((camera.scale - camera.min_scale).abs() < f64::EPSILON);

        camera.scale = 1.0;
        camera.zoom_at(ScreenPoint::ZERO, 1000.0);
        assert!((camera.scale - camera.max_scale).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_step_anchor_fixed() {
        let mut camera = Camera::new();
        let anchor = ScreenPoint::new(10.0, 20.0);
        let before = camera.screen_to_canvas(anchor);
        camera.zoom_step(anchor, true);
        camera.zoom_step(anchor, true);
        let after = camera.screen_to_canvas(anchor);
        assert!((before.x() - after.x()).abs() < 1e-9);
        assert!((before.y() - after.y()).abs() < 1e-9);
    }

    #[test]
    fn test_pan() {
        let mut camera = Camera::new();
        camera.pan(Vec2::new(10.0, 20.0));
        assert!((camera.translate.x - 10.0).abs() < f64::EPSILON);
        assert!((camera.translate.y - 20.0).abs() < f64::EPSILON);
    }
}
