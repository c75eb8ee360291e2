//! Input primitives: modifier keys, key events and drag tracking.

use crate::coords::{CanvasPoint, ScreenPoint};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Modifier keys state, updated on every key down/up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Apply a modifier key transition; returns false if `key` is not a
    /// modifier.
    pub fn apply(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Shift => self.shift = pressed,
            Key::Control => self.ctrl = pressed,
            Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Shift,
    Control,
    Alt,
    Escape,
    Delete,
    /// Printable character key.
    Char(char),
}

/// Drag-to-pan bookkeeping.
///
/// `clicking` is set between pointer down and up; `dragging` once the
/// pointer moved while down. A completed drag suppresses the click action.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    pub clicking: bool,
    pub dragging: bool,
    /// Pointer-down position minus the camera translation at that moment.
    pub start_offset: Vec2,
}

impl DragState {
    pub fn begin(&mut self, at: ScreenPoint, translate: Vec2) {
        self.clicking = true;
        self.start_offset = at.0.to_vec2() - translate;
    }

    pub fn finish(&mut self) {
        self.clicking = false;
        self.dragging = false;
    }
}

/// The pointer positions the editor tracks: raw and snapped, in both
/// coordinate spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTrack {
    pub screen: ScreenPoint,
    pub canvas: CanvasPoint,
    pub screen_snap: ScreenPoint,
    pub canvas_snap: CanvasPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_apply() {
        let mut m = Modifiers::default();
        assert!(m.apply(Key::Shift, true));
        assert!(m.shift);
        assert!(m.apply(Key::Shift, false));
        assert!(!m.shift);
        assert!(!m.apply(Key::Escape, true));
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DragState::default();
        drag.begin(ScreenPoint::new(100.0, 50.0), Vec2::new(10.0, 5.0));
        assert!(drag.clicking);
        assert!((drag.start_offset.x - 90.0).abs() < f64::EPSILON);
        assert!((drag.start_offset.y - 45.0).abs() < f64::EPSILON);

        drag.dragging = true;
        drag.finish();
        assert!(!drag.clicking);
        assert!(!drag.dragging);
    }
}
