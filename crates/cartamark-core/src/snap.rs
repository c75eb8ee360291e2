//! Snap resolution: substituting the raw pointer position with a nearby
//! object's exact position, or its projection onto a nearby line.

use crate::camera::Camera;
use crate::coords::{CanvasPoint, ScreenPoint};
use crate::objects::{MapLine, MapPoint, ObjectId, ObjectList};
use serde::{Deserialize, Serialize};

/// What the effective position snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapKind {
    #[default]
    None,
    /// Snapped to a hovered point marker's exact position.
    Point,
    /// Snapped to the orthogonal projection onto a hovered line.
    Line,
}

/// Result of resolving the pointer position against the hovered objects.
///
/// The raw position is kept alongside the effective one: tools work with the
/// effective position, anything needing the true cursor location reads raw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapData {
    pub raw_screen: ScreenPoint,
    pub raw_canvas: CanvasPoint,
    pub effective_screen: ScreenPoint,
    pub effective_canvas: CanvasPoint,
    pub kind: SnapKind,
    /// The object snapped onto, when `kind` is not `None`.
    pub target: Option<ObjectId>,
}

impl SnapData {
    pub fn is_snapped(&self) -> bool {
        self.kind != SnapKind::None
    }
}

/// Resolve the effective pointer position from the current hover flags.
///
/// Priority is strict: a hovered point always wins over a hovered line;
/// within a type the first hovered object in registration order is used.
/// When `enabled` is false the target and kind are still reported (for
/// tooltips) but the effective position equals the raw position.
pub fn resolve_snap(
    raw: ScreenPoint,
    camera: &Camera,
    points: &ObjectList<MapPoint>,
    lines: &ObjectList<MapLine>,
    enabled: bool,
) -> SnapData {
    let raw_canvas = camera.screen_to_canvas(raw);

    let mut data = SnapData {
        raw_screen: raw,
        raw_canvas,
        effective_screen: raw,
        effective_canvas: raw_canvas,
        kind: SnapKind::None,
        target: None,
    };

    let snapped_canvas = if let Some(point) = points.first_hovered() {
        data.kind = SnapKind::Point;
        data.target = Some(point.id);
        Some(point.position)
    } else if let Some(line) = lines.first_hovered() {
        data.kind = SnapKind::Line;
        data.target = Some(line.id);
        Some(line.segment.project(raw_canvas))
    } else {
        None
    };

    if enabled {
        if let Some(canvas) = snapped_canvas {
            data.effective_canvas = canvas;
            data.effective_screen = camera.canvas_to_screen(canvas);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Camera, ObjectList<MapPoint>, ObjectList<MapLine>) {
        (Camera::new(), ObjectList::new(), ObjectList::new())
    }

    #[test]
    fn test_no_hover_means_no_snap() {
        let (camera, points, lines) = setup();
        let data = resolve_snap(ScreenPoint::new(5.0, 5.0), &camera, &points, &lines, true);
        assert_eq!(data.kind, SnapKind::None);
        assert_eq!(data.effective_screen, data.raw_screen);
        assert!(data.target.is_none());
    }

    #[test]
    fn test_snap_to_hovered_point() {
        let (camera, mut points, lines) = setup();
        let id = points.add(MapPoint::at(CanvasPoint::new(10.0, 10.0)));
        points.set_hover(&[id]);

        let data = resolve_snap(ScreenPoint::new(12.0, 9.0), &camera, &points, &lines, true);
        assert_eq!(data.kind, SnapKind::Point);
        assert_eq!(data.target, Some(id));
        assert_eq!(data.effective_canvas, CanvasPoint::new(10.0, 10.0));
        // Raw position still reported untouched.
        assert_eq!(data.raw_screen, ScreenPoint::new(12.0, 9.0));
    }

    #[test]
    fn test_snap_to_hovered_line_projects() {
        let (camera, points, mut lines) = setup();
        let id = lines.add(MapLine::from_points(
            CanvasPoint::ZERO,
            CanvasPoint::new(10.0, 0.0),
        ));
        lines.set_hover(&[id]);

        let data = resolve_snap(ScreenPoint::new(4.0, 3.0), &camera, &points, &lines, true);
        assert_eq!(data.kind, SnapKind::Line);
        assert!((data.effective_canvas.x() - 4.0).abs() < 1e-12);
        assert!(data.effective_canvas.y().abs() < 1e-12);
    }

    #[test]
    fn test_point_beats_line() {
        let (camera, mut points, mut lines) = setup();
        let line_id = lines.add(MapLine::from_points(
            CanvasPoint::ZERO,
            CanvasPoint::new(10.0, 0.0),
        ));
        let point_id = points.add(MapPoint::at(CanvasPoint::new(5.0, 1.0)));
        lines.set_hover(&[line_id]);
        points.set_hover(&[point_id]);

        let data = resolve_snap(ScreenPoint::new(5.0, 0.5), &camera, &points, &lines, true);
        assert_eq!(data.kind, SnapKind::Point);
        assert_eq!(data.target, Some(point_id));
        assert_eq!(data.effective_canvas, CanvasPoint::new(5.0, 1.0));
    }

    #[test]
    fn test_disabled_snap_still_reports_target() {
        let (camera, mut points, lines) = setup();
        let id = points.add(MapPoint::at(CanvasPoint::new(10.0, 10.0)));
        points.set_hover(&[id]);

        let raw = ScreenPoint::new(12.0, 9.0);
        let data = resolve_snap(raw, &camera, &points, &lines, false);
        assert_eq!(data.kind, SnapKind::Point);
        assert_eq!(data.target, Some(id));
        assert_eq!(data.effective_screen, raw);
        assert_eq!(data.effective_canvas, camera.screen_to_canvas(raw));
    }

    #[test]
    fn test_snap_respects_camera_transform() {
        let (mut camera, mut points, lines) = setup();
        camera.scale = 2.0;
        camera.translate = kurbo::Vec2::new(100.0, 50.0);

        let id = points.add(MapPoint::at(CanvasPoint::new(10.0, 10.0)));
        points.set_hover(&[id]);

        let data = resolve_snap(ScreenPoint::new(121.0, 69.0), &camera, &points, &lines, true);
        assert_eq!(data.effective_canvas, CanvasPoint::new(10.0, 10.0));
        // Effective screen position is the point mapped back through the camera.
        assert!((data.effective_screen.x() - 120.0).abs() < 1e-12);
        assert!((data.effective_screen.y() - 70.0).abs() < 1e-12);
    }
}
