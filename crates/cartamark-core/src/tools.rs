//! Tool modes and draft geometry for multi-step placements.

use crate::coords::CanvasPoint;
use crate::geometry::Segment;
use crate::objects::ObjectId;

/// Map corner targeted by the corner-calibration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCorner {
    TopLeft,
    BottomRight,
}

/// Toolbar button associated with the current mode, for the external UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolButton {
    #[default]
    Pointer,
    Line,
    Point,
    TopoPoint,
    Calibration,
}

/// The modal editing state. `Pointer` is both the initial state and the
/// resting state after any completed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Selection tool; clicks toggle the active flag of nearby objects.
    #[default]
    Pointer,
    /// Line tool, waiting for the first endpoint.
    PlacingLineP1,
    /// Line tool, first endpoint recorded, waiting for the second.
    PlacingLineP2,
    /// Point tool, waiting for a click.
    PlacingPoint,
    /// Topographic tool, waiting for the user to select a single line.
    SelectingTopographicLine,
    /// Topographic tool, placing elevation points on `source`.
    PlacingTopographicPoint { source: ObjectId },
    /// Map calibration: pick a corner's canvas position.
    PickingCorner(MapCorner),
    /// Scale ruler, waiting for the first endpoint.
    CalibratingScaleP1,
    /// Scale ruler, waiting for the second endpoint.
    CalibratingScaleP2,
}

impl ToolMode {
    /// Which toolbar button should appear active.
    pub fn button(&self) -> ToolButton {
        match self {
            ToolMode::Pointer => ToolButton::Pointer,
            ToolMode::PlacingLineP1 | ToolMode::PlacingLineP2 => ToolButton::Line,
            ToolMode::PlacingPoint => ToolButton::Point,
            ToolMode::SelectingTopographicLine | ToolMode::PlacingTopographicPoint { .. } => {
                ToolButton::TopoPoint
            }
            ToolMode::PickingCorner(_)
            | ToolMode::CalibratingScaleP1
            | ToolMode::CalibratingScaleP2 => ToolButton::Calibration,
        }
    }

    /// Whether the canvas should show a crosshair cursor.
    pub fn crosshair(&self) -> bool {
        !matches!(self, ToolMode::Pointer)
    }
}

/// Uncommitted geometry held while a multi-step placement is in progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct Draft {
    /// Line tool: first endpoint fixed, second follows the cursor.
    pub line: Option<Segment>,
    /// Topographic tool: cursor-to-projection indicator.
    pub topo_indicator: Option<Segment>,
    /// Scale ruler: first endpoint.
    pub ruler_p1: Option<CanvasPoint>,
}

impl Draft {
    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(ToolMode::Pointer.button(), ToolButton::Pointer);
        assert_eq!(ToolMode::PlacingLineP2.button(), ToolButton::Line);
        assert_eq!(
            ToolMode::SelectingTopographicLine.button(),
            ToolButton::TopoPoint
        );
        assert!(!ToolMode::Pointer.crosshair());
        assert!(ToolMode::PlacingPoint.crosshair());
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = Draft {
            line: Some(Segment::default()),
            topo_indicator: None,
            ruler_p1: Some(CanvasPoint::ZERO),
        };
        draft.clear();
        assert!(draft.line.is_none());
        assert!(draft.ruler_p1.is_none());
    }
}
