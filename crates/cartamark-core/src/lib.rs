//! CartaMark Core Library
//!
//! Platform-agnostic interaction engine for the CartaMark map annotation
//! tool: coordinate transforms, proximity queries, snapping, calibration and
//! the modal tool state machine.

pub mod calibration;
pub mod camera;
pub mod coords;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod objects;
pub mod settings;
pub mod snap;
pub mod tools;
pub mod undo;

pub use calibration::{format_distance, CalibrationError, DistanceUnit, MapCalibration};
pub use camera::{Camera, ZOOM_STEP_MULTIPLIER};
pub use coords::{decimal_to_sexagesimal, CanvasPoint, GeoPoint, ScreenPoint};
pub use editor::{Editor, NumericInput, Request};
pub use geometry::Segment;
pub use input::{DragState, Key, Modifiers, PointerTrack};
pub use objects::{
    MapLine, MapObject, MapPoint, ObjectId, ObjectList, ObjectState, SerializableColor,
    TopographicProfilePoint,
};
pub use settings::Settings;
pub use snap::{resolve_snap, SnapData, SnapKind};
pub use tools::{Draft, MapCorner, ToolButton, ToolMode};
pub use undo::UndoLog;
