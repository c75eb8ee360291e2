//! The editor: pointer and keyboard handling, the modal tool dispatch, and
//! object mutation with undo recording.
//!
//! The editor owns all interactive state but performs no rendering and no
//! I/O. Handlers return [`Request`]s describing the side effects the host
//! should carry out; blocking numeric prompts go through the
//! [`NumericInput`] collaborator so the core stays platform-agnostic.

use crate::calibration::{format_distance, MapCalibration};
use crate::camera::Camera;
use crate::coords::{CanvasPoint, ScreenPoint};
use crate::geometry::Segment;
use crate::input::{DragState, Key, Modifiers, PointerTrack};
use crate::objects::{MapLine, MapPoint, ObjectId, ObjectList};
use crate::settings::Settings;
use crate::snap::{resolve_snap, SnapData, SnapKind};
use crate::tools::{Draft, MapCorner, ToolMode};
use crate::undo::UndoLog;

/// Host-side provider of numeric prompts (elevation entry, scale distance).
///
/// Returning `None` means the user cancelled; the pending action is then
/// discarded.
pub trait NumericInput {
    fn request(&mut self, label: &str, unit: &str) -> Option<f64>;
}

/// Side effects requested from the host after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// The scene changed; repaint.
    Redraw,
    /// Show a status-bar message.
    Status(String),
    /// Clear the status bar.
    ClearStatus,
    /// Show (or move) the pointer tooltip.
    Tooltip { text: String, at: ScreenPoint },
    /// The set of active objects, or the data shown for them, changed.
    SelectionChanged,
    /// The user picked a map corner position during calibration.
    CornerPicked { corner: MapCorner, at: CanvasPoint },
}

/// Interactive map annotation editor.
#[derive(Default)]
pub struct Editor {
    pub camera: Camera,
    pub calibration: MapCalibration,
    pub settings: Settings,
    pub lines: ObjectList<MapLine>,
    pub points: ObjectList<MapPoint>,
    pub mode: ToolMode,
    pub modifiers: Modifiers,
    pub pointer: PointerTrack,
    pub snap: SnapData,
    pub drag: DragState,
    pub draft: Draft,
    pub undo: UndoLog,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover radius in canvas units. The configured radius is in screen
    /// pixels; dividing by the camera scale keeps the on-screen size
    /// constant across zoom levels.
    fn hover_radius(&self) -> f64 {
        self.settings.hover_distance / self.camera.scale
    }

    /// The line topographic points may be placed on: exactly one active
    /// line while no points are active.
    fn topographic_source(&self) -> Option<ObjectId> {
        let active_lines = self.lines.active_ids();
        if active_lines.len() == 1 && self.points.active_ids().is_empty() {
            Some(active_lines[0])
        } else {
            None
        }
    }

    // ----- pointer events ---------------------------------------------

    pub fn pointer_down(&mut self, at: ScreenPoint) -> Vec<Request> {
        self.drag.begin(at, self.camera.translate);
        Vec::new()
    }

    pub fn pointer_move(&mut self, at: ScreenPoint) -> Vec<Request> {
        let mut requests = Vec::new();

        if self.drag.clicking {
            self.drag.dragging = true;
            self.camera.translate = at.0.to_vec2() - self.drag.start_offset;
            requests.push(Request::Redraw);
        }

        self.update_hover(at);
        self.update_draft();
        requests.push(Request::Tooltip {
            text: self.tooltip_text(),
            at,
        });
        requests.push(Request::Redraw);
        requests
    }

    pub fn pointer_up(&mut self, at: ScreenPoint, input: &mut dyn NumericInput) -> Vec<Request> {
        let was_drag = self.drag.dragging;
        self.drag.finish();
        if was_drag {
            // A completed pan is not a click.
            return vec![Request::Redraw];
        }

        self.update_hover(at);
        self.dispatch_click(input)
    }

    /// Zoom one step, anchored at the given screen position.
    pub fn zoom(&mut self, anchor: ScreenPoint, zoom_in: bool) -> Vec<Request> {
        self.camera.zoom_step(anchor, zoom_in);
        vec![Request::Redraw]
    }

    // ----- keyboard events --------------------------------------------

    pub fn key_down(&mut self, key: Key) -> Vec<Request> {
        self.modifiers.apply(key, true);
        Vec::new()
    }

    pub fn key_up(&mut self, key: Key) -> Vec<Request> {
        if self.modifiers.apply(key, false) {
            return Vec::new();
        }

        match key {
            Key::Escape => self.cancel(),
            Key::Delete => self.delete_selection(),
            Key::Char('l') | Key::Char('L') => self.activate_line_tool(),
            Key::Char('p') | Key::Char('P') => self.activate_point_tool(),
            Key::Char('z') | Key::Char('Z') if self.modifiers.ctrl => {
                if self.undo.undo(&mut self.lines, &mut self.points) {
                    vec![Request::SelectionChanged, Request::Redraw]
                } else {
                    Vec::new()
                }
            }
            Key::Char('y') | Key::Char('Y') if self.modifiers.ctrl => {
                if self.undo.redo(&mut self.lines, &mut self.points) {
                    vec![Request::SelectionChanged, Request::Redraw]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    // ----- tool activation --------------------------------------------

    pub fn activate_pointer(&mut self) -> Vec<Request> {
        self.mode = ToolMode::Pointer;
        self.draft.clear();
        vec![Request::ClearStatus, Request::Redraw]
    }

    pub fn activate_line_tool(&mut self) -> Vec<Request> {
        self.mode = ToolMode::PlacingLineP1;
        self.draft.clear();
        vec![
            Request::Status("Click to place the first line point".into()),
            Request::Redraw,
        ]
    }

    pub fn activate_point_tool(&mut self) -> Vec<Request> {
        self.mode = ToolMode::PlacingPoint;
        self.draft.clear();
        vec![
            Request::Status("Click to place a point marker".into()),
            Request::Redraw,
        ]
    }

    /// Activate the topographic tool. If exactly one line is selected (and
    /// no points), start placing on it immediately; otherwise ask the user
    /// to pick a line first.
    pub fn activate_topo_tool(&mut self) -> Vec<Request> {
        self.draft.clear();
        if let Some(source) = self.topographic_source() {
            self.mode = ToolMode::PlacingTopographicPoint { source };
            vec![
                Request::Status("Click on the line to add elevation points".into()),
                Request::Redraw,
            ]
        } else {
            self.mode = ToolMode::SelectingTopographicLine;
            vec![
                Request::Status("Select a line for the topographic profile".into()),
                Request::Redraw,
            ]
        }
    }

    pub fn activate_corner_tool(&mut self, corner: MapCorner) -> Vec<Request> {
        self.mode = ToolMode::PickingCorner(corner);
        self.draft.clear();
        let which = match corner {
            MapCorner::TopLeft => "top-left",
            MapCorner::BottomRight => "bottom-right",
        };
        vec![
            Request::Status(format!("Click the {which} corner of the map")),
            Request::Redraw,
        ]
    }

    pub fn activate_scale_tool(&mut self) -> Vec<Request> {
        self.mode = ToolMode::CalibratingScaleP1;
        self.draft.clear();
        vec![
            Request::Status("Click the first end of a known distance".into()),
            Request::Redraw,
        ]
    }

    /// Cancel the current multi-step action and return to the pointer tool.
    pub fn cancel(&mut self) -> Vec<Request> {
        self.mode = ToolMode::Pointer;
        self.draft.clear();
        vec![Request::ClearStatus, Request::Redraw]
    }

    /// Delete every selected object, recording one undo entry.
    pub fn delete_selection(&mut self) -> Vec<Request> {
        if self.lines.active_ids().is_empty() && self.points.active_ids().is_empty() {
            return Vec::new();
        }
        self.undo.record(&self.lines, &self.points);
        let removed = self.lines.delete_active() + self.points.delete_active();
        log::debug!("deleted {removed} selected objects");
        vec![Request::SelectionChanged, Request::Redraw]
    }

    // ----- internals --------------------------------------------------

    /// Refresh the pointer track, hover flags and snap data for a pointer
    /// position.
    fn update_hover(&mut self, at: ScreenPoint) {
        let canvas = self.camera.screen_to_canvas(at);
        let radius = self.hover_radius();

        let close_lines = self.lines.close_to_point(canvas, radius);
        let close_points = self.points.close_to_point(canvas, radius);

        self.lines.clear_hover();
        self.points.clear_hover();
        self.lines.set_hover(&close_lines);
        self.points.set_hover(&close_points);

        self.snap = resolve_snap(
            at,
            &self.camera,
            &self.points,
            &self.lines,
            self.settings.snap,
        );
        self.pointer = PointerTrack {
            screen: at,
            canvas,
            screen_snap: self.snap.effective_screen,
            canvas_snap: self.snap.effective_canvas,
        };
    }

    /// Update uncommitted geometry so previews follow the cursor.
    fn update_draft(&mut self) {
        match self.mode {
            ToolMode::PlacingLineP2 => {
                if let Some(line) = &mut self.draft.line {
                    line.p2 = self.pointer.canvas_snap;
                }
            }
            ToolMode::PlacingTopographicPoint { source } => {
                self.draft.topo_indicator = self.lines.get(source).map(|line| {
                    Segment::new(self.pointer.canvas, line.segment.project(self.pointer.canvas))
                });
            }
            ToolMode::CalibratingScaleP2 => {
                if let Some(p1) = self.draft.ruler_p1 {
                    self.draft.line = Some(Segment::new(p1, self.pointer.canvas_snap));
                }
            }
            _ => {}
        }
    }

    /// Compose the tooltip: geographic position, then whatever the current
    /// hover or draft adds to it.
    fn tooltip_text(&self) -> String {
        let geo = self.calibration.canvas_to_geographic(self.pointer.canvas_snap);
        let mut text = format!("{} {}", geo.lon_sexagesimal(), geo.lat_sexagesimal());

        if let Some(line) = self.lines.first_hovered() {
            text.push_str(&format!(
                "\nline: {}",
                line.formatted_length(
                    &self.calibration,
                    self.settings.distance_unit,
                    self.settings.distance_digits,
                )
            ));
        }
        if self.points.first_hovered().is_some() {
            text.push_str("\npoint marker");
        }
        if self.snap.kind != SnapKind::None && self.settings.snap {
            text.push_str("\nsnap");
        }
        if let Some(draft) = self.draft.line {
            text.push_str(&format!(
                "\n{}",
                format_distance(
                    self.calibration.metres(draft.length()),
                    self.settings.distance_unit,
                    self.settings.distance_digits,
                )
            ));
        }
        if let Some(indicator) = self.draft.topo_indicator {
            if let ToolMode::PlacingTopographicPoint { source } = self.mode {
                if let Some(line) = self.lines.get(source) {
                    let along = indicator.p2.distance(line.segment.p1);
                    text.push_str(&format!(
                        "\nat {}",
                        format_distance(
                            self.calibration.metres(along),
                            self.settings.distance_unit,
                            self.settings.distance_digits,
                        )
                    ));
                }
            }
        }
        text
    }

    /// Run the click action for the current mode. Uses the snapped pointer
    /// position; `update_hover` has already run for this event.
    fn dispatch_click(&mut self, input: &mut dyn NumericInput) -> Vec<Request> {
        let canvas = self.pointer.canvas_snap;

        match self.mode {
            ToolMode::Pointer => self.selection_click(),
            ToolMode::PlacingLineP1 => {
                self.draft.line = Some(Segment::new(canvas, canvas));
                self.mode = ToolMode::PlacingLineP2;
                vec![
                    Request::Status("Click to place the second line point".into()),
                    Request::Redraw,
                ]
            }
            ToolMode::PlacingLineP2 => {
                let Some(draft) = self.draft.line else {
                    debug_assert!(false, "line draft missing in PlacingLineP2");
                    log::error!("line draft missing; resetting tool");
                    return self.cancel();
                };
                self.undo.record(&self.lines, &self.points);
                let id = self.lines.add(MapLine::from_points(draft.p1, canvas));
                if let Some(line) = self.lines.get_mut(id) {
                    line.state.active = true;
                }
                self.draft.clear();
                self.mode = ToolMode::Pointer;
                vec![
                    Request::SelectionChanged,
                    Request::ClearStatus,
                    Request::Redraw,
                ]
            }
            ToolMode::PlacingPoint => {
                self.undo.record(&self.lines, &self.points);
                let id = self.points.add(MapPoint::at(canvas));
                if let Some(point) = self.points.get_mut(id) {
                    point.state.active = true;
                }
                self.mode = ToolMode::Pointer;
                vec![
                    Request::SelectionChanged,
                    Request::ClearStatus,
                    Request::Redraw,
                ]
            }
            ToolMode::SelectingTopographicLine => {
                // Ordinary selection click, then see if it produced a
                // usable source line.
                let mut requests = self.selection_click();
                match self.topographic_source() {
                    Some(source) => {
                        self.mode = ToolMode::PlacingTopographicPoint { source };
                        requests.push(Request::Status(
                            "Click on the line to add elevation points".into(),
                        ));
                    }
                    None => requests.push(Request::Status(
                        "Select a line for the topographic profile".into(),
                    )),
                }
                requests.push(Request::Redraw);
                requests
            }
            ToolMode::PlacingTopographicPoint { source } => {
                if self.lines.get(source).is_none() {
                    debug_assert!(false, "topographic source line missing");
                    log::error!("topographic source line {source} no longer exists");
                    return self.cancel();
                }
                let Some(elevation) = input.request("Elevation", "m") else {
                    return Vec::new();
                };
                self.undo.record(&self.lines, &self.points);
                // Checked above; the prompt cannot remove the line.
                if let Some(line) = self.lines.get_mut(source) {
                    line.add_topo_point(canvas, elevation);
                }
                // Mode persists so several points can be placed in a row.
                vec![Request::SelectionChanged, Request::Redraw]
            }
            ToolMode::PickingCorner(corner) => {
                self.mode = ToolMode::Pointer;
                vec![
                    Request::CornerPicked { corner, at: canvas },
                    Request::ClearStatus,
                    Request::Redraw,
                ]
            }
            ToolMode::CalibratingScaleP1 => {
                self.draft.ruler_p1 = Some(canvas);
                self.mode = ToolMode::CalibratingScaleP2;
                vec![
                    Request::Status("Click the second end of the known distance".into()),
                    Request::Redraw,
                ]
            }
            ToolMode::CalibratingScaleP2 => {
                let Some(p1) = self.draft.ruler_p1 else {
                    debug_assert!(false, "ruler start missing in CalibratingScaleP2");
                    log::error!("ruler start missing; resetting tool");
                    return self.cancel();
                };
                let pixels = p1.distance(canvas);
                let mut requests = vec![Request::ClearStatus, Request::Redraw];
                if let Some(metres) = input.request("Real distance", "m") {
                    if metres > 0.0 && pixels > 0.0 {
                        self.calibration.one_metre_in_px = pixels / metres;
                        requests.insert(
                            0,
                            Request::Status(format!(
                                "Scale set: one metre is {:.4} px",
                                self.calibration.one_metre_in_px
                            )),
                        );
                    } else {
                        log::warn!("ignoring non-positive scale input ({metres} m over {pixels} px)");
                    }
                }
                self.draft.clear();
                self.mode = ToolMode::Pointer;
                requests
            }
        }
    }

    /// Pointer-tool click: toggle the active flag of every nearby object.
    /// Without shift the previous selection is replaced.
    fn selection_click(&mut self) -> Vec<Request> {
        let canvas = self.pointer.canvas;
        let radius = self.hover_radius();
        let close_lines = self.lines.close_to_point(canvas, radius);
        let close_points = self.points.close_to_point(canvas, radius);

        if !self.modifiers.shift {
            self.lines.clear_active();
            self.points.clear_active();
        }
        for id in &close_lines {
            self.lines.toggle_active(*id);
        }
        for id in &close_points {
            self.points.toggle_active(*id);
        }

        if close_lines.is_empty() && close_points.is_empty() && self.modifiers.shift {
            return Vec::new();
        }
        vec![Request::SelectionChanged, Request::Redraw]
    }
}
