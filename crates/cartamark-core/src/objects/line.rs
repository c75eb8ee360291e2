//! Map line entity and its topographic profile points.

use super::{MapObject, ObjectId, ObjectState, SerializableColor};
use crate::calibration::{format_distance, DistanceUnit, MapCalibration};
use crate::coords::CanvasPoint;
use crate::geometry::Segment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default stroke width for new lines.
const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// A measurement point along a [`MapLine`], carrying a user-entered
/// elevation. Used to build an elevation-vs-distance profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopographicProfilePoint {
    /// Position on the owning line, in canvas coordinates.
    pub position: CanvasPoint,
    /// Elevation in metres.
    pub elevation: f64,
}

impl TopographicProfilePoint {
    /// Create a profile point by projecting `p` onto the owning line.
    pub fn from_canvas_point(line: &Segment, p: CanvasPoint, elevation: f64) -> Self {
        Self {
            position: line.project(p),
            elevation,
        }
    }

    /// Distance along the line from its first endpoint, in canvas units.
    pub fn along_distance(&self, line: &Segment) -> f64 {
        self.position.distance(line.p1)
    }
}

/// A line segment drawn on the map, with visual attributes and interaction
/// state. Owns its topographic profile points in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLine {
    pub(crate) id: ObjectId,
    pub segment: Segment,
    pub color: SerializableColor,
    pub width: f64,
    #[serde(default)]
    pub state: ObjectState,
    #[serde(default)]
    pub topo_points: Vec<TopographicProfilePoint>,
}

impl MapLine {
    /// Create a line between two canvas points with default styling.
    pub fn from_points(p1: CanvasPoint, p2: CanvasPoint) -> Self {
        Self::from_segment(Segment::new(p1, p2))
    }

    pub fn from_segment(segment: Segment) -> Self {
        Self {
            id: Uuid::new_v4(),
            segment,
            color: SerializableColor::red(),
            width: DEFAULT_LINE_WIDTH,
            state: ObjectState::default(),
            topo_points: Vec::new(),
        }
    }

    /// Length of the line in metres, per the map calibration.
    pub fn length_metres(&self, calibration: &MapCalibration) -> f64 {
        calibration.metres(self.segment.length())
    }

    /// Length formatted in the configured display unit.
    pub fn formatted_length(
        &self,
        calibration: &MapCalibration,
        unit: DistanceUnit,
        digits: usize,
    ) -> String {
        format_distance(self.length_metres(calibration), unit, digits)
    }

    /// Append a topographic profile point projected onto this line.
    pub fn add_topo_point(&mut self, p: CanvasPoint, elevation: f64) -> &TopographicProfilePoint {
        let point = TopographicProfilePoint::from_canvas_point(&self.segment, p, elevation);
        self.topo_points.push(point);
        self.topo_points.last().expect("just pushed")
    }
}

impl MapObject for MapLine {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn state(&self) -> &ObjectState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ObjectState {
        &mut self.state
    }

    fn is_close_to(&self, p: CanvasPoint, radius: f64) -> bool {
        self.segment.hit_box_contains(p, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_metres() {
        let cal = MapCalibration {
            one_metre_in_px: 2.0,
            ..Default::default()
        };
        let line = MapLine::from_points(CanvasPoint::ZERO, CanvasPoint::new(100.0, 0.0));
        assert!((line.length_metres(&cal) - 50.0).abs() < 1e-12);
        assert_eq!(line.formatted_length(&cal, DistanceUnit::Metre, 1), "50.0 m");
    }

    #[test]
    fn test_close_to_uses_hit_box() {
        let line = MapLine::from_points(CanvasPoint::ZERO, CanvasPoint::new(10.0, 0.0));
        assert!(line.is_close_to(CanvasPoint::new(5.0, 2.0), 5.0));
        assert!(!line.is_close_to(CanvasPoint::new(15.0, 0.0), 5.0));
    }

    #[test]
    fn test_topo_point_projected_onto_line() {
        let mut line = MapLine::from_points(CanvasPoint::ZERO, CanvasPoint::new(10.0, 0.0));
        let p = line.add_topo_point(CanvasPoint::new(4.0, 3.0), 1250.0);
        assert!((p.position.x() - 4.0).abs() < 1e-12);
        assert!(p.position.y().abs() < 1e-12);
        assert!((p.elevation - 1250.0).abs() < f64::EPSILON);

        let along = line.topo_points[0].along_distance(&line.segment);
        assert!((along - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_topo_points_keep_insertion_order() {
        let mut line = MapLine::from_points(CanvasPoint::ZERO, CanvasPoint::new(10.0, 0.0));
        line.add_topo_point(CanvasPoint::new(8.0, 0.0), 10.0);
        line.add_topo_point(CanvasPoint::new(2.0, 0.0), 20.0);

        assert!((line.topo_points[0].position.x() - 8.0).abs() < 1e-12);
        assert!((line.topo_points[1].position.x() - 2.0).abs() < 1e-12);
    }
}
