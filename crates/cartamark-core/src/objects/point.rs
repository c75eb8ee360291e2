//! Map point marker entity.

use super::{MapObject, ObjectId, ObjectState, SerializableColor};
use crate::coords::CanvasPoint;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default marker radius for new points.
const DEFAULT_POINT_WIDTH: f64 = 4.0;

/// A point marker placed on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPoint {
    pub(crate) id: ObjectId,
    pub position: CanvasPoint,
    pub color: SerializableColor,
    pub width: f64,
    #[serde(default)]
    pub state: ObjectState,
}

impl MapPoint {
    /// Create a marker at the given canvas position with default styling.
    pub fn at(position: CanvasPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            color: SerializableColor::red(),
            width: DEFAULT_POINT_WIDTH,
            state: ObjectState::default(),
        }
    }
}

impl MapObject for MapPoint {
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
        self.position.distance(p) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_is_distance_based() {
        let point = MapPoint::at(CanvasPoint::new(10.0, 10.0));
        assert!(point.is_close_to(CanvasPoint::new(13.0, 14.0), 5.0));
        // Exactly at the radius still counts.
        assert!(point.is_close_to(CanvasPoint::new(15.0, 10.0), 5.0));
        assert!(!point.is_close_to(CanvasPoint::new(16.0, 10.0), 5.0));
    }
}
