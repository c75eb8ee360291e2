//! Map calibration: canvas-to-geographic mapping and the distance scale.

use crate::coords::{CanvasPoint, GeoPoint};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calibration errors.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("pixels-per-degree factors must be positive, got ({0}, {1})")]
    InvalidDegreeScale(f64, f64),
    #[error("metre scale must be positive, got {0}")]
    InvalidMetreScale(f64),
}

/// Per-map affine calibration between canvas space and geographic space.
///
/// `origin` is the canvas position of a known geographic reference point
/// (`origin_geo`); `px_per_degree` is the canvas-pixel span of one degree on
/// each axis. Canvas y grows downward, so latitude decreases with y.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCalibration {
    /// Canvas position of the geographic reference point.
    pub origin: CanvasPoint,
    /// Geographic coordinates at `origin`.
    pub origin_geo: GeoPoint,
    /// Canvas pixels per geographic degree, per axis.
    pub px_per_degree: Vec2,
    /// Canvas pixels that span one metre on the map.
    pub one_metre_in_px: f64,
}

impl Default for MapCalibration {
    fn default() -> Self {
        Self {
            origin: CanvasPoint::ZERO,
            origin_geo: GeoPoint::default(),
            px_per_degree: Vec2::new(1000.0, 1000.0),
            one_metre_in_px: 1.0,
        }
    }
}

impl MapCalibration {
    /// Map a canvas point to geographic coordinates.
    pub fn canvas_to_geographic(&self, p: CanvasPoint) -> GeoPoint {
        GeoPoint {
            lon: self.origin_geo.lon + (p.x() - self.origin.x()) / self.px_per_degree.x,
            lat: self.origin_geo.lat - (p.y() - self.origin.y()) / self.px_per_degree.y,
        }
    }

    /// Convert a canvas-space distance to metres.
    pub fn metres(&self, canvas_px: f64) -> f64 {
        canvas_px / self.one_metre_in_px
    }

    /// Check the scale factors are usable.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.px_per_degree.x <= 0.0 || self.px_per_degree.y <= 0.0 {
            return Err(CalibrationError::InvalidDegreeScale(
                self.px_per_degree.x,
                self.px_per_degree.y,
            ));
        }
        if self.one_metre_in_px <= 0.0 {
            return Err(CalibrationError::InvalidMetreScale(self.one_metre_in_px));
        }
        Ok(())
    }
}

/// Unit used when displaying measured distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    Metre,
    #[default]
    Kilometre,
    Mile,
    NauticalMile,
    Foot,
    /// Legacy in-game map unit used by some imported maps.
    Cu,
}

impl DistanceUnit {
    /// Multiply metres by this factor to convert to the unit.
    pub fn per_metre(self) -> f64 {
        match self {
            DistanceUnit::Metre => 1.0,
            DistanceUnit::Kilometre => 1.0 / 1000.0,
            DistanceUnit::Mile => 1.0 / 1609.344,
            DistanceUnit::NauticalMile => 1.0 / 1852.0,
            DistanceUnit::Foot => 1.0 / 0.3048,
            DistanceUnit::Cu => 0.236284125751452,
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Metre => "m",
            DistanceUnit::Kilometre => "km",
            DistanceUnit::Mile => "mi",
            DistanceUnit::NauticalMile => "nmi",
            DistanceUnit::Foot => "ft",
            DistanceUnit::Cu => "cu",
        }
    }
}

/// Format a distance in metres using the given unit and digit count.
pub fn format_distance(metres: f64, unit: DistanceUnit, digits: usize) -> String {
    format!(
        "{:.digits$} {}",
        metres * unit.per_metre(),
        unit.label(),
        digits = digits
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_geographic() {
        let cal = MapCalibration {
            origin: CanvasPoint::new(100.0, 200.0),
            origin_geo: GeoPoint::new(-70.0, 18.0),
            px_per_degree: Vec2::new(500.0, 500.0),
            one_metre_in_px: 1.0,
        };

        let geo = cal.canvas_to_geographic(CanvasPoint::new(600.0, 200.0));
        assert!((geo.lon - -69.0).abs() < 1e-12);
        assert!((geo.lat - 18.0).abs() < 1e-12);

        // y grows downward: moving down decreases latitude.
        let geo = cal.canvas_to_geographic(CanvasPoint::new(100.0, 450.0));
        assert!((geo.lat - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_metres_conversion() {
        let cal = MapCalibration {
            one_metre_in_px: 0.25,
            ..Default::default()
        };
        assert!((cal.metres(100.0) - 400.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_scales() {
        let cal = MapCalibration {
            one_metre_in_px: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cal.validate(),
            Err(CalibrationError::InvalidMetreScale(_))
        ));

        let cal = MapCalibration {
            px_per_degree: Vec2::new(-1.0, 100.0),
            ..Default::default()
        };
        assert!(cal.validate().is_err());
        assert!(MapCalibration::default().validate().is_ok());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(1500.0, DistanceUnit::Kilometre, 2), "1.50 km");
        assert_eq!(format_distance(1500.0, DistanceUnit::Metre, 0), "1500 m");
        assert_eq!(format_distance(1852.0, DistanceUnit::NauticalMile, 1), "1.0 nmi");
    }
}
