//! User-facing editor settings.

use serde::{Deserialize, Serialize};

use crate::calibration::DistanceUnit;

/// Editor preferences, persisted between sessions by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the pointer snaps to nearby objects.
    pub snap: bool,
    /// Unit used when formatting measured distances.
    pub distance_unit: DistanceUnit,
    /// Decimal digits shown for formatted distances.
    pub distance_digits: usize,
    /// Hover radius around the pointer, in screen pixels.
    pub hover_distance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snap: true,
            distance_unit: DistanceUnit::Kilometre,
            distance_digits: 2,
            hover_distance: 7.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.snap);
        assert_eq!(settings.distance_unit, DistanceUnit::Kilometre);
        assert_eq!(settings.hover_distance, 7.0);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"snap": false}"#).unwrap();
        assert!(!settings.snap);
        assert_eq!(settings.distance_digits, 2);
    }
}
