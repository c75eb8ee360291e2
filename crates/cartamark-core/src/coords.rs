//! Coordinate spaces used by the editor.
//!
//! Screen and canvas coordinates are distinct newtypes so that the camera is
//! the only conversion path between them; geographic coordinates are derived
//! from canvas coordinates through the map calibration.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in raw screen pixels, as reported by the pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint(pub Point);

/// A point in canvas (world) space, where map objects live.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint(pub Point);

macro_rules! point_space {
    ($name:ident) => {
        impl $name {
            pub const ZERO: Self = Self(Point::ZERO);

            pub fn new(x: f64, y: f64) -> Self {
                Self(Point::new(x, y))
            }

            pub fn x(self) -> f64 {
                self.0.x
            }

            pub fn y(self) -> f64 {
                self.0.y
            }

            /// Euclidean distance to another point in the same space.
            pub fn distance(self, other: Self) -> f64 {
                self.0.distance(other.0)
            }
        }

        impl Sub for $name {
            type Output = Vec2;

            fn sub(self, rhs: Self) -> Vec2 {
                self.0 - rhs.0
            }
        }

        impl Add<Vec2> for $name {
            type Output = Self;

            fn add(self, rhs: Vec2) -> Self {
                Self(self.0 + rhs)
            }
        }

        impl Sub<Vec2> for $name {
            type Output = Self;

            fn sub(self, rhs: Vec2) -> Self {
                Self(self.0 - rhs)
            }
        }

        impl From<$name> for Point {
            fn from(p: $name) -> Point {
                p.0
            }
        }
    };
}

point_space!(ScreenPoint);
point_space!(CanvasPoint);

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude formatted as degrees/minutes/seconds.
    pub fn lon_sexagesimal(&self) -> String {
        decimal_to_sexagesimal(self.lon)
    }

    /// Latitude formatted as degrees/minutes/seconds.
    pub fn lat_sexagesimal(&self) -> String {
        decimal_to_sexagesimal(self.lat)
    }
}

/// Convert a decimal-degree value to a `D°M'S''` sexagesimal string.
///
/// Degrees truncate toward zero, minutes come from the fractional remainder
/// and seconds are rounded to the nearest whole unit; negative values carry a
/// leading sign.
pub fn decimal_to_sexagesimal(dec: f64) -> String {
    let x = dec.abs();
    let minutes = (x - x.floor()) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;
    let sign = if dec < 0.0 { "-" } else { "" };
    format!("{sign}{}°{}'{:.0}''", x.floor(), minutes.floor(), seconds)
}
