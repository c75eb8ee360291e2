//! Projection geometry for line segments, in canvas space.

use crate::coords::CanvasPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// A line segment between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub p1: CanvasPoint,
    pub p2: CanvasPoint,
}

impl Segment {
    pub fn new(p1: CanvasPoint, p2: CanvasPoint) -> Self {
        Self { p1, p2 }
    }

    /// Length of the segment in canvas units.
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// Direction angle of the segment, in radians.
    pub fn angle(&self) -> f64 {
        let d = self.p2 - self.p1;
        d.y.atan2(d.x)
    }

    /// Orthogonal projection of `p` onto the infinite line through the
    /// segment.
    ///
    /// The result is unclamped: it may fall beyond either endpoint. A
    /// degenerate segment (`p1 == p2`) projects everything onto `p1`.
    pub fn project(&self, p: CanvasPoint) -> CanvasPoint {
        let ab = self.p2 - self.p1;
        let len2 = ab.hypot2();
        if len2 < f64::EPSILON {
            return self.p1;
        }
        let t = (p - self.p1).dot(ab) / len2;
        self.p1 + ab * t
    }

    /// Whether `m` falls inside the rectangle of half-width `radius` around
    /// the segment.
    ///
    /// The rectangle's long sides run parallel to the segment offset by
    /// `radius` on each side; its short sides pass through the endpoints.
    /// Containment is tested with the dot-product parametrization over both
    /// edge directions, and the bounds are strict: a point exactly on the
    /// rectangle boundary is not a hit. A degenerate segment contains
    /// nothing.
    pub fn hit_box_contains(&self, m: CanvasPoint, radius: f64) -> bool {
        let angle = self.angle();
        let offset = kurbo::Vec2::new(
            radius * (FRAC_PI_2 + angle).cos(),
            radius * (FRAC_PI_2 + angle).sin(),
        );

        // Three corners of the oriented box: A and B across the first
        // endpoint, D across the second.
        let corner_a = self.p1 + offset;
        let corner_b = self.p1 - offset;
        let corner_d = self.p2 + offset;

        let am = m - corner_a;
        let ab = corner_b - corner_a;
        let ad = corner_d - corner_a;

        let am_ab = am.dot(ab);
        let ab_ab = ab.hypot2();
        let am_ad = am.dot(ad);
        let ad_ad = ad.hypot2();

        0.0 < am_ab && am_ab < ab_ab && 0.0 < am_ad && am_ad < ad_ad
    }
}
