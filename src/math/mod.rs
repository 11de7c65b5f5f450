pub mod angle;

use std::f64::consts::PI;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Arc length subtended by one degree of curve, in the arc definition.
///
/// A D-degree curve turns D degrees of central angle over one full
/// station of arc (100 length units).
pub const ARC_DEFINITION_STATION: f64 = 100.0;

/// Converts degree of curve `d` to radius under the arc definition:
/// `R = (100 * 180/pi) / D`.
///
/// This is the sole source of the radius / degree-of-curve relationship;
/// every downstream computation derives R through it. The caller must
/// ensure `d > 0` — the result is meaningless (infinite or negative)
/// otherwise.
#[must_use]
pub fn radius_from_degree_of_curve(d: f64) -> f64 {
    ARC_DEFINITION_STATION * 180.0 / (PI * d)
}
