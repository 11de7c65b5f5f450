use crate::math::Point2;

/// Scalar parameters and tangent points of a horizontal circular curve.
///
/// All fields are derived deterministically from the solver inputs and
/// share one consistent length unit; angles are degrees unless the field
/// name says azimuth (radians). The bundle is a plain value with no
/// independently mutable parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Deflection angle between the tangents, in degrees, in `[0, 180]`.
    pub delta: f64,
    /// Curve radius.
    pub radius: f64,
    /// Arc length from PC to PT.
    pub arc_length: f64,
    /// Long chord: straight-line distance from PC to PT.
    pub long_chord: f64,
    /// Tangent length: distance from PI to PC (and from PI to PT).
    pub tangent: f64,
    /// External distance: from PI to the midpoint of the arc.
    pub external: f64,
    /// Middle ordinate: from the chord midpoint to the arc midpoint.
    pub middle_ordinate: f64,
    /// Back tangent azimuth, in radians.
    pub back_azimuth: f64,
    /// Ahead tangent azimuth, in radians.
    pub ahead_azimuth: f64,
    /// Point of curvature: where the curve leaves the back tangent.
    pub pc: Point2,
    /// Point of tangency: where the curve meets the ahead tangent.
    pub pt: Point2,
}
