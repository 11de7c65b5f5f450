use crate::error::{AlignisError, Result};
use crate::geometry::CurveParameters;
use crate::math::{angle, radius_from_degree_of_curve, Point2, Vector2};

/// Solves the scalar parameters and tangent points of a horizontal
/// circular curve.
///
/// Inputs are the back and ahead tangent bearings (degrees clockwise
/// from north, any real value), the point of intersection of the
/// tangents, and the degree of curve under the arc definition.
///
/// # Conventions
///
/// - The deflection angle is folded into `[0, 180]`; a raw difference
///   beyond 180 degrees is the supplementary turn the other way.
/// - Azimuth direction vectors are `(sin a, cos a)`: x is east, y is
///   north. PC sits back along the back tangent from PI, PT forward
///   along the ahead tangent.
#[derive(Debug, Clone, Copy)]
pub struct SolveCurve {
    back_bearing: f64,
    ahead_bearing: f64,
    pi: Point2,
    degree_of_curve: f64,
}

impl SolveCurve {
    /// Creates a new curve-solving operation.
    #[must_use]
    pub fn new(back_bearing: f64, ahead_bearing: f64, pi: Point2, degree_of_curve: f64) -> Self {
        Self {
            back_bearing,
            ahead_bearing,
            pi,
            degree_of_curve,
        }
    }

    /// Executes the solve, returning the full parameter bundle.
    ///
    /// # Errors
    ///
    /// - `AlignisError::InvalidBearing` if either bearing is non-finite
    /// - `AlignisError::DegenerateInput` if the degree of curve is not a
    ///   positive finite value (the radius would be undefined)
    pub fn execute(&self) -> Result<CurveParameters> {
        for (name, value) in [
            ("back", self.back_bearing),
            ("ahead", self.ahead_bearing),
        ] {
            if !value.is_finite() {
                return Err(AlignisError::InvalidBearing { name, value });
            }
        }
        if !(self.degree_of_curve.is_finite() && self.degree_of_curve > 0.0) {
            return Err(AlignisError::DegenerateInput(format!(
                "degree of curve must be positive, got {}",
                self.degree_of_curve
            )));
        }

        let delta = angle::deflection_deg(self.back_bearing, self.ahead_bearing);
        let delta_rad = delta.to_radians();
        let half = delta_rad / 2.0;
        let radius = radius_from_degree_of_curve(self.degree_of_curve);

        let arc_length = radius * delta_rad;
        let long_chord = 2.0 * radius * half.sin();
        let tangent = radius * half.tan();
        let external = radius * (1.0 / half.cos() - 1.0);
        let middle_ordinate = radius * (1.0 - half.cos());

        let back_azimuth = self.back_bearing.to_radians();
        let ahead_azimuth = self.ahead_bearing.to_radians();

        let back_dir = Vector2::new(back_azimuth.sin(), back_azimuth.cos());
        let ahead_dir = Vector2::new(ahead_azimuth.sin(), ahead_azimuth.cos());
        let pc = self.pi - back_dir * tangent;
        let pt = self.pi + ahead_dir * tangent;

        Ok(CurveParameters {
            delta,
            radius,
            arc_length,
            long_chord,
            tangent,
            external,
            middle_ordinate,
            back_azimuth,
            ahead_azimuth,
            pc,
            pt,
        })
    }
}
