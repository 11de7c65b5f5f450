use crate::error::{AlignisError, Result};
use crate::geometry::{CenterResult, TurnDirection};
use crate::math::{angle, Point2, Vector2, TOLERANCE};

/// Angular slack, in degrees, around the straight (0) and reversal (180)
/// bearing boundaries. Inside it the turning sense is undefined.
const COLLINEAR_EPS_DEG: f64 = 1e-9;

/// Relative slack allowed when checking the chord against the diameter.
const CHORD_SLACK: f64 = 1e-9;

/// Reconstructs the center of a curve's circle from its tangent points,
/// bearings, and radius, and classifies the turning sense.
///
/// # Conventions
///
/// - Turning sense: `signed = (ahead - back) mod 360`; `(0, 180)` is a
///   right-hand curve, `(180, 360)` a left-hand curve. The boundaries
///   are rejected rather than defaulted.
/// - With `n` the chord normal `(-dy, dx)/|chord|` (90 degrees
///   counterclockwise from PC->PT), the center is `mid + perp * n` for a
///   right-hand curve and `mid - perp * n` for a left-hand curve. This
///   side choice and [`SampleArc`](super::SampleArc)'s sweep rule are a
///   matched pair; changing one without the other bows the arc the
///   wrong way.
#[derive(Debug, Clone, Copy)]
pub struct LocateCenter {
    pc: Point2,
    pt: Point2,
    back_bearing: f64,
    ahead_bearing: f64,
    radius: f64,
}

impl LocateCenter {
    /// Creates a new center-locating operation.
    #[must_use]
    pub fn new(pc: Point2, pt: Point2, back_bearing: f64, ahead_bearing: f64, radius: f64) -> Self {
        Self {
            pc,
            pt,
            back_bearing,
            ahead_bearing,
            radius,
        }
    }

    /// Executes the construction, returning the center and turning sense.
    ///
    /// # Errors
    ///
    /// Returns `AlignisError::DegenerateGeometry` when:
    /// - the radius is not positive
    /// - the signed bearing change is 0 or 180 degrees (straight or
    ///   reversal; no turning sense)
    /// - PC and PT coincide
    /// - the chord is longer than the diameter (PC/PT/R are mutually
    ///   inconsistent)
    pub fn execute(&self) -> Result<CenterResult> {
        if self.radius < TOLERANCE {
            return Err(AlignisError::DegenerateGeometry(
                "radius must be positive".into(),
            ));
        }

        let signed = angle::signed_deflection_deg(self.back_bearing, self.ahead_bearing);
        if signed < COLLINEAR_EPS_DEG
            || signed > 360.0 - COLLINEAR_EPS_DEG
            || (signed - 180.0).abs() < COLLINEAR_EPS_DEG
        {
            return Err(AlignisError::DegenerateGeometry(format!(
                "tangents are collinear (signed deflection {signed} deg); turning sense is undefined"
            )));
        }
        let direction = if signed < 180.0 {
            TurnDirection::RightHand
        } else {
            TurnDirection::LeftHand
        };

        let chord = self.pt - self.pc;
        let chord_len = chord.norm();
        if chord_len < TOLERANCE {
            return Err(AlignisError::DegenerateGeometry(
                "PC and PT coincide; the chord has zero length".into(),
            ));
        }
        let half = chord_len / 2.0;
        if half > self.radius * (1.0 + CHORD_SLACK) {
            return Err(AlignisError::DegenerateGeometry(format!(
                "chord length {chord_len} exceeds diameter {}",
                2.0 * self.radius
            )));
        }

        // Clamp guards half == R up to rounding (semicircular chord).
        let perp = (self.radius * self.radius - half * half).max(0.0).sqrt();
        let mid = Point2::from((self.pc.coords + self.pt.coords) * 0.5);
        let normal = Vector2::new(-chord.y, chord.x) / chord_len;

        let center = match direction {
            TurnDirection::RightHand => mid + normal * perp,
            TurnDirection::LeftHand => mid - normal * perp,
        };

        Ok(CenterResult { center, direction })
    }
}
