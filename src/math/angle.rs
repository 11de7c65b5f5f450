/// Bearing and angle helpers.
///
/// Bearing convention: degrees measured clockwise from north, so a
/// north-referenced azimuth `a` has direction `(sin a, cos a)` in the
/// east-x / north-y plane. Math angles (from `atan2`) are radians
/// counterclockwise from east.
use std::f64::consts::TAU;

/// Normalizes an angle in radians into `[0, 2*pi)`.
#[must_use]
pub fn normalize_tau(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_deg(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Returns the deflection between two bearings, folded into `[0, 180]`.
///
/// Curves never deflect more than a straight reversal, so a raw
/// difference beyond 180 degrees wraps to the supplementary turn the
/// other way. The `rem_euclid` step makes the fold correct for bearings
/// outside `[0, 360)`.
#[must_use]
pub fn deflection_deg(back_bearing: f64, ahead_bearing: f64) -> f64 {
    let delta = normalize_deg(ahead_bearing - back_bearing);
    if delta > 180.0 {
        360.0 - delta
    } else {
        delta
    }
}

/// Returns the signed bearing change `(ahead - back)` reduced into
/// `[0, 360)`.
///
/// Values in `(0, 180)` indicate a right-hand (clockwise) turn, values
/// in `(180, 360)` a left-hand turn; exactly 0 or 180 is a degenerate
/// straight or reversal case the caller must reject.
#[must_use]
pub fn signed_deflection_deg(back_bearing: f64, ahead_bearing: f64) -> f64 {
    normalize_deg(ahead_bearing - back_bearing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    #[test]
    fn normalize_tau_wraps_negative() {
        let a = normalize_tau(-PI / 2.0);
        assert!((a - 3.0 * PI / 2.0).abs() < TOL, "a={a}");
    }

    #[test]
    fn normalize_tau_identity_in_range() {
        assert!((normalize_tau(1.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn deflection_folds_reflex() {
        // 350-degree raw difference is really a 10-degree turn the other way.
        assert!((deflection_deg(0.0, 350.0) - 10.0).abs() < TOL);
    }

    #[test]
    fn deflection_handles_unnormalized_bearings() {
        // 450 east of north is just 90.
        assert!((deflection_deg(0.0, 450.0) - 90.0).abs() < TOL);
        assert!((deflection_deg(-30.0, 30.0) - 60.0).abs() < TOL);
    }

    #[test]
    fn signed_deflection_distinguishes_sides() {
        assert!((signed_deflection_deg(0.0, 90.0) - 90.0).abs() < TOL);
        assert!((signed_deflection_deg(0.0, -90.0) - 270.0).abs() < TOL);
    }
}
