mod locate_center;
mod sample_arc;
mod solve_curve;

pub use locate_center::LocateCenter;
pub use sample_arc::{SampleArc, DEFAULT_SAMPLE_COUNT};
pub use solve_curve::SolveCurve;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    /// Circumcenter of the triangle `(a, b, c)`.
    fn circumcenter(a: Point2, b: Point2, c: Point2) -> Point2 {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;
        let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        Point2::new(ux, uy)
    }

    #[test]
    fn pipeline_circle_refit_recovers_center_and_radius() {
        // Solve -> locate -> sample, then fit a circle through three
        // well-separated samples; it must agree with the located circle.
        let params = SolveCurve::new(35.0, 118.0, Point2::new(250.0, -40.0), 4.0)
            .execute()
            .unwrap();
        let located = LocateCenter::new(
            params.pc,
            params.pt,
            35.0,
            118.0,
            params.radius,
        )
        .execute()
        .unwrap();
        let arc = SampleArc::new(
            located.center,
            params.pc,
            params.pt,
            params.radius,
            located.direction,
        )
        .execute()
        .unwrap();

        let fitted = circumcenter(arc[5], arc[50], arc[92]);
        assert!(
            (fitted - located.center).norm() < 1e-6 * params.radius,
            "fitted center {fitted:?} vs located {:?}",
            located.center
        );
        let fitted_radius = (arc[5] - fitted).norm();
        assert!(
            (fitted_radius - params.radius).abs() < 1e-6 * params.radius,
            "fitted radius {fitted_radius} vs {}",
            params.radius
        );
    }

    #[test]
    fn pipeline_long_chord_matches_sampled_endpoints() {
        let params = SolveCurve::new(300.0, 250.0, Point2::new(12.0, 7.0), 8.0)
            .execute()
            .unwrap();
        let located = LocateCenter::new(
            params.pc,
            params.pt,
            300.0,
            250.0,
            params.radius,
        )
        .execute()
        .unwrap();
        let arc = SampleArc::new(
            located.center,
            params.pc,
            params.pt,
            params.radius,
            located.direction,
        )
        .execute()
        .unwrap();

        let first = arc.first().copied().unwrap();
        let last = arc.last().copied().unwrap();
        let chord = (last - first).norm();
        assert!(
            (chord - params.long_chord).abs() < 1e-9 * params.radius,
            "chord={chord} long_chord={}",
            params.long_chord
        );
    }
}
