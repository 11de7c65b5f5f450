use std::f64::consts::TAU;

use crate::error::{AlignisError, Result};
use crate::geometry::TurnDirection;
use crate::math::{angle, Point2, Vector2, TOLERANCE};

/// Default number of points sampled along an arc.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Samples an ordered polyline along a curve's arc, from PC to PT.
///
/// Endpoint angles are taken with `atan2` relative to the center and
/// normalized into `[0, 2*pi)`; one endpoint is then shifted by a full
/// turn, when needed, so that interpolation sweeps monotonically in the
/// sense implied by the turning direction. With the center-side
/// convention of [`LocateCenter`](super::LocateCenter), a right-hand
/// curve advances with increasing math angle in the east-x / north-y
/// plane and a left-hand curve with decreasing math angle; the smallest
/// adjustment is applied, which keeps the swept gap under a full turn.
///
/// Coincident PC and PT produce `count` identical points — a valid
/// trivial arc, not an error.
#[derive(Debug, Clone, Copy)]
pub struct SampleArc {
    center: Point2,
    pc: Point2,
    pt: Point2,
    radius: f64,
    direction: TurnDirection,
    count: usize,
}

impl SampleArc {
    /// Creates a new arc-sampling operation with the default count.
    #[must_use]
    pub fn new(
        center: Point2,
        pc: Point2,
        pt: Point2,
        radius: f64,
        direction: TurnDirection,
    ) -> Self {
        Self {
            center,
            pc,
            pt,
            radius,
            direction,
            count: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Sets the number of samples (inclusive of both endpoints).
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Executes the sampling, returning `count` points from PC to PT.
    ///
    /// # Errors
    ///
    /// - `AlignisError::DegenerateInput` if `count < 2`
    /// - `AlignisError::DegenerateGeometry` if the radius is not positive
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.count < 2 {
            return Err(AlignisError::DegenerateInput(format!(
                "sample count must be at least 2, got {}",
                self.count
            )));
        }
        if self.radius < TOLERANCE {
            return Err(AlignisError::DegenerateGeometry(
                "radius must be positive".into(),
            ));
        }

        let to_pc = self.pc - self.center;
        let to_pt = self.pt - self.center;
        let start = angle::normalize_tau(to_pc.y.atan2(to_pc.x));
        let end = angle::normalize_tau(to_pt.y.atan2(to_pt.x));

        let (start, end) = match self.direction {
            TurnDirection::RightHand if end < start => (start, end + TAU),
            TurnDirection::LeftHand if start < end => (start + TAU, end),
            _ => (start, end),
        };

        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / (self.count - 1) as f64;
        let mut points = Vec::with_capacity(self.count);
        for i in 0..self.count {
            #[allow(clippy::cast_precision_loss)]
            let a = start + step * i as f64;
            points.push(self.center + Vector2::new(a.cos(), a.sin()) * self.radius);
        }
        Ok(points)
    }
}
