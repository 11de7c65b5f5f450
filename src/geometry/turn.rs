use std::fmt;

use crate::math::Point2;

/// Turning sense of a curve, as seen sweeping from PC to PT.
///
/// Represented as a closed enum so every consumer must branch
/// exhaustively; there is no "unknown" direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Right-hand curve (RHC): the bearing increases, a clockwise turn
    /// on the compass.
    RightHand,
    /// Left-hand curve (LHC): the bearing decreases, a counterclockwise
    /// turn on the compass.
    LeftHand,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RightHand => write!(f, "RHC"),
            Self::LeftHand => write!(f, "LHC"),
        }
    }
}

/// Result of locating a curve's circle center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterResult {
    /// Center of the circle through PC and PT.
    pub center: Point2,
    /// Turning sense of the curve.
    pub direction: TurnDirection,
}
