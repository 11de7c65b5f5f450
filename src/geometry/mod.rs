mod curve_parameters;
mod turn;

pub use curve_parameters::CurveParameters;
pub use turn::{CenterResult, TurnDirection};
