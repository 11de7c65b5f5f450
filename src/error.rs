use thiserror::Error;

/// Top-level error type for the Alignis curve engine.
///
/// All errors are detected synchronously and are terminal for the
/// invocation that produced them; no partial results are returned.
#[derive(Debug, Error)]
pub enum AlignisError {
    #[error("bearing {name} = {value} is not finite")]
    InvalidBearing { name: &'static str, value: f64 },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Convenience type alias for results using [`AlignisError`].
pub type Result<T> = std::result::Result<T, AlignisError>;
