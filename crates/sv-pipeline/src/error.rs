use thiserror::Error;

/// A malformed or degenerate score table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("score table is empty")]
    Empty,
    #[error("negative score {score} for token '{label}'")]
    NegativeScore { label: String, score: f64 },
    #[error("non-finite score for token '{label}'")]
    NonFiniteScore { label: String },
    #[error("scores sum to zero")]
    ZeroTotal,
    #[error("all probability mass was truncated")]
    ZeroTruncatedMass,
}

/// An out-of-range sampling parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("top-k must be at least 1")]
    TopKZero,
    #[error("top-p must lie in [0, 1], got {0}")]
    TopPOutOfRange(f64),
}

/// Errors reported by the sampling pipeline, detected before any
/// transformation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}

pub type Result<T> = std::result::Result<T, SampleError>;
