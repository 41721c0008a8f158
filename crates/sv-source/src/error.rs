use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("temperature must lie in [0, 2], got {0}")]
    TemperatureOutOfRange(f64),
    #[error("unknown example '{0}'")]
    UnknownExample(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
