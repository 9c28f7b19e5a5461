use thiserror::Error;

/// Top-level error type for web generation.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Errors raised while validating a [`crate::config::WebConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised when a rejection-sampling loop runs out of attempts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("skeleton point sampling infeasible after {attempts} attempts")]
    PointSamplingExhausted { attempts: usize },

    #[error("skeleton generation infeasible after {attempts} attempts")]
    SkeletonExhausted { attempts: usize },
}

/// Convenience type alias for results using [`WebError`].
pub type Result<T> = std::result::Result<T, WebError>;
