//! Error types

use thiserror::Error;

/// Polygon construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("polygon must have at least two vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// Configuration loading/validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {name} shape: {source}")]
    InvalidShape {
        name: &'static str,
        #[source]
        source: ShapeError,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}
