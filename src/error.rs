//! Error types for landscape construction and search execution

use thiserror::Error;

/// Errors raised by the optimizer
#[derive(Error, Debug)]
pub enum OptimizationError {
    /// Invalid bounds, resolution, population size or search parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The Lévy-flight rejection loop never produced an in-bounds candidate
    #[error("Sampling error: no in-bounds Lévy flight after {attempts} attempts")]
    Sampling { attempts: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OptimizationError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        OptimizationError::Configuration(msg.into())
    }
}

pub type OptimizationResult<T> = Result<T, OptimizationError>;
