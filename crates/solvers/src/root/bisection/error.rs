use std::error::Error as StdError;

use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur while approximating a root.
#[derive(Debug, Error)]
pub enum Error {
    /// The bound heuristics failed to produce a valid bracketing interval.
    #[error("invalid bounds: {0}")]
    InvalidBounds(#[from] BracketError),

    /// A tolerance setting was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The function rejected a probed value as outside its domain.
    #[error("function domain error at v = {v}")]
    FunctionDomain {
        /// The value that failed to evaluate.
        v: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Wraps a function's own error, recording the probed value.
    pub(super) fn function<E>(v: f64, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::FunctionDomain {
            v,
            source: Box::new(source),
        }
    }
}
