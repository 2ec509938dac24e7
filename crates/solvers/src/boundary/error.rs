use std::error::Error as StdError;

use thiserror::Error;

use super::{Bracket, ConfigError, EvalError};

/// Errors that can occur during a boundary search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("start value {start} is not on the passing side of the known-bad fence {known_bad}")]
    InvalidStart { start: i64, known_bad: i64 },

    /// The iteration budget ran out before the boundary was found.
    ///
    /// Retry with a larger budget, or with fences taken from `bracket`.
    #[error("maximum number of iterations ({max_iters}) reached")]
    MaxIters { max_iters: usize, bracket: Bracket },

    #[error("next candidate after {value} does not fit in an i64")]
    Overflow { value: i64 },

    #[error("known-good value {value} failed evaluation")]
    KnownGoodFailed { value: i64 },

    #[error("search stopped before any candidate passed")]
    NoPassingValue,

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
