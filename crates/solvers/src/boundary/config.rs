use thiserror::Error;

use super::Direction;

/// The default iteration budget.
pub const DEFAULT_MAX_ITERS: usize = 50;

/// A caller-supplied value assumed to fail or pass.
///
/// Fences seed the search bracket. A known-bad fence gives bisection a
/// failing side before any failure is observed, and a known-good fence caps
/// how far probing may travel before any pass is observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fence {
    /// Use the search direction's default fence.
    #[default]
    Default,

    /// No fence: the search probes without limit on this side.
    Unbounded,

    /// A fence at a specific value.
    At(i64),
}

impl Fence {
    /// Resolves the fence against a direction's default.
    #[must_use]
    pub fn resolve(self, default: Option<i64>) -> Option<i64> {
        match self {
            Self::Default => default,
            Self::Unbounded => None,
            Self::At(value) => Some(value),
        }
    }
}

impl From<i64> for Fence {
    fn from(value: i64) -> Self {
        Self::At(value)
    }
}

/// Configuration for a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    known_bad: Fence,
    known_good: Fence,
}

/// Errors that can occur when validating a boundary search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be positive")]
    ZeroMaxIters,

    #[error("known-bad fence {known_bad} is not on the failing side of known-good fence {known_good}")]
    FencesOutOfOrder { known_bad: i64, known_good: i64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            known_bad: Fence::Default,
            known_good: Fence::Default,
        }
    }
}

impl Config {
    /// Creates a config with the given iteration budget and default fences.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        Ok(Self {
            max_iters,
            ..Self::default()
        })
    }

    /// Returns this config with the known-bad fence replaced.
    ///
    /// The fence is assumed to fail and is never evaluated, so a search must
    /// start strictly on the passing side of it.
    #[must_use]
    pub fn with_known_bad(mut self, fence: impl Into<Fence>) -> Self {
        self.known_bad = fence.into();
        self
    }

    /// Returns this config with the known-good fence replaced.
    #[must_use]
    pub fn with_known_good(mut self, fence: impl Into<Fence>) -> Self {
        self.known_good = fence.into();
        self
    }

    /// Returns the iteration budget.
    ///
    /// Every pass through the search loop counts, including the final one that
    /// detects convergence, so a search may evaluate at most `max_iters - 1`
    /// candidates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the known-bad fence as configured.
    #[must_use]
    pub fn known_bad(&self) -> Fence {
        self.known_bad
    }

    /// Returns the known-good fence as configured.
    #[must_use]
    pub fn known_good(&self) -> Fence {
        self.known_good
    }

    /// Resolves both fences for a direction and checks their order.
    ///
    /// Returns `(known_bad, known_good)`.
    ///
    /// # Errors
    ///
    /// Returns an error if both fences are set and `known_bad` is not strictly
    /// on the failing side of `known_good`.
    pub fn fences(&self, direction: Direction) -> Result<(Option<i64>, Option<i64>), ConfigError> {
        let known_bad = self.known_bad.resolve(direction.default_known_bad());
        let known_good = self.known_good.resolve(direction.default_known_good());

        if let (Some(bad), Some(good)) = (known_bad, known_good)
            && !direction.fences_ordered(bad, good)
        {
            return Err(ConfigError::FencesOutOfOrder {
                known_bad: bad,
                known_good: good,
            });
        }

        Ok((known_bad, known_good))
    }
}
