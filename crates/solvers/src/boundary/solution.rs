use bound_finder_core::Snapshot;

use super::Bracket;

/// Indicates how a boundary search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Bisection closed on a failing value adjacent to the best pass.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a boundary search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<I, O> {
    /// Final search status.
    pub status: Status,

    /// The boundary value: the best passing candidate found.
    pub value: i64,

    /// The bracket when the search finished.
    pub bracket: Bracket,

    /// Number of candidates evaluated.
    pub iters: usize,

    /// Snapshot at the reported value.
    ///
    /// `None` if the value passed only because an observer assumed it did.
    pub snapshot: Option<Snapshot<I, O>>,
}
