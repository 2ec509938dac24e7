//! Early stopping on a narrow bracket.

use bound_finder_core::Observer;
use bound_finder_solvers::boundary::Bracket;

use crate::traits::{CanStopEarly, HasBracket, HasCandidate, HasVerdict};

/// Stops a search once the bracket is within a tolerance.
///
/// After each verdict, the observer applies it to the event's bracket and
/// requests an early stop once some candidate has passed and `|good - bad|`
/// is at most `tolerance`. The search then returns its best pass, which may
/// lie up to `tolerance - 1` past the true boundary.
///
/// A known-good fence alone never triggers a stop: the observer waits for a
/// real pass, so the search always has a value to return. Use a fresh
/// observer for each search.
///
/// Useful when every evaluation is expensive and a near-tight answer will do.
/// A tolerance of 1 never changes the value found, since adjacent values
/// already end the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapTolerance {
    tolerance: u64,
    seen_pass: bool,
}

impl GapTolerance {
    /// Creates an observer that stops once the gap is at most `tolerance`.
    #[must_use]
    pub fn new(tolerance: u64) -> Self {
        Self {
            tolerance,
            seen_pass: false,
        }
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    /// Returns true if `bracket` has both sides within the tolerance.
    #[must_use]
    pub fn is_within(&self, bracket: Bracket) -> bool {
        bracket.gap().is_some_and(|gap| gap <= self.tolerance)
    }
}

impl<E, A> Observer<E, A> for GapTolerance
where
    E: HasCandidate + HasVerdict + HasBracket,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let bracket = bracket_after(event)?;
        self.seen_pass |= event.passed() == Some(true);
        (self.seen_pass && self.is_within(bracket)).then(A::stop_early)
    }
}

/// Returns the bracket with the event's verdict applied.
///
/// Errored evaluations have no verdict, so there is nothing to apply.
fn bracket_after<E>(event: &E) -> Option<Bracket>
where
    E: HasCandidate + HasVerdict + HasBracket,
{
    let mut bracket = event.bracket();
    if event.passed()? {
        bracket.good = Some(event.candidate());
    } else {
        bracket.bad = Some(event.candidate());
    }
    Some(bracket)
}
