//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the accessors it needs.
//!
//! # Event traits
//!
//! - [`HasCandidate`] — events that name the candidate being evaluated
//! - [`HasVerdict`] — events that may carry a pass/fail verdict
//! - [`HasBracket`] — events that carry the bracket before the verdict
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use bound_finder_core::Observer;
//! use bound_finder_observers::traits::{CanStopEarly, HasVerdict};
//!
//! /// Stops after a fixed number of passing probes.
//! struct PassLimit {
//!     limit: usize,
//!     passes: usize,
//! }
//!
//! impl<E: HasVerdict, A: CanStopEarly> Observer<E, A> for PassLimit {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.passed() == Some(true) {
//!             self.passes += 1;
//!         }
//!         (self.passes >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use bound_finder_core::{BoundaryProblem, Model};
use bound_finder_solvers::boundary::{self, Bracket};

/// An event that names the candidate it reports on.
pub trait HasCandidate {
    /// Returns the candidate that was evaluated (or attempted).
    fn candidate(&self) -> i64;
}

/// An event that may carry a pass/fail verdict.
pub trait HasVerdict {
    /// Returns the verdict, or `None` when the evaluation errored.
    fn passed(&self) -> Option<bool>;
}

/// An event that carries the bracket as it stood before the verdict.
pub trait HasBracket {
    /// Returns the bracket before this event's verdict was recorded.
    fn bracket(&self) -> Bracket;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

// --- Event impls for boundary::Event ---

impl<M, P> HasCandidate for boundary::Event<'_, M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    fn candidate(&self) -> i64 {
        boundary::Event::candidate(self)
    }
}

impl<M, P> HasVerdict for boundary::Event<'_, M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    fn passed(&self) -> Option<bool> {
        boundary::Event::passed(self)
    }
}

impl<M, P> HasBracket for boundary::Event<'_, M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    fn bracket(&self) -> Bracket {
        boundary::Event::bracket(self)
    }
}

// --- CanStopEarly for boundary::Action ---

impl CanStopEarly for boundary::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use bound_finder_solvers::boundary::{Action, Event, PassFail};

    /// A router stand-in whose runs can fail outright.
    struct Router;

    impl Model for Router {
        type Input = i64;
        type Output = bool;
        type Error = fmt::Error;

        fn call(&self, width: &i64) -> Result<bool, Self::Error> {
            if *width < 0 {
                Err(fmt::Error)
            } else {
                Ok(*width >= 10)
            }
        }
    }

    #[test]
    fn evaluated_events_expose_capabilities() {
        let (input, output) = (12_i64, true);
        let event: Event<'_, Router, PassFail> = Event::Passed {
            iter: 3,
            candidate: 12,
            bracket: Bracket::new(Some(6), None),
            input: &input,
            output: &output,
        };

        assert_eq!(HasCandidate::candidate(&event), 12);
        assert_eq!(HasVerdict::passed(&event), Some(true));
        assert_eq!(HasBracket::bracket(&event), Bracket::new(Some(6), None));
    }

    #[test]
    fn errored_events_have_no_verdict() {
        let error = fmt::Error;
        let event: Event<'_, Router, PassFail> = Event::ModelFailed {
            iter: 1,
            candidate: -1,
            bracket: Bracket::default(),
            error: &error,
        };

        assert_eq!(HasCandidate::candidate(&event), -1);
        assert_eq!(HasVerdict::passed(&event), None);
    }

    #[test]
    fn boundary_action_stops_early() {
        assert_eq!(<Action as CanStopEarly>::stop_early(), Action::StopEarly);
    }
}
