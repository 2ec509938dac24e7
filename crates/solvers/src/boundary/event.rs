use bound_finder_core::{BoundaryProblem, Model, Observer};

use super::{Action, Bracket, EvalError};

/// Events emitted by a boundary search, one per evaluated candidate.
///
/// Each event carries the 1-based iteration number and the bracket as it
/// stood when the candidate was proposed, so observers can see how far the
/// search still has to go.
pub enum Event<'a, M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    /// The candidate passed.
    Passed {
        iter: usize,
        candidate: i64,
        bracket: Bracket,
        input: &'a M::Input,
        output: &'a M::Output,
    },

    /// The candidate failed.
    Failed {
        iter: usize,
        candidate: i64,
        bracket: Bracket,
        input: &'a M::Input,
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        iter: usize,
        candidate: i64,
        bracket: Bracket,
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or verdict).
    ProblemFailed {
        iter: usize,
        candidate: i64,
        bracket: Bracket,
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    /// Returns the iteration that produced this event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Passed { iter, .. }
            | Self::Failed { iter, .. }
            | Self::ModelFailed { iter, .. }
            | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Returns the candidate that was evaluated (or attempted).
    #[must_use]
    pub fn candidate(&self) -> i64 {
        match self {
            Self::Passed { candidate, .. }
            | Self::Failed { candidate, .. }
            | Self::ModelFailed { candidate, .. }
            | Self::ProblemFailed { candidate, .. } => *candidate,
        }
    }

    /// Returns the bracket before this candidate's verdict was recorded.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        match self {
            Self::Passed { bracket, .. }
            | Self::Failed { bracket, .. }
            | Self::ModelFailed { bracket, .. }
            | Self::ProblemFailed { bracket, .. } => *bracket,
        }
    }

    /// Returns the verdict, or `None` if the evaluation errored.
    #[must_use]
    pub fn passed(&self) -> Option<bool> {
        match self {
            Self::Passed { .. } => Some(true),
            Self::Failed { .. } => Some(false),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        iter: usize,
        candidate: i64,
        bracket: Bracket,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    iter,
                    candidate,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    iter,
                    candidate,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
