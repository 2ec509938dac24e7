//! Monotonic boundary search over integers.
//!
//! # Algorithm
//!
//! A boundary search finds the smallest (lower bound) or largest (upper bound)
//! integer for which a monotonic predicate passes. It needs only a starting
//! candidate, not a valid bracket:
//!
//! 1. **Probe.** Until both a failing and a passing value are known, the
//!    [`Strategy`] moves the candidate away from the side it has seen:
//!    [`Exponential`] doubles or halves, [`Step`] moves by a fixed amount.
//! 2. **Bisect.** Once bracketed, each candidate is the midpoint between the
//!    last failure and the last pass, rounded toward the failure.
//! 3. **Converge.** When the midpoint lands back on the last failure, the two
//!    are adjacent and the last pass is the boundary.
//!
//! Each candidate is evaluated exactly once, and only two values are kept
//! between evaluations, so memory does not grow with the search range.
//!
//! # When to Use
//!
//! Boundary search is appropriate when:
//! - Each evaluation is expensive, such as a place-and-route run at a given
//!   channel width
//! - The pass/fail outcome is monotonic in the candidate
//! - No valid bounds are known up front
//!
//! # Limitations
//!
//! - **Monotonicity is assumed, not checked**: a non-monotonic predicate
//!   yields a deterministic but unspecified result.
//! - **Sequential**: every candidate depends on the previous verdict, so
//!   evaluations cannot run in parallel. Independent searches can.
//! - **Budgeted**: a search that does not converge within
//!   [`Config::max_iters`] fails with [`Error::MaxIters`] rather than
//!   returning an approximation.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per evaluated candidate:
//!
//! - [`Event::Passed`] / [`Event::Failed`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or verdict)
//!
//! Observers can return [`Action::StopEarly`] to halt with the best pass so
//! far, or [`Action::AssumePass`] / [`Action::AssumeFail`] to override a
//! verdict (useful for recovering from evaluation errors).

mod action;
mod bracket;
mod config;
mod direction;
mod error;
mod evaluate;
mod event;
mod predicate;
mod search;
mod solution;
mod state;
mod strategy;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, Fence};
pub use direction::{Direction, Heading};
pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use event::Event;
pub use predicate::{AtLeast, AtMost, Metric, PassFail, Predicate};
pub use solution::{Solution, Status};
pub use strategy::{Exponential, Step, StepError, Strategy};

use bound_finder_core::{BoundaryProblem, Model, Observer};

use search::search;

/// Finds the smallest passing candidate.
///
/// The observer receives an [`Event`] for each evaluated candidate.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns an error if the config or start is invalid, the budget runs out,
/// a probe overflows, or the model or problem fails and the observer does not
/// recover with an `Assume*` action.
pub fn lower_bound<M, P, S, Obs>(
    model: &M,
    problem: &P,
    strategy: S,
    start: i64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    S: Strategy,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(
        model,
        problem,
        Direction::Lower,
        &strategy,
        start,
        config,
        observer,
    )
}

/// Finds the smallest passing candidate without observer support.
///
/// This is a convenience wrapper around [`lower_bound`] that uses a no-op observer.
///
/// # Errors
///
/// See [`lower_bound`].
pub fn lower_bound_unobserved<M, P, S>(
    model: &M,
    problem: &P,
    strategy: S,
    start: i64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    S: Strategy,
{
    lower_bound(model, problem, strategy, start, config, ())
}

/// Finds the largest passing candidate.
///
/// The observer receives an [`Event`] for each evaluated candidate.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns an error if the config or start is invalid, the budget runs out,
/// a probe overflows, or the model or problem fails and the observer does not
/// recover with an `Assume*` action.
pub fn upper_bound<M, P, S, Obs>(
    model: &M,
    problem: &P,
    strategy: S,
    start: i64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    S: Strategy,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(
        model,
        problem,
        Direction::Upper,
        &strategy,
        start,
        config,
        observer,
    )
}

/// Finds the largest passing candidate without observer support.
///
/// This is a convenience wrapper around [`upper_bound`] that uses a no-op observer.
///
/// # Errors
///
/// See [`upper_bound`].
pub fn upper_bound_unobserved<M, P, S>(
    model: &M,
    problem: &P,
    strategy: S,
    start: i64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    S: Strategy,
{
    upper_bound(model, problem, strategy, start, config, ())
}

/// Finds the smallest value for which `predicate` returns true.
///
/// # Errors
///
/// See [`lower_bound`].
pub fn find_lower_bound<F>(
    strategy: impl Strategy,
    start: i64,
    config: &Config,
    predicate: F,
) -> Result<i64, Error>
where
    F: Fn(i64) -> bool,
{
    lower_bound_unobserved(&Predicate(predicate), &PassFail, strategy, start, config)
        .map(|solution| solution.value)
}

/// Finds the largest value for which `predicate` returns true.
///
/// # Errors
///
/// See [`upper_bound`].
pub fn find_upper_bound<F>(
    strategy: impl Strategy,
    start: i64,
    config: &Config,
    predicate: F,
) -> Result<i64, Error>
where
    F: Fn(i64) -> bool,
{
    upper_bound_unobserved(&Predicate(predicate), &PassFail, strategy, start, config)
        .map(|solution| solution.value)
}
