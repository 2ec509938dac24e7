use bound_finder_core::{BoundaryProblem, Model, Observer};
use tracing::{debug, trace};

use super::{
    Action, Config, Direction, Error, Event, Solution, Strategy, evaluate::evaluate,
    solution::Status, state::State,
};

/// Core boundary search loop shared by lower- and upper-bound searches.
///
/// Each pass through the loop either detects convergence or evaluates exactly
/// one candidate. A candidate equal to the last failure, once something has
/// passed, means bisection has closed the bracket and the best pass is the
/// boundary.
pub(super) fn search<M, P, S, Obs>(
    model: &M,
    problem: &P,
    direction: Direction,
    strategy: &S,
    start: i64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    S: Strategy,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut state = State::new(direction, config, start)?;
    let mut candidate = start;

    loop {
        if let Err(error) = state.begin_iteration() {
            debug!(?direction, %error, bracket = ?state.bracket(), "boundary search gave up");
            return Err(error);
        }
        let iter = state.iteration();

        if state.is_fixed_point(candidate) {
            let solution = state.into_solution(Status::Converged, iter - 1)?;
            debug!(
                ?direction,
                value = solution.value,
                iters = solution.iters,
                "boundary search converged"
            );
            return Ok(solution);
        }

        let flow = eval_and_observe(model, problem, &mut state, candidate, &mut observer)?;

        candidate = match flow {
            Flow::Continue { passed: true } => {
                trace!(?direction, iter, candidate, "candidate passed");
                state.next_after_good(candidate, strategy)?
            }
            Flow::Continue { passed: false } => {
                trace!(?direction, iter, candidate, "candidate failed");
                state.next_after_bad(candidate, strategy)?
            }
            Flow::StopEarly => {
                debug!(?direction, iter, candidate, "boundary search stopped by observer");
                return state.into_solution(Status::StoppedByObserver, iter);
            }
        };
    }
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum Flow {
    Continue { passed: bool },
    StopEarly,
}

/// Evaluate `candidate`, emit the event, and record the resulting verdict.
///
/// On `StopEarly` after a successful evaluation, the real verdict is still
/// recorded so the solution reflects the last candidate.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    state: &mut State<M::Input, M::Output>,
    candidate: i64,
    observer: &mut Obs,
) -> Result<Flow, Error>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let iter = state.iteration();
    let bracket = state.bracket();

    match evaluate(model, problem, candidate) {
        Ok(eval) => {
            let action = {
                let (input, output) = (&eval.snapshot.input, &eval.snapshot.output);
                let event = if eval.passed {
                    Event::Passed {
                        iter,
                        candidate,
                        bracket,
                        input,
                        output,
                    }
                } else {
                    Event::Failed {
                        iter,
                        candidate,
                        bracket,
                        input,
                        output,
                    }
                };
                observer.observe(&event)
            };

            let passed = match action {
                Some(Action::AssumePass) => true,
                Some(Action::AssumeFail) => false,
                Some(Action::StopEarly) | None => eval.passed,
            };

            if passed {
                // An assumed pass keeps no snapshot of a failing evaluation.
                state.record_pass(candidate, eval.passed.then_some(eval.snapshot));
            } else {
                state.record_fail(candidate);
            }

            Ok(match action {
                Some(Action::StopEarly) => Flow::StopEarly,
                _ => Flow::Continue { passed },
            })
        }
        Err(e) => {
            let action = Event::emit_failure(iter, candidate, bracket, &e, observer);
            match action {
                Some(Action::StopEarly) => Ok(Flow::StopEarly),
                Some(Action::AssumePass) => {
                    state.record_pass(candidate, None);
                    Ok(Flow::Continue { passed: true })
                }
                Some(Action::AssumeFail) => {
                    state.record_fail(candidate);
                    Ok(Flow::Continue { passed: false })
                }
                None => Err(e.into()),
            }
        }
    }
}
