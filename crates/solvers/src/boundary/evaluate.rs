use thiserror::Error;

use bound_finder_core::{BoundaryProblem, Model, Snapshot};

/// The result of evaluating a boundary problem at a candidate.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub candidate: i64,

    pub passed: bool,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a boundary problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or decide the verdict.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as BoundaryProblem>::Error>,
>;

/// Evaluates the model in the context of a boundary problem.
///
/// This function maps the candidate to a model input, calls the model once,
/// then decides pass/fail from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the verdict fails.
pub fn evaluate<M, P>(model: &M, problem: &P, candidate: i64) -> EvaluateResult<M, P>
where
    M: Model,
    P: BoundaryProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(candidate).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let passed = problem
        .passes(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        candidate,
        passed,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::boundary::{AtLeast, Metric};

    #[derive(Debug, Error)]
    #[error("negative widths are not routable")]
    struct NegativeWidth;

    struct Widths;

    impl BoundaryProblem for Widths {
        type Input = u32;
        type Output = i64;
        type Error = NegativeWidth;

        fn input(&self, candidate: i64) -> Result<u32, Self::Error> {
            u32::try_from(candidate).map_err(|_| NegativeWidth)
        }

        fn passes(&self, _input: &u32, output: &i64) -> Result<bool, Self::Error> {
            Ok(*output == 0)
        }
    }

    struct Overuse;

    impl Model for Overuse {
        type Input = u32;
        type Output = i64;
        type Error = std::convert::Infallible;

        fn call(&self, width: &u32) -> Result<i64, Self::Error> {
            Ok((12 - i64::from(*width)).max(0))
        }
    }

    #[test]
    fn captures_verdict_and_snapshot() {
        let eval = evaluate(&Overuse, &Widths, 12).expect("valid width");
        assert!(eval.passed);
        assert_eq!(eval.candidate, 12);
        assert_eq!(eval.snapshot.input, 12);
        assert_eq!(eval.snapshot.output, 0);

        let eval = evaluate(&Overuse, &Widths, 5).expect("valid width");
        assert!(!eval.passed);
        assert_eq!(eval.snapshot.output, 7);
    }

    #[test]
    fn problem_errors_surface() {
        let result = evaluate(&Overuse, &Widths, -1);
        assert!(matches!(result, Err(EvalError::Problem(NegativeWidth))));
    }

    #[test]
    fn threshold_problem_reads_metric() {
        let model = Metric(|x: i64| x * 3);
        let eval = evaluate(&model, &AtLeast(30), 10).expect("infallible");
        assert!(eval.passed);
        assert_eq!(eval.snapshot.output, 30);
    }
}
