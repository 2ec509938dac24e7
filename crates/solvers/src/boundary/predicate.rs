//! Adapters for searching plain closures and integer metrics.

use std::convert::Infallible;

use bound_finder_core::{BoundaryProblem, Model};

/// A model backed by a pass/fail closure.
///
/// Pair with [`PassFail`] to search a predicate directly.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<F> Model for Predicate<F>
where
    F: Fn(i64) -> bool,
{
    type Input = i64;
    type Output = bool;
    type Error = Infallible;

    fn call(&self, input: &i64) -> Result<bool, Self::Error> {
        Ok((self.0)(*input))
    }
}

/// A model backed by a closure that computes an integer metric.
///
/// Pair with [`AtLeast`] or [`AtMost`] to search for a threshold crossing.
#[derive(Debug, Clone, Copy)]
pub struct Metric<F>(pub F);

impl<F> Model for Metric<F>
where
    F: Fn(i64) -> i64,
{
    type Input = i64;
    type Output = i64;
    type Error = Infallible;

    fn call(&self, input: &i64) -> Result<i64, Self::Error> {
        Ok((self.0)(*input))
    }
}

/// A problem whose verdict is the model's boolean output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassFail;

impl BoundaryProblem for PassFail {
    type Input = i64;
    type Output = bool;
    type Error = Infallible;

    fn input(&self, candidate: i64) -> Result<i64, Self::Error> {
        Ok(candidate)
    }

    fn passes(&self, _input: &i64, output: &bool) -> Result<bool, Self::Error> {
        Ok(*output)
    }
}

/// Passes when the model's integer output is at least the target.
#[derive(Debug, Clone, Copy)]
pub struct AtLeast(pub i64);

impl BoundaryProblem for AtLeast {
    type Input = i64;
    type Output = i64;
    type Error = Infallible;

    fn input(&self, candidate: i64) -> Result<i64, Self::Error> {
        Ok(candidate)
    }

    fn passes(&self, _input: &i64, output: &i64) -> Result<bool, Self::Error> {
        Ok(*output >= self.0)
    }
}

/// Passes when the model's integer output is at most the target.
#[derive(Debug, Clone, Copy)]
pub struct AtMost(pub i64);

impl BoundaryProblem for AtMost {
    type Input = i64;
    type Output = i64;
    type Error = Infallible;

    fn input(&self, candidate: i64) -> Result<i64, Self::Error> {
        Ok(candidate)
    }

    fn passes(&self, _input: &i64, output: &i64) -> Result<bool, Self::Error> {
        Ok(*output <= self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_forwards_candidate() {
        let model = Predicate(|x: i64| x % 2 == 0);
        assert_eq!(model.call(&4), Ok(true));
        assert_eq!(model.call(&5), Ok(false));
    }

    #[test]
    fn thresholds_compare_inclusively() {
        assert_eq!(AtLeast(10).passes(&0, &10), Ok(true));
        assert_eq!(AtLeast(10).passes(&0, &9), Ok(false));
        assert_eq!(AtMost(10).passes(&0, &10), Ok(true));
        assert_eq!(AtMost(10).passes(&0, &11), Ok(false));
    }
}
