use thiserror::Error;

use super::Heading;

/// How a search probes for a bracket before it has one.
///
/// Once both a failing and a passing value are known, every search bisects
/// between them; strategies only decide how to move while one side is still
/// missing. Implement this trait to plug in a custom probing policy.
pub trait Strategy {
    /// Proposes the next candidate after `value`, moving along `heading`.
    ///
    /// Returns `None` if the next candidate would overflow `i64`.
    fn probe(&self, value: i64, heading: Heading) -> Option<i64>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn probe(&self, value: i64, heading: Heading) -> Option<i64> {
        (**self).probe(value, heading)
    }
}

/// Exponential probing: distances from zero double or halve each step.
///
/// Moving away from zero doubles the candidate (`1, 2, 4, 8, ...`), moving
/// toward zero halves it (`100, 50, 25, 12, ...`). Near zero the stride is
/// at least one, so `0` and `±1` still make progress
/// (`3, 1, 0, -1, -2, -4, ...`).
///
/// Finds a bracket in `O(log T)` evaluations for a boundary at `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exponential;

impl Strategy for Exponential {
    fn probe(&self, value: i64, heading: Heading) -> Option<i64> {
        match heading {
            Heading::Up if value < -1 => Some(value / 2),
            Heading::Down if value > 1 => Some(value / 2),
            Heading::Up => value.checked_add(value.checked_abs()?.max(1)),
            Heading::Down => value.checked_sub(value.checked_abs()?.max(1)),
        }
    }
}

/// Linear probing: each step moves by a fixed amount.
///
/// Costs more evaluations than [`Exponential`] when the boundary is far from
/// the starting candidate, but never overshoots it by more than one step.
/// Useful when the boundary is known to be close and each evaluation is
/// cheaper near the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    step: i64,
}

/// Errors that can occur when creating a [`Step`] strategy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error("step must be positive, got {step}")]
    NotPositive { step: i64 },
}

impl Step {
    /// Creates a linear strategy with the given step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero or negative.
    pub fn new(step: i64) -> Result<Self, StepError> {
        if step <= 0 {
            return Err(StepError::NotPositive { step });
        }
        Ok(Self { step })
    }

    /// Returns the step size.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Default for Step {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl Strategy for Step {
    fn probe(&self, value: i64, heading: Heading) -> Option<i64> {
        match heading {
            Heading::Up => value.checked_add(self.step),
            Heading::Down => value.checked_sub(self.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(strategy: &impl Strategy, start: i64, heading: Heading, count: usize) -> Vec<i64> {
        let mut values = vec![start];
        let mut value = start;
        for _ in 1..count {
            value = strategy.probe(value, heading).expect("no overflow");
            values.push(value);
        }
        values
    }

    #[test]
    fn exponential_doubles_up() {
        let values = walk(&Exponential, 1, Heading::Up, 7);
        assert_eq!(values, vec![1, 2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn exponential_halves_down() {
        let values = walk(&Exponential, 100, Heading::Down, 12);
        assert_eq!(values, vec![100, 50, 25, 12, 6, 3, 1, 0, -1, -2, -4, -8]);
    }

    #[test]
    fn exponential_climbs_out_of_negatives() {
        let values = walk(&Exponential, -40, Heading::Up, 9);
        assert_eq!(values, vec![-40, -20, -10, -5, -2, -1, 0, 1, 2]);
    }

    #[test]
    fn exponential_reports_overflow() {
        assert_eq!(Exponential.probe(1 << 62, Heading::Up), None);
        assert_eq!(Exponential.probe(-(1 << 62), Heading::Down), Some(i64::MIN));
        assert_eq!(Exponential.probe(i64::MIN, Heading::Down), None);
    }

    #[test]
    fn step_moves_linearly() {
        let step = Step::new(5).expect("valid step");
        assert_eq!(walk(&step, 30, Heading::Up, 4), vec![30, 35, 40, 45]);
        assert_eq!(walk(&step, 3, Heading::Down, 3), vec![3, -2, -7]);
    }

    #[test]
    fn step_reports_overflow() {
        let step = Step::new(10).expect("valid step");
        assert_eq!(step.probe(i64::MAX - 5, Heading::Up), None);
    }

    #[test]
    fn step_must_be_positive() {
        assert_eq!(Step::new(0), Err(StepError::NotPositive { step: 0 }));
        assert_eq!(Step::new(-3), Err(StepError::NotPositive { step: -3 }));
        assert_eq!(Step::default().step(), 1);
    }
}
