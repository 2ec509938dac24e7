//! Probe recording for boundary searches.

use crate::traits::{HasCandidate, HasVerdict};

/// Records every probed candidate, split by verdict, in probe order.
///
/// A `ProbeLog` keeps the full history of a search, which the search itself
/// does not: only the bracket survives into the solution. Record events from
/// inside an observer closure:
///
/// ```
/// use bound_finder_observers::ProbeLog;
/// use bound_finder_solvers::boundary::{self, Config, Event, Exponential, PassFail, Predicate};
///
/// let model = Predicate(|width: i64| width >= 42);
/// let mut log = ProbeLog::new();
///
/// let solution = boundary::lower_bound(
///     &model,
///     &PassFail,
///     Exponential,
///     1,
///     &Config::default(),
///     |event: &Event<'_, _, _>| {
///         log.record(event);
///         None
///     },
/// )?;
///
/// assert_eq!(solution.value, 42);
/// assert_eq!(log.best(), Some(42));
/// assert!(log.is_tight());
/// # Ok::<(), boundary::Error>(())
/// ```
///
/// The log stores each evaluation's own verdict. Overrides applied by an
/// observer action (`AssumePass`, `AssumeFail`) are not reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeLog {
    passed: Vec<i64>,
    failed: Vec<i64>,
    errored: Vec<i64>,
}

impl ProbeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the candidate of `event` under its verdict.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasCandidate + HasVerdict,
    {
        let candidate = event.candidate();
        match event.passed() {
            Some(true) => self.passed.push(candidate),
            Some(false) => self.failed.push(candidate),
            None => self.errored.push(candidate),
        }
    }

    /// Returns the passing candidates in probe order.
    #[must_use]
    pub fn passed(&self) -> &[i64] {
        &self.passed
    }

    /// Returns the failing candidates in probe order.
    #[must_use]
    pub fn failed(&self) -> &[i64] {
        &self.failed
    }

    /// Returns the candidates whose evaluation errored, in probe order.
    #[must_use]
    pub fn errored(&self) -> &[i64] {
        &self.errored
    }

    /// Returns the total number of recorded probes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.passed.len() + self.failed.len() + self.errored.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the most recent passing candidate.
    ///
    /// For a monotonic predicate every pass tightens the bracket, so this is
    /// the search's best answer so far.
    #[must_use]
    pub fn best(&self) -> Option<i64> {
        self.passed.last().copied()
    }

    /// Returns true if the best pass sits next to a recorded failure.
    ///
    /// A converged search always satisfies this. It fails when the search
    /// stopped early, or when the boundary is a fence that was never probed.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.best().is_some_and(|best| {
            self.failed.iter().any(|&fail| fail.abs_diff(best) == 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(i64, Option<bool>);

    impl HasCandidate for Probe {
        fn candidate(&self) -> i64 {
            self.0
        }
    }

    impl HasVerdict for Probe {
        fn passed(&self) -> Option<bool> {
            self.1
        }
    }

    fn log_of(probes: &[Probe]) -> ProbeLog {
        let mut log = ProbeLog::new();
        for probe in probes {
            log.record(probe);
        }
        log
    }

    #[test]
    fn splits_probes_by_verdict() {
        let log = log_of(&[
            Probe(8, Some(false)),
            Probe(16, None),
            Probe(32, Some(true)),
            Probe(24, Some(true)),
        ]);

        assert_eq!(log.passed(), &[32, 24]);
        assert_eq!(log.failed(), &[8]);
        assert_eq!(log.errored(), &[16]);
        assert_eq!(log.len(), 4);
        assert_eq!(log.best(), Some(24));
    }

    #[test]
    fn empty_log_has_no_answer() {
        let log = ProbeLog::new();
        assert!(log.is_empty());
        assert_eq!(log.best(), None);
        assert!(!log.is_tight());
    }

    #[test]
    fn tight_in_either_direction() {
        let lower = log_of(&[Probe(41, Some(false)), Probe(42, Some(true))]);
        assert!(lower.is_tight());

        let upper = log_of(&[Probe(18, Some(false)), Probe(17, Some(true))]);
        assert!(upper.is_tight());

        let loose = log_of(&[Probe(40, Some(false)), Probe(42, Some(true))]);
        assert!(!loose.is_tight());
    }

    #[test]
    fn errors_do_not_count_as_failures() {
        let log = log_of(&[Probe(41, None), Probe(42, Some(true))]);
        assert!(!log.is_tight());
    }
}
