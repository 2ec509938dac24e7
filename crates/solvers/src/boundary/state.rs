use bound_finder_core::Snapshot;

use super::{Bracket, Config, Direction, Error, Solution, Status, Strategy};

/// Mutable state of one boundary search.
///
/// The search is memoryless beyond the two bracket sides: `bad` and `good`
/// hold only the latest values seen, plus the snapshot behind `good`.
pub(super) struct State<I, O> {
    direction: Direction,
    known_good: Option<i64>,
    bad: Option<i64>,
    good: Option<i64>,
    good_found: bool,
    good_snapshot: Option<Snapshot<I, O>>,
    iteration: usize,
    max_iters: usize,
}

impl<I, O> State<I, O> {
    /// Creates a fresh state with fences resolved for `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fences are out of order or `start` is not on
    /// the passing side of the known-bad fence.
    pub(super) fn new(direction: Direction, config: &Config, start: i64) -> Result<Self, Error> {
        let (known_bad, known_good) = config.fences(direction)?;

        if let Some(known_bad) = known_bad
            && (start == known_bad || direction.is_past_bad(start, known_bad))
        {
            return Err(Error::InvalidStart { start, known_bad });
        }

        Ok(Self {
            direction,
            known_good,
            bad: known_bad,
            good: known_good,
            good_found: false,
            good_snapshot: None,
            iteration: 0,
            max_iters: config.max_iters(),
        })
    }

    pub(super) fn bracket(&self) -> Bracket {
        Bracket::new(self.bad, self.good)
    }

    pub(super) fn iteration(&self) -> usize {
        self.iteration
    }

    /// Counts one pass through the search loop.
    ///
    /// # Errors
    ///
    /// Returns `Error::MaxIters` once the count reaches the budget.
    pub(super) fn begin_iteration(&mut self) -> Result<(), Error> {
        self.iteration += 1;
        if self.iteration >= self.max_iters {
            return Err(Error::MaxIters {
                max_iters: self.max_iters,
                bracket: self.bracket(),
            });
        }
        Ok(())
    }

    /// Returns true if `candidate` is the failing neighbor of a found pass.
    pub(super) fn is_fixed_point(&self, candidate: i64) -> bool {
        self.good_found && self.bad == Some(candidate)
    }

    pub(super) fn record_fail(&mut self, candidate: i64) {
        self.bad = Some(candidate);
    }

    pub(super) fn record_pass(&mut self, candidate: i64, snapshot: Option<Snapshot<I, O>>) {
        self.good = Some(candidate);
        self.good_found = true;
        self.good_snapshot = snapshot;
    }

    /// Proposes the next candidate after `value` failed.
    ///
    /// Before any pass, probes toward passing values without crossing the
    /// known-good fence. Afterwards, bisects.
    ///
    /// # Errors
    ///
    /// Returns an error if the known-good fence itself failed, or the probe
    /// overflows with no fence to fall back on.
    pub(super) fn next_after_bad(&self, value: i64, strategy: &impl Strategy) -> Result<i64, Error> {
        if self.good_found
            && let Some(good) = self.good
        {
            return self.bisect(value, good);
        }
        if self.known_good == Some(value) {
            return Err(Error::KnownGoodFailed { value });
        }

        let next = strategy.probe(value, self.direction.toward_pass());

        // A probe that runs off the end of i64 still lands on a fence.
        match (next, self.known_good) {
            (Some(next), Some(fence)) => Ok(self.direction.clamp_to_good(next, fence)),
            (Some(next), None) => Ok(next),
            (None, Some(fence)) => Ok(fence),
            (None, None) => Err(Error::Overflow { value }),
        }
    }

    /// Proposes the next candidate after `value` passed.
    ///
    /// Bisects toward the last failure, or probes toward failing values if
    /// none is known yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe overflows.
    pub(super) fn next_after_good(&self, value: i64, strategy: &impl Strategy) -> Result<i64, Error> {
        if let Some(bad) = self.bad {
            return self.bisect(bad, value);
        }
        strategy
            .probe(value, self.direction.toward_fail())
            .ok_or(Error::Overflow { value })
    }

    fn bisect(&self, bad: i64, good: i64) -> Result<i64, Error> {
        self.direction
            .bisect(bad, good)
            .ok_or(Error::Overflow { value: bad })
    }

    /// Finalizes the search with the best passing value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoPassingValue` if nothing has passed yet.
    pub(super) fn into_solution(self, status: Status, iters: usize) -> Result<Solution<I, O>, Error> {
        let bracket = self.bracket();
        match (self.good_found, self.good) {
            (true, Some(value)) => Ok(Solution {
                status,
                value,
                bracket,
                iters,
                snapshot: self.good_snapshot,
            }),
            _ => Err(Error::NoPassingValue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::boundary::{Exponential, Fence, Step};

    fn lower(config: &Config) -> State<(), ()> {
        State::new(Direction::Lower, config, 1).expect("valid state")
    }

    #[test]
    fn starts_from_fences() {
        let state = lower(&Config::default().with_known_good(500));
        assert_eq!(state.bracket(), Bracket::new(Some(0), Some(500)));
        assert!(!state.is_fixed_point(0));
    }

    #[test]
    fn budget_counts_every_iteration() {
        let mut state = lower(&Config::new(3).expect("valid config"));
        assert!(state.begin_iteration().is_ok());
        assert!(state.begin_iteration().is_ok());
        assert!(matches!(
            state.begin_iteration(),
            Err(Error::MaxIters { max_iters: 3, .. })
        ));
    }

    #[test]
    fn probes_until_first_pass() {
        let mut state = lower(&Config::default());
        state.record_fail(8);
        assert_eq!(state.next_after_bad(8, &Exponential).ok(), Some(16));
    }

    #[test]
    fn probe_stops_at_known_good() {
        let mut state = lower(&Config::default().with_known_good(50));
        state.record_fail(32);
        assert_eq!(state.next_after_bad(32, &Exponential).ok(), Some(50));

        state.record_fail(50);
        assert!(matches!(
            state.next_after_bad(50, &Exponential),
            Err(Error::KnownGoodFailed { value: 50 })
        ));
    }

    #[test]
    fn bisects_once_bracketed() {
        let mut state = lower(&Config::default());
        state.record_fail(32);
        state.record_pass(64, None);
        assert_eq!(state.next_after_good(64, &Exponential).ok(), Some(48));

        state.record_fail(48);
        assert_eq!(state.next_after_bad(48, &Step::default()).ok(), Some(56));
    }

    #[test]
    fn probes_toward_failure_without_bad() {
        let mut state = lower(&Config::default().with_known_bad(Fence::Unbounded));
        state.record_pass(5, None);
        assert_eq!(state.next_after_good(5, &Exponential).ok(), Some(2));
        assert_eq!(state.next_after_good(5, &Step::default()).ok(), Some(4));
    }

    #[test]
    fn fixed_point_needs_a_pass() {
        let mut state = lower(&Config::default());
        state.record_fail(41);
        assert!(!state.is_fixed_point(41));
        state.record_pass(42, None);
        assert!(state.is_fixed_point(41));
        assert!(!state.is_fixed_point(42));
    }

    #[test]
    fn solution_requires_pass() {
        let state = lower(&Config::default().with_known_good(10));
        assert!(matches!(
            state.into_solution(Status::StoppedByObserver, 0),
            Err(Error::NoPassingValue)
        ));
    }

    #[test]
    fn overflowing_probe_falls_back_to_fence() {
        let mut state = lower(&Config::default().with_known_good(i64::MAX));
        state.record_fail(1 << 62);
        assert_eq!(state.next_after_bad(1 << 62, &Exponential).ok(), Some(i64::MAX));
    }

    #[test]
    fn rejects_start_on_known_bad() {
        let result: Result<State<(), ()>, _> = State::new(Direction::Lower, &Config::default(), 0);
        assert!(matches!(
            result,
            Err(Error::InvalidStart {
                start: 0,
                known_bad: 0
            })
        ));
    }

    #[test]
    fn rejects_start_past_known_bad() {
        let result: Result<State<(), ()>, _> = State::new(Direction::Lower, &Config::default(), -1);
        assert!(matches!(
            result,
            Err(Error::InvalidStart {
                start: -1,
                known_bad: 0
            })
        ));
    }
}
