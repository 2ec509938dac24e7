/// Which way a probe moves along the integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Toward larger values.
    Up,

    /// Toward smaller values.
    Down,
}

impl Heading {
    /// Returns the opposite heading.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// The kind of boundary being searched for.
///
/// The two directions share one driver and differ only in which side of the
/// boundary passes, their default fences, and how the bisection midpoint is
/// rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Find the smallest passing value. Values below the boundary fail.
    Lower,

    /// Find the largest passing value. Values above the boundary fail.
    Upper,
}

impl Direction {
    /// Returns the fence assumed to fail when the caller does not set one.
    ///
    /// Lower-bound searches treat zero as failing; upper-bound searches have no
    /// failing fence and probe upward until a failure is seen.
    #[must_use]
    pub fn default_known_bad(self) -> Option<i64> {
        match self {
            Self::Lower => Some(0),
            Self::Upper => None,
        }
    }

    /// Returns the fence assumed to pass when the caller does not set one.
    #[must_use]
    pub fn default_known_good(self) -> Option<i64> {
        match self {
            Self::Lower => None,
            Self::Upper => Some(0),
        }
    }

    /// Returns the heading that leads from failing values toward passing ones.
    #[must_use]
    pub fn toward_pass(self) -> Heading {
        match self {
            Self::Lower => Heading::Up,
            Self::Upper => Heading::Down,
        }
    }

    /// Returns the heading that leads from passing values toward failing ones.
    #[must_use]
    pub fn toward_fail(self) -> Heading {
        self.toward_pass().reverse()
    }

    /// Returns the midpoint of `[bad, good]`, rounded toward `bad`.
    ///
    /// While the gap is at least two the midpoint lies strictly inside the
    /// bracket. Once the gap is one the midpoint *is* `bad`, which the driver
    /// treats as convergence. Returns `None` only if the bracket is so wide
    /// that the midpoint cannot be represented, which cannot happen for two
    /// valid `i64` endpoints.
    pub(super) fn bisect(self, bad: i64, good: i64) -> Option<i64> {
        let (bad, good) = (i128::from(bad), i128::from(good));
        let mid = match self {
            Self::Lower => bad + (good - bad) / 2,
            Self::Upper => bad - (bad - good) / 2,
        };
        i64::try_from(mid).ok()
    }

    /// Pulls a probed candidate back so it does not cross the known-good fence.
    pub(super) fn clamp_to_good(self, candidate: i64, known_good: i64) -> i64 {
        match self {
            Self::Lower => candidate.min(known_good),
            Self::Upper => candidate.max(known_good),
        }
    }

    /// Returns true if `value` lies strictly on the failing side of `known_bad`.
    pub(super) fn is_past_bad(self, value: i64, known_bad: i64) -> bool {
        match self {
            Self::Lower => value < known_bad,
            Self::Upper => value > known_bad,
        }
    }

    /// Returns true if the fences are ordered with `known_bad` on the failing side.
    pub(super) fn fences_ordered(self, known_bad: i64, known_good: i64) -> bool {
        match self {
            Self::Lower => known_bad < known_good,
            Self::Upper => known_bad > known_good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_mirror() {
        assert_eq!(Direction::Lower.toward_pass(), Heading::Up);
        assert_eq!(Direction::Lower.toward_fail(), Heading::Down);
        assert_eq!(Direction::Upper.toward_pass(), Heading::Down);
        assert_eq!(Direction::Upper.toward_fail(), Heading::Up);
    }

    #[test]
    fn default_fences() {
        assert_eq!(Direction::Lower.default_known_bad(), Some(0));
        assert_eq!(Direction::Lower.default_known_good(), None);
        assert_eq!(Direction::Upper.default_known_bad(), None);
        assert_eq!(Direction::Upper.default_known_good(), Some(0));
    }

    #[test]
    fn lower_bisect_rounds_toward_bad() {
        assert_eq!(Direction::Lower.bisect(32, 64), Some(48));
        assert_eq!(Direction::Lower.bisect(40, 43), Some(41));
        assert_eq!(Direction::Lower.bisect(41, 42), Some(41));
    }

    #[test]
    fn upper_bisect_rounds_toward_bad() {
        assert_eq!(Direction::Upper.bisect(25, 12), Some(19));
        assert_eq!(Direction::Upper.bisect(19, 16), Some(18));
        assert_eq!(Direction::Upper.bisect(18, 17), Some(18));
    }

    #[test]
    fn upper_bisect_always_moves_off_good() {
        for gap in 1..20 {
            let mid = Direction::Upper.bisect(gap, 0).expect("in range");
            assert!(mid > 0, "gap {gap} produced {mid}");
        }
    }

    #[test]
    fn bisect_spans_full_range() {
        assert_eq!(Direction::Lower.bisect(i64::MIN, i64::MAX), Some(-1));
        assert_eq!(Direction::Upper.bisect(i64::MAX, i64::MIN), Some(0));
    }

    #[test]
    fn clamp_respects_fence_side() {
        assert_eq!(Direction::Lower.clamp_to_good(64, 50), 50);
        assert_eq!(Direction::Lower.clamp_to_good(32, 50), 32);
        assert_eq!(Direction::Upper.clamp_to_good(-1, 0), 0);
        assert_eq!(Direction::Upper.clamp_to_good(6, 0), 6);
    }

    #[test]
    fn fence_ordering() {
        assert!(Direction::Lower.fences_ordered(0, 10));
        assert!(!Direction::Lower.fences_ordered(10, 10));
        assert!(Direction::Upper.fences_ordered(10, 0));
        assert!(!Direction::Upper.fences_ordered(0, 10));
    }
}
