/// The pair of values known to straddle the boundary.
///
/// `bad` is the most recent failing candidate and `good` the most recent
/// passing one. Either side is `None` until a value is observed or fenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    /// Most recent failing candidate (or the known-bad fence).
    pub bad: Option<i64>,

    /// Most recent passing candidate (or the known-good fence).
    pub good: Option<i64>,
}

impl Bracket {
    /// Creates a bracket from its two sides.
    #[must_use]
    pub fn new(bad: Option<i64>, good: Option<i64>) -> Self {
        Self { bad, good }
    }

    /// Returns the distance between `bad` and `good`, if both are known.
    #[must_use]
    pub fn gap(&self) -> Option<u64> {
        match (self.bad, self.good) {
            (Some(bad), Some(good)) => Some(bad.abs_diff(good)),
            _ => None,
        }
    }

    /// Returns true if `bad` and `good` are adjacent integers.
    ///
    /// A tight bracket means the boundary is pinned down exactly: nothing lies
    /// between the last failure and the best pass.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.gap() == Some(1)
    }
}
