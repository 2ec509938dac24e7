/// Watches a search one probe at a time.
///
/// A search hands every evaluated candidate to its observer as an event `E`.
/// Returning `Some(action)` steers the search with a search-specific action
/// `A`, such as stopping once the bracket is narrow enough or treating a
/// crashed evaluation as a failure. Returning `None` leaves the verdict alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the search.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures observe by being called.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<u8> = observer.observe(&5_i64);
        assert_eq!(action, None);
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &i64| {
            seen.push(*event);
            (*event > 1).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }
}
