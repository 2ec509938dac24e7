//! Structured logging of search progress.

use bound_finder_core::Observer;
use tracing::Level;

use crate::traits::{HasBracket, HasCandidate, HasVerdict};

/// Emits one `tracing` event per probe.
///
/// Each record carries the search name, the candidate, the bracket before the
/// verdict, and the verdict itself (`pass`, `fail`, or `error`). Never returns
/// an action, so it can be passed straight to a search or called from inside
/// a composite observer via [`TracingObserver::log`].
#[derive(Debug, Clone)]
pub struct TracingObserver {
    name: &'static str,
    level: Level,
}

impl TracingObserver {
    /// Creates an observer that logs at `INFO` under the given search name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            level: Level::INFO,
        }
    }

    /// Sets the level probe records are emitted at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the search name attached to each record.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the level probe records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Emits the record for `event`.
    pub fn log<E>(&self, event: &E)
    where
        E: HasCandidate + HasVerdict + HasBracket,
    {
        let name = self.name;
        let candidate = event.candidate();
        let bracket = event.bracket();
        let verdict = match event.passed() {
            Some(true) => "pass",
            Some(false) => "fail",
            None => "error",
        };

        macro_rules! probe {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    search = name,
                    candidate,
                    bad = ?bracket.bad,
                    good = ?bracket.good,
                    verdict,
                    "probe"
                )
            };
        }

        match self.level {
            Level::ERROR => probe!(Level::ERROR),
            Level::WARN => probe!(Level::WARN),
            Level::INFO => probe!(Level::INFO),
            Level::DEBUG => probe!(Level::DEBUG),
            _ => probe!(Level::TRACE),
        }
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasCandidate + HasVerdict + HasBracket,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bound_finder_solvers::boundary::{self, Config, Exponential, PassFail, Predicate};

    #[test]
    fn defaults_to_info() {
        let observer = TracingObserver::new("width");
        assert_eq!(observer.name(), "width");
        assert_eq!(observer.level(), Level::INFO);

        let observer = observer.with_level(Level::TRACE);
        assert_eq!(observer.level(), Level::TRACE);
    }

    #[test]
    fn logging_leaves_the_search_unchanged() {
        let model = Predicate(|x: i64| x >= 42);
        let config = Config::default();

        let traced = boundary::lower_bound(
            &model,
            &PassFail,
            Exponential,
            1,
            &config,
            TracingObserver::new("traced").with_level(Level::DEBUG),
        )
        .expect("should converge");
        let plain = boundary::lower_bound_unobserved(&model, &PassFail, Exponential, 1, &config)
            .expect("should converge");

        assert_eq!(traced.value, plain.value);
        assert_eq!(traced.iters, plain.iters);
        assert_eq!(traced.bracket, plain.bracket);
    }
}
