//! Finds the minimum routable channel width of a simulated router.
//!
//! The router succeeds at or above a hidden minimum width and crashes on
//! widths too narrow to even attempt. Crashes are treated as routing failures,
//! so the search carries on.
//!
//! # Usage
//!
//! ```text
//! cargo run --example channel_width
//! cargo run --example channel_width -- 150
//! RUST_LOG=debug cargo run --example channel_width
//! ```

use std::error::Error;

use bound_finder_core::{BoundaryProblem, Model};
use bound_finder_observers::{ProbeLog, TracingObserver};
use bound_finder_solvers::boundary::{self, Action, Config, Event, Exponential};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Widths below this crash the router outright.
const CRASH_BELOW: i64 = 8;

/// A stand-in for a place-and-route run at a given channel width.
struct Router {
    min_width: i64,
}

struct RouteReport {
    routed: bool,
    overused_nodes: i64,
}

#[derive(Debug, Error)]
enum RouterError {
    #[error("router crashed at channel width {0}")]
    Crashed(i64),
}

impl Model for Router {
    type Input = i64;
    type Output = RouteReport;
    type Error = RouterError;

    fn call(&self, width: &i64) -> Result<RouteReport, Self::Error> {
        if *width < CRASH_BELOW {
            return Err(RouterError::Crashed(*width));
        }
        let overused_nodes = (self.min_width - width).max(0) * 3;
        Ok(RouteReport {
            routed: overused_nodes == 0,
            overused_nodes,
        })
    }
}

/// Passes when the router finishes without congestion.
struct Routable;

#[derive(Debug, Error)]
#[error("channel width must be positive, got {0}")]
struct InvalidWidth(i64);

impl BoundaryProblem for Routable {
    type Input = i64;
    type Output = RouteReport;
    type Error = InvalidWidth;

    fn input(&self, candidate: i64) -> Result<i64, Self::Error> {
        if candidate > 0 {
            Ok(candidate)
        } else {
            Err(InvalidWidth(candidate))
        }
    }

    fn passes(&self, _width: &i64, report: &RouteReport) -> Result<bool, Self::Error> {
        Ok(report.routed)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let min_width = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<i64>)
        .transpose()?
        .unwrap_or(73);

    let router = Router { min_width };
    let tracer = TracingObserver::new("channel_width");
    let mut log = ProbeLog::new();

    let solution = boundary::lower_bound(
        &router,
        &Routable,
        Exponential,
        1,
        &Config::default(),
        |event: &Event<'_, _, _>| {
            log.record(event);
            tracer.log(event);
            matches!(event, Event::ModelFailed { .. }).then_some(Action::AssumeFail)
        },
    )?;

    println!("Minimum channel width: {}", solution.value);
    println!("Evaluations:           {}", solution.iters);
    println!("Routed at:             {:?}", log.passed());
    println!("Unroutable at:         {:?}", log.failed());
    println!("Router crashed at:     {:?}", log.errored());
    println!("Tight:                 {}", log.is_tight());
    if let Some(snapshot) = &solution.snapshot {
        println!("Overused nodes:        {}", snapshot.output.overused_nodes);
    }

    Ok(())
}
