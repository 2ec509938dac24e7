//! Reusable observers for bound-finder searches.
//!
//! This crate provides [`Observer`] implementations, recorders, and capability
//! traits that work with any event type exposing the right accessors.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasCandidate`], [`HasVerdict`], [`HasBracket`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ProbeLog`] — records passing and failing candidates in probe order
//! - [`TracingObserver`] — logs each probe through `tracing`
//! - [`GapTolerance`] — stops a search once the bracket is narrow enough
//!
//! # Features
//!
//! - `serde` — Derives `Serialize` and `Deserialize` for [`ProbeLog`].
//!
//! [`Observer`]: bound_finder_core::Observer
//! [`HasCandidate`]: traits::HasCandidate
//! [`HasVerdict`]: traits::HasVerdict
//! [`HasBracket`]: traits::HasBracket
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod gap;
mod log;
mod trace;

pub use gap::GapTolerance;
pub use log::ProbeLog;
pub use trace::TracingObserver;
