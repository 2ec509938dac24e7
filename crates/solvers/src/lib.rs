//! Boundary searches for the bound-finder framework.
//!
//! A boundary search looks for the smallest (or largest) integer candidate
//! for which a monotonic pass/fail predicate passes, without requiring the
//! caller to know valid bounds up front.
//!
//! # Modules
//!
//! - [`boundary`] — exponential or stepped probing followed by bisection

pub mod boundary;
