//! Core traits and types for the bound-finder framework.
//!
//! This crate defines the shared abstractions that boundary searches and
//! observers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`BoundaryProblem`] — adapts an integer candidate to a model input and
//!   decides whether the model's result passes

mod model;
mod observer;
mod problem;

pub use observer::Observer;
pub use problem::BoundaryProblem;
pub use {model::Model, model::Snapshot};
