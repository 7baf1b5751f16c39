//! Test utilities and helpers for the itergroups crates.
//!
//! This crate provides:
//! - Sources that fail on a chosen pull, for exercising error propagation
//! - Pull counting, for checking how many elements an adaptor consumed
//! - Drop tracking, for checking that no element outlives its last owner
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency within the itergroups
//! test suites only.

pub mod drop_tracker;
pub mod sources;

pub use drop_tracker::{DropTracker, Tracked};
pub use sources::{FailingIter, PullCount, PullCounter, PullFailure};
