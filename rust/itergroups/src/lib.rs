//! Lazy, fixed-size grouping adapters over pull-based sequences.
//!
//! This crate provides two iterator adapters that consume a source one
//! element at a time and yield groups of exactly `n` elements:
//!
//! - [`Chunks`] partitions the source into disjoint groups. Trailing elements
//!   that do not fill a whole group are dropped.
//! - [`Slices`] yields every contiguous window of the source, advancing by one
//!   element per window and sharing the `n - 1` elements it already holds.
//!
//! Both adapters work over any [`Source`]: a plain iterator through
//! [`IterSource`], or an iterator of `Result<T, E>` through [`TryIterSource`],
//! in which case source errors are handed back to the caller unchanged.
//!
//! # Key Types
//!
//! - [`Group`] - The immutable, cheaply cloneable group produced by [`Chunks`]
//! - [`Window`] - The immutable window produced by [`Slices`], whose elements
//!   are shared with the neighbouring windows
//! - [`WindowSize`] - The validated, positive group size
//! - [`AdaptorState`] - Where an adapter is in its lifecycle
//! - [`GroupIteratorsExt`] - Extension trait with `chunks_of` / `slices_of`

pub mod chunks;
pub mod ext;
pub mod group;
pub mod slices;
pub mod source;
pub mod state;
pub mod window;
pub mod window_size;

pub use chunks::Chunks;
pub use ext::GroupIteratorsExt;
pub use group::{Group, GroupIntoIter};
pub use slices::Slices;
pub use source::{IterSource, Source, TryIterSource};
pub use state::AdaptorState;
pub use window::{Window, WindowIter};
pub use window_size::WindowSize;

pub use itergroups_common::{Error, ErrorKind, Result};
