//! Core definitions (error type, result alias and helper macros), relied upon by all itergroups-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
