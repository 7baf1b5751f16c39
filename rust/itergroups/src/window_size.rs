//! Validated window size shared by the chunking and sliding adaptors.

use std::fmt;
use std::num::NonZeroUsize;

use itergroups_common::{Error, Result};

/// Number of elements in every group produced by an adaptor.
///
/// The size is fixed at construction and is always at least 1. Any integer
/// type converts into it through [`TryFrom`]; zero, negative values and
/// values that do not fit in `usize` are rejected with an
/// [`InvalidArgument`](itergroups_common::ErrorKind::InvalidArgument) error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Window of a single element.
    pub const ONE: WindowSize = WindowSize(NonZeroUsize::MIN);

    pub fn new(n: usize) -> Result<WindowSize> {
        NonZeroUsize::new(n).map(WindowSize).ok_or_else(not_positive)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(n: NonZeroUsize) -> Self {
        WindowSize(n)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> Self {
        size.get()
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cold]
fn not_positive() -> Error {
    Error::invalid_arg("n", "n must be positive")
}

macro_rules! impl_try_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for WindowSize {
                type Error = Error;

                fn try_from(n: $t) -> Result<WindowSize> {
                    let n = usize::try_from(n).map_err(|_| not_positive())?;
                    WindowSize::new(n)
                }
            }
        )*
    };
}

impl_try_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use itergroups_common::ErrorKind;

    use super::*;

    #[test]
    fn test_positive_sizes() {
        assert_eq!(WindowSize::try_from(3i32).unwrap().get(), 3);
        assert_eq!(WindowSize::try_from(1u8).unwrap(), WindowSize::ONE);
        assert_eq!(WindowSize::try_from(7usize).unwrap().to_string(), "7");
        assert_eq!(usize::from(WindowSize::new(4).unwrap()), 4);
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        for result in [
            WindowSize::try_from(0i32),
            WindowSize::try_from(-1i32),
            WindowSize::try_from(i64::MIN),
            WindowSize::try_from(0usize),
        ] {
            let err = result.unwrap_err();
            match err.kind() {
                ErrorKind::InvalidArgument { name, message } => {
                    assert_eq!(name, "n");
                    assert_eq!(message, "n must be positive");
                }
                other => panic!("unexpected kind: {other:?}"),
            }
        }
    }
}
