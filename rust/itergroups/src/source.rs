//! The pull-based source sequence consumed by the adaptors.
//!
//! A [`Source`] hands out elements one at a time and distinguishes three
//! outcomes of a pull: an element, clean exhaustion, or a genuine failure.
//! Two wrappers cover the common cases:
//!
//! - [`IterSource`] adapts any plain [`Iterator`]; it can never fail.
//! - [`TryIterSource`] adapts an iterator of `Result<T, E>`; an `Err` item
//!   is treated as a failed pull and handed back verbatim.

use std::convert::Infallible;
use std::fmt;

/// A single-pass, pull-based producer of elements.
///
/// Once `pull` has returned `Ok(None)` it must keep returning `Ok(None)`.
pub trait Source {
    type Item;
    type Error;

    /// Pulls the next element.
    ///
    /// Returns `Ok(Some(item))` for an element, `Ok(None)` once the sequence
    /// is exhausted, and `Err(e)` if the source failed.
    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Bounds on the number of elements left, with the same meaning as
    /// [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    #[inline]
    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// Source over a plain iterator.
///
/// Exhaustion is remembered, so it stays stable even when the wrapped
/// iterator would resume after returning `None`.
#[derive(Clone)]
pub struct IterSource<I> {
    inner: I,
    exhausted: bool,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iterable: impl IntoIterator<IntoIter = I>) -> Self {
        IterSource {
            inner: iterable.into_iter(),
            exhausted: false,
        }
    }

    /// Returns the wrapped iterator, positioned after the last pulled element.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;
    type Error = Infallible;

    #[inline]
    fn pull(&mut self) -> Result<Option<I::Item>, Infallible> {
        if self.exhausted {
            return Ok(None);
        }
        let next = self.inner.next();
        self.exhausted = next.is_none();
        Ok(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.inner.size_hint()
        }
    }
}

/// Formats as the wrapped iterator.
impl<I: fmt::Debug> fmt::Debug for IterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

/// Source over an iterator of `Result<T, E>`.
///
/// `Ok(item)` yields an element, `Err(e)` is reported as a failed pull and
/// the end of the iterator is reported as exhaustion.
#[derive(Clone)]
pub struct TryIterSource<I> {
    inner: I,
    exhausted: bool,
}

impl<I, T, E> TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn new(iterable: impl IntoIterator<IntoIter = I>) -> Self {
        TryIterSource {
            inner: iterable.into_iter(),
            exhausted: false,
        }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, T, E> Source for TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn pull(&mut self) -> Result<Option<T>, E> {
        if self.exhausted {
            return Ok(None);
        }
        let next = self.inner.next();
        self.exhausted = next.is_none();
        next.transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        // Any item may turn out to be an error, so only the upper bound holds.
        (0, self.inner.size_hint().1)
    }
}

impl<I: fmt::Debug> fmt::Debug for TryIterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
