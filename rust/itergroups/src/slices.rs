//! An iterator adapter that yields every contiguous, overlapping window of a source.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use itergroups_common::{Error, Result, try_or_ret_some_err};

use crate::chunks::pull_exact;
use crate::source::{IterSource, Source, TryIterSource};
use crate::state::AdaptorState;
use crate::window::Window;
use crate::window_size::WindowSize;

/// An iterator adapter that yields overlapping windows of exactly `n`
/// elements, advancing by one element per window.
///
/// The first window pulls `n` elements from the source. Every following
/// window pulls a single element and reuses the last `n - 1` elements of the
/// previous window, so a source of length `L >= n` yields `L - n + 1`
/// windows and a shorter source yields none.
///
/// Each pulled element is stored once behind an `Arc`; carried-over slots
/// share that allocation with the previous window. The element type does not
/// need to be `Clone`.
///
/// ```
/// use itergroups::Slices;
///
/// let slices = Slices::new([1, 2, 3, 4, 5], 3).unwrap();
/// let windows: Vec<Vec<i32>> = slices.map(|w| w.to_vec()).collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
/// ```
pub struct Slices<S: Source> {
    /// The source being consumed.
    source: S,
    /// Number of elements in each window.
    size: WindowSize,
    /// The most recently produced window; also held by the caller.
    previous: Option<Window<S::Item>>,
    state: AdaptorState,
}

impl<I: Iterator> Slices<IterSource<I>> {
    /// Creates a `Slices` adapter over a plain iterable.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `n` is not positive. The
    /// iterable is not touched in that case.
    pub fn new(
        iterable: impl IntoIterator<IntoIter = I>,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Self> {
        let size = n.try_into()?;
        Ok(Self::with_size(IterSource::new(iterable), size))
    }
}

impl<I, T, E> Slices<TryIterSource<I>>
where
    I: Iterator<Item = std::result::Result<T, E>>,
{
    /// Creates a `Slices` adapter over an iterable of results.
    ///
    /// The resulting iterator yields `Result<Window<T>, E>`; an `Err` item
    /// from the source is passed through unchanged and ends the iteration.
    pub fn try_new(
        iterable: impl IntoIterator<IntoIter = I>,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Self> {
        let size = n.try_into()?;
        Ok(Self::with_size(TryIterSource::new(iterable), size))
    }
}

impl<S: Source> Slices<S> {
    /// Creates a `Slices` adapter over an arbitrary [`Source`].
    pub fn from_source(source: S, n: impl TryInto<WindowSize, Error = Error>) -> Result<Self> {
        let size = n.try_into()?;
        Ok(Self::with_size(source, size))
    }

    /// Creates a `Slices` adapter from an already validated size.
    pub fn with_size(source: S, size: WindowSize) -> Self {
        log::trace!("slices: created with n = {size}");
        Slices {
            source,
            size,
            previous: None,
            state: AdaptorState::Fresh,
        }
    }

    /// Pulls the next window.
    ///
    /// Returns `Ok(None)` once the source is exhausted. A source error is
    /// returned as-is. In both cases the previous window is left untouched
    /// and the adaptor never pulls again.
    pub fn next_group(&mut self) -> std::result::Result<Option<Window<S::Item>>, S::Error> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        let outcome = match &self.previous {
            None => pull_exact(&mut self.source, self.size)
                .map(|g| g.map(|g| Window::from_handles(g.into_iter().map(Arc::new).collect()))),
            Some(previous) => self
                .source
                .pull()
                .map(|e| e.map(|element| previous.slide(element))),
        };
        self.state.record(&outcome, "slices");
        if let Ok(Some(window)) = &outcome {
            self.previous = Some(window.clone());
        }
        outcome
    }

    #[inline]
    pub fn window_size(&self) -> WindowSize {
        self.size
    }

    #[inline]
    pub fn state(&self) -> AdaptorState {
        self.state
    }

    /// Returns the most recently produced window, if any.
    pub fn previous(&self) -> Option<&Window<S::Item>> {
        self.previous.as_ref()
    }

    /// Returns the source being consumed.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the source, positioned after the last pulled element.
    pub fn into_source(self) -> S {
        self.source
    }

    fn windows_size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        if self.previous.is_some() {
            (lower, upper)
        } else {
            let carry = self.size.get() - 1;
            (
                lower.saturating_sub(carry),
                upper.map(|upper| upper.saturating_sub(carry)),
            )
        }
    }
}

impl<I: Iterator> Iterator for Slices<IterSource<I>> {
    type Item = Window<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_group() {
            Ok(window) => window,
            Err(never) => match never {},
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows_size_hint()
    }
}

impl<I, T, E> Iterator for Slices<TryIterSource<I>>
where
    I: Iterator<Item = std::result::Result<T, E>>,
{
    type Item = std::result::Result<Window<T>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = try_or_ret_some_err!(self.next_group());
        window.map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.previous.is_some() || self.state.is_terminal() {
            return (0, self.windows_size_hint().1);
        }
        // Before the first window, a failed pull still yields one item.
        let carry = self.size.get() - 1;
        let upper = self
            .source
            .size_hint()
            .1
            .map(|upper| upper.saturating_sub(carry).max(upper.min(1)));
        (0, upper)
    }
}

impl<I: Iterator> FusedIterator for Slices<IterSource<I>> {}

impl<I, T, E> FusedIterator for Slices<TryIterSource<I>> where
    I: Iterator<Item = std::result::Result<T, E>>
{
}

impl<S: Source + fmt::Debug> fmt::Debug for Slices<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slices({:?}, {})", self.source, self.size)
    }
}
