//! An iterator adapter that partitions a source into disjoint, fixed-size groups.

use std::fmt;
use std::iter::FusedIterator;

use itergroups_common::{Error, Result, try_or_ret_some_err};

use crate::group::Group;
use crate::source::{IterSource, Source, TryIterSource};
use crate::state::AdaptorState;
use crate::window_size::WindowSize;

/// Upper bound on the up-front allocation for a group being filled.
///
/// Larger window sizes still work; the buffer grows as elements arrive.
const PREALLOCATION_LIMIT: usize = 4096;

/// An iterator adapter that yields consecutive, non-overlapping groups of
/// exactly `n` elements.
///
/// Every produced group consumes `n` fresh elements from the source. If the
/// source ends (or fails) part-way through a group, the partially filled
/// group is discarded, so trailing elements that do not make up a whole group
/// are never yielded.
///
/// ```
/// use itergroups::Chunks;
///
/// let chunks = Chunks::new([1, 2, 3, 4, 5, 6, 7], 3).unwrap();
/// let groups: Vec<Vec<i32>> = chunks.map(|g| g.to_vec()).collect();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// ```
pub struct Chunks<S: Source> {
    /// The source being consumed.
    source: S,
    /// Number of elements in each group.
    size: WindowSize,
    state: AdaptorState,
}

impl<I: Iterator> Chunks<IterSource<I>> {
    /// Creates a `Chunks` adapter over a plain iterable.
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

impl<I, T, E> Chunks<TryIterSource<I>>
where
    I: Iterator<Item = std::result::Result<T, E>>,
{
    /// Creates a `Chunks` adapter over an iterable of results.
    ///
    /// The resulting iterator yields `Result<Group<T>, E>`; an `Err` item
    /// from the source is passed through unchanged and ends the iteration.
    pub fn try_new(
        iterable: impl IntoIterator<IntoIter = I>,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Self> {
        let size = n.try_into()?;
        Ok(Self::with_size(TryIterSource::new(iterable), size))
    }
}

impl<S: Source> Chunks<S> {
    /// Creates a `Chunks` adapter over an arbitrary [`Source`].
    pub fn from_source(source: S, n: impl TryInto<WindowSize, Error = Error>) -> Result<Self> {
        let size = n.try_into()?;
        Ok(Self::with_size(source, size))
    }

    /// Creates a `Chunks` adapter from an already validated size.
    pub fn with_size(source: S, size: WindowSize) -> Self {
        log::trace!("chunks: created with n = {size}");
        Chunks {
            source,
            size,
            state: AdaptorState::Fresh,
        }
    }

    /// Pulls the next group of `n` elements.
    ///
    /// Returns `Ok(None)` once the source is exhausted, including when it
    /// ends in the middle of a group. A source error is returned as-is. After
    /// either outcome the adaptor is terminal and never pulls again.
    pub fn next_group(&mut self) -> std::result::Result<Option<Group<S::Item>>, S::Error> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        let outcome = pull_exact(&mut self.source, self.size).map(|g| g.map(Group::from_vec));
        self.state.record(&outcome, "chunks");
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

    /// Returns the source being consumed.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the source, positioned after the last pulled element.
    pub fn into_source(self) -> S {
        self.source
    }

    fn groups_size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            return (0, Some(0));
        }
        let n = self.size.get();
        let (lower, upper) = self.source.size_hint();
        (lower / n, upper.map(|upper| upper / n))
    }
}

impl<I: Iterator> Iterator for Chunks<IterSource<I>> {
    type Item = Group<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_group() {
            Ok(group) => group,
            Err(never) => match never {},
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups_size_hint()
    }
}

impl<I, T, E> Iterator for Chunks<TryIterSource<I>>
where
    I: Iterator<Item = std::result::Result<T, E>>,
{
    type Item = std::result::Result<Group<T>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = try_or_ret_some_err!(self.next_group());
        group.map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            return (0, Some(0));
        }
        // A failed pull uses up one element and still yields an item.
        let n = self.size.get();
        (0, self.source.size_hint().1.map(|upper| upper.div_ceil(n)))
    }
}

impl<I: Iterator> FusedIterator for Chunks<IterSource<I>> {}

impl<I, T, E> FusedIterator for Chunks<TryIterSource<I>> where
    I: Iterator<Item = std::result::Result<T, E>>
{
}

impl<S: Source + fmt::Debug> fmt::Debug for Chunks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunks({:?}, {})", self.source, self.size)
    }
}

/// Pulls exactly `size` elements from `source`.
///
/// Returns `Ok(None)` if the source is exhausted before the group is full;
/// the elements pulled so far are dropped. A failed pull also drops them.
pub(crate) fn pull_exact<S: Source>(
    source: &mut S,
    size: WindowSize,
) -> std::result::Result<Option<Vec<S::Item>>, S::Error> {
    let n = size.get();
    let mut elements = Vec::with_capacity(n.min(PREALLOCATION_LIMIT));
    while elements.len() < n {
        match source.pull() {
            Ok(Some(element)) => elements.push(element),
            outcome => {
                if !elements.is_empty() {
                    log::debug!(
                        "discarding partial group: {} of {n} elements",
                        elements.len()
                    );
                }
                return outcome.map(|_| None);
            }
        }
    }
    Ok(Some(elements))
}
