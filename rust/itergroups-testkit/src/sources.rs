//! Instrumented sources.

use std::cell::Cell;
use std::rc::Rc;

use itergroups_common::Error;

/// The failure reported by [`FailingIter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pull {pull} failed")]
pub struct PullFailure {
    /// 1-based index of the failing pull.
    pub pull: usize,
}

/// An iterator of `Result<T, Error>` that fails on one chosen pull.
///
/// Every other pull yields the next element of the wrapped iterator in
/// `Ok`. The failing pull does not consume an element, so the wrapped
/// iterator resumes where it left off if pulled again.
pub struct FailingIter<I> {
    inner: I,
    fail_at: usize,
    pulls: usize,
}

impl<I: Iterator> FailingIter<I> {
    /// Wraps `iterable` so that pull number `fail_at` (1-based) fails.
    pub fn new(iterable: impl IntoIterator<IntoIter = I>, fail_at: usize) -> Self {
        assert_ne!(fail_at, 0, "pulls are numbered from 1");
        FailingIter {
            inner: iterable.into_iter(),
            fail_at,
            pulls: 0,
        }
    }

    /// Number of pulls made so far, including the failing one.
    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl<I: Iterator> Iterator for FailingIter<I> {
    type Item = Result<I::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pulls += 1;
        if self.pulls == self.fail_at {
            let failure = PullFailure { pull: self.pulls };
            return Some(Err(Error::source_pull_failed("failing source", failure)));
        }
        self.inner.next().map(Ok)
    }
}

/// Shared handle reading the number of pulls made through a [`PullCounter`].
#[derive(Debug, Clone, Default)]
pub struct PullCount(Rc<Cell<usize>>);

impl PullCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// An iterator wrapper that counts calls to `next`, including the ones that
/// return `None`.
#[derive(Debug)]
pub struct PullCounter<I> {
    inner: I,
    count: PullCount,
}

impl<I: Iterator> PullCounter<I> {
    /// Wraps `iterable` and returns the wrapper with a handle to its count.
    pub fn new(iterable: impl IntoIterator<IntoIter = I>) -> (Self, PullCount) {
        let count = PullCount::default();
        let counter = PullCounter {
            inner: iterable.into_iter(),
            count: count.clone(),
        };
        (counter, count)
    }
}

impl<I: Iterator> Iterator for PullCounter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.count.0.set(self.count.0.get() + 1);
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use itergroups_common::ErrorKind;

    use super::*;

    #[test]
    fn test_failing_iter() {
        let mut it = FailingIter::new([10, 20, 30], 2);
        assert_eq!(it.next().unwrap().unwrap(), 10);

        let err = it.next().unwrap().unwrap_err();
        match err.into_kind() {
            ErrorKind::SourcePullFailed { source, .. } => {
                let failure = source.downcast_ref::<PullFailure>().unwrap();
                assert_eq!(failure.pull, 2);
            }
            other => panic!("unexpected kind: {other:?}"),
        }

        assert_eq!(it.next().unwrap().unwrap(), 20);
        assert_eq!(it.pulls(), 3);
    }

    #[test]
    fn test_pull_counter() {
        let (mut it, count) = PullCounter::new(vec!['a']);
        assert_eq!(count.get(), 0);
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(count.get(), 3);
    }
}
