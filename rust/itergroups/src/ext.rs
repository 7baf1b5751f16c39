use itergroups_common::{Error, Result};

use crate::chunks::Chunks;
use crate::slices::Slices;
use crate::source::{IterSource, TryIterSource};
use crate::window_size::WindowSize;

/// Extension trait for constructing the grouping adapters in method position.
///
/// Implemented for everything that is [`IntoIterator`].
///
/// ```
/// use itergroups::GroupIteratorsExt;
///
/// let pairs: Vec<_> = (1..=5).slices_of(2).unwrap().map(|g| g.to_vec()).collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
/// ```
pub trait GroupIteratorsExt: IntoIterator + Sized {
    /// Adapts `self` to yield disjoint groups of `n` elements.
    ///
    /// See [`Chunks::new`].
    fn chunks_of(
        self,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Chunks<IterSource<Self::IntoIter>>> {
        Chunks::new(self, n)
    }

    /// Adapts `self` to yield every window of `n` consecutive elements.
    ///
    /// See [`Slices::new`].
    fn slices_of(
        self,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Slices<IterSource<Self::IntoIter>>> {
        Slices::new(self, n)
    }

    /// Like [`chunks_of`](GroupIteratorsExt::chunks_of), for iterables of
    /// `Result<T, E>`.
    fn try_chunks_of<T, E>(
        self,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Chunks<TryIterSource<Self::IntoIter>>>
    where
        Self: IntoIterator<Item = std::result::Result<T, E>>,
    {
        Chunks::try_new(self, n)
    }

    /// Like [`slices_of`](GroupIteratorsExt::slices_of), for iterables of
    /// `Result<T, E>`.
    fn try_slices_of<T, E>(
        self,
        n: impl TryInto<WindowSize, Error = Error>,
    ) -> Result<Slices<TryIterSource<Self::IntoIter>>>
    where
        Self: IntoIterator<Item = std::result::Result<T, E>>,
    {
        Slices::try_new(self, n)
    }
}

impl<I: IntoIterator> GroupIteratorsExt for I {}

#[cfg(test)]
mod tests {
    use crate::GroupIteratorsExt;

    #[test]
    fn test_chunks_of() {
        let groups: Vec<_> = vec!['a', 'b', 'c', 'd', 'e'].chunks_of(2).unwrap().collect();
        assert_eq!(groups, vec![['a', 'b'], ['c', 'd']]);
    }

    #[test]
    fn test_borrowed_elements() {
        let words = vec![String::from("x"), String::from("y"), String::from("z")];
        let windows: Vec<_> = (&words).slices_of(2).unwrap().collect();
        assert_eq!(windows.len(), 2);
        assert!(std::ptr::eq(windows[0][1], windows[1][0]));
        assert!(std::ptr::eq(windows[1][1], &words[2]));
    }

    #[test]
    fn test_try_variants() {
        let items: Vec<Result<u8, &str>> = vec![Ok(1), Ok(2), Ok(3)];
        let chunks: Vec<_> = items.clone().try_chunks_of(2).unwrap().collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].as_ref().unwrap(), &[1, 2]);

        let windows: Result<Vec<_>, _> = items.try_slices_of(2).unwrap().collect();
        assert_eq!(windows.unwrap(), vec![[1, 2], [2, 3]]);
    }

    #[test]
    fn test_invalid_size() {
        assert!([1, 2].chunks_of(0).unwrap_err().is_invalid_arg());
        assert!([1, 2].slices_of(-1).unwrap_err().is_invalid_arg());
    }

    #[test]
    fn test_composition() {
        // Pairs of consecutive windows: ((1, 2), (2, 3)), ((3, 4), (4, 5)).
        let nested: Vec<_> = (1..=5)
            .slices_of(2)
            .unwrap()
            .chunks_of(2)
            .unwrap()
            .map(|outer| outer.iter().map(|w| w.to_vec()).collect::<Vec<_>>())
            .collect();
        assert_eq!(
            nested,
            vec![vec![vec![1, 2], vec![2, 3]], vec![vec![3, 4], vec![4, 5]]]
        );
    }
}
