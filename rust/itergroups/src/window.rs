//! Immutable window of shared element handles produced by [`Slices`](crate::Slices).
//!
//! Consecutive windows overlap in all but one element. Every element is
//! pulled once, placed behind its own `Arc`, and carried from one window to
//! the next by cloning that handle, so the element itself is never copied
//! and `T` does not have to be `Clone`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;
use std::sync::Arc;

/// An immutable, cheaply cloneable, ordered window of elements.
///
/// Indexing and iteration give plain `&T`. [`handle`](Window::handle) exposes
/// the shared `Arc<T>` behind a slot, which is the same allocation in every
/// window the element belongs to.
pub struct Window<T> {
    elements: Arc<[Arc<T>]>,
}

impl<T> Clone for Window<T> {
    fn clone(&self) -> Self {
        Window {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T> Window<T> {
    pub(crate) fn from_handles(elements: Vec<Arc<T>>) -> Self {
        debug_assert!(!elements.is_empty());
        Window {
            elements: elements.into(),
        }
    }

    /// Builds the window following `self`: drops the first element and
    /// appends `element`. Only the handles of the carried elements are cloned.
    pub(crate) fn slide(&self, element: T) -> Window<T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.elements.iter().skip(1).cloned());
        elements.push(Arc::new(element));
        Window::from_handles(elements)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index).map(|e| &**e)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last().map(|e| &**e)
    }

    /// Returns the shared handle of the element at `index`.
    pub fn handle(&self, index: usize) -> Option<&Arc<T>> {
        self.elements.get(index)
    }

    /// Returns all element handles in order.
    pub fn handles(&self) -> &[Arc<T>] {
        &self.elements
    }

    pub fn iter(&self) -> WindowIter<'_, T> {
        WindowIter {
            inner: self.elements.iter(),
        }
    }

    /// Converts to a `Vec<T>` by cloning the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if both windows share the same storage.
    pub fn ptr_eq(this: &Window<T>, other: &Window<T>) -> bool {
        Arc::ptr_eq(&this.elements, &other.elements)
    }
}

impl<T> Index<usize> for Window<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

/// Windows print like tuples: `(1, 2, 3)`.
impl<T: fmt::Debug> fmt::Debug for Window<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        for element in self.iter() {
            tuple.field(element);
        }
        tuple.finish()
    }
}

impl<T: PartialEq> PartialEq for Window<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Window<T> {}

impl<T: PartialEq> PartialEq<[T]> for Window<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Window<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Window<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for Window<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Window<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Window<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<'a, T> IntoIterator for &'a Window<T> {
    type Item = &'a T;
    type IntoIter = WindowIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the elements of a [`Window`].
#[derive(Clone)]
pub struct WindowIter<'a, T> {
    inner: std::slice::Iter<'a, Arc<T>>,
}

impl<'a, T> Iterator for WindowIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|e| &**e)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for WindowIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| &**e)
    }
}

impl<T> ExactSizeIterator for WindowIter<'_, T> {}

impl<T> FusedIterator for WindowIter<'_, T> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn window<T>(items: Vec<T>) -> Window<T> {
        Window::from_handles(items.into_iter().map(Arc::new).collect())
    }

    /// Owns a buffer and cannot be cloned.
    #[derive(Debug, PartialEq)]
    struct Payload(Vec<u8>);

    #[test]
    fn test_basic_access() {
        let w = window(vec![1, 2, 3]);
        assert_eq!(w.len(), 3);
        assert!(!w.is_empty());
        assert_eq!(w[1], 2);
        assert_eq!(w.get(3), None);
        assert_eq!(w.first(), Some(&1));
        assert_eq!(w.last(), Some(&3));
        assert_eq!(w.to_vec(), vec![1, 2, 3]);
        assert_eq!(w.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_slide_shares_carried_elements() {
        let first = window(vec![Payload(vec![1]), Payload(vec![2]), Payload(vec![3])]);
        let second = first.slide(Payload(vec![4]));
        assert_eq!(second, [Payload(vec![2]), Payload(vec![3]), Payload(vec![4])]);
        for i in 0..2 {
            assert!(Arc::ptr_eq(
                first.handle(i + 1).unwrap(),
                second.handle(i).unwrap()
            ));
            assert!(std::ptr::eq(first[i + 1].0.as_ptr(), second[i].0.as_ptr()));
        }
        // The first window is unaffected.
        assert_eq!(first[0], Payload(vec![1]));
        assert_eq!(Arc::strong_count(first.handle(0).unwrap()), 1);
        assert_eq!(Arc::strong_count(first.handle(1).unwrap()), 2);
    }

    #[test]
    fn test_comparisons() {
        let w = window(vec!["a", "b"]);
        assert_eq!(w, ["a", "b"]);
        assert_eq!(w, vec!["a", "b"]);
        assert_eq!(w, *["a", "b"].as_slice());
        assert_eq!(w, window(vec!["a", "b"]));
        assert!(window(vec![1, 2]) < window(vec![1, 3]));

        let set: HashSet<_> = [w.clone(), window(vec!["a", "b"])].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_debug_looks_like_tuple() {
        assert_eq!(format!("{:?}", window(vec![1, 2, 3])), "(1, 2, 3)");
        assert_eq!(format!("{:?}", window(vec![7])), "(7,)");
    }

    #[test]
    fn test_clone_shares_storage() {
        let w = window(vec![String::from("x")]);
        assert!(Window::ptr_eq(&w, &w.clone()));
        assert!(!Window::ptr_eq(&w, &window(vec![String::from("x")])));
    }
}
