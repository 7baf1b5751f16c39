//! Immutable, fixed-size group of elements produced by an adaptor.
//!
//! A [`Group`] is built in full before it is handed out and never changes
//! afterwards. The storage is an `Arc<[T]>`, so cloning a group never copies
//! its elements.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, cheaply cloneable, ordered group of elements.
///
/// Groups produced by [`Chunks`](crate::Chunks) always hold exactly as many
/// elements as the adaptor's window size.
#[derive(Clone)]
pub struct Group<T> {
    elements: Arc<[T]>,
}

impl<T> Group<T> {
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        debug_assert!(!elements.is_empty());
        Group {
            elements: elements.into(),
        }
    }

    /// Returns the number of elements in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the group as a fixed-size array reference, or `None` if the
    /// group does not hold exactly `N` elements.
    pub fn as_array<const N: usize>(&self) -> Option<&[T; N]> {
        self.as_slice().try_into().ok()
    }

    /// Converts to a `Vec<T>` by cloning the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Returns true if both groups share the same storage.
    pub fn ptr_eq(this: &Group<T>, other: &Group<T>) -> bool {
        Arc::ptr_eq(&this.elements, &other.elements)
    }
}

impl<T> Deref for Group<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for Group<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for Group<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

/// Groups print like tuples: `(1, 2, 3)`.
impl<T: fmt::Debug> fmt::Debug for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        for element in self.iter() {
            tuple.field(element);
        }
        tuple.finish()
    }
}

impl<T: PartialEq> PartialEq for Group<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Group<T> {}

impl<T: PartialEq> PartialEq<[T]> for Group<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Group<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Group<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for Group<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Group<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Group<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, T> IntoIterator for &'a Group<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// By-value iterator over a [`Group`].
///
/// The storage may be shared with other groups, so elements are cloned out.
#[derive(Clone)]
pub struct GroupIntoIter<T> {
    elements: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for GroupIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.elements.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for GroupIntoIter<T> {}

impl<T: Clone> IntoIterator for Group<T> {
    type Item = T;
    type IntoIter = GroupIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        GroupIntoIter {
            elements: self.elements,
            pos: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_basic_access() {
        let group = Group::from_vec(vec![1, 2, 3]);
        assert_eq!(group.len(), 3);
        assert!(!group.is_empty());
        assert_eq!(group[1], 2);
        assert_eq!(group.first(), Some(&1));
        assert_eq!(group.last(), Some(&3));
        assert_eq!(group.as_array::<3>(), Some(&[1, 2, 3]));
        assert_eq!(group.as_array::<2>(), None);
        assert_eq!(group.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_comparisons() {
        let group = Group::from_vec(vec!["a", "b"]);
        assert_eq!(group, ["a", "b"]);
        assert_eq!(group, vec!["a", "b"]);
        assert_eq!(group, *["a", "b"].as_slice());
        assert_eq!(group, Group::from_vec(vec!["a", "b"]));
        assert!(Group::from_vec(vec![1, 2]) < Group::from_vec(vec![1, 3]));

        let set: HashSet<_> = [group.clone(), group.clone()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_debug_looks_like_tuple() {
        assert_eq!(format!("{:?}", Group::from_vec(vec![1, 2, 3])), "(1, 2, 3)");
        assert_eq!(format!("{:?}", Group::from_vec(vec![7])), "(7,)");
    }

    #[test]
    fn test_clone_shares_storage() {
        let group = Group::from_vec(vec![String::from("x")]);
        let copy = group.clone();
        assert!(Group::ptr_eq(&group, &copy));
        assert!(!Group::ptr_eq(&group, &Group::from_vec(vec![String::from("x")])));
    }

    #[test]
    fn test_into_iter() {
        let group = Group::from_vec(vec![10, 20, 30]);
        let borrowed: Vec<&i32> = (&group).into_iter().collect();
        assert_eq!(borrowed, vec![&10, &20, &30]);

        let mut owned = group.into_iter();
        assert_eq!(owned.len(), 3);
        assert_eq!(owned.next(), Some(10));
        assert_eq!(owned.size_hint(), (2, Some(2)));
        assert_eq!(owned.collect::<Vec<_>>(), vec![20, 30]);
    }
}
