//! Orderings a [`Tree`][crate::Tree] can be built with.
//!
//! A comparator is a strict weak order: `less(a, b)` must be irreflexive and transitive, and two
//! values are considered the same element when neither is less than the other.
//!
//! # Examples
//!
//! ```
//! use travtree::{Descending, Tree};
//!
//! let tree = Tree::from_iter_with([1, 3, 2], Descending);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! // Any `Fn(&T, &T) -> bool` works too.
//! let by_len = Tree::from_iter_with(["ccc", "a", "bb", "zz"], |a: &&str, b: &&str| a.len() < b.len());
//! assert_eq!(by_len.len(), 3);
//! ```

/// A strict weak order over `T`.
pub trait Compare<T: ?Sized> {
    /// Whether `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Whether `a` and `b` are the same element under this order.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The type's own [`Ord`] order. This is the default comparator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse of the type's [`Ord`] order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Descending;

impl<T> Compare<T> for Descending
where
    T: Ord + ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
