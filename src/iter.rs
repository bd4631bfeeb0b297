//! Standard-library iterator adapters over a [`Tree`][crate::Tree].

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::node::{Arena, Link};
use crate::traversal::{Inorder, Traversal};

/// A double-ended iterator over shared references to a tree's values in the order `O`.
///
/// Created by [`Tree::iter`][crate::Tree::iter] and friends.
pub struct Iter<'a, T, O = Inorder> {
    arena: &'a Arena<T>,
    front: Link,
    back: Link,
    remaining: usize,
    order: PhantomData<O>,
}

impl<'a, T, O> Iter<'a, T, O>
where
    O: Traversal,
{
    pub(crate) fn new(arena: &'a Arena<T>, root: Link, len: usize) -> Self {
        Self {
            arena,
            front: root.map(|root| O::first(arena, root)),
            back: root.map(|root| O::last(arena, root)),
            remaining: len,
            order: PhantomData,
        }
    }
}

impl<'a, T, O> Iterator for Iter<'a, T, O>
where
    O: Traversal,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = O::next(self.arena, id);
        Some(&self.arena[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, O> DoubleEndedIterator for Iter<'_, T, O>
where
    O: Traversal,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = O::prev(self.arena, id);
        Some(&self.arena[id].value)
    }
}

impl<T, O> ExactSizeIterator for Iter<'_, T, O> where O: Traversal {}

impl<T, O> FusedIterator for Iter<'_, T, O> where O: Traversal {}

impl<T, O> Clone for Iter<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            order: PhantomData,
        }
    }
}

impl<T, O> fmt::Debug for Iter<'_, T, O>
where
    T: fmt::Debug,
    O: Traversal,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over a tree's values in sorted order.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.values.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Postorder, Preorder, Tree};

    #[test]
    fn meets_in_the_middle() {
        let tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), [&3, &4, &5]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn reversed_orders() {
        let tree = Tree::from([5, 3, 7, 4]);

        let pre: Vec<_> = tree.preorder().rev().copied().collect();
        assert_eq!(pre, [7, 4, 3, 5]);
        let post: Vec<_> = tree.postorder().rev().copied().collect();
        assert_eq!(post, [5, 7, 3, 4]);
    }

    #[test]
    fn map_over_inorder() {
        let tree = Tree::from([2, 1, 3]);
        let squares: Vec<_> = tree.iter().map(|x| x * x).collect();
        assert_eq!(squares, [1, 4, 9]);
    }

    #[test]
    fn owning_iteration_is_sorted() {
        let tree = Tree::from([String::from("b"), String::from("c"), String::from("a")]);
        let mut iter = tree.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn debug_lists_remaining() {
        let tree = Tree::from([2, 1, 3]);
        let mut iter = tree.iter_with::<Preorder>();
        iter.next();
        assert_eq!(format!("{:?}", iter), "[1, 3]");
        assert_eq!(format!("{:?}", tree.iter_with::<Postorder>()), "[1, 3, 2]");
    }
}
