//! Bidirectional positions into a [`Tree`].
//!
//! A [`Position`] is the iterator of this crate in the container sense: a copyable token naming
//! one node (or the end) plus the traversal order used to step from it. Because it does not
//! borrow the tree it survives insertions and the erasure of other nodes, and can be handed back
//! to [`Tree::erase`] or [`Tree::extract`].
//!
//! A [`Cursor`] bundles a position with a shared borrow of its tree for convenient reading.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::node::Link;
use crate::traversal::{Inorder, Traversal};
use crate::Tree;

/// A place in a [`Tree`], walked in the order `O`.
///
/// The end position (`None` inside) doubles as the before-begin position: stepping back from the
/// first element lands on it, and stepping back from it lands on the last element.
///
/// # Examples
///
/// ```
/// use travtree::{Preorder, Tree};
///
/// let tree = Tree::from([5, 3, 7, 4]);
///
/// let mut position = tree.begin_with::<Preorder>();
/// let mut seen = Vec::new();
/// while let Some(value) = tree.get(position) {
///     seen.push(*value);
///     tree.advance(&mut position);
/// }
/// assert_eq!(seen, [5, 3, 4, 7]);
///
/// // Step back from the end to reach the last element.
/// tree.retreat(&mut position);
/// assert_eq!(tree.get(position), Some(&7));
/// ```
pub struct Position<O = Inorder> {
    node: Link,
    order: PhantomData<O>,
}

impl<O> Position<O> {
    pub(crate) fn new(node: Link) -> Self {
        Self {
            node,
            order: PhantomData,
        }
    }

    /// The end (and before-begin) position.
    pub fn end() -> Self {
        Self::new(None)
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The same node, walked in a different order from here on.
    pub fn with_order<P>(self) -> Position<P> {
        Position::new(self.node)
    }

    pub(crate) fn node(&self) -> Link {
        self.node
    }
}

impl<O> Default for Position<O> {
    fn default() -> Self {
        Self::end()
    }
}

impl<O> Clone for Position<O> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<O> Copy for Position<O> {}

impl<O> PartialEq for Position<O> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}
impl<O> Eq for Position<O> {}

impl<O> Hash for Position<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<O> fmt::Debug for Position<O>
where
    O: Traversal,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(id) => write!(f, "Position<{}>({:?})", O::NAME, id),
            None => write!(f, "Position<{}>(end)", O::NAME),
        }
    }
}

/// A [`Position`] together with a shared borrow of its [`Tree`].
///
/// # Examples
///
/// ```
/// use travtree::{Postorder, Tree};
///
/// let tree = Tree::from([5, 3, 7, 4]);
/// let mut cursor = tree.cursor_with::<Postorder>();
///
/// assert_eq!(cursor.current(), Some(&4));
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&3));
/// assert_eq!(cursor.peek_next(), Some(&7));
/// cursor.move_prev();
/// cursor.move_prev();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T, C, O = Inorder> {
    tree: &'a Tree<T, C>,
    position: Position<O>,
}

impl<'a, T, C, O> Cursor<'a, T, C, O>
where
    O: Traversal,
{
    pub(crate) fn new(tree: &'a Tree<T, C>, position: Position<O>) -> Self {
        Self { tree, position }
    }

    /// The value under the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.tree.get(self.position)
    }

    /// The current position, detached from the borrow.
    pub fn position(&self) -> Position<O> {
        self.position
    }

    /// Whether the cursor sits on the end position.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Steps to the next element in `O`. Stepping from the last element reaches the end; stepping
    /// from the end stays there.
    pub fn move_next(&mut self) {
        self.tree.advance(&mut self.position);
    }

    /// Steps to the previous element in `O`. Stepping from the end reaches the last element;
    /// stepping from the first element reaches the end.
    pub fn move_prev(&mut self) {
        self.tree.retreat(&mut self.position);
    }

    /// The value [`Cursor::move_next`] would land on.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut position = self.position;
        self.tree.advance(&mut position);
        self.tree.get(position)
    }

    /// The value [`Cursor::move_prev`] would land on.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut position = self.position;
        self.tree.retreat(&mut position);
        self.tree.get(position)
    }
}

impl<T, C, O> Clone for Cursor<'_, T, C, O> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            position: self.position,
        }
    }
}

impl<T, C, O> PartialEq for Cursor<'_, T, C, O> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T, C, O> fmt::Debug for Cursor<'_, T, C, O>
where
    T: fmt::Debug,
    O: Traversal,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("current", &self.tree.get(self.position))
            .finish()
    }
}
