//! An unbalanced binary search tree set whose nodes link to their parents as well as their
//! children, so it can be walked in preorder, inorder or postorder from any node without a stack.
//!
//! # Examples
//!
//! ```
//! use travtree::{Postorder, Preorder, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//!
//! for value in [5, 3, 7, 4] {
//!     tree.insert(value);
//! }
//!
//! // Inserting an equal value again is rejected and leaves the tree alone.
//! let (position, inserted) = tree.insert(3);
//! assert!(!inserted);
//! assert_eq!(position, tree.end());
//! assert_eq!(tree.len(), 4);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 7]);
//! assert_eq!(tree.iter_with::<Preorder>().copied().collect::<Vec<_>>(), [5, 3, 4, 7]);
//! assert_eq!(tree.iter_with::<Postorder>().copied().collect::<Vec<_>>(), [4, 3, 7, 5]);
//!
//! // Erasing hands back where iteration continues.
//! let next = tree.erase(tree.find(&4)).unwrap();
//! assert_eq!(tree.get(next), Some(&5));
//! assert!(!tree.contains(&4));
//! ```

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::error::PositionError;
use crate::iter::{IntoIter, Iter};
use crate::node::{Arena, Link, NodeId};
use crate::position::{Cursor, Position};
use crate::traversal::sealed::Sealed;
use crate::traversal::{leftmost, rightmost, Inorder, Postorder, Preorder, Traversal};
use crate::util::Side;

/// An unbalanced Binary Search Tree holding unique values ordered by `C`.
///
/// No rebalancing happens, so inserting values in sorted order produces a chain and operations
/// degrade to `O(n)`.
pub struct Tree<T, C = Natural> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: Link,
    len: usize,
    cmp: C,
}

/// An empty child slot: below a parent on one side, or the root of an empty tree.
type Vacancy = Option<(NodeId, Side)>;

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The largest number of values a tree of `T` could ever hold.
    pub fn max_size(&self) -> usize {
        Arena::<T>::max_len()
    }

    /// Number of nodes on the longest path from the root down to a leaf. An empty tree has height
    /// 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    /// The smallest value under the tree's order.
    pub fn first(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[leftmost(&self.arena, root)].value)
    }

    /// The largest value under the tree's order.
    pub fn last(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[rightmost(&self.arena, root)].value)
    }

    /// Position of the smallest value, or the end if the tree is empty.
    pub fn begin(&self) -> Position {
        self.begin_with()
    }

    /// Position of the first value in the order `O`, or the end if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::{Postorder, Preorder, Tree};
    ///
    /// let tree = Tree::from([5, 3, 7, 4]);
    ///
    /// assert_eq!(tree.get(tree.begin_with::<Preorder>()), Some(&5));
    /// assert_eq!(tree.get(tree.begin_with::<Postorder>()), Some(&4));
    /// ```
    pub fn begin_with<O>(&self) -> Position<O>
    where
        O: Traversal,
    {
        Position::new(self.root.map(|root| O::first(&self.arena, root)))
    }

    /// The end position in sorted order.
    pub fn end(&self) -> Position {
        Position::end()
    }

    /// The end position in the order `O`.
    pub fn end_with<O>(&self) -> Position<O>
    where
        O: Traversal,
    {
        Position::end()
    }

    /// Same as [`Tree::begin`]. Positions never hand out mutable access to values.
    pub fn cbegin(&self) -> Position {
        self.begin()
    }

    /// Same as [`Tree::end`].
    pub fn cend(&self) -> Position {
        self.end()
    }

    /// Position of the largest value, the start of a backwards walk with [`Tree::retreat`].
    pub fn rbegin(&self) -> Position {
        self.rbegin_with()
    }

    /// Position of the last value in the order `O`.
    pub fn rbegin_with<O>(&self) -> Position<O>
    where
        O: Traversal,
    {
        Position::new(self.root.map(|root| O::last(&self.arena, root)))
    }

    /// Where a backwards walk in sorted order stops. This is the same sentinel as [`Tree::end`].
    pub fn rend(&self) -> Position {
        Position::end()
    }

    /// Where a backwards walk in the order `O` stops.
    pub fn rend_with<O>(&self) -> Position<O>
    where
        O: Traversal,
    {
        Position::end()
    }

    /// The value at `position`, or `None` if it is the end or its node has been erased.
    pub fn get<O>(&self, position: Position<O>) -> Option<&T> {
        position
            .node()
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
    }

    /// The value at `position`, saying why there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::{PositionError, Tree};
    ///
    /// let mut tree = Tree::from([1, 2, 3]);
    /// let two = tree.find(&2);
    ///
    /// assert_eq!(tree.value(two), Ok(&2));
    /// assert_eq!(tree.value(tree.end()), Err(PositionError::End));
    ///
    /// tree.erase(two).unwrap();
    /// assert_eq!(tree.value(two), Err(PositionError::Stale));
    /// ```
    pub fn value<O>(&self, position: Position<O>) -> Result<&T, PositionError> {
        let id = self.resolve(position)?;
        Ok(&self.arena[id].value)
    }

    /// Moves `position` to the next value in `O`. The last value steps to the end, and the end
    /// (or an erased position) stays at the end.
    pub fn advance<O>(&self, position: &mut Position<O>)
    where
        O: Traversal,
    {
        let next = self
            .resolve(*position)
            .ok()
            .and_then(|id| O::next(&self.arena, id));
        *position = Position::new(next);
    }

    /// Moves `position` to the previous value in `O`. The end steps to the last value (so a
    /// backwards walk can start from [`Tree::end`]), and the first value steps to the end.
    pub fn retreat<O>(&self, position: &mut Position<O>)
    where
        O: Traversal,
    {
        let prev = match self.resolve(*position) {
            Ok(id) => O::prev(&self.arena, id),
            Err(PositionError::End) => self.root.map(|root| O::last(&self.arena, root)),
            Err(PositionError::Stale) => None,
        };
        *position = Position::new(prev);
    }

    /// A cursor starting at the smallest value.
    pub fn cursor(&self) -> Cursor<'_, T, C> {
        self.cursor_with()
    }

    /// A cursor starting at the first value in the order `O`.
    pub fn cursor_with<O>(&self) -> Cursor<'_, T, C, O>
    where
        O: Traversal,
    {
        Cursor::new(self, self.begin_with())
    }

    /// A cursor starting at `position`.
    pub fn cursor_at<O>(&self, position: Position<O>) -> Cursor<'_, T, C, O>
    where
        O: Traversal,
    {
        Cursor::new(self, position)
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_with()
    }

    /// Iterates over the values in the order `O`.
    pub fn iter_with<O>(&self) -> Iter<'_, T, O>
    where
        O: Traversal,
    {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// Iterates over the values in preorder.
    pub fn preorder(&self) -> Iter<'_, T, Preorder> {
        self.iter_with()
    }

    /// Iterates over the values in sorted order. Same as [`Tree::iter`].
    pub fn inorder(&self) -> Iter<'_, T, Inorder> {
        self.iter_with()
    }

    /// Iterates over the values in postorder.
    pub fn postorder(&self) -> Iter<'_, T, Postorder> {
        self.iter_with()
    }

    /// Removes the value at `position` and returns the position after it in `O`, as it was
    /// before the removal. Only positions referring to the erased node are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::{PositionError, Tree};
    ///
    /// let mut tree = Tree::from([5, 3, 7]);
    ///
    /// let next = tree.erase(tree.begin()).unwrap();
    /// assert_eq!(tree.get(next), Some(&5));
    /// assert_eq!(tree.erase(tree.end()), Err(PositionError::End));
    /// ```
    pub fn erase<O>(&mut self, position: Position<O>) -> Result<Position<O>, PositionError>
    where
        O: Traversal,
    {
        self.take(position).map(|(_, next)| next)
    }

    /// Removes every value in `[first, last)`, walking in `O`, and returns `last`. If `last` is
    /// never reached, erases through to the end. Nothing is erased if `first` is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::{Preorder, Tree};
    ///
    /// let mut tree = Tree::from([5, 3, 8, 7, 9]);
    /// let first = tree.find(&5).with_order::<Preorder>();
    /// let last = tree.find(&7).with_order::<Preorder>();
    ///
    /// let last = tree.erase_range(first, last);
    /// assert_eq!(tree.get(last), Some(&7));
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [7, 9]);
    /// ```
    pub fn erase_range<O>(&mut self, first: Position<O>, last: Position<O>) -> Position<O>
    where
        O: Traversal,
    {
        // The range is fixed before anything moves: erasing a node with two children relinks its
        // successor, which can reorder what is left in preorder.
        let mut doomed = Vec::new();
        let mut current = first;
        while current != last && self.get(current).is_some() {
            doomed.push(current);
            self.advance(&mut current);
        }

        for &position in &doomed {
            self.erase(position)
                .expect("erasing one node leaves the others live");
        }
        trace!(erased = doomed.len(), order = O::NAME, "erased range");
        current
    }

    /// Removes the value at `position` and hands it back.
    pub fn extract<O>(&mut self, position: Position<O>) -> Result<T, PositionError>
    where
        O: Traversal,
    {
        self.take(position).map(|(value, _)| value)
    }

    /// Keeps only the values for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut position = self.begin();
        while let Some(value) = self.get(position) {
            if keep(value) {
                self.advance(&mut position);
            } else {
                position = self
                    .erase(position)
                    .expect("position was resolved above");
            }
        }
    }

    /// Removes every value. Nodes are released in postorder, children before their parent, with
    /// no recursion regardless of the tree's height.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }
        let released = self.len;
        let first = self.begin_with::<Postorder>();
        self.erase_range(first, Position::end());

        debug_assert!(self.root.is_none());
        debug_assert_eq!(self.len, 0);
        debug_assert_eq!(self.arena.len(), 0);
        debug!(released, "cleared tree");
    }

    /// Exchanges the contents and comparators of two trees without moving any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
        debug!(len = self.len, other_len = other.len, "swapped trees");
    }

    /// Stores `value` in a new leaf at `vacancy`. No comparisons happen here.
    fn link(&mut self, vacancy: Vacancy, value: T) -> NodeId {
        let id = self.arena.alloc(value);
        self.len += 1;
        match vacancy {
            None => {
                self.root = Some(id);
                trace!(len = self.len, "inserted root");
            }
            Some((parent, side)) => {
                self.arena[id].parent = Some(parent);
                *self.arena[parent].child_mut(side) = Some(id);
                trace!(len = self.len, ?side, "inserted leaf");
            }
        }
        self.debug_check_links(id);
        id
    }

    fn resolve<O>(&self, position: Position<O>) -> Result<NodeId, PositionError> {
        match position.node() {
            None => Err(PositionError::End),
            Some(id) if self.arena.contains(id) => Ok(id),
            Some(_) => Err(PositionError::Stale),
        }
    }

    /// Unlinks and frees the node at `position`, returning its value and where `O` continues.
    fn take<O>(&mut self, position: Position<O>) -> Result<(T, Position<O>), PositionError>
    where
        O: Traversal,
    {
        let id = self.resolve(position)?;
        let next = O::next_after_erase(&self.arena, id);
        self.unlink(id);
        let value = self.arena.release(id);
        trace!(len = self.len, order = O::NAME, "released node");
        Ok((value, Position::new(next)))
    }

    /// Detaches `id` from the tree, reconnecting its children so the BST order is kept. Every
    /// other node keeps its id.
    fn unlink(&mut self, id: NodeId) {
        let node = &self.arena[id];
        let (parent, left, right) = (node.parent, node.left, node.right);

        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => {
                trace!("splicing only child into erased slot");
                Some(child)
            }
            (Some(left), Some(right)) => {
                // The inorder successor has no left child. Lift it out of its own slot, leaving its
                // right subtree behind, and move it into the erased node's slot.
                let successor = leftmost(&self.arena, right);
                if successor != right {
                    let successor_parent = self.arena[successor]
                        .parent
                        .expect("successor sits below the erased node");
                    let successor_right = self.arena[successor].right;
                    self.arena[successor_parent].left = successor_right;
                    if let Some(child) = successor_right {
                        self.arena[child].parent = Some(successor_parent);
                    }
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                trace!("relinked inorder successor into erased slot");
                Some(successor)
            }
        };
        self.replace_child(parent, id, replacement);

        let node = &mut self.arena[id];
        node.parent = None;
        node.left = None;
        node.right = None;
        self.len -= 1;

        if let Some(replacement) = replacement {
            self.debug_check_links(replacement);
        }
        if let Some(parent) = parent {
            self.debug_check_links(parent);
        }
    }

    /// Points whatever referenced `old` (its parent's child slot, or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.arena[parent]
                    .side_of(old)
                    .expect("parent links to its child");
                *self.arena[parent].child_mut(side) = new;
            }
        }
    }

    /// In debug builds, asserts that `id` and its neighbours point back at each other.
    fn debug_check_links(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            let node = &self.arena[id];
            match node.parent {
                Some(parent) => assert!(
                    self.arena[parent].side_of(id).is_some(),
                    "parent does not link back to {:?}",
                    id
                ),
                None => assert_eq!(self.root, Some(id), "only the root has no parent"),
            }
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.arena[child].parent, Some(id), "child does not link back");
            }
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Builds a tree ordered by `cmp` from `iter`. Later values equal to earlier ones are dropped.
    pub fn from_iter_with<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_comparator(cmp);
        tree.insert_iter(iter);
        tree
    }

    /// Inserts `value` unless an equal value is already present. Returns the position of the new
    /// value and `true`, or the end position and `false` if `value` was a duplicate (in which
    /// case it is dropped and the stored value is left untouched).
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let (position, inserted) = tree.insert(1);
    /// assert!(inserted);
    /// assert_eq!(tree.get(position), Some(&1));
    ///
    /// let (position, inserted) = tree.insert(1);
    /// assert!(!inserted);
    /// assert!(position.is_end());
    /// ```
    pub fn insert(&mut self, value: T) -> (Position, bool) {
        match self.search(&value) {
            Ok(_) => {
                trace!(len = self.len, "rejected duplicate");
                (Position::end(), false)
            }
            Err(vacancy) => (Position::new(Some(self.link(vacancy, value))), true),
        }
    }

    /// Inserts every value of `iter`, skipping duplicates.
    pub fn insert_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Position of the value equal to `key`, or the end.
    pub fn find(&self, key: &T) -> Position {
        Position::new(self.locate(key))
    }

    /// Whether a value equal to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.locate(key).is_some()
    }

    /// How many values equal `key`: always 0 or 1.
    pub fn count(&self, key: &T) -> usize {
        usize::from(self.contains(key))
    }

    /// Position of the first value that is not less than `key`, or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::Tree;
    ///
    /// let tree = Tree::from([10, 20, 30]);
    ///
    /// assert_eq!(tree.get(tree.lower_bound(&20)), Some(&20));
    /// assert_eq!(tree.get(tree.lower_bound(&15)), Some(&20));
    /// assert!(tree.lower_bound(&31).is_end());
    /// ```
    pub fn lower_bound(&self, key: &T) -> Position {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            if self.cmp.less(&node.value, key) {
                current = node.right;
            } else {
                candidate = Some(id);
                current = node.left;
            }
        }
        Position::new(candidate)
    }

    /// Position of the first value that is greater than `key`, or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::Tree;
    ///
    /// let tree = Tree::from([10, 20, 30]);
    ///
    /// assert_eq!(tree.get(tree.upper_bound(&20)), Some(&30));
    /// assert_eq!(tree.get(tree.upper_bound(&5)), Some(&10));
    /// assert!(tree.upper_bound(&30).is_end());
    /// ```
    pub fn upper_bound(&self, key: &T) -> Position {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            if self.cmp.less(key, &node.value) {
                candidate = Some(id);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        Position::new(candidate)
    }

    /// Removes the value equal to `key`. Returns how many values were removed: 0 or 1.
    pub fn erase_key(&mut self, key: &T) -> usize {
        usize::from(self.extract_key(key).is_some())
    }

    /// Removes the value equal to `key` and hands it back.
    pub fn extract_key(&mut self, key: &T) -> Option<T> {
        let position = self.find(key);
        self.extract(position).ok()
    }

    /// Moves every value of `other` that is not already present into this tree, using this
    /// tree's comparator. Values equal to one already here stay behind in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use travtree::Tree;
    ///
    /// let mut tree = Tree::from([5, 3, 7, 4]);
    /// let mut other = Tree::from([1, 2, 4]);
    ///
    /// tree.merge(&mut other);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 7]);
    /// assert_eq!(other.iter().copied().collect::<Vec<_>>(), [4]);
    /// ```
    pub fn merge<C2>(&mut self, other: &mut Tree<T, C2>) {
        // Taken in `other`'s preorder, parents before children, so the moved values keep the
        // shape they had there. Positions are collected up front since erasing may relink nodes.
        let positions: Vec<Position<Preorder>> = {
            let mut positions = Vec::with_capacity(other.len());
            let mut position = other.begin_with::<Preorder>();
            while !position.is_end() {
                positions.push(position);
                other.advance(&mut position);
            }
            positions
        };

        let mut moved = 0usize;
        for position in positions {
            // All comparisons happen before the value leaves `other`.
            let vacancy = match other.get(position).map(|value| self.search(value)) {
                Some(Err(vacancy)) => vacancy,
                _ => continue,
            };
            let value = other
                .extract(position)
                .expect("erasing one node leaves the others live");
            self.link(vacancy, value);
            moved += 1;
        }
        debug!(moved, kept = other.len(), len = self.len, "merged tree");
    }

    /// Moves every value of `other` into this tree, dropping those already present, and leaves
    /// `other` empty.
    pub fn append<C2>(&mut self, other: &mut Tree<T, C2>) {
        self.merge(other);
        other.clear();
    }

    fn locate(&self, key: &T) -> Link {
        self.search(key).ok()
    }

    /// Finds the node equal to `key`, or the vacant slot it would be linked into.
    fn search(&self, key: &T) -> Result<NodeId, Vacancy> {
        let Some(mut current) = self.root else {
            return Err(None);
        };
        loop {
            let node = &self.arena[current];
            let side = if self.cmp.less(key, &node.value) {
                Side::Left
            } else if self.cmp.less(&node.value, key) {
                Side::Right
            } else {
                return Ok(current);
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Err(Some((current, side))),
            }
        }
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    /// Copies value by value in preorder, which rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        Self::from_iter_with(self.preorder().cloned(), self.cmp.clone())
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Trees are equal when they hold equal values in the same sorted order. Comparators are not
/// compared.
impl<T, C, C2> PartialEq<Tree<T, C2>> for Tree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Tree<T, C2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for Tree<T, C> where T: Eq {}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(iter);
    }
}

impl<'a, T, C> Extend<&'a T> for Tree<T, C>
where
    T: Copy + 'a,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_iter(iter.into_iter().copied());
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut ids = Vec::with_capacity(self.len);
        let mut current = self.root.map(|root| Inorder::first(&self.arena, root));
        while let Some(id) = current {
            ids.push(id);
            current = Inorder::next(&self.arena, id);
        }

        // The whole arena goes away, so nothing needs unlinking first.
        let mut arena = mem::take(&mut self.arena);
        self.root = None;
        self.len = 0;
        IntoIter::new(ids.into_iter().map(|id| arena.release(id)).collect())
    }
}
