//! Traversal orders. Each order is a zero-sized marker type that knows how to step from a node to
//! its neighbours in that order using nothing but the parent and child links. No stack, no
//! recursion, and no mutation: every step is `O(depth)`.
//!
//! The orders are selected at compile time through the type parameter of
//! [`Position`][crate::Position], [`Cursor`][crate::Cursor] and [`Iter`][crate::Iter].
//!
//! ```text
//!        5
//!       / \
//!      3   7         preorder:  5 3 4 7
//!       \            inorder:   3 4 5 7
//!        4           postorder: 4 3 7 5
//! ```

use std::fmt;

use crate::node::{Arena, NodeId};

pub(crate) mod sealed {
    use crate::node::{Arena, NodeId};

    /// The stepping rules behind a [`Traversal`][super::Traversal]. Kept out of the public API
    /// because they work on raw arena ids.
    pub trait Sealed {
        /// The node after `id` in this order.
        fn next<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId>;

        /// The node before `id` in this order.
        fn prev<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId>;

        /// The first node of the subtree rooted at `root`.
        fn first<T>(arena: &Arena<T>, root: NodeId) -> NodeId;

        /// The last node of the subtree rooted at `root`.
        fn last<T>(arena: &Arena<T>, root: NodeId) -> NodeId;

        /// Where iteration continues after `id` is erased, computed before the erase happens.
        ///
        /// Erasing a node with two children moves its inorder successor into its slot, so this
        /// can differ from [`Sealed::next`].
        fn next_after_erase<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
            Self::next(arena, id)
        }
    }
}

/// A traversal order over a tree: [`Preorder`], [`Inorder`] or [`Postorder`].
///
/// This trait is sealed.
pub trait Traversal: sealed::Sealed + Copy + Default + Eq + fmt::Debug + 'static {
    /// Human readable name of the order, used in log output.
    const NAME: &'static str;
}

/// Node, then left subtree, then right subtree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Preorder;

/// Left subtree, then node, then right subtree. Visits values in sorted order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inorder;

/// Left subtree, then right subtree, then node. Every node comes after its descendants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Postorder;

impl Traversal for Preorder {
    const NAME: &'static str = "preorder";
}

impl Traversal for Inorder {
    const NAME: &'static str = "inorder";
}

impl Traversal for Postorder {
    const NAME: &'static str = "postorder";
}

/// Follows left links down from `id`.
pub(crate) fn leftmost<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    while let Some(left) = arena[id].left {
        id = left;
    }
    id
}

/// Follows right links down from `id`.
pub(crate) fn rightmost<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    while let Some(right) = arena[id].right {
        id = right;
    }
    id
}

/// Descends from `id` preferring right children, stopping at a leaf. This is the last node of
/// the subtree in preorder.
fn deepest_right<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    loop {
        let node = &arena[id];
        match node.right.or(node.left) {
            Some(child) => id = child,
            None => return id,
        }
    }
}

/// Descends from `id` preferring left children, stopping at a leaf. This is the first node of
/// the subtree in postorder.
fn deepest_left<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    loop {
        let node = &arena[id];
        match node.left.or(node.right) {
            Some(child) => id = child,
            None => return id,
        }
    }
}

impl sealed::Sealed for Preorder {
    fn next<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let node = &arena[id];
        if let Some(child) = node.left.or(node.right) {
            return Some(child);
        }

        // A leaf: climb until we leave a left subtree whose parent also has a right subtree.
        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = &arena[p];
            if parent_node.left == Some(child) {
                if let Some(right) = parent_node.right {
                    return Some(right);
                }
            }
            child = p;
            parent = parent_node.parent;
        }
        None
    }

    fn prev<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let parent = arena[id].parent?;
        let parent_node = &arena[parent];
        match parent_node.left {
            Some(left) if parent_node.right == Some(id) => Some(deepest_right(arena, left)),
            _ => Some(parent),
        }
    }

    fn first<T>(_arena: &Arena<T>, root: NodeId) -> NodeId {
        root
    }

    fn last<T>(arena: &Arena<T>, root: NodeId) -> NodeId {
        deepest_right(arena, root)
    }

    fn next_after_erase<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let node = &arena[id];
        match (node.left, node.right) {
            // The successor takes over this slot and so is visited before the left subtree.
            (Some(_), Some(right)) => Some(leftmost(arena, right)),
            _ => Self::next(arena, id),
        }
    }
}

impl sealed::Sealed for Inorder {
    fn next<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let node = &arena[id];
        if let Some(right) = node.right {
            return Some(leftmost(arena, right));
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = &arena[p];
            if parent_node.left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = parent_node.parent;
        }
        None
    }

    fn prev<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let node = &arena[id];
        if let Some(left) = node.left {
            return Some(rightmost(arena, left));
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = &arena[p];
            if parent_node.right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = parent_node.parent;
        }
        None
    }

    fn first<T>(arena: &Arena<T>, root: NodeId) -> NodeId {
        leftmost(arena, root)
    }

    fn last<T>(arena: &Arena<T>, root: NodeId) -> NodeId {
        rightmost(arena, root)
    }
}

impl sealed::Sealed for Postorder {
    fn next<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let parent = arena[id].parent?;
        match arena[parent].right {
            Some(right) if right != id => Some(deepest_left(arena, right)),
            _ => Some(parent),
        }
    }

    fn prev<T>(arena: &Arena<T>, id: NodeId) -> Option<NodeId> {
        let node = &arena[id];
        if let Some(child) = node.right.or(node.left) {
            return Some(child);
        }

        // A leaf: climb until we leave a right subtree whose parent also has a left subtree.
        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = &arena[p];
            if parent_node.right == Some(child) {
                if let Some(left) = parent_node.left {
                    return Some(left);
                }
            }
            child = p;
            parent = parent_node.parent;
        }
        None
    }

    fn first<T>(arena: &Arena<T>, root: NodeId) -> NodeId {
        deepest_left(arena, root)
    }

    fn last<T>(_arena: &Arena<T>, root: NodeId) -> NodeId {
        root
    }
}
