//! Node storage. Every node of a [`Tree`][crate::Tree] lives in an [`Arena`] and links to its
//! parent and children through [`NodeId`]s instead of pointers, so erasing a node can never leave
//! a dangling reference behind: an id whose slot has been released simply stops resolving.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::util::Side;

/// A handle to a node in an [`Arena`]. The generation distinguishes the current occupant of a slot
/// from earlier occupants that have since been released.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

/// A link to another node. `None` is an empty child slot or, for `parent`, the root.
pub(crate) type Link = Option<NodeId>;

/// A single cell of the tree. Nodes own nothing but their value; the structure is the links.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which side of this node `child` hangs from, if it is a child at all.
    pub(crate) fn side_of(&self, child: NodeId) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("parent", &self.parent)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Contiguous storage for nodes. Released slots are recycled through a free list and get a new
/// generation so that stale [`NodeId`]s are detected rather than aliasing the new occupant.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Upper bound on how many nodes this arena could ever hold.
    pub(crate) fn max_len() -> usize {
        isize::MAX as usize / mem::size_of::<Slot<T>>().max(1)
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` in a fresh, unlinked node.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                debug_assert!(slot.node.is_none(), "free list pointed at a live slot");
                slot.node = Some(Node::new(value));
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(Node::new(value)),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Frees the node behind `id` and hands back its value. The caller must already have unlinked
    /// it from the tree.
    ///
    /// ## Panics
    ///
    /// When `id` is stale.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let slot = &mut self.slots[id.index];
        assert!(
            slot.generation == id.generation && slot.node.is_some(),
            "released a stale node id {:?}",
            id
        );
        let node = slot.node.take().expect("checked above");
        // A slot that has used up its generations is retired for good.
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            self.free.push(id.index);
        }
        self.len -= 1;
        node.value
    }

    /// Resolves `id`, or `None` if it refers to a node that has been released.
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("tree links only point at live nodes")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("tree links only point at live nodes")
    }
}
