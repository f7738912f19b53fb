use std::sync::{Arc, Weak};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

use crate::{
    display::TreeDisplay,
    iterator::{BreadthFirstIter, DepthFirstIter},
    node::Node,
    NodeDepth, NodeId,
};

/// Shared handle to a [`Node`].
///
/// Cloning a `NodeRef` is cheap and yields another handle to the same node.
pub struct NodeRef<T> {
    node_ref: Arc<RwLock<Node<T>>>,
}

/// Non-owning handle used for parent back links
pub struct WeakNodeRef<T> {
    node_ref: Weak<RwLock<Node<T>>>,
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self {
            node_ref: self.node_ref.clone(),
        }
    }
}

impl<T> Clone for WeakNodeRef<T> {
    fn clone(&self) -> Self {
        Self {
            node_ref: self.node_ref.clone(),
        }
    }
}

impl<T> WeakNodeRef<T> {
    pub fn upgrade(&self) -> Option<NodeRef<T>> {
        self.node_ref.upgrade().map(|node_ref| NodeRef { node_ref })
    }
}

impl<T> NodeRef<T> {
    fn from_node(node: Node<T>) -> Self {
        Self {
            node_ref: Arc::new(RwLock::new(node)),
        }
    }

    /// Create a parentless node
    pub fn new_root(id: NodeId, value: T) -> Self {
        Self::from_node(Node::new(id, Some(value)))
    }

    /// Create a parentless node without a value
    pub(crate) fn hollow(id: NodeId) -> Self {
        Self::from_node(Node::new(id, None))
    }

    /// Get a read guard on the inner node.
    ///
    /// Read locks are recursive, so a caller holding a guard on one node may read
    /// any other node (including the same one) without deadlocking.
    pub fn node<'b>(&'b self) -> RwLockReadGuard<'b, Node<T>> {
        self.node_ref.read_recursive()
    }

    /// Get a write guard on the inner node
    pub(crate) fn node_mut<'b>(&'b self) -> RwLockWriteGuard<'b, Node<T>> {
        self.node_ref.write()
    }

    pub fn downgrade(&self) -> WeakNodeRef<T> {
        WeakNodeRef {
            node_ref: Arc::downgrade(&self.node_ref),
        }
    }

    /// True if both handles point at the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node_ref, &other.node_ref)
    }

    pub fn id(&self) -> NodeId {
        self.node().id()
    }

    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.node().parent()
    }

    /// Snapshot of the direct children. No lock is held on the returned handles.
    pub fn children(&self) -> Vec<NodeRef<T>> {
        self.node().children().to_vec()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Number of edges between this node and the root of its tree
    /// The top-most ancestor, or this node when it has no parent
    pub fn top(&self) -> NodeRef<T> {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    pub fn depth(&self) -> NodeDepth {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    /// Append a new child holding `value`, and bump the descendant totals of
    /// this node and every ancestor.
    pub fn add(&self, id: NodeId, value: T) -> NodeRef<T> {
        let child = Self::from_node(Node::new(id, Some(value)).with_parent(self.downgrade()));

        trace!("Add node {} under {}", id, self.id());

        self.node_mut().push_child(child.clone());
        self.update_lineage(|node| node.add_total(1));

        child
    }

    /// Apply `f` to this node and then to each ancestor up to the root.
    /// Only one node is locked at a time.
    pub(crate) fn update_lineage<F>(&self, f: F)
    where
        F: Fn(&mut Node<T>),
    {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            let mut guard = node.node_mut();
            f(&mut guard);
            current = guard.parent();
        }
    }

    /// Breadth first iterator starting at this node
    pub fn iter(&self) -> BreadthFirstIter<T> {
        BreadthFirstIter::new(self.clone())
    }

    /// Depth first (pre-order) iterator starting at this node, with depth information
    pub fn iter_depth_first(&self) -> DepthFirstIter<T> {
        DepthFirstIter::new(self.clone())
    }
}

impl<T: Clone> NodeRef<T> {
    /// Clone of the node value
    pub fn value(&self) -> Option<T> {
        self.node().value().cloned()
    }
}

impl<T> std::fmt::Display for NodeRef<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f, |value, f| match value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("∅"),
        })
    }
}

impl<T> std::fmt::Debug for NodeRef<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.node(), f)
    }
}

impl<T> IntoIterator for NodeRef<T> {
    type Item = NodeRef<T>;
    type IntoIter = BreadthFirstIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        BreadthFirstIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a NodeRef<T> {
    type Item = NodeRef<T>;
    type IntoIter = BreadthFirstIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        BreadthFirstIter::new(self.clone())
    }
}
