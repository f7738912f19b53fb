use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::{
    noderef::{NodeRef, WeakNodeRef},
    NodeId,
};

/// A single element of the hierarchy.
///
/// Nodes are only reachable through a [`NodeRef`]. The parent owns its children,
/// the child keeps a weak back link to the parent for upward walks.
pub struct Node<T> {
    id: NodeId,
    value: Option<T>,
    parent: Option<WeakNodeRef<T>>,
    children: Vec<NodeRef<T>>,

    // Number of strict descendants
    total: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, value: Option<T>) -> Self {
        Self {
            id,
            value,
            parent: None,
            children: Vec::new(),
            total: 0,
        }
    }

    pub(crate) fn with_parent(mut self, parent: WeakNodeRef<T>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload. `None` only for the placeholder root left after the root was removed.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Upgrade the parent back link
    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.parent.as_ref().and_then(|parent| parent.upgrade())
    }

    pub fn children(&self) -> &[NodeRef<T>] {
        &self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of strict descendants
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// True if `other` is the direct parent of this node
    pub fn child_of(&self, other: &Node<T>) -> bool {
        self.parent()
            .map(|parent| parent.id() == other.id)
            .unwrap_or(false)
    }

    /// True if `other` is a direct child of this node
    pub fn parent_of(&self, other: &Node<T>) -> bool {
        self.children.iter().any(|child| child.id() == other.id)
    }

    pub(crate) fn push_child(&mut self, child: NodeRef<T>) {
        self.children.push(child);
    }

    /// Splice a child out by identity, returning its former index
    pub(crate) fn remove_child(&mut self, child: &NodeRef<T>) -> Option<usize> {
        let index = self.children.iter().position(|c| c.ptr_eq(child))?;
        self.children.remove(index);
        Some(index)
    }

    pub(crate) fn clear_parent(&mut self) {
        self.parent = None;
    }

    pub(crate) fn add_total(&mut self, count: usize) {
        self.total += count;
    }

    pub(crate) fn sub_total(&mut self, count: usize) {
        self.total -= count;
    }
}

impl<T: Hash> Node<T> {
    /// Hash of the value together with the number of direct children
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.child_count().hash(state);
        self.value.hash(state);
    }
}

impl<T> std::fmt::Debug for Node<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", &self.value)
            .field(
                "parent_id",
                &format_args!("{:?}", self.parent().map(|p| p.id())),
            )
            .field(
                "child_ids",
                &format_args!(
                    "{:?}",
                    self.children.iter().map(|c| c.id()).collect::<Vec<_>>()
                ),
            )
            .field("total", &self.total)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::noderef::NodeRef;

    #[traced_test]
    #[test]
    fn add_updates_counts() {
        let root = NodeRef::new_root(0, "root");
        let a = root.add(1, "a");
        let b = root.add(2, "b");
        let a1 = a.add(3, "a1");
        a1.add(4, "a1x");

        assert_eq!(root.node().child_count(), 2);
        assert_eq!(root.node().total(), 4);
        assert_eq!(a.node().total(), 2);
        assert_eq!(a1.node().total(), 1);
        assert_eq!(b.node().total(), 0);

        assert!(b.node().is_leaf());
        assert!(!a.node().is_leaf());
        assert!(root.node().is_root());
        assert!(!a1.node().is_root());
    }

    #[test]
    fn relationships() {
        let root = NodeRef::new_root(0, 'r');
        let a = root.add(1, 'a');
        let b = a.add(2, 'b');

        assert!(a.node().child_of(&root.node()));
        assert!(b.node().child_of(&a.node()));
        assert!(!b.node().child_of(&root.node()));
        assert!(!root.node().child_of(&a.node()));

        assert!(root.node().parent_of(&a.node()));
        assert!(!root.node().parent_of(&b.node()));
        assert!(a.node().parent_of(&b.node()));
    }

    #[test]
    fn hash_ignores_id() {
        let one = NodeRef::new_root(0, 10u32);
        let two = NodeRef::new_root(7, 10u32);
        assert_eq!(one.node().xxhash(), two.node().xxhash());

        two.add(8, 11);
        assert_ne!(one.node().xxhash(), two.node().xxhash());
    }
}
