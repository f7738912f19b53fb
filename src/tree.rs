use tracing::{debug, trace};

use crate::{
    iterator::BreadthFirstIter, noderef::NodeRef, predicate::Comparators, IdGenerator, Node,
    NodeId, Predicate, UniqueGenerator,
};

mod branch;
mod remove;
mod traverse;

/// An ordered N-ary tree steered by caller supplied [`Comparators`].
///
/// `T` is the stored value type, `U` the target type accepted by lookups,
/// branch extraction and removal.
pub struct Tree<T, U = T> {
    root: NodeRef<T>,
    count: usize,
    idgen: IdGenerator,
    comparators: Comparators<T, U>,
}

impl<T> Tree<T>
where
    T: PartialEq + 'static,
{
    /// Create a tree using value equality and unconditional descent
    pub fn new(value: T) -> Self {
        Self::with_comparators(value, Comparators::default())
    }
}

impl<T, U> Tree<T, U> {
    pub fn with_comparators(value: T, comparators: Comparators<T, U>) -> Self {
        let mut idgen = IdGenerator::default();
        let root = NodeRef::new_root(idgen.generate(), value);

        debug!("Created tree with root {}", root.id());

        Self {
            root,
            count: 1,
            idgen,
            comparators,
        }
    }

    pub fn root(&self) -> NodeRef<T> {
        self.root.clone()
    }

    pub fn root_ref(&self) -> &NodeRef<T> {
        &self.root
    }

    /// Number of live nodes, root included. Zero after the root was removed.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The id the next inserted node will receive
    pub fn next_id(&self) -> NodeId {
        self.idgen.next_id()
    }

    pub fn comparators(&self) -> &Comparators<T, U> {
        &self.comparators
    }

    pub fn set_comparators(&mut self, comparators: Comparators<T, U>) {
        self.comparators = comparators;
    }

    pub fn set_equality<F>(&mut self, f: F)
    where
        F: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
    {
        self.comparators.equality = std::sync::Arc::new(f);
    }

    pub fn set_traversal<F>(&mut self, f: F)
    where
        F: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
    {
        self.comparators.traversal = std::sync::Arc::new(f);
    }

    pub fn set_insert_equality<F>(&mut self, f: F)
    where
        F: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        self.comparators.insert_equality = std::sync::Arc::new(f);
    }

    pub fn set_insert_traversal<F>(&mut self, f: F)
    where
        F: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        self.comparators.insert_traversal = std::sync::Arc::new(f);
    }

    /// Breadth first iterator over every node
    pub fn iter(&self) -> BreadthFirstIter<T> {
        self.root.iter()
    }

    /// Breadth first iterator over `root` and its descendants
    pub fn iter_from(&self, root: &NodeRef<T>) -> BreadthFirstIter<T> {
        root.iter()
    }

    /// True if `node` hangs below this tree's root, or is the root
    pub fn contains(&self, node: &NodeRef<T>) -> bool {
        node.top().ptr_eq(&self.root)
    }

    /// Find a node by id with a breadth first scan
    pub fn node(&self, id: NodeId) -> Option<NodeRef<T>> {
        self.iter().find(|node| node.id() == id)
    }

    /// Ids from the root down to the node with `id`, or empty if it is not in the tree
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            path.push(node.id());
            current = node.parent();
        }
        path.reverse();
        path
    }

    /// Insert `value` starting from the tree root.
    ///
    /// Returns the new node, or `None` when the insert equality predicate matched
    /// an existing node on the way down.
    pub fn add(&mut self, value: T) -> Option<NodeRef<T>> {
        let root = self.root.clone();
        self.add_in(value, &root)
    }

    /// Insert `value` below `root`.
    ///
    /// At each level the children are scanned in order. An equal child aborts the
    /// insert, the first child accepted by the traversal predicate is descended into.
    /// If neither matches, the value is appended to the current node.
    pub fn add_in(&mut self, value: T, root: &NodeRef<T>) -> Option<NodeRef<T>> {
        if !self.contains(root) {
            debug!("Node {} is not attached to this tree", root.id());
            return None;
        }

        let eq = &self.comparators.insert_equality;
        let comp = &self.comparators.insert_traversal;

        if eq(&*root.node(), &value) {
            trace!("Duplicate of node {}, skipping insert", root.id());
            return None;
        }

        let mut parent = root.clone();
        loop {
            let next = {
                let guard = parent.node();
                let mut next = None;
                for child in guard.children() {
                    let child_node = child.node();
                    if eq(&*child_node, &value) {
                        trace!("Duplicate of node {}, skipping insert", child_node.id());
                        return None;
                    }
                    if comp(&*child_node, &value) {
                        next = Some(child.clone());
                        break;
                    }
                }
                next
            };

            match next {
                Some(child) => parent = child,
                None => break,
            }
        }

        let id = self.idgen.generate();
        let node = parent.add(id, value);
        self.count += 1;

        debug!("Inserted node {} under {}", id, parent.id());

        Some(node)
    }

    /// Insert each value in order from the tree root. Returns how many were inserted.
    pub fn add_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let root = self.root.clone();
        self.add_all_in(values, &root)
    }

    pub fn add_all_in<I>(&mut self, values: I, root: &NodeRef<T>) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .filter_map(|value| self.add_in(value, root))
            .count()
    }

    /// True if a node matching `value` is reachable from the root
    pub fn has(&self, value: &U) -> bool {
        self.has_in(value, &self.root, None, None)
    }

    /// [`Tree::has`] from `root`, optionally overriding the equality and traversal predicates
    pub fn has_in(
        &self,
        value: &U,
        root: &NodeRef<T>,
        eq: Option<&Predicate<T, U>>,
        comp: Option<&Predicate<T, U>>,
    ) -> bool {
        self.node_by_value_in(value, root, eq, comp).is_some()
    }

    /// Locate the node matching `value`
    pub fn node_by_value(&self, value: &U) -> Option<NodeRef<T>> {
        self.node_by_value_in(value, &self.root, None, None)
    }

    /// Same descent as [`Tree::add_in`]: an equal child is returned at once, otherwise
    /// the first child accepted by the traversal predicate is searched.
    pub fn node_by_value_in(
        &self,
        value: &U,
        root: &NodeRef<T>,
        eq: Option<&Predicate<T, U>>,
        comp: Option<&Predicate<T, U>>,
    ) -> Option<NodeRef<T>> {
        let eq = eq.unwrap_or(&self.comparators.equality);
        let comp = comp.unwrap_or(&self.comparators.traversal);

        if eq(&*root.node(), value) {
            return Some(root.clone());
        }

        let mut current = root.clone();
        loop {
            let next = {
                let guard = current.node();
                let mut next = None;
                for child in guard.children() {
                    let child_node = child.node();
                    if eq(&*child_node, value) {
                        return Some(child.clone());
                    }
                    if comp(&*child_node, value) {
                        next = Some(child.clone());
                        break;
                    }
                }
                next
            };

            current = next?;
        }
    }

    /// Drop every node and start over from a fresh root holding the old root value
    pub fn clear(&mut self)
    where
        T: Clone,
    {
        let value = self.root.value();

        self.idgen.reset();
        let id = self.idgen.generate();
        self.root = match value {
            Some(value) => NodeRef::new_root(id, value),
            None => NodeRef::hollow(id),
        };
        self.count = 1;

        debug!("Cleared tree");
    }
}

impl<T: Clone, U> Tree<T, U> {
    /// Value held by the root. `None` signals that the root was removed.
    pub fn root_value(&self) -> Option<T> {
        self.root.value()
    }

    /// Breadth first snapshot of every value
    pub fn values(&self) -> Vec<T> {
        self.iter().filter_map(|node| node.value()).collect()
    }
}

impl<T, U> std::fmt::Display for Tree<T, U>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.root, f)
    }
}

impl<T, U> std::fmt::Debug for Tree<T, U>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("next_id", &self.idgen.next_id())
            .field("root", &self.root)
            .finish()
    }
}
