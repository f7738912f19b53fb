use tracing::{debug, debug_span};

use crate::{noderef::NodeRef, Predicate, Tree, UniqueGenerator};

impl<T, U> Tree<T, U> {
    /// Remove every node matching `value` along with its subtree.
    ///
    /// Returns true if anything was detached. Removing the root leaves a placeholder
    /// root without a value and a count of zero.
    pub fn remove(&mut self, value: &U) -> bool {
        let root = self.root.clone();
        self.remove_in(value, &root, None, None)
    }

    /// [`Tree::remove`] from `root`, optionally overriding the equality and traversal predicates.
    ///
    /// Unlike lookups, every child is visited: equal children are detached and
    /// children accepted by the traversal predicate are searched in turn.
    pub fn remove_in(
        &mut self,
        value: &U,
        root: &NodeRef<T>,
        eq: Option<&Predicate<T, U>>,
        comp: Option<&Predicate<T, U>>,
    ) -> bool {
        let eq = eq.unwrap_or(&self.comparators.equality).clone();
        let comp = comp.unwrap_or(&self.comparators.traversal).clone();

        debug_span!("remove", root = root.id()).in_scope(|| {
            if !self.contains(root) {
                debug!("Node {} is not attached to this tree", root.id());
                return false;
            }

            if eq(&*root.node(), value) {
                return match root.parent() {
                    Some(parent) => self.detach(&parent, root),
                    None => {
                        self.remove_root();
                        true
                    }
                };
            }

            self.remove_below(value, root, &eq, &comp)
        })
    }

    fn remove_below(
        &mut self,
        value: &U,
        node: &NodeRef<T>,
        eq: &Predicate<T, U>,
        comp: &Predicate<T, U>,
    ) -> bool {
        let mut removed = false;

        // Iterate over a snapshot, detaching splices the live child list
        for child in node.children() {
            if eq(&*child.node(), value) {
                removed |= self.detach(node, &child);
            } else if comp(&*child.node(), value) {
                removed |= self.remove_below(value, &child, eq, comp);
            }
        }

        removed
    }

    /// Splice `child` out of `parent` and account for the whole subtree leaving
    fn detach(&mut self, parent: &NodeRef<T>, child: &NodeRef<T>) -> bool {
        let removed = child.node().total() + 1;

        if parent.node_mut().remove_child(child).is_none() {
            return false;
        }
        child.node_mut().clear_parent();

        self.count = self.count.saturating_sub(removed);
        parent.update_lineage(|node| node.sub_total(removed));

        debug!(
            "Detached node {} from {}, {} nodes removed",
            child.id(),
            parent.id(),
            removed
        );

        true
    }

    fn remove_root(&mut self) {
        self.idgen.reset();
        self.root = NodeRef::hollow(self.idgen.generate());
        self.count = 0;

        debug!("Removed tree root");
    }
}
