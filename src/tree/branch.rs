use tracing::trace;

use crate::{noderef::NodeRef, Predicate, Tree};

impl<T: Clone, U> Tree<T, U> {
    /// Values on the path from the root to the node matching `value`.
    ///
    /// Empty if the walk runs into a dead end, a partial path is never returned.
    pub fn branch(&self, value: &U) -> Vec<T> {
        self.branch_in(value, &self.root, None, None)
    }

    /// [`Tree::branch`] from `root`, optionally overriding the equality and traversal predicates.
    ///
    /// At each level the children are scanned in order. A leaf child equal to the
    /// target ends the walk, the first child accepted by the traversal predicate is
    /// appended and descended into. When no child matches, the path so far is kept
    /// only if the current node is itself the target.
    pub fn branch_in(
        &self,
        value: &U,
        root: &NodeRef<T>,
        eq: Option<&Predicate<T, U>>,
        comp: Option<&Predicate<T, U>>,
    ) -> Vec<T> {
        let eq = eq.unwrap_or(&self.comparators.equality);
        let comp = comp.unwrap_or(&self.comparators.traversal);

        let mut store: Vec<T> = root.value().into_iter().collect();
        let mut current = root.clone();

        loop {
            let next = {
                let guard = current.node();
                let mut next = None;
                for child in guard.children() {
                    let child_node = child.node();
                    if child_node.is_leaf() && eq(&*child_node, value) {
                        store.extend(child_node.value().cloned());
                        return store;
                    }
                    if comp(&*child_node, value) {
                        store.extend(child_node.value().cloned());
                        next = Some(child.clone());
                        break;
                    }
                }

                match next {
                    Some(next) => next,
                    None if eq(&*guard, value) => return store,
                    None => {
                        trace!("Dead end at node {}", guard.id());
                        return Vec::new();
                    }
                }
            };

            current = next;
        }
    }

    /// Like [`Tree::branch`], but once the target is reached every descendant of
    /// it is appended as well, level by level: all children of a level in order
    /// before any grandchild.
    pub fn branch_all(&self, value: &U) -> Vec<T> {
        self.branch_all_in(value, &self.root, None, None)
    }

    pub fn branch_all_in(
        &self,
        value: &U,
        root: &NodeRef<T>,
        eq: Option<&Predicate<T, U>>,
        comp: Option<&Predicate<T, U>>,
    ) -> Vec<T> {
        let eq = eq.unwrap_or(&self.comparators.equality);
        let comp = comp.unwrap_or(&self.comparators.traversal);

        let mut store: Vec<T> = root.value().into_iter().collect();
        let mut current = root.clone();
        let mut found = eq(&*root.node(), value);

        loop {
            if found {
                store.extend(current.iter().skip(1).filter_map(|node| node.value()));
                return store;
            }

            let next = {
                let guard = current.node();
                let mut next = None;
                for child in guard.children() {
                    let child_node = child.node();
                    if child_node.is_leaf() && eq(&*child_node, value) {
                        store.extend(child_node.value().cloned());
                        return store;
                    }
                    if comp(&*child_node, value) {
                        store.extend(child_node.value().cloned());
                        found = eq(&*child_node, value);
                        next = Some(child.clone());
                        break;
                    }
                }

                match next {
                    Some(next) => next,
                    None if eq(&*guard, value) => return store,
                    None => {
                        trace!("Dead end at node {}", guard.id());
                        return Vec::new();
                    }
                }
            };

            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        test::{numeric, paths},
        Node, Predicate, Tree,
    };

    #[test]
    fn branch_to_leaf() {
        let tree = paths();
        assert_eq!(tree.branch(&"abc"), ["/", "a", "ab", "abc"]);
        assert_eq!(tree.branch(&"ad"), ["/", "a", "ad"]);
        assert_eq!(tree.branch(&"b"), ["/", "b"]);
    }

    #[test]
    fn branch_to_interior_node() {
        let tree = paths();
        assert_eq!(tree.branch(&"ab"), ["/", "a", "ab"]);
        assert_eq!(tree.branch(&"a"), ["/", "a"]);
    }

    #[test]
    fn branch_to_root() {
        let tree = paths();
        assert_eq!(tree.branch(&"/"), ["/"]);
    }

    #[test]
    fn invalid_branch_is_empty() {
        let tree = paths();

        assert!(tree.branch(&"zzz").is_empty());

        // Valid prefix, but nothing below "ab" continues towards "abd"
        assert!(tree.branch(&"abd").is_empty());
        assert!(tree.branch(&"abcd").is_empty());
    }

    #[test]
    fn branch_from_scoped_root() {
        let tree = paths();
        let a = tree.node_by_value(&"a").unwrap();

        assert_eq!(tree.branch_in(&"abc", &a, None, None), ["a", "ab", "abc"]);
    }

    #[test]
    fn branch_with_override() {
        let tree = paths();
        let root = tree.root();
        let never: Predicate<&'static str, &'static str> =
            Arc::new(|_: &Node<&'static str>, _: &&'static str| false);

        assert!(tree.branch_in(&"abc", &root, None, Some(&never)).is_empty());
        // Leaf children can still be matched directly
        assert_eq!(tree.branch_in(&"b", &root, None, Some(&never)), ["/", "b"]);
    }

    #[test]
    fn branch_numeric() {
        let tree = numeric([5, 3, 7, 6, 9]);
        assert_eq!(tree.branch(&9), [0, 5, 7, 9]);
        assert_eq!(tree.branch(&6), [0, 5, 6]);
        assert!(tree.branch(&8).is_empty());
    }

    #[test]
    fn branch_all_collects_descendants() {
        let tree = paths();

        assert_eq!(tree.branch_all(&"a"), ["/", "a", "ab", "ad", "abc"]);
        assert_eq!(tree.branch_all(&"ab"), ["/", "a", "ab", "abc"]);
        assert_eq!(tree.branch_all(&"/"), ["/", "a", "b", "ab", "ad", "abc"]);
    }

    #[test]
    fn branch_all_matches_branch_for_leaves() {
        let tree = paths();

        assert_eq!(tree.branch_all(&"abc"), tree.branch(&"abc"));
        assert_eq!(tree.branch_all(&"b"), tree.branch(&"b"));
        assert!(tree.branch_all(&"abd").is_empty());
        assert!(tree.branch_all(&"zzz").is_empty());
    }

    #[test]
    fn branch_all_is_superset() {
        let tree = paths();

        for target in ["a", "ab"] {
            let branch = tree.branch(&target);
            let all = tree.branch_all(&target);
            assert_eq!(&all[..branch.len()], &branch[..]);

            let node = tree.node_by_value(&target).unwrap();
            for descendant in node.iter().skip(1) {
                assert!(all.contains(&descendant.value().unwrap()));
            }
        }
    }

    #[test]
    fn branch_all_siblings_before_grandchildren() {
        let mut tree = Tree::new("r");
        tree.set_insert_traversal(|node, value: &&'static str| {
            node.value().is_some_and(|v| value.starts_with(*v))
        });
        tree.set_traversal(|node, value: &&'static str| {
            node.value().is_some_and(|v| value.starts_with(*v))
        });
        tree.add_all(["a", "b", "a1", "b1"]);

        assert_eq!(tree.branch_all(&"r"), ["r", "a", "b", "a1", "b1"]);
        assert_eq!(tree.branch_all(&"a"), ["r", "a", "a1"]);
    }

    #[test]
    fn branch_all_deep_order() {
        // 5 has children 7 and 6, 7 has child 9
        let tree = numeric([5, 3, 7, 6, 9]);
        assert_eq!(tree.branch_all(&0), [0, 5, 3, 7, 6, 9]);

        // A strict traversal never descends into the target itself, so interior
        // nodes are unreachable
        assert!(tree.branch_all(&5).is_empty());
        assert!(tree.branch(&5).is_empty());
    }
}
