use crate::{noderef::NodeRef, Comparators, Tree};

/// Hand built outline, bypassing the tree insert logic
///
/// ```text
/// root
/// ┣━a
/// ┃ ┣━a1
/// ┃ ┃ ┗━a1x
/// ┃ ┗━a2
/// ┣━b
/// ┃ ┗━b1
/// ┗━c
/// ```
pub fn outline() -> NodeRef<&'static str> {
    let root = NodeRef::new_root(0, "root");
    let a = root.add(1, "a");
    let b = root.add(2, "b");
    root.add(3, "c");
    let a1 = a.add(4, "a1");
    a.add(5, "a2");
    b.add(6, "b1");
    a1.add(7, "a1x");
    root
}

/// Numbers placed by magnitude: descend into a child when the value is larger
pub fn numeric_comparators() -> Comparators<i32> {
    Comparators::new(
        |node, value: &i32| node.value() == Some(value),
        |node, value: &i32| node.value().is_some_and(|n| value > n),
    )
}

pub fn numeric<const N: usize>(values: [i32; N]) -> Tree<i32> {
    let mut tree = Tree::with_comparators(0, numeric_comparators());
    tree.add_all(values);
    tree
}

/// Prefix tree: descend into a child when the target starts with its value
///
/// ```text
/// /
/// ┣━a
/// ┃ ┣━ab
/// ┃ ┃ ┗━abc
/// ┃ ┗━ad
/// ┗━b
/// ```
pub fn paths() -> Tree<&'static str> {
    let comparators = Comparators::new(
        |node, target: &&'static str| node.value() == Some(target),
        |node, target: &&'static str| node.value().is_some_and(|v| target.starts_with(*v)),
    );

    let mut tree = Tree::with_comparators("/", comparators);
    tree.add_all(["a", "ab", "abc", "ad", "b"]);
    tree
}

/// Check the count invariants on every node of the tree
pub fn assert_consistent<T, U>(tree: &Tree<T, U>) {
    for node in tree.iter() {
        let guard = node.node();
        let expected: usize = guard
            .children()
            .iter()
            .map(|child| child.node().total() + 1)
            .sum();

        assert_eq!(guard.total(), expected, "total of node {}", guard.id());
        assert_eq!(guard.child_count(), guard.children().len());

        for child in guard.children() {
            assert!(child.node().child_of(&guard));
            assert!(guard.parent_of(&child.node()));
        }
    }

    assert_eq!(tree.len(), tree.root().node().total() + 1);
}
