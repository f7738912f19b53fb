use std::sync::Arc;

use crate::node::Node;

/// Binary relation between a node and a target value.
pub type Predicate<T, U> = Arc<dyn Fn(&Node<T>, &U) -> bool + Send + Sync>;

/// The ordering and equality policy of a [`Tree`](crate::Tree).
///
/// * `equality` decides if a node holds the target of a lookup or removal.
/// * `traversal` decides if a lookup should descend into a child.
/// * `insert_equality` and `insert_traversal` are the same relations used by
///   the `add` family, so values can be placed by one ordering and searched by another.
///
/// Descent is first match wins with no backtracking. Traversal predicates should
/// be true for at most one sibling, otherwise placement depends on insertion order.
pub struct Comparators<T, U = T> {
    pub(crate) equality: Predicate<T, U>,
    pub(crate) traversal: Predicate<T, U>,
    pub(crate) insert_equality: Predicate<T, T>,
    pub(crate) insert_traversal: Predicate<T, T>,
}

impl<T, U> Clone for Comparators<T, U> {
    fn clone(&self) -> Self {
        Self {
            equality: self.equality.clone(),
            traversal: self.traversal.clone(),
            insert_equality: self.insert_equality.clone(),
            insert_traversal: self.insert_traversal.clone(),
        }
    }
}

impl<T, U> std::fmt::Debug for Comparators<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparators").finish_non_exhaustive()
    }
}

/// Predicate that always descends
pub fn always<T: 'static, U: 'static>() -> Predicate<T, U> {
    Arc::new(|_: &Node<T>, _: &U| true)
}

/// Predicate comparing the node value with the target using `PartialEq`
pub fn value_eq<T, U>() -> Predicate<T, U>
where
    T: PartialEq<U> + 'static,
    U: 'static,
{
    Arc::new(|node: &Node<T>, target: &U| node.value().is_some_and(|value| value == target))
}

impl<T> Comparators<T, T> {
    /// Use the same equality and traversal relation for lookups and insertion
    pub fn new<E, C>(equality: E, traversal: C) -> Self
    where
        E: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
        C: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        let equality: Predicate<T, T> = Arc::new(equality);
        let traversal: Predicate<T, T> = Arc::new(traversal);

        Self {
            insert_equality: equality.clone(),
            insert_traversal: traversal.clone(),
            equality,
            traversal,
        }
    }
}

impl<T, U> Comparators<T, U> {
    /// Separate lookup and insertion relations
    pub fn split<E, C, IE, IC>(
        equality: E,
        traversal: C,
        insert_equality: IE,
        insert_traversal: IC,
    ) -> Self
    where
        E: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
        C: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
        IE: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
        IC: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            equality: Arc::new(equality),
            traversal: Arc::new(traversal),
            insert_equality: Arc::new(insert_equality),
            insert_traversal: Arc::new(insert_traversal),
        }
    }

    pub fn with_equality<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
    {
        self.equality = Arc::new(f);
        self
    }

    pub fn with_traversal<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node<T>, &U) -> bool + Send + Sync + 'static,
    {
        self.traversal = Arc::new(f);
        self
    }

    pub fn with_insert_equality<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        self.insert_equality = Arc::new(f);
        self
    }

    pub fn with_insert_traversal<F>(mut self, f: F) -> Self
    where
        F: Fn(&Node<T>, &T) -> bool + Send + Sync + 'static,
    {
        self.insert_traversal = Arc::new(f);
        self
    }

    pub fn equality(&self) -> &Predicate<T, U> {
        &self.equality
    }

    pub fn traversal(&self) -> &Predicate<T, U> {
        &self.traversal
    }

    pub fn insert_equality(&self) -> &Predicate<T, T> {
        &self.insert_equality
    }

    pub fn insert_traversal(&self) -> &Predicate<T, T> {
        &self.insert_traversal
    }
}

/// Value equality everywhere and unconditional descent, which degrades to a full
/// first-child scan when nothing better is configured.
impl<T, U> Default for Comparators<T, U>
where
    T: PartialEq + PartialEq<U> + 'static,
    U: 'static,
{
    fn default() -> Self {
        Self {
            equality: value_eq(),
            traversal: always(),
            insert_equality: value_eq(),
            insert_traversal: always(),
        }
    }
}
