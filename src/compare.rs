use std::hash::{Hash as _, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::Tree;

/// Tree Comparison

impl<T, U> Tree<T, U>
where
    T: std::hash::Hash,
{
    /// Structural hash over every node value and child count in breadth first order.
    /// Node ids do not contribute.
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);

        for node in self.iter() {
            node.node().hash(&mut hasher);
        }

        hasher.finish()
    }
}

impl<T, U> PartialEq for Tree<T, U>
where
    T: std::hash::Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.xxhash() == other.xxhash()
    }
}

impl<T, U> Eq for Tree<T, U> where T: std::hash::Hash {}
