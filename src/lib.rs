//! # Manzanita
//!
//! An ordered N-ary tree container for Rust.
//!
//! ## Overview
//!
//! Manzanita organizes arbitrary values into a hierarchy without committing to a
//! particular tree variant. Ordering and equality are supplied by the caller as
//! predicates (see [`Comparators`]), so the same engine can behave like a search
//! tree, a prefix tree or a plain outline depending on how it is configured.
//!
//! ```
//! use manzanita::{Comparators, Tree};
//!
//! let comparators = Comparators::new(
//!     |node, value: &i32| node.value() == Some(value),
//!     |node, value: &i32| node.value().is_some_and(|n| value > n),
//! );
//!
//! let mut tree = Tree::with_comparators(0, comparators);
//! tree.add_all([5, 3, 7]);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.to_json().unwrap(), "[0,5,3,7]");
//! ```

mod compare;
mod display;
mod error;
mod id;
mod iterator;
mod json;
mod predicate;
mod tree;

pub mod node;
pub mod noderef;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use id::*;
pub use iterator::{BreadthFirstIter, DepthFirstIter, IterNode};
pub use predicate::{always, value_eq, Comparators, Predicate};
pub use tree::Tree;

pub use node::Node;
pub use noderef::{NodeRef, WeakNodeRef};

pub type NodeDepth = usize;

pub type IdGenerator = id::SequentialGenerator;
pub type NodeId = <IdGenerator as UniqueGenerator>::Output;
