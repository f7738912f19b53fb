use std::{collections::VecDeque, ops::Deref};

use crate::{noderef::NodeRef, NodeDepth};

/// Level order iterator. Each dequeued node is yielded and its children are
/// queued in order.
pub struct BreadthFirstIter<T> {
    queue: VecDeque<NodeRef<T>>,
}

impl<T> BreadthFirstIter<T> {
    pub fn new(node: NodeRef<T>) -> Self {
        Self {
            queue: VecDeque::from([node]),
        }
    }
}

impl<T> Iterator for BreadthFirstIter<T> {
    type Item = NodeRef<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.node().children().iter().cloned());
        Some(node)
    }
}

/// A node yielded by [`DepthFirstIter`], along with its depth relative to the
/// node the iteration started from.
pub struct IterNode<T> {
    depth: NodeDepth,
    node: NodeRef<T>,
}

impl<T> IterNode<T> {
    pub fn depth(&self) -> NodeDepth {
        self.depth
    }
}

impl<T> Deref for IterNode<T> {
    type Target = NodeRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

/// Pre-order iterator
pub struct DepthFirstIter<T> {
    stack: VecDeque<(NodeDepth, NodeRef<T>)>,
}

impl<T> DepthFirstIter<T> {
    pub fn new(node: NodeRef<T>) -> Self {
        Self {
            stack: VecDeque::from([(0, node)]),
        }
    }
}

impl<T> Iterator for DepthFirstIter<T> {
    type Item = IterNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop_front()?;

        // Push children in reverse so the first child is popped next
        node.node()
            .children()
            .iter()
            .rev()
            .for_each(|child| self.stack.push_front((depth + 1, child.clone())));

        Some(IterNode { depth, node })
    }
}
