use std::future::Future;

use futures::future::{join_all, FutureExt as _, LocalBoxFuture};
use tracing::{debug_span, Instrument as _};

use crate::{noderef::NodeRef, Tree};

impl<T, U> Tree<T, U> {
    /// Run `visitor` on every node concurrently.
    ///
    /// See [`Tree::traverse_async_from`].
    pub async fn traverse_async<F, Fut, E>(&self, visitor: F) -> Result<(), E>
    where
        F: Fn(NodeRef<T>) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.traverse_async_from(visitor, &self.root).await
    }

    /// Run `visitor` on `root` and every node below it.
    ///
    /// Each child subtree is its own concurrent unit, joined together with the
    /// visit of the node itself, so every visit may be in flight at once. No order
    /// between parent and child visits is guaranteed. Nothing is cancelled on
    /// failure: all visits run to completion, then the first error in tree order
    /// (the node's own visit, then each child subtree in turn) is returned, which
    /// is not necessarily the error that happened first in time. The tree must not
    /// be mutated while the traversal is running.
    pub async fn traverse_async_from<F, Fut, E>(&self, visitor: F, root: &NodeRef<T>) -> Result<(), E>
    where
        F: Fn(NodeRef<T>) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let span = debug_span!("traverse_async", root = root.id());
        fan_out(&visitor, root.clone()).instrument(span).await
    }
}

fn fan_out<'v, T, F, Fut, E>(visitor: &'v F, node: NodeRef<T>) -> LocalBoxFuture<'v, Result<(), E>>
where
    F: Fn(NodeRef<T>) -> Fut,
    Fut: Future<Output = Result<(), E>> + 'v,
    T: 'v,
    E: 'v,
{
    let children = node.children();
    if children.is_empty() {
        return visitor(node).boxed_local();
    }

    let mut tasks = Vec::with_capacity(children.len() + 1);
    tasks.push(visitor(node).boxed_local());
    tasks.extend(children.into_iter().map(|child| fan_out(visitor, child)));

    async move {
        join_all(tasks)
            .await
            .into_iter()
            .collect::<Result<Vec<()>, E>>()
            .map(|_| ())
    }
    .boxed_local()
}
