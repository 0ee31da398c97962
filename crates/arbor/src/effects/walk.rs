use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, join_all};

use crate::data::{Group, Node, ProgressTick};
use crate::effects::Sink;
use crate::effects::observer::{ChildFailure, ChildRef, WalkObserver};
use crate::error::SinkError;

/// Shared, read-only context for one walk invocation.
pub(crate) struct WalkCtx<'a, S: Sink> {
    pub sink: &'a S,
    pub name_of: &'a (dyn Fn(&Group, usize) -> String + Send + Sync),
    pub on_progress: &'a (dyn Fn(ProgressTick) + Send + Sync),
    /// Settled leaves across the whole invocation.
    pub leaves_completed: &'a AtomicU64,
    pub observer: &'a dyn WalkObserver,
}

impl<S: Sink> Clone for WalkCtx<'_, S> {
    fn clone(&self) -> Self { *self }
}

impl<S: Sink> Copy for WalkCtx<'_, S> {}

/// Recursively materialize `group` under `parent`.
///
/// `name` is the group's display name, resolved by the caller so that each
/// group's name is computed exactly once per visit, in its parent's frame.
///
/// All children are launched in declaration order and awaited together;
/// completion order is whatever the underlying I/O yields. A child failure is
/// reported to the observer and swallowed so siblings and aggregate progress
/// are never blocked. The returned error is only ever this group's own
/// [`SinkError::GroupCreation`], which abandons the subtree before any child
/// is attempted.
pub(crate) fn walk<'a, S: Sink>(
    ctx: WalkCtx<'a, S>,
    parent: &'a S::Handle,
    group: &'a Group,
    name: &'a str,
    depth: usize,
) -> BoxFuture<'a, Result<(), SinkError>> {
    async move {
        let handle = ctx.sink.open_child(parent, name, depth).await?;
        let completed = AtomicUsize::new(0);

        let children = group.children.iter().map(|child| {
            let handle = &handle;
            let completed = &completed;
            async move {
                match child {
                    Node::Leaf(locator) => {
                        if let Err(error) = ctx.sink.write_leaf(handle, locator).await {
                            ctx.observer.child_failed(ChildFailure {
                                parent: name,
                                child: ChildRef::Leaf(locator),
                                depth,
                                error: &error,
                            });
                        }
                        ctx.leaves_completed.fetch_add(1, Ordering::Relaxed);
                        settle(ctx, completed, depth);
                    }
                    Node::Group(sub) => {
                        let child_name = (ctx.name_of)(sub, depth + 1);
                        if let Err(error) = walk(ctx, handle, sub, &child_name, depth + 1).await {
                            ctx.observer.child_failed(ChildFailure {
                                parent: name,
                                child: ChildRef::Group(&child_name),
                                depth,
                                error: &error,
                            });
                        }
                        settle(ctx, completed, depth);
                    }
                }
            }
        });

        join_all(children).await;
        Ok(())
    }
    .boxed()
}

/// Record one settled child and emit its tick.
fn settle<S: Sink>(ctx: WalkCtx<'_, S>, completed: &AtomicUsize, depth: usize) {
    let completed_in_group = completed.fetch_add(1, Ordering::Relaxed) + 1;
    (ctx.on_progress)(ProgressTick {
        completed_in_group,
        total_leaves: ctx.leaves_completed.load(Ordering::Relaxed),
        depth,
    });
}
