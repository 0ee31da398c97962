use std::error::Error as _;
use std::fmt;
use std::sync::Arc;

use crate::error::SinkError;

/// Identity of a failed child, as the input tree names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRef<'a> {
    Leaf(&'a str),
    Group(&'a str),
}

impl fmt::Display for ChildRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRef::Leaf(locator) => write!(f, "leaf {locator}"),
            ChildRef::Group(name) => write!(f, "group {name}"),
        }
    }
}

/// Diagnostic event: one child of `parent` settled unsuccessfully.
///
/// Emitted at the boundary where the failure is swallowed; observers see it,
/// control flow does not.
#[derive(Debug)]
pub struct ChildFailure<'a> {
    /// Display name of the group whose child failed.
    pub parent: &'a str,
    pub child:  ChildRef<'a>,
    /// Depth of the parent group (root = 0).
    pub depth:  usize,
    pub error:  &'a SinkError,
}

/// Receives per-child failures swallowed during a walk.
pub trait WalkObserver: Send + Sync {
    fn child_failed(&self, failure: ChildFailure<'_>);
}

impl<O: WalkObserver + ?Sized> WalkObserver for Arc<O> {
    fn child_failed(&self, failure: ChildFailure<'_>) { (**self).child_failed(failure) }
}

/// Stock observer reporting failures as structured warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl WalkObserver for TracingObserver {
    fn child_failed(&self, failure: ChildFailure<'_>) {
        let cause = failure
            .error
            .source()
            .map(|cause| cause.to_string())
            .unwrap_or_default();
        tracing::warn!(
            parent = failure.parent,
            child = %failure.child,
            depth = failure.depth,
            error = %failure.error,
            %cause,
            "child failed during materialization",
        );
    }
}
