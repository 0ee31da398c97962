//! Effects layer: sinks, the concurrent walk and orchestration.

mod archive;
mod host;
mod materialize;
mod observer;
mod tree;
mod walk;

pub use archive::ArchiveSink;
pub use host::{Host, LocalHost};
pub use materialize::{Artifact, Materialized, Materializer};
pub use observer::{ChildFailure, ChildRef, TracingObserver, WalkObserver};
pub use tree::TreeSink;

use crate::error::SinkError;

/// Destination strategy for one materialization.
///
/// A sink receives structural writes (named child groups) and leaf writes
/// (fetched resources) scoped to a parent handle. Both operations must
/// tolerate concurrent calls for sibling children of the same parent.
pub trait Sink: Send + Sync {
    type Handle: Clone + Send + Sync;

    /// Create-or-look-up the named child group under `parent`. Idempotent.
    ///
    /// `depth` is the child group's distance from the tree root; sinks whose
    /// top level is implicit (the archive artifact itself) use it to resolve
    /// the root scope.
    fn open_child(
        &self,
        parent: &Self::Handle,
        name: &str,
        depth: usize,
    ) -> impl Future<Output = Result<Self::Handle, SinkError>> + Send;

    /// Fetch `locator` and store the payload under the locator's trailing
    /// path segment, scoped to `parent`.
    fn write_leaf(
        &self,
        parent: &Self::Handle,
        locator: &str,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}
