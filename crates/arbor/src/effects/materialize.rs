use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arbor_fetch::HttpClient;

use crate::core;
use crate::data::{Group, ProgressTick};
use crate::effects::archive::ArchiveSink;
use crate::effects::host::Host;
use crate::effects::observer::{TracingObserver, WalkObserver};
use crate::effects::tree::TreeSink;
use crate::effects::walk::{WalkCtx, walk};
use crate::error::MaterializeError;

/// Where a finished materialization landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// A real directory tree rooted at the granted destination.
    Tree { root: PathBuf },
    /// A composite archive handed to the host for emission.
    Archive { filename: String },
}

/// Summary of one settled materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub artifact: Artifact,
    /// Leaves settled over the invocation, failed fetches included.
    pub leaves_completed: u64,
}

/// Drives one input tree through the sink the host environment supports.
pub struct Materializer<C, H> {
    client:   Arc<C>,
    host:     H,
    observer: Arc<dyn WalkObserver>,
}

impl<C: HttpClient, H: Host> Materializer<C, H> {
    pub fn new(client: C, host: H) -> Self {
        Self {
            client:   Arc::new(client),
            host,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the stock diagnostics observer.
    pub fn with_observer(mut self, observer: impl WalkObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Fetch every leaf of `tree` and reconstruct its shape through the
    /// available sink.
    ///
    /// `name_of` resolves a group's display name from the group and its
    /// depth; it must be deterministic within one invocation. `on_progress`
    /// fires once per settled child at every level (pass
    /// [`noop_progress`](crate::noop_progress) when not interested).
    ///
    /// Per-child failures are reported to the observer and swallowed; the
    /// only fatal outcomes are a refused root grant, a root group that
    /// cannot be opened, and an artifact that cannot be encoded.
    pub async fn materialize<N, P>(
        &self,
        tree: &Group,
        name_of: N,
        on_progress: P,
    ) -> Result<Materialized, MaterializeError>
    where
        N: Fn(&Group, usize) -> String + Send + Sync,
        P: Fn(ProgressTick) + Send + Sync,
    {
        let leaves_completed = AtomicU64::new(0);
        let root_name = name_of(tree, 0);

        if self.host.can_use_tree_sink() {
            let root = self.host.request_root_dir().await?;
            let sink = TreeSink::new(Arc::clone(&self.client));
            let ctx = WalkCtx {
                sink: &sink,
                name_of: &name_of,
                on_progress: &on_progress,
                leaves_completed: &leaves_completed,
                observer: self.observer.as_ref(),
            };
            walk(ctx, &root, tree, &root_name, 0).await?;

            return Ok(Materialized {
                artifact: Artifact::Tree { root },
                leaves_completed: leaves_completed.load(Ordering::Relaxed),
            });
        }

        let sink = ArchiveSink::new(Arc::clone(&self.client));
        let root_scope = sink.root();
        let ctx = WalkCtx {
            sink: &sink,
            name_of: &name_of,
            on_progress: &on_progress,
            leaves_completed: &leaves_completed,
            observer: self.observer.as_ref(),
        };
        walk(ctx, &root_scope, tree, &root_name, 0).await?;

        let bytes = sink.finish().map_err(MaterializeError::Archive)?;
        let filename = core::artifact_filename(&root_name);
        self.host.emit(bytes, &filename).await;

        Ok(Materialized {
            artifact: Artifact::Archive { filename },
            leaves_completed: leaves_completed.load(Ordering::Relaxed),
        })
    }
}
