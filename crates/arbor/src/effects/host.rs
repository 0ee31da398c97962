use std::path::PathBuf;

use crate::error::PermissionDenied;

/// Host environment contract: capability probe, root grant, artifact
/// emission.
///
/// The engine queries the probe once per materialization and then uses
/// exactly one of the two surfaces: a granted root directory for the tree
/// path, or [`Host::emit`] for the archive path.
pub trait Host: Send + Sync {
    /// Whether this environment can grant writable access to a real
    /// directory tree.
    fn can_use_tree_sink(&self) -> bool;

    /// Request writable access to the destination root. Refusal aborts the
    /// materialization before any fetch is attempted.
    fn request_root_dir(&self) -> impl Future<Output = Result<PathBuf, PermissionDenied>> + Send;

    /// Hand a finished archive to the environment under a suggested
    /// filename. Fire-and-forget; the engine consumes no result.
    fn emit(&self, bytes: Vec<u8>, filename: &str) -> impl Future<Output = ()> + Send;
}

impl<H: Host + ?Sized> Host for std::sync::Arc<H> {
    fn can_use_tree_sink(&self) -> bool { (**self).can_use_tree_sink() }

    fn request_root_dir(&self) -> impl Future<Output = Result<PathBuf, PermissionDenied>> + Send {
        (**self).request_root_dir()
    }

    fn emit(&self, bytes: Vec<u8>, filename: &str) -> impl Future<Output = ()> + Send {
        (**self).emit(bytes, filename)
    }
}

/// Stock host backed by the local filesystem.
///
/// Grants `destination` as the writable root when it can be created and
/// written to; emitted archives land as files in `download_dir`.
pub struct LocalHost {
    destination:  Option<PathBuf>,
    download_dir: PathBuf,
}

impl LocalHost {
    pub fn with_tree_destination(
        destination: impl Into<PathBuf>,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            destination:  Some(destination.into()),
            download_dir: download_dir.into(),
        }
    }

    /// A host with no directory-tree capability; every materialization takes
    /// the archive path.
    pub fn archive_only(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            destination:  None,
            download_dir: download_dir.into(),
        }
    }
}

impl Host for LocalHost {
    fn can_use_tree_sink(&self) -> bool { self.destination.is_some() }

    async fn request_root_dir(&self) -> Result<PathBuf, PermissionDenied> {
        let Some(root) = &self.destination else {
            return Err(PermissionDenied::new("no writable destination configured"));
        };
        tokio::fs::create_dir_all(root).await.map_err(|e| {
            PermissionDenied::new(format!("cannot create {}: {e}", root.display()))
        })?;

        // create_dir_all succeeds on a pre-existing read-only directory, so
        // probe with an actual write.
        let probe = root.join(".write-probe");
        match tokio::fs::File::create(&probe).await {
            Ok(file) => {
                drop(file);
                let _ = tokio::fs::remove_file(&probe).await;
                Ok(root.clone())
            }
            Err(e) => Err(PermissionDenied::new(format!(
                "{} is not writable: {e}",
                root.display()
            ))),
        }
    }

    async fn emit(&self, bytes: Vec<u8>, filename: &str) {
        let path = self.download_dir.join(filename);
        if let Err(error) = tokio::fs::write(&path, bytes).await {
            tracing::warn!(path = %path.display(), %error, "failed to land emitted archive");
        }
    }
}
