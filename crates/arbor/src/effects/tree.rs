use std::path::{Path, PathBuf};
use std::sync::Arc;

use arbor_fetch::{ByteStream, HttpClient};
use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;

use crate::core;
use crate::effects::Sink;
use crate::error::{LeafFailure, SinkError};

/// Sink materializing groups as real directories and leaves as files.
///
/// Leaf payloads are streamed to a staging file next to the destination and
/// renamed into place once complete, so partially transferred files are never
/// visible under their final name.
pub struct TreeSink<C> {
    client: Arc<C>,
}

impl<C: HttpClient> TreeSink<C> {
    pub fn new(client: Arc<C>) -> Self { Self { client } }
}

impl<C: HttpClient> Sink for TreeSink<C> {
    type Handle = PathBuf;

    async fn open_child(
        &self,
        parent: &PathBuf,
        name: &str,
        _depth: usize,
    ) -> Result<PathBuf, SinkError> {
        let dir = parent.join(name);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SinkError::group(name, e))?;
        Ok(dir)
    }

    async fn write_leaf(&self, parent: &PathBuf, locator: &str) -> Result<(), SinkError> {
        let stream = self
            .client
            .stream(locator)
            .await
            .map_err(|e| SinkError::leaf(locator, LeafFailure::Fetch(e)))?;

        let name = core::leaf_name(locator);
        let target = parent.join(name);
        let staging = parent.join(format!("{name}.part"));

        match store_streamed(stream, &staging, &target).await {
            Ok(()) => Ok(()),
            Err(failure) => {
                let _ = tokio::fs::remove_file(&staging).await;
                Err(SinkError::leaf(locator, failure))
            }
        }
    }
}

async fn store_streamed(
    mut stream: ByteStream,
    staging: &Path,
    target: &Path,
) -> Result<(), LeafFailure> {
    let mut file = tokio::fs::File::create(staging).await?;
    while let Some(chunk) = stream.try_next().await? {
        file.write_all(&chunk).await?;
    }
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(staging, target).await?;
    Ok(())
}
