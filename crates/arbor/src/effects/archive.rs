use std::sync::Arc;

use arbor_archive::{Archive, FolderPath};
use arbor_fetch::{HttpClient, collect_bytes};

use crate::core;
use crate::effects::Sink;
use crate::error::{LeafFailure, SinkError};

/// Sink materializing the tree as entries of one in-memory ZIP artifact.
///
/// Structural writes only register scopes; nothing is encoded until
/// [`ArchiveSink::finish`], called once after the walk settles.
pub struct ArchiveSink<C> {
    client:  Arc<C>,
    archive: Archive,
}

impl<C: HttpClient> ArchiveSink<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            archive: Archive::new(),
        }
    }

    /// The artifact's top-level scope, used as the walk's starting handle.
    pub fn root(&self) -> FolderPath { self.archive.root() }

    /// Encode the composed artifact.
    pub fn finish(self) -> Result<Vec<u8>, arbor_archive::Error> { self.archive.into_zip_bytes() }
}

impl<C: HttpClient> Sink for ArchiveSink<C> {
    type Handle = FolderPath;

    async fn open_child(
        &self,
        parent: &FolderPath,
        name: &str,
        depth: usize,
    ) -> Result<FolderPath, SinkError> {
        // The tree root's name goes into the artifact filename, not a nested
        // folder; depth 0 resolves to the artifact itself.
        if depth == 0 {
            return Ok(self.archive.root());
        }
        Ok(self.archive.add_folder(parent, name))
    }

    async fn write_leaf(&self, parent: &FolderPath, locator: &str) -> Result<(), SinkError> {
        let stream = self
            .client
            .stream(locator)
            .await
            .map_err(|e| SinkError::leaf(locator, LeafFailure::Fetch(e)))?;
        let contents = collect_bytes(stream)
            .await
            .map_err(|e| SinkError::leaf(locator, LeafFailure::Fetch(e)))?;

        self.archive
            .add_file(parent, core::leaf_name(locator), contents);
        Ok(())
    }
}
