use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::path::FolderPath;

/// A composite artifact under construction.
///
/// Registration is cheap and safe under concurrent producers; nothing is
/// encoded until [`Archive::into_zip_bytes`]. Folder entries are kept even
/// when empty so the encoded artifact preserves the full tree shape.
#[derive(Debug, Default)]
pub struct Archive {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    folders: BTreeSet<String>,
    files:   BTreeMap<String, Bytes>,
}

impl Archive {
    pub fn new() -> Self { Self::default() }

    /// The artifact's top-level scope.
    pub fn root(&self) -> FolderPath { FolderPath::root() }

    /// Register a folder under `parent` and return its scope. Registering
    /// the same folder again is a lookup.
    pub fn add_folder(&self, parent: &FolderPath, name: &str) -> FolderPath {
        let scope = parent.join(name);
        self.state().folders.insert(scope.as_str().to_string());
        scope
    }

    /// Insert a file entry into `folder`. A sibling entry with the same name
    /// is overwritten.
    pub fn add_file(&self, folder: &FolderPath, name: &str, contents: Bytes) {
        self.state().files.insert(folder.entry(name), contents);
    }

    /// Number of file entries registered so far.
    pub fn file_count(&self) -> usize { self.state().files.len() }

    /// Encode every registered folder and file as a deflate-compressed ZIP.
    pub fn into_zip_bytes(self) -> Result<Vec<u8>> {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for folder in &state.folders {
            writer.add_directory(folder.clone(), options)?;
        }
        for (name, contents) in &state.files {
            writer.start_file(name.clone(), options)?;
            writer.write_all(contents)?;
        }

        Ok(writer.finish()?.into_inner())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
