use super::backend::{StorageBackend, StorageResult};
use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BLOB_EXT: &str = "json";

/// File-backed key-value storage: one `<key>.json` file per key under `root`.
///
/// `root` is this application's namespace. [`StorageBackend::clear`] removes
/// every blob file in it and leaves anything else alone.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn blob_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(StorageError::Backend(format!("Invalid key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.{}", key, BLOB_EXT)))
    }

    fn ensure_dir(&self) -> StorageResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, blob: &str) -> StorageResult<()> {
        let path = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, blob).and_then(|_| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        if !self.root.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_blob = path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(BLOB_EXT);
            if is_blob {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
