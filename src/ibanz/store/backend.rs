use crate::error::StorageError;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract interface for raw key-value blob storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (the record list and its rules).
///
/// All methods take `&self`; backends handle their own mutability.
pub trait StorageBackend {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the blob under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, blob: &str) -> StorageResult<()>;

    /// Erase every key in this backend's namespace.
    fn clear(&self) -> StorageResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> StorageResult<()> {
        (**self).set(key, blob)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }
}
