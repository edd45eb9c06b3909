use super::backend::{StorageBackend, StorageResult};
use crate::error::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since ibanz is single-threaded.
/// This keeps `StorageBackend` on `&self` without paying for a lock.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation for testing degraded loads.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Test helper to plant a raw blob, bypassing the write counter.
    pub fn insert_raw(&self, key: &str, blob: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(StorageError::Backend("Simulated read error".to_string()));
        }
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> StorageResult<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StorageError::Backend("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StorageError::Backend("Simulated write error".to_string()));
        }
        self.blobs.borrow_mut().clear();
        Ok(())
    }
}
