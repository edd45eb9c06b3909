use crate::error::{IbanzError, Result};
use crate::index::{index_records, resolve_selector, DisplayRecord};
use crate::store::{RecordStore, StorageBackend};

pub fn indexed_records<B: StorageBackend>(store: &RecordStore<B>) -> Vec<DisplayRecord> {
    index_records(store.load_all())
}

/// Resolves every selector up front, so later deletions cannot shift what
/// a selector points at.
pub fn resolve_selectors<B: StorageBackend, S: AsRef<str>>(
    store: &RecordStore<B>,
    selectors: &[S],
) -> Result<Vec<DisplayRecord>> {
    let indexed = indexed_records(store);

    selectors
        .iter()
        .map(|s| {
            resolve_selector(&indexed, s.as_ref())
                .cloned()
                .ok_or_else(|| IbanzError::Api(format!("No record matches {}", s.as_ref())))
        })
        .collect()
}

pub fn resolve_one<B: StorageBackend>(store: &RecordStore<B>, selector: &str) -> Result<DisplayRecord> {
    let mut resolved = resolve_selectors(store, &[selector])?;
    Ok(resolved.remove(0))
}

/// Like [`resolve_selectors`], for commands about to mutate the targets.
///
/// Records stored without an id are given one (and the list persisted)
/// before resolving, so every target carries an id the store can match.
/// Repair keeps the order, so indexes point at the same records.
pub fn resolve_for_write<B: StorageBackend, S: AsRef<str>>(
    store: &RecordStore<B>,
    selectors: &[S],
) -> Result<Vec<DisplayRecord>> {
    let repaired = store.repair_ids()?;
    if repaired > 0 {
        log::info!("Assigned ids to {} stored record(s)", repaired);
    }
    resolve_selectors(store, selectors)
}
