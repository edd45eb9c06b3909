use super::backend::StorageBackend;
use crate::error::{IbanzError, Result, StorageError};
use crate::model::{Record, RecordDraft, RecordId};
use log::{debug, warn};

/// Key of the blob holding the record list.
pub const RECORDS_KEY: &str = "ibanList";

/// Sole owner of the persisted record list.
///
/// Nothing is cached: every call re-reads the backend, and every mutation
/// rewrites the whole list. Two stores over the same backend therefore always
/// see each other's writes, but a write landing between another store's read
/// and write is lost (last write wins).
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// All records in stored order.
    ///
    /// A missing, unreadable or unparsable blob reads as an empty list.
    pub fn load_all(&self) -> Vec<Record> {
        match self.read_list() {
            Ok(records) => records,
            Err(e) => {
                warn!("Could not load record list, treating it as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Look up a single record.
    pub fn get_record(&self, id: &RecordId) -> Result<Record> {
        self.load_all()
            .into_iter()
            .find(|r| r.has_id(id))
            .ok_or_else(|| IbanzError::NotFound(id.clone()))
    }

    pub fn add_record(&self, draft: RecordDraft) -> Result<Record> {
        let draft = draft.validated()?;

        let mut records = self.read_list()?;
        assign_missing_ids(&mut records);
        let mut record = Record::new(draft);
        while records.iter().any(|r| r.id == record.id) {
            record.id = RecordId::generate();
        }
        records.push(record.clone());
        self.write_list(&records)?;

        debug!("Added record {} ({} total)", record.id, records.len());
        Ok(record)
    }

    /// Replace name, IBAN and description of every record with `id`, in
    /// place. Returns the first updated record.
    pub fn update_record(&self, id: &RecordId, patch: RecordDraft) -> Result<Record> {
        let patch = patch.validated()?;

        let mut records = self.read_list()?;
        let mut updated: Option<Record> = None;
        for record in records.iter_mut().filter(|r| r.has_id(id)) {
            record.apply(patch.clone());
            if updated.is_none() {
                updated = Some(record.clone());
            }
        }
        let updated = updated.ok_or_else(|| IbanzError::NotFound(id.clone()))?;
        assign_missing_ids(&mut records);
        self.write_list(&records)?;

        debug!("Updated record {}", id);
        Ok(updated)
    }

    /// Remove every record with `id`. Removing an absent id is not an error
    /// and writes nothing; the returned flag tells whether anything went.
    pub fn delete_record(&self, id: &RecordId) -> Result<bool> {
        let mut records = self.read_list()?;
        let before = records.len();
        records.retain(|r| !r.has_id(id));
        if records.len() == before {
            debug!("Record {} already absent, nothing to delete", id);
            return Ok(false);
        }
        assign_missing_ids(&mut records);
        self.write_list(&records)?;

        debug!(
            "Deleted {} record(s) with id {} ({} left)",
            before - records.len(),
            id,
            records.len()
        );
        Ok(true)
    }

    /// Give every stored record without an id a fresh one and persist the
    /// list. Returns how many were repaired; nothing is written when none
    /// needed it.
    pub fn repair_ids(&self) -> Result<usize> {
        let mut records = self.read_list()?;
        let repaired = assign_missing_ids(&mut records);
        if repaired > 0 {
            self.write_list(&records)?;
        }
        Ok(repaired)
    }

    /// Erase the whole backing namespace. Irreversible.
    pub fn clear_all(&self) -> Result<()> {
        self.backend.clear()?;
        debug!("Cleared all stored data");
        Ok(())
    }

    /// Strict read used by mutations. An unparsable list is reported rather
    /// than overwritten.
    fn read_list(&self) -> std::result::Result<Vec<Record>, StorageError> {
        let Some(blob) = self.backend.get(RECORDS_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&blob)?)
    }

    fn write_list(&self, records: &[Record]) -> Result<()> {
        let blob = serde_json::to_string(records).map_err(StorageError::Serialization)?;
        self.backend.set(RECORDS_KEY, &blob)?;
        Ok(())
    }
}

fn assign_missing_ids(records: &mut [Record]) -> usize {
    let mut repaired = 0;
    for record in records.iter_mut().filter(|r| r.id.is_blank()) {
        record.id = RecordId::generate();
        warn!("Assigned id {} to stored record without one", record.id);
        repaired += 1;
    }
    repaired
}
