use crate::commands::{CmdMessage, CmdResult, RecordEdit};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::{resolve_for_write, resolve_one};

/// Edits one record. The edit is merged over the stored values and the
/// result is written as a whole-record update.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: &str,
    edit: RecordEdit,
) -> Result<CmdResult> {
    if edit.is_empty() {
        resolve_one(store, selector)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let target = resolve_for_write(store, &[selector])?.remove(0);
    let current = RecordDraft::from(&target.record);
    let patch = RecordDraft {
        name: edit.name.unwrap_or(current.name),
        iban: edit.iban.unwrap_or(current.iban),
        desc: edit.desc.unwrap_or(current.desc),
    };
    let record = store.update_record(&target.record.id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        target.index, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::error::IbanzError;
    use crate::model::Field;
    use crate::store::mem_backend::MemBackend;
    use crate::store::RECORDS_KEY;

    fn store_with_two() -> RecordStore<MemBackend> {
        let store = RecordStore::with_backend(MemBackend::new());
        add::run(&store, RecordDraft::new("A", "tr33", "first")).unwrap();
        add::run(&store, RecordDraft::new("B", "de89", "second")).unwrap();
        store
    }

    #[test]
    fn updates_only_given_fields() {
        let store = store_with_two();
        let edit = RecordEdit {
            iban: Some("gb82 west 1234".into()),
            ..Default::default()
        };
        run(&store, "2", edit).unwrap();

        let listed = list::run(&store).unwrap().listed_records;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].record.name, "B");
        assert_eq!(listed[1].record.iban, "GB82 WEST 1234");
        assert_eq!(listed[1].record.desc, "second");
        assert_eq!(listed[0].record.iban, "TR33");
    }

    #[test]
    fn empty_edit_writes_nothing() {
        let backend = MemBackend::new();
        let store = RecordStore::with_backend(&backend);
        add::run(&store, RecordDraft::new("A", "tr33", "")).unwrap();
        let writes = backend.write_count();

        let result = run(&store, "1", RecordEdit::default()).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn blank_name_is_rejected() {
        let store = store_with_two();
        let edit = RecordEdit {
            name: Some("  ".into()),
            ..Default::default()
        };
        let err = run(&store, "1", edit).unwrap_err();
        assert!(matches!(err, IbanzError::Validation(Field::Name)));
        assert_eq!(list::run(&store).unwrap().listed_records[0].record.name, "A");
    }

    #[test]
    fn edits_record_stored_without_id() {
        let backend = MemBackend::new();
        backend.insert_raw(
            RECORDS_KEY,
            r#"[{"id":"a","name":"A","iban":"TR33"},{"name":"NoId","iban":"DE89"}]"#,
        );
        let store = RecordStore::with_backend(&backend);
        let edit = RecordEdit {
            desc: Some("found".into()),
            ..Default::default()
        };

        let result = run(&store, "2", edit).unwrap();
        assert_eq!(result.messages[0].content, "Record updated (2): NoId");

        let listed = list::run(&store).unwrap().listed_records;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].record.name, "NoId");
        assert_eq!(listed[1].record.desc, "found");
        assert!(!listed[1].record.id.is_blank());
        assert_eq!(listed[1].record.id, result.affected_records[0].id);
        assert_eq!(listed[0].record.id.as_str(), "a");
    }
}
