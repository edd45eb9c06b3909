use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_for_write;

pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &RecordStore<B>,
    selectors: &[S],
) -> Result<CmdResult> {
    let targets = resolve_for_write(store, selectors)?;
    let mut result = CmdResult::default();

    for dr in targets {
        if result.affected_records.iter().any(|r| r.id == dr.record.id) {
            continue;
        }
        if !store.delete_record(&dr.record.id)? {
            result.add_message(CmdMessage::warning(format!(
                "Record already gone ({}): {}",
                dr.index, dr.record.name
            )));
            continue;
        }
        result.add_message(CmdMessage::success(format!(
            "Record deleted ({}): {}",
            dr.index, dr.record.name
        )));
        result.affected_records.push(dr.record);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::model::RecordDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::RECORDS_KEY;

    fn store_with(names: &[&str]) -> RecordStore<MemBackend> {
        let store = RecordStore::with_backend(MemBackend::new());
        for name in names {
            add::run(&store, RecordDraft::new(*name, "tr33", "")).unwrap();
        }
        store
    }

    #[test]
    fn deletes_by_index() {
        let store = store_with(&["A", "B", "C"]);
        run(&store, &["2"]).unwrap();

        let names: Vec<_> = list::run(&store)
            .unwrap()
            .listed_records
            .into_iter()
            .map(|dr| dr.record.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn multiple_indexes_resolve_before_any_deletion() {
        let store = store_with(&["A", "B", "C"]);
        let result = run(&store, &["1", "2"]).unwrap();
        assert_eq!(result.affected_records.len(), 2);

        let listed = list::run(&store).unwrap().listed_records;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.name, "C");
    }

    #[test]
    fn repeated_selector_deletes_once() {
        let store = store_with(&["A", "B"]);
        let result = run(&store, &["1", "1"]).unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(list::run(&store).unwrap().listed_records.len(), 1);
    }

    fn names<B: StorageBackend>(store: &RecordStore<B>) -> Vec<String> {
        list::run(store)
            .unwrap()
            .listed_records
            .into_iter()
            .map(|dr| dr.record.name)
            .collect()
    }

    #[test]
    fn deletes_record_stored_without_id() {
        let backend = MemBackend::new();
        backend.insert_raw(
            RECORDS_KEY,
            r#"[{"id":"a","name":"A","iban":"TR33"},{"name":"NoId","iban":"DE89"}]"#,
        );
        let store = RecordStore::with_backend(&backend);

        let result = run(&store, &["2"]).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Record deleted (2): NoId");
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(names(&store), vec!["A"]);
    }

    #[test]
    fn deletes_only_the_selected_record_among_several_without_id() {
        let backend = MemBackend::new();
        backend.insert_raw(
            RECORDS_KEY,
            r#"[{"name":"First","iban":"TR33"},{"name":"Second","iban":"DE89"}]"#,
        );
        let store = RecordStore::with_backend(&backend);

        run(&store, &["1"]).unwrap();
        assert_eq!(names(&store), vec!["Second"]);
    }
}
