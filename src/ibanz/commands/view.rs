use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &RecordStore<B>,
    selectors: &[S],
) -> Result<CmdResult> {
    let records = resolve_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::IbanzError;
    use crate::model::RecordDraft;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn views_by_index_and_id() {
        let store = RecordStore::with_backend(MemBackend::new());
        add::run(&store, RecordDraft::new("A", "tr33", "")).unwrap();
        let b = add::run(&store, RecordDraft::new("B", "de89", "")).unwrap();
        let b_id = b.affected_records[0].id.to_string();

        let result = run(&store, &["1", b_id.as_str()]).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].record.name, "A");
        assert_eq!(result.listed_records[1].index, 2);
    }

    #[test]
    fn unknown_selector_fails() {
        let store = RecordStore::with_backend(MemBackend::new());
        assert!(matches!(run(&store, &["1"]), Err(IbanzError::Api(_))));
    }
}
