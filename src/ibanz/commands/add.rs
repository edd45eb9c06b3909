use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, draft: RecordDraft) -> Result<CmdResult> {
    let record = store.add_record(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added: {} ({})",
        record.name, record.iban
    )));
    Ok(result.with_affected_records(vec![record]))
}
