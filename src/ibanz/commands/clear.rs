use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let removed = store.load_all();
    store.clear_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All data deleted ({} records).",
        removed.len()
    )));
    Ok(result.with_affected_records(removed))
}
