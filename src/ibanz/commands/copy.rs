use crate::commands::CmdResult;
use crate::error::Result;
use crate::iban::compact_iban;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_one;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Name,
    Iban,
    /// The IBAN without group separators
    CompactIban,
}

impl CopyField {
    pub fn label(&self) -> &'static str {
        match self {
            CopyField::Name => "Name",
            CopyField::Iban | CopyField::CompactIban => "IBAN",
        }
    }
}

/// Picks the text to copy. Putting it on the clipboard is the caller's job.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: &str,
    field: CopyField,
) -> Result<CmdResult> {
    let target = resolve_one(store, selector)?;
    let text = match field {
        CopyField::Name => target.record.name.clone(),
        CopyField::Iban => target.record.iban.clone(),
        CopyField::CompactIban => compact_iban(&target.record.iban),
    };

    Ok(CmdResult::default()
        .with_clipboard(field.label(), text)
        .with_affected_records(vec![target.record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::RecordDraft;
    use crate::store::mem_backend::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        let store = RecordStore::with_backend(MemBackend::new());
        add::run(&store, RecordDraft::new("Ali", "tr330006100519", "")).unwrap();
        store
    }

    #[test]
    fn copies_stored_iban() {
        let clip = run(&store(), "1", CopyField::Iban).unwrap().clipboard.unwrap();
        assert_eq!(clip.label, "IBAN");
        assert_eq!(clip.text, "TR33 0006 1005 19");
    }

    #[test]
    fn copies_compact_iban() {
        let clip = run(&store(), "1", CopyField::CompactIban)
            .unwrap()
            .clipboard
            .unwrap();
        assert_eq!(clip.text, "TR330006100519");
    }

    #[test]
    fn copies_name() {
        let clip = run(&store(), "1", CopyField::Name).unwrap().clipboard.unwrap();
        assert_eq!(clip.label, "Name");
        assert_eq!(clip.text, "Ali");
    }
}
