//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all ibanz operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values. It does no printing, no prompting and no
//! clipboard access; those belong to the client.
//!
//! `IbanzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `IbanzApi<FsBackend>`
//! - Testing: `IbanzApi<MemBackend>`
//!
//! Clients never hold on to record lists across calls. After any mutation
//! they call [`IbanzApi::list_records`] again to refresh their view.

use crate::commands;
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::fs_backend::FsBackend;
use crate::store::{RecordStore, StorageBackend};

pub struct IbanzApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::IbanzPaths,
}

impl IbanzApi<FsBackend> {
    /// File-backed API rooted at `paths.data`.
    pub fn open(paths: commands::IbanzPaths) -> Self {
        let backend = FsBackend::new(paths.store_dir());
        Self::new(backend, paths)
    }
}

impl<B: StorageBackend> IbanzApi<B> {
    pub fn new(backend: B, paths: commands::IbanzPaths) -> Self {
        Self {
            store: RecordStore::with_backend(backend),
            paths,
        }
    }

    pub fn add_record(
        &self,
        name: impl Into<String>,
        iban: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, RecordDraft::new(name, iban, desc))
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_records<S: AsRef<str>>(&self, selectors: &[S]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, selectors)
    }

    pub fn update_record(
        &self,
        selector: &str,
        edit: commands::RecordEdit,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, selector, edit)
    }

    pub fn delete_records<S: AsRef<str>>(&self, selectors: &[S]) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, selectors)
    }

    pub fn clear_all(&self) -> Result<commands::CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn copy_field(&self, selector: &str, field: CopyField) -> Result<commands::CmdResult> {
        commands::copy::run(&self.store, selector, field)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::IbanzPaths {
        &self.paths
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::copy::CopyField;
pub use commands::{CmdMessage, CmdResult, IbanzPaths, MessageLevel, RecordEdit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use tempfile::TempDir;

    fn api() -> (TempDir, IbanzApi<MemBackend>) {
        let dir = TempDir::new().unwrap();
        let api = IbanzApi::new(MemBackend::new(), IbanzPaths::new(dir.path()));
        (dir, api)
    }

    #[test]
    fn add_dispatches_and_formats() {
        let (_dir, api) = api();
        let result = api.add_record("Ali", "tr330006", "").unwrap();
        assert_eq!(result.affected_records[0].iban, "TR33 0006");
        assert_eq!(api.list_records().unwrap().listed_records.len(), 1);
    }

    #[test]
    fn edit_then_refresh_sees_change() {
        let (_dir, api) = api();
        api.add_record("Ali", "tr33", "").unwrap();
        api.update_record(
            "1",
            RecordEdit {
                desc: Some("rent".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let listed = api.list_records().unwrap().listed_records;
        assert_eq!(listed[0].record.desc, "rent");
    }

    #[test]
    fn delete_and_clear_dispatch() {
        let (_dir, api) = api();
        api.add_record("A", "tr33", "").unwrap();
        api.add_record("B", "tr33", "").unwrap();
        api.add_record("C", "tr33", "").unwrap();

        api.delete_records(&["1"]).unwrap();
        assert_eq!(api.list_records().unwrap().listed_records.len(), 2);

        api.clear_all().unwrap();
        assert!(api.list_records().unwrap().listed_records.is_empty());
    }

    #[test]
    fn copy_returns_clipboard_text() {
        let (_dir, api) = api();
        api.add_record("Ali", "tr33 0006", "").unwrap();
        let clip = api.copy_field("1", CopyField::Iban).unwrap().clipboard.unwrap();
        assert_eq!(clip.text, "TR33 0006");
    }

    #[test]
    fn config_uses_data_dir() {
        let (dir, api) = api();
        api.config(ConfigAction::Set("confirm-delete".into(), "false".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
