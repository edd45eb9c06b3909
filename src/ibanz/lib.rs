//! # Ibanz Architecture
//!
//! Ibanz keeps a personal list of bank accounts: an owner name, an IBAN and an
//! optional note per record, stored locally. It is a **UI-agnostic library**
//! with a command-line client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prompts, prints, copies to clipboard   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves display indexes to record ids                   │
//! │  - Returns CmdResult values, no I/O assumptions             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: the record list and its rules               │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`iban::format_iban`] sits beside the layers: a pure function any UI can
//! call on every keystroke.
//!
//! ## Single Source of Truth
//!
//! [`store::RecordStore`] owns the list. It caches nothing and every mutation
//! is a read-modify-write of the whole list, so a client simply re-lists after
//! each change instead of patching its own copy.
//!
//! ## Errors
//!
//! See [`error::IbanzError`]: validation failures name the missing field,
//! updates of vanished records are `NotFound`, and storage failures on write
//! are always reported. Failed reads degrade to an empty list.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, backends and the record store
//! - [`model`]: `Record`, `RecordId`, `RecordDraft`
//! - [`iban`]: IBAN formatting
//! - [`index`]: Display indexes (1, 2, 3…)
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod iban;
pub mod index;
pub mod model;
pub mod store;
