//! # Storage Layer
//!
//! Persistence is split in two, the same way as for any blob-backed store:
//!
//! 1. [`backend::StorageBackend`]: raw key-value blobs (`get`, `set`, `clear`).
//! 2. [`record_store::RecordStore`]: the record list living under one key,
//!    with the validation and lookup rules.
//!
//! ## Storage Format
//!
//! The whole list is one JSON array under the key `ibanList`:
//!
//! ```text
//! [{"id":"6f1c…","name":"Ali","iban":"TR33 0006 1005 1978 6457 8413 26","desc":""}]
//! ```
//!
//! There is no per-record granularity and no schema version. Every mutation
//! reads the full list, changes it, and writes it back. Lists are expected to
//! stay in the tens to low hundreds of entries.
//!
//! Fields missing from stored entries read as empty, and numeric ids written
//! by older clients are kept as their decimal text.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json        # IbanzConfig
//! └── store/
//!     └── ibanList.json  # Record list
//! ```
//!
//! Clearing the store only touches `store/`; configuration survives.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::{RecordStore, RECORDS_KEY};
