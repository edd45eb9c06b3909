//! # Display Indexes
//!
//! Record ids are long and unfriendly to type, so listings number records
//! 1, 2, 3… in stored order and commands accept those numbers.
//!
//! Indexes are positional: deleting record 1 renumbers everything after it.
//! They are resolved to ids once, at the start of a command, and the command
//! then works on ids only.
//!
//! A selector is first tried as an index, then as an exact record id. Old
//! lists may carry numeric ids (timestamps); those are far larger than any
//! index and fall through to the id match.

use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Record,
}

/// Assigns 1-based display indexes in stored order.
pub fn index_records(records: Vec<Record>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record,
        })
        .collect()
}

/// Finds the listed record a user selector refers to.
pub fn resolve_selector<'a>(listed: &'a [DisplayRecord], selector: &str) -> Option<&'a DisplayRecord> {
    let selector = selector.trim();
    if let Ok(n) = selector.parse::<usize>() {
        if let Some(dr) = listed.iter().find(|dr| dr.index == n) {
            return Some(dr);
        }
    }
    listed.iter().find(|dr| dr.record.id.as_str() == selector)
}
