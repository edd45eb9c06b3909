use crate::error::{IbanzError, Result};
use crate::iban::format_iban;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a record.
///
/// Freshly created records get a UUID v4. Lists written by older clients may
/// carry numeric ids (millisecond timestamps); those are read back as their
/// decimal text so equality keeps working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
            Null,
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Float(n) => RecordId(n.to_string()),
            RawId::Null => RecordId::default(),
        })
    }
}

/// Required fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Iban,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Iban => write!(f, "IBAN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub iban: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub desc: String,
}

impl Record {
    /// Builds a record with a freshly generated id.
    pub fn new(draft: RecordDraft) -> Self {
        Self::with_id(RecordId::generate(), draft)
    }

    pub fn with_id(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            name: draft.name,
            iban: draft.iban,
            desc: draft.desc,
        }
    }

    /// Whether this record answers to `id`. A blank id never matches: records
    /// stored without one are addressed only after their id is repaired.
    pub fn has_id(&self, id: &RecordId) -> bool {
        !id.is_blank() && &self.id == id
    }

    /// Replaces every editable field, keeping the id.
    pub fn apply(&mut self, patch: RecordDraft) {
        self.name = patch.name;
        self.iban = patch.iban;
        self.desc = patch.desc;
    }
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// User-entered field values for an add or a whole-record update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub iban: String,
    pub desc: String,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, iban: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iban: iban.into(),
            desc: desc.into(),
        }
    }

    /// Trims the name, canonicalizes the IBAN, then checks required fields
    /// in form order (name first).
    pub fn validated(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        let iban = format_iban(&self.iban);

        if name.is_empty() {
            return Err(IbanzError::Validation(Field::Name));
        }
        if iban.is_empty() {
            return Err(IbanzError::Validation(Field::Iban));
        }

        Ok(Self {
            name,
            iban,
            desc: self.desc,
        })
    }
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            iban: record.iban.clone(),
            desc: record.desc.clone(),
        }
    }
}
