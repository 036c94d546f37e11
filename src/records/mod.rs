//! Module record data
//!
//! Plain data mirrors of the JSON records a module ships (`module.json`,
//! `monster.json`). The editor core only reads them; writing edited records
//! back is handled elsewhere. Unlike the sprite core, record loading
//! surfaces real errors: a record is explicit caller input and a malformed
//! one must be reported, not absorbed.

mod module;
mod monster;

pub use module::{ModuleRecord, MODULE_RECORD_FILE};
pub use monster::{load_monsters, MonsterRecord, MONSTER_RECORD_FILE};

/// Error type for record loading
#[derive(Debug)]
pub enum RecordError {
    /// File I/O error
    Io(String),
    /// JSON parse error
    Parse(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Io(msg) => write!(f, "I/O error: {}", msg),
            RecordError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::Parse(e.to_string())
    }
}
