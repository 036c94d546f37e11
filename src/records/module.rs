//! Module configuration record

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RecordError;

/// File name of the module configuration record
pub const MODULE_RECORD_FILE: &str = "module.json";

/// A module's configuration record
///
/// Pure data: the editor reads the sprite `name_format` and tuning values
/// from here and never acts on them itself. Unknown fields are ignored so
/// records written by other tools keep loading; missing fields default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Display name of the module
    #[serde(default)]
    pub name: String,

    /// Template mapping a logical name to its sprite group
    ///
    /// Empty means the built-in default applies (see
    /// [`DEFAULT_NAME_FORMAT`](crate::sprites::DEFAULT_NAME_FORMAT)).
    #[serde(default)]
    pub name_format: String,

    /// Record format version
    #[serde(default)]
    pub version: u32,

    /// Optional free-form description
    #[serde(default)]
    pub description: String,

    /// Minutes between hunger drops
    #[serde(default)]
    pub hunger_timer: u32,

    /// Minutes between strength drops
    #[serde(default)]
    pub strength_timer: u32,

    /// Whether waking a sleeping creature costs care mistakes
    #[serde(default)]
    pub sleep_disturbances: bool,
}

impl ModuleRecord {
    /// Load the record from `<module_dir>/module.json`
    pub fn load(module_dir: &Path) -> Result<Self, RecordError> {
        let raw = std::fs::read_to_string(module_dir.join(MODULE_RECORD_FILE))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_module_dir(record: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MODULE_RECORD_FILE), record).unwrap();
        dir
    }

    #[test]
    fn test_load_full_record() {
        let dir = setup_module_dir(
            r#"{
                "name": "DMC",
                "name_format": "$_dmc",
                "version": 2,
                "description": "Baseline ruleset",
                "hunger_timer": 3,
                "strength_timer": 4,
                "sleep_disturbances": true
            }"#,
        );

        let record = ModuleRecord::load(dir.path()).unwrap();
        assert_eq!(record.name, "DMC");
        assert_eq!(record.name_format, "$_dmc");
        assert_eq!(record.version, 2);
        assert_eq!(record.hunger_timer, 3);
        assert!(record.sleep_disturbances);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = setup_module_dir(r#"{"name": "PEN"}"#);

        let record = ModuleRecord::load(dir.path()).unwrap();
        assert_eq!(record.name, "PEN");
        assert_eq!(record.name_format, "");
        assert_eq!(record.version, 0);
        assert!(!record.sleep_disturbances);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let dir = setup_module_dir(r#"{"name": "DMC", "made_with": "another editor"}"#);
        assert!(ModuleRecord::load(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ModuleRecord::load(dir.path()).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = setup_module_dir("{not json");
        let err = ModuleRecord::load(dir.path()).unwrap_err();
        assert!(matches!(err, RecordError::Parse(_)));
    }
}
