//! Creature records

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RecordError;

/// File name of the creature list record
pub const MONSTER_RECORD_FILE: &str = "monster.json";

/// One creature entry in a module
///
/// Pure data. `name` is the logical name the sprite resolver formats into
/// an on-disk group id; `atk_main` and `atk_alt` are 1-based indices into
/// the attack-effect frame set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterRecord {
    pub name: String,
    /// Evolution stage (0 = egg)
    #[serde(default)]
    pub stage: u32,
    /// Elemental attribute label; presentation maps it to a color elsewhere
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub hp: u32,
    /// Primary attack sprite (1-based)
    #[serde(default)]
    pub atk_main: u32,
    /// Alternate attack sprite (1-based)
    #[serde(default)]
    pub atk_alt: u32,
}

/// On-disk shape of `monster.json`
#[derive(Debug, Default, Serialize, Deserialize)]
struct MonsterFile {
    #[serde(default)]
    monster: Vec<MonsterRecord>,
}

/// Load every creature record from `<module_dir>/monster.json`
pub fn load_monsters(module_dir: &Path) -> Result<Vec<MonsterRecord>, RecordError> {
    let raw = std::fs::read_to_string(module_dir.join(MONSTER_RECORD_FILE))?;
    let file: MonsterFile = serde_json::from_str(&raw)?;
    Ok(file.monster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_module_dir(record: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MONSTER_RECORD_FILE), record).unwrap();
        dir
    }

    #[test]
    fn test_load_monster_list() {
        let dir = setup_module_dir(
            r#"{
                "monster": [
                    {
                        "name": "Agumon",
                        "stage": 3,
                        "attribute": "Vaccine",
                        "power": 42,
                        "hp": 10,
                        "atk_main": 5,
                        "atk_alt": 30
                    },
                    {"name": "Betamon", "stage": 3}
                ]
            }"#,
        );

        let monsters = load_monsters(dir.path()).unwrap();
        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].name, "Agumon");
        assert_eq!(monsters[0].attribute, "Vaccine");
        assert_eq!(monsters[0].atk_main, 5);
        assert_eq!(monsters[1].name, "Betamon");
        assert_eq!(monsters[1].power, 0);
    }

    #[test]
    fn test_empty_list() {
        let dir = setup_module_dir(r#"{"monster": []}"#);
        assert!(load_monsters(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_key_defaults_to_empty() {
        let dir = setup_module_dir("{}");
        assert!(load_monsters(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_monsters(dir.path()),
            Err(RecordError::Io(_))
        ));
    }
}
