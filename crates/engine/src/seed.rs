//! JSON seed files loaded into a fresh catalogue.
//!
//! ```json
//! {
//!   "author": "3f2c...",
//!   "users": [],
//!   "sources": ["9a41..."],
//!   "tools": [],
//!   "subclasses": [],
//!   "weapon_kinds": [
//!     { "weapon_type": "MARTIAL_MELEE", "name": "длинные мечи", "description": "..." }
//!   ],
//!   "weapon_properties": [
//!     { "name": "VERSATILE", "description": "...", "second_hand_dice": "1d10" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use grimoire_domain::{Dice, SourceId, SubclassId, ToolId, UserId, WeaponPropertyName, WeaponType};
use serde::Deserialize;

use crate::use_cases::UseCaseError;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed entry '{entry}' was rejected: {source}")]
    Rejected {
        entry: String,
        #[source]
        source: UseCaseError,
    },
}

/// Catalogue content applied through the regular create use cases.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    /// User the seeded entries are created as. Registered automatically.
    pub author: UserId,
    #[serde(default)]
    pub users: Vec<UserId>,
    #[serde(default)]
    pub sources: Vec<SourceId>,
    #[serde(default)]
    pub tools: Vec<ToolId>,
    #[serde(default)]
    pub subclasses: Vec<SubclassId>,
    #[serde(default)]
    pub weapon_kinds: Vec<SeedWeaponKind>,
    #[serde(default)]
    pub weapon_properties: Vec<SeedWeaponProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedWeaponKind {
    pub weapon_type: WeaponType,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedWeaponProperty {
    pub name: WeaponPropertyName,
    pub description: String,
    #[serde(default)]
    pub base_range: Option<u16>,
    #[serde(default)]
    pub max_range: Option<u16>,
    #[serde(default)]
    pub second_hand_dice: Option<Dice>,
}

impl SeedFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Counts of what a seed run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub sources: usize,
    pub tools: usize,
    pub subclasses: usize,
    pub weapon_kinds: usize,
    pub weapon_properties: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "author": "6f1c5f36-2b7e-4c49-9a59-1f0e3e1f2a10",
        "sources": ["0b8f7e0e-7d1e-4a3c-8b54-3f2c1d0e9a77"],
        "weapon_kinds": [
            { "weapon_type": "martial_melee", "name": "длинные мечи", "description": "Универсальные клинки" }
        ],
        "weapon_properties": [
            { "name": "VERSATILE", "description": "Двуручный хват", "second_hand_dice": "1d10" },
            { "name": "AMMUNITION", "description": "Нужны боеприпасы", "base_range": 80, "max_range": 320 }
        ]
    }"#;

    #[test]
    fn parses_sample_with_defaults() {
        let seed = SeedFile::parse(SAMPLE).unwrap();

        assert!(seed.users.is_empty());
        assert_eq!(seed.sources.len(), 1);
        assert_eq!(seed.weapon_kinds[0].weapon_type, WeaponType::MartialMelee);
        assert_eq!(seed.weapon_properties[0].second_hand_dice.map(|d| d.to_string()).as_deref(), Some("1d10"));
        assert_eq!(seed.weapon_properties[1].max_range, Some(320));
    }

    #[test]
    fn unknown_property_name_fails_to_parse() {
        let raw = r#"{
            "author": "6f1c5f36-2b7e-4c49-9a59-1f0e3e1f2a10",
            "weapon_properties": [{ "name": "SHARP", "description": "?" }]
        }"#;
        assert!(SeedFile::parse(raw).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let seed = SeedFile::load(file.path()).unwrap();
        assert_eq!(seed.weapon_properties.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = SeedFile::load(&path).unwrap_err();
        assert!(matches!(err, SeedError::Read { path: ref p, .. } if *p == path));
    }
}
