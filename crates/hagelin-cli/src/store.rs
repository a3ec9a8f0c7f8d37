//! On-disk key list store.
//!
//! Key lists are kept in a TOML document with one table per indicator:
//!
//! ```toml
//! [FM]
//! lugs = "1-0 2-0*8 0-3*7 0-4*5 0-5*2 1-5 1-6 3-4 4-5"
//! wheel1 = "BCEJOPSTUVXY"
//! wheel2 = "ACDHJLMNOQRUYZ"
//! wheel3 = "AEHJLOQRUV"
//! wheel4 = "DFGILMNPQS"
//! wheel5 = "CEHIJLNPS"
//! wheel6 = "ACDFHIMN"
//! check = "TNMYS CRMKK UHLKW LDQHM RQOLW R"
//! ```
//!
//! The serde record here is deliberately separate from the core `KeyList`
//! type; the file shape is a persistence concern and conversion happens at
//! this boundary. Semantic validation (lug syntax, pin letters) is left to
//! the converter when the list is applied.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hagelin_core::KeyList;

/// Errors from reading or writing key list files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error.
    #[error("key list file error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has the wrong shape.
    #[error("key list file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The key lists could not be serialized.
    #[error("key list file write error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An entry with this indicator already exists.
    #[error("key list {indicator} already exists (use --overwrite to replace it)")]
    DuplicateIndicator {
        /// The conflicting indicator.
        indicator: String,
    },
}

/// Serialized shape of one key list entry.
#[derive(Debug, Serialize, Deserialize)]
struct KeyListRecord {
    lugs: String,
    wheel1: String,
    wheel2: String,
    wheel3: String,
    wheel4: String,
    wheel5: String,
    wheel6: String,
    check: String,
}

impl KeyListRecord {
    fn from_key_list(key_list: &KeyList) -> Self {
        let [w1, w2, w3, w4, w5, w6] = key_list.pin_list.clone();
        Self {
            lugs: key_list.lugs.clone(),
            wheel1: w1,
            wheel2: w2,
            wheel3: w3,
            wheel4: w4,
            wheel5: w5,
            wheel6: w6,
            check: key_list.letter_check.clone(),
        }
    }

    fn into_key_list(self, indicator: &str) -> KeyList {
        KeyList {
            indicator: indicator.to_owned(),
            lugs: self.lugs,
            pin_list: [
                self.wheel1,
                self.wheel2,
                self.wheel3,
                self.wheel4,
                self.wheel5,
                self.wheel6,
            ],
            letter_check: self.check,
        }
    }
}

/// Loads the key list with the given indicator from `path`.
///
/// Returns `Ok(None)` when the file exists but has no entry for the
/// indicator, or when the file does not exist at all.
pub fn load(path: &Path, indicator: &str) -> Result<Option<KeyList>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let mut entries = read_entries(path)?;
    Ok(entries.remove(indicator).map(|record| record.into_key_list(indicator)))
}

/// Saves `key_list` into the file at `path`, creating the file if needed.
///
/// Refuses to replace an existing entry unless `overwrite` is set.
pub fn save(path: &Path, key_list: &KeyList, overwrite: bool) -> Result<(), StoreError> {
    let mut entries =
        if path.exists() { read_entries(path)? } else { BTreeMap::new() };

    if !overwrite && entries.contains_key(&key_list.indicator) {
        return Err(StoreError::DuplicateIndicator { indicator: key_list.indicator.clone() });
    }

    entries.insert(key_list.indicator.clone(), KeyListRecord::from_key_list(key_list));
    std::fs::write(path, toml::to_string_pretty(&entries)?)?;
    tracing::info!(indicator = %key_list.indicator, path = %path.display(), "key list saved");
    Ok(())
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, KeyListRecord>, StoreError> {
    Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm_key_list() -> KeyList {
        KeyList {
            indicator: "FM".to_owned(),
            lugs: "1-0 2-0*8 0-3*7 0-4*5 0-5*2 1-5 1-6 3-4 4-5".to_owned(),
            pin_list: [
                "BCEJOPSTUVXY".to_owned(),
                "ACDHJLMNOQRUYZ".to_owned(),
                "AEHJLOQRUV".to_owned(),
                "DFGILMNPQS".to_owned(),
                "CEHIJLNPS".to_owned(),
                "ACDFHIMN".to_owned(),
            ],
            letter_check: "TNMYS CRMKK UHLKW LDQHM RQOLW R".to_owned(),
        }
    }

    #[test]
    fn round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");

        let original = fm_key_list();
        save(&path, &original, false).unwrap();
        let loaded = load(&path, "FM").unwrap().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_and_missing_entry_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        assert!(load(&path, "FM").unwrap().is_none());

        save(&path, &fm_key_list(), false).unwrap();
        assert!(load(&path, "YL").unwrap().is_none());
    }

    #[test]
    fn duplicate_indicator_requires_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");

        save(&path, &fm_key_list(), false).unwrap();
        assert!(matches!(
            save(&path, &fm_key_list(), false),
            Err(StoreError::DuplicateIndicator { .. })
        ));
        save(&path, &fm_key_list(), true).unwrap();
    }

    #[test]
    fn multiple_key_lists_coexist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");

        let fm = fm_key_list();
        let mut yl = fm_key_list();
        yl.indicator = "YL".to_owned();

        save(&path, &fm, false).unwrap();
        save(&path, &yl, false).unwrap();
        assert_eq!(load(&path, "FM").unwrap().unwrap().indicator, "FM");
        assert_eq!(load(&path, "YL").unwrap().unwrap().indicator, "YL");
    }

    #[test]
    fn parse_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();
        assert!(matches!(load(&path, "FM"), Err(StoreError::Parse(_))));
    }
}
