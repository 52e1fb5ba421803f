//! File-backed final score slot.
//!
//! The file is a flat JSON object of named integers, like a small
//! preferences store. Only the `"score"` key is ever written; other keys
//! already in the file are kept.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use arpakai_core::constants::SCORE_SLOT_KEY;
use arpakai_sim::ports::{PersistError, ScoreSlot};

type SlotFile = BTreeMap<String, u32>;

#[derive(Debug, Clone)]
pub struct JsonScoreSlot {
    path: PathBuf,
}

impl JsonScoreSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_slots(path: &Path) -> Result<SlotFile, PersistError> {
    if !path.exists() {
        return Ok(SlotFile::new());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

impl ScoreSlot for JsonScoreSlot {
    fn set_final_score(&mut self, score: u32) -> Result<(), PersistError> {
        let mut slots = read_slots(&self.path)?;
        slots.insert(SCORE_SLOT_KEY.to_string(), score);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        // Write then rename so a crash never leaves half a file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&slots)?)?;
        fs::rename(&tmp, &self.path)?;

        log::info!("Saved final score {} to {}", score, self.path.display());
        Ok(())
    }
}

/// Last saved final score, or `None` if nothing was ever saved.
pub fn read_score(path: impl AsRef<Path>) -> Result<Option<u32>, PersistError> {
    Ok(read_slots(path.as_ref())?.get(SCORE_SLOT_KEY).copied())
}
