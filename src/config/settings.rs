use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::game::hit_window::{DEFAULT_BPM, NoteValue};
use crate::game::lives::DEFAULT_MAX_LIVES;
use crate::game::world::WorldConfig;

/// User settings for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Tempo the hit window and tone lengths are derived from
    pub bpm: f32,
    /// Lives at the start of a round
    pub max_lives: u32,
    /// Note duration selected by default
    pub note_value: NoteValue,
    /// Run the autoplay assist
    pub autoplay: bool,
    /// Start with audio muted
    pub muted: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            max_lives: DEFAULT_MAX_LIVES,
            note_value: NoteValue::Quarter,
            autoplay: false,
            muted: false,
        }
    }
}

impl GameSettings {
    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from_file().unwrap_or_default()
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::settings_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("io", "sightread", "sightread") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".sightread-settings.json"))
        }
    }

    /// The per-run parameters carried into the world
    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            bpm: self.bpm,
            max_lives: self.max_lives,
            note_value: self.note_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = GameSettings::default();
        settings.bpm = 120.0;
        settings.note_value = NoteValue::Eighth;
        settings.autoplay = true;
        settings.save_to(&path).unwrap();

        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded.bpm, 120.0);
        assert_eq!(loaded.note_value, NoteValue::Eighth);
        assert!(loaded.autoplay);
        assert!(!loaded.muted);
    }

    #[test]
    fn note_value_serializes_lowercase() {
        let settings = GameSettings {
            note_value: NoteValue::Sixteenth,
            ..GameSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"sixteenth\""));
    }

    #[test]
    fn world_config_carries_the_run_parameters() {
        let settings = GameSettings {
            bpm: 60.0,
            max_lives: 3,
            ..GameSettings::default()
        };
        let config = settings.world_config();
        assert_eq!(config.bpm, 60.0);
        assert_eq!(config.max_lives, 3);
    }
}
