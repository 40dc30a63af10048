// File: src/config.rs
use crate::core::converter::Script;
use crate::error::{Result, TrainerError};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "trainer.json";
/// Environment variable that points at a different config file.
pub const CONFIG_PATH_ENV: &str = "KANA_TRAINER_CONFIG";

/// Trainer settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub word_bank_path: PathBuf,
    pub session_length: usize,
    pub script: Script,
    pub log_path: PathBuf,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            word_bank_path: PathBuf::from("words.txt"),
            session_length: 16,
            script: Script::Hiragana,
            log_path: PathBuf::from("kana_trainer.log"),
        }
    }
}

impl TrainerConfig {
    /// Config file location: `$KANA_TRAINER_CONFIG` or `trainer.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(TrainerError::ConfigUnreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&text).map_err(|source| TrainerError::ConfigInvalid {
            path: path.to_path_buf(),
            source,
        })
    }
}
