//! Configuration loading and parsing.
//!
//! Parses `jour.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! tab_stop = 4
//! message_sustain_secs = 5
//! ```
//!
//! Missing file, missing section, or missing field all fall back to the
//! defaults. A file that fails to parse is logged at warn level and ignored.
//! Unknown fields are tolerated. `tab_stop` is clamped into
//! `TAB_STOP_MIN..=TAB_STOP_MAX` when the effective value is computed; the
//! parsed value itself is kept as written.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "jour.toml";
pub const TAB_STOP_MIN: usize = 1;
pub const TAB_STOP_MAX: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorConfig::default_message_sustain_secs")]
    pub message_sustain_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            message_sustain_secs: Self::default_message_sustain_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        4
    }
    const fn default_message_sustain_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: `jour.toml` in the working directory, then the
/// platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("jour").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_not_found_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Tab-stop width clamped into `TAB_STOP_MIN..=TAB_STOP_MAX`.
    pub fn effective_tab_stop(&self) -> usize {
        let raw = self.file.editor.tab_stop;
        let clamped = raw.clamp(TAB_STOP_MIN, TAB_STOP_MAX);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                min = TAB_STOP_MIN,
                max = TAB_STOP_MAX,
                "tab_stop_clamped"
            );
        }
        clamped
    }

    pub fn message_sustain(&self) -> Duration {
        Duration::from_secs(self.file.editor.message_sustain_secs)
    }
}
