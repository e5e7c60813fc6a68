//! Tiny preference file remembering the last selected technician across
//! sessions. Every failure degrades to "no preference": a missing or
//! unreadable file must never block an operation.

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub last_technician: Option<String>,
}

impl Preferences {
    pub fn prefs_file() -> PathBuf {
        Config::config_dir().join("otlogger.prefs")
    }

    pub fn load() -> Self {
        match fs::read_to_string(Self::prefs_file()) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Preferences::default(),
        }
    }

    pub fn last_technician(&self) -> Option<&str> {
        self.last_technician.as_deref()
    }

    /// Best-effort write; errors are swallowed on purpose.
    pub fn remember(technician: &str) {
        let prefs = Preferences {
            last_technician: Some(technician.to_string()),
        };
        if let Ok(yaml) = serde_yaml::to_string(&prefs) {
            let _ = fs::create_dir_all(Config::config_dir());
            let _ = fs::write(Self::prefs_file(), yaml);
        }
    }
}
