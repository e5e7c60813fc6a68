use crate::core::validate::ValidationPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod prefs;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Known technicians. Lives here, not in code: the roster changes
    /// without a release.
    #[serde(default = "default_roster")]
    pub technicians: Vec<String>,
    /// Reject records for technicians outside the roster.
    #[serde(default = "default_enforce_roster")]
    pub enforce_roster: bool,
    /// Require a non-blank work description on every record.
    #[serde(default)]
    pub require_description: bool,
    /// Confirmation code for `reset`. A UX gate, not a credential.
    #[serde(default = "default_reset_code")]
    pub reset_code: String,
    /// Display offset from UTC in minutes. Storage stays UTC; this is
    /// applied only when parsing CLI input and formatting output.
    #[serde(default = "default_display_offset")]
    pub display_utc_offset_minutes: i32,
}

fn default_roster() -> Vec<String> {
    [
        "Carlos Cisneros",
        "Juan Carrión",
        "César Sánchez",
        "Miguel Lozada",
        "Roberto Córdova",
        "Alex Haro",
        "Dario Ojeda",
        "Israel Pérez",
        "José Urquizo",
        "Kevin Vargas",
        "Edisson Bejarano",
        "Leonardo Ballesteros",
        "Marlon Ortiz",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_enforce_roster() -> bool {
    true
}

fn default_reset_code() -> String {
    "23".to_string()
}

fn default_display_offset() -> i32 {
    // UTC-5, the zone the tool has historically been deployed in
    -300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            technicians: default_roster(),
            enforce_roster: default_enforce_roster(),
            require_description: false,
            reset_code: default_reset_code(),
            display_utc_offset_minutes: default_display_offset(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("otlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".otlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("otlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("otlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Test runs must not touch the real config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    /// Validation knobs derived from this configuration.
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            roster: self.technicians.clone(),
            enforce_roster: self.enforce_roster,
            require_description: self.require_description,
        }
    }

    /// Render the configuration as YAML (for `config --print`).
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}
