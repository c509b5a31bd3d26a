use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_success_location")]
    pub default_success_location: String,
    #[serde(default = "default_accident_location")]
    pub default_accident_location: String,
}

fn default_success_location() -> String {
    "Outside".to_string()
}

fn default_accident_location() -> String {
    "Inside".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_success_location: default_success_location(),
            default_accident_location: default_accident_location(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pawlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pawlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pawlogger.conf")
    }

    /// Return the full path of the SQLite local store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("pawlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that fails to parse is treated the same as an absent one.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|_| {
                crate::ui::messages::warning(format!(
                    "Could not parse {:?}, using default configuration",
                    path
                ));
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Validate that the configured paths and labels are usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.store.trim().is_empty() {
            problems.push("'store' is empty".to_string());
        }
        if self.default_success_location.trim().is_empty() {
            problems.push("'default_success_location' is empty".to_string());
        }
        if self.default_accident_location.trim().is_empty() {
            problems.push("'default_accident_location' is empty".to_string());
        }

        problems
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(store_path)
    }
}
