use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("healthplus")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct HealthPlusConfig {
    pub data_directory: PathBuf,
    pub debug_logging: bool,
}

impl Default for HealthPlusConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
            debug_logging: false,
        }
    }
}

impl HealthPlusConfig {
    /// File holding the signed-in doctor's session marker.
    pub fn session_path(&self) -> PathBuf {
        self.data_directory.join("doctor.json")
    }

    /// Ensure the data directory exists.
    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_file_lives_in_data_dir() {
        let config = HealthPlusConfig {
            data_directory: PathBuf::from("/tmp/hp"),
            debug_logging: false,
        };
        assert_eq!(config.session_path(), PathBuf::from("/tmp/hp/doctor.json"));
    }

    #[test]
    fn default_is_quiet() {
        let config = HealthPlusConfig::default();
        assert!(!config.debug_logging);
        assert!(config.data_directory.ends_with("healthplus"));
    }
}
