//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the config inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "isle-gen";

/// The per-user config directory, e.g. `~/.config/isle-gen` on Linux.
///
/// `explicit` (from `--config`) wins over the platform default.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(ConfigError::NoConfigDir),
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Canvas settings, fixed for the lifetime of the process.
    pub world: WorldConfig,
    /// Initial generation parameters.
    pub generation: GenerationConfig,
    /// Viewer presentation settings.
    pub viewer: ViewerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Initial values of the tunable generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Intensity cutoff below which terrain is water (1.0 - 255.0).
    pub land_threshold: f32,
    /// Falloff radius factor; 10 covers the full canvas (1.0 - 10.0).
    pub land_radius: f32,
    /// Sampling origin in the noise domain (0.0 - 1000.0).
    pub noise_offset: f32,
    /// Noise periods across the canvas (1.0 - 20.0).
    pub noise_scale: f32,
    /// Fixed noise seed. `None` picks a fresh seed for every run.
    pub seed: Option<u32>,
}

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Raster shown first: "noise", "combined", "land" or "island".
    pub display: String,
    /// Width of the terminal preview in character cells.
    pub preview_columns: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            land_threshold: 100.0,
            land_radius: 10.0,
            noise_offset: 0.0,
            noise_scale: 10.0,
            seed: None,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            display: "island".to_string(),
            preview_columns: 64,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_dir_wins() {
        let dir = Path::new("/tmp/islands");
        assert_eq!(resolve_config_dir(Some(dir)).unwrap(), dir);
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1024"));
        assert!(ron_str.contains("land_threshold: 100.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.generation.seed = Some(77);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(world: (width: 256))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world.width, 256);
        assert_eq!(config.world.height, 1024);
        assert_eq!(config.generation, GenerationConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.width = 512;
        config.generation.land_radius = 6.5;
        config.viewer.display = "land".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
