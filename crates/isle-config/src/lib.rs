//! Configuration system for the island generator.
//!
//! Provides settings that persist to disk as RON files, with CLI overrides
//! via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    APP_DIR, CONFIG_FILE, Config, DebugConfig, GenerationConfig, ViewerConfig, WorldConfig,
    resolve_config_dir,
};
pub use error::ConfigError;
