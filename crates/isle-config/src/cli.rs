//! Command-line argument parsing for the island viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Island viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "isle-viewer", about = "Procedural island generator")]
pub struct CliArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Land threshold (1 - 255). Higher means less land.
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Land radius factor (1 - 10). Higher means a wider island area.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Noise sampling offset (0 - 1000).
    #[arg(long)]
    pub offset: Option<f32>,

    /// Noise scale (1 - 20). Higher means more island segments.
    #[arg(long)]
    pub scale: Option<f32>,

    /// Fixed noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Raster to preview first (noise, combined, land, island).
    #[arg(long)]
    pub display: Option<String>,

    /// Generate on the background worker instead of the main thread.
    #[arg(long)]
    pub background: bool,

    /// Additional regenerate presses after the first run.
    #[arg(long, default_value_t = 0)]
    pub regenerate: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(t) = args.threshold {
            self.generation.land_threshold = t;
        }
        if let Some(r) = args.radius {
            self.generation.land_radius = r;
        }
        if let Some(o) = args.offset {
            self.generation.noise_offset = o;
        }
        if let Some(s) = args.scale {
            self.generation.noise_scale = s;
        }
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(ref display) = args.display {
            self.viewer.display = display.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(512),
            threshold: Some(140.0),
            seed: Some(9),
            display: Some("noise".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.width, 512);
        assert_eq!(config.generation.land_threshold, 140.0);
        assert_eq!(config.generation.seed, Some(9));
        assert_eq!(config.viewer.display, "noise");
        // Non-overridden fields retain defaults
        assert_eq!(config.world.height, 1024);
        assert_eq!(config.generation.noise_scale, 10.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "isle-viewer",
            "--radius",
            "4.5",
            "--background",
            "--regenerate",
            "3",
        ])
        .unwrap();
        assert_eq!(args.radius, Some(4.5));
        assert!(args.background);
        assert_eq!(args.regenerate, 3);
        assert_eq!(args.scale, None);
    }
}
