//! Headless island viewer.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p isle-viewer` to generate one island and preview it.
//! Run with `cargo run -p isle-viewer -- --regenerate 3 --background` to cycle
//! through fresh islands and rasters on the background worker.

mod preview;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use isle_config::{CliArgs, Config, resolve_config_dir};
use isle_terrain::{
    AsyncIslandGenerator, BiomeBand, DisplaySelector, IslandGenerator, OutputRasterSet,
    Parameters, RasterKind, TerrainError,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{error, info, warn};

/// Longest a single background run may take before the viewer gives up.
const WORKER_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
enum ViewerError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("Failed to start generation worker: {0}")]
    Worker(#[from] std::io::Error),

    #[error("Generation worker is still busy")]
    Busy,

    #[error("No island after {0:?}")]
    Timeout(Duration),
}

/// Build a parameter snapshot from the config with the given seed.
fn parameters(config: &Config, seed: u32) -> Parameters {
    Parameters {
        world_width: config.world.width,
        world_height: config.world.height,
        land_threshold: config.generation.land_threshold,
        land_radius: config.generation.land_radius,
        noise_offset: config.generation.noise_offset,
        noise_scale: config.generation.noise_scale,
        seed,
    }
}

/// Which raster to show first. Unknown names fall back to the island map.
fn initial_display(name: &str) -> RasterKind {
    RasterKind::from_name(name).unwrap_or_else(|| {
        warn!("Unknown display '{name}', showing island");
        RasterKind::Classified
    })
}

fn run_background(
    worker: &mut AsyncIslandGenerator,
    generator: &mut IslandGenerator,
    params: Parameters,
) -> Result<Arc<OutputRasterSet>, ViewerError> {
    let ticket = worker.submit(params).map_err(|_| ViewerError::Busy)?;
    let finished = worker
        .wait(WORKER_TIMEOUT)
        .ok_or(ViewerError::Timeout(WORKER_TIMEOUT))?;
    debug_assert_eq!(finished.ticket, ticket);

    info!(
        "Worker run {} finished in {:.2} ms",
        ticket.0,
        finished.generation_time_us as f64 / 1000.0
    );
    generator.set_params(params);
    Ok(generator.install(finished.result?))
}

fn report(outputs: &OutputRasterSet) {
    let p = &outputs.params;
    info!(
        "Island {}x{} seed={} threshold={} radius={} offset={} scale={}",
        p.world_width,
        p.world_height,
        p.seed,
        p.land_threshold,
        p.land_radius,
        p.noise_offset,
        p.noise_scale
    );
    for band in BiomeBand::ALL {
        info!(
            "  {:<12} {:>6.2}%",
            band.name(),
            outputs.coverage(band) * 100.0
        );
    }
}

fn run(config: &Config, args: &CliArgs) -> Result<(), ViewerError> {
    let first_seed = config.generation.seed.unwrap_or_else(rand::random);
    let mut seeds = Xoshiro256StarStar::seed_from_u64(u64::from(first_seed));

    let mut generator = IslandGenerator::new(parameters(config, first_seed));
    let mut worker = if args.background {
        Some(AsyncIslandGenerator::new()?)
    } else {
        None
    };
    let mut selector = DisplaySelector::showing(initial_display(&config.viewer.display));

    for press in 0..=args.regenerate {
        let seed = if press == 0 { first_seed } else { seeds.r#gen() };
        let params = parameters(config, seed);

        let start = Instant::now();
        let outputs = match worker.as_mut() {
            Some(worker) => run_background(worker, &mut generator, params)?,
            None => generator.run_with(params)?,
        };
        info!(
            "Generated island in {:.2} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        report(&outputs);

        let kind = selector.current();
        println!("[{}] seed {}", kind.name(), seed);
        print!(
            "{}",
            preview::render_ansi(outputs.get(kind), config.viewer.preview_columns)
        );

        if press < args.regenerate {
            let next = selector.next();
            info!("Display: {} -> {}", kind.name(), next.name());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = resolve_config_dir(args.config.as_deref());

    // Load or create config, then apply CLI overrides
    let mut config = match &config_dir {
        Ok(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        Err(e) => {
            eprintln!("{e}, using defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.ok().map(|dir| dir.join("logs"));
    isle_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    match run(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
