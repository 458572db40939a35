use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bastion_app::error::AppError;
use bastion_app::game_loop::{self, LoopOptions};
use bastion_sim::{SimConfig, SimulationEngine};

/// Bastion - headless city defence simulation
#[derive(Parser, Debug)]
#[command(name = "bastion")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum frames to simulate
    #[arg(short, long, default_value = "36000")]
    frames: u64,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    height: f64,

    /// JSON file with seed and game rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pace frames at 60 Hz and use measured frame deltas
    #[arg(long)]
    realtime: bool,

    /// Leave the city undefended
    #[arg(long)]
    no_autopilot: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(seed = config.seed, config = ?args.config, "Configuration loaded");

    let mut engine = SimulationEngine::new(config);
    engine.start_new_game(args.width, args.height)?;

    let options = LoopOptions {
        max_frames: args.frames,
        realtime: args.realtime,
        autopilot: !args.no_autopilot,
    };
    let summary = game_loop::run(&mut engine, &options);
    info!(
        rounds_completed = summary.rounds_completed,
        enemies_destroyed = summary.enemies_destroyed,
        structures_lost = summary.structures_lost,
        interceptors_launched = summary.interceptors_launched,
        "Summary"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    }
    Ok(())
}
