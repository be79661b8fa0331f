use anyhow::{Context, Result};
use clap::Parser;
use pursuit_shared::{PointerUpdate, Position, PursuitSettings, StrategyKind};
use serde::Serialize;
use std::path::PathBuf;

mod sim;
use sim::{Simulation, TickOutcome};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless predator pursuit simulation", long_about = None)]
struct Args {
    /// Targeting strategy: seek-pointer, seek-centroid or seek-nearest
    #[arg(short, long)]
    strategy: Option<String>,

    /// Path to a JSON settings file (CLI flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Desired speed override
    #[arg(long)]
    speed: Option<f32>,

    /// Arrival tolerance override
    #[arg(long)]
    tolerance: Option<f32>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 300)]
    ticks: u64,

    /// Number of prey agents in the field
    #[arg(short, long, default_value_t = 20)]
    prey: usize,

    /// World width
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// World height
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Seed for prey placement and drift
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_strategy(name: &str) -> Result<StrategyKind> {
    match name {
        "seek-pointer" => Ok(StrategyKind::SeekPointer),
        "seek-centroid" => Ok(StrategyKind::SeekCentroid),
        "seek-nearest" => Ok(StrategyKind::SeekNearest),
        other => anyhow::bail!(
            "Unknown strategy '{}'. Expected seek-pointer, seek-centroid or seek-nearest",
            other
        ),
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    ticks: u64,
    moved: u64,
    arrived: u64,
    held: u64,
    final_position: Position,
}

fn load_settings(args: &Args) -> Result<PursuitSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse settings file {}", path.display()))?
        }
        None => PursuitSettings::default(),
    };

    if let Some(name) = &args.strategy {
        settings.strategy = parse_strategy(name)?;
    }
    if let Some(speed) = args.speed {
        settings.desired_speed = speed;
    }
    if let Some(tolerance) = args.tolerance {
        settings.arrival_tolerance = tolerance;
    }

    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let settings = load_settings(&args)?;

    log::info!("Pursuit simulation starting...");
    log::info!("Strategy: {:?}", settings.strategy);
    log::info!(
        "Speed: {}, tolerance: {}, prey: {}, world: {}x{}",
        settings.desired_speed,
        settings.arrival_tolerance,
        args.prey,
        args.width,
        args.height
    );

    let mut simulation = Simulation::new(&settings, args.width, args.height, args.prey, args.seed);

    // Scripted pointer sweeping a circle around the world center, standing
    // in for a real input device.
    let center_x = args.width / 2.0;
    let center_y = args.height / 2.0;
    let radius = args.width.min(args.height) * 0.35;

    let mut moved = 0;
    let mut arrived = 0;
    let mut held = 0;

    for tick in 0..args.ticks {
        let angle = tick as f32 * 0.02;
        let pointer = Position::new(
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        );
        simulation.apply_pointer_update(&PointerUpdate {
            position: Some(pointer),
        });

        match simulation.tick() {
            TickOutcome::Moved => moved += 1,
            TickOutcome::Arrived => arrived += 1,
            TickOutcome::NoTarget => held += 1,
        }
    }

    let summary = RunSummary {
        ticks: simulation.tick_count(),
        moved,
        arrived,
        held,
        final_position: Position::new(simulation.predator.position.x, simulation.predator.position.y),
    };

    log::info!(
        "Run complete: {} ticks ({} moved, {} arrived, {} held)",
        summary.ticks,
        summary.moved,
        summary.arrived,
        summary.held
    );
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
