//! fieldgen - obstacle-world field generator.
//!
//! - `fieldgen world` - sample one world and print its intensity map
//! - `fieldgen trajectory` - walk the agent through one world
//! - `fieldgen batch` - sample many worlds from one seed and print statistics

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use field_core::rng::{TRAJECTORY_STREAM, WORLD_STREAM};
use field_core::{derive_seed, GeneratorConfig, SplitMix64, TrajectoryGenerator, World};

mod render;

#[derive(Parser)]
#[command(name = "fieldgen")]
#[command(about = "Synthetic obstacle worlds and agent trajectories", version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(short, long, global = true, default_value_t = 0)]
    seed: u64,

    /// Override the world size
    #[arg(long, global = true)]
    size: Option<u32>,

    /// Leave the agent out of the field
    #[arg(long, global = true)]
    no_agent: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample one world and print it
    World {
        /// Also list the drawable shapes
        #[arg(long)]
        geometry: bool,
    },

    /// Sample one world and walk its agent
    Trajectory {
        /// Number of snapshots
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Print the intensity map of every snapshot
        #[arg(long)]
        frames: bool,
    },

    /// Sample many worlds and print per-world statistics
    Batch {
        /// Number of worlds
        #[arg(short = 'n', long, default_value_t = 10)]
        count: u64,

        /// Trajectory length per world
        #[arg(short, long, default_value_t = 5)]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::World { geometry } => show_world(&config, cli.seed, geometry),
        Commands::Trajectory { length, frames } => {
            show_trajectory(&config, cli.seed, length, frames)
        }
        Commands::Batch { count, length } => run_batch(&config, cli.seed, count, length),
    }
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(size) = cli.size {
        config.world.size = size;
    }
    if cli.no_agent {
        config.world.include_agent = false;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn sample_world(config: &GeneratorConfig, seed: u64, index: u64) -> Result<World> {
    let mut rng = SplitMix64::new(derive_seed(seed, index, WORLD_STREAM));
    World::generate(&config.world, config.field, &mut rng).context("Failed to sample world")
}

fn show_world(config: &GeneratorConfig, seed: u64, geometry: bool) -> Result<()> {
    let world = sample_world(config, seed, 0)?;
    tracing::info!(seed, size = world.size(), "Generated world");

    print!("{}", render::describe_world(&world));
    println!("grid: {}", render::describe_grid(world.grid()));
    println!();
    print!("{}", render::shade_map(world.grid()));

    if geometry {
        println!();
        println!("geometry:");
        print!("{}", render::describe_geometry(world.geometry()));
    }
    Ok(())
}

fn show_trajectory(
    config: &GeneratorConfig,
    seed: u64,
    length: usize,
    frames: bool,
) -> Result<()> {
    let root = sample_world(config, seed, 0)?;
    let generator = TrajectoryGenerator::new(config.trajectory)?;
    let mut rng = SplitMix64::new(derive_seed(seed, 0, TRAJECTORY_STREAM));
    let snapshots = generator.generate(&root, length, &mut rng);
    tracing::info!(seed, length = snapshots.len(), "Generated trajectory");

    print!("{}", render::describe_world(&root));
    println!();

    let start = root.sampled_agent_position();
    println!("step  x        y");
    println!("{:<5} {:<8.2} {:<8.2}", "start", start.x, start.y);
    for (i, snapshot) in snapshots.iter().enumerate() {
        let p = snapshot.sampled_agent_position();
        println!("{:<5} {:<8.2} {:<8.2}", i + 1, p.x, p.y);
    }

    if frames {
        for (i, snapshot) in snapshots.iter().enumerate() {
            println!();
            println!("frame {} ({})", i + 1, render::describe_grid(snapshot.grid()));
            print!("{}", render::shade_map(snapshot.grid()));
        }
    }
    Ok(())
}

fn run_batch(config: &GeneratorConfig, seed: u64, count: u64, length: usize) -> Result<()> {
    let generator = TrajectoryGenerator::new(config.trajectory)?;
    tracing::info!(seed, count, length, "Running batch");

    println!("world obstacles grid                              end");
    for index in 0..count {
        let world = sample_world(config, seed, index)?;
        let mut rng = SplitMix64::new(derive_seed(seed, index, TRAJECTORY_STREAM));
        let snapshots = generator.generate(&world, length, &mut rng);
        let end = snapshots
            .last()
            .unwrap_or(&world)
            .sampled_agent_position();

        println!(
            "{:<5} {:<9} {:<34} ({:.2}, {:.2})",
            index,
            world.obstacles().len(),
            render::describe_grid(world.grid()),
            end.x,
            end.y
        );
    }
    Ok(())
}
