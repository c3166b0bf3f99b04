//! Monument Quarries - Entry Point
//!
//! Headless batch driver: loads a world snapshot, discovers warehouse
//! monuments, places quarries around them, reports what it did, and tears
//! everything down again before exiting.

use clap::Parser;
use monument_quarries::core::config::QuarryConfig;
use monument_quarries::core::error::{QuarryError, Result};
use monument_quarries::ledger::SpawnLedger;
use monument_quarries::world::SnapshotWorld;
use monument_quarries::{monuments, placement};

use std::path::PathBuf;

/// Spawn mining quarries next to warehouse monuments
#[derive(Parser, Debug)]
#[command(name = "monument-quarries")]
#[command(about = "Place quarries beside warehouse monuments from a world snapshot")]
struct Args {
    /// Path to the TOML config file (created with defaults when missing)
    #[arg(long, default_value = "quarries.toml")]
    config: PathBuf,

    /// Path to the world snapshot JSON
    #[arg(long)]
    snapshot: PathBuf,

    /// Override the configured quarry cap
    #[arg(long)]
    max_quarries: Option<u32>,

    /// Enable per-candidate diagnostic logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = QuarryConfig::load(&args.config)?;
    if let Some(cap) = args.max_quarries {
        config.max_quarries = cap;
    }
    if args.debug {
        config.debug = true;
    }
    config.validate().map_err(QuarryError::InvalidConfig)?;

    let filter = if config.debug {
        "monument_quarries=debug"
    } else {
        "monument_quarries=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("loading snapshot {}", args.snapshot.display());
    let mut world = SnapshotWorld::from_file(&args.snapshot)?;

    let mut registry = monuments::discover(&world, &config);
    tracing::info!("discovered {} monuments", registry.len());

    let mut ledger = SpawnLedger::new();
    let placed = placement::place(&mut registry, &mut world, &mut ledger, &config);

    println!(
        "Placed {} quarries across {} monuments (cap {}).",
        placed,
        registry.len(),
        config.max_quarries
    );
    for monument in registry.iter() {
        println!("  {} at {}", monument.name, monument.position);
    }

    // Terminal state: once teardown starts, placement is never re-entered
    ledger.teardown_all(&mut world, config.cleanup_radius);
    tracing::info!("teardown complete, {} entities remain", world.entity_count());

    Ok(())
}
