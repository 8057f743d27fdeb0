mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use sprinkler_plus::config::{self, Config};
use sprinkler_plus::error::Result;
use sprinkler_plus::logic::{HostReportedCoverage, SprinklerEngine};
use sprinkler_plus::snapshot;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config_override = cli.config.as_ref();

    match cli.command {
        Commands::Run {
            world,
            output,
            dry_run,
        } => run(config_override, &world, output, dry_run),
        Commands::Check { world } => check(config_override, world.as_deref()),
        Commands::Init => {
            Config::setup_interactive(config_override)?;
            Ok(())
        }
        Commands::Reset => {
            let path = Config::default().save(config_override)?;
            println!("Default configuration written to {}", path.display());
            Ok(())
        }
    }
}

fn run(
    config_override: Option<&PathBuf>,
    world_path: &Path,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    // The day's settings are fixed before any location is touched.
    let config = Config::load(config_override)?;
    let mut world = snapshot::load(world_path)?;

    let engine = SprinklerEngine::new();
    let report = engine.run_daily_pass(&mut world.locations, config, &HostReportedCoverage);

    println!("{}", report.summary());

    if dry_run || report.skipped {
        return Ok(());
    }

    let destination = output.unwrap_or_else(|| world_path.to_path_buf());
    snapshot::save(&world, &destination)?;
    println!("World written to {}", destination.display());
    Ok(())
}

fn check(config_override: Option<&PathBuf>, world_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!("Config: OK");
    for ((label, _), value) in config::OPTIONS.iter().zip([
        config.enable_mod,
        config.water_indoors,
        config.water_pet_bowl,
    ]) {
        println!("  {:<15} {}", label, if value { "on" } else { "off" });
    }

    if let Some(path) = world_path {
        let world = snapshot::load(path)?;
        let mut interiors = 0;
        let mut objects: BTreeMap<&str, usize> = BTreeMap::new();
        for location in &world.locations {
            for place in std::iter::once(location).chain(location.indoor_locations()) {
                for object in place.objects.values() {
                    *objects.entry(object.kind()).or_insert(0) += 1;
                }
            }
            interiors += location.indoor_locations().count();
        }
        println!(
            "World: OK ({} locations, {} interiors)",
            world.locations.len(),
            interiors
        );
        for (kind, count) in objects {
            println!("  {:<15} {}", kind, count);
        }
    }

    println!("Rules:");
    let engine = SprinklerEngine::new();
    for ((id, _), (name, scope)) in engine.list_rules().into_iter().zip(engine.plan(&config)) {
        let status = scope.map_or("off", |s| s.as_str());
        println!("  {:<15} {:<22} {}", id, name, status);
    }

    Ok(())
}
