use anyhow::{Context, Result};
use clap::Parser;
use flock_core::{init_logging, AppConfig, Species};
use flock_lib::app::{parse_leg, App};
use std::io;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "flock.toml")]
    config: String,

    /// Number of ducks to start with
    #[arg(short, long)]
    members: Option<i64>,

    /// Species for every duck (mallard, teal, goose); mixed when omitted
    #[arg(short, long, value_parser = parse_species)]
    species: Option<Species>,

    /// Seed for the mixed-species draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Migration legs as <direction>:<distance>; reads commands from stdin when empty
    legs: Vec<String>,
}

fn parse_species(s: &str) -> Result<Species, String> {
    Species::ALL
        .into_iter()
        .find(|sp| sp.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown species '{s}'"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(members) = args.members {
        config.flock.members = members;
    }
    if args.species.is_some() {
        config.flock.species = args.species;
    }
    if args.seed.is_some() {
        config.flock.seed = args.seed;
    }

    init_logging(&config.logging.level);

    let mut app = App::from_config(&config)?;

    if args.legs.is_empty() {
        let stdin = io::stdin();
        return app.run_menu(stdin.lock(), io::stdout());
    }

    for leg in &args.legs {
        let (direction, distance) = parse_leg(leg)?;
        app.migrate(direction, distance)
            .with_context(|| format!("migrating {leg}"))?;
    }

    let snapshot = app.flock.snapshot();
    if args.json {
        println!("{}", snapshot.to_json()?);
    } else {
        println!("{snapshot}");
    }
    Ok(())
}
