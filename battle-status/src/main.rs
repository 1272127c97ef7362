//! status-sim - run a combatant through turns under a status ailment

use std::path::PathBuf;

use anyhow::Result;
use battle_status::combat::{immunities, Combatant, RngSource, StatusEngine, StatusKind};
use battle_status::sim::TurnLoop;
use battle_status::Config;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Status ailment simulator
#[derive(Parser, Debug)]
#[command(
    name = "status-sim",
    version,
    about = "Simulate a combatant's turns under a status ailment"
)]
struct Args {
    /// Combatant name used in battle messages
    #[arg(short, long, default_value = "Combatant")]
    name: String,

    /// Maximum (and starting) health
    #[arg(long, default_value_t = 100)]
    max_health: u32,

    /// Elemental type tag (can be specified multiple times)
    #[arg(short = 't', long = "type")]
    types: Vec<String>,

    /// Ailment to apply: poison, paralysis, sleep, burn or freeze
    #[arg(short, long)]
    status: StatusKind,

    /// Maximum number of turns to run
    #[arg(long, default_value_t = 10)]
    turns: u32,

    /// Seed for reproducible rolls (thread RNG if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the status rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the battle log as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battle_status=info,status_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Using seed");
    let engine = StatusEngine::with_rules(config.rules, RngSource::seeded(seed));

    let mut combatant = Combatant::new(args.name, args.max_health).with_types(args.types);
    let mut turn_loop = TurnLoop::new(engine);

    if !turn_loop.engine().apply_status(&mut combatant, args.status) {
        warn!(
            combatant = %combatant.display_name(),
            status = %args.status,
            "Status could not be applied"
        );
        println!(
            "It doesn't affect {}... ({} blocked)",
            combatant.display_name(),
            args.status
        );
        let immune: Vec<String> = immunities(&combatant.types)
            .iter()
            .map(|kind| kind.to_string())
            .collect();
        if !immune.is_empty() {
            println!("Immune to: {}", immune.join(", "));
        }
        return Ok(());
    }
    println!(
        "{} is afflicted with {} [{}]",
        combatant.display_name(),
        args.status,
        args.status.code()
    );

    let log = turn_loop.run(&mut combatant, args.turns);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&log)?);
        return Ok(());
    }

    for record in &log.records {
        let action = if record.acted { "acts" } else { "skips" };
        println!(
            "Turn {:>3}: {} ({} HP, status {})",
            record.turn, action, record.health, record.status
        );
        for message in &record.messages {
            println!("          {}", message);
        }
    }
    println!(
        "Acted on {} of {} turns, lost {} HP",
        log.turns_acted(),
        log.records.len(),
        log.total_damage()
    );

    Ok(())
}
