//! battle_sim - headless runner for seeded pack openings and battles

mod narrate;
mod simulation;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::config::{load_catalog, load_field_events, load_pack_table, BattleConstants};
use battle_core::{
    default_catalog, default_pack_table, init_battle, open_pack, resolve_combat, BattleOptions, CardCatalog,
    CombatOptions, Deck, Grade, PackTable, PackType, SeededRandom,
};
use clap::{Parser, Subcommand};
use log::info;

use simulation::{deck_owned, starter_deck, DropRateSimulation, WinRateSimulation};

#[derive(Parser)]
#[command(name = "battle_sim")]
#[command(about = "Open card packs and fight lane battles from the command line", long_about = None)]
struct Cli {
    /// Card catalog TOML (built-in catalog when omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pack table TOML (built-in table when omitted)
    #[arg(long, global = true)]
    packs: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open packs and list the pulled cards
    Pack {
        #[arg(long, default_value = "normal")]
        pack: String,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Fight one battle and narrate it
    Battle {
        /// Deck as JSON (a starter deck from the catalog when omitted)
        #[arg(long)]
        deck: Option<PathBuf>,
        /// Field events TOML (built-in events when omitted)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Balance constants TOML (defaults when omitted)
        #[arg(long)]
        constants: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        wins: u32,
        #[arg(long)]
        seed: Option<u32>,
        #[arg(long)]
        no_events: bool,
        /// Turn cap before a draw (the constants' cap when omitted)
        #[arg(long)]
        max_turns: Option<u32>,
        /// Print the action log as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Measure grade shares over many packs
    Rates {
        #[arg(long, default_value = "normal")]
        pack: String,
        #[arg(long, default_value_t = 1000)]
        samples: u32,
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Measure the starter deck's win rate
    Winrate {
        #[arg(long, default_value_t = 100)]
        battles: u32,
        #[arg(long, default_value_t = 0)]
        wins: u32,
        #[arg(long)]
        seed: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log.as_str())).init();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path).with_context(|| format!("loading catalog {}", path.display()))?,
        None => default_catalog(),
    };
    let packs = match &cli.packs {
        Some(path) => load_pack_table(path).with_context(|| format!("loading pack table {}", path.display()))?,
        None => default_pack_table(),
    };
    info!("catalog has {} cards, {} pack types", catalog.len(), packs.len());

    match cli.command {
        Commands::Pack { pack, count, seed } => run_pack(&catalog, &packs, &pack, count, seed),
        Commands::Battle { deck, events, constants, wins, seed, no_events, max_turns, json } => {
            let mut options = BattleOptions::default();
            if let Some(path) = events {
                options.field_events = load_field_events(&path)
                    .with_context(|| format!("loading field events {}", path.display()))?;
            }
            if let Some(path) = constants {
                let content =
                    fs::read_to_string(&path).with_context(|| format!("reading constants {}", path.display()))?;
                options = options.with_constants(BattleConstants::from_toml(&content)?);
            }
            if no_events {
                options = options.without_field_events();
            }
            run_battle(&catalog, deck, wins, seed, &options, max_turns, json)
        }
        Commands::Rates { pack, samples, seed } => run_rates(&catalog, &packs, &pack, samples, seed),
        Commands::Winrate { battles, wins, seed } => run_winrate(&catalog, battles, wins, seed),
    }
}

fn seeded(seed: Option<u32>) -> SeededRandom {
    let seed = seed.unwrap_or_else(rand::random);
    println!("seed: {}", seed);
    SeededRandom::new(seed)
}

fn run_pack(catalog: &CardCatalog, packs: &PackTable, pack: &str, count: u32, seed: Option<u32>) -> Result<()> {
    let pack_type: PackType = pack.parse()?;
    let mut rng = seeded(seed);

    for n in 1..=count {
        let cards = open_pack(pack_type, catalog, packs, &mut rng)?;
        println!("{} pack #{}", pack_type, n);
        for card in &cards {
            println!("  {:<7} {:<20} {}", card.grade().name(), card.name(), card.id());
        }
    }
    Ok(())
}

fn run_battle(
    catalog: &CardCatalog,
    deck_path: Option<PathBuf>,
    wins: u32,
    seed: Option<u32>,
    options: &BattleOptions,
    max_turns: Option<u32>,
    json: bool,
) -> Result<()> {
    let (deck, owned) = match deck_path {
        Some(path) => {
            let content = fs::read_to_string(&path).with_context(|| format!("reading deck {}", path.display()))?;
            let deck: Deck = serde_json::from_str(&content).context("parsing deck JSON")?;
            let owned = deck_owned(&deck);
            (deck, owned)
        }
        None => starter_deck(catalog),
    };
    deck.validate(&owned, catalog)?;

    let mut rng = seeded(seed);
    let state = init_battle(&deck, &owned, wins, catalog, options, &mut rng);
    let mut combat = CombatOptions::from_constants(&options.constants);
    if let Some(max_turns) = max_turns {
        combat = combat.with_max_turns(max_turns);
    }
    let outcome = resolve_combat(&state, &combat);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.actions)?);
    } else {
        for action in &outcome.actions {
            println!("{}", narrate::describe(action));
        }
        println!("{}", narrate::summary(&outcome.state));
    }
    Ok(())
}

fn run_rates(catalog: &CardCatalog, packs: &PackTable, pack: &str, samples: u32, seed: Option<u32>) -> Result<()> {
    let pack_type: PackType = pack.parse()?;
    let mut rng = seeded(seed);
    let result = DropRateSimulation::run(pack_type, catalog, packs, samples, &mut rng)?;

    println!("{} packs opened: {}", pack_type, result.packs_opened);
    println!("average pack size: {:.2}", result.avg_pack_size());
    for grade in Grade::rarest_first() {
        println!("  {:<7} {:>6.2}%", grade.name(), result.share(*grade));
    }
    if result.guarantee_misses > 0 {
        println!("packs missing their guaranteed grade: {}", result.guarantee_misses);
    }
    Ok(())
}

fn run_winrate(catalog: &CardCatalog, battles: u32, wins: u32, seed: Option<u32>) -> Result<()> {
    let (deck, owned) = starter_deck(catalog);
    deck.validate(&owned, catalog)?;
    let mut rng = seeded(seed);
    let result = WinRateSimulation::run(
        &deck,
        &owned,
        catalog,
        wins,
        &BattleOptions::default(),
        &CombatOptions::default(),
        battles,
        &mut rng,
    );

    println!("battles: {}", result.battles);
    println!("player wins: {} ({:.1}%)", result.player_wins, result.win_rate());
    println!("enemy wins: {}", result.enemy_wins);
    println!("draws: {}", result.draws);
    println!("average turns: {:.2}", result.avg_turns());
    Ok(())
}
