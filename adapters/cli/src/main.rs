#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Orb Dungeon by hand or with the solver.

mod config;
mod layout_transfer;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use orb_dungeon_core::{Command, Direction, Event};
use orb_dungeon_rendering::{describe_event, format_moves, render_dungeon};
use orb_dungeon_system_solver::Solver;
use orb_dungeon_world::{self as world, query, Dungeon};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    config::{FileConfig, Settings},
    layout_transfer::DungeonLayout,
};

const STARTING_BANNER: &str = "=== Starting conditions ===";
const SEPARATOR: &str = "===========================";

/// Token that requests an attack in manual mode.
const ATTACK_TOKEN: &str = "a";

/// Command-line arguments accepted by the Orb Dungeon binary.
#[derive(Debug, Parser)]
#[command(name = "orb-dungeon", about = "Play or solve a cycling-tile dungeon")]
pub(crate) struct Cli {
    /// Health the player starts every attempt with.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) initial_health: Option<i32>,
    /// Side length of the square grid (default 3).
    #[arg(long)]
    pub(crate) size: Option<u32>,
    /// Orb goal recorded with the dungeon (default 10).
    #[arg(long)]
    pub(crate) desired_orbs: Option<u32>,
    /// Let the solver search for a winning move sequence.
    #[arg(long)]
    pub(crate) auto: bool,
    /// Maximum number of solver attempts (default 10000000).
    #[arg(long)]
    pub(crate) max_tries: Option<u64>,
    /// Number of attempts between progress lines, zero to disable (default 10000).
    #[arg(long)]
    pub(crate) progress_interval: Option<u64>,
    /// Seed for grid generation and the solver; entropy when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// TOML file providing defaults for any of the other options.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Layout code printed by a previous run, replacing random generation.
    #[arg(long)]
    pub(crate) layout: Option<String>,
}

/// Entry point for the Orb Dungeon command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let file = match cli.config.as_deref() {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&cli, file)?;

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let dungeon = build_dungeon(&settings, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_starting_conditions(&mut out, &dungeon)?;

    if settings.auto {
        let mut solver = Solver::with_rng(dungeon, rng);
        solve(&mut out, &mut solver, &settings)
    } else {
        let stdin = io::stdin();
        let mut dungeon = dungeon;
        play(stdin.lock(), &mut out, &mut dungeon)
    }
}

fn build_dungeon(settings: &Settings, rng: &mut ChaCha8Rng) -> Result<Dungeon> {
    match settings.layout.as_deref() {
        Some(code) => {
            let layout = DungeonLayout::decode(code).context("failed to decode layout code")?;
            Dungeon::with_layout(layout.config(), &layout.rows())
                .context("layout code describes an invalid dungeon")
        }
        None => Dungeon::generate(settings.dungeon, rng).context("failed to generate dungeon"),
    }
}

fn print_starting_conditions(out: &mut impl Write, dungeon: &Dungeon) -> Result<()> {
    let code = DungeonLayout::capture(dungeon)
        .encode()
        .context("failed to encode layout code")?;
    writeln!(out, "{STARTING_BANNER}")?;
    write!(out, "{}", render_dungeon(dungeon))?;
    writeln!(out, "Layout: {code}")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

fn solve(out: &mut impl Write, solver: &mut Solver, settings: &Settings) -> Result<()> {
    let mut progress_result = Ok(());
    let solution = solver.run_with_progress(
        settings.max_tries,
        settings.progress_interval,
        |progress| {
            if progress_result.is_ok() {
                progress_result = writeln!(out, "Running try number {}...", progress.tries);
            }
        },
    );
    progress_result.context("failed to report solver progress")?;

    match solution {
        Some(moves) => writeln!(out, "Solution found: {}", format_moves(&moves))?,
        None => writeln!(out, "No solution found after {} tries", settings.max_tries)?,
    }
    Ok(())
}

fn play(input: impl BufRead, out: &mut impl Write, dungeon: &mut Dungeon) -> Result<()> {
    let mut events = Vec::new();
    if query::status(dungeon).is_terminal() {
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("failed to read from standard input")?;
        for token in line.split_whitespace() {
            match parse_command(token) {
                Some(command) => {
                    events.clear();
                    world::apply(dungeon, command, &mut events);
                    report_events(out, &events)?;
                }
                None => writeln!(out, "ERROR - Unknown operation")?,
            }
            write!(out, "{}", render_dungeon(dungeon))?;
            if query::status(dungeon).is_terminal() {
                return Ok(());
            }
        }
    }
    Ok(())
}

fn parse_command(token: &str) -> Option<Command> {
    if token == ATTACK_TOKEN {
        return Some(Command::Attack);
    }
    token
        .parse::<Direction>()
        .ok()
        .map(|direction| Command::Move { direction })
}

fn report_events(out: &mut impl Write, events: &[Event]) -> Result<()> {
    for description in events.iter().filter_map(describe_event) {
        writeln!(out, "{description}")?;
    }
    Ok(())
}
