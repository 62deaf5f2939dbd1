// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Offline front end: judge a panel snapshot, or shuffle panels in a
//! scratch store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panel_watchdog::memory::{Field, InMemoryPanels, PanelId, PanelMemoryExt};
use panel_watchdog::randomizer::{Randomizer, SwapFlags, SwapKind};
use panel_watchdog::watchdog::{PanelState, Watchdog};
use panel_watchdog::PanelSnapshot;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Snapshot panel id used by `check`.
const CHECK_PANEL: PanelId = PanelId(0);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a panel snapshot and judge its symbols.
    Check {
        snapshot: PathBuf,
        /// Seed for region scans.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Shuffle panels and print where each one's puzzle went.
    Shuffle {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Field groups to swap, comma separated.
        #[arg(long, value_delimiter = ',', default_value = "lines")]
        flags: Vec<SwapKind>,
        /// Panel ids, decimal or `0x` hex.
        #[arg(required = true, value_parser = parse_panel_id)]
        panels: Vec<PanelId>,
    },
}

fn parse_panel_id(s: &str) -> Result<PanelId, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed
        .map(PanelId)
        .map_err(|e| format!("bad panel id {s:?}: {e}"))
}

fn check(snapshot: PathBuf, seed: u64) -> Result<()> {
    let snapshot = PanelSnapshot::load(&snapshot)
        .with_context(|| format!("loading {}", snapshot.display()))?;
    let memory = Arc::new(InMemoryPanels::new());
    snapshot.install(&memory, CHECK_PANEL)?;
    let mut watchdog = snapshot.symbol_watchdog(memory, CHECK_PANEL, seed);
    watchdog.action()?;
    match watchdog.state() {
        PanelState::Idle => println!("no path traced"),
        PanelState::Evaluating => println!("path does not reach the exit"),
        PanelState::Satisfied => println!("all symbols satisfied"),
        PanelState::Failed(violation) => println!("unsatisfied: {violation}"),
    }
    Ok(())
}

fn shuffle(seed: u64, flags: SwapFlags, mut panels: Vec<PanelId>) -> Result<()> {
    let memory = Arc::new(InMemoryPanels::new());
    // Every panel starts out holding its own id, plus blank data for the
    // rest of the selected fields.
    for &panel in &panels {
        for (field, size) in flags.fields() {
            memory.set::<u8>(panel, field, &vec![0; size])?;
        }
        memory.set::<i32>(panel, Field::Target, &[panel.0 as i32])?;
    }
    let mut randomizer = Randomizer::new(memory.clone(), ChaCha20Rng::seed_from_u64(seed));
    randomizer.randomize(&mut panels, flags | SwapFlags::TARGETS)?;
    info!(%flags, seed, "shuffled");
    for panel in panels {
        let puzzle = memory.read::<i32>(panel, Field::Target)?;
        println!("{} -> {}", PanelId(puzzle as u32), panel);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { snapshot, seed } => check(snapshot, seed),
        Command::Shuffle {
            seed,
            flags,
            panels,
        } => shuffle(seed, flags.into_iter().collect(), panels),
    }
}
