// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON models of panels and watchdogs.
//!
//! A [`PanelSnapshot`] captures everything the symbol watchdog reads from a
//! panel, so a live panel can be judged offline. A [`WatchdogSpec`] names
//! one watchdog and its panels.

use crate::geometry::{Grid, Style};
use crate::memory::{Field, InMemoryPanels, MemoryError, PanelId, PanelMemory};
use crate::path::{PanelLayout, PathTracer, SolutionPoint};
use crate::watchdog::{
    BridgeWatchdog, JungleWatchdog, PowerWatchdog, SymbolWatchdog, Trigger, Watchdog,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(String),

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// One panel as the symbol watchdog sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub pillar_width: i32,
    /// Style flags as generated.
    #[serde(default)]
    pub style: i32,
    pub exit_pos: i32,
    /// Present exactly when `style` carries [`Style::SYMMETRICAL`].
    #[serde(default)]
    pub exit_pos_sym: Option<i32>,
    /// Packed cell values, `rows[y][x]`.
    pub rows: Vec<Vec<i32>>,
    /// Traced edges as node index pairs.
    #[serde(default)]
    pub traced: Vec<(i32, i32)>,
}

impl PanelSnapshot {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let snapshot: PanelSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "panel is {}x{}",
                self.width, self.height
            )));
        }
        if self.rows.len() != self.height as usize {
            return Err(ConfigError::Invalid(format!(
                "{} rows for height {}",
                self.rows.len(),
                self.height
            )));
        }
        if let Some(y) = self.rows.iter().position(|r| r.len() != self.width as usize) {
            return Err(ConfigError::Invalid(format!(
                "row {y} has {} cells, width is {}",
                self.rows[y].len(),
                self.width
            )));
        }
        if self.pillar_width < 0 || self.pillar_width > self.width {
            return Err(ConfigError::Invalid(format!(
                "pillar width {} outside 0..={}",
                self.pillar_width, self.width
            )));
        }
        match (self.is_symmetric(), self.exit_pos_sym) {
            (true, None) => {
                return Err(ConfigError::Invalid(
                    "symmetric style without exit_pos_sym".to_string(),
                ))
            }
            (false, Some(sym)) => {
                return Err(ConfigError::Invalid(format!(
                    "exit_pos_sym {sym} on a panel without symmetric style"
                )))
            }
            _ => {}
        }
        Ok(())
    }

    pub fn is_symmetric(&self) -> bool {
        self.style & Style::SYMMETRICAL != 0
    }

    pub fn layout(&self) -> PanelLayout {
        let mut layout = PanelLayout::new(self.width, self.height, self.exit_pos);
        if self.pillar_width > 0 {
            layout = layout.with_pillar(self.pillar_width);
        }
        if let (true, Some(sym)) = (self.is_symmetric(), self.exit_pos_sym) {
            layout = layout.with_symmetry(sym);
        }
        layout
    }

    pub fn traced_edges(&self) -> Vec<SolutionPoint> {
        self.traced.iter().copied().map(SolutionPoint::from).collect()
    }

    /// A tracer over the snapshot's template, with nothing traced yet.
    pub fn tracer(&self) -> PathTracer {
        PathTracer::new(self.layout(), Grid::from_rows(&self.rows))
    }

    /// Load the trace and style fields of `panel` into a store.
    pub fn install(&self, memory: &InMemoryPanels, panel: PanelId) -> Result<(), MemoryError> {
        let traced = self.traced_edges();
        memory.set::<i32>(panel, Field::TracedEdges, &[traced.len() as i32])?;
        memory.set_array(panel, Field::TracedEdgeData, &traced)?;
        memory.set::<i32>(panel, Field::StyleFlags, &[self.style])
    }

    pub fn symbol_watchdog(
        &self,
        memory: Arc<dyn PanelMemory>,
        panel: PanelId,
        seed: u64,
    ) -> SymbolWatchdog<ChaCha20Rng> {
        SymbolWatchdog::new(
            memory,
            panel,
            self.tracer(),
            self.style,
            ChaCha20Rng::seed_from_u64(seed),
        )
    }
}

/// One watchdog to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WatchdogSpec {
    Symbols {
        panel: PanelId,
        snapshot: PanelSnapshot,
        #[serde(default)]
        seed: u64,
    },
    Power {
        trigger: Trigger,
        target: PanelId,
        #[serde(default)]
        hold_off: bool,
        #[serde(default)]
        sleep_ms: Option<u64>,
    },
    Bridge {
        first: PanelId,
        second: PanelId,
    },
    Jungle {
        panel: PanelId,
        first: Vec<i32>,
        second: Vec<i32>,
    },
}

impl WatchdogSpec {
    pub fn from_json(json: &str) -> Result<Vec<WatchdogSpec>, ConfigError> {
        let specs: Vec<WatchdogSpec> = serde_json::from_str(json)?;
        for spec in &specs {
            if let WatchdogSpec::Symbols { snapshot, .. } = spec {
                snapshot.validate()?;
            }
        }
        Ok(specs)
    }

    /// Construct the watchdog. Jungle panels read their memory here.
    pub fn build(&self, memory: Arc<dyn PanelMemory>) -> Result<Box<dyn Watchdog>, ConfigError> {
        let watchdog: Box<dyn Watchdog> = match self {
            WatchdogSpec::Symbols {
                panel,
                snapshot,
                seed,
            } => Box::new(snapshot.symbol_watchdog(memory, *panel, *seed)),
            WatchdogSpec::Power {
                trigger,
                target,
                hold_off,
                sleep_ms,
            } => {
                let mut watchdog =
                    PowerWatchdog::new(memory, *trigger, *target).with_hold_off(*hold_off);
                if let Some(ms) = sleep_ms {
                    watchdog = watchdog.with_sleep_time(Duration::from_millis(*ms));
                }
                Box::new(watchdog)
            }
            WatchdogSpec::Bridge { first, second } => {
                Box::new(BridgeWatchdog::new(memory, *first, *second))
            }
            WatchdogSpec::Jungle {
                panel,
                first,
                second,
            } => Box::new(JungleWatchdog::new(
                memory,
                *panel,
                first.clone(),
                second.clone(),
            )?),
        };
        Ok(watchdog)
    }
}
