// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Moves puzzles between panels by swapping their field data.
//!
//! A panel id names a physical location. Swapping two panels exchanges the
//! selected fields, so the puzzle that was shown at one location is shown at
//! the other.

pub mod swap;

pub use swap::{SwapFlags, SwapKind};

use crate::memory::{Field, MemoryError, PanelId, PanelMemory, PanelMemoryExt};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Attempts per slot before a constrained shuffle gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Opening speeds for doors and lifts that are slow in the unmodified game.
pub const OPEN_RATES: [(PanelId, f32); 12] = [
    (PanelId(0x09F95), 0.04),
    (PanelId(0x03839), 0.7),
    (PanelId(0x021BA), 1.5),
    (PanelId(0x17CC1), 0.8),
    (PanelId(0x0061A), 0.1),
    (PanelId(0x09EEC), 0.1),
    (PanelId(0x17E74), 0.03),
    (PanelId(0x1802C), 0.03),
    (PanelId(0x005A2), 0.04),
    (PanelId(0x17C6A), 0.25),
    (PanelId(0x17F02), 0.15),
    (PanelId(0x17C50), 0.3),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizeError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// No panel allowed in the slot could be drawn.
    #[error("no allowed panel found for slot {slot} after {attempts} attempts")]
    Unsatisfiable { slot: usize, attempts: usize },
}

/// Rules for [`Randomizer::randomize_constrained`].
#[derive(Debug, Clone)]
pub struct Constraints {
    pub flags: SwapFlags,
    /// Slots with a whitelist only accept puzzles listed for them.
    pub allowed: BTreeMap<usize, Vec<PanelId>>,
    /// Written to each location once its slot is settled.
    pub path_width_scale: Option<f32>,
    pub max_attempts: usize,
}

impl Constraints {
    pub fn new(flags: SwapFlags) -> Self {
        Self {
            flags,
            allowed: BTreeMap::new(),
            path_width_scale: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn allow(mut self, slot: usize, panels: impl IntoIterator<Item = PanelId>) -> Self {
        self.allowed.entry(slot).or_default().extend(panels);
        self
    }

    pub fn with_path_width_scale(mut self, scale: f32) -> Self {
        self.path_width_scale = Some(scale);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn accepts(&self, slot: usize, panel: PanelId) -> bool {
        self.allowed
            .get(&slot)
            .map_or(true, |allowed| allowed.contains(&panel))
    }
}

pub struct Randomizer<R> {
    memory: Arc<dyn PanelMemory>,
    rng: R,
}

impl<R: Rng> Randomizer<R> {
    pub fn new(memory: Arc<dyn PanelMemory>, rng: R) -> Self {
        Self { memory, rng }
    }

    /// Exchange the selected fields of two panels and redraw both.
    ///
    /// All reads happen before any write, so a failed read leaves both
    /// panels untouched.
    pub fn swap_panels(
        &self,
        first: PanelId,
        second: PanelId,
        flags: SwapFlags,
    ) -> Result<(), MemoryError> {
        let fields = flags.fields();
        let mut data = Vec::with_capacity(fields.len());
        for &(field, size) in &fields {
            let a = self.memory.read_bytes(first, field, size)?;
            let b = self.memory.read_bytes(second, field, size)?;
            data.push((field, a, b));
        }
        for (field, a, b) in data {
            self.memory.write_bytes(second, field, &a)?;
            self.memory.write_bytes(first, field, &b)?;
        }
        self.memory.request_redraw(first)?;
        self.memory.request_redraw(second)?;
        debug!(%first, %second, %flags, "panels swapped");
        Ok(())
    }

    pub fn randomize(&mut self, panels: &mut [PanelId], flags: SwapFlags) -> Result<(), MemoryError> {
        let end = panels.len();
        self.randomize_range(panels, flags, 0, end)
    }

    /// Shuffle the panels in `[start, end)`, working from the back.
    ///
    /// `end` is clamped to the list. The list follows every swap, so it ends
    /// up naming the locations in the order their original puzzles moved.
    pub fn randomize_range(
        &mut self,
        panels: &mut [PanelId],
        flags: SwapFlags,
        start: usize,
        end: usize,
    ) -> Result<(), MemoryError> {
        let end = end.min(panels.len());
        if start >= end {
            return Ok(());
        }
        for i in (start + 1..end).rev() {
            let target = self.rng.gen_range(start..=i);
            if target != i {
                self.swap_panels(panels[i], panels[target], flags)?;
                panels.swap(i, target);
            }
        }
        info!(count = end - start, "panels shuffled");
        Ok(())
    }

    /// Shuffle forwards so that every slot receives a different puzzle.
    ///
    /// `puzzles` lists which puzzle sits at each location and is updated as
    /// puzzles move. The locations themselves are the initial contents of
    /// the list.
    pub fn randomize_constrained(
        &mut self,
        puzzles: &mut [PanelId],
        constraints: &Constraints,
    ) -> Result<(), RandomizeError> {
        let locations = puzzles.to_vec();
        let len = puzzles.len();
        for i in 0..len.saturating_sub(1) {
            let target = self.draw_target(puzzles, constraints, i)?;
            self.swap_panels(locations[i], locations[target], constraints.flags)?;
            puzzles.swap(i, target);
            if let Some(scale) = constraints.path_width_scale {
                self.memory
                    .write::<f32>(locations[i], Field::PathWidthScale, &[scale])?;
            }
        }
        info!(count = len, "constrained shuffle done");
        Ok(())
    }

    fn draw_target(
        &mut self,
        puzzles: &[PanelId],
        constraints: &Constraints,
        slot: usize,
    ) -> Result<usize, RandomizeError> {
        for _ in 0..constraints.max_attempts {
            let target = self.rng.gen_range(slot..puzzles.len());
            if target != slot && constraints.accepts(slot, puzzles[target]) {
                return Ok(target);
            }
        }
        Err(RandomizeError::Unsatisfiable {
            slot,
            attempts: constraints.max_attempts,
        })
    }

    /// Speed up slow doors and lifts.
    pub fn adjust_speed(&self) -> Result<(), MemoryError> {
        for (panel, rate) in OPEN_RATES {
            self.memory.write::<f32>(panel, Field::OpenRate, &[rate])?;
        }
        Ok(())
    }
}
