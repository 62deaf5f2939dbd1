// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Judges triangle, arrow and new-symbol panels as the player traces.
//!
//! The panel is only re-judged when the traced edge count changes. Once the
//! path ends at the exit every symbol is checked, and the verdict goes back
//! to the game through the `HAS_TRIANGLES` style bit: set while a symbol is
//! unsatisfied, clear once they all are.

use crate::geometry::Style;
use crate::memory::{Field, MemoryError, PanelId, PanelMemory, PanelMemoryExt};
use crate::path::{PathTracer, SolutionPoint, TraceOutcome};
use crate::predicates::{check_panel, Violation};
use crate::state::{Counters, Statistics};
use crate::watchdog::Watchdog;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Poll interval while a path is being drawn.
pub const FAST_POLL: Duration = Duration::from_millis(10);
/// Poll interval while there is nothing new to judge.
pub const SLOW_POLL: Duration = Duration::from_millis(100);

/// Where the panel stands as far as this watchdog knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// No path on the panel.
    Idle,
    /// A path is being drawn and does not end at the exit.
    Evaluating,
    Satisfied,
    Failed(Violation),
}

pub struct SymbolWatchdog<R> {
    memory: Arc<dyn PanelMemory>,
    panel: PanelId,
    tracer: PathTracer,
    /// Style flags of the panel as generated, before any verdict.
    style: i32,
    rng: R,
    sleep_time: Duration,
    verdict: Option<Result<(), Violation>>,
    statistics: Statistics,
}

impl<R: Rng + Send> SymbolWatchdog<R> {
    /// `rng` drives the region scans of symbols that partition the panel.
    pub fn new(
        memory: Arc<dyn PanelMemory>,
        panel: PanelId,
        tracer: PathTracer,
        style: i32,
        rng: R,
    ) -> Self {
        Self {
            memory,
            panel,
            tracer,
            style,
            rng,
            sleep_time: SLOW_POLL,
            verdict: None,
            statistics: Statistics::new(),
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn tracer(&self) -> &PathTracer {
        &self.tracer
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn state(&self) -> PanelState {
        if self.tracer.traced_length() == 0 {
            return PanelState::Idle;
        }
        match (&self.verdict, self.tracer.complete()) {
            (Some(Ok(())), true) => PanelState::Satisfied,
            (Some(Err(violation)), true) => PanelState::Failed(violation.clone()),
            _ => PanelState::Evaluating,
        }
    }

    fn read_trace(&self, length: usize) -> Result<Option<Vec<SolutionPoint>>, MemoryError> {
        match self
            .memory
            .read_array::<SolutionPoint>(self.panel, Field::TracedEdgeData, length)
        {
            Ok(traced) => Ok(Some(traced)),
            Err(MemoryError::NullPointer { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    fn judge(&mut self) -> Result<(), MemoryError> {
        self.statistics.increment_counter(Counters::Evaluations);
        let verdict = check_panel(self.tracer.grid(), &mut self.rng);
        let style = match &verdict {
            Ok(()) => {
                self.statistics.increment_counter(Counters::Passes);
                self.style & !Style::HAS_TRIANGLES
            }
            Err(violation) => {
                self.statistics.record_violation(violation);
                self.style | Style::HAS_TRIANGLES
            }
        };
        self.memory.write::<i32>(self.panel, Field::StyleFlags, &[style])?;

        if self.verdict.as_ref() != Some(&verdict) {
            match &verdict {
                Ok(()) => info!(panel = %self.panel, "all symbols satisfied"),
                Err(violation) => info!(panel = %self.panel, %violation, "symbol unsatisfied"),
            }
        }
        self.verdict = Some(verdict);
        Ok(())
    }
}

impl<R: Rng + Send> Watchdog for SymbolWatchdog<R> {
    fn action(&mut self) -> Result<(), MemoryError> {
        let length = self
            .memory
            .read::<i32>(self.panel, Field::TracedEdges)?
            .max(0) as usize;
        if length != self.tracer.traced_length() {
            self.tracer.set_complete(false);
        }
        if length == 0 {
            if self.tracer.traced_length() != 0 {
                debug!(panel = %self.panel, "path cleared");
                self.tracer.trace(&[]);
                self.verdict = None;
            }
            self.sleep_time = SLOW_POLL;
            return Ok(());
        }
        if self.tracer.complete() {
            self.sleep_time = SLOW_POLL;
            return Ok(());
        }
        self.sleep_time = FAST_POLL;
        if length == self.tracer.traced_length() {
            return Ok(());
        }

        let Some(traced) = self.read_trace(length)? else {
            debug!(panel = %self.panel, "no trace data yet");
            return Ok(());
        };
        if self.tracer.trace(&traced) == TraceOutcome::Aborted {
            self.statistics.increment_counter(Counters::AbortedTraces);
            return Ok(());
        }
        if self.tracer.complete() {
            self.judge()?;
        }
        Ok(())
    }

    fn sleep_time(&self) -> Duration {
        self.sleep_time
    }

    fn is_terminated(&self) -> bool {
        false
    }
}
