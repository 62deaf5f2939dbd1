// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two panels that share dots.
//!
//! While one panel is being traced, the other only shows its dots if the
//! first panel's path runs through one of its own intersection dots.
//! Clearing a panel's path shows the partner's dots again.

use crate::geometry::{Decoration, Style};
use crate::memory::{Field, MemoryError, PanelId, PanelMemory, PanelMemoryExt};
use crate::path::SolutionPoint;
use crate::watchdog::Watchdog;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SLEEP: Duration = Duration::from_millis(100);

pub struct BridgeWatchdog {
    memory: Arc<dyn PanelMemory>,
    panels: [PanelId; 2],
    /// Trace lengths seen on the previous tick.
    lengths: [usize; 2],
    sleep_time: Duration,
}

impl BridgeWatchdog {
    pub fn new(memory: Arc<dyn PanelMemory>, first: PanelId, second: PanelId) -> Self {
        Self {
            memory,
            panels: [first, second],
            lengths: [0, 0],
            sleep_time: DEFAULT_SLEEP,
        }
    }

    pub fn with_sleep_time(mut self, sleep_time: Duration) -> Self {
        self.sleep_time = sleep_time;
        self
    }

    fn traced_length(&self, panel: PanelId) -> Result<usize, MemoryError> {
        Ok(self.memory.read::<i32>(panel, Field::TracedEdges)?.max(0) as usize)
    }

    fn update_style(&self, panel: PanelId, show_dots: bool) -> Result<(), MemoryError> {
        let style = self.memory.read::<i32>(panel, Field::StyleFlags)?;
        let style = if show_dots {
            style | Style::HAS_DOTS
        } else {
            style & !Style::HAS_DOTS
        };
        debug!(%panel, show_dots, "bridge dots");
        self.memory.write::<i32>(panel, Field::StyleFlags, &[style])
    }

    /// Whether the panel's own path passes through one of its intersection dots.
    fn touches_intersection(&self, panel: PanelId) -> Result<bool, MemoryError> {
        let length = self.traced_length(panel)?;
        if length == 0 {
            return Ok(false);
        }
        let dots = self.memory.read::<i32>(panel, Field::NumDots)?.max(0) as usize;
        let flags = self.memory.read_array::<i32>(panel, Field::DotFlags, dots)?;
        let edges = self
            .memory
            .read_array::<SolutionPoint>(panel, Field::TracedEdgeData, length)?;
        let is_intersection = |node: i32| {
            usize::try_from(node)
                .ok()
                .and_then(|i| flags.get(i))
                .is_some_and(|&f| f == Decoration::DOT_INTERSECTION)
        };
        Ok(edges
            .iter()
            .any(|e| is_intersection(e.point_a) || is_intersection(e.point_b)))
    }
}

impl Watchdog for BridgeWatchdog {
    fn action(&mut self) -> Result<(), MemoryError> {
        let current = [
            self.traced_length(self.panels[0])?,
            self.traced_length(self.panels[1])?,
        ];
        for (i, partner) in [(0, 1), (1, 0)] {
            if self.lengths[i] > 0 && current[i] == 0 {
                self.update_style(self.panels[partner], true)?;
            }
        }
        for (i, partner) in [(0, 1), (1, 0)] {
            if current[i] != self.lengths[i]
                && current[i] > 0
                && !self.touches_intersection(self.panels[partner])?
            {
                self.update_style(self.panels[partner], false)?;
            }
        }
        self.lengths = current;
        Ok(())
    }

    fn sleep_time(&self) -> Duration {
        self.sleep_time
    }

    fn is_terminated(&self) -> bool {
        false
    }
}
