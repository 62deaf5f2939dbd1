// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A panel with two dot sequences that trade places.
//!
//! The panel accepts one of two orderings of its dots. As soon as the
//! player's path hits a dot of the expected sequence, the game's sequence
//! pointers are swapped so the other ordering becomes the live one.

use crate::geometry::Decoration;
use crate::memory::{Field, MemoryError, PanelId, PanelMemory, PanelMemoryExt};
use crate::path::SolutionPoint;
use crate::watchdog::Watchdog;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SLEEP: Duration = Duration::from_millis(100);

/// Dot flag bit for sequence entry `n`.
fn sequence_bit(n: i32) -> i32 {
    u32::try_from(n)
        .ok()
        .and_then(|n| 0x1000i32.checked_shl(n))
        .unwrap_or(0)
}

pub struct JungleWatchdog {
    memory: Arc<dyn PanelMemory>,
    panel: PanelId,
    /// Dot flags of every node, read once at start.
    dot_flags: Vec<i32>,
    sequences: [Vec<i32>; 2],
    /// Addresses of the two sequence arrays in the host process.
    pointers: [u64; 2],
    /// True while the first sequence is the one being matched.
    first_live: bool,
    traced_length: usize,
    sleep_time: Duration,
}

impl JungleWatchdog {
    /// Capture the panel's dot flags and its two sequence pointers.
    pub fn new(
        memory: Arc<dyn PanelMemory>,
        panel: PanelId,
        first: Vec<i32>,
        second: Vec<i32>,
    ) -> Result<Self, MemoryError> {
        let dots = memory.read::<i32>(panel, Field::NumDots)?.max(0) as usize;
        let dot_flags = memory.read_array::<i32>(panel, Field::DotFlags, dots)?;
        let pointers = [
            memory.read::<u64>(panel, Field::DotSequence)?,
            memory.read::<u64>(panel, Field::DotSequenceReflection)?,
        ];
        Ok(Self {
            memory,
            panel,
            dot_flags,
            sequences: [first, second],
            pointers,
            first_live: true,
            traced_length: 0,
            sleep_time: DEFAULT_SLEEP,
        })
    }

    pub fn with_sleep_time(mut self, sleep_time: Duration) -> Self {
        self.sleep_time = sleep_time;
        self
    }

    /// True while the first sequence is matched against the path.
    pub fn first_live(&self) -> bool {
        self.first_live
    }

    fn swap_sequences(&mut self) -> Result<(), MemoryError> {
        let (live, other) = if self.first_live { (0, 1) } else { (1, 0) };
        let memory = &self.memory;
        memory.write::<u64>(self.panel, Field::DotSequence, &[self.pointers[live]])?;
        memory.write::<u64>(
            self.panel,
            Field::DotSequenceReflection,
            &[self.pointers[other]],
        )?;
        memory.write::<i32>(
            self.panel,
            Field::DotSequenceLen,
            &[self.sequences[live].len() as i32],
        )?;
        memory.write::<i32>(
            self.panel,
            Field::DotSequenceLenReflection,
            &[self.sequences[other].len() as i32],
        )?;
        self.first_live = !self.first_live;
        debug!(panel = %self.panel, first_live = self.first_live, "dot sequences swapped");
        Ok(())
    }
}

impl Watchdog for JungleWatchdog {
    fn action(&mut self) -> Result<(), MemoryError> {
        let length = self
            .memory
            .read::<i32>(self.panel, Field::TracedEdges)?
            .max(0) as usize;
        if length == self.traced_length {
            return Ok(());
        }
        self.traced_length = length;
        let traced = match self
            .memory
            .read_array::<SolutionPoint>(self.panel, Field::TracedEdgeData, length)
        {
            Ok(traced) => traced,
            Err(MemoryError::NullPointer { .. }) => return Ok(()),
            Err(error) => return Err(error),
        };

        let live = if self.first_live { 0 } else { 1 };
        for edge in traced {
            let Some(&flags) = usize::try_from(edge.point_a)
                .ok()
                .and_then(|i| self.dot_flags.get(i))
            else {
                continue;
            };
            if flags & Decoration::DOT == 0 {
                continue;
            }
            let expected = self.sequences[live].first().copied();
            return match expected {
                Some(n) if flags & sequence_bit(n) != 0 => self.swap_sequences(),
                _ => Ok(()),
            };
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPanels;

    const PANEL: PanelId = PanelId(0x002C4);

    fn setup(traced: &[SolutionPoint]) -> (Arc<InMemoryPanels>, JungleWatchdog) {
        let memory = Arc::new(InMemoryPanels::new());
        // Node 1 carries a dot tagged for sequence entry 2.
        let flags = [0, Decoration::DOT | sequence_bit(2), 0];
        memory.set::<i32>(PANEL, Field::NumDots, &[3]).unwrap();
        memory.set_array(PANEL, Field::DotFlags, &flags).unwrap();
        memory.set_array::<i32>(PANEL, Field::DotSequence, &[2, 0]).unwrap();
        memory
            .set_array::<i32>(PANEL, Field::DotSequenceReflection, &[0, 1, 2])
            .unwrap();
        memory
            .set::<i32>(PANEL, Field::TracedEdges, &[traced.len() as i32])
            .unwrap();
        memory.set_array(PANEL, Field::TracedEdgeData, traced).unwrap();
        let watchdog =
            JungleWatchdog::new(memory.clone(), PANEL, vec![2, 0], vec![0, 1, 2]).unwrap();
        (memory, watchdog)
    }

    #[test]
    fn test_matching_dot_swaps_sequences() {
        let (memory, mut watchdog) = setup(&[SolutionPoint::new(1, 2)]);
        let first = memory.read::<u64>(PANEL, Field::DotSequence).unwrap();
        let second = memory
            .read::<u64>(PANEL, Field::DotSequenceReflection)
            .unwrap();

        watchdog.action().unwrap();
        assert!(!watchdog.first_live());
        assert_eq!(memory.read::<u64>(PANEL, Field::DotSequence).unwrap(), first);
        assert_eq!(
            memory.read::<u64>(PANEL, Field::DotSequenceReflection).unwrap(),
            second
        );
        assert_eq!(memory.read::<i32>(PANEL, Field::DotSequenceLen).unwrap(), 2);
        assert_eq!(
            memory.read::<i32>(PANEL, Field::DotSequenceLenReflection).unwrap(),
            3
        );

        // Unchanged trace: nothing more happens.
        watchdog.action().unwrap();
        assert!(!watchdog.first_live());
    }

    #[test]
    fn test_wrong_dot_leaves_sequences() {
        let (memory, mut watchdog) = setup(&[SolutionPoint::new(1, 2)]);
        watchdog.first_live = false;
        watchdog.action().unwrap();
        assert!(!watchdog.first_live());
        assert_eq!(memory.write_count(PANEL, Field::DotSequence).unwrap(), 0);
    }

    #[test]
    fn test_sequence_bit_range() {
        assert_eq!(sequence_bit(0), 0x1000);
        assert_eq!(sequence_bit(3), 0x8000);
        assert_eq!(sequence_bit(-1), 0);
        assert_eq!(sequence_bit(40), 0);
    }
}
