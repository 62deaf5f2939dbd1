// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each symbol watchdog keeps its own counters: one slot per [`Counters`]
//! value followed by one slot per [`SymbolKind`] for violations.

use crate::geometry::SymbolKind;
use crate::predicates::Violation;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Completed traces that were judged.
    Evaluations,
    Passes,
    Failures,
    /// Traces that could not be reconstructed.
    AbortedTraces,
}

const COUNT: usize = Counters::COUNT + SymbolKind::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a failed evaluation against the kind of symbol that failed.
    pub fn record_violation(&mut self, violation: &Violation) {
        self.increment_counter(Counters::Failures);
        self.stats[Counters::COUNT + violation.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Violations recorded against one symbol kind.
    pub fn violations(&self, kind: SymbolKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_violation_counts_by_kind() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Evaluations);
        stats.record_violation(&Violation::Triangle {
            at: Point::new(1, 1),
            expected: 1,
            found: 0,
        });
        stats.record_violation(&Violation::BadParameter {
            at: Point::new(1, 1),
            kind: SymbolKind::RayCount,
            value: 9,
        });
        assert_eq!(stats.get(Counters::Evaluations), 1);
        assert_eq!(stats.get(Counters::Failures), 2);
        assert_eq!(stats.violations(SymbolKind::Triangle), 1);
        assert_eq!(stats.violations(SymbolKind::RayCount), 1);
        assert_eq!(stats.violations(SymbolKind::Arrow), 0);
    }
}
