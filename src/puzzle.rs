// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symbols a generated puzzle will carry, grouped by family.

use crate::geometry::{Decoration, Style};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Counts at or above this are treated as "fill everything" and never popped.
const UNBOUNDED_COUNT: u32 = 25;

/// Symbol inventory keyed by family tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleSymbols {
    symbols: BTreeMap<i32, Vec<(i32, u32)>>,
}

impl PuzzleSymbols {
    pub fn new(entries: impl IntoIterator<Item = (i32, u32)>) -> Self {
        let mut symbols: BTreeMap<i32, Vec<(i32, u32)>> = BTreeMap::new();
        for (decoration, count) in entries {
            symbols
                .entry(Self::group_of(decoration))
                .or_default()
                .push((decoration, count));
        }
        Self { symbols }
    }

    /// The family tag a decoration is filed under.
    ///
    /// Terminals and gaps keep their exact value, every dot variant goes
    /// under [`Decoration::DOT`], a new-symbol value goes under its family
    /// tag, and anything else under its base type.
    pub fn group_of(decoration: i32) -> i32 {
        if Self::is_terminal(decoration) {
            decoration
        } else if decoration & Decoration::DOT != 0 {
            Decoration::DOT
        } else if decoration & Decoration::FAMILY_MASK != decoration & Decoration::TYPE_MASK {
            decoration & Decoration::FAMILY_MASK
        } else {
            decoration & Decoration::TYPE_MASK
        }
    }

    fn is_terminal(decoration: i32) -> bool {
        matches!(
            decoration,
            Decoration::START | Decoration::EXIT | Decoration::GAP
        )
    }

    pub fn entries(&self, group: i32) -> &[(i32, u32)] {
        self.symbols.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total count of one family.
    pub fn count(&self, group: i32) -> u32 {
        self.entries(group).iter().map(|&(_, count)| count).sum()
    }

    pub fn any(&self, group: i32) -> bool {
        !self.entries(group).is_empty()
    }

    /// Style flags a panel carrying these symbols needs.
    pub fn style(&self) -> i32 {
        [
            (Decoration::DOT, Style::HAS_DOTS),
            (Decoration::STONE, Style::HAS_STONES),
            (Decoration::STAR, Style::HAS_STARS),
            (Decoration::POLY, Style::HAS_SHAPERS),
            (Decoration::TRIANGLE, Style::HAS_TRIANGLES),
            (Decoration::ARROW, Style::HAS_TRIANGLES),
        ]
        .into_iter()
        .filter(|&(group, _)| self.any(group))
        .fold(0, |style, (_, flag)| style | flag)
    }

    /// Take one symbol from a random family and return its decoration.
    ///
    /// Terminals, gaps and erasers are never taken, nor are entries whose
    /// count is zero or unbounded. Returns `None` when nothing qualifies.
    pub fn pop_random_symbol<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<i32> {
        let poppable = |&(_, count): &(i32, u32)| (1..UNBOUNDED_COUNT).contains(&count);
        let groups: Vec<i32> = self
            .symbols
            .iter()
            .filter(|(&group, _)| !Self::is_terminal(group) && group != Decoration::ERASER)
            .filter(|(_, entries)| entries.iter().any(poppable))
            .map(|(&group, _)| group)
            .collect();
        let group = *groups.choose(rng)?;
        let entries = self.symbols.get_mut(&group)?;
        let candidates: Vec<usize> = (0..entries.len())
            .filter(|&i| poppable(&entries[i]))
            .collect();
        let &index = candidates.choose(rng)?;
        let entry = &mut entries[index];
        entry.1 -= 1;
        Some(entry.0)
    }
}
