// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Which fields move when two panels trade places.

use crate::memory::{Field, POINTER_SIZE};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use strum_macros::{Display, EnumString};

const INT: usize = 4;
const FLOAT: usize = 4;
const COLOR: usize = 16;

/// One group of fields that can be swapped together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SwapKind {
    Targets,
    AudioNames,
    Colors,
    Lines,
}

impl SwapKind {
    fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Fields of this group with the number of bytes to exchange.
    pub fn fields(self) -> &'static [(Field, usize)] {
        match self {
            SwapKind::Targets => &[(Field::Target, INT)],
            SwapKind::AudioNames => &[(Field::AudioLogName, POINTER_SIZE)],
            SwapKind::Colors => &[
                (Field::PathColor, COLOR),
                (Field::ReflectionPathColor, COLOR),
                (Field::DotColor, COLOR),
                (Field::ActiveColor, COLOR),
                // Alpha stays put so transparent backgrounds stay transparent.
                (Field::BackgroundRegionColor, 12),
                (Field::SuccessColorA, COLOR),
                (Field::SuccessColorB, COLOR),
                (Field::StrobeColorA, COLOR),
                (Field::StrobeColorB, COLOR),
                (Field::ErrorColor, COLOR),
                (Field::PatternPointColor, COLOR),
                (Field::PatternPointColorA, COLOR),
                (Field::PatternPointColorB, COLOR),
                (Field::SymbolA, COLOR),
                (Field::SymbolB, COLOR),
                (Field::SymbolC, COLOR),
                (Field::SymbolD, COLOR),
                (Field::SymbolE, COLOR),
                (Field::PushSymbolColors, INT),
                (Field::OuterBackground, COLOR),
                (Field::OuterBackgroundMode, INT),
                (Field::NumColoredRegions, INT),
                (Field::ColoredRegions, POINTER_SIZE),
            ],
            SwapKind::Lines => &[
                (Field::AudioPrefix, POINTER_SIZE),
                (Field::PathWidthScale, FLOAT),
                (Field::StartpointScale, FLOAT),
                (Field::NumDots, INT),
                (Field::NumConnections, INT),
                (Field::DotPositions, POINTER_SIZE),
                (Field::DotFlags, POINTER_SIZE),
                (Field::DotConnectionA, POINTER_SIZE),
                (Field::DotConnectionB, POINTER_SIZE),
                (Field::Decorations, POINTER_SIZE),
                (Field::DecorationFlags, POINTER_SIZE),
                (Field::DecorationColors, POINTER_SIZE),
                (Field::NumDecorations, INT),
                (Field::ReflectionData, POINTER_SIZE),
                (Field::GridSizeX, INT),
                (Field::GridSizeY, INT),
                (Field::StyleFlags, INT),
                (Field::SequenceLen, INT),
                (Field::Sequence, POINTER_SIZE),
                (Field::DotSequenceLen, INT),
                (Field::DotSequence, POINTER_SIZE),
                (Field::DotSequenceLenReflection, INT),
                (Field::DotSequenceReflection, POINTER_SIZE),
                (Field::PanelTarget, POINTER_SIZE),
                (Field::SpecularTexture, POINTER_SIZE),
            ],
        }
    }
}

/// A set of [`SwapKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwapFlags(u8);

impl SwapFlags {
    pub const NONE: SwapFlags = SwapFlags(0);
    pub const TARGETS: SwapFlags = SwapFlags(1 << SwapKind::Targets as u8);
    pub const AUDIO_NAMES: SwapFlags = SwapFlags(1 << SwapKind::AudioNames as u8);
    pub const COLORS: SwapFlags = SwapFlags(1 << SwapKind::Colors as u8);
    pub const LINES: SwapFlags = SwapFlags(1 << SwapKind::Lines as u8);

    pub fn contains(self, kind: SwapKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every field selected by these flags, each once.
    pub fn fields(self) -> Vec<(Field, usize)> {
        let mut fields: Vec<(Field, usize)> = [
            SwapKind::Targets,
            SwapKind::AudioNames,
            SwapKind::Colors,
            SwapKind::Lines,
        ]
        .into_iter()
        .filter(|&kind| self.contains(kind))
        .flat_map(|kind| kind.fields().iter().copied())
        .collect();
        fields.sort();
        fields.dedup_by_key(|(field, _)| *field);
        fields
    }
}

impl From<SwapKind> for SwapFlags {
    fn from(kind: SwapKind) -> Self {
        SwapFlags(kind.bit())
    }
}

impl FromIterator<SwapKind> for SwapFlags {
    fn from_iter<I: IntoIterator<Item = SwapKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SwapFlags::NONE, |flags, kind| flags | kind.into())
    }
}

impl BitOr for SwapFlags {
    type Output = SwapFlags;

    fn bitor(self, rhs: SwapFlags) -> SwapFlags {
        SwapFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for SwapFlags {
    fn bitor_assign(&mut self, rhs: SwapFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SwapFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = [
            SwapKind::Targets,
            SwapKind::AudioNames,
            SwapKind::Colors,
            SwapKind::Lines,
        ]
        .into_iter()
        .filter(|&kind| self.contains(kind))
        .map(|kind| kind.to_string())
        .collect();
        write!(f, "{}", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_flags_combine() {
        let flags = SwapFlags::LINES | SwapFlags::TARGETS;
        assert!(flags.contains(SwapKind::Lines));
        assert!(flags.contains(SwapKind::Targets));
        assert!(!flags.contains(SwapKind::Colors));
        assert_eq!(flags.to_string(), "targets|lines");
        assert!(SwapFlags::NONE.is_empty());
    }

    #[test]
    fn test_parse_kinds() {
        let flags: SwapFlags = ["lines", "colors"]
            .iter()
            .map(|s| SwapKind::from_str(s).unwrap())
            .collect();
        assert_eq!(flags, SwapFlags::LINES | SwapFlags::COLORS);
    }

    #[test]
    fn test_field_tables() {
        assert_eq!(SwapFlags::TARGETS.fields(), vec![(Field::Target, 4)]);
        let lines = SwapFlags::LINES.fields();
        assert_eq!(lines.len(), 25);
        assert!(lines.contains(&(Field::DotSequence, POINTER_SIZE)));
        let colors = SwapFlags::COLORS.fields();
        assert!(colors.contains(&(Field::BackgroundRegionColor, 12)));
    }
}
