// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Panel field vocabulary shared by the watchdogs and the randomizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumString};

/// Size of a pointer-valued field in the host process.
pub const POINTER_SIZE: usize = 8;

/// Identifier of a panel (or other entity) record in the host process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub u32);

impl fmt::Display for PanelId {
    /// Format as the game's five-digit hex ids, e.g. `0x01BE9`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:05X}", self.0)
    }
}

impl From<u32> for PanelId {
    fn from(id: u32) -> Self {
        PanelId(id)
    }
}

/// A named field of a panel record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumCountMacro,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    // Trace state
    TracedEdges,
    TracedEdgeData,
    // Presentation and power
    StyleFlags,
    Solved,
    Power,
    NeedsRedraw,
    Orientation,
    OpenRate,
    Target,
    PanelTarget,
    // Dots and decorations
    NumDots,
    DotFlags,
    DotPositions,
    NumConnections,
    DotConnectionA,
    DotConnectionB,
    Decorations,
    DecorationFlags,
    DecorationColors,
    NumDecorations,
    ReflectionData,
    GridSizeX,
    GridSizeY,
    // Sequences
    SequenceLen,
    Sequence,
    DotSequenceLen,
    DotSequence,
    DotSequenceLenReflection,
    DotSequenceReflection,
    // Lines
    AudioPrefix,
    AudioLogName,
    PathWidthScale,
    StartpointScale,
    SpecularTexture,
    // Colours
    PathColor,
    ReflectionPathColor,
    DotColor,
    ActiveColor,
    BackgroundRegionColor,
    SuccessColorA,
    SuccessColorB,
    StrobeColorA,
    StrobeColorB,
    ErrorColor,
    PatternPointColor,
    PatternPointColorA,
    PatternPointColorB,
    SymbolA,
    SymbolB,
    SymbolC,
    SymbolD,
    SymbolE,
    PushSymbolColors,
    OuterBackground,
    OuterBackgroundMode,
    NumColoredRegions,
    ColoredRegions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_field_names_round_trip_through_strings() {
        assert_eq!(Field::TracedEdgeData.to_string(), "TRACED_EDGE_DATA");
        assert_eq!(Field::from_str("DOT_SEQUENCE_LEN_REFLECTION"), Ok(Field::DotSequenceLenReflection));
    }

    #[test]
    fn test_panel_id_display() {
        assert_eq!(PanelId(0x1BE9).to_string(), "0x01BE9");
    }
}
