// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decoded cell contents.
//!
//! Panels store every cell as one packed `i32`. Template grids are decoded
//! into [`Cell`] values once, so predicates match on [`SymbolKind`] and read
//! the nibble parameters from [`Symbol`] instead of masking on every call.

use crate::geometry::decoration::{Decoration, OPEN, PATH};
use strum_macros::{Display, EnumCount as EnumCountMacro};

/// What a symbol asks of the traced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, Display)]
#[repr(u8)]
pub enum SymbolKind {
    /// Count of adjacent path segments.
    Triangle,
    /// Count of path cells along a ray.
    Arrow,
    /// New family 1: lattice neighbours cut off from the symbol's region.
    RegionNeighbours,
    /// New family 2: region cells on one side must be harmless.
    HalfPlane,
    /// New family 3: the path must be visible in all four directions.
    FourWayReach,
    /// New family 4: one ghost per region.
    Ghost,
    /// New family 5: count of path shapes around the region.
    ShapeCount,
    /// New family 6: count of path corners at the cell's corners.
    CornerCount,
    /// New family 7: region members along a ray.
    RayCount,
    /// New family 8: the path closes off one side of the cell.
    Surrounded,
    /// New families 9..=15, reserved and always satisfied.
    Placeholder,
    /// Impassable cell.
    Empty,
    /// Broken edge.
    Gap,
    /// Anything this engine does not judge (dots, stones, start, exit...).
    Inert,
}

impl SymbolKind {
    /// Map a new-symbol family nibble to its kind.
    fn from_family(k: u32) -> Self {
        match k {
            1 => SymbolKind::RegionNeighbours,
            2 => SymbolKind::HalfPlane,
            3 => SymbolKind::FourWayReach,
            4 => SymbolKind::Ghost,
            5 => SymbolKind::ShapeCount,
            6 => SymbolKind::CornerCount,
            7 => SymbolKind::RayCount,
            8 => SymbolKind::Surrounded,
            _ => SymbolKind::Placeholder,
        }
    }
}

/// A decoded decoration with its two nibble parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Bits 12..16 of the packed value.
    pub mid: u8,
    /// Bits 16..20 of the packed value.
    pub high: u8,
    /// The packed value as read from the panel.
    pub raw: i32,
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Path,
    Symbol(Symbol),
}

impl Cell {
    /// Decode a packed cell value.
    pub fn decode(raw: i32) -> Self {
        match raw {
            OPEN => return Cell::Open,
            PATH => return Cell::Path,
            _ => {}
        }
        let bits = raw as u32;
        let mid = ((bits & 0xF000) >> 12) as u8;
        let high = ((bits & 0xF0000) >> 16) as u8;
        let type_bits = bits & Decoration::TYPE_MASK as u32;

        let kind = if raw == Decoration::EMPTY {
            SymbolKind::Empty
        } else if type_bits == Decoration::TRIANGLE as u32 && high != 0 {
            SymbolKind::Triangle
        } else if bits & Decoration::FAMILY_MASK as u32 == Decoration::ARROW as u32 {
            SymbolKind::Arrow
        } else if type_bits == Decoration::ARROW as u32 {
            SymbolKind::from_family((bits >> 24) & 0xF)
        } else if type_bits == 0 && bits & Decoration::GAP as u32 != 0 {
            SymbolKind::Gap
        } else {
            SymbolKind::Inert
        };

        Cell::Symbol(Symbol {
            kind,
            mid,
            high,
            raw,
        })
    }

    /// The packed value the game would store for this cell.
    pub fn raw(self) -> i32 {
        match self {
            Cell::Open => OPEN,
            Cell::Path => PATH,
            Cell::Symbol(symbol) => symbol.raw,
        }
    }

    pub fn is_path(self) -> bool {
        self == Cell::Path
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn kind(self) -> Option<SymbolKind> {
        self.symbol().map(|s| s.kind)
    }

    pub fn is_kind(self, kind: SymbolKind) -> bool {
        self.kind() == Some(kind)
    }
}
