// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a symbol is not satisfied by the current path.

use crate::geometry::{Point, SymbolKind};
use std::fmt;

/// The first unsatisfied symbol found on a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Triangle touches the wrong number of path segments.
    Triangle {
        at: Point,
        expected: u8,
        found: usize,
    },

    /// Arrow ray crosses the wrong number of path cells.
    /// `found` stops one past `expected` when the ray overshoots.
    Arrow {
        at: Point,
        expected: u8,
        found: usize,
    },

    /// Wrong number of lattice neighbours cut off from the symbol's region.
    RegionNeighbours { at: Point, expected: u8, found: i32 },

    /// A region cell on the watched side holds something other than a safe value.
    HalfPlane { at: Point, offender: Point },

    /// No path cell between the symbol and the frame in this direction.
    FourWayReach { at: Point, blind: Point },

    /// A region holds no ghost, or more than one.
    Ghost {
        at: Point,
        region_seed: Point,
        ghosts: usize,
    },

    /// Shape count left over after every sibling claimed its share.
    ShapeCount {
        at: Point,
        pattern: u8,
        remaining: i32,
    },

    /// Wrong number of path corners at the cell's four corners.
    CornerCount {
        at: Point,
        expected: u8,
        found: usize,
    },

    /// Wrong number of region members on the ray.
    RayCount {
        at: Point,
        expected: u8,
        found: usize,
    },

    /// The region escapes to the frame through `escape`.
    Surrounded { at: Point, escape: Point },

    /// The symbol names a direction or pattern that does not exist.
    BadParameter {
        at: Point,
        kind: SymbolKind,
        value: u8,
    },
}

impl Violation {
    /// Kind of symbol that failed.
    pub fn kind(&self) -> SymbolKind {
        match self {
            Violation::Triangle { .. } => SymbolKind::Triangle,
            Violation::Arrow { .. } => SymbolKind::Arrow,
            Violation::RegionNeighbours { .. } => SymbolKind::RegionNeighbours,
            Violation::HalfPlane { .. } => SymbolKind::HalfPlane,
            Violation::FourWayReach { .. } => SymbolKind::FourWayReach,
            Violation::Ghost { .. } => SymbolKind::Ghost,
            Violation::ShapeCount { .. } => SymbolKind::ShapeCount,
            Violation::CornerCount { .. } => SymbolKind::CornerCount,
            Violation::RayCount { .. } => SymbolKind::RayCount,
            Violation::Surrounded { .. } => SymbolKind::Surrounded,
            Violation::BadParameter { kind, .. } => *kind,
        }
    }

    /// Position of the symbol that failed.
    pub fn at(&self) -> Point {
        match self {
            Violation::Triangle { at, .. }
            | Violation::Arrow { at, .. }
            | Violation::RegionNeighbours { at, .. }
            | Violation::HalfPlane { at, .. }
            | Violation::FourWayReach { at, .. }
            | Violation::Ghost { at, .. }
            | Violation::ShapeCount { at, .. }
            | Violation::CornerCount { at, .. }
            | Violation::RayCount { at, .. }
            | Violation::Surrounded { at, .. }
            | Violation::BadParameter { at, .. } => *at,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Triangle {
                at,
                expected,
                found,
            } => {
                write!(f, "Triangle at {} needs {} path segments, has {}", at, expected, found)
            }
            Violation::Arrow {
                at,
                expected,
                found,
            } => {
                write!(f, "Arrow at {} needs {} path crossings, has {}", at, expected, found)
            }
            Violation::RegionNeighbours {
                at,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Symbol at {} needs {} neighbours cut off, has {}",
                    at, expected, found
                )
            }
            Violation::HalfPlane { at, offender } => {
                write!(f, "Symbol at {} sees {} on its watched side", at, offender)
            }
            Violation::FourWayReach { at, blind } => {
                write!(f, "Symbol at {} sees no path towards {}", at, blind)
            }
            Violation::Ghost {
                at,
                region_seed,
                ghosts,
            } => {
                write!(
                    f,
                    "Ghost at {}: region around {} holds {} ghosts",
                    at, region_seed, ghosts
                )
            }
            Violation::ShapeCount {
                at,
                pattern,
                remaining,
            } => {
                write!(
                    f,
                    "Symbol at {}: pattern {} count off by {}",
                    at, pattern, remaining
                )
            }
            Violation::CornerCount {
                at,
                expected,
                found,
            } => {
                write!(f, "Symbol at {} needs {} corners, has {}", at, expected, found)
            }
            Violation::RayCount {
                at,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Symbol at {} needs {} region cells on its ray, has {}",
                    at, expected, found
                )
            }
            Violation::Surrounded { at, escape } => {
                write!(f, "Symbol at {} escapes through {}", at, escape)
            }
            Violation::BadParameter { at, kind, value } => {
                write!(f, "{} at {} has invalid parameter {}", kind, at, value)
            }
        }
    }
}
