// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid model for path-tracing panels.
//!
//! - Point: grid coordinates and the direction table
//! - Decoration, Style: packed values as the game stores them
//! - Cell, Symbol, SymbolKind: decoded cell contents
//! - Grid: the lattice itself, flat or wrapped around a pillar
//! - Quaternion: panel orientation

pub mod decoration;
pub mod grid;
pub mod point;
pub mod quaternion;
pub mod symbol;

pub use decoration::{Decoration, Style, OPEN, PATH};
pub use grid::Grid;
pub use point::{direction, Point, DIRECTIONS, LATTICE_STEP, ORTHOGONAL};
pub use quaternion::Quaternion;
pub use symbol::{Cell, Symbol, SymbolKind};
