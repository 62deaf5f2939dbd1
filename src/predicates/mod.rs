// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbol predicates.
//!
//! Each symbol kind has one check that reads the traced grid and either
//! accepts the symbol or reports a [`Violation`].
//!
//! # Organization
//!
//! - `triangle`, `arrow`: the classic symbols
//! - `counting`: families 1, 3, 6 and 7
//! - `regions`: families 2, 4 and 5, which look at whole regions
//! - `surround`: family 8
//! - `shape`: junction pattern tables shared by the counting checks

pub mod arrow;
pub mod counting;
pub mod errors;
pub mod regions;
pub mod shape;
pub mod surround;
pub mod triangle;

pub use errors::Violation;

use crate::geometry::{Grid, Point, Symbol, SymbolKind};
use rand::Rng;

/// Judge one decoded symbol.
///
/// `rng` seeds the region scan of ghost symbols; the other kinds ignore it.
pub fn check_symbol<R: Rng + ?Sized>(
    grid: &Grid,
    at: Point,
    symbol: Symbol,
    rng: &mut R,
) -> Result<(), Violation> {
    match symbol.kind {
        SymbolKind::Triangle => triangle::check_triangle(grid, at, symbol),
        SymbolKind::Arrow => arrow::check_arrow(grid, at, symbol),
        SymbolKind::RegionNeighbours => counting::check_region_neighbours(grid, at, symbol),
        SymbolKind::HalfPlane => regions::check_half_plane(grid, at, symbol),
        SymbolKind::FourWayReach => counting::check_four_way_reach(grid, at, symbol),
        SymbolKind::Ghost => regions::check_ghosts(grid, at, rng),
        SymbolKind::ShapeCount => regions::check_shape_count(grid, at, symbol),
        SymbolKind::CornerCount => counting::check_corner_count(grid, at, symbol),
        SymbolKind::RayCount => counting::check_ray_count(grid, at, symbol),
        SymbolKind::Surrounded => surround::check_surrounded(grid, at, symbol),
        SymbolKind::Placeholder | SymbolKind::Empty | SymbolKind::Gap | SymbolKind::Inert => {
            Ok(())
        }
    }
}

/// Judge the cell at `at`. Cells without a symbol always pass.
pub fn check_cell<R: Rng + ?Sized>(grid: &Grid, at: Point, rng: &mut R) -> Result<(), Violation> {
    match grid.symbol(at) {
        Some(symbol) => check_symbol(grid, at, symbol, rng),
        None => Ok(()),
    }
}

/// Judge every cell off the top and left edges, column by column, and
/// stop at the first violation.
pub fn check_panel<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<(), Violation> {
    for x in 1..grid.width() {
        for y in 1..grid.height() {
            check_cell(grid, Point::new(x, y), rng)?;
        }
    }
    Ok(())
}
