// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbols that compare a count against one of their parameters.

use crate::geometry::{direction, Grid, Point, Symbol, SymbolKind, DIRECTIONS, ORTHOGONAL};
use crate::predicates::arrow::cast;
use crate::predicates::shape::{is_corner, CELL_CORNERS};
use crate::predicates::Violation;
use crate::region::region_of;

/// How many lattice neighbours a cell at `at` has inside the frame:
/// 3 in a corner, 5 along one side, 8 elsewhere.
fn neighbour_baseline(grid: &Grid, at: Point) -> i32 {
    let on_column = !grid.is_pillar() && (at.x == 1 || at.x == grid.width() - 2);
    let on_row = at.y == 1 || at.y == grid.height() - 2;
    match (on_column, on_row) {
        (true, true) => 3,
        (true, false) | (false, true) => 5,
        (false, false) => 8,
    }
}

/// The symbol counts lattice neighbours that the path cuts off from its region.
pub fn check_region_neighbours(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let region = region_of(grid, at);
    let joined = DIRECTIONS
        .iter()
        .filter(|&&d| region.contains(&grid.wrap(at + d)))
        .count() as i32;
    let found = neighbour_baseline(grid, at) - joined;
    if found == symbol.high as i32 {
        Ok(())
    } else {
        Err(Violation::RegionNeighbours {
            at,
            expected: symbol.high,
            found,
        })
    }
}

/// Every orthogonal ray from the symbol must cross the path. Rays wrap
/// around a pillar.
pub fn check_four_way_reach(grid: &Grid, at: Point, _symbol: Symbol) -> Result<(), Violation> {
    for step in ORTHOGONAL {
        let unit = step.half();
        let sees_path = cast(grid, at, unit, unit).any(|p| grid.is_path(p));
        if !sees_path {
            return Err(Violation::FourWayReach { at, blind: step });
        }
    }
    Ok(())
}

/// Count the cell's corners where the path turns or branches.
pub fn check_corner_count(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let found = CELL_CORNERS
        .iter()
        .filter(|&&d| is_corner(grid.junction(grid.wrap(at + d))))
        .count();
    if found == symbol.high as usize {
        Ok(())
    } else {
        Err(Violation::CornerCount {
            at,
            expected: symbol.high,
            found,
        })
    }
}

/// Count members of the symbol's region along a ray, wrapping around a
/// pillar as the region does.
pub fn check_ray_count(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let Some(dir) = direction(symbol.mid) else {
        return Err(Violation::BadParameter {
            at,
            kind: SymbolKind::RayCount,
            value: symbol.mid,
        });
    };
    let region = region_of(grid, at);
    let found = cast(grid, at, dir, dir)
        .filter(|p| region.contains(p))
        .count();
    if found == symbol.high as usize {
        Ok(())
    } else {
        Err(Violation::RayCount {
            at,
            expected: symbol.high,
            found,
        })
    }
}
