// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangles: count the path segments on the four sides of a cell.

use crate::geometry::{Grid, Point, Symbol, ORTHOGONAL};
use crate::predicates::Violation;

/// Number of orthogonal neighbours of `at` on the path.
pub fn adjacent_path(grid: &Grid, at: Point) -> usize {
    ORTHOGONAL
        .iter()
        .filter(|step| grid.is_path(grid.wrap(at + step.half())))
        .count()
}

pub fn check_triangle(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let found = adjacent_path(grid, at);
    if found == symbol.high as usize {
        Ok(())
    } else {
        Err(Violation::Triangle {
            at,
            expected: symbol.high,
            found,
        })
    }
}
