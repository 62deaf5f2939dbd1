// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Surrounded symbols: the path must close off one side of the cell.
//!
//! Starting at the symbol, open space is explored forwards along the
//! symbol's axis and sideways in both perpendicular directions, never
//! backwards. The symbol is satisfied when every branch runs into the path
//! before it reaches the frame. A visited set bounds the walk.

use crate::geometry::{direction, Grid, Point, Symbol, SymbolKind};
use crate::predicates::Violation;
use std::collections::BTreeSet;

pub fn check_surrounded(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let axis_index = symbol.mid & 3;
    let Some(axis) = direction(axis_index) else {
        return Err(Violation::BadParameter {
            at,
            kind: SymbolKind::Surrounded,
            value: symbol.mid,
        });
    };
    let side = axis.perpendicular();
    let steps = [axis, side, side * -1];

    let mut visited = BTreeSet::from([at]);
    let mut worklist = vec![at];
    while let Some(cell) = worklist.pop() {
        for step in steps {
            let edge = grid.wrap(cell + step.half());
            if !grid.in_bounds(edge) {
                return Err(Violation::Surrounded { at, escape: edge });
            }
            if grid.is_path(edge) {
                continue;
            }
            let next = grid.wrap(cell + step);
            if !grid.is_interior(next) {
                return Err(Violation::Surrounded { at, escape: next });
            }
            if grid.cell(next).is_kind(SymbolKind::Empty) {
                continue;
            }
            if visited.insert(next) {
                worklist.push(next);
            }
        }
    }
    Ok(())
}
