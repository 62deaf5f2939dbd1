// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flood fill of the cells the path does not separate.
//!
//! A region grows from a seed one lattice step at a time. A step from `c`
//! along `d` is allowed when the edge cell `c + d/2` is in bounds and not on
//! the path, and the landing cell `c + d` is off the frame and not
//! [`SymbolKind::Empty`]. Pillar grids wrap the x axis.

use crate::geometry::{Grid, Point, SymbolKind, ORTHOGONAL};
use rand::Rng;
use std::collections::BTreeSet;

/// A region: an unordered set of cells, kept sorted for determinism.
pub type Region = BTreeSet<Point>;

/// The region containing `seed`. The seed is always a member.
pub fn region_of(grid: &Grid, seed: Point) -> Region {
    let mut region = Region::new();
    region.insert(seed);
    let mut stack = vec![seed];

    while let Some(cell) = stack.pop() {
        for step in ORTHOGONAL {
            let edge = grid.wrap(cell + step.half());
            match grid.get(edge) {
                Some(c) if !c.is_path() => {}
                _ => continue,
            }
            let next = grid.wrap(cell + step);
            if !grid.is_interior(next) || grid.cell(next).is_kind(SymbolKind::Empty) {
                continue;
            }
            if region.insert(next) {
                stack.push(next);
            }
        }
    }
    region
}

/// Split every interior odd/odd cell into regions.
///
/// Seeds are drawn from the not-yet-visited cells by `rng`; the resulting
/// partition does not depend on the draw order. Empty cells belong to no
/// region.
pub fn partition<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Region> {
    let mut unvisited: Vec<Point> = grid
        .slots()
        .filter(|&p| !grid.cell(p).is_kind(SymbolKind::Empty))
        .collect();
    let mut regions = Vec::new();

    while !unvisited.is_empty() {
        let seed = unvisited[rng.gen_range(0..unvisited.len())];
        let region = region_of(grid, seed);
        unvisited.retain(|p| !region.contains(p));
        regions.push(region);
    }
    regions
}
