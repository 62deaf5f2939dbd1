// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbols judged against the whole region they sit in.

use crate::geometry::{direction, Cell, Grid, Point, Symbol, SymbolKind, ORTHOGONAL};
use crate::predicates::shape::{gap_pattern, node_pattern, CELL_CORNERS, PATTERN_COUNT};
use crate::predicates::Violation;
use crate::region::{partition, region_of};
use rand::Rng;
use std::collections::BTreeSet;

/// Direction nibble that disables the half-plane check.
pub const HALF_PLANE_ANY: u8 = 9;

fn is_half_plane_safe(cell: Cell) -> bool {
    cell == Cell::Open || cell.is_kind(SymbolKind::HalfPlane)
}

/// Region cells strictly ahead of the symbol hold nothing but open space
/// or other half-plane symbols.
pub fn check_half_plane(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    if symbol.high == HALF_PLANE_ANY {
        return Ok(());
    }
    let Some(dir) = direction(symbol.high) else {
        return Err(Violation::BadParameter {
            at,
            kind: SymbolKind::HalfPlane,
            value: symbol.high,
        });
    };
    match region_of(grid, at)
        .into_iter()
        .find(|&p| (p - at).dot(dir) > 0 && !is_half_plane_safe(grid.cell(p)))
    {
        Some(offender) => Err(Violation::HalfPlane { at, offender }),
        None => Ok(()),
    }
}

/// Every region of the panel holds exactly one ghost.
///
/// The whole panel is partitioned again on each call; `at` only labels the
/// violation.
pub fn check_ghosts<R: Rng + ?Sized>(grid: &Grid, at: Point, rng: &mut R) -> Result<(), Violation> {
    for region in partition(grid, rng) {
        let ghosts = region
            .iter()
            .filter(|&&p| grid.cell(p).is_kind(SymbolKind::Ghost))
            .count();
        if ghosts != 1 {
            let region_seed = region.first().copied().unwrap_or(at);
            return Err(Violation::Ghost {
                at,
                region_seed,
                ghosts,
            });
        }
    }
    Ok(())
}

/// Shape counts around the region of `at`, before any symbol claims them.
pub fn shape_counts(grid: &Grid, at: Point) -> [i32; PATTERN_COUNT] {
    let region = region_of(grid, at);
    let mut nodes = BTreeSet::new();
    let mut gaps = BTreeSet::new();
    for &cell in &region {
        nodes.extend(CELL_CORNERS.iter().map(|&d| grid.wrap(cell + d)));
        gaps.extend(
            ORTHOGONAL
                .iter()
                .map(|&step| grid.wrap(cell + step.half()))
                .filter(|&p| grid.cell(p).is_kind(SymbolKind::Gap)),
        );
    }

    let mut counts = [0; PATTERN_COUNT];
    let patterns = nodes
        .into_iter()
        .filter(|&p| grid.in_bounds(p))
        .filter_map(|p| node_pattern(grid.junction(p)))
        .chain(gaps.into_iter().filter_map(gap_pattern));
    for pattern in patterns {
        counts[pattern] += 1;
    }
    counts
}

/// The region's count of the symbol's pattern is shared out exactly among
/// every symbol in the region that declares the same pattern.
pub fn check_shape_count(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let pattern = symbol.mid as usize;
    if pattern >= PATTERN_COUNT {
        return Err(Violation::BadParameter {
            at,
            kind: SymbolKind::ShapeCount,
            value: symbol.mid,
        });
    }
    let claimed: i32 = region_of(grid, at)
        .iter()
        .filter_map(|&p| grid.symbol(p))
        .filter(|s| s.kind == SymbolKind::ShapeCount && s.mid == symbol.mid)
        .map(|s| s.high as i32)
        .sum();
    let remaining = shape_counts(grid, at)[pattern] - claimed;
    if remaining == 0 {
        Ok(())
    } else {
        Err(Violation::ShapeCount {
            at,
            pattern: symbol.mid,
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Decoration;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn place(grid: &mut Grid, at: Point, family: u8, mid: u8, high: u8) -> Symbol {
        grid.set_raw(at, Decoration::new_symbol_with(family, mid, high));
        grid.symbol(at).unwrap()
    }

    #[test]
    fn test_half_plane_flags_foreign_symbol_ahead() {
        let mut grid = Grid::new(7, 3);
        let at = Point::new(1, 1);
        let right = place(&mut grid, at, 2, 0, 2);
        assert_eq!(check_half_plane(&grid, at, right), Ok(()));

        grid.set_raw(Point::new(5, 1), Decoration::STONE);
        assert_eq!(
            check_half_plane(&grid, at, right),
            Err(Violation::HalfPlane {
                at,
                offender: Point::new(5, 1)
            })
        );

        // Looking left, the stone is behind the symbol.
        let left = place(&mut grid, at, 2, 0, 3);
        assert_eq!(check_half_plane(&grid, at, left), Ok(()));

        place(&mut grid, Point::new(5, 1), 2, 0, 0);
        assert_eq!(check_half_plane(&grid, at, right), Ok(()));
    }

    #[test]
    fn test_diagonal_half_planes() {
        let mut grid = Grid::new(7, 7);
        let at = Point::new(3, 3);
        // On the boundary line of the down-right half plane.
        grid.set_raw(Point::new(5, 1), Decoration::STONE);
        grid.set_raw(Point::new(1, 5), Decoration::STONE);
        let down_right = place(&mut grid, at, 2, 0, 4);
        assert_eq!(check_half_plane(&grid, at, down_right), Ok(()));

        grid.set_raw(Point::new(5, 3), Decoration::STONE);
        assert_eq!(
            check_half_plane(&grid, at, down_right),
            Err(Violation::HalfPlane {
                at,
                offender: Point::new(5, 3)
            })
        );

        let up_left = place(&mut grid, at, 2, 0, 6);
        assert_eq!(check_half_plane(&grid, at, up_left), Ok(()));
        grid.set_raw(Point::new(1, 1), Decoration::STONE);
        assert_eq!(
            check_half_plane(&grid, at, up_left),
            Err(Violation::HalfPlane {
                at,
                offender: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn test_half_plane_special_values() {
        let mut grid = Grid::new(7, 3);
        grid.set_raw(Point::new(3, 1), Decoration::STONE);
        let at = Point::new(1, 1);
        let any = place(&mut grid, at, 2, 0, HALF_PLANE_ANY);
        assert_eq!(check_half_plane(&grid, at, any), Ok(()));
        let bad = place(&mut grid, at, 2, 0, 8);
        assert!(matches!(
            check_half_plane(&grid, at, bad),
            Err(Violation::BadParameter { value: 8, .. })
        ));
    }

    #[test]
    fn test_one_ghost_per_region() {
        let mut grid = Grid::new(7, 7);
        for y in 0..7 {
            grid.set(Point::new(2, y), Cell::Path);
        }
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        place(&mut grid, Point::new(1, 3), 4, 0, 0);
        place(&mut grid, Point::new(5, 5), 4, 0, 0);
        assert_eq!(check_ghosts(&grid, Point::new(1, 3), &mut rng), Ok(()));

        place(&mut grid, Point::new(3, 1), 4, 0, 0);
        assert!(matches!(
            check_ghosts(&grid, Point::new(1, 3), &mut rng),
            Err(Violation::Ghost { ghosts: 2, .. })
        ));

        grid.set(Point::new(1, 3), Cell::Open);
        assert!(matches!(
            check_ghosts(&grid, Point::new(5, 5), &mut rng),
            Err(Violation::Ghost { .. })
        ));
    }

    #[test]
    fn test_shape_counts_dead_ends() {
        let mut grid = Grid::new(5, 5);
        // A spur hanging down from the top edge.
        for y in 0..3 {
            grid.set(Point::new(2, y), Cell::Path);
        }
        let counts = shape_counts(&grid, Point::new(1, 1));
        assert_eq!(counts[0], 1);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().sum::<i32>(), 2);
    }

    #[test]
    fn test_shape_count_shared_by_siblings() {
        let mut grid = Grid::new(5, 5);
        for y in 0..3 {
            grid.set(Point::new(2, y), Cell::Path);
        }
        let at = Point::new(1, 1);
        let claim_one = place(&mut grid, at, 5, 0, 1);
        assert_eq!(check_shape_count(&grid, at, claim_one), Ok(()));

        place(&mut grid, Point::new(3, 3), 5, 0, 1);
        assert_eq!(
            check_shape_count(&grid, at, claim_one),
            Err(Violation::ShapeCount {
                at,
                pattern: 0,
                remaining: -1
            })
        );

        place(&mut grid, Point::new(3, 3), 5, 0, 0);
        assert_eq!(check_shape_count(&grid, at, claim_one), Ok(()));
    }

    #[test]
    fn test_gap_counted_once() {
        let mut grid = Grid::new(5, 5);
        grid.set_raw(Point::new(1, 2), Decoration::GAP);
        let at = Point::new(1, 1);
        let symbol = place(&mut grid, at, 5, 12, 1);
        assert_eq!(check_shape_count(&grid, at, symbol), Ok(()));
    }
}
