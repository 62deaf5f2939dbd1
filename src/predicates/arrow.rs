// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arrows: count path cells along a ray.
//!
//! The ray leaves the arrow half a lattice step in its direction, then
//! advances a full step at a time until it leaves the grid. On a pillar the
//! ray wraps around the seam and only the y axis ends it; a horizontal ray
//! stops after one full turn.

use crate::geometry::{direction, Grid, Point, Symbol, SymbolKind};
use crate::predicates::Violation;

pub fn check_arrow(grid: &Grid, at: Point, symbol: Symbol) -> Result<(), Violation> {
    let Some(dir) = direction(symbol.high) else {
        return Err(Violation::BadParameter {
            at,
            kind: SymbolKind::Arrow,
            value: symbol.high,
        });
    };
    let expected = symbol.mid;
    let overshoot = |found| Violation::Arrow {
        at,
        expected,
        found,
    };

    let mut found = 0;
    for p in ray(grid, at, dir) {
        if grid.is_path(p) {
            found += 1;
            if found > expected as usize {
                return Err(overshoot(found));
            }
        }
    }
    if found == expected as usize {
        Ok(())
    } else {
        Err(overshoot(found))
    }
}

/// Cells visited by a ray from `at` along `dir`.
fn ray(grid: &Grid, at: Point, dir: Point) -> impl Iterator<Item = Point> + '_ {
    cast(grid, at, dir.half(), dir)
}

/// Cells from `at + first` onwards in steps of `step`, until the ray
/// leaves the grid.
///
/// On a pillar the ray wraps around the seam. It ends after one full turn,
/// and never revisits `at` itself.
pub(crate) fn cast(
    grid: &Grid,
    at: Point,
    first: Point,
    step: Point,
) -> impl Iterator<Item = Point> + '_ {
    let origin = grid.wrap(at);
    let limit = match grid.pillar_width() {
        Some(width) if step.y == 0 => (width / step.x.abs().max(1)).max(1) as usize,
        _ => usize::MAX,
    };
    let start = grid.wrap(at + first);
    std::iter::successors(Some(start), move |&p| Some(grid.wrap(p + step)))
        .take_while(move |&p| grid.in_bounds(p) && p != origin)
        .take(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Cell, Decoration};

    const DOWN: u8 = 0;
    const RIGHT: u8 = 2;

    fn arrow_at(grid: &mut Grid, at: Point, dir: u8, count: u8) -> Symbol {
        grid.set_raw(at, Decoration::arrow(dir, count));
        grid.symbol(at).unwrap()
    }

    #[test]
    fn test_empty_ray_matches_zero_only() {
        let mut grid = Grid::new(7, 7);
        let at = Point::new(3, 3);
        let zero = arrow_at(&mut grid, at, DOWN, 0);
        assert_eq!(check_arrow(&grid, at, zero), Ok(()));

        let one = arrow_at(&mut grid, at, DOWN, 1);
        assert_eq!(
            check_arrow(&grid, at, one),
            Err(Violation::Arrow {
                at,
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_counts_crossings_and_fails_fast() {
        let mut grid = Grid::new(7, 7);
        let at = Point::new(1, 3);
        grid.set(Point::new(2, 3), Cell::Path);
        grid.set(Point::new(4, 3), Cell::Path);
        grid.set(Point::new(6, 3), Cell::Path);

        let three = arrow_at(&mut grid, at, RIGHT, 3);
        assert_eq!(check_arrow(&grid, at, three), Ok(()));

        let one = arrow_at(&mut grid, at, RIGHT, 1);
        assert_eq!(
            check_arrow(&grid, at, one),
            Err(Violation::Arrow {
                at,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_bad_direction() {
        let mut grid = Grid::new(7, 7);
        let at = Point::new(3, 3);
        let symbol = arrow_at(&mut grid, at, 9, 0);
        assert!(matches!(
            check_arrow(&grid, at, symbol),
            Err(Violation::BadParameter { value: 9, .. })
        ));
    }

    #[test]
    fn test_pillar_ray_wraps_once() {
        let mut grid = Grid::new(8, 3).with_pillar(8);
        let at = Point::new(5, 1);
        // Vertical edges on row 1 sit at even columns: 6, 0, 2, 4.
        grid.set(Point::new(0, 1), Cell::Path);
        grid.set(Point::new(4, 1), Cell::Path);
        let two = arrow_at(&mut grid, at, RIGHT, 2);
        assert_eq!(check_arrow(&grid, at, two), Ok(()));
        assert_eq!(ray(&grid, at, Point::new(2, 0)).count(), 4);
    }

    #[test]
    fn test_pillar_diagonal_wraps_until_bottom() {
        let mut grid = Grid::new(8, 5).with_pillar(8);
        let at = Point::new(7, 1);
        let down_right = Point::new(2, 2);
        // Off the right of the seam, the ray comes back in at column 0.
        assert_eq!(
            ray(&grid, at, down_right).collect::<Vec<_>>(),
            vec![Point::new(0, 2), Point::new(2, 4)]
        );
        grid.set(Point::new(0, 2), Cell::Path);
        grid.set(Point::new(2, 4), Cell::Path);
        let two = arrow_at(&mut grid, at, 4, 2);
        assert_eq!(check_arrow(&grid, at, two), Ok(()));
    }
}
