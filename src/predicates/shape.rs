// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local path shapes at a node, read from its junction fingerprint.

use crate::geometry::grid::{JUNCTION_DOWN, JUNCTION_LEFT, JUNCTION_RIGHT, JUNCTION_UP};
use crate::geometry::Point;

/// Number of shape patterns counted around a region.
pub const PATTERN_COUNT: usize = 14;

/// A gap on a cell with odd x and even y.
pub const GAP_HORIZONTAL: usize = 12;
/// A gap on a cell with even x and odd y.
pub const GAP_VERTICAL: usize = 13;

/// Offsets from a cell to the four nodes at its corners.
pub const CELL_CORNERS: [Point; 4] = [
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
    Point::new(-1, 1),
];

/// Fingerprints that count as a corner of the path.
pub const CORNER_SHAPES: [u8; 8] = [
    JUNCTION_UP | JUNCTION_RIGHT,
    JUNCTION_RIGHT | JUNCTION_DOWN,
    JUNCTION_DOWN | JUNCTION_LEFT,
    JUNCTION_LEFT | JUNCTION_UP,
    0b0111,
    0b1011,
    0b1101,
    0b1110,
];

/// Pattern index of a node fingerprint, `None` for an untouched node.
pub fn node_pattern(fingerprint: u8) -> Option<usize> {
    const UP_DOWN: u8 = JUNCTION_UP | JUNCTION_DOWN;
    const LEFT_RIGHT: u8 = JUNCTION_LEFT | JUNCTION_RIGHT;
    let pattern = match fingerprint & 0xF {
        0 => return None,
        JUNCTION_UP => 0,
        JUNCTION_RIGHT => 1,
        JUNCTION_DOWN => 2,
        JUNCTION_LEFT => 3,
        UP_DOWN => 4,
        LEFT_RIGHT => 5,
        f if f == CORNER_SHAPES[0] => 6,
        f if f == CORNER_SHAPES[1] => 7,
        f if f == CORNER_SHAPES[2] => 8,
        f if f == CORNER_SHAPES[3] => 9,
        0b1111 => 11,
        _ => 10,
    };
    Some(pattern)
}

/// Pattern index of a gap cell, by the parity of its coordinates.
pub fn gap_pattern(p: Point) -> Option<usize> {
    match (p.x.rem_euclid(2), p.y.rem_euclid(2)) {
        (1, 0) => Some(GAP_HORIZONTAL),
        (0, 1) => Some(GAP_VERTICAL),
        _ => None,
    }
}

pub fn is_corner(fingerprint: u8) -> bool {
    CORNER_SHAPES.contains(&fingerprint)
}
