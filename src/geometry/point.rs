// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid coordinates and the lattice direction table.
//!
//! Even coordinates are nodes, odd coordinates are edges or symbol slots.
//! One lattice step is two grid units.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Distance between adjacent nodes in grid units.
pub const LATTICE_STEP: i32 = 2;

/// A grid coordinate.
///
/// Ordering is lexicographic on `(x, y)` so points can live in ordered sets
/// and iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Half of this offset, used to step from a cell onto the edge between
    /// it and its lattice neighbour.
    pub const fn half(self) -> Self {
        Self::new(self.x / 2, self.y / 2)
    }

    /// Dot product, used for half-plane tests.
    pub const fn dot(self, other: Point) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate an offset a quarter turn.
    pub const fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub const fn is_odd_odd(self) -> bool {
        self.x & 1 == 1 && self.y & 1 == 1
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight lattice directions, indexed by the direction nibble of a symbol.
///
/// The first four are orthogonal: down, up, right, left (y grows downwards).
pub const DIRECTIONS: [Point; 8] = [
    Point::new(0, 2),
    Point::new(0, -2),
    Point::new(2, 0),
    Point::new(-2, 0),
    Point::new(2, 2),
    Point::new(2, -2),
    Point::new(-2, -2),
    Point::new(-2, 2),
];

/// Orthogonal lattice steps.
pub const ORTHOGONAL: [Point; 4] = [DIRECTIONS[0], DIRECTIONS[1], DIRECTIONS[2], DIRECTIONS[3]];

/// Look up a direction by its nibble, `None` past the end of the table.
pub fn direction(index: u8) -> Option<Point> {
    DIRECTIONS.get(index as usize).copied()
}
