// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rectangular or cylindrical cell lattice.
//!
//! Cells are addressed by [`Point`]; `x` grows to the right and `y` grows
//! downwards. Reads outside the grid return `None` (or [`Cell::Open`] for
//! the convenience accessors) so predicates never index out of range.

use crate::geometry::point::Point;
use crate::geometry::symbol::{Cell, Symbol};

/// Junction fingerprint bit for a path segment above a node.
pub const JUNCTION_UP: u8 = 0b0001;
/// Junction fingerprint bit for a path segment right of a node.
pub const JUNCTION_RIGHT: u8 = 0b0010;
/// Junction fingerprint bit for a path segment below a node.
pub const JUNCTION_DOWN: u8 = 0b0100;
/// Junction fingerprint bit for a path segment left of a node.
pub const JUNCTION_LEFT: u8 = 0b1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Set for pillar panels, whose x axis wraps modulo this width.
    pillar_width: Option<i32>,
    /// Row-major: index `y * width + x`.
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-open grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pillar_width: None,
            cells: vec![Cell::Open; (width * height) as usize],
        }
    }

    /// Decode a grid from packed rows (`rows[y][x]`).
    ///
    /// Short rows are padded with open cells; overlong rows are truncated.
    pub fn from_rows(rows: &[Vec<i32>]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &raw) in row.iter().enumerate() {
                grid.set_raw(Point::new(x as i32, y as i32), raw);
            }
        }
        grid
    }

    /// Turn this grid into a pillar that wraps every `pillar_width` columns.
    pub fn with_pillar(mut self, pillar_width: i32) -> Self {
        self.pillar_width = (pillar_width > 0).then_some(pillar_width);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pillar_width(&self) -> Option<i32> {
        self.pillar_width
    }

    pub fn is_pillar(&self) -> bool {
        self.pillar_width.is_some()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The cell at `p`, or open if `p` is outside the grid.
    pub fn cell(&self, p: Point) -> Cell {
        self.get(p).unwrap_or_default()
    }

    pub fn symbol(&self, p: Point) -> Option<Symbol> {
        self.cell(p).symbol()
    }

    pub fn is_path(&self, p: Point) -> bool {
        self.cell(p).is_path()
    }

    /// Overwrite the cell at `p`. Returns false if `p` is outside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn set_raw(&mut self, p: Point, raw: i32) -> bool {
        self.set(p, Cell::decode(raw))
    }

    /// Wrap the x coordinate around the pillar seam, if any.
    pub fn wrap(&self, p: Point) -> Point {
        match self.pillar_width {
            Some(w) => Point::new(p.x.rem_euclid(w), p.y),
            None => p,
        }
    }

    /// True for cells on the outer frame. Pillars have no left or right frame.
    pub fn is_frame(&self, p: Point) -> bool {
        let on_row = p.y == 0 || p.y == self.height - 1;
        let on_column = !self.is_pillar() && (p.x == 0 || p.x == self.width - 1);
        on_row || on_column
    }

    /// In bounds and off the frame.
    pub fn is_interior(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_frame(p)
    }

    /// Which orthogonal neighbours of `p` carry the path.
    pub fn junction(&self, p: Point) -> u8 {
        let neighbours = [
            (Point::new(p.x, p.y - 1), JUNCTION_UP),
            (Point::new(p.x + 1, p.y), JUNCTION_RIGHT),
            (Point::new(p.x, p.y + 1), JUNCTION_DOWN),
            (Point::new(p.x - 1, p.y), JUNCTION_LEFT),
        ];
        neighbours
            .into_iter()
            .filter(|&(n, _)| self.is_path(self.wrap(n)))
            .fold(0, |fingerprint, (_, bit)| fingerprint | bit)
    }

    /// Every cell position in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// Interior cells with odd/odd coordinates, the region slots.
    pub fn slots(&self) -> impl Iterator<Item = Point> + '_ {
        self.points()
            .filter(move |&p| p.is_odd_odd() && self.is_interior(p))
    }

    /// Every decoded symbol with its position.
    pub fn symbols(&self) -> impl Iterator<Item = (Point, Symbol)> + '_ {
        self.points()
            .filter_map(move |p| self.symbol(p).map(|s| (p, s)))
    }

    /// Positions currently marked as path.
    pub fn path_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self.is_path(p))
    }
}
