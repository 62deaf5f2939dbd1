// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Traced edges and the panel geometry needed to place them on the grid.
//!
//! The game reports the player's path as pairs of node indices. Nodes are
//! numbered row by row from the bottom-left corner, `nodes_per_row` to a
//! row, so node `n` sits at grid column `(n % nodes_per_row) * 2` and grid
//! row `height - 1 - (n / nodes_per_row) * 2`.

pub mod tracer;

pub use tracer::{PathTracer, TraceOutcome};

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One traced edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SolutionPoint {
    pub point_a: i32,
    pub point_b: i32,
}

impl SolutionPoint {
    pub const fn new(point_a: i32, point_b: i32) -> Self {
        Self { point_a, point_b }
    }

    pub fn touches(&self, node: i32) -> bool {
        self.point_a == node || self.point_b == node
    }
}

impl From<(i32, i32)> for SolutionPoint {
    fn from((a, b): (i32, i32)) -> Self {
        SolutionPoint::new(a, b)
    }
}

/// Static geometry of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub width: i32,
    pub height: i32,
    /// Nonzero for pillar panels, whose x axis wraps at this width.
    #[serde(default)]
    pub pillar_width: i32,
    /// Sentinel node index standing for the exit.
    pub exit_point: i32,
    /// The node the exit hangs off.
    pub exit_pos: i32,
    /// Mirror image of `exit_pos` on symmetric panels.
    #[serde(default)]
    pub exit_pos_sym: i32,
    #[serde(default)]
    pub symmetric: bool,
}

impl PanelLayout {
    /// A flat panel whose exit sentinel is the first index past the lattice.
    pub fn new(width: i32, height: i32, exit_pos: i32) -> Self {
        let mut layout = Self {
            width,
            height,
            pillar_width: 0,
            exit_point: 0,
            exit_pos,
            exit_pos_sym: 0,
            symmetric: false,
        };
        layout.exit_point = layout.nodes_per_row() * (height / 2 + 1);
        layout
    }

    /// Wrap the panel around a pillar of the given width.
    pub fn with_pillar(mut self, pillar_width: i32) -> Self {
        self.pillar_width = pillar_width;
        self.exit_point = self.nodes_per_row() * (self.height / 2 + 1);
        self
    }

    /// Mark the panel as point-symmetric, with the exit's mirror node.
    pub fn with_symmetry(mut self, exit_pos_sym: i32) -> Self {
        self.symmetric = true;
        self.exit_pos_sym = exit_pos_sym;
        self
    }

    pub fn is_pillar(&self) -> bool {
        self.pillar_width > 0
    }

    pub fn nodes_per_row(&self) -> i32 {
        if self.is_pillar() {
            self.width / 2
        } else {
            self.width / 2 + 1
        }
    }

    /// Nodes of the flat lattice, the range the mirror map works over.
    pub fn mirror_node_count(&self) -> i32 {
        (self.width / 2 + 1) * (self.height / 2 + 1)
    }

    /// Grid position of a node index.
    pub fn node_point(&self, node: i32) -> Point {
        let per_row = self.nodes_per_row().max(1);
        Point::new(
            (node % per_row) * 2,
            self.height - 1 - (node / per_row) * 2,
        )
    }

    /// The mirror image of a traced edge on a symmetric panel.
    ///
    /// Edges into the exit mirror onto the exit itself.
    pub fn mirror(&self, edge: SolutionPoint) -> SolutionPoint {
        if edge.point_a >= self.exit_point || edge.point_b >= self.exit_point {
            return SolutionPoint::new(self.exit_point, self.exit_point);
        }
        let last = self.mirror_node_count() - 1;
        SolutionPoint::new(last - edge.point_a, last - edge.point_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_numbering_starts_bottom_left() {
        let layout = PanelLayout::new(7, 7, 12);
        assert_eq!(layout.exit_point, 16);
        assert_eq!(layout.node_point(0), Point::new(0, 6));
        assert_eq!(layout.node_point(3), Point::new(6, 6));
        assert_eq!(layout.node_point(12), Point::new(0, 0));
        assert_eq!(layout.node_point(6), Point::new(4, 4));
    }

    #[test]
    fn test_pillar_rows_are_narrower() {
        let layout = PanelLayout::new(8, 5, 0).with_pillar(8);
        assert_eq!(layout.nodes_per_row(), 4);
        assert_eq!(layout.exit_point, 12);
        assert_eq!(layout.node_point(5), Point::new(2, 2));
    }

    #[test]
    fn test_mirror_is_point_reflection() {
        let layout = PanelLayout::new(7, 7, 12).with_symmetry(3);
        assert_eq!(layout.mirror(SolutionPoint::new(0, 1)), SolutionPoint::new(15, 14));
        assert_eq!(layout.mirror(SolutionPoint::new(12, 16)), SolutionPoint::new(16, 16));
        let p = layout.node_point(1);
        let q = layout.node_point(14);
        assert_eq!(q, Point::new(6 - p.x, 6 - p.y));
    }
}
