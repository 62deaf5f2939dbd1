// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rebuilds the working grid from the template and the traced edges.
//!
//! Every pass starts again from the template, so tracing the same edges
//! twice yields the same grid. A corrupt trace leaves the previous grid in
//! place and clears `complete`; the next change in the edge count retries.

use crate::geometry::{Cell, Grid, Point};
use crate::path::{PanelLayout, SolutionPoint};
use tracing::debug;

/// Result of one reconstruction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The grid now reflects the trace.
    Traced,
    /// The trace was malformed; the previous grid was kept.
    Aborted,
}

#[derive(Debug, Clone)]
pub struct PathTracer {
    layout: PanelLayout,
    template: Grid,
    grid: Grid,
    complete: bool,
    traced_length: usize,
}

impl PathTracer {
    pub fn new(layout: PanelLayout, template: Grid) -> Self {
        let template = if layout.is_pillar() {
            template.with_pillar(layout.pillar_width)
        } else {
            template
        };
        Self {
            layout,
            grid: template.clone(),
            template,
            complete: false,
            traced_length: 0,
        }
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn template(&self) -> &Grid {
        &self.template
    }

    /// The grid with the current path marked.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the last pass ended exactly at the exit.
    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    /// Number of raw edges seen by the last pass.
    pub fn traced_length(&self) -> usize {
        self.traced_length
    }

    /// Mark `traced` on a fresh copy of the template.
    pub fn trace(&mut self, traced: &[SolutionPoint]) -> TraceOutcome {
        self.traced_length = traced.len();

        let mut edges = traced.to_vec();
        if self.layout.symmetric {
            edges.extend(traced.iter().map(|&edge| self.layout.mirror(edge)));
        }

        match self.mark(&edges) {
            Some((grid, complete)) => {
                self.grid = grid;
                self.complete = complete;
                TraceOutcome::Traced
            }
            None => {
                debug!(edges = traced.len(), "corrupt trace, keeping previous grid");
                self.complete = false;
                TraceOutcome::Aborted
            }
        }
    }

    fn mark(&self, edges: &[SolutionPoint]) -> Option<(Grid, bool)> {
        let layout = &self.layout;
        let exit = layout.exit_point;
        let mut grid = self.template.clone();
        let mut complete = false;

        for edge in edges {
            let (p1, p2) = (edge.point_a, edge.point_b);
            if p1 == exit || p2 == exit {
                complete = true;
                continue;
            }
            if p1 > exit || p2 > exit {
                continue;
            }
            if (p1 == 0 && p2 == 0) || p1 < 0 || p2 < 0 {
                return None;
            }

            let a = layout.node_point(p1);
            let b = layout.node_point(p2);
            let midpoint = self.midpoint(a, b);
            for p in [a, b, midpoint] {
                if !grid.set(p, Cell::Path) {
                    return None;
                }
            }

            let at_exit = edge.touches(layout.exit_pos)
                || (layout.symmetric && edge.touches(layout.exit_pos_sym));
            complete = at_exit && !complete;
        }
        Some((grid, complete))
    }

    /// The edge cell between two adjacent nodes.
    ///
    /// On a pillar an edge across the seam joins the first and last node
    /// columns; its cell is the rightmost column.
    fn midpoint(&self, a: Point, b: Point) -> Point {
        let y = (a.y + b.y) / 2;
        if self.layout.is_pillar() && (a.x - b.x).abs() > 2 {
            Point::new(self.layout.width - 1, y)
        } else {
            Point::new((a.x + b.x) / 2, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracer() -> PathTracer {
        PathTracer::new(PanelLayout::new(7, 7, 12), Grid::new(7, 7))
    }

    #[test]
    fn test_empty_trace_keeps_template() {
        let mut t = tracer();
        assert_eq!(t.trace(&[]), TraceOutcome::Traced);
        assert_eq!(t.grid(), t.template());
        assert!(!t.complete());
    }

    #[test]
    fn test_marks_nodes_and_midpoint() {
        let mut t = tracer();
        t.trace(&[SolutionPoint::new(0, 1)]);
        assert!(t.grid().is_path(Point::new(0, 6)));
        assert!(t.grid().is_path(Point::new(1, 6)));
        assert!(t.grid().is_path(Point::new(2, 6)));
        assert_eq!(t.grid().path_points().count(), 3);
        assert_eq!(t.traced_length(), 1);
    }

    #[test]
    fn test_complete_only_when_ending_at_exit() {
        let mut t = tracer();
        t.trace(&[SolutionPoint::new(4, 8), SolutionPoint::new(8, 12)]);
        assert!(t.complete());

        t.trace(&[
            SolutionPoint::new(4, 8),
            SolutionPoint::new(8, 12),
            SolutionPoint::new(12, 16),
        ]);
        assert!(t.complete());

        // Passing through the exit node and leaving again.
        t.trace(&[SolutionPoint::new(8, 12), SolutionPoint::new(12, 13)]);
        assert!(!t.complete());
    }

    #[test]
    fn test_corrupt_trace_keeps_previous_grid() {
        let mut t = tracer();
        t.trace(&[SolutionPoint::new(0, 1), SolutionPoint::new(1, 12)]);
        let before = t.grid().clone();

        let outcome = t.trace(&[SolutionPoint::new(1, 2), SolutionPoint::new(0, 0)]);
        assert_eq!(outcome, TraceOutcome::Aborted);
        assert_eq!(t.grid(), &before);
        assert!(!t.complete());
        assert_eq!(t.traced_length(), 2);

        assert_eq!(t.trace(&[SolutionPoint::new(-1, 2)]), TraceOutcome::Aborted);
    }

    #[test]
    fn test_indices_past_exit_are_skipped() {
        let mut t = tracer();
        assert_eq!(t.trace(&[SolutionPoint::new(17, 18)]), TraceOutcome::Traced);
        assert_eq!(t.grid().path_points().count(), 0);
    }

    #[test]
    fn test_pillar_seam_edge_marks_last_column() {
        let layout = PanelLayout::new(8, 5, 0).with_pillar(8);
        let mut t = PathTracer::new(layout, Grid::new(8, 5));
        // Node 3 is the last column of the bottom row, node 0 the first.
        t.trace(&[SolutionPoint::new(3, 0)]);
        assert!(t.grid().is_path(Point::new(6, 4)));
        assert!(t.grid().is_path(Point::new(0, 4)));
        assert!(t.grid().is_path(Point::new(7, 4)));
        assert!(!t.grid().is_path(Point::new(3, 4)));
    }

    #[test]
    fn test_symmetric_trace_adds_mirror() {
        let layout = PanelLayout::new(7, 7, 12).with_symmetry(3);
        let mut t = PathTracer::new(layout, Grid::new(7, 7));
        t.trace(&[SolutionPoint::new(0, 1)]);
        assert!(t.grid().is_path(Point::new(1, 6)));
        assert!(t.grid().is_path(Point::new(5, 0)));
        assert_eq!(t.traced_length(), 1);
    }
}
