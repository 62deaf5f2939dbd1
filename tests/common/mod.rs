// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use panel_watchdog::geometry::Decoration;
use panel_watchdog::memory::{Field, InMemoryPanels, PanelId};
use panel_watchdog::{PanelSnapshot, SolutionPoint};

pub const PANEL: PanelId = PanelId(0x0056E);

/// Along the top, down a zig-zag, then off the bottom-left corner.
///
/// Each of the panel's three triangles touches this path exactly once.
pub const SOLUTION: [(i32, i32); 8] = [
    (0, 1),
    (1, 2),
    (2, 6),
    (6, 5),
    (5, 4),
    (4, 8),
    (8, 12),
    (12, 16),
];

/// A 7x7 panel with one-segment triangles on the diagonal, exit off node 12.
pub fn triangle_panel(traced: &[(i32, i32)]) -> PanelSnapshot {
    let mut rows = vec![vec![0; 7]; 7];
    for i in [1, 3, 5] {
        rows[i][i] = Decoration::triangle(1);
    }
    PanelSnapshot {
        width: 7,
        height: 7,
        pillar_width: 0,
        style: 0,
        exit_pos: 12,
        exit_pos_sym: None,
        rows,
        traced: traced.to_vec(),
    }
}

/// Replace the trace stored for `panel`.
pub fn retrace(memory: &InMemoryPanels, panel: PanelId, traced: &[(i32, i32)]) {
    let edges: Vec<SolutionPoint> = traced.iter().copied().map(SolutionPoint::from).collect();
    memory
        .set::<i32>(panel, Field::TracedEdges, &[edges.len() as i32])
        .unwrap();
    memory
        .set_array(panel, Field::TracedEdgeData, &edges)
        .unwrap();
}

/// Adjacent node pair on a `per_row` x `per_row` lattice.
///
/// `horizontal` picks the right neighbour (or left, at the end of a row);
/// otherwise the node below (or above, on the last row).
pub fn lattice_edge(per_row: i32, node: i32, horizontal: bool) -> (i32, i32) {
    if horizontal {
        if node % per_row == per_row - 1 {
            (node, node - 1)
        } else {
            (node, node + 1)
        }
    } else if node / per_row == per_row - 1 {
        (node, node - per_row)
    } else {
        (node, node + per_row)
    }
}
