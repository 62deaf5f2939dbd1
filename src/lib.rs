// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Live symbol validation and panel randomization for grid path-tracing
//! puzzles.
//!
//! A watchdog polls a running game through the [`memory::PanelMemory`]
//! collaborator. When the player's traced path changes, the path is laid
//! over the panel's template grid and every symbol on the panel is judged.
//! The verdict is written back as a style flag the game renders.
//!
//! # Architecture
//!
//! ## Static data
//!
//! Built once per panel and never changed while it is watched:
//! - the template [`geometry::Grid`] of decoded cells
//! - the [`path::PanelLayout`]: dimensions, pillar wrap, exit, symmetry
//!
//! ## Per-trace data
//!
//! Rebuilt from scratch whenever the traced edge count changes:
//! - the traced grid produced by [`path::PathTracer`]
//! - regions flood-filled by [`region`]
//! - the first [`predicates::Violation`], if any
//!
//! # Modules
//!
//! - [`geometry`]: points, cells, grids and orientation
//! - [`path`]: turning traced node pairs into path cells
//! - [`region`]: the open area around a symbol
//! - [`predicates`]: one check per symbol family
//! - [`watchdog`]: the pollers and their tokio runner
//! - [`randomizer`]: swapping puzzles between panels
//! - [`puzzle`]: symbol inventories for generated puzzles
//! - [`config`]: JSON snapshots and watchdog specs
//! - [`memory`]: the memory collaborator and an in-process store
//! - [`state`]: evaluation counters

pub mod config;
pub mod geometry;
pub mod memory;
pub mod path;
pub mod predicates;
pub mod puzzle;
pub mod randomizer;
pub mod region;
pub mod state;
pub mod watchdog;

// Re-export commonly used types
pub use config::{ConfigError, PanelSnapshot, WatchdogSpec};
pub use geometry::{Cell, Grid, Point, Symbol, SymbolKind};
pub use memory::{InMemoryPanels, MemoryError, PanelId, PanelMemory};
pub use path::{PanelLayout, PathTracer, SolutionPoint};
pub use predicates::{check_panel, Violation};
pub use randomizer::{RandomizeError, Randomizer, SwapFlags};
pub use watchdog::{spawn, PanelState, Watchdog};
