// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-watchdog mutable state.

pub mod statistics;

pub use statistics::{Counters, Statistics};
