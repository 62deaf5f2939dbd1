// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Raw cell values and panel style flags as the game stores them.

/// An unmarked, traversable cell.
pub const OPEN: i32 = 0;

/// A cell covered by the traced path.
pub const PATH: i32 = 1;

/// Packed decoration values. Colour lives in bits 0..4.
pub struct Decoration;

impl Decoration {
    pub const EXIT: i32 = 0x600001;
    pub const START: i32 = 0x600002;
    pub const DOT: i32 = 0x20;
    pub const DOT_INTERSECTION: i32 = 0x600020;
    pub const GAP: i32 = 0x100000;
    pub const STONE: i32 = 0x100;
    pub const STAR: i32 = 0x200;
    pub const POLY: i32 = 0x400;
    pub const ERASER: i32 = 0x500;
    pub const TRIANGLE: i32 = 0x600;
    pub const ARROW: i32 = 0x700;
    /// Impassable cell, never part of a region.
    pub const EMPTY: i32 = 0xA00;

    /// Selects the base symbol type.
    pub const TYPE_MASK: i32 = 0x700;
    /// Selects the base type plus the new-symbol family nibble.
    pub const FAMILY_MASK: i32 = 0xF000700;
    pub const COLOR_MASK: i32 = 0xF;

    /// Tag of new-symbol family `k` (1..=15).
    pub const fn new_symbol(k: u8) -> i32 {
        Self::ARROW | (((k & 0xF) as i32) << 24)
    }

    /// A triangle requiring `count` adjacent path segments.
    pub const fn triangle(count: u8) -> i32 {
        Self::TRIANGLE | (((count & 0xF) as i32) << 16)
    }

    /// An arrow pointing along `DIRECTIONS[direction]` that must cross
    /// exactly `count` path cells.
    pub const fn arrow(direction: u8, count: u8) -> i32 {
        Self::ARROW | (((count & 0xF) as i32) << 12) | (((direction & 0xF) as i32) << 16)
    }

    /// A new-symbol family member with explicit nibble parameters.
    pub const fn new_symbol_with(k: u8, mid: u8, high: u8) -> i32 {
        Self::new_symbol(k) | (((mid & 0xF) as i32) << 12) | (((high & 0xF) as i32) << 16)
    }
}

/// Bits of the `STYLE_FLAGS` panel field.
pub struct Style;

impl Style {
    pub const SYMMETRICAL: i32 = 0x2;
    pub const HAS_DOTS: i32 = 0x8;
    pub const HAS_STARS: i32 = 0x40;
    /// Doubles as the "symbol violation visible" flag for arrows and triangles.
    pub const HAS_TRIANGLES: i32 = 0x80;
    pub const HAS_STONES: i32 = 0x100;
    pub const HAS_SHAPERS: i32 = 0x2000;
}
