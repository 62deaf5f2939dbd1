// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shuffling whole panels through the in-process store.

use panel_watchdog::memory::{Field, InMemoryPanels, PanelId, PanelMemoryExt};
use panel_watchdog::randomizer::{Constraints, RandomizeError, Randomizer, SwapFlags};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;

/// Give `panel` every field the flags select, zeroed, and a tagged
/// decoration array.
fn install(memory: &InMemoryPanels, panel: PanelId, flags: SwapFlags) {
    for (field, size) in flags.fields() {
        memory.set::<u8>(panel, field, &vec![0; size]).unwrap();
    }
    memory
        .set::<i32>(panel, Field::NumDecorations, &[2])
        .unwrap();
    memory
        .set_array::<i32>(panel, Field::Decorations, &[panel.0 as i32, 0x600])
        .unwrap();
    memory.set::<i32>(panel, Field::Target, &[panel.0 as i32]).unwrap();
}

fn decorations(memory: &InMemoryPanels, panel: PanelId) -> Vec<i32> {
    memory.read_array::<i32>(panel, Field::Decorations, 2).unwrap()
}

#[test]
fn test_line_swap_moves_puzzle_data() {
    let memory = Arc::new(InMemoryPanels::new());
    let (a, b) = (PanelId(0x00698), PanelId(0x0048F));
    install(&memory, a, SwapFlags::LINES);
    install(&memory, b, SwapFlags::LINES);
    memory.set::<f32>(a, Field::PathWidthScale, &[0.5]).unwrap();

    let randomizer = Randomizer::new(memory.clone(), ChaCha20Rng::seed_from_u64(0));
    randomizer.swap_panels(a, b, SwapFlags::LINES).unwrap();

    assert_eq!(decorations(&memory, a), vec![b.0 as i32, 0x600]);
    assert_eq!(decorations(&memory, b), vec![a.0 as i32, 0x600]);
    assert_eq!(memory.read::<f32>(b, Field::PathWidthScale).unwrap(), 0.5);
    // Targets are a separate group and stay put.
    assert_eq!(memory.read::<i32>(a, Field::Target).unwrap(), a.0 as i32);
}

#[test]
fn test_constrained_shuffle_leaves_no_puzzle_in_place() {
    let flags = SwapFlags::LINES;
    let locations: Vec<PanelId> = (0x100..0x10C).map(PanelId).collect();
    let constraints = Constraints::new(flags)
        .allow(1, locations[4..8].iter().copied())
        .allow(6, locations[2..].iter().copied())
        .with_path_width_scale(0.8);

    for seed in 0..10 {
        let memory = Arc::new(InMemoryPanels::new());
        for &panel in &locations {
            install(&memory, panel, flags);
        }
        let mut puzzles = locations.clone();
        let mut randomizer = Randomizer::new(memory.clone(), ChaCha20Rng::seed_from_u64(seed));
        randomizer
            .randomize_constrained(&mut puzzles, &constraints)
            .unwrap();

        for (slot, (&location, &puzzle)) in locations.iter().zip(&puzzles).enumerate() {
            assert_ne!(location, puzzle, "slot {slot} kept its puzzle");
            assert_eq!(decorations(&memory, location)[0], puzzle.0 as i32);
        }
        assert!(locations[4..8].contains(&puzzles[1]));
        assert!(locations[2..].contains(&puzzles[6]));
        assert_eq!(
            memory.read::<f32>(locations[0], Field::PathWidthScale).unwrap(),
            0.8
        );
    }
}

#[test]
fn test_impossible_whitelist_is_reported() {
    let memory = Arc::new(InMemoryPanels::new());
    let locations: Vec<PanelId> = (1..=4).map(PanelId).collect();
    for &panel in &locations {
        install(&memory, panel, SwapFlags::TARGETS);
    }
    // Slot 2 may only take a puzzle that has already been placed.
    let constraints = Constraints::new(SwapFlags::TARGETS)
        .allow(0, [PanelId(2)])
        .allow(2, [PanelId(2)])
        .with_max_attempts(100);
    let mut puzzles = locations.clone();
    let mut randomizer = Randomizer::new(memory, ChaCha20Rng::seed_from_u64(4));
    assert_eq!(
        randomizer.randomize_constrained(&mut puzzles, &constraints),
        Err(RandomizeError::Unsatisfiable {
            slot: 2,
            attempts: 100
        })
    );
}
