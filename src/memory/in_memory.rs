// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A process-local [`PanelMemory`] used by tests and the offline CLI.
//!
//! Pointer fields hold addresses into a private heap, so swapping a pointer
//! field between two panels swaps the arrays behind it, as in the game.

use crate::memory::codec::{encode_all, FieldValue};
use crate::memory::{Field, MemoryError, PanelId, PanelMemory, POINTER_SIZE};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// First address handed out by the fake heap.
const HEAP_BASE: u64 = 0x1000;

/// Default number of writes the log remembers.
pub const WRITE_LOG_LIMIT: usize = 4096;

#[derive(Debug, Default)]
struct Store {
    fields: HashMap<(PanelId, Field), Vec<u8>>,
    heap: HashMap<u64, Vec<u8>>,
    next_address: u64,
    writes: VecDeque<(PanelId, Field)>,
}

#[derive(Debug)]
pub struct InMemoryPanels {
    store: Mutex<Store>,
    write_log_limit: usize,
}

impl Default for InMemoryPanels {
    fn default() -> Self {
        Self {
            store: Mutex::default(),
            write_log_limit: WRITE_LOG_LIMIT,
        }
    }
}

impl InMemoryPanels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the most recent `limit` entries in the write log.
    pub fn with_write_log_limit(mut self, limit: usize) -> Self {
        self.write_log_limit = limit;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, MemoryError> {
        self.store.lock().map_err(|_| MemoryError::Poisoned)
    }

    /// Store values directly in a field, replacing what was there.
    pub fn set<T: FieldValue>(&self, panel: PanelId, field: Field, values: &[T]) -> Result<(), MemoryError> {
        let mut store = self.lock()?;
        store.fields.insert((panel, field), encode_all(values));
        Ok(())
    }

    /// Allocate an array on the heap and point the field at it.
    ///
    /// Returns the address written into the field.
    pub fn set_array<T: FieldValue>(
        &self,
        panel: PanelId,
        field: Field,
        values: &[T],
    ) -> Result<u64, MemoryError> {
        let address = self.alloc(values)?;
        self.set::<u64>(panel, field, &[address])?;
        Ok(address)
    }

    /// Allocate an array on the heap without pointing any field at it.
    pub fn alloc<T: FieldValue>(&self, values: &[T]) -> Result<u64, MemoryError> {
        let mut store = self.lock()?;
        if store.next_address == 0 {
            store.next_address = HEAP_BASE;
        }
        let address = store.next_address;
        store.next_address += HEAP_BASE;
        store.heap.insert(address, encode_all(values));
        Ok(address)
    }

    /// Make a pointer field null.
    pub fn clear_pointer(&self, panel: PanelId, field: Field) -> Result<(), MemoryError> {
        self.set::<u64>(panel, field, &[0])
    }

    /// The most recent `(panel, field)` pairs written through
    /// [`PanelMemory::write_bytes`], oldest first.
    pub fn write_log(&self) -> Result<Vec<(PanelId, Field)>, MemoryError> {
        Ok(self.lock()?.writes.iter().copied().collect())
    }

    /// Number of logged writes to one field. Writes that have fallen off
    /// the log are not counted.
    pub fn write_count(&self, panel: PanelId, field: Field) -> Result<usize, MemoryError> {
        let store = self.lock()?;
        Ok(store.writes.iter().filter(|&&w| w == (panel, field)).count())
    }
}

fn take(bytes: &[u8], panel: PanelId, field: Field, len: usize) -> Result<Vec<u8>, MemoryError> {
    if bytes.len() < len {
        return Err(MemoryError::ShortRead {
            panel,
            field,
            wanted: len,
            got: bytes.len(),
        });
    }
    Ok(bytes[..len].to_vec())
}

impl PanelMemory for InMemoryPanels {
    fn read_bytes(&self, panel: PanelId, field: Field, len: usize) -> Result<Vec<u8>, MemoryError> {
        let store = self.lock()?;
        let bytes = store
            .fields
            .get(&(panel, field))
            .ok_or(MemoryError::UnknownField { panel, field })?;
        take(bytes, panel, field, len)
    }

    fn read_indirect(
        &self,
        panel: PanelId,
        field: Field,
        len: usize,
    ) -> Result<Vec<u8>, MemoryError> {
        let pointer = self.read_bytes(panel, field, POINTER_SIZE)?;
        let address = u64::decode(&pointer);
        if address == 0 {
            return Err(MemoryError::NullPointer { panel, field });
        }
        let store = self.lock()?;
        let bytes = store
            .heap
            .get(&address)
            .ok_or(MemoryError::NullPointer { panel, field })?;
        take(bytes, panel, field, len)
    }

    fn write_bytes(&self, panel: PanelId, field: Field, bytes: &[u8]) -> Result<(), MemoryError> {
        let mut store = self.lock()?;
        let slot = store.fields.entry((panel, field)).or_default();
        if slot.len() < bytes.len() {
            slot.resize(bytes.len(), 0);
        }
        slot[..bytes.len()].copy_from_slice(bytes);
        if self.write_log_limit > 0 {
            if store.writes.len() == self.write_log_limit {
                store.writes.pop_front();
            }
            store.writes.push_back((panel, field));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::PanelMemoryExt;

    const PANEL: PanelId = PanelId(0x00A1);

    #[test]
    fn test_typed_round_trip() {
        let memory = InMemoryPanels::new();
        memory.set::<i32>(PANEL, Field::StyleFlags, &[0x80]).unwrap();
        assert_eq!(memory.read::<i32>(PANEL, Field::StyleFlags), Ok(0x80));

        memory.write::<f32>(PANEL, Field::Power, &[1.0, 1.0]).unwrap();
        assert_eq!(memory.read_values::<f32>(PANEL, Field::Power, 2), Ok(vec![1.0, 1.0]));
        assert_eq!(memory.write_count(PANEL, Field::Power), Ok(1));
    }

    #[test]
    fn test_unknown_and_short_reads() {
        let memory = InMemoryPanels::new();
        assert_eq!(
            memory.read::<i32>(PANEL, Field::Solved),
            Err(MemoryError::UnknownField {
                panel: PANEL,
                field: Field::Solved
            })
        );
        memory.set::<u8>(PANEL, Field::Solved, &[1]).unwrap();
        assert!(matches!(
            memory.read::<i32>(PANEL, Field::Solved),
            Err(MemoryError::ShortRead { wanted: 4, got: 1, .. })
        ));
    }

    #[test]
    fn test_arrays_behind_pointers() {
        let memory = InMemoryPanels::new();
        memory.set_array::<i32>(PANEL, Field::DotFlags, &[3, 4, 5]).unwrap();
        assert_eq!(memory.read_array::<i32>(PANEL, Field::DotFlags, 2), Ok(vec![3, 4]));

        memory.clear_pointer(PANEL, Field::DotFlags).unwrap();
        assert_eq!(
            memory.read_array::<i32>(PANEL, Field::DotFlags, 2),
            Err(MemoryError::NullPointer {
                panel: PANEL,
                field: Field::DotFlags
            })
        );
    }

    #[test]
    fn test_write_log_keeps_latest() {
        let memory = InMemoryPanels::new().with_write_log_limit(2);
        memory.write::<i32>(PANEL, Field::Solved, &[1]).unwrap();
        memory.write::<i32>(PANEL, Field::NeedsRedraw, &[1]).unwrap();
        memory.write::<i32>(PANEL, Field::StyleFlags, &[0]).unwrap();
        assert_eq!(
            memory.write_log(),
            Ok(vec![(PANEL, Field::NeedsRedraw), (PANEL, Field::StyleFlags)])
        );
        assert_eq!(memory.write_count(PANEL, Field::Solved), Ok(0));
    }

    #[test]
    fn test_write_keeps_trailing_bytes() {
        let memory = InMemoryPanels::new();
        memory.set::<u8>(PANEL, Field::PathColor, &[1, 2, 3, 4, 5, 6]).unwrap();
        memory.write_bytes(PANEL, Field::PathColor, &[9, 9]).unwrap();
        assert_eq!(
            memory.read_bytes(PANEL, Field::PathColor, 6),
            Ok(vec![9, 9, 3, 4, 5, 6])
        );
    }
}
