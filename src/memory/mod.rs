// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Access to panel records in the host process.
//!
//! The watchdogs and the randomizer only see [`PanelMemory`]: a store of
//! byte ranges keyed by `(panel, field)`. Pointer-valued fields are read
//! through [`PanelMemory::read_indirect`], which reports a null pointer as
//! [`MemoryError::NullPointer`]. Typed access lives in [`PanelMemoryExt`].
//!
//! Each call is one transaction. Nothing orders one panel's writes against
//! another panel's reads.

pub mod codec;
pub mod field;
pub mod in_memory;

pub use codec::{decode_all, encode_all, FieldValue};
pub use field::{Field, PanelId, POINTER_SIZE};
pub use in_memory::InMemoryPanels;

use thiserror::Error;

/// Failures of the memory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("panel {0} is not mapped")]
    UnknownPanel(PanelId),

    #[error("field {field} of panel {panel} is not mapped")]
    UnknownField { panel: PanelId, field: Field },

    #[error("field {field} of panel {panel} is a null pointer")]
    NullPointer { panel: PanelId, field: Field },

    #[error("field {field} of panel {panel}: wanted {wanted} bytes, got {got}")]
    ShortRead {
        panel: PanelId,
        field: Field,
        wanted: usize,
        got: usize,
    },

    #[error("memory store lock poisoned")]
    Poisoned,
}

/// Raw byte access to panel fields.
pub trait PanelMemory: Send + Sync {
    /// Read `len` bytes stored directly in the field.
    fn read_bytes(&self, panel: PanelId, field: Field, len: usize) -> Result<Vec<u8>, MemoryError>;

    /// Follow the pointer stored in the field and read `len` bytes behind it.
    fn read_indirect(
        &self,
        panel: PanelId,
        field: Field,
        len: usize,
    ) -> Result<Vec<u8>, MemoryError>;

    /// Overwrite the leading bytes of the field.
    fn write_bytes(&self, panel: PanelId, field: Field, bytes: &[u8]) -> Result<(), MemoryError>;
}

/// Typed helpers over [`PanelMemory`].
pub trait PanelMemoryExt: PanelMemory {
    fn read<T: FieldValue>(&self, panel: PanelId, field: Field) -> Result<T, MemoryError> {
        let bytes = self.read_bytes(panel, field, T::SIZE)?;
        Ok(T::decode(&bytes))
    }

    /// Read `count` consecutive values stored directly in the field.
    fn read_values<T: FieldValue>(
        &self,
        panel: PanelId,
        field: Field,
        count: usize,
    ) -> Result<Vec<T>, MemoryError> {
        let bytes = self.read_bytes(panel, field, count * T::SIZE)?;
        Ok(decode_all(&bytes))
    }

    /// Read `count` values from the array the field points at.
    fn read_array<T: FieldValue>(
        &self,
        panel: PanelId,
        field: Field,
        count: usize,
    ) -> Result<Vec<T>, MemoryError> {
        let bytes = self.read_indirect(panel, field, count * T::SIZE)?;
        Ok(decode_all(&bytes))
    }

    fn write<T: FieldValue>(
        &self,
        panel: PanelId,
        field: Field,
        values: &[T],
    ) -> Result<(), MemoryError> {
        self.write_bytes(panel, field, &encode_all(values))
    }

    /// Ask the game to redraw the panel after a significant write.
    fn request_redraw(&self, panel: PanelId) -> Result<(), MemoryError> {
        self.write::<i32>(panel, Field::NeedsRedraw, &[1])
    }
}

impl<M: PanelMemory + ?Sized> PanelMemoryExt for M {}
