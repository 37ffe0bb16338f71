//! Instruction Memory.
//!
//! This module implements the store the fetch stage reads from. It provides:
//! 1. **Placement:** Words are appended in program order at byte addresses 0, 4, 8, ...
//! 2. **Capacity:** A fixed slot count; appends past it fail with `CapacityExceeded`.
//! 3. **Lookup:** Exact-address matching over the populated slots.
//!
//! Memory is populated once before a run and only read during it.

use crate::common::constants::{IMEM_CAPACITY, INSTRUCTION_SIZE};
use crate::common::error::{Result, SimError};

/// A word resident at a byte address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionSlot {
    /// Byte address at which the word is resident.
    pub location: u32,
    /// Undecoded 32-bit encoding.
    pub code: u32,
}

/// Fixed-capacity, append-only instruction store.
///
/// Slot `i` is always resident at `4 * i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    slots: Vec<InstructionSlot>,
    capacity: usize,
    next_address: u32,
}

impl Default for InstructionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionMemory {
    /// Creates an empty memory with the default capacity of 32 slots.
    pub fn new() -> Self {
        Self::with_capacity(IMEM_CAPACITY)
    }

    /// Creates an empty memory holding at most `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            next_address: 0,
        }
    }

    /// Appends a word at the next free address.
    ///
    /// # Returns
    ///
    /// The address the word was placed at.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` when every slot is already populated; the memory is
    /// left unchanged.
    pub fn append(&mut self, code: u32) -> Result<u32> {
        if self.slots.len() >= self.capacity {
            return Err(SimError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let location = self.next_address;
        self.slots.push(InstructionSlot { location, code });
        self.next_address += INSTRUCTION_SIZE;
        Ok(location)
    }

    /// Returns the word resident at `address`, if any.
    ///
    /// Addresses past the populated range and addresses that are not a
    /// multiple of 4 both yield `None`.
    pub fn lookup(&self, address: u32) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.location == address)
            .map(|slot| slot.code)
    }

    /// Address the next appended word would occupy; one past the populated range.
    pub const fn next_address(&self) -> u32 {
        self.next_address
    }

    /// Number of populated slots.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no words have been appended.
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The populated slots in program order.
    pub fn slots(&self) -> &[InstructionSlot] {
        &self.slots
    }
}
