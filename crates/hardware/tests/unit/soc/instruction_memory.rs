//! # Instruction Memory Tests
//!
//! Tests for sequential placement, capacity enforcement, and exact-address lookup.

use mipsim_core::common::error::SimError;
use mipsim_core::soc::memory::InstructionMemory;

#[test]
fn test_slots_are_contiguous() {
    let mut imem = InstructionMemory::new();
    for i in 0..32u32 {
        assert_eq!(imem.append(0xA000_0000 | i), Ok(4 * i));
    }
    for (i, slot) in imem.slots().iter().enumerate() {
        assert_eq!(slot.location, 4 * i as u32);
        assert_eq!(slot.code, 0xA000_0000 | i as u32);
    }
    assert_eq!(imem.next_address(), 128);
}

#[test]
fn test_33rd_append_fails() {
    let mut imem = InstructionMemory::new();
    for _ in 0..32 {
        let _ = imem.append(0).unwrap();
    }
    assert_eq!(
        imem.append(0),
        Err(SimError::CapacityExceeded { capacity: 32 })
    );
    assert_eq!(imem.len(), 32);
    assert_eq!(imem.next_address(), 128);
}

#[test]
fn test_lookup_exact_address_only() {
    let mut imem = InstructionMemory::new();
    let _ = imem.append(0x1111_1111).unwrap();
    let _ = imem.append(0x2222_2222).unwrap();
    assert_eq!(imem.lookup(0), Some(0x1111_1111));
    assert_eq!(imem.lookup(4), Some(0x2222_2222));
    assert_eq!(imem.lookup(1), None);
    assert_eq!(imem.lookup(8), None);
}
