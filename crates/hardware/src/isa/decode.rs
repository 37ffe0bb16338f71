//! MIPS32 Instruction Decoder.
//!
//! This module turns a raw 32-bit word into a structured `Decoded` record.
//! Decoding is pure and total: any word decodes, and no field depends on the
//! value of another. Whether the word names a supported operation is decided
//! later, by the execute stage.

use crate::isa::instruction::{Decoded, InstructionBits};

/// Decodes a MIPS32 instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode::decode;
///
/// // addi $t0, $t1, 150
/// let d = decode(0x2128_0096);
/// assert_eq!(d.opcode, 8);
/// assert_eq!((d.rs, d.rt), (9, 8));
/// assert_eq!(d.imm, 150);
/// ```
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm: inst.imm(),
        address: inst.address(),
    }
}
