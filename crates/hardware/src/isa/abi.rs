//! MIPS Application Binary Interface (ABI) register names.
//!
//! Maps register indices to the conventional O32 names used in listings and
//! register dumps.

/// Register `$zero` (constant zero by convention).
pub const REG_ZERO: usize = 0;
/// Register `$sp` (stack pointer).
pub const REG_SP: usize = 29;
/// Register `$ra` (return address, written by `jal`).
pub const REG_RA: usize = 31;

/// Conventional names for registers 0 through 31.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index, or `"$??"` when out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
