//! MIPS32 Integer Subset.
//!
//! Only the operations the simulator executes are named here.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) selecting the operation when `opcode == SPECIAL`.

/// Function code definitions for R-type operations.
pub mod funct;

/// Major opcode definitions.
pub mod opcodes;
