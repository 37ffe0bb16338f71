//! MIPS32 R-Type Function Codes.
//!
//! Identifies the operation when `opcode == SPECIAL`.

/// Move From Hi.
pub const MFHI: u32 = 16;

/// Move From Lo.
pub const MFLO: u32 = 18;

/// Multiply, product into Hi/Lo.
pub const MULT: u32 = 25;

/// Divide, quotient into Lo and remainder into Hi.
pub const DIV: u32 = 27;

/// Add.
pub const ADD: u32 = 33;

/// Subtract.
pub const SUB: u32 = 35;
