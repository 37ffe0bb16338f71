//! MIPS32 Major Opcodes.
//!
//! Defines the major opcodes (bits 31-26) the simulator recognises. Every
//! opcode not listed here is treated as an unsupported I-type encoding.

/// R-type register-register operations; the operation is selected by `funct`.
pub const SPECIAL: u32 = 0b000000;

/// Jump (J) to an absolute 26-bit target.
pub const J: u32 = 0b000010;

/// Jump and Link (JAL): link into `$ra`, then jump.
pub const JAL: u32 = 0b000011;

/// Add Immediate (ADDI).
pub const ADDI: u32 = 0b001000;

/// AND Immediate (ANDI).
pub const ANDI: u32 = 0b001100;
