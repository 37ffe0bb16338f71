//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, and
//! decoding logic for the supported MIPS32 subset.
//!
//! # Formats
//!
//! * R-type: `opcode | rs | rt | rd | shamt | funct`, opcode 0.
//! * I-type: `opcode | rs | rt | immediate`.
//! * J-type: `opcode | address`, opcodes 2 and 3.

/// ABI register name mappings (`$zero`, `$t0`, `$ra`, ...).
pub mod abi;

/// Instruction decoding into the format-superset `Decoded` record.
pub mod decode;

/// Instruction disassembler for trace output and program listings.
pub mod disasm;

/// Instruction field masks and bit extraction utilities.
pub mod instruction;

/// MIPS32 opcode and function code constants.
pub mod mips32;
