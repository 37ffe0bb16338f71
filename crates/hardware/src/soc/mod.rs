//! System Components.
//!
//! Everything outside the processor core that the core reads from. Only
//! instruction memory exists; there is no data memory.

/// Instruction memory.
pub mod memory;

pub use memory::InstructionMemory;
