//! Core processor implementation.
//!
//! This module contains the processor state, the four pipeline stages that
//! operate on it, and the execution units those stages call into.

/// Architectural register files.
pub mod arch;

/// Processor state: registers, Hi/Lo, PC, and statistics.
pub mod cpu;

/// Instruction pipeline (stages, latches, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
