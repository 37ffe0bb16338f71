//! MIPS-like instruction set simulator library.
//!
//! This crate decodes and executes a small subset of 32-bit MIPS instructions:
//! 1. **ISA:** Field extraction, decoding, and disassembly.
//! 2. **Core:** Register file, Hi/Lo, PC, and the fetch/decode/execute/writeback stages.
//! 3. **Memory:** A fixed-capacity, append-only instruction memory.
//! 4. **Simulation:** Loader, run loop, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! // addi $t0, $t1, 150
//! let mut sim = Simulator::new(&Config::default(), &[0x2128_0096]).unwrap();
//! let cpu = sim.run().unwrap();
//! assert_eq!(cpu.regs.read(8), 150);
//! assert_eq!(cpu.pc, 4);
//! ```

/// Common types and constants (fault taxonomy, register geometry).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (registers, pipeline stages, execution units).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, disassembly).
pub mod isa;
/// Program loader and run loop.
pub mod sim;
/// Instruction memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Fault type returned by every fallible operation.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or parse JSON.
pub use crate::config::Config;
/// Processor state: registers, Hi/Lo, PC.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
