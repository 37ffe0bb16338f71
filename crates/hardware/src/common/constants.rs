//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Size of the general-purpose register file and the link register.
//! 2. **Instruction Constants:** Width of an instruction word in bytes.
//! 3. **Memory Constants:** Default instruction memory capacity.
//! 4. **Simulation Constants:** Default limits for the run loop.

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Register written by jump-and-link (`$ra`).
pub const LINK_REGISTER: usize = 31;

/// Size of one instruction word in bytes; the PC advances by this amount.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Default number of instruction slots in instruction memory.
pub const IMEM_CAPACITY: usize = 32;

/// Default iteration cap for the run loop.
///
/// A jump back into the program with no exit path would otherwise never
/// reach the end of the populated range.
pub const MAX_CYCLES: u64 = 1_000_000;
