//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Register-file geometry, instruction width, and memory capacity.
//! 2. **Error Handling:** The `SimError` fault taxonomy and the crate `Result` alias.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types raised by memory, execution, and the run loop.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGISTERS};
pub use error::{Result, SimError};
