//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the four stages of
//! a simulation cycle:
//! 1. **Fetch:** Looks up the word resident at the PC.
//! 2. **Decode:** Splits the word into its fields.
//! 3. **Execute:** Computes a result without touching processor state.
//! 4. **Writeback:** Commits the result and advances the PC.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
