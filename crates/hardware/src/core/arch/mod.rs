//! Architectural register state.
//!
//! Only the general-purpose register file lives here; Hi, Lo, and the PC are
//! plain fields on [`Cpu`](crate::core::Cpu).

/// General-Purpose Register file implementation.
pub mod gpr;
