//! Simulation fault definitions.
//!
//! Every fault the simulator can raise is a variant of [`SimError`]. They are
//! all local and synchronous: the component that detects the fault returns it,
//! and the run loop aborts and hands it to its caller unchanged. The simulator
//! is deterministic, so nothing is retried.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Faults raised by instruction memory, the execution unit, and the run loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// An append was attempted on a full instruction memory.
    #[error("instruction memory is full ({capacity} slots)")]
    CapacityExceeded {
        /// Fixed slot count of the memory that rejected the append.
        capacity: usize,
    },

    /// The opcode has no defined semantics.
    #[error("unsupported opcode {opcode:#04x} at pc {pc:#x}")]
    UnsupportedOpcode {
        /// The 6-bit opcode field.
        opcode: u32,
        /// Address of the offending instruction.
        pc: u32,
    },

    /// An R-type instruction carries a function code with no defined semantics.
    #[error("unsupported funct {funct:#04x} at pc {pc:#x}")]
    UnsupportedFunct {
        /// The 6-bit function code field.
        funct: u32,
        /// Address of the offending instruction.
        pc: u32,
    },

    /// A divide instruction found zero in its divisor register.
    #[error("division by zero at pc {pc:#x}")]
    DivisionByZero {
        /// Address of the divide instruction.
        pc: u32,
    },

    /// The program counter points at an address with no resident instruction.
    #[error("no instruction resident at pc {pc:#x}")]
    AddressFault {
        /// The faulting program counter.
        pc: u32,
    },

    /// The run loop hit its iteration cap before the program left its range.
    #[error("cycle limit of {limit} exceeded")]
    CycleLimitExceeded {
        /// The configured cap.
        limit: u64,
    },

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
