//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for all
//! mutable simulation state:
//! 1. **Registers:** The general-purpose register file and the Hi/Lo pair.
//! 2. **Control Flow:** The program counter, a byte address advancing in steps of 4.
//! 3. **Statistics:** Retirement counters updated by the writeback stage.
//!
//! The execute stage only ever borrows a `Cpu` immutably; the writeback stage
//! is the single writer.

use serde::Serialize;

use crate::common::constants::NUM_REGISTERS;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Hi accumulator (product high word, division remainder).
    pub hi: i32,
    /// Lo accumulator (product low word, division quotient).
    pub lo: i32,
    /// Program Counter.
    pub pc: u32,
    /// Performance statistics.
    pub stats: SimStats,
}

/// Plain copy of the architectural state, for comparison and serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchState {
    /// Values of registers 0 through 31.
    pub registers: [i32; NUM_REGISTERS],
    /// Hi accumulator.
    pub hi: i32,
    /// Lo accumulator.
    pub lo: i32,
    /// Program counter.
    pub pc: u32,
}

impl Cpu {
    /// Creates a CPU with all registers, Hi/Lo, and PC zeroed.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the zero-register policy.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::with_zero_policy(config.registers.hardwire_zero),
            ..Self::default()
        }
    }

    /// Captures the architectural state (registers, Hi, Lo, PC).
    pub const fn arch_state(&self) -> ArchState {
        ArchState {
            registers: self.regs.snapshot(),
            hi: self.hi,
            lo: self.lo,
            pc: self.pc,
        }
    }

    /// Renders the register file followed by Hi, Lo, and PC, one entry per line.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = self.regs.dump();
        lines.push(format!("hi: {}", self.hi));
        lines.push(format!("lo: {}", self.lo));
        lines.push(format!("pc: {:#x}", self.pc));
        lines
    }
}
