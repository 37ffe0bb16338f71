//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Zero Register Policy:** Optionally discards writes to `$zero`; off by default,
//!    so `$zero` behaves like any other register unless configured otherwise.
//! 3. **Debugging:** Renders the complete register state as dump lines.

use crate::common::constants::NUM_REGISTERS;
use crate::isa::abi::reg_name;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGISTERS],
    hardwire_zero: bool,
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with all registers zero and `$zero` writable.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            hardwire_zero: false,
        }
    }

    /// Creates a register file whose `$zero` ignores writes when `hardwire_zero` is set.
    pub const fn with_zero_policy(hardwire_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            hardwire_zero,
        }
    }

    /// Returns whether writes to `$zero` are discarded.
    pub const fn hardwires_zero(&self) -> bool {
        self.hardwire_zero
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write. Dropped for index 0 when the zero register is hardwired.
    pub const fn write(&mut self, idx: usize, val: i32) {
        if idx == 0 && self.hardwire_zero {
            return;
        }
        self.regs[idx] = val;
    }

    /// Returns a copy of all 32 register values.
    pub const fn snapshot(&self) -> [i32; NUM_REGISTERS] {
        self.regs
    }

    /// Renders every register as `$N - $name: value`, one line per register.
    pub fn dump(&self) -> Vec<String> {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("${i} - {}: {v}", reg_name(i)))
            .collect()
    }
}
