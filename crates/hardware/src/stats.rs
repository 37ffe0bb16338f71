//! Simulation statistics collection and reporting.
//!
//! This module tracks what the run loop retired. It provides:
//! 1. **Cycle count:** One cycle per retired instruction in this single-cycle model.
//! 2. **Instruction mix:** Counts by category (ALU, multiply/divide, move, jump).

use std::fmt;

use serde::Serialize;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,
    /// Count of add/sub/addi/andi instructions retired.
    pub inst_alu: u64,
    /// Count of multiply and divide instructions retired.
    pub inst_muldiv: u64,
    /// Count of move-from-Hi/Lo instructions retired.
    pub inst_move: u64,
    /// Count of jump instructions retired.
    pub inst_jump: u64,
}

impl SimStats {
    /// Percentage of retired instructions in a category, guarding against zero.
    fn share(&self, count: u64) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.instructions_retired as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycles:               {}", self.cycles)?;
        writeln!(f, "instructions retired: {}", self.instructions_retired)?;
        writeln!(
            f,
            "  alu:     {:>6} ({:5.1}%)",
            self.inst_alu,
            self.share(self.inst_alu)
        )?;
        writeln!(
            f,
            "  mul/div: {:>6} ({:5.1}%)",
            self.inst_muldiv,
            self.share(self.inst_muldiv)
        )?;
        writeln!(
            f,
            "  move:    {:>6} ({:5.1}%)",
            self.inst_move,
            self.share(self.inst_move)
        )?;
        write!(
            f,
            "  jump:    {:>6} ({:5.1}%)",
            self.inst_jump,
            self.share(self.inst_jump)
        )
    }
}
