//! ALU logical operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise operation. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Add | AluOp::Sub => 0,
    }
}
