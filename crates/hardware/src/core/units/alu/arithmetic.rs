//! ALU arithmetic operations.
//!
//! Implements integer addition, subtraction, multiplication, and division on
//! 32-bit two's-complement registers. Overflow wraps; the simulator has no
//! overflow exceptions.

use crate::core::pipeline::signals::AluOp;

/// Number of bits in a register word (used to split a 64-bit product).
const WORD_BITS: u32 = 32;

/// Executes a single-result arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::And => 0,
    }
}

/// Signed multiply producing the full 64-bit product.
///
/// # Returns
///
/// `(hi, lo)`: the upper and lower 32 bits of `a * b`.
pub const fn multiply(a: i32, b: i32) -> (i32, i32) {
    let product = (a as i64) * (b as i64);
    ((product >> WORD_BITS) as i32, product as i32)
}

/// Signed divide.
///
/// # Returns
///
/// `Some((remainder, quotient))`, ordered as `(hi, lo)`, or `None` when `b` is
/// zero. `i32::MIN / -1` wraps to `(0, i32::MIN)`.
pub const fn divide(a: i32, b: i32) -> Option<(i32, i32)> {
    if b == 0 {
        None
    } else {
        Some((a.wrapping_rem(b), a.wrapping_div(b)))
    }
}
