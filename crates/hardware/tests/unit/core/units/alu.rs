//! # ALU Tests
//!
//! Table-driven tests for the integer ALU and the multiply/divide helpers.

use rstest::rstest;

use mipsim_core::core::pipeline::signals::AluOp;
use mipsim_core::core::units::alu::{Alu, arithmetic};

#[rstest]
#[case(AluOp::Add, 7, 5, 12)]
#[case(AluOp::Add, -1, 1, 0)]
#[case(AluOp::Add, i32::MAX, 1, i32::MIN)]
#[case(AluOp::Sub, 7, 5, 2)]
#[case(AluOp::Sub, 5, 7, -2)]
#[case(AluOp::Sub, i32::MIN, 1, i32::MAX)]
#[case(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case(AluOp::And, -1, 0xFFFF, 0xFFFF)]
fn test_alu_execute(#[case] op: AluOp, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(7, 5, 0, 35)]
#[case(-2, 3, -1, -6)]
#[case(0x10000, 0x10000, 1, 0)]
#[case(i32::MIN, i32::MIN, 0x4000_0000, 0)]
fn test_multiply_splits_product(#[case] a: i32, #[case] b: i32, #[case] hi: i32, #[case] lo: i32) {
    assert_eq!(arithmetic::multiply(a, b), (hi, lo));
}

#[rstest]
#[case(7, 5, 2, 1)]
#[case(-7, 2, -1, -3)]
#[case(7, -2, 1, -3)]
#[case(i32::MIN, -1, 0, i32::MIN)]
fn test_divide_remainder_and_quotient(
    #[case] a: i32,
    #[case] b: i32,
    #[case] rem: i32,
    #[case] quot: i32,
) {
    assert_eq!(arithmetic::divide(a, b), Some((rem, quot)));
}

#[test]
fn test_divide_by_zero_is_none() {
    assert_eq!(arithmetic::divide(12, 0), None);
}
