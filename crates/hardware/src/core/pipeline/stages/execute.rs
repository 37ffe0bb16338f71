//! Execute (EX) Stage.
//!
//! This module computes the value an instruction produces. It performs the following:
//! 1. **Classification:** Maps opcode/funct onto an [`Op`], rejecting unsupported encodings.
//! 2. **Operand Read:** Reads `rs`/`rt`, Hi, or Lo from the CPU without modifying it.
//! 3. **Computation:** Runs the ALU, the multiplier/divider, or passes the jump target through.
//!
//! Nothing here mutates processor state; all commits happen in writeback.

use tracing::trace;

use crate::common::error::{Result, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExWbEntry, IdExEntry};
use crate::core::pipeline::signals::{AluOp, ExecResult, Op};
use crate::core::units::alu::{Alu, arithmetic};
use crate::isa::instruction::Decoded;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `id_ex` - The entry produced by the decode stage.
/// * `cpu`   - CPU state, read only.
///
/// # Errors
///
/// `UnsupportedOpcode`, `UnsupportedFunct`, or `DivisionByZero`.
pub fn execute_stage(id_ex: &IdExEntry, cpu: &Cpu) -> Result<ExWbEntry> {
    let op = Op::classify(&id_ex.decoded, id_ex.pc)?;
    let result = execute_op(op, &id_ex.decoded, cpu, id_ex.pc)?;
    trace!("EX  pc={:#x} {op:?} -> {result:?}", id_ex.pc);
    Ok(ExWbEntry {
        pc: id_ex.pc,
        decoded: id_ex.decoded,
        op,
        result,
    })
}

/// Computes the result of `instr` against the current CPU state.
///
/// Errors are attributed to `cpu.pc`.
///
/// # Errors
///
/// `UnsupportedOpcode`, `UnsupportedFunct`, or `DivisionByZero`.
pub fn execute(instr: &Decoded, cpu: &Cpu) -> Result<ExecResult> {
    let op = Op::classify(instr, cpu.pc)?;
    execute_op(op, instr, cpu, cpu.pc)
}

/// Computes the result of an already-classified operation.
fn execute_op(op: Op, d: &Decoded, cpu: &Cpu, pc: u32) -> Result<ExecResult> {
    let rs = cpu.regs.read(d.rs);
    let rt = cpu.regs.read(d.rt);

    let result = match op {
        Op::Add => ExecResult::Value(Alu::execute(AluOp::Add, rs, rt)),
        Op::Sub => ExecResult::Value(Alu::execute(AluOp::Sub, rs, rt)),
        Op::Mult => {
            let (hi, lo) = arithmetic::multiply(rs, rt);
            ExecResult::HiLo { hi, lo }
        }
        Op::Div => {
            let (hi, lo) = arithmetic::divide(rs, rt).ok_or(SimError::DivisionByZero { pc })?;
            ExecResult::HiLo { hi, lo }
        }
        Op::Mfhi => ExecResult::Value(cpu.hi),
        Op::Mflo => ExecResult::Value(cpu.lo),
        Op::Jump | Op::JumpAndLink => ExecResult::Target(d.address),
        Op::AddImm => ExecResult::Value(Alu::execute(AluOp::Add, rs, d.imm)),
        Op::AndImm => ExecResult::Value(Alu::execute(AluOp::And, rs, d.uimm() as i32)),
    };
    Ok(result)
}
