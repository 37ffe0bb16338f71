//! Writeback (WB) Stage.
//!
//! This module implements the final stage of a cycle. It commits the execute
//! result to the register file, the Hi/Lo pair, or the PC, advances control
//! flow, and updates retirement statistics. It never touches instruction memory.

use tracing::trace;

use crate::common::constants::{INSTRUCTION_SIZE, LINK_REGISTER};
use crate::core::Cpu;
use crate::core::pipeline::latches::ExWbEntry;
use crate::core::pipeline::signals::{ExecResult, InstClass};
use crate::isa::instruction::Decoded;
use crate::isa::mips32::opcodes;

/// Executes the writeback stage.
///
/// Commits the entry's result and counts the instruction as retired.
///
/// # Arguments
///
/// * `entry` - The entry produced by the execute stage.
/// * `cpu`   - Mutable reference to the CPU state.
pub fn wb_stage(entry: &ExWbEntry, cpu: &mut Cpu) {
    commit(entry.result, &entry.decoded, cpu);

    cpu.stats.cycles += 1;
    cpu.stats.instructions_retired += 1;
    match entry.op.class() {
        InstClass::Alu => cpu.stats.inst_alu += 1,
        InstClass::MulDiv => cpu.stats.inst_muldiv += 1,
        InstClass::Move => cpu.stats.inst_move += 1,
        InstClass::Jump => cpu.stats.inst_jump += 1,
    }

    trace!("WB  pc={:#x} next_pc={:#x}", entry.pc, cpu.pc);
}

/// Commits an execute result into the CPU.
///
/// - A value goes to `rd` for R-type instructions and to `rt` otherwise; PC advances by 4.
/// - A Hi/Lo pair goes to Hi and Lo; PC advances by 4.
/// - A jump target replaces the PC. For `jal`, `$ra` first receives the PC of
///   the `jal` itself (not PC + 4).
pub fn commit(result: ExecResult, instr: &Decoded, cpu: &mut Cpu) {
    match result {
        ExecResult::Value(val) => {
            let dest = if instr.opcode == opcodes::SPECIAL {
                instr.rd
            } else {
                instr.rt
            };
            cpu.regs.write(dest, val);
            cpu.pc = cpu.pc.wrapping_add(INSTRUCTION_SIZE);
        }
        ExecResult::HiLo { hi, lo } => {
            cpu.hi = hi;
            cpu.lo = lo;
            cpu.pc = cpu.pc.wrapping_add(INSTRUCTION_SIZE);
        }
        ExecResult::Target(target) => {
            if instr.opcode == opcodes::JAL {
                cpu.regs.write(LINK_REGISTER, cpu.pc as i32);
            }
            cpu.pc = target;
        }
    }
}
