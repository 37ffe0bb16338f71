//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of a cycle: it reads the word
//! resident at the current Program Counter from instruction memory.

use tracing::trace;

use crate::common::error::{Result, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::soc::memory::InstructionMemory;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu`  - CPU state; only the PC is read.
/// * `imem` - Instruction memory to fetch from.
///
/// # Errors
///
/// `AddressFault` when no instruction is resident at the PC, e.g. a PC that
/// is not a multiple of 4.
pub fn fetch_stage(cpu: &Cpu, imem: &InstructionMemory) -> Result<IfIdEntry> {
    let pc = cpu.pc;
    let inst = imem.lookup(pc).ok_or(SimError::AddressFault { pc })?;
    trace!("IF  pc={pc:#x} inst={inst:#010x}");
    Ok(IfIdEntry { pc, inst })
}
