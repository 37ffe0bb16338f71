//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries handed from one stage to the next during a
//! cycle: Fetch → Decode → Execute → Writeback. The simulator is not
//! pipelined in time; each cycle carries exactly one instruction through all
//! four stages.

use crate::core::pipeline::signals::{ExecResult, Op};
use crate::isa::instruction::Decoded;

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields.
    pub decoded: Decoded,
}

/// Entry in the EX/WB latch (Execute to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// The classified operation.
    pub op: Op,
    /// Value computed by the execute stage.
    pub result: ExecResult,
}
