//! Instruction Decode (ID) Stage.
//!
//! Splits the fetched word into its fields. Decoding never fails; whether the
//! fields name a supported operation is checked by the execute stage.

use tracing::trace;

use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `if_id` - The entry produced by the fetch stage.
pub fn decode_stage(if_id: &IfIdEntry) -> IdExEntry {
    let decoded = decode(if_id.inst);
    trace!("ID  pc={:#x} {}", if_id.pc, disassemble(if_id.inst));
    IdExEntry {
        pc: if_id.pc,
        decoded,
    }
}
