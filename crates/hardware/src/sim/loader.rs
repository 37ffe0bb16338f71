//! Program Loader.
//!
//! Places a program, a sequence of pre-encoded instruction words, into a
//! fresh instruction memory in program order. There is no file format and no
//! assembler: callers hand over the words directly.

use tracing::debug;

use crate::common::error::Result;
use crate::soc::memory::InstructionMemory;

/// Loads `program` into an instruction memory of the default capacity.
///
/// # Errors
///
/// `CapacityExceeded` if the program has more than 32 words.
pub fn load_program(program: &[u32]) -> Result<InstructionMemory> {
    load_program_into(InstructionMemory::new(), program)
}

/// Loads `program` into an instruction memory holding at most `capacity` words.
///
/// # Errors
///
/// `CapacityExceeded` if the program has more than `capacity` words.
pub fn load_program_with_capacity(program: &[u32], capacity: usize) -> Result<InstructionMemory> {
    load_program_into(InstructionMemory::with_capacity(capacity), program)
}

fn load_program_into(mut imem: InstructionMemory, program: &[u32]) -> Result<InstructionMemory> {
    for &word in program {
        let _ = imem.append(word)?;
    }
    debug!(
        words = imem.len(),
        end = imem.next_address(),
        "[Loader] program placed"
    );
    Ok(imem)
}
