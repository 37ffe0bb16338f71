/// Instruction memory tests.
pub mod instruction_memory;
