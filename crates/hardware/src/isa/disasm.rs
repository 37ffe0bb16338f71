//! Instruction Disassembler for the MIPS32 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace logging, program listings, and test diagnostics.
//! Encodings outside the supported subset render as a `.word` directive so a
//! listing of any program is always printable.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2128_0096);
//! assert_eq!(text, "addi $t0, $t1, 150");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::mips32::{funct, opcodes};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rs, rt, rd) = (reg_name(d.rs), reg_name(d.rt), reg_name(d.rd));

    match d.opcode {
        opcodes::SPECIAL => match d.funct {
            funct::ADD => format!("add {rd}, {rs}, {rt}"),
            funct::SUB => format!("sub {rd}, {rs}, {rt}"),
            funct::MULT => format!("mult {rs}, {rt}"),
            funct::DIV => format!("div {rs}, {rt}"),
            funct::MFHI => format!("mfhi {rd}"),
            funct::MFLO => format!("mflo {rd}"),
            _ => unknown(inst),
        },
        opcodes::J => format!("j {:#x}", d.address),
        opcodes::JAL => format!("jal {:#x}", d.address),
        opcodes::ADDI => format!("addi {rt}, {rs}, {}", d.imm),
        opcodes::ANDI => format!("andi {rt}, {rs}, {:#x}", d.uimm()),
        _ => unknown(inst),
    }
}

/// Renders an unsupported encoding as a data directive.
fn unknown(inst: u32) -> String {
    format!(".word {inst:#010x}")
}
