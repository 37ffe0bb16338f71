//! Pipeline control signals and operation types.
//!
//! This module defines the closed set of operations the simulator executes.
//! It performs:
//! 1. **Operation Classification:** Maps an opcode/funct pair onto [`Op`], failing
//!    for anything outside the supported subset.
//! 2. **ALU Selection:** Names the integer ALU functions used by the execute stage.
//! 3. **Result Tagging:** [`ExecResult`] tells writeback which state a result targets.

use crate::common::error::{Result, SimError};
use crate::isa::instruction::Decoded;
use crate::isa::mips32::{funct, opcodes};

/// Integer ALU functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
}

/// Every operation the execute stage can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `add rd, rs, rt`
    Add,
    /// `sub rd, rs, rt`
    Sub,
    /// `mult rs, rt`
    Mult,
    /// `div rs, rt`
    Div,
    /// `mfhi rd`
    Mfhi,
    /// `mflo rd`
    Mflo,
    /// `j address`
    Jump,
    /// `jal address`
    JumpAndLink,
    /// `addi rt, rs, imm`
    AddImm,
    /// `andi rt, rs, imm`
    AndImm,
}

/// Retirement category, used for the instruction-mix statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Add, subtract, and the immediate forms.
    Alu,
    /// Multiply and divide.
    MulDiv,
    /// Moves out of Hi/Lo.
    Move,
    /// Jumps.
    Jump,
}

impl Op {
    /// Classifies a decoded instruction.
    ///
    /// # Arguments
    ///
    /// * `d`  - The decoded instruction.
    /// * `pc` - Address of the instruction, reported in errors.
    ///
    /// # Errors
    ///
    /// `UnsupportedFunct` for an R-type word with an unknown function code,
    /// `UnsupportedOpcode` for any other unknown opcode.
    pub const fn classify(d: &Decoded, pc: u32) -> Result<Self> {
        match d.opcode {
            opcodes::SPECIAL => match d.funct {
                funct::ADD => Ok(Self::Add),
                funct::SUB => Ok(Self::Sub),
                funct::MULT => Ok(Self::Mult),
                funct::DIV => Ok(Self::Div),
                funct::MFHI => Ok(Self::Mfhi),
                funct::MFLO => Ok(Self::Mflo),
                funct => Err(SimError::UnsupportedFunct { funct, pc }),
            },
            opcodes::J => Ok(Self::Jump),
            opcodes::JAL => Ok(Self::JumpAndLink),
            opcodes::ADDI => Ok(Self::AddImm),
            opcodes::ANDI => Ok(Self::AndImm),
            opcode => Err(SimError::UnsupportedOpcode { opcode, pc }),
        }
    }

    /// Returns the retirement category of this operation.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Add | Self::Sub | Self::AddImm | Self::AndImm => InstClass::Alu,
            Self::Mult | Self::Div => InstClass::MulDiv,
            Self::Mfhi | Self::Mflo => InstClass::Move,
            Self::Jump | Self::JumpAndLink => InstClass::Jump,
        }
    }
}

/// Value produced by the execute stage, tagged with the state it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecResult {
    /// A single register value: `rd` for R-type, `rt` for I-type.
    Value(i32),
    /// A Hi/Lo pair from multiply or divide.
    HiLo {
        /// High word of the product, or the remainder.
        hi: i32,
        /// Low word of the product, or the quotient.
        lo: i32,
    },
    /// A jump target, the raw 26-bit address field.
    Target(u32),
}
