//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the `Decoded` record for
//! MIPS32 instruction fields. All formats share one 32-bit layout:
//!
//! ```text
//!  31    26 25  21 20  16 15  11 10   6 5     0
//! | opcode |  rs  |  rt  |  rd  | shamt | funct |   R-type
//! | opcode |  rs  |  rt  |       immediate      |   I-type
//! | opcode |            address                 |   J-type
//! ```

/// Bit mask for the 6-bit opcode field (after shifting).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for a 5-bit register index field (after shifting).
pub const REG_MASK: u32 = 0x1F;
/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;
/// Bit mask for the 5-bit shift amount field (after shifting).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit position of the `shamt` field.
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the 6-bit function code field.
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump address field.
pub const ADDRESS_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is a fixed shift-and-mask; none of them look at the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-type destination register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function code field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 0-15), sign-extended to 32 bits.
    fn imm(&self) -> i32;

    /// Extracts the 26-bit jump address field (bits 0-25).
    fn address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    /// Truncates to the low half-word and reinterprets it as `i16`, so bit 15
    /// becomes the sign.
    #[inline(always)]
    fn imm(&self) -> i32 {
        ((self & IMM_MASK) as u16 as i16) as i32
    }

    #[inline(always)]
    fn address(&self) -> u32 {
        self & ADDRESS_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// The record is a format superset: every field is populated for every word,
/// and consumers read only the fields that matter for the instruction class
/// they dispatch on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Major opcode (6 bits).
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index; destination for I-type.
    pub rt: usize,
    /// Destination register index for R-type.
    pub rd: usize,
    /// Shift amount (unused by the supported operations).
    pub shamt: u32,
    /// Function code (6 bits).
    pub funct: u32,
    /// Sign-extended 16-bit immediate.
    pub imm: i32,
    /// 26-bit jump address, unshifted.
    pub address: u32,
}

impl Decoded {
    /// Returns the immediate zero-extended from 16 bits.
    ///
    /// Logical immediates (`andi`) use this form. Arithmetic immediates (`addi`)
    /// sign-extend through `imm` so negative offsets work; logical ones mask.
    #[inline]
    pub const fn uimm(&self) -> u32 {
        (self.imm as u32) & IMM_MASK
    }
}
