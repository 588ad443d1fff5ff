//! Instruction field extraction and the decoded-instruction type.
//!
//! Provides bit extraction for the fixed-position fields of a 32-bit RV32I
//! encoding, plus the tagged `Decoded` representation produced by the
//! decoder. Each `Decoded` variant carries exactly the fields of the
//! matched format; the executor pattern-matches on the tag.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented on `u32` so field extraction reads as `inst.rd()`,
/// `inst.funct3()`, and so on, at every place a raw encoding is inspected.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// For immediate shifts the same bits hold the shift amount.
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Instruction format tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register arithmetic.
    R,
    /// Register-immediate arithmetic, loads, JALR, system.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper-immediate (LUI, AUIPC).
    U,
    /// Unconditional jump (JAL).
    J,
    /// No recognised format for the opcode.
    Unknown,
}

/// A decoded instruction.
///
/// One variant per RV32I format. Immediates are fully sign-extended to 32
/// bits before they reach the executor; the U-type immediate is delivered
/// pre-shifted into the upper 20 bits with the low 12 bits zero. Branch and
/// jump offsets are byte offsets relative to the instruction's own address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Register-register arithmetic (opcode 0x33).
    R {
        raw: u32,
        rd: usize,
        funct3: u32,
        rs1: usize,
        rs2: usize,
        funct7: u32,
    },
    /// Register-immediate arithmetic, loads, JALR, and system instructions.
    ///
    /// `opcode` distinguishes the four I-type groups (0x13, 0x03, 0x67, 0x73).
    I {
        raw: u32,
        opcode: u32,
        rd: usize,
        funct3: u32,
        rs1: usize,
        imm: i32,
    },
    /// Stores (opcode 0x23).
    S {
        raw: u32,
        funct3: u32,
        rs1: usize,
        rs2: usize,
        imm: i32,
    },
    /// Conditional branches (opcode 0x63).
    B {
        raw: u32,
        funct3: u32,
        rs1: usize,
        rs2: usize,
        offset: i32,
    },
    /// Upper-immediate instructions.
    ///
    /// `opcode` distinguishes LUI (0x37) from AUIPC (0x17). `imm` already has
    /// the low 12 bits zero.
    U {
        raw: u32,
        opcode: u32,
        rd: usize,
        imm: u32,
    },
    /// Jump and link (opcode 0x6F).
    J { raw: u32, rd: usize, offset: i32 },
    /// Opcode with no recognised format.
    Unknown { raw: u32, opcode: u32 },
}

impl Decoded {
    /// Returns the raw 32-bit encoding this instruction was decoded from.
    pub fn raw(&self) -> u32 {
        match *self {
            Decoded::R { raw, .. }
            | Decoded::I { raw, .. }
            | Decoded::S { raw, .. }
            | Decoded::B { raw, .. }
            | Decoded::U { raw, .. }
            | Decoded::J { raw, .. }
            | Decoded::Unknown { raw, .. } => raw,
        }
    }

    /// Returns the 7-bit major opcode.
    pub fn opcode(&self) -> u32 {
        self.raw().opcode()
    }

    /// Returns the format tag of this instruction.
    pub fn format(&self) -> Format {
        match self {
            Decoded::R { .. } => Format::R,
            Decoded::I { .. } => Format::I,
            Decoded::S { .. } => Format::S,
            Decoded::B { .. } => Format::B,
            Decoded::U { .. } => Format::U,
            Decoded::J { .. } => Format::J,
            Decoded::Unknown { .. } => Format::Unknown,
        }
    }
}
