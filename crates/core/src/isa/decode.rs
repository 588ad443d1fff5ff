//! RV32I instruction decoder.
//!
//! This module handles the decoding of 32-bit RV32I instruction encodings
//! into the tagged `Decoded` form. It extracts opcodes, register indices,
//! function codes, and handles the sign-extension of immediate values for
//! all instruction formats (R, I, S, B, U, J).
//!
//! The decoder is a pure total function: unrecognised opcodes decode to
//! `Decoded::Unknown` and the executor decides the policy.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::opcodes;

/// Total width of an instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
/// The immediate is split across two non-contiguous fields.
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for the S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Total number of bits in the S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// Total number of bits in the B-Type offset (even byte offsets, so bit 0
/// is implicit zero).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
const B_IMM_BITS: u32 = 13;

/// Bit mask for extracting the U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`. The immediate is used with its
/// low 12 bits zero; no further sign extension is needed.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Total number of bits in the J-Type offset.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
const J_IMM_BITS: u32 = 21;

/// Decodes an RV32I instruction into its tagged, field-extracted form.
///
/// The opcode selects the format: 0x33 is R; 0x13, 0x03, 0x67 and 0x73 are
/// I; 0x23 is S; 0x63 is B; 0x37 and 0x17 are U; 0x6F is J. Any other
/// opcode yields `Decoded::Unknown`.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `Decoded` variant carrying the raw word and the fields of the matched
/// format, with immediates sign-extended to 32 bits.
pub fn decode(inst: u32) -> Decoded {
    match inst.opcode() {
        opcodes::OP_REG => Decoded::R {
            raw: inst,
            rd: inst.rd(),
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct7: inst.funct7(),
        },
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR | opcodes::OP_SYSTEM => Decoded::I {
            raw: inst,
            opcode: inst.opcode(),
            rd: inst.rd(),
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            imm: decode_i_type_imm(inst),
        },
        opcodes::OP_STORE => Decoded::S {
            raw: inst,
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            imm: decode_s_type_imm(inst),
        },
        opcodes::OP_BRANCH => Decoded::B {
            raw: inst,
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            offset: decode_b_type_imm(inst),
        },
        opcodes::OP_LUI | opcodes::OP_AUIPC => Decoded::U {
            raw: inst,
            opcode: inst.opcode(),
            rd: inst.rd(),
            imm: inst & U_IMM_MASK,
        },
        opcodes::OP_JAL => Decoded::J {
            raw: inst,
            rd: inst.rd(),
            offset: decode_j_type_imm(inst),
        },
        opcode => Decoded::Unknown { raw: inst, opcode },
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// The immediate occupies the upper 12 bits of the encoding, so an
/// arithmetic right shift of the word sign-extends it in one step.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
///
/// Reassembles imm[11:5] and imm[4:0] from their split fields before
/// sign-extending the 12-bit result.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

/// Decodes the branch offset for B-Type instructions.
///
/// The 13-bit offset is scattered across four fields with bit 0 implicit:
/// imm[12] at bit 31, imm[10:5] at bits 30-25, imm[4:1] at bits 11-8, and
/// imm[11] at bit 7.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_12 = (inst >> 31) & 1;
    let bit_11 = (inst >> 7) & 1;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bits_4_1 = (inst >> 8) & 0xF;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the jump offset for J-Type instructions.
///
/// The 21-bit offset is scattered across four fields with bit 0 implicit:
/// imm[20] at bit 31, imm[10:1] at bits 30-21, imm[11] at bit 20, and
/// imm[19:12] at bits 19-12.
fn decode_j_type_imm(inst: u32) -> i32 {
    let bit_20 = (inst >> 31) & 1;
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 1;
    let bits_10_1 = (inst >> 21) & 0x3FF;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// Shifts the assembled immediate left so its sign bit lands at bit 31,
/// then shifts arithmetically back down.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift) >> shift
}
