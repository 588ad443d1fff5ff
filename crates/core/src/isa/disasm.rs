//! Instruction disassembler for RV32I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::{funct3, funct7, opcodes};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (opcode 0x??)"`
/// for unrecognised encodings.
pub fn disassemble(inst: u32) -> String {
    let opcode = inst.opcode();
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    // Sign-extended I-type immediate.
    let imm_i = (inst as i32) >> 20;

    // S-type immediate.
    let imm_s = {
        let lo = (inst >> 7) & 0x1F;
        let hi = (inst >> 25) & 0x7F;
        let v = (hi << 5) | lo;
        ((v as i32) << 20) >> 20
    };

    match opcode {
        // ── R-type register-register ──────────────────────
        opcodes::OP_REG => disasm_op_reg(rd, rs1, rs2, f3, f7),

        // ── I-type immediate arithmetic ───────────────────
        opcodes::OP_IMM => disasm_op_imm(rd, rs1, f3, f7, imm_i),

        // ── Loads ─────────────────────────────────────────
        opcodes::OP_LOAD => {
            let mn = match f3 {
                funct3::LB => "lb",
                funct3::LH => "lh",
                funct3::LW => "lw",
                funct3::LBU => "lbu",
                funct3::LHU => "lhu",
                _ => "l??",
            };
            format!("{mn} {}, {imm_i}({})", xreg(rd), xreg(rs1))
        }

        // ── Stores ────────────────────────────────────────
        opcodes::OP_STORE => {
            let mn = match f3 {
                funct3::SB => "sb",
                funct3::SH => "sh",
                funct3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} {}, {imm_s}({})", xreg(rs2), xreg(rs1))
        }

        // ── Branches ──────────────────────────────────────
        opcodes::OP_BRANCH => {
            let mn = match f3 {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => "b??",
            };
            let off = match decode(inst) {
                Decoded::B { offset, .. } => offset,
                _ => 0,
            };
            format!("{mn} {}, {}, {off}", xreg(rs1), xreg(rs2))
        }

        // ── Upper immediates ──────────────────────────────
        opcodes::OP_LUI => format!("lui {}, {:#x}", xreg(rd), inst >> 12),
        opcodes::OP_AUIPC => format!("auipc {}, {:#x}", xreg(rd), inst >> 12),

        // ── Jumps ─────────────────────────────────────────
        opcodes::OP_JAL => {
            let off = match decode(inst) {
                Decoded::J { offset, .. } => offset,
                _ => 0,
            };
            format!("jal {}, {off}", xreg(rd))
        }
        opcodes::OP_JALR => format!("jalr {}, {imm_i}({})", xreg(rd), xreg(rs1)),

        // ── System ────────────────────────────────────────
        opcodes::OP_SYSTEM => {
            if f3 == 0 && imm_i == 0 {
                "ecall".to_string()
            } else {
                format!("system?? (funct3 {f3}, imm {imm_i})")
            }
        }

        _ => format!("unknown (opcode {opcode:#04x})"),
    }
}

/// Disassembles an R-type register-register operation.
fn disasm_op_reg(rd: usize, rs1: usize, rs2: usize, f3: u32, f7: u32) -> String {
    let mn = match (f3, f7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => "add",
        (funct3::ADD_SUB, funct7::SUB_SRA) => "sub",
        (funct3::SLL, _) => "sll",
        (funct3::SLT, _) => "slt",
        (funct3::SLTU, _) => "sltu",
        (funct3::XOR, _) => "xor",
        (funct3::SRL_SRA, funct7::DEFAULT) => "srl",
        (funct3::SRL_SRA, funct7::SUB_SRA) => "sra",
        (funct3::OR, _) => "or",
        (funct3::AND, _) => "and",
        _ => "op??",
    };
    format!("{mn} {}, {}, {}", xreg(rd), xreg(rs1), xreg(rs2))
}

/// Disassembles an I-type immediate arithmetic operation.
///
/// Shifts print the 5-bit shift amount instead of the full immediate.
fn disasm_op_imm(rd: usize, rs1: usize, f3: u32, f7: u32, imm: i32) -> String {
    let shamt = imm & 0x1F;
    match f3 {
        funct3::ADD_SUB => format!("addi {}, {}, {imm}", xreg(rd), xreg(rs1)),
        funct3::SLL => format!("slli {}, {}, {shamt}", xreg(rd), xreg(rs1)),
        funct3::SLT => format!("slti {}, {}, {imm}", xreg(rd), xreg(rs1)),
        funct3::SLTU => format!("sltiu {}, {}, {imm}", xreg(rd), xreg(rs1)),
        funct3::XOR => format!("xori {}, {}, {imm}", xreg(rd), xreg(rs1)),
        funct3::SRL_SRA => {
            let mn = if f7 == funct7::SUB_SRA { "srai" } else { "srli" };
            format!("{mn} {}, {}, {shamt}", xreg(rd), xreg(rs1))
        }
        funct3::OR => format!("ori {}, {}, {imm}", xreg(rd), xreg(rs1)),
        funct3::AND => format!("andi {}, {}, {imm}", xreg(rd), xreg(rs1)),
        _ => format!("opimm?? (funct3 {f3})"),
    }
}
