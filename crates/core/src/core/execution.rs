//! Main execution step.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It
//! performs the following:
//! 1. **Fetch:** Reads the instruction word at PC, enforcing word alignment.
//! 2. **Dispatch:** Pattern-matches the decoded instruction and applies its
//!    semantics to the register file and memory.
//! 3. **Control flow:** Computes the next PC (sequential, branch target, or
//!    jump target) and commits it.
//! 4. **Diagnostics:** Reports unknown encodings and continues, per the
//!    configured policy.
//!
//! All register arithmetic wraps modulo 2^32. Signed comparisons reinterpret
//! the stored bit pattern as two's complement; shifts use only the low five
//! bits of the shift source.

use super::Cpu;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::Exception;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::{funct3, funct7, opcodes};

impl Cpu {
    /// Executes one instruction.
    ///
    /// Fetches the word at PC, decodes it, applies its semantics, and
    /// commits the next PC. Environment-call halts are reported through
    /// `self.halt`; fatal faults through the returned `Exception`.
    pub fn step(&mut self) -> Result<(), Exception> {
        if self.pc % INSTRUCTION_BYTES != 0 {
            return Err(Exception::MisalignedFetch { pc: self.pc });
        }
        let inst = self.mem.read_word(self.pc)?;
        let decoded = decode(inst);

        if self.trace {
            eprintln!("{:#010x}: {}", self.pc, disassemble(inst));
        }

        let next_pc = self.execute(&decoded)?;
        self.stats.instructions_retired += 1;
        self.pc = next_pc;
        Ok(())
    }

    /// Applies one decoded instruction and returns the next PC.
    fn execute(&mut self, decoded: &Decoded) -> Result<u32, Exception> {
        let next = self.pc.wrapping_add(INSTRUCTION_BYTES);
        match *decoded {
            Decoded::R {
                rd,
                funct3: f3,
                rs1,
                rs2,
                funct7: f7,
                ..
            } => {
                self.exec_op(rd, f3, rs1, rs2, f7);
                Ok(next)
            }
            Decoded::I {
                raw,
                opcode,
                rd,
                funct3: f3,
                rs1,
                imm,
            } => match opcode {
                opcodes::OP_IMM => {
                    self.exec_op_imm(raw, rd, f3, rs1, imm);
                    Ok(next)
                }
                opcodes::OP_LOAD => {
                    self.exec_load(rd, f3, rs1, imm)?;
                    Ok(next)
                }
                opcodes::OP_JALR => Ok(self.exec_jalr(rd, rs1, imm)),
                opcodes::OP_SYSTEM => {
                    self.exec_system(f3, imm)?;
                    Ok(next)
                }
                // The decoder maps exactly these four opcodes to I-type.
                _ => unreachable!("non-I-type opcode {opcode:#04x} decoded as I-type"),
            },
            Decoded::S {
                funct3: f3,
                rs1,
                rs2,
                imm,
                ..
            } => {
                self.exec_store(f3, rs1, rs2, imm)?;
                Ok(next)
            }
            Decoded::B {
                funct3: f3,
                rs1,
                rs2,
                offset,
                ..
            } => Ok(self.exec_branch(f3, rs1, rs2, offset)),
            Decoded::U {
                opcode, rd, imm, ..
            } => {
                self.stats.inst_alu += 1;
                if opcode == opcodes::OP_LUI {
                    self.regs.write(rd, imm);
                } else {
                    self.regs.write(rd, self.pc.wrapping_add(imm));
                }
                Ok(next)
            }
            Decoded::J { rd, offset, .. } => {
                self.stats.inst_branch += 1;
                self.stats.branches_taken += 1;
                self.regs.write(rd, next);
                Ok(self.pc.wrapping_add(offset as u32))
            }
            Decoded::Unknown { raw, opcode } => {
                self.diagnose(format!(
                    "unknown opcode {opcode:#04x} (instruction {raw:#010x})"
                ));
                Ok(next)
            }
        }
    }

    /// Register-register arithmetic (opcode 0x33).
    fn exec_op(&mut self, rd: usize, f3: u32, rs1: usize, rs2: usize, f7: u32) {
        self.stats.inst_alu += 1;
        let lhs = self.regs.read(rs1);
        let rhs = self.regs.read(rs2);
        let shamt = rhs & 0x1F;
        match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => self.regs.write(rd, lhs.wrapping_add(rhs)),
            (funct3::ADD_SUB, funct7::SUB_SRA) => self.regs.write(rd, lhs.wrapping_sub(rhs)),
            (funct3::SLL, _) => self.regs.write(rd, lhs << shamt),
            (funct3::SLT, _) => self.regs.write(rd, ((lhs as i32) < (rhs as i32)) as u32),
            (funct3::SLTU, _) => self.regs.write(rd, (lhs < rhs) as u32),
            (funct3::XOR, _) => self.regs.write(rd, lhs ^ rhs),
            (funct3::SRL_SRA, funct7::DEFAULT) => self.regs.write(rd, lhs >> shamt),
            (funct3::SRL_SRA, funct7::SUB_SRA) => {
                self.regs.write_signed(rd, (lhs as i32) >> shamt)
            }
            (funct3::OR, _) => self.regs.write(rd, lhs | rhs),
            (funct3::AND, _) => self.regs.write(rd, lhs & rhs),
            _ => self.diagnose(format!(
                "unknown R-type operation (funct3 {f3:#x}, funct7 {f7:#04x})"
            )),
        }
    }

    /// Register-immediate arithmetic (opcode 0x13).
    ///
    /// For shifts the amount is the low five bits of the immediate field
    /// (bits 24-20 of the raw encoding); funct7 distinguishes SRLI from SRAI.
    fn exec_op_imm(&mut self, raw: u32, rd: usize, f3: u32, rs1: usize, imm: i32) {
        self.stats.inst_alu += 1;
        let lhs = self.regs.read(rs1);
        let rhs = imm as u32;
        let shamt = rhs & 0x1F;
        match f3 {
            funct3::ADD_SUB => self.regs.write(rd, lhs.wrapping_add(rhs)),
            funct3::SLL => self.regs.write(rd, lhs << shamt),
            funct3::SLT => self.regs.write(rd, ((lhs as i32) < imm) as u32),
            // The immediate is sign-extended first, then compared unsigned.
            funct3::SLTU => self.regs.write(rd, (lhs < rhs) as u32),
            funct3::XOR => self.regs.write(rd, lhs ^ rhs),
            funct3::SRL_SRA => match raw.funct7() {
                funct7::DEFAULT => self.regs.write(rd, lhs >> shamt),
                funct7::SUB_SRA => self.regs.write_signed(rd, (lhs as i32) >> shamt),
                f7 => self.diagnose(format!("unknown immediate shift (funct7 {f7:#04x})")),
            },
            funct3::OR => self.regs.write(rd, lhs | rhs),
            funct3::AND => self.regs.write(rd, lhs & rhs),
            // funct3 is three bits and all eight encodings are handled above.
            _ => unreachable!(),
        }
    }

    /// Loads (opcode 0x03). LB/LH sign-extend, LBU/LHU zero-extend.
    fn exec_load(&mut self, rd: usize, f3: u32, rs1: usize, imm: i32) -> Result<(), Exception> {
        self.stats.inst_load += 1;
        let addr = self.regs.read(rs1).wrapping_add(imm as u32);
        match f3 {
            funct3::LB => {
                let v = self.mem.read_byte(addr)? as i8;
                self.regs.write_signed(rd, v as i32);
            }
            funct3::LH => {
                let v = self.mem.read_half(addr)? as i16;
                self.regs.write_signed(rd, v as i32);
            }
            funct3::LW => {
                let v = self.mem.read_word(addr)?;
                self.regs.write(rd, v);
            }
            funct3::LBU => {
                let v = self.mem.read_byte(addr)?;
                self.regs.write(rd, v as u32);
            }
            funct3::LHU => {
                let v = self.mem.read_half(addr)?;
                self.regs.write(rd, v as u32);
            }
            _ => self.diagnose(format!("unknown load instruction (funct3 {f3:#x})")),
        }
        Ok(())
    }

    /// Stores (opcode 0x23). The low 8/16/32 bits of rs2 are stored.
    fn exec_store(&mut self, f3: u32, rs1: usize, rs2: usize, imm: i32) -> Result<(), Exception> {
        self.stats.inst_store += 1;
        let addr = self.regs.read(rs1).wrapping_add(imm as u32);
        let src = self.regs.read(rs2);
        match f3 {
            funct3::SB => self.mem.write_byte(addr, src as u8)?,
            funct3::SH => self.mem.write_half(addr, src as u16)?,
            funct3::SW => self.mem.write_word(addr, src)?,
            _ => self.diagnose(format!("unknown store instruction (funct3 {f3:#x})")),
        }
        Ok(())
    }

    /// Conditional branches (opcode 0x63). Returns the next PC.
    fn exec_branch(&mut self, f3: u32, rs1: usize, rs2: usize, offset: i32) -> u32 {
        self.stats.inst_branch += 1;
        let lhs = self.regs.read(rs1);
        let rhs = self.regs.read(rs2);
        let taken = match f3 {
            funct3::BEQ => lhs == rhs,
            funct3::BNE => lhs != rhs,
            funct3::BLT => (lhs as i32) < (rhs as i32),
            funct3::BGE => (lhs as i32) >= (rhs as i32),
            funct3::BLTU => lhs < rhs,
            funct3::BGEU => lhs >= rhs,
            _ => {
                self.diagnose(format!("unknown branch instruction (funct3 {f3:#x})"));
                false
            }
        };
        if taken {
            self.stats.branches_taken += 1;
            self.pc.wrapping_add(offset as u32)
        } else {
            self.pc.wrapping_add(INSTRUCTION_BYTES)
        }
    }

    /// Jump and link register (opcode 0x67). Returns the next PC.
    ///
    /// The target drops its lowest bit; the link value is computed from the
    /// current PC before the redirect, so `jalr rd, 0(rd)` works.
    fn exec_jalr(&mut self, rd: usize, rs1: usize, imm: i32) -> u32 {
        self.stats.inst_branch += 1;
        self.stats.branches_taken += 1;
        let target = self.regs.read(rs1).wrapping_add(imm as u32) & !1;
        self.regs
            .write(rd, self.pc.wrapping_add(INSTRUCTION_BYTES));
        target
    }

    /// System instructions (opcode 0x73). Only ECALL is defined.
    fn exec_system(&mut self, f3: u32, imm: i32) -> Result<(), Exception> {
        self.stats.inst_system += 1;
        if f3 == 0 && imm == 0 {
            self.handle_ecall()
        } else {
            self.diagnose(format!(
                "unknown system instruction (funct3 {f3:#x}, imm {imm:#x})"
            ));
            Ok(())
        }
    }
}
