//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the RV32I base integer instruction set.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all six RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// funct3 codes distinguishing operations within a major opcode.
pub mod funct3;

/// funct7 codes distinguishing alternate encodings (ADD/SUB, SRL/SRA).
pub mod funct7;

/// Instruction field extraction and the decoded-instruction type.
pub mod instruction;

/// Major opcodes (bits 6-0) of the base integer instruction set.
pub mod opcodes;
