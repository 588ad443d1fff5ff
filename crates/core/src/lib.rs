//! RV32I functional instruction-set simulator library.
//!
//! This crate implements a functional (untimed) simulator for the RISC-V
//! RV32I base integer profile with the following:
//! 1. **Core:** Register file, flat little-endian memory, and the
//!    fetch-decode-execute step.
//! 2. **ISA:** Instruction decoding for all six RV32I formats and a
//!    disassembler for tracing and diagnostics.
//! 3. **Environment:** A minimal ECALL ABI for console I/O and program exit.
//! 4. **Simulation:** Binary loader, golden-register comparison, driver loop,
//!    configuration, and statistics collection.

/// Common types and constants (errors, system-wide sizes).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (registers, memory, execution, environment calls).
pub mod core;
/// Instruction set (decode, instruction fields, ABI, opcodes).
pub mod isa;
/// Binary loader, golden-results loader, and the simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and statistics.
pub use crate::core::Cpu;
/// Top-level driver; owns the CPU and the run loop.
pub use crate::sim::simulator::Simulator;
