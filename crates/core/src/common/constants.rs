//! Common constants used throughout the simulator.

/// Default size of simulated memory in bytes (1 MiB).
///
/// The program image is loaded at address 0 and may use the rest of the
/// address range up to this limit as data and stack space.
pub const MEMORY_SIZE: usize = 1024 * 1024;

/// Number of general-purpose registers in the architectural file.
pub const NUM_REGISTERS: usize = 32;

/// Width of one instruction in bytes.
///
/// Every RV32I instruction is exactly one 32-bit word; the program counter
/// advances in multiples of this value.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Exact size of a golden-results (`.res`) file in bytes.
///
/// 32 registers, one little-endian 32-bit word each.
pub const RESULTS_FILE_SIZE: usize = NUM_REGISTERS * 4;
