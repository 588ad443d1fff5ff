//! General-purpose register file.
//!
//! This module implements the 32-entry integer register file. It performs
//! the following:
//! 1. **Storage:** Maintains 32 registers (`x0`-`x31`) as 32-bit words.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to
//!    zero: reads of index 0 return 0 and writes to index 0 are discarded.
//! 3. **Debugging:** Provides a utility for dumping the register state.

use crate::common::constants::NUM_REGISTERS;

/// General-purpose register file.
///
/// Register `x0` is hardwired to zero and cannot be modified. All other
/// registers hold raw 32-bit words; whether a value is interpreted as signed
/// or unsigned is decided per instruction by the executor.
#[derive(Clone)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `x0` always
    /// returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Reads a register value as a two's-complement signed integer.
    pub fn read_signed(&self, idx: usize) -> i32 {
        self.read(idx) as i32
    }

    /// Writes a value to a register.
    ///
    /// Writes to register `x0` are silently discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Writes a signed value to a register.
    pub fn write_signed(&mut self, idx: usize, val: i32) {
        self.write(idx, val as u32);
    }

    /// Returns a snapshot of all 32 register values, `x0` first.
    pub fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for
    /// debugging purposes.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
