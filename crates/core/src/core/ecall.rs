//! Environment-call services.
//!
//! The ECALL instruction transfers control to the simulator's environment
//! layer. The service number is taken from a7 (x17); arguments come from
//! a0 (x10). Output goes to the CPU's console sink, which is stdout by
//! default and a capture buffer in tests.

use std::io::Write;

use super::{Cpu, Halt};
use crate::common::error::Exception;
use crate::isa::abi;

/// Print the signed integer in a0 in decimal form.
pub const SERVICE_PRINT_INT: u32 = 1;
/// Print the NUL-terminated string starting at the address in a0.
pub const SERVICE_PRINT_STRING: u32 = 4;
/// Halt the simulation.
pub const SERVICE_EXIT: u32 = 10;
/// Halt the simulation and record the exit code passed in a0.
pub const SERVICE_EXIT_CODE: u32 = 93;

impl Cpu {
    /// Dispatches an environment call on the service number in a7.
    ///
    /// Unknown service numbers are diagnostics; execution continues with
    /// the following instruction. String reads that run past the end of
    /// memory fault like any other load.
    pub(crate) fn handle_ecall(&mut self) -> Result<(), Exception> {
        let service = self.regs.read(abi::REG_A7);
        match service {
            SERVICE_PRINT_INT => {
                let value = self.regs.read_signed(abi::REG_A0);
                write!(self.console, "{value}").ok();
                self.console.flush().ok();
            }
            SERVICE_PRINT_STRING => {
                let mut addr = self.regs.read(abi::REG_A0);
                let mut bytes = Vec::new();
                loop {
                    let byte = self.mem.read_byte(addr)?;
                    if byte == 0 {
                        break;
                    }
                    bytes.push(byte);
                    addr = addr.wrapping_add(1);
                }
                self.console.write_all(&bytes).ok();
                self.console.flush().ok();
            }
            SERVICE_EXIT => {
                self.halt = Some(Halt::Exit);
            }
            SERVICE_EXIT_CODE => {
                self.halt = Some(Halt::ExitCode(self.regs.read(abi::REG_A0)));
            }
            _ => self.diagnose(format!("unknown ECALL service number: {service}")),
        }
        Ok(())
    }
}
