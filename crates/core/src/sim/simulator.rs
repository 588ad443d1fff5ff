//! Simulation driver: owns the CPU and runs it to completion.
//!
//! The driver loads a program image, runs the fetch-decode-execute loop
//! until a halt condition, reports the final register state, and optionally
//! compares it against a golden reference.
//!
//! Halt conditions: PC walking past the end of the loaded image, an exit
//! environment call, a fatal fault, or the halt-on-unknown policy firing.
//! Fatal faults still report the final register state so multi-fault test
//! programs remain debuggable.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::{Exception, LoadError};
use crate::config::Config;
use crate::core::{Cpu, Halt};

/// How a simulation run terminated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The PC reached or passed the end of the loaded program image.
    PcOutOfBounds { pc: u32 },
    /// The program executed the exit environment call (service 10).
    Exit,
    /// The program executed exit-with-code (service 93).
    ExitWithCode(u32),
    /// An unknown encoding was hit under the halt-on-unknown policy.
    UnknownInstruction,
    /// A fatal fault terminated the run.
    Fault(Exception),
}

/// Top-level simulation driver.
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    program_size: usize,
}

impl Simulator {
    /// Creates a simulator with a freshly reset CPU.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            program_size: 0,
        }
    }

    /// Loads a program image at address 0 and rewinds the PC.
    ///
    /// # Arguments
    ///
    /// * `image` - The raw program bytes.
    ///
    /// # Returns
    ///
    /// The image size in bytes, or an error if the image does not fit in
    /// memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        let size = self.cpu.mem.load_image(image)?;
        self.program_size = size;
        self.cpu.pc = 0;
        Ok(size)
    }

    /// Returns the loaded program size in bytes.
    pub fn program_size(&self) -> usize {
        self.program_size
    }

    /// Runs the fetch-decode-execute loop until a halt condition.
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if self.cpu.pc as u64 >= self.program_size as u64 {
                return RunOutcome::PcOutOfBounds { pc: self.cpu.pc };
            }
            if let Err(fault) = self.cpu.step() {
                return RunOutcome::Fault(fault);
            }
            match self.cpu.halt.take() {
                Some(Halt::Exit) => return RunOutcome::Exit,
                Some(Halt::ExitCode(code)) => return RunOutcome::ExitWithCode(code),
                Some(Halt::UnknownInstruction) => return RunOutcome::UnknownInstruction,
                None => {}
            }
        }
    }

    /// Reports the end of the run and the final register state.
    ///
    /// Prints the halt reason, an end-of-simulation header, and every
    /// non-zero register as `x{i}: {decimal} (0x{hex})`.
    pub fn report(&self, outcome: &RunOutcome) {
        match outcome {
            RunOutcome::PcOutOfBounds { .. } => println!("PC out of bounds. Halting."),
            RunOutcome::Exit => println!("\n--- ECALL: Exit ---"),
            RunOutcome::ExitWithCode(code) => {
                println!("\n--- ECALL: Exit with code {code} ---")
            }
            RunOutcome::UnknownInstruction => println!("Unknown instruction. Halting."),
            RunOutcome::Fault(fault) => eprintln!("[!] FATAL: {fault}"),
        }

        println!("\n--- Simulation Finished ---");
        println!("Final Register State (non-zero):");
        for (i, value) in self.cpu.regs.snapshot().iter().enumerate() {
            if *value != 0 {
                println!("x{i}: {} (0x{value:08X})", *value as i32);
            }
        }
    }

    /// Compares the final register state against a golden reference.
    ///
    /// Prints `TEST PASSED`, or one line per mismatching register followed
    /// by `TEST FAILED`.
    ///
    /// # Returns
    ///
    /// `true` when all 32 registers match.
    pub fn compare(&self, expected: &[u32; NUM_REGISTERS]) -> bool {
        let actual = self.cpu.regs.snapshot();
        let mut passed = true;
        for i in 0..NUM_REGISTERS {
            if actual[i] != expected[i] {
                println!(
                    "Mismatch in x{i}: expected {} (0x{:08X}), got {} (0x{:08X})",
                    expected[i] as i32, expected[i], actual[i] as i32, actual[i]
                );
                passed = false;
            }
        }
        if passed {
            println!("TEST PASSED");
        } else {
            println!("TEST FAILED");
        }
        passed
    }
}
