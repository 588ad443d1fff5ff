use std::io::Write;
use std::sync::{Arc, Mutex};

use rv32sim_core::config::Config;
use rv32sim_core::sim::simulator::{RunOutcome, Simulator};

/// Console sink that captures environment-call output for assertions.
///
/// Clones share the same buffer, so the harness keeps one end while the
/// CPU writes to the other.
#[derive(Clone, Default)]
pub struct ConsoleCapture(Arc<Mutex<Vec<u8>>>);

impl ConsoleCapture {
    /// Returns everything the program has printed so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for ConsoleCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Shared context for simulator tests: a fresh machine with a captured
/// console.
pub struct TestContext {
    pub sim: Simulator,
    console: ConsoleCapture,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut sim = Simulator::new(&config);
        let console = ConsoleCapture::default();
        sim.cpu.console = Box::new(console.clone());
        Self { sim, console }
    }

    /// Load a sequence of 32-bit instructions at address 0 and rewind the PC.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        let mut image = Vec::with_capacity(instructions.len() * 4);
        for inst in instructions {
            image.extend_from_slice(&inst.to_le_bytes());
        }
        self.sim
            .load_program(&image)
            .expect("test program fits in memory");
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Write raw bytes into simulated memory.
    pub fn write_bytes(&mut self, addr: u32, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.sim
                .cpu
                .mem
                .write_byte(addr + i as u32, *byte)
                .expect("test data fits in memory");
        }
    }

    /// Run the loaded program to completion.
    pub fn run(&mut self) -> RunOutcome {
        self.sim.run()
    }

    /// Returns everything the program printed through ECALL services.
    pub fn console_output(&self) -> String {
        self.console.contents()
    }
}
