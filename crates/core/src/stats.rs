//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Totals:** Retired instructions and host wall-clock throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch,
//!    system).
//! 3. **Branches:** Taken-branch count (including jumps).
//! 4. **Diagnostics:** Number of unknown encodings reported during the run.

use std::time::Instant;

/// Execution statistics for one simulation run.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed.
    pub instructions_retired: u64,

    /// Count of ALU (register and immediate arithmetic, LUI/AUIPC)
    /// instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch and jump instructions retired.
    pub inst_branch: u64,
    /// Count of system (ECALL) instructions retired.
    pub inst_system: u64,

    /// Number of branches and jumps that redirected the PC.
    pub branches_taken: u64,

    /// Number of runtime diagnostics emitted for unknown encodings.
    pub diagnostics: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_system: 0,
            branches_taken: 0,
            diagnostics: 0,
        }
    }
}

impl SimStats {
    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let mips = (self.instructions_retired as f64 / seconds) / 1_000_000.0;
        let total = instr as f64;

        println!("\n==========================================================");
        println!("RV32I SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {:.2}", mips);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total) * 100.0
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            (self.inst_branch as f64 / total) * 100.0
        );
        println!(
            "  op.system              {} ({:.2}%)",
            self.inst_system,
            (self.inst_system as f64 / total) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("  branches.taken         {}", self.branches_taken);
        println!("  diagnostics            {}", self.diagnostics);
        println!("==========================================================");
    }
}
