//! RV32I functional simulator CLI.
//!
//! This binary is the command-line front end for the simulator core. It
//! performs:
//! 1. **Argument parsing:** Program path and option flags.
//! 2. **Configuration:** Built-in defaults, optionally overridden by a JSON
//!    config file and individual flags.
//! 3. **Self-checking:** When a companion `.res` file exists next to the
//!    program image, the final register state is compared against it.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rv32sim_core::config::{Config, UnknownPolicy};
use rv32sim_core::sim::loader;
use rv32sim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "RV32I functional instruction-set simulator",
    long_about = "Run a flat little-endian RV32I binary image.\n\n\
        The image is loaded at address 0 and executed until the program \
        exits via ECALL or the PC walks past the end of the image. If a \
        companion .res file (32 little-endian words of expected register \
        values) exists next to the image, the final register state is \
        checked against it.\n\n\
        Examples:\n  rv32sim tests/task1/addi.bin\n  rv32sim --trace --strict prog.bin"
)]
struct Cli {
    /// RISC-V program image (flat little-endian .bin).
    bin: PathBuf,

    /// Trace each executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Halt on unknown instructions instead of diagnosing and continuing.
    #[arg(long)]
    strict: bool,

    /// Print execution statistics after the register dump.
    #[arg(long)]
    stats: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => load_config(path),
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.stats {
        config.general.print_stats = true;
    }
    if cli.strict {
        config.general.unknown_policy = UnknownPolicy::HaltOnUnknown;
    }

    let image = match loader::load_binary(&cli.bin) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error loading file: {e}");
            process::exit(1);
        }
    };

    // Load the golden results up front so a malformed .res file is caught
    // before any simulation output.
    let expected = match loader::derive_results_path(&cli.bin) {
        Some(res_path) if res_path.exists() => match loader::load_results(&res_path) {
            Ok(expected) => Some(expected),
            Err(e) => {
                eprintln!("Error loading file: {e}");
                process::exit(1);
            }
        },
        _ => None,
    };

    let mut sim = Simulator::new(&config);
    let size = match sim.load_program(&image) {
        Ok(size) => size,
        Err(e) => {
            eprintln!("Error loading file: {e}");
            process::exit(1);
        }
    };
    println!("Loaded {size} bytes from {}", cli.bin.display());
    println!("Starting simulation!");

    let outcome = sim.run();
    sim.report(&outcome);

    if let Some(expected) = expected {
        sim.compare(&expected);
    }

    if config.general.print_stats {
        sim.cpu.stats.print();
    }
}

/// Loads a JSON configuration file, exiting the process on failure.
fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {e}", path.display());
        process::exit(1);
    })
}
