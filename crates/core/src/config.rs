//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, stack-pointer policy).
//! 2. **Structures:** Hierarchical config for general behaviour and memory.
//! 3. **Enums:** The unknown-instruction policy.
//!
//! Configuration is supplied as JSON (via the CLI's `--config` flag) or
//! built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::MEMORY_SIZE;

/// Root configuration for a simulator instance.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// Policy applied when execution hits an encoding the simulator does not
/// recognise (unknown opcode, funct3/funct7 combination, or ECALL service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownPolicy {
    /// Report the offending fields and continue as if the instruction were
    /// a no-op. This keeps multi-fault test programs runnable end to end.
    #[default]
    DiagnoseAndContinue,
    /// Report the offending fields and stop the run loop.
    HaltOnUnknown,
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable instruction tracing to stderr (PC and disassembly per step).
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print execution statistics after the final register dump.
    #[serde(default)]
    pub print_stats: bool,

    /// Policy for unknown instruction encodings.
    #[serde(default)]
    pub unknown_policy: UnknownPolicy,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            print_stats: false,
            unknown_policy: UnknownPolicy::default(),
        }
    }
}

/// Memory settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Size of simulated memory in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Pre-load x2 (sp) with the top-of-memory address at reset.
    ///
    /// Programs that rely on a particular stack location should still set
    /// x2 themselves; this default merely gives a usable full-descending
    /// stack out of the box.
    #[serde(default = "MemoryConfig::default_init_stack_pointer")]
    pub init_stack_pointer: bool,
}

impl MemoryConfig {
    /// Returns the default memory size in bytes.
    fn default_size() -> usize {
        MEMORY_SIZE
    }

    /// Stack-pointer initialisation defaults to on.
    fn default_init_stack_pointer() -> bool {
        true
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: MEMORY_SIZE,
            init_stack_pointer: true,
        }
    }
}
