//! Fault and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Exceptions:** Fatal runtime faults that terminate the run loop
//!    (out-of-range memory accesses, misaligned instruction fetches).
//! 2. **Load Errors:** Failures while reading the program image or the
//!    golden-results file, reported before simulation starts.
//!
//! Unknown instruction encodings are deliberately *not* represented here:
//! they are runtime diagnostics handled by the executor, which reports the
//! offending fields and continues.

use std::fmt;
use std::io;

/// Fatal runtime fault raised by the executor.
///
/// Any of these terminates the run loop. The final register state is still
/// reported so multi-fault test programs remain debuggable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exception {
    /// A load (or instruction fetch) touched memory outside `[0, size)`.
    ///
    /// Carries the faulting address and the access width in bytes.
    LoadAccessFault { addr: u32, width: u32 },

    /// A store touched memory outside `[0, size)`.
    ///
    /// Carries the faulting address and the access width in bytes.
    StoreAccessFault { addr: u32, width: u32 },

    /// The program counter was not a multiple of four at a fetch.
    ///
    /// Without compressed instructions every valid instruction address is
    /// word-aligned, so this indicates a corrupted jump target.
    MisalignedFetch { pc: u32 },
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::LoadAccessFault { addr, width } => {
                write!(f, "load access fault at {addr:#010x} (width {width})")
            }
            Exception::StoreAccessFault { addr, width } => {
                write!(f, "store access fault at {addr:#010x} (width {width})")
            }
            Exception::MisalignedFetch { pc } => {
                write!(f, "misaligned instruction fetch at {pc:#010x}")
            }
        }
    }
}

impl std::error::Error for Exception {}

/// Error while loading the program image or the golden-results file.
///
/// When any of these occurs the simulator does not start.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),

    /// The program image does not fit in simulated memory.
    ProgramTooLarge { size: usize, capacity: usize },

    /// The golden-results file is not exactly 32 little-endian words.
    BadResultsSize { found: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read file: {e}"),
            LoadError::ProgramTooLarge { size, capacity } => write!(
                f,
                "program is too big for the memory at hand ({size} bytes, capacity {capacity})"
            ),
            LoadError::BadResultsSize { found } => write!(
                f,
                "results file is not the correct size: expected {} bytes, found {found}",
                crate::common::constants::RESULTS_FILE_SIZE
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}
