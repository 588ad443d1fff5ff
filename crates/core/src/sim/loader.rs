//! Program and golden-results loaders.
//!
//! This module reads the two on-disk inputs of a simulation run:
//! 1. **Program image (`.bin`):** A flat byte file; byte 0 of the file
//!    becomes byte 0 of simulated memory. No header, no relocation.
//! 2. **Golden results (`.res`):** Exactly 128 bytes holding the 32
//!    expected final register values as little-endian words, x0 first.
//!
//! All failures are `LoadError`s; the simulator does not start when
//! loading fails.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{NUM_REGISTERS, RESULTS_FILE_SIZE};
use crate::common::error::LoadError;

/// Reads a program image from disk.
///
/// The size check against simulated memory happens at load time in
/// `Memory::load_image`; this function only performs the file read.
///
/// # Arguments
///
/// * `path` - Path to the `.bin` file.
///
/// # Returns
///
/// The raw bytes of the file.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, LoadError> {
    Ok(fs::read(path)?)
}

/// Reads a golden-results file from disk.
///
/// The file must be exactly 32 little-endian 32-bit words (128 bytes),
/// register x0 first through x31 last.
///
/// # Arguments
///
/// * `path` - Path to the `.res` file.
///
/// # Returns
///
/// The 32 expected register values.
pub fn load_results(path: &Path) -> Result<[u32; NUM_REGISTERS], LoadError> {
    let bytes = fs::read(path)?;
    if bytes.len() != RESULTS_FILE_SIZE {
        return Err(LoadError::BadResultsSize { found: bytes.len() });
    }

    let mut expected = [0u32; NUM_REGISTERS];
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        expected[i] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(expected)
}

/// Derives the companion golden-results path for a program image.
///
/// Replaces a trailing `.bin` with `.res`. Returns `None` when the path
/// does not end in `.bin`, in which case comparison is skipped.
pub fn derive_results_path(bin_path: &Path) -> Option<PathBuf> {
    let name = bin_path.to_str()?;
    let stem = name.strip_suffix(".bin")?;
    Some(PathBuf::from(format!("{stem}.res")))
}
