//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components:
//! 1. **Constants:** System-wide constants for memory, instructions, and the
//!    golden-results file format.
//! 2. **Error Handling:** Fatal runtime exceptions and load-time errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for runtime faults and program loading.
pub mod error;

pub use error::{Exception, LoadError};
