/// RV32I instruction encoders for building test programs.
pub mod encode;

/// Test harness: simulator construction, program loading, console capture.
pub mod harness;
