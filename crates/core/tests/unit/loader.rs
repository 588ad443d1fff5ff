//! # Loader Tests
//!
//! Tests for the program-image and golden-results loaders, including size
//! validation and companion-path derivation.

use std::io::Write;
use std::path::Path;

use rv32sim_core::common::error::LoadError;
use rv32sim_core::sim::loader;
use tempfile::NamedTempFile;

/// Helper to create a temporary file with the given contents.
fn create_temp_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_binary_success() {
    let data = vec![0x13, 0x00, 0x00, 0x00]; // a single NOP
    let file = create_temp_file(&data);

    let loaded = loader::load_binary(file.path()).unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn test_load_binary_empty_file() {
    let file = create_temp_file(&[]);
    let loaded = loader::load_binary(file.path()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_load_binary_missing_file() {
    let err = loader::load_binary(Path::new("/no/such/file.bin")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_load_results_little_endian() {
    let mut bytes = Vec::with_capacity(128);
    for i in 0..32u32 {
        bytes.extend_from_slice(&(i * 3).to_le_bytes());
    }
    let file = create_temp_file(&bytes);

    let expected = loader::load_results(file.path()).unwrap();
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(*value, i as u32 * 3);
    }
}

#[test]
fn test_load_results_byte_order() {
    // x0 = 0x04030201: the first file byte is the least significant.
    let mut bytes = vec![0u8; 128];
    bytes[0] = 0x01;
    bytes[1] = 0x02;
    bytes[2] = 0x03;
    bytes[3] = 0x04;
    let file = create_temp_file(&bytes);

    let expected = loader::load_results(file.path()).unwrap();
    assert_eq!(expected[0], 0x0403_0201);
}

#[test]
fn test_load_results_wrong_size_rejected() {
    let file = create_temp_file(&[0u8; 64]);
    let err = loader::load_results(file.path()).unwrap_err();
    match err {
        LoadError::BadResultsSize { found } => assert_eq!(found, 64),
        other => panic!("expected BadResultsSize, got {other:?}"),
    }

    let file = create_temp_file(&[0u8; 132]);
    assert!(matches!(
        loader::load_results(file.path()),
        Err(LoadError::BadResultsSize { found: 132 })
    ));
}

#[test]
fn test_derive_results_path() {
    assert_eq!(
        loader::derive_results_path(Path::new("tests/task1/addi.bin")),
        Some("tests/task1/addi.res".into())
    );
    assert_eq!(loader::derive_results_path(Path::new("prog.txt")), None);
    assert_eq!(loader::derive_results_path(Path::new("prog")), None);
}
