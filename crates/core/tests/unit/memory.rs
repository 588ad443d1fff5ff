//! # Memory Tests
//!
//! Tests for the flat byte-addressable memory: little-endian byte order,
//! unaligned accesses, bounds checking, and image loading.

use rv32sim_core::common::error::{Exception, LoadError};
use rv32sim_core::core::memory::Memory;

#[test]
fn test_memory_zero_initialized() {
    let mem = Memory::new(64);
    for addr in 0..64 {
        assert_eq!(mem.read_byte(addr).unwrap(), 0);
    }
}

#[test]
fn test_word_is_little_endian() {
    let mut mem = Memory::new(64);
    mem.write_word(0x10, 0x1234_5678).unwrap();
    assert_eq!(mem.read_byte(0x10).unwrap(), 0x78);
    assert_eq!(mem.read_byte(0x11).unwrap(), 0x56);
    assert_eq!(mem.read_byte(0x12).unwrap(), 0x34);
    assert_eq!(mem.read_byte(0x13).unwrap(), 0x12);
}

#[test]
fn test_half_is_little_endian() {
    let mut mem = Memory::new(64);
    mem.write_half(0x20, 0xBEEF).unwrap();
    assert_eq!(mem.read_byte(0x20).unwrap(), 0xEF);
    assert_eq!(mem.read_byte(0x21).unwrap(), 0xBE);
    assert_eq!(mem.read_half(0x20).unwrap(), 0xBEEF);
}

#[test]
fn test_word_assembled_from_bytes() {
    let mut mem = Memory::new(64);
    mem.write_byte(0, 0x93).unwrap();
    mem.write_byte(1, 0x00).unwrap();
    mem.write_byte(2, 0x20).unwrap();
    mem.write_byte(3, 0x00).unwrap();
    assert_eq!(mem.read_word(0).unwrap(), 0x0020_0093);
}

#[test]
fn test_round_trip_all_widths() {
    let mut mem = Memory::new(64);

    mem.write_byte(5, 0xA5).unwrap();
    assert_eq!(mem.read_byte(5).unwrap(), 0xA5);

    mem.write_half(6, 0x55AA).unwrap();
    assert_eq!(mem.read_half(6).unwrap(), 0x55AA);

    mem.write_word(8, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read_word(8).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn test_unaligned_accesses_permitted() {
    let mut mem = Memory::new(64);
    mem.write_word(0x11, 0xCAFE_BABE).unwrap();
    assert_eq!(mem.read_word(0x11).unwrap(), 0xCAFE_BABE);

    mem.write_half(0x17, 0x1234).unwrap();
    assert_eq!(mem.read_half(0x17).unwrap(), 0x1234);
}

#[test]
fn test_read_out_of_range_is_load_fault() {
    let mem = Memory::new(16);
    assert_eq!(
        mem.read_byte(16),
        Err(Exception::LoadAccessFault { addr: 16, width: 1 })
    );
    assert_eq!(
        mem.read_half(15),
        Err(Exception::LoadAccessFault { addr: 15, width: 2 })
    );
    assert_eq!(
        mem.read_word(13),
        Err(Exception::LoadAccessFault { addr: 13, width: 4 })
    );
}

#[test]
fn test_write_out_of_range_is_store_fault() {
    let mut mem = Memory::new(16);
    assert_eq!(
        mem.write_byte(16, 0),
        Err(Exception::StoreAccessFault { addr: 16, width: 1 })
    );
    assert_eq!(
        mem.write_word(13, 0),
        Err(Exception::StoreAccessFault { addr: 13, width: 4 })
    );
}

#[test]
fn test_access_at_exact_boundary_succeeds() {
    let mut mem = Memory::new(16);
    assert!(mem.write_word(12, 0x0102_0304).is_ok());
    assert_eq!(mem.read_word(12).unwrap(), 0x0102_0304);
    assert!(mem.read_byte(15).is_ok());
}

#[test]
fn test_huge_address_does_not_wrap() {
    let mem = Memory::new(16);
    assert_eq!(
        mem.read_word(u32::MAX),
        Err(Exception::LoadAccessFault {
            addr: u32::MAX,
            width: 4
        })
    );
}

#[test]
fn test_load_image_copies_to_address_zero() {
    let mut mem = Memory::new(16);
    let size = mem.load_image(&[0xAA, 0xBB, 0xCC]).unwrap();
    assert_eq!(size, 3);
    assert_eq!(mem.read_byte(0).unwrap(), 0xAA);
    assert_eq!(mem.read_byte(1).unwrap(), 0xBB);
    assert_eq!(mem.read_byte(2).unwrap(), 0xCC);
    assert_eq!(mem.read_byte(3).unwrap(), 0);
}

#[test]
fn test_load_image_too_large_is_rejected() {
    let mut mem = Memory::new(8);
    let err = mem.load_image(&[0u8; 9]).unwrap_err();
    match err {
        LoadError::ProgramTooLarge { size, capacity } => {
            assert_eq!(size, 9);
            assert_eq!(capacity, 8);
        }
        other => panic!("expected ProgramTooLarge, got {other:?}"),
    }
}
