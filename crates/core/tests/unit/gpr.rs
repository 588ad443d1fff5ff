//! # Register File Tests
//!
//! Tests for the general-purpose register file implementation.

use rv32sim_core::core::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_x0_always_zero() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_x0_ignores_all_writes() {
    let mut gpr = Gpr::new();
    for value in [1u32, 0xFFFF_FFFF, 0x8000_0000] {
        gpr.write(0, value);
        assert_eq!(gpr.read(0), 0);
    }
}

#[test]
fn test_gpr_read_write_x1() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x1234_5678);
    assert_eq!(gpr.read(1), 0x1234_5678);
}

#[test]
fn test_gpr_read_write_x31() {
    let mut gpr = Gpr::new();
    gpr.write(31, 0x9999_AAAA);
    assert_eq!(gpr.read(31), 0x9999_AAAA);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = (i as u32) << 16 | (i as u32);
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_register_independence() {
    let mut gpr = Gpr::new();
    gpr.write(1, 111);
    gpr.write(2, 222);
    gpr.write(3, 333);

    assert_eq!(gpr.read(1), 111);
    assert_eq!(gpr.read(2), 222);
    assert_eq!(gpr.read(3), 333);
}

#[test]
fn test_gpr_signed_views() {
    let mut gpr = Gpr::new();
    gpr.write_signed(5, -1);
    assert_eq!(gpr.read(5), 0xFFFF_FFFF);
    assert_eq!(gpr.read_signed(5), -1);

    gpr.write(6, 0x8000_0000);
    assert_eq!(gpr.read_signed(6), i32::MIN);
}

#[test]
fn test_gpr_snapshot_reports_x0_as_zero() {
    let mut gpr = Gpr::new();
    gpr.write(1, 42);
    let snap = gpr.snapshot();
    assert_eq!(snap[0], 0);
    assert_eq!(snap[1], 42);
    assert_eq!(snap[31], 0);
}

#[test]
fn test_gpr_x0_after_writes_to_others() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        gpr.write(i, 0x1111_1111);
    }
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_dump_does_not_panic() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x1234_5678);
    gpr.write(31, 0xFFFF_FFFF);
    gpr.dump();
}
