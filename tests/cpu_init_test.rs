//! Tests for CPU construction, reset and configuration.

use cpu6502::{Cpu, CpuConfig, Endianness, Flag, Memory, MemoryBus, Status, DEFAULT_BRK_VECTOR};

fn setup_cpu() -> Cpu<Memory> {
    Cpu::new(Memory::new())
}

#[test]
fn test_power_on_state() {
    let cpu = setup_cpu();

    assert_eq!(cpu.pc(), 0x0600);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.cycles(), 0);
    for flag in Flag::ALL {
        assert!(!cpu.flag(flag), "{:?} should be clear after reset", flag);
    }
}

#[test]
fn test_reset_preserves_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0xAB);
    cpu.set_a(0x55);
    cpu.set_status(Status::from_bits(0xC3));

    cpu.reset();

    assert_eq!(cpu.read_byte(0x1234), 0xAB);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.status(), Status::default());
}

#[test]
fn test_custom_reset_address() {
    let config = CpuConfig::default().with_reset_address(0xC000);
    let cpu = Cpu::with_config(Memory::new(), config);

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.config().brk_vector, DEFAULT_BRK_VECTOR);
}

#[test]
fn test_default_config() {
    let cpu = setup_cpu();

    assert_eq!(cpu.config().reset_address, 0x0600);
    assert_eq!(cpu.config().brk_vector, 0xFFFE);
    assert_eq!(cpu.config().endianness, Endianness::Little);
}

#[test]
fn test_into_memory_returns_store() {
    let mut cpu = setup_cpu();
    cpu.write_byte(0x0200, 0x99);

    let memory = cpu.into_memory();
    assert_eq!(memory.read(0x0200), 0x99);
}

#[test]
fn test_snapshot_matches_registers() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_flag(Flag::Carry, true);

    let snapshot = cpu.snapshot();
    assert_eq!(snapshot.a, 0x01);
    assert_eq!(snapshot.x, 0x02);
    assert_eq!(snapshot.y, 0x03);
    assert_eq!(snapshot.pc, 0x0600);
    assert_eq!(snapshot.sp, 0xFF);
    assert!(snapshot.flag(Flag::Carry));
    assert_eq!(
        snapshot.to_string(),
        "A: 01 X: 02 Y: 03 SP: FF PC: 0600 P: .......C (01)"
    );
}
