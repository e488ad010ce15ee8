//! Tests for INC, DEC, INX, INY, DEX and DEY.

use cpu6502::{Cpu, Flag, Memory, MemoryBus};

fn setup_cpu() -> Cpu<Memory> {
    Cpu::new(Memory::new())
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_image(0x0600, &[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0x7F);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.read_byte(0x0010), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 5);
}

#[test]
fn test_inc_wraps_and_keeps_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_image(0x0600, &[0xEE, 0x00, 0x20]); // INC $2000
    cpu.memory_mut().write(0x2000, 0xFF);

    cpu.step_instruction();

    assert_eq!(cpu.read_byte(0x2000), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
}

#[test]
fn test_dec_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_image(0x0600, &[0xDE, 0x00, 0x20]); // DEC $2000,X
    cpu.memory_mut().write(0x2001, 0x01);
    cpu.set_x(0x01);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.read_byte(0x2001), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 7);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_image(0x0600, &[0xC6, 0x20]);
    cpu.set_flag(Flag::Carry, true);

    cpu.step_instruction();

    assert_eq!(cpu.read_byte(0x0020), 0xFF);
    assert!(cpu.flag_n());
    assert!(cpu.flag_c());
}

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0xE8);
    cpu.set_x(0xFF);

    cpu.step_instruction();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_iny_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0xC8);
    cpu.set_y(0x7F);

    cpu.step_instruction();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0xCA);
    cpu.set_x(0x01);

    cpu.step_instruction();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dey_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x88);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_count_down_loop() {
    // LDX #$05 ; loop: DEX ; BNE loop
    let mut cpu = setup_cpu();
    cpu.memory_mut()
        .load_image(0x0600, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD]);

    cpu.step_instruction();
    for _ in 0..5 {
        cpu.step_instruction(); // DEX
        cpu.step_instruction(); // BNE
    }

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.pc(), 0x0605);
    assert_eq!(cpu.cycles(), 2 + 5 * 4);
}
