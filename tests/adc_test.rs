//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Binary addition with and without carry in
//! - Flag updates (C, Z, V, N)
//! - Decimal mode correction
//! - Addressing modes reaching memory operands

use cpu6502::{Cpu, Flag, Memory, MemoryBus};

/// Helper function to create a CPU with the program counter at 0x0600
fn setup_cpu() -> Cpu<Memory> {
    Cpu::new(Memory::new())
}

/// Loads `ADC #value` at the program base and executes it.
fn adc_immediate(cpu: &mut Cpu<Memory>, value: u8) {
    cpu.memory_mut().write(0x0600, 0x69);
    cpu.memory_mut().write(0x0601, value);
    cpu.step_instruction();
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);

    adc_immediate(&mut cpu, 0x05);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0602);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.set_flag(Flag::Carry, true);

    adc_immediate(&mut cpu, 0x05);

    assert_eq!(cpu.a(), 0x16);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_in_wraps_to_one() {
    // C=1, A=0xFF, M=0x01 -> A=0x01, C=1, Z=0, V=0
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag(Flag::Carry, true);

    adc_immediate(&mut cpu, 0x01);

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

// ========== Flag Tests ==========

#[test]
fn test_adc_carry_and_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);

    adc_immediate(&mut cpu, 0xFF);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_overflow_positive() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);

    adc_immediate(&mut cpu, 0x50);

    // 80 + 80 = 160, out of signed range
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    adc_immediate(&mut cpu, 0xFF);

    // -128 + -1 = -129
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x7F);

    adc_immediate(&mut cpu, 0x80);

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_adc_leaves_decimal_and_interrupt_flags() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::InterruptDisable, true);
    cpu.set_a(0x01);

    adc_immediate(&mut cpu, 0x01);

    assert!(cpu.flag_i());
    assert!(!cpu.flag_d());
}

// ========== Decimal Mode Tests ==========

#[test]
fn test_adc_decimal_low_nibble_correction() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Decimal, true);
    cpu.set_a(0x15);

    adc_immediate(&mut cpu, 0x27);

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Decimal, true);
    cpu.set_a(0x58);

    adc_immediate(&mut cpu, 0x46);

    // 58 + 46 = 104
    assert_eq!(cpu.a(), 0x04);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_99_plus_1() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Decimal, true);
    cpu.set_a(0x99);

    adc_immediate(&mut cpu, 0x01);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_decimal_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Decimal, true);
    cpu.set_flag(Flag::Carry, true);
    cpu.set_a(0x19);

    adc_immediate(&mut cpu, 0x20);

    assert_eq!(cpu.a(), 0x40);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_no_half_carry_correction() {
    // Only the low nibble of the binary sum is checked: 0x09 + 0x09 = 0x12
    // has a low nibble of 2, so no +0x06 correction is applied.
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Decimal, true);
    cpu.set_a(0x09);

    adc_immediate(&mut cpu, 0x09);

    assert_eq!(cpu.a(), 0x12);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x65); // ADC $42
    cpu.memory_mut().write(0x0601, 0x42);
    cpu.memory_mut().write(0x0042, 0x22);
    cpu.set_a(0x11);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cycles, 3);
}

#[test]
fn test_adc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x7D); // ADC $1230,X
    cpu.memory_mut().write(0x0601, 0x30);
    cpu.memory_mut().write(0x0602, 0x12);
    cpu.memory_mut().write(0x1234, 0x05);
    cpu.set_x(0x04);
    cpu.set_a(0x01);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.a(), 0x06);
    assert_eq!(cpu.pc(), 0x0603);
    assert_eq!(cycles, 4);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x71); // ADC ($20),Y
    cpu.memory_mut().write(0x0601, 0x20);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3010, 0x40);
    cpu.set_y(0x10);
    cpu.set_a(0x02);

    let cycles = cpu.step_instruction();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cycles, 5);
}
