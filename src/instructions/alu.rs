//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC honour the Decimal flag. The correction is applied to the
//! binary result rather than to converted operands:
//! - ADC adds 0x06 when the low nibble of the sum exceeds 9 and 0x60 when the
//!   high nibble does. No half-carry is tracked, so a low-nibble sum of 0x10
//!   or more (0x09 + 0x09 = 0x12) is left uncorrected.
//! - SBC subtracts 0x06 on a low-nibble borrow and 0x60 on an overall borrow.

use crate::{Cpu, Flag, MemoryBus};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the value at `addr` plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the sum exceeds 0xFF (binary) or 0x99 (decimal)
/// - Overflow (V): Set if both operands share a sign and the result's sign differs
/// - Zero (Z), Negative (N): From the result
///
/// In decimal mode a low nibble above 9 is corrected by +0x06 and a high
/// nibble above 9 by +0x60.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let value = cpu.memory.read(addr);
    let a = cpu.a;
    let carry_in = cpu.status.get(Flag::Carry) as u16;

    let mut total = a as u16 + value as u16 + carry_in;
    let mut carry = total > 0xFF;

    if cpu.status.get(Flag::Decimal) {
        if (total & 0x0F) > 0x09 {
            total += 0x06;
        }
        carry = total > 0x99;
        if (total & 0xF0) > 0x90 {
            total += 0x60;
        }
    }

    let result = total as u8;

    cpu.status.set(Flag::Carry, carry);
    cpu.status.set(Flag::Overflow, (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C) and stores it in the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if no borrow was needed
/// - Overflow (V): Set if the operands differ in sign and the result's sign differs from A
/// - Zero (Z), Negative (N): From the stored result
///
/// In decimal mode a low-nibble borrow is corrected by -0x06 and an overall
/// borrow by -0x60.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let value = cpu.memory.read(addr);
    let a = cpu.a;
    let borrow = (!cpu.status.get(Flag::Carry)) as u16;

    let mut difference = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow);
    let no_borrow = a as u16 >= value as u16 + borrow;
    let binary = difference as u8;

    if cpu.status.get(Flag::Decimal) {
        if ((a & 0x0F) as u16) < (value & 0x0F) as u16 + borrow {
            difference = difference.wrapping_sub(0x06);
        }
        if !no_borrow {
            difference = difference.wrapping_sub(0x60);
        }
    }

    let result = difference as u8;

    cpu.status.set(Flag::Carry, no_borrow);
    cpu.status.set(Flag::Overflow, (a ^ value) & 0x80 != 0 && (a ^ binary) & 0x80 != 0);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let result = cpu.a & cpu.memory.read(addr);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let result = cpu.a | cpu.memory.read(addr);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let result = cpu.a ^ cpu.memory.read(addr);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with memory without storing the result.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let value = cpu.memory.read(addr);

    cpu.status.set(Flag::Zero, cpu.a & value == 0);
    cpu.status.set(Flag::Overflow, value & 0x40 != 0);
    cpu.status.set(Flag::Negative, value & 0x80 != 0);
}

/// Shared compare logic: C = register >= M, Z = register == M, N = bit 7 of
/// register - M.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, addr: u16) {
    let value = cpu.memory.read(addr);
    let result = register.wrapping_sub(value);

    cpu.status.set(Flag::Carry, register >= value);
    cpu.status.set(Flag::Zero, register == value);
    cpu.status.set(Flag::Negative, result & 0x80 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let register = cpu.a;
    compare(cpu, register, addr);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let register = cpu.x;
    compare(cpu, register, addr);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    let register = cpu.y;
    compare(cpu, register, addr);
}
