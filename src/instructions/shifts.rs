//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each has a memory form (read-modify-write at the effective address) and an
//! accumulator form. The bit shifted out becomes the new carry; rotates shift
//! the old carry into the vacated bit. Z and N come from the result.

use crate::{Cpu, Flag, MemoryBus};

fn asl(carry: &mut bool, value: u8) -> u8 {
    *carry = value & 0x80 != 0;
    value << 1
}

fn lsr(carry: &mut bool, value: u8) -> u8 {
    *carry = value & 0x01 != 0;
    value >> 1
}

fn rol(carry: &mut bool, value: u8) -> u8 {
    let carry_in = *carry as u8;
    *carry = value & 0x80 != 0;
    (value << 1) | carry_in
}

fn ror(carry: &mut bool, value: u8) -> u8 {
    let carry_in = (*carry as u8) << 7;
    *carry = value & 0x01 != 0;
    (value >> 1) | carry_in
}

/// Applies `op` to the byte at `addr` and writes the result back.
fn modify_memory<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16, op: fn(&mut bool, u8) -> u8) {
    let mut carry = cpu.status.get(Flag::Carry);
    let result = op(&mut carry, cpu.memory.read(addr));

    cpu.memory.write(addr, result);
    cpu.status.set(Flag::Carry, carry);
    cpu.status.set_zn(result);
}

/// Applies `op` to the accumulator.
fn modify_accumulator<M: MemoryBus>(cpu: &mut Cpu<M>, op: fn(&mut bool, u8) -> u8) {
    let mut carry = cpu.status.get(Flag::Carry);
    let result = op(&mut carry, cpu.a);

    cpu.a = result;
    cpu.status.set(Flag::Carry, carry);
    cpu.status.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction on memory.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    modify_memory(cpu, addr, asl);
}

/// Executes ASL A.
pub(crate) fn execute_asl_acc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    modify_accumulator(cpu, asl);
}

/// Executes the LSR (Logical Shift Right) instruction on memory.
///
/// Bit 7 is set to 0 (so N is always cleared) and bit 0 is placed in the
/// carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    modify_memory(cpu, addr, lsr);
}

/// Executes LSR A.
pub(crate) fn execute_lsr_acc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    modify_accumulator(cpu, lsr);
}

/// Executes the ROL (Rotate Left) instruction on memory.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    modify_memory(cpu, addr, rol);
}

/// Executes ROL A.
pub(crate) fn execute_rol_acc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    modify_accumulator(cpu, rol);
}

/// Executes the ROR (Rotate Right) instruction on memory.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu<M>, addr: u16) {
    modify_memory(cpu, addr, ror);
}

/// Executes ROR A.
pub(crate) fn execute_ror_acc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    modify_accumulator(cpu, ror);
}
