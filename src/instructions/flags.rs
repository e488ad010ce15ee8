//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode, execute in 2 cycles and
//! touch no flag other than their own.

use crate::{Cpu, Flag, MemoryBus};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Flag, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory.write(0x0600, 0x18); // CLC
///
/// let mut cpu = Cpu::new(&mut memory);
/// cpu.set_flag(Flag::Carry, true);
///
/// cpu.step(2);
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x0601);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::Carry, false);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::Carry, true);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::InterruptDisable, false);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::InterruptDisable, true);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::Decimal, false);
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Subsequent ADC and SBC instructions operate in BCD.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::Decimal, true);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "SEV"; V is only set by ADC, SBC, BIT, PLP and RTI.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.set(Flag::Overflow, false);
}
