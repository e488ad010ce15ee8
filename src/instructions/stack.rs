//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{Cpu, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory.write(0x0600, 0x48); // PHA
///
/// let mut cpu = Cpu::new(&mut memory);
/// cpu.set_a(0x42);
///
/// cpu.step(3);
///
/// assert_eq!(cpu.read_byte(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the status register as it is; bits are not modified on the way.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.status.bits());
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.pop();
    cpu.a = value;
    cpu.status.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Replaces the whole status register with the pulled byte, all eight bits
/// included.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.pop();
    cpu.status = Status::from_bits(value);
}
