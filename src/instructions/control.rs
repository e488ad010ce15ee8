//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//! - Undefined opcodes
//!
//! BRK is a software interrupt that:
//! 1. Skips the padding byte after the opcode (PC + 1)
//! 2. Sets the B flag
//! 3. Pushes PC (high byte first, then low byte), then the status register
//! 4. Loads PC from the BRK vector (0xFFFE/F by default)

use tracing::warn;

use crate::{Cpu, Flag, MemoryBus, Status};

/// Executes the JMP (Jump) instruction.
///
/// Both the absolute and the indirect form arrive here with the final target
/// already resolved.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    cpu.pc = target;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1),
/// high byte first, then jumps to `target`.
///
/// Flags affected: None
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let return_address = cpu.pc.wrapping_sub(1);

    cpu.push((return_address >> 8) as u8);
    cpu.push((return_address & 0xFF) as u8);

    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the low then high byte of the return address pushed by JSR and
/// resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let low = cpu.pop() as u16;
    let high = cpu.pop() as u16;

    cpu.pc = ((high << 8) | low).wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Flags affected:
/// - B: Set to 1 (in the register and therefore in the pushed status byte)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.status.set(Flag::Break, true);

    let return_address = cpu.pc;
    cpu.push((return_address >> 8) as u8);
    cpu.push((return_address & 0xFF) as u8);
    cpu.push(cpu.status.bits());

    cpu.pc = cpu.read_word(cpu.config.brk_vector);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (with B forced on), then the low and high bytes
/// of PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pop();
    cpu.status = Status::from_bits(status | Flag::Break.mask());

    let low = cpu.pop() as u16;
    let high = cpu.pop() as u16;
    cpu.pc = (high << 8) | low;
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut Cpu<M>) {}

/// Handles an opcode byte with no documented instruction.
///
/// Logged and otherwise ignored; the execution loop still charges the table's
/// cycle cost.
pub(crate) fn execute_illegal<M: MemoryBus>(cpu: &mut Cpu<M>, opcode: u8) {
    let pc = cpu.pc.wrapping_sub(1);
    warn!(opcode, pc, "illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
}
