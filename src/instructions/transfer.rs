//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer

use crate::{Cpu, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the current contents of the accumulator into the X register
/// and sets the zero and negative flags as appropriate.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the NMOS part, Z and N are updated from the copied value.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
    cpu.status.set_zn(cpu.x);
}
