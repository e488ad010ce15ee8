//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry clear / set
//! - BEQ / BNE: Branch on Zero set / clear
//! - BMI / BPL: Branch on Negative set / clear
//! - BVC / BVS: Branch on Overflow clear / set
//!
//! All branch instructions use relative addressing. The addressing mode has
//! already consumed the offset byte and computed the target, so a branch only
//! decides whether to load it into PC. No flags are affected and no extra
//! cycles are charged for a taken branch.

use crate::{Cpu, Flag, MemoryBus};

fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, condition: bool, target: u16) {
    if condition {
        cpu.pc = target;
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = !cpu.status.get(Flag::Carry);
    branch_if(cpu, taken, target);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = cpu.status.get(Flag::Carry);
    branch_if(cpu, taken, target);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = cpu.status.get(Flag::Zero);
    branch_if(cpu, taken, target);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = !cpu.status.get(Flag::Zero);
    branch_if(cpu, taken, target);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = cpu.status.get(Flag::Negative);
    branch_if(cpu, taken, target);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = !cpu.status.get(Flag::Negative);
    branch_if(cpu, taken, target);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = !cpu.status.get(Flag::Overflow);
    branch_if(cpu, taken, target);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut Cpu<M>, target: u16) {
    let taken = cpu.status.get(Flag::Overflow);
    branch_if(cpu, taken, target);
}
