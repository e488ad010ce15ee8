//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC flags (see [`Status`])
//! - **Cycle counter**: cycles executed since the last reset
//!
//! ## Execution Model
//!
//! - `step_instruction()`: Execute one instruction, return its cost
//! - `step(budget)`: Execute whole instructions until at least `budget` cycles
//!   have been consumed
//!
//! Instructions are never interrupted midway, so `step` may overshoot its
//! budget by up to one instruction. No interrupt lines are polled between
//! instructions.

use tracing::{debug, trace};

use crate::instructions;
use crate::snapshot::{CpuSnapshot, StackDump};
use crate::{CpuConfig, Flag, MemoryBus, Status, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_PAGE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation. The usual setup lends the CPU a
/// `&mut` reference so the host keeps ownership of the store.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory.write(0x0600, 0xE8); // INX
///
/// let mut cpu = Cpu::new(&mut memory);
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.sp(), 0xFF);
///
/// let cycles = cpu.step_instruction();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.x(), 0x01);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status flags
    pub(crate) status: Status,

    /// Cycles executed since reset
    pub(crate) cycles: u64,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with the default configuration, already reset.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration, already reset.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::default(),
            cycles: 0,
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Returns the CPU to its power-on state.
    ///
    /// - PC = configured reset address (0x0600 by default)
    /// - A = X = Y = 0
    /// - SP = 0xFF
    /// - All flags clear
    /// - Cycle counter = 0
    ///
    /// Memory is not touched.
    pub fn reset(&mut self) {
        self.pc = self.config.reset_address;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.status = Status::default();
        self.cycles = 0;
        debug!(pc = self.pc, "cpu reset");
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have been
    /// consumed, and returns the number of cycles actually consumed.
    ///
    /// A budget of 0 executes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory.write(0x0600, 0xEA); // NOP, 2 cycles
    /// memory.write(0x0601, 0xEA);
    /// memory.write(0x0602, 0xEA);
    ///
    /// let mut cpu = Cpu::new(&mut memory);
    /// // Two NOPs reach 4 cycles; 3 cycles would also run two.
    /// assert_eq!(cpu.step(3), 4);
    /// assert_eq!(cpu.pc(), 0x0602);
    /// ```
    pub fn step(&mut self, cycle_budget: u64) -> u64 {
        let mut consumed: u64 = 0;
        while consumed < cycle_budget {
            consumed += self.step_instruction() as u64;
        }
        consumed
    }

    /// Fetches, decodes and executes one instruction. Returns its cycle cost.
    pub fn step_instruction(&mut self) -> u8 {
        let opcode_pc = self.pc;
        let opcode = self.fetch_byte();
        let entry = &OPCODE_TABLE[opcode as usize];
        trace!(
            pc = opcode_pc,
            opcode,
            mnemonic = entry.mnemonic(),
            "execute"
        );

        let operand = self.resolve_operand(entry.addressing_mode);
        instructions::dispatch(self, opcode, operand);

        self.cycles += entry.cycles as u64;
        entry.cycles
    }

    // ========== Memory Access ==========

    /// Reads a byte through the memory bus.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte through the memory bus.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads a 16-bit word from `addr` and `addr + 1` using the configured
    /// byte order.
    pub fn read_word(&self, addr: u16) -> u16 {
        let first = self.memory.read(addr);
        let second = self.memory.read(addr.wrapping_add(1));
        self.config.endianness.decode(first, second)
    }

    /// Writes a 16-bit word to `addr` and `addr + 1` using the configured
    /// byte order.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [first, second] = self.config.endianness.encode(value);
        self.memory.write(addr, first);
        self.memory.write(addr.wrapping_add(1), second);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the memory back.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Instruction Stream ==========

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch_word(&mut self) -> u16 {
        let value = self.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    // ========== Stack ==========

    /// Writes to the stack page then decrements SP (0x00 wraps to 0xFF).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (0xFF wraps to 0x00) then reads from the stack page.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    // ========== Diagnostics ==========

    /// Captures all registers, flags and the cycle counter.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            sp: self.sp,
            a: self.a,
            x: self.x,
            y: self.y,
            status: self.status,
            cycles: self.cycles,
        }
    }

    /// Copies the stack page (0x0100-0x01FF) for display.
    pub fn stack_dump(&self) -> StackDump {
        let mut page = [0u8; 256];
        for (offset, byte) in page.iter_mut().enumerate() {
            *byte = self.memory.read(STACK_PAGE + offset as u16);
        }
        StackDump::new(page, self.sp)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    // ========== Status Flags ==========

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Sets or clears a single flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.status.set(flag, value);
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag(Flag::Negative)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag(Flag::Overflow)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag(Flag::Break)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag(Flag::Decimal)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag(Flag::InterruptDisable)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag(Flag::Zero)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag(Flag::Carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Endianness, Memory};

    #[test]
    fn test_cpu_initialization() {
        let mut mem = Memory::new();
        let cpu = Cpu::new(&mut mem);

        assert_eq!(cpu.pc(), 0x0600);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status().bits(), 0x00);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_reset_from_dirty_state() {
        let mut mem = Memory::new();
        let mut cpu = Cpu::new(&mut mem);

        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_sp(0x10);
        cpu.set_pc(0xBEEF);
        cpu.set_status(Status::from_bits(0xFF));
        cpu.step(10);

        cpu.reset();

        assert_eq!(cpu.pc(), 0x0600);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
        assert_eq!(cpu.status().bits(), 0x00);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut mem = Memory::new();
        let mut cpu = Cpu::new(&mut mem);

        for value in [0x00, 0x42, 0x80, 0xFF] {
            let sp = cpu.sp();
            cpu.push(value);
            assert_eq!(cpu.sp(), sp.wrapping_sub(1));
            assert_eq!(cpu.pop(), value);
            assert_eq!(cpu.sp(), sp);
        }
    }

    #[test]
    fn test_push_writes_stack_page() {
        let mut mem = Memory::new();
        let mut cpu = Cpu::new(&mut mem);

        cpu.push(0xAB);
        assert_eq!(cpu.read_byte(0x01FF), 0xAB);
        assert_eq!(cpu.sp(), 0xFE);
    }

    #[test]
    fn test_stack_wraps_both_ways() {
        let mut mem = Memory::new();
        let mut cpu = Cpu::new(&mut mem);

        cpu.set_sp(0x00);
        cpu.push(0x5A);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.read_byte(0x0100), 0x5A);

        // Pop from 0xFF wraps to 0x00 and reads 0x0100
        assert_eq!(cpu.pop(), 0x5A);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_word_access_respects_endianness() {
        let mut mem = Memory::new();
        {
            let mut cpu = Cpu::new(&mut mem);
            cpu.write_word(0x2000, 0x1234);
            assert_eq!(cpu.read_byte(0x2000), 0x34);
            assert_eq!(cpu.read_byte(0x2001), 0x12);
            assert_eq!(cpu.read_word(0x2000), 0x1234);
        }

        let config = CpuConfig::default().with_endianness(Endianness::Big);
        let mut cpu = Cpu::with_config(&mut mem, config);
        cpu.write_word(0x3000, 0x1234);
        assert_eq!(cpu.read_byte(0x3000), 0x12);
        assert_eq!(cpu.read_word(0x3000), 0x1234);
        // Little-endian data read back big-endian
        assert_eq!(cpu.read_word(0x2000), 0x3412);
    }

    #[test]
    fn test_step_zero_budget_runs_nothing() {
        let mut mem = Memory::new();
        let mut cpu = Cpu::new(&mut mem);

        assert_eq!(cpu.step(0), 0);
        assert_eq!(cpu.pc(), 0x0600);
    }

    #[test]
    fn test_step_overshoots_by_at_most_one_instruction() {
        let mut mem = Memory::new();
        // INC $10 (5 cycles) repeated
        for i in 0..8 {
            mem.write(0x0600 + i * 2, 0xE6);
            mem.write(0x0601 + i * 2, 0x10);
        }
        let mut cpu = Cpu::new(&mut mem);

        assert_eq!(cpu.step(6), 10);
        assert_eq!(cpu.read_byte(0x0010), 2);
        assert_eq!(cpu.cycles(), 10);
    }

    #[test]
    fn test_cpu_borrows_memory() {
        let mut mem = Memory::new();
        mem.write(0x0600, 0xA9); // LDA #$77
        mem.write(0x0601, 0x77);
        mem.write(0x0602, 0x85); // STA $20
        mem.write(0x0603, 0x20);

        {
            let mut cpu = Cpu::new(&mut mem);
            cpu.step(5);
        }

        assert_eq!(mem.read(0x0020), 0x77);
    }
}
