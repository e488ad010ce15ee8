//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 (plus a fallback
//! for undefined opcodes) and the resolver that turns the operand bytes
//! following an opcode into an effective address.
//!
//! Resolution happens before the instruction handler runs. Each mode consumes
//! its operand bytes from the instruction stream, so once it returns, PC
//! already points at the next instruction.

use crate::{Cpu, MemoryBus};

/// Value returned by modes that do not address memory (implicit, accumulator,
/// illegal). Handlers for those instructions ignore their operand.
pub const NO_OPERAND: u16 = 0;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator, Illegal
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Resolves to the address of the operand byte itself.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Resolves to the branch target, relative to the address after the operand.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Only used by JMP. The pointer is read without the NMOS page-wrap bug:
    /// JMP ($10FF) reads its target from $10FF/$1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Fallback for undefined opcodes. Consumes nothing.
    Illegal,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Illegal => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

impl<M: MemoryBus> Cpu<M> {
    /// Consumes the operand bytes for `mode` and returns the effective address.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Illegal => {
                NO_OPERAND
            }
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte() as u16,
            AddressingMode::ZeroPageX => self.fetch_byte().wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.fetch_byte().wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                self.read_word(pointer)
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch_byte().wrapping_add(self.x);
                self.read_zero_page_word(pointer)
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                self.read_zero_page_word(pointer).wrapping_add(self.y as u16)
            }
            AddressingMode::Relative => {
                // Sign-extend, then offset from the byte after the operand
                let offset = self.fetch_byte() as i8;
                self.pc.wrapping_add_signed(offset as i16)
            }
        }
    }

    /// Reads a pointer stored in zero page. The second byte wraps to 0x00
    /// instead of spilling into page 1.
    fn read_zero_page_word(&self, pointer: u8) -> u16 {
        let first = self.memory.read(pointer as u16);
        let second = self.memory.read(pointer.wrapping_add(1) as u16);
        self.config.endianness.decode(first, second)
    }
}
