//! # Opcode Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for decoding: every possible opcode byte maps to the
//! instruction it performs, the addressing mode that locates its operand and
//! its fixed cycle cost.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undefined opcodes** - `Instruction::Illegal`, `AddressingMode::Illegal`, 1 cycle
//!
//! Cycle costs are base costs; page-crossing and branch-taken penalties are not
//! modeled.

use crate::addressing::AddressingMode;

/// Operation performed by an opcode.
///
/// ASL, LSR, ROL and ROR have separate accumulator variants so that the
/// handler never has to inspect the addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    AslAcc,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    LsrAcc,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolAcc,
    Ror,
    RorAcc,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undefined opcode: logged, no effect.
    Illegal,
}

impl Instruction {
    /// Three-letter assembler mnemonic ("???" for undefined opcodes).
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl | AslAcc => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr | LsrAcc => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol | RolAcc => "ROL",
            Ror | RorAcc => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }
}

/// Decoding information for a single opcode byte.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// // LDA immediate
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Operation to perform (selects the handler).
    pub instruction: Instruction,

    /// How the operand is located.
    pub addressing_mode: AddressingMode,

    /// Fixed cycle cost charged by the execution loop.
    pub cycles: u8,
}

impl Opcode {
    /// Instruction mnemonic, e.g. "LDA".
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }

    /// Total instruction size including the opcode byte (1-3).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    /// True for bytes with no documented instruction.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.instruction, Instruction::Illegal)
    }
}

const fn op(instruction: Instruction, addressing_mode: AddressingMode, cycles: u8) -> Opcode {
    Opcode {
        instruction,
        addressing_mode,
        cycles,
    }
}

use AddressingMode as M;
use Instruction as I;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic(), "BRK");
/// assert_eq!(brk.cycles, 7);
///
/// let undefined = &OPCODE_TABLE[0x02];
/// assert!(undefined.is_illegal());
/// assert_eq!(undefined.cycles, 1);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [Opcode; 256] = [
    op(I::Brk, M::Implicit, 7), // 0x00
    op(I::Ora, M::IndirectX, 6), // 0x01
    op(I::Illegal, M::Illegal, 1), // 0x02
    op(I::Illegal, M::Illegal, 1), // 0x03
    op(I::Illegal, M::Illegal, 1), // 0x04
    op(I::Ora, M::ZeroPage, 3), // 0x05
    op(I::Asl, M::ZeroPage, 5), // 0x06
    op(I::Illegal, M::Illegal, 1), // 0x07
    op(I::Php, M::Implicit, 3), // 0x08
    op(I::Ora, M::Immediate, 2), // 0x09
    op(I::AslAcc, M::Accumulator, 2), // 0x0A
    op(I::Illegal, M::Illegal, 1), // 0x0B
    op(I::Illegal, M::Illegal, 1), // 0x0C
    op(I::Ora, M::Absolute, 4), // 0x0D
    op(I::Asl, M::Absolute, 6), // 0x0E
    op(I::Illegal, M::Illegal, 1), // 0x0F
    op(I::Bpl, M::Relative, 2), // 0x10
    op(I::Ora, M::IndirectY, 5), // 0x11
    op(I::Illegal, M::Illegal, 1), // 0x12
    op(I::Illegal, M::Illegal, 1), // 0x13
    op(I::Illegal, M::Illegal, 1), // 0x14
    op(I::Ora, M::ZeroPageX, 4), // 0x15
    op(I::Asl, M::ZeroPageX, 6), // 0x16
    op(I::Illegal, M::Illegal, 1), // 0x17
    op(I::Clc, M::Implicit, 2), // 0x18
    op(I::Ora, M::AbsoluteY, 4), // 0x19
    op(I::Illegal, M::Illegal, 1), // 0x1A
    op(I::Illegal, M::Illegal, 1), // 0x1B
    op(I::Illegal, M::Illegal, 1), // 0x1C
    op(I::Ora, M::AbsoluteX, 4), // 0x1D
    op(I::Asl, M::AbsoluteX, 7), // 0x1E
    op(I::Illegal, M::Illegal, 1), // 0x1F
    op(I::Jsr, M::Absolute, 6), // 0x20
    op(I::And, M::IndirectX, 6), // 0x21
    op(I::Illegal, M::Illegal, 1), // 0x22
    op(I::Illegal, M::Illegal, 1), // 0x23
    op(I::Bit, M::ZeroPage, 3), // 0x24
    op(I::And, M::ZeroPage, 3), // 0x25
    op(I::Rol, M::ZeroPage, 5), // 0x26
    op(I::Illegal, M::Illegal, 1), // 0x27
    op(I::Plp, M::Implicit, 4), // 0x28
    op(I::And, M::Immediate, 2), // 0x29
    op(I::RolAcc, M::Accumulator, 2), // 0x2A
    op(I::Illegal, M::Illegal, 1), // 0x2B
    op(I::Bit, M::Absolute, 4), // 0x2C
    op(I::And, M::Absolute, 4), // 0x2D
    op(I::Rol, M::Absolute, 6), // 0x2E
    op(I::Illegal, M::Illegal, 1), // 0x2F
    op(I::Bmi, M::Relative, 2), // 0x30
    op(I::And, M::IndirectY, 5), // 0x31
    op(I::Illegal, M::Illegal, 1), // 0x32
    op(I::Illegal, M::Illegal, 1), // 0x33
    op(I::Illegal, M::Illegal, 1), // 0x34
    op(I::And, M::ZeroPageX, 4), // 0x35
    op(I::Rol, M::ZeroPageX, 6), // 0x36
    op(I::Illegal, M::Illegal, 1), // 0x37
    op(I::Sec, M::Implicit, 2), // 0x38
    op(I::And, M::AbsoluteY, 4), // 0x39
    op(I::Illegal, M::Illegal, 1), // 0x3A
    op(I::Illegal, M::Illegal, 1), // 0x3B
    op(I::Illegal, M::Illegal, 1), // 0x3C
    op(I::And, M::AbsoluteX, 4), // 0x3D
    op(I::Rol, M::AbsoluteX, 7), // 0x3E
    op(I::Illegal, M::Illegal, 1), // 0x3F
    op(I::Rti, M::Implicit, 6), // 0x40
    op(I::Eor, M::IndirectX, 6), // 0x41
    op(I::Illegal, M::Illegal, 1), // 0x42
    op(I::Illegal, M::Illegal, 1), // 0x43
    op(I::Illegal, M::Illegal, 1), // 0x44
    op(I::Eor, M::ZeroPage, 3), // 0x45
    op(I::Lsr, M::ZeroPage, 5), // 0x46
    op(I::Illegal, M::Illegal, 1), // 0x47
    op(I::Pha, M::Implicit, 3), // 0x48
    op(I::Eor, M::Immediate, 2), // 0x49
    op(I::LsrAcc, M::Accumulator, 2), // 0x4A
    op(I::Illegal, M::Illegal, 1), // 0x4B
    op(I::Jmp, M::Absolute, 3), // 0x4C
    op(I::Eor, M::Absolute, 4), // 0x4D
    op(I::Lsr, M::Absolute, 6), // 0x4E
    op(I::Illegal, M::Illegal, 1), // 0x4F
    op(I::Bvc, M::Relative, 2), // 0x50
    op(I::Eor, M::IndirectY, 5), // 0x51
    op(I::Illegal, M::Illegal, 1), // 0x52
    op(I::Illegal, M::Illegal, 1), // 0x53
    op(I::Illegal, M::Illegal, 1), // 0x54
    op(I::Eor, M::ZeroPageX, 4), // 0x55
    op(I::Lsr, M::ZeroPageX, 6), // 0x56
    op(I::Illegal, M::Illegal, 1), // 0x57
    op(I::Cli, M::Implicit, 2), // 0x58
    op(I::Eor, M::AbsoluteY, 4), // 0x59
    op(I::Illegal, M::Illegal, 1), // 0x5A
    op(I::Illegal, M::Illegal, 1), // 0x5B
    op(I::Illegal, M::Illegal, 1), // 0x5C
    op(I::Eor, M::AbsoluteX, 4), // 0x5D
    op(I::Lsr, M::AbsoluteX, 7), // 0x5E
    op(I::Illegal, M::Illegal, 1), // 0x5F
    op(I::Rts, M::Implicit, 6), // 0x60
    op(I::Adc, M::IndirectX, 6), // 0x61
    op(I::Illegal, M::Illegal, 1), // 0x62
    op(I::Illegal, M::Illegal, 1), // 0x63
    op(I::Illegal, M::Illegal, 1), // 0x64
    op(I::Adc, M::ZeroPage, 3), // 0x65
    op(I::Ror, M::ZeroPage, 5), // 0x66
    op(I::Illegal, M::Illegal, 1), // 0x67
    op(I::Pla, M::Implicit, 4), // 0x68
    op(I::Adc, M::Immediate, 2), // 0x69
    op(I::RorAcc, M::Accumulator, 2), // 0x6A
    op(I::Illegal, M::Illegal, 1), // 0x6B
    op(I::Jmp, M::Indirect, 5), // 0x6C
    op(I::Adc, M::Absolute, 4), // 0x6D
    op(I::Ror, M::Absolute, 6), // 0x6E
    op(I::Illegal, M::Illegal, 1), // 0x6F
    op(I::Bvs, M::Relative, 2), // 0x70
    op(I::Adc, M::IndirectY, 5), // 0x71
    op(I::Illegal, M::Illegal, 1), // 0x72
    op(I::Illegal, M::Illegal, 1), // 0x73
    op(I::Illegal, M::Illegal, 1), // 0x74
    op(I::Adc, M::ZeroPageX, 4), // 0x75
    op(I::Ror, M::ZeroPageX, 6), // 0x76
    op(I::Illegal, M::Illegal, 1), // 0x77
    op(I::Sei, M::Implicit, 2), // 0x78
    op(I::Adc, M::AbsoluteY, 4), // 0x79
    op(I::Illegal, M::Illegal, 1), // 0x7A
    op(I::Illegal, M::Illegal, 1), // 0x7B
    op(I::Illegal, M::Illegal, 1), // 0x7C
    op(I::Adc, M::AbsoluteX, 4), // 0x7D
    op(I::Ror, M::AbsoluteX, 7), // 0x7E
    op(I::Illegal, M::Illegal, 1), // 0x7F
    op(I::Illegal, M::Illegal, 1), // 0x80
    op(I::Sta, M::IndirectX, 6), // 0x81
    op(I::Illegal, M::Illegal, 1), // 0x82
    op(I::Illegal, M::Illegal, 1), // 0x83
    op(I::Sty, M::ZeroPage, 3), // 0x84
    op(I::Sta, M::ZeroPage, 3), // 0x85
    op(I::Stx, M::ZeroPage, 3), // 0x86
    op(I::Illegal, M::Illegal, 1), // 0x87
    op(I::Dey, M::Implicit, 2), // 0x88
    op(I::Illegal, M::Illegal, 1), // 0x89
    op(I::Txa, M::Implicit, 2), // 0x8A
    op(I::Illegal, M::Illegal, 1), // 0x8B
    op(I::Sty, M::Absolute, 4), // 0x8C
    op(I::Sta, M::Absolute, 4), // 0x8D
    op(I::Stx, M::Absolute, 4), // 0x8E
    op(I::Illegal, M::Illegal, 1), // 0x8F
    op(I::Bcc, M::Relative, 2), // 0x90
    op(I::Sta, M::IndirectY, 6), // 0x91
    op(I::Illegal, M::Illegal, 1), // 0x92
    op(I::Illegal, M::Illegal, 1), // 0x93
    op(I::Sty, M::ZeroPageX, 4), // 0x94
    op(I::Sta, M::ZeroPageX, 4), // 0x95
    op(I::Stx, M::ZeroPageY, 4), // 0x96
    op(I::Illegal, M::Illegal, 1), // 0x97
    op(I::Tya, M::Implicit, 2), // 0x98
    op(I::Sta, M::AbsoluteY, 5), // 0x99
    op(I::Txs, M::Implicit, 2), // 0x9A
    op(I::Illegal, M::Illegal, 1), // 0x9B
    op(I::Illegal, M::Illegal, 1), // 0x9C
    op(I::Sta, M::AbsoluteX, 5), // 0x9D
    op(I::Illegal, M::Illegal, 1), // 0x9E
    op(I::Illegal, M::Illegal, 1), // 0x9F
    op(I::Ldy, M::Immediate, 2), // 0xA0
    op(I::Lda, M::IndirectX, 6), // 0xA1
    op(I::Ldx, M::Immediate, 2), // 0xA2
    op(I::Illegal, M::Illegal, 1), // 0xA3
    op(I::Ldy, M::ZeroPage, 3), // 0xA4
    op(I::Lda, M::ZeroPage, 3), // 0xA5
    op(I::Ldx, M::ZeroPage, 3), // 0xA6
    op(I::Illegal, M::Illegal, 1), // 0xA7
    op(I::Tay, M::Implicit, 2), // 0xA8
    op(I::Lda, M::Immediate, 2), // 0xA9
    op(I::Tax, M::Implicit, 2), // 0xAA
    op(I::Illegal, M::Illegal, 1), // 0xAB
    op(I::Ldy, M::Absolute, 4), // 0xAC
    op(I::Lda, M::Absolute, 4), // 0xAD
    op(I::Ldx, M::Absolute, 4), // 0xAE
    op(I::Illegal, M::Illegal, 1), // 0xAF
    op(I::Bcs, M::Relative, 2), // 0xB0
    op(I::Lda, M::IndirectY, 5), // 0xB1
    op(I::Illegal, M::Illegal, 1), // 0xB2
    op(I::Illegal, M::Illegal, 1), // 0xB3
    op(I::Ldy, M::ZeroPageX, 4), // 0xB4
    op(I::Lda, M::ZeroPageX, 4), // 0xB5
    op(I::Ldx, M::ZeroPageY, 4), // 0xB6
    op(I::Illegal, M::Illegal, 1), // 0xB7
    op(I::Clv, M::Implicit, 2), // 0xB8
    op(I::Lda, M::AbsoluteY, 4), // 0xB9
    op(I::Tsx, M::Implicit, 2), // 0xBA
    op(I::Illegal, M::Illegal, 1), // 0xBB
    op(I::Ldy, M::AbsoluteX, 4), // 0xBC
    op(I::Lda, M::AbsoluteX, 4), // 0xBD
    op(I::Ldx, M::AbsoluteY, 4), // 0xBE
    op(I::Illegal, M::Illegal, 1), // 0xBF
    op(I::Cpy, M::Immediate, 2), // 0xC0
    op(I::Cmp, M::IndirectX, 6), // 0xC1
    op(I::Illegal, M::Illegal, 1), // 0xC2
    op(I::Illegal, M::Illegal, 1), // 0xC3
    op(I::Cpy, M::ZeroPage, 3), // 0xC4
    op(I::Cmp, M::ZeroPage, 3), // 0xC5
    op(I::Dec, M::ZeroPage, 5), // 0xC6
    op(I::Illegal, M::Illegal, 1), // 0xC7
    op(I::Iny, M::Implicit, 2), // 0xC8
    op(I::Cmp, M::Immediate, 2), // 0xC9
    op(I::Dex, M::Implicit, 2), // 0xCA
    op(I::Illegal, M::Illegal, 1), // 0xCB
    op(I::Cpy, M::Absolute, 4), // 0xCC
    op(I::Cmp, M::Absolute, 4), // 0xCD
    op(I::Dec, M::Absolute, 6), // 0xCE
    op(I::Illegal, M::Illegal, 1), // 0xCF
    op(I::Bne, M::Relative, 2), // 0xD0
    op(I::Cmp, M::IndirectY, 5), // 0xD1
    op(I::Illegal, M::Illegal, 1), // 0xD2
    op(I::Illegal, M::Illegal, 1), // 0xD3
    op(I::Illegal, M::Illegal, 1), // 0xD4
    op(I::Cmp, M::ZeroPageX, 4), // 0xD5
    op(I::Dec, M::ZeroPageX, 6), // 0xD6
    op(I::Illegal, M::Illegal, 1), // 0xD7
    op(I::Cld, M::Implicit, 2), // 0xD8
    op(I::Cmp, M::AbsoluteY, 4), // 0xD9
    op(I::Illegal, M::Illegal, 1), // 0xDA
    op(I::Illegal, M::Illegal, 1), // 0xDB
    op(I::Illegal, M::Illegal, 1), // 0xDC
    op(I::Cmp, M::AbsoluteX, 4), // 0xDD
    op(I::Dec, M::AbsoluteX, 7), // 0xDE
    op(I::Illegal, M::Illegal, 1), // 0xDF
    op(I::Cpx, M::Immediate, 2), // 0xE0
    op(I::Sbc, M::IndirectX, 6), // 0xE1
    op(I::Illegal, M::Illegal, 1), // 0xE2
    op(I::Illegal, M::Illegal, 1), // 0xE3
    op(I::Cpx, M::ZeroPage, 3), // 0xE4
    op(I::Sbc, M::ZeroPage, 3), // 0xE5
    op(I::Inc, M::ZeroPage, 5), // 0xE6
    op(I::Illegal, M::Illegal, 1), // 0xE7
    op(I::Inx, M::Implicit, 2), // 0xE8
    op(I::Sbc, M::Immediate, 2), // 0xE9
    op(I::Nop, M::Implicit, 2), // 0xEA
    op(I::Illegal, M::Illegal, 1), // 0xEB
    op(I::Cpx, M::Absolute, 4), // 0xEC
    op(I::Sbc, M::Absolute, 4), // 0xED
    op(I::Inc, M::Absolute, 6), // 0xEE
    op(I::Illegal, M::Illegal, 1), // 0xEF
    op(I::Beq, M::Relative, 2), // 0xF0
    op(I::Sbc, M::IndirectY, 5), // 0xF1
    op(I::Illegal, M::Illegal, 1), // 0xF2
    op(I::Illegal, M::Illegal, 1), // 0xF3
    op(I::Illegal, M::Illegal, 1), // 0xF4
    op(I::Sbc, M::ZeroPageX, 4), // 0xF5
    op(I::Inc, M::ZeroPageX, 6), // 0xF6
    op(I::Illegal, M::Illegal, 1), // 0xF7
    op(I::Sed, M::Implicit, 2), // 0xF8
    op(I::Sbc, M::AbsoluteY, 4), // 0xF9
    op(I::Illegal, M::Illegal, 1), // 0xFA
    op(I::Illegal, M::Illegal, 1), // 0xFB
    op(I::Illegal, M::Illegal, 1), // 0xFC
    op(I::Sbc, M::AbsoluteX, 4), // 0xFD
    op(I::Inc, M::AbsoluteX, 7), // 0xFE
    op(I::Illegal, M::Illegal, 1), // 0xFF
];
