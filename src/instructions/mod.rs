//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the operand address already resolved by the addressing mode.
//!
//! Handlers only apply the instruction's semantics. Advancing PC past the
//! operand and charging cycles is done by the execution loop.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP) and undefined opcodes
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{Cpu, Instruction, MemoryBus, OPCODE_TABLE};

/// Runs the handler for `opcode` with its resolved operand address.
pub(crate) fn dispatch<M: MemoryBus>(cpu: &mut Cpu<M>, opcode: u8, addr: u16) {
    use Instruction::*;

    match OPCODE_TABLE[opcode as usize].instruction {
        Adc => alu::execute_adc(cpu, addr),
        Sbc => alu::execute_sbc(cpu, addr),
        And => alu::execute_and(cpu, addr),
        Ora => alu::execute_ora(cpu, addr),
        Eor => alu::execute_eor(cpu, addr),
        Bit => alu::execute_bit(cpu, addr),
        Cmp => alu::execute_cmp(cpu, addr),
        Cpx => alu::execute_cpx(cpu, addr),
        Cpy => alu::execute_cpy(cpu, addr),

        Bcc => branches::execute_bcc(cpu, addr),
        Bcs => branches::execute_bcs(cpu, addr),
        Beq => branches::execute_beq(cpu, addr),
        Bne => branches::execute_bne(cpu, addr),
        Bmi => branches::execute_bmi(cpu, addr),
        Bpl => branches::execute_bpl(cpu, addr),
        Bvc => branches::execute_bvc(cpu, addr),
        Bvs => branches::execute_bvs(cpu, addr),

        Asl => shifts::execute_asl(cpu, addr),
        AslAcc => shifts::execute_asl_acc(cpu),
        Lsr => shifts::execute_lsr(cpu, addr),
        LsrAcc => shifts::execute_lsr_acc(cpu),
        Rol => shifts::execute_rol(cpu, addr),
        RolAcc => shifts::execute_rol_acc(cpu),
        Ror => shifts::execute_ror(cpu, addr),
        RorAcc => shifts::execute_ror_acc(cpu),

        Lda => load_store::execute_lda(cpu, addr),
        Ldx => load_store::execute_ldx(cpu, addr),
        Ldy => load_store::execute_ldy(cpu, addr),
        Sta => load_store::execute_sta(cpu, addr),
        Stx => load_store::execute_stx(cpu, addr),
        Sty => load_store::execute_sty(cpu, addr),

        Inc => inc_dec::execute_inc(cpu, addr),
        Dec => inc_dec::execute_dec(cpu, addr),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu, addr),
        Jsr => control::execute_jsr(cpu, addr),
        Rts => control::execute_rts(cpu),
        Brk => control::execute_brk(cpu),
        Rti => control::execute_rti(cpu),
        Nop => control::execute_nop(cpu),
        Illegal => control::execute_illegal(cpu, opcode),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::execute_clc(cpu),
        Sec => flags::execute_sec(cpu),
        Cli => flags::execute_cli(cpu),
        Sei => flags::execute_sei(cpu),
        Cld => flags::execute_cld(cpu),
        Sed => flags::execute_sed(cpu),
        Clv => flags::execute_clv(cpu),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }
}
