//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory contents around the program
//! base, executes one instruction and checks the invariants that must hold
//! for every opcode, legal or not.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Cpu, CpuConfig, Endianness, Flag, Memory, MemoryBus, Status, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, all eight bits
    status: u8,
    big_endian: bool,
}

/// Memory regions the addressing modes can reach cheaply
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x4000 for absolute addressing
    main_memory: [u8; 256],
    brk_vector: [u8; 2],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

const PROGRAM_AT: u16 = 0x8000;

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();
    memory.load_image(0x0000, &input.memory.zero_page);
    memory.load_image(0x0100, &input.memory.stack_page);
    memory.load_image(0x4000, &input.memory.main_memory);
    memory.load_image(0xFFFE, &input.memory.brk_vector);
    memory.load_image(PROGRAM_AT, &input.memory.instruction_bytes);

    let endianness = if input.cpu_state.big_endian {
        Endianness::Big
    } else {
        Endianness::Little
    };
    let config = CpuConfig::default()
        .with_reset_address(PROGRAM_AT)
        .with_endianness(endianness);
    let memory_before = memory.clone();
    let mut cpu = Cpu::with_config(&mut memory, config);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits(input.cpu_state.status));
    let decimal = cpu.flag(Flag::Decimal);

    let opcode = input.memory.instruction_bytes[0];
    let cycles = cpu.step_instruction();

    // The reported cost always comes from the table
    assert_eq!(cycles, OPCODE_TABLE[opcode as usize].cycles);
    assert_eq!(cpu.cycles(), cycles as u64);

    // Only CLD/SED touch the decimal flag (PLP/RTI replace the whole byte)
    if !matches!(opcode, 0xD8 | 0xF8 | 0x28 | 0x40) {
        assert_eq!(cpu.flag(Flag::Decimal), decimal);
    }

    if OPCODE_TABLE[opcode as usize].is_illegal() {
        assert_eq!(cpu.pc(), PROGRAM_AT.wrapping_add(1));
        assert_eq!(cpu.a(), input.cpu_state.a);
        assert_eq!(cpu.x(), input.cpu_state.x);
        assert_eq!(cpu.y(), input.cpu_state.y);
        assert_eq!(cpu.sp(), input.cpu_state.sp);
        assert_eq!(cpu.status().bits(), input.cpu_state.status);
        assert!(cpu.memory().as_slice() == memory_before.as_slice());
    }

    // The bus stays usable after any instruction
    let _ = cpu.memory().read(cpu.pc());
});
