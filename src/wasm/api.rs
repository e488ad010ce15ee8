//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control and state
//! inspection. The emulator owns its memory here since JavaScript has no way
//! to lend a Rust store.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::{Cpu, Memory, MemoryBus, PROGRAM_BASE};

/// JavaScript numbers are handed a `u32`; larger counts clamp.
fn saturate_cycles(consumed: u64) -> u32 {
    u32::try_from(consumed).unwrap_or(u32::MAX)
}

#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu<Memory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with 64 KiB of zeroed memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: Cpu::new(Memory::new()),
            program_start: PROGRAM_BASE,
            program_end: PROGRAM_BASE,
        }
    }

    /// Execute whole instructions until at least `cycles` cycles have run.
    /// Returns the cycles actually consumed, saturated at `u32::MAX`.
    pub fn step(&mut self, cycles: u32) -> u32 {
        saturate_cycles(self.cpu.step(cycles as u64))
    }

    /// Execute a single instruction and return its cost
    pub fn step_instruction(&mut self) -> u8 {
        self.cpu.step_instruction()
    }

    /// Reset the CPU registers. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.cpu.read_byte(addr)
    }

    /// Write a single byte to memory
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.cpu.write_byte(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn memory_page(&self, page: u8) -> Uint8Array {
        let start = (page as u16) << 8;
        let bytes: Vec<u8> = (0..256u16)
            .map(|i| self.cpu.memory().read(start + i))
            .collect();
        Uint8Array::from(bytes.as_slice())
    }

    /// Load a program at 0x0600 and reset the CPU so execution starts there
    pub fn load_program(&mut self, program: &[u8]) -> usize {
        let loaded = self.cpu.memory_mut().load_image(PROGRAM_BASE, program);
        self.cpu.reset();
        self.program_start = PROGRAM_BASE;
        self.program_end = PROGRAM_BASE.wrapping_add(loaded as u16);
        loaded
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
