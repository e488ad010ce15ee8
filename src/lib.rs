//! # 6502 CPU Emulator Core
//!
//! A behavioral NMOS 6502 CPU emulator: table-driven decoding, per-family
//! instruction handlers and abstract cycle accounting.
//!
//! The engine is generic over the `MemoryBus` trait and never owns the memory
//! it runs on in the usual setup: the host keeps the store and lends it to the
//! CPU with `&mut`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, Flag, Memory, PROGRAM_BASE};
//!
//! let mut memory = Memory::new();
//!
//! // LDA #$00 ; LDX #$80
//! memory.load_image(PROGRAM_BASE, &[0xA9, 0x00, 0xA2, 0x80]);
//!
//! let mut cpu = Cpu::new(&mut memory);
//! assert_eq!(cpu.pc(), 0x0600);
//!
//! let consumed = cpu.step(4);
//! assert_eq!(consumed, 4);
//! assert!(cpu.flag(Flag::Negative));
//! assert_eq!(cpu.x(), 0x80);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait, flat memory store and image loading
//! - `status` - Packed status register and flag names
//! - `opcodes` - 256-entry opcode table
//! - `addressing` - Addressing modes and operand resolution
//! - `config` - CPU configuration (reset address, BRK vector, endianness)
//! - `snapshot` - Register snapshots and stack dumps for diagnostics

use std::path::PathBuf;

use thiserror::Error;

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod snapshot;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, NO_OPERAND};
pub use config::{CpuConfig, DEFAULT_BRK_VECTOR, DEFAULT_RESET_ADDRESS};
pub use cpu::Cpu;
pub use memory::{Endianness, Memory, MemoryBus, FULL_ADDRESS_SPACE, PROGRAM_BASE};
pub use opcodes::{Instruction, Opcode, OPCODE_TABLE};
pub use snapshot::{CpuSnapshot, StackDump};
pub use status::{Flag, Status};

/// Errors raised by the memory store.
///
/// The CPU itself never fails: anomalies during execution (such as undefined
/// opcodes) are logged and absorbed by the execution loop.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The backing buffer could not be allocated.
    #[error("failed to allocate {requested} bytes of memory")]
    ResourceExhausted { requested: usize },

    /// Requested capacity is zero or larger than the 16-bit address space.
    #[error("invalid memory capacity {0} (expected 1..=65536)")]
    InvalidCapacity(usize),

    /// A program image file could not be read.
    #[error("cannot read program image {}: {source}", path.display())]
    ImageUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
