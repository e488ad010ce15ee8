//! # CPU Configuration
//!
//! Fixed addresses and byte order the engine runs with. The defaults match the
//! reference machine: programs start at 0x0600 and BRK jumps through the
//! vector at 0xFFFE/0xFFFF, stored little-endian.

use crate::memory::Endianness;

/// Address loaded into PC on reset.
pub const DEFAULT_RESET_ADDRESS: u16 = 0x0600;

/// Location of the software interrupt (BRK) vector.
pub const DEFAULT_BRK_VECTOR: u16 = 0xFFFE;

/// Configuration for a [`Cpu`](crate::Cpu).
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, Endianness};
///
/// let config = CpuConfig::default()
///     .with_reset_address(0x8000)
///     .with_endianness(Endianness::Big);
///
/// assert_eq!(config.reset_address, 0x8000);
/// assert_eq!(config.brk_vector, 0xFFFE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// PC value after `reset()`.
    pub reset_address: u16,

    /// Address of the 16-bit word BRK loads into PC.
    pub brk_vector: u16,

    /// Byte order for every 16-bit memory access (operands, pointers, vectors).
    pub endianness: Endianness,
}

impl CpuConfig {
    pub fn with_reset_address(mut self, address: u16) -> Self {
        self.reset_address = address;
        self
    }

    pub fn with_brk_vector(mut self, address: u16) -> Self {
        self.brk_vector = address;
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_address: DEFAULT_RESET_ADDRESS,
            brk_vector: DEFAULT_BRK_VECTOR,
            endianness: Endianness::Little,
        }
    }
}
