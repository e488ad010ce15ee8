//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! store it executes from, plus `Memory`, a flat byte array of fixed capacity.
//!
//! ## Design Principles
//!
//! - Reads and writes always succeed; there is no bus error on a 6502
//! - Addresses past the end of a smaller-than-64K store wrap around
//!   (`addr % capacity`), for reads and writes alike
//! - The CPU borrows the store: `MemoryBus` is implemented for `&mut B`, so the
//!   host keeps ownership and the borrow checker ties the CPU's lifetime to it

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::MemoryError;

/// Size of the full 16-bit address space.
pub const FULL_ADDRESS_SPACE: usize = 0x10000;

/// Default load address for program images.
pub const PROGRAM_BASE: u16 = 0x0600;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::{Cpu, MemoryBus};
///
/// /// 32KB RAM with writes above 0x8000 ignored.
/// struct RomRamMemory {
///     data: Vec<u8>,
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         self.data[addr as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.data[addr as usize] = value;
///         }
///     }
/// }
///
/// let mut memory = RomRamMemory { data: vec![0xEA; 0x10000] };
/// let mut cpu = Cpu::new(&mut memory);
/// cpu.step(2);
/// assert_eq!(cpu.pc(), 0x0601);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped locations may
    /// ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Byte order of 16-bit words in memory.
///
/// The 6502 is little-endian; big-endian is kept for images produced for
/// hosts that lay words out the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Low byte at the lower address.
    #[default]
    Little,
    /// High byte at the lower address.
    Big,
}

impl Endianness {
    /// Combines two bytes, `first` read from the lower address.
    pub const fn decode(self, first: u8, second: u8) -> u16 {
        match self {
            Endianness::Little => u16::from_le_bytes([first, second]),
            Endianness::Big => u16::from_be_bytes([first, second]),
        }
    }

    /// Splits a word into bytes, lower address first.
    pub const fn encode(self, word: u16) -> [u8; 2] {
        match self {
            Endianness::Little => word.to_le_bytes(),
            Endianness::Big => word.to_be_bytes(),
        }
    }
}

/// Flat, zero-initialised memory of fixed capacity.
///
/// # Examples
///
/// ```
/// use cpu6502::{Memory, MemoryBus};
///
/// // A 1KB store: address 0x0400 wraps to 0x0000.
/// let mut mem = Memory::with_capacity(0x400).unwrap();
/// mem.write(0x0400, 0x7F);
/// assert_eq!(mem.read(0x0000), 0x7F);
/// ```
#[derive(Debug, Clone)]
pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Creates a store covering the full 64KB address space.
    pub fn new() -> Self {
        Self {
            data: vec![0; FULL_ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Creates a store of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// - `MemoryError::InvalidCapacity` if `capacity` is 0 or above 65536
    /// - `MemoryError::ResourceExhausted` if the buffer cannot be allocated
    pub fn with_capacity(capacity: usize) -> Result<Self, MemoryError> {
        if capacity == 0 || capacity > FULL_ADDRESS_SPACE {
            return Err(MemoryError::InvalidCapacity(capacity));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| MemoryError::ResourceExhausted {
                requested: capacity,
            })?;
        data.resize(capacity, 0);
        debug!(capacity, "memory allocated");

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the number of addressable bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Zero-fills the whole store.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Returns the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copies `image` verbatim starting at `base`.
    ///
    /// Bytes that would land at or beyond the end of the store are dropped.
    /// Returns the number of bytes copied.
    pub fn load_image(&mut self, base: u16, image: &[u8]) -> usize {
        let start = base as usize;
        if start >= self.data.len() {
            return 0;
        }

        let count = image.len().min(self.data.len() - start);
        self.data[start..start + count].copy_from_slice(&image[..count]);
        info!(
            base,
            loaded = count,
            dropped = image.len() - count,
            "program image loaded"
        );
        count
    }

    /// Reads a raw, headerless image file and loads it at `base`.
    ///
    /// On error the store is left untouched.
    pub fn load_image_file(
        &mut self,
        base: u16,
        path: impl AsRef<Path>,
    ) -> Result<usize, MemoryError> {
        let path = path.as_ref();
        let image = fs::read(path).map_err(|source| MemoryError::ImageUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_image(base, &image))
    }

    fn index(&self, addr: u16) -> usize {
        addr as usize % self.data.len()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[self.index(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        let index = self.index(addr);
        self.data[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write() {
        let mut mem = Memory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_full_capacity_covers_last_address() {
        let mut mem = Memory::new();
        assert_eq!(mem.capacity(), 0x10000);

        mem.write(0xFFFF, 0xFF);
        assert_eq!(mem.read(0xFFFF), 0xFF);
        assert_eq!(mem.read(0x0000), 0x00);
    }

    #[test]
    fn test_small_capacity_wraps_reads_and_writes() {
        let mut mem = Memory::with_capacity(0x100).unwrap();

        mem.write(0x0105, 0xAB);
        assert_eq!(mem.read(0x0005), 0xAB);
        assert_eq!(mem.read(0xFF05), 0xAB);
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            Memory::with_capacity(0),
            Err(MemoryError::InvalidCapacity(0))
        ));
        assert!(matches!(
            Memory::with_capacity(0x10001),
            Err(MemoryError::InvalidCapacity(0x10001))
        ));
    }

    #[test]
    fn test_load_image_drops_overflow() {
        let mut mem = Memory::with_capacity(0x0602).unwrap();

        let copied = mem.load_image(PROGRAM_BASE, &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(copied, 2);
        assert_eq!(mem.read(0x0600), 0x01);
        assert_eq!(mem.read(0x0601), 0x02);
        // Nothing wrapped around to the start
        assert_eq!(mem.read(0x0000), 0x00);
    }

    #[test]
    fn test_load_image_past_capacity() {
        let mut mem = Memory::with_capacity(0x0100).unwrap();
        assert_eq!(mem.load_image(PROGRAM_BASE, &[0xFF]), 0);
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_missing_file_leaves_memory_zeroed() {
        let mut mem = Memory::new();
        let result = mem.load_image_file(PROGRAM_BASE, "/nonexistent/program.bin");

        assert!(matches!(result, Err(MemoryError::ImageUnreadable { .. })));
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_endianness_codec() {
        assert_eq!(Endianness::Little.decode(0x34, 0x12), 0x1234);
        assert_eq!(Endianness::Big.decode(0x12, 0x34), 0x1234);
        assert_eq!(Endianness::Little.encode(0x1234), [0x34, 0x12]);
        assert_eq!(Endianness::Big.encode(0x1234), [0x12, 0x34]);
    }

    #[test]
    fn test_clear() {
        let mut mem = Memory::new();
        mem.write(0x0042, 0x99);
        mem.clear();
        assert_eq!(mem.read(0x0042), 0x00);
    }
}
