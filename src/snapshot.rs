//! # Diagnostics
//!
//! Read-only views of the CPU for harnesses and debugging output.

use std::fmt;

use crate::{Flag, Status};

/// Copy of every register, the status flags and the cycle counter.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Flag, Memory};
///
/// let mut memory = Memory::new();
/// let cpu = Cpu::new(&mut memory);
/// let snapshot = cpu.snapshot();
///
/// assert_eq!(snapshot.pc, 0x0600);
/// assert!(!snapshot.flag(Flag::Carry));
/// assert_eq!(
///     snapshot.to_string(),
///     "A: 00 X: 00 Y: 00 SP: FF PC: 0600 P: ........ (00)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: Status,
    pub cycles: u64,
}

impl CpuSnapshot {
    /// Returns true if `flag` was set when the snapshot was taken.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Returns the flags in bit order (Carry first).
    pub fn flags(&self) -> [(Flag, bool); 8] {
        Flag::ALL.map(|flag| (flag, self.status.get(flag)))
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {:02X} X: {:02X} Y: {:02X} SP: {:02X} PC: {:04X} P: {} ({:02X})",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.pc,
            self.status,
            self.status.bits()
        )
    }
}

/// Contents of the stack page (0x0100-0x01FF) at a point in time.
///
/// Displays as 16 rows of 16 bytes, each row prefixed by its address; the row
/// holding the next free slot is marked with `<`.
#[derive(Clone, PartialEq, Eq)]
pub struct StackDump {
    page: [u8; 256],
    sp: u8,
}

impl StackDump {
    pub(crate) fn new(page: [u8; 256], sp: u8) -> Self {
        Self { page, sp }
    }

    /// Raw bytes of the page, index 0 = address 0x0100.
    pub fn bytes(&self) -> &[u8; 256] {
        &self.page
    }

    /// Bytes currently pushed, most recent first.
    pub fn live(&self) -> &[u8] {
        let top = self.sp as usize + 1;
        if top > 0xFF {
            &[]
        } else {
            &self.page[top..]
        }
    }
}

impl fmt::Debug for StackDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackDump")
            .field("sp", &self.sp)
            .field("live", &self.live())
            .finish()
    }
}

impl fmt::Display for StackDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.page.chunks(16).enumerate() {
            write!(f, "{:04X}:", 0x0100 + row * 16)?;
            for byte in chunk {
                write!(f, " {:02X}", byte)?;
            }
            if self.sp as usize / 16 == row {
                write!(f, " <")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_bytes() {
        let mut page = [0u8; 256];
        page[0xFF] = 0x12;
        page[0xFE] = 0x34;

        assert_eq!(StackDump::new(page, 0xFD).live(), &[0x34, 0x12]);
        assert!(StackDump::new(page, 0xFF).live().is_empty());
    }

    #[test]
    fn test_dump_layout() {
        let dump = StackDump::new([0xAA; 256], 0xFF);
        let text = dump.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("0100: AA"));
        assert!(lines[15].starts_with("01F0:"));
        assert!(lines[15].ends_with('<'));
    }

    #[test]
    fn test_snapshot_flags_order() {
        let snapshot = CpuSnapshot {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            status: Status::from_bits(0b1000_0001),
            cycles: 0,
        };
        let flags = snapshot.flags();
        assert_eq!(flags[0], (Flag::Carry, true));
        assert_eq!(flags[1], (Flag::Zero, false));
        assert_eq!(flags[7], (Flag::Negative, true));
    }
}
