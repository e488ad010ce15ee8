//! # Processor Status Register
//!
//! The 6502 keeps its condition codes in a single packed byte (NV-BDIZC).
//! `Status` wraps that byte and exposes each bit through the `Flag` enum, so
//! the raw integer only leaves this module where the hardware itself moves the
//! whole register (PHP, PLP, BRK, RTI).

use std::fmt;

/// Named bits of the status register.
///
/// The discriminant is the bit position inside the packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// Unsigned overflow out of bit 7, or "no borrow" after a subtraction.
    Carry = 0,
    /// Last result was zero.
    Zero = 1,
    /// Interrupt disable.
    InterruptDisable = 2,
    /// Decimal (BCD) arithmetic for ADC/SBC.
    Decimal = 3,
    /// Set by BRK and forced by RTI.
    Break = 4,
    /// Bit 5 has no function.
    Unused = 5,
    /// Signed overflow.
    Overflow = 6,
    /// Bit 7 of the last result.
    Negative = 7,
}

impl Flag {
    /// All flags in bit order (bit 0 first).
    pub const ALL: [Flag; 8] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Unused,
        Flag::Overflow,
        Flag::Negative,
    ];

    /// Returns the single-bit mask of this flag.
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Returns the conventional one-letter name (`-` for the unused bit).
    pub const fn symbol(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Unused => '-',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }
}

/// Packed 8-bit status register.
///
/// # Examples
///
/// ```
/// use cpu6502::{Flag, Status};
///
/// let mut status = Status::default();
/// status.set(Flag::Overflow, true);
///
/// assert!(status.get(Flag::Overflow));
/// assert_eq!(status.bits(), 0b0100_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Status(u8);

impl Status {
    /// Builds a status register from its packed byte form.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the packed byte form.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `flag` is set.
    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag`, leaving every other bit untouched.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }

    /// Updates Zero and Negative from `value`.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set(Flag::Zero, value == 0);
        self.set(Flag::Negative, value & 0x80 != 0);
    }
}

/// Renders the register as `NV-BDIZC`, a letter for a set flag and `.` for a
/// clear one.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL.iter().rev() {
            let c = if self.get(*flag) { flag.symbol() } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
