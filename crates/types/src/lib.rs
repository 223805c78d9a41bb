#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Types used by [`clientscript`](https://docs.rs/clientscript) and the tools built on top of it.
//!
//! Nothing in here knows which opcode means what; the table lives in the `clientscript` crate.

use core::fmt::{self, Display};

mod instructions;
mod value;

pub use instructions::*;
pub use value::*;

/// A ClientScript opcode.
///
/// Non-negative codes appear in encoded bytecode. The two negative codes
/// ([`Opcode::SS_OR`], [`Opcode::SS_AND`]) only exist inside synthesized branch
/// conditions and are never valid in a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[repr(transparent)]
pub struct Opcode(pub i32);

impl Opcode {
    /// Logical or of two branch conditions.
    pub const SS_OR: Opcode = Opcode(-1);
    /// Logical and of two branch conditions.
    pub const SS_AND: Opcode = Opcode(-2);

    /// The smallest code a catalog can hold.
    pub const MIN: i32 = Self::SS_AND.0;
    /// The largest code an encoded script can carry (opcodes are stored as `u16`).
    pub const MAX: i32 = u16::MAX as i32;

    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether this is one of the two compiler-internal pseudo-codes.
    #[inline]
    pub const fn is_pseudo(self) -> bool {
        self.0 == Self::SS_OR.0 || self.0 == Self::SS_AND.0
    }
}

impl From<i32> for Opcode {
    #[inline]
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<Opcode> for i32 {
    #[inline]
    fn from(op: Opcode) -> Self {
        op.0
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_codes() {
        assert!(Opcode::SS_OR.is_pseudo());
        assert!(Opcode::SS_AND.is_pseudo());
        assert!(!Opcode::new(0).is_pseudo());
        assert!(!Opcode::new(-3).is_pseudo());
        assert_eq!(Opcode::MIN, -2);
        assert_eq!(Opcode::MAX, 65535);
    }

    #[test]
    fn test_opcode_conversions() {
        let op: Opcode = 60.into();
        assert_eq!(op.get(), 60);
        assert_eq!(i32::from(op), 60);
    }
}
