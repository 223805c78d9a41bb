use core::fmt::{self, Display};

/// Which interpreter stack a value lives on.
///
/// The interpreter keeps separate int and string stacks. Booleans, chars,
/// component ids, coordinates and every other scalar type ride on the int stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum StackType {
    Int,
    String,
}

impl StackType {
    #[inline]
    pub const fn operand_domain(self) -> OperandDomain {
        match self {
            Self::Int => OperandDomain::Integer,
            Self::String => OperandDomain::String,
        }
    }
}

impl Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::String => f.write_str("string"),
        }
    }
}

/// What the immediate operand that follows an opcode means.
///
/// `None` does not mean the encoder omits the operand word, only that it
/// carries nothing the instruction uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum OperandDomain {
    Integer,
    String,
    #[default]
    None,
}

impl Display for OperandDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("int"),
            Self::String => f.write_str("string"),
            Self::None => f.write_str("-"),
        }
    }
}

/// A number of int and string stack slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slots {
    pub ints: u8,
    pub strings: u8,
}

impl Slots {
    pub const NONE: Slots = Slots::new(0, 0);

    #[inline]
    pub const fn new(ints: u8, strings: u8) -> Self {
        Self { ints, strings }
    }

    #[inline]
    pub const fn ints(ints: u8) -> Self {
        Self::new(ints, 0)
    }

    #[inline]
    pub const fn strings(strings: u8) -> Self {
        Self::new(0, strings)
    }

    #[inline]
    pub const fn of(ty: StackType, count: u8) -> Self {
        match ty {
            StackType::Int => Self::ints(count),
            StackType::String => Self::strings(count),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ints == 0 && self.strings == 0
    }

    #[inline]
    pub const fn total(&self) -> u16 {
        self.ints as u16 + self.strings as u16
    }
}

impl Display for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i{}s", self.ints, self.strings)
    }
}

/// The fixed stack arity of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StackEffect {
    pub pops: Slots,
    pub pushes: Slots,
}

impl StackEffect {
    /// Touches neither stack.
    pub const NEUTRAL: StackEffect = StackEffect::new(Slots::NONE, Slots::NONE);

    #[inline]
    pub const fn new(pops: Slots, pushes: Slots) -> Self {
        Self { pops, pushes }
    }

    /// Change in stack height, per stack.
    #[inline]
    pub const fn delta(&self) -> (i16, i16) {
        (
            self.pushes.ints as i16 - self.pops.ints as i16,
            self.pushes.strings as i16 - self.pops.strings as i16,
        )
    }
}

impl Display for StackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pops, self.pushes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_effect_delta() {
        let append_num = StackEffect::new(Slots::new(1, 1), Slots::strings(1));
        assert_eq!(append_num.delta(), (-1, 0));
        assert_eq!(StackEffect::NEUTRAL.delta(), (0, 0));
    }

    #[test]
    fn test_slots() {
        assert_eq!(Slots::of(StackType::String, 2), Slots::strings(2));
        assert!(Slots::NONE.is_empty());
        assert_eq!(Slots::new(2, 3).total(), 5);
    }

    #[test]
    fn test_operand_domain_of_stack_type() {
        assert_eq!(StackType::Int.operand_domain(), OperandDomain::Integer);
        assert_eq!(StackType::String.operand_domain(), OperandDomain::String);
        assert_eq!(OperandDomain::default(), OperandDomain::None);
    }
}
