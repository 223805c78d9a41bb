use std::str::FromStr;

use clap::ValueEnum;
use clientscript::{Category, Opcode};

/// An instruction named either by its numeric code or by its mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InstructionArg {
    Code(Opcode),
    Mnemonic(String),
}

impl FromStr for InstructionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("expected an opcode or a mnemonic".to_string());
        }

        match s.parse::<i32>() {
            Ok(code) => Ok(Self::Code(Opcode(code))),
            Err(_) if s.starts_with(|c: char| c == '-' || c.is_ascii_digit()) => {
                Err(format!("invalid opcode: {s}"))
            }
            Err(_) => Ok(Self::Mnemonic(s.to_string())),
        }
    }
}

/// Category names accepted by `list --category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub(crate) enum CategoryArg {
    PushConstant,
    PushLocal,
    PopLocal,
    Discard,
    VariableAccess,
    ControlTransfer,
    Invocation,
    ArrayAccess,
    StringOp,
    ArithmeticOp,
    ComponentOp,
    ClientQuery,
    Unknown,
}

impl CategoryArg {
    pub(crate) fn matches(self, category: &Category) -> bool {
        self.name() == category.name()
    }

    fn name(self) -> &'static str {
        Category::NAMES[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instruction_arg() {
        assert_eq!("60".parse::<InstructionArg>(), Ok(InstructionArg::Code(Opcode(60))));
        assert_eq!("-1".parse::<InstructionArg>(), Ok(InstructionArg::Code(Opcode::SS_OR)));
        assert_eq!("switch".parse::<InstructionArg>(), Ok(InstructionArg::Mnemonic("switch".to_string())));
        assert_eq!("_1006".parse::<InstructionArg>(), Ok(InstructionArg::Mnemonic("_1006".to_string())));
        assert!("12abc".parse::<InstructionArg>().is_err());
        assert!("".parse::<InstructionArg>().is_err());
    }

    #[test]
    fn test_category_arg_names_line_up() {
        for arg in CategoryArg::value_variants() {
            let name = arg.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(arg.name()));
        }
        assert!(CategoryArg::Discard.matches(&Category::Discard(clientscript::StackType::Int)));
        assert!(!CategoryArg::Unknown.matches(&Category::ClientQuery));
    }
}
