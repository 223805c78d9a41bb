use core::fmt::{self, Display};

use crate::{Opcode, StackEffect, StackType};

/// Which persistent variable store an access targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum VarScope {
    /// Server-synced player variable (varp).
    Player,
    /// Bit range inside a player variable (varbit).
    PlayerBit,
    /// Client-only variable (varc).
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Access {
    Read,
    Write,
}

/// Comparison performed by a conditional branch on the top two ints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Comparison {
    NotEqual,
    Equal,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl Comparison {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NotEqual => "!=",
            Self::Equal => "==",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// The comparison that holds exactly when `self` does not.
    pub const fn negate(self) -> Self {
        match self {
            Self::NotEqual => Self::Equal,
            Self::Equal => Self::NotEqual,
            Self::LessThan => Self::GreaterThanOrEqual,
            Self::GreaterThan => Self::LessThanOrEqual,
            Self::LessThanOrEqual => Self::GreaterThan,
            Self::GreaterThanOrEqual => Self::LessThan,
        }
    }
}

/// The ways an instruction can leave the current basic block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Transfer {
    /// Unconditional relative jump.
    Jump,
    /// Relative jump taken when the comparison holds.
    Branch(Comparison),
    /// Multi-way jump through a per-script switch table.
    Switch,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ArrayRole {
    Define,
    Read,
    Write,
}

/// How a component instruction finds the component it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ComponentTarget {
    /// `cc_*`: the primary or secondary "active" component, picked by the immediate operand.
    Active,
    /// `if_*`: a component id popped from the int stack.
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ComponentRole {
    Create,
    Delete,
    /// Selects an existing component as the active one.
    Find,
    Setter,
    /// Binds an event-handler script to a component, or fires one.
    Hook,
    Getter,
}

/// The semantic class of an instruction.
///
/// Every opcode has exactly one. Consumers are expected to `match` on this
/// exhaustively, so adding a variant is a breaking change on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Category {
    /// Push the immediate operand.
    PushConstant(StackType),
    /// Push the local slot named by the immediate.
    PushLocal(StackType),
    /// Pop into the local slot named by the immediate.
    PopLocal(StackType),
    /// Pop and drop one value.
    Discard(StackType),
    VariableAccess { scope: VarScope, access: Access, ty: StackType },
    ControlTransfer(Transfer),
    /// Call into another script procedure.
    Invocation,
    ArrayAccess(ArrayRole),
    StringOp,
    ArithmeticOp,
    ComponentOp { target: ComponentTarget, role: ComponentRole },
    ClientQuery,
    /// Reserved or unassigned; nothing is known about it.
    Unknown,
}

impl Category {
    /// Every category name, in declaration order.
    pub const NAMES: [&'static str; 13] = [
        "push_constant",
        "push_local",
        "pop_local",
        "discard",
        "variable_access",
        "control_transfer",
        "invocation",
        "array_access",
        "string_op",
        "arithmetic_op",
        "component_op",
        "client_query",
        "unknown",
    ];

    /// The category's name, without its sub-role.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[self.index()]
    }

    const fn index(&self) -> usize {
        match self {
            Self::PushConstant(_) => 0,
            Self::PushLocal(_) => 1,
            Self::PopLocal(_) => 2,
            Self::Discard(_) => 3,
            Self::VariableAccess { .. } => 4,
            Self::ControlTransfer(_) => 5,
            Self::Invocation => 6,
            Self::ArrayAccess(_) => 7,
            Self::StringOp => 8,
            Self::ArithmeticOp => 9,
            Self::ComponentOp { .. } => 10,
            Self::ClientQuery => 11,
            Self::Unknown => 12,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::PushConstant(ty) | Self::PushLocal(ty) | Self::PopLocal(ty) | Self::Discard(ty) => {
                write!(f, "({ty})")
            }
            Self::VariableAccess { scope, access, ty } => write!(f, "({scope:?}, {access:?}, {ty})"),
            Self::ControlTransfer(transfer) => write!(f, "({transfer:?})"),
            Self::ArrayAccess(role) => write!(f, "({role:?})"),
            Self::ComponentOp { target, role } => write!(f, "({target:?}, {role:?})"),
            Self::Invocation | Self::StringOp | Self::ArithmeticOp | Self::ClientQuery | Self::Unknown => Ok(()),
        }
    }
}

/// Everything the toolchain knows about one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    pub code: Opcode,
    /// Stable lower-case name used by textual disassembly.
    pub mnemonic: &'static str,
    pub category: Category,
    /// A known numeric slot whose behaviour has not been confirmed.
    pub is_reserved: bool,
    /// Fixed stack arity, when this instruction has one and it is known.
    pub effect: Option<StackEffect>,
}

impl Descriptor {
    pub const fn new(code: i32, mnemonic: &'static str, category: Category) -> Self {
        Self { code: Opcode(code), mnemonic, category, is_reserved: false, effect: None }
    }

    /// A placeholder slot. Reserved descriptors are always [`Category::Unknown`].
    pub const fn reserved(code: i32, mnemonic: &'static str) -> Self {
        Self { code: Opcode(code), mnemonic, category: Category::Unknown, is_reserved: true, effect: None }
    }

    pub const fn with_effect(mut self, effect: StackEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)
    }
}
