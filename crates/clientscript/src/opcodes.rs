//! Named codes for the instructions consumers most often need to single out.
//!
//! Everything else should be reached through [`Catalog`](crate::Catalog) and the
//! [`Classify`](crate::Classify) predicates rather than by number.

use clientscript_types::Opcode;

pub const SS_AND: Opcode = Opcode::SS_AND;
pub const SS_OR: Opcode = Opcode::SS_OR;

// > Core instructions
pub const PUSH_CONSTANT_INT: Opcode = Opcode(0);
pub const GET_VAR: Opcode = Opcode(1);
pub const SET_VAR: Opcode = Opcode(2);
pub const PUSH_CONSTANT_STRING: Opcode = Opcode(3);
pub const BRANCH: Opcode = Opcode(6);
pub const BRANCH_NOT: Opcode = Opcode(7);
pub const BRANCH_EQUALS: Opcode = Opcode(8);
pub const BRANCH_LESS_THAN: Opcode = Opcode(9);
pub const BRANCH_GREATER_THAN: Opcode = Opcode(10);
pub const RETURN: Opcode = Opcode(21);
pub const GET_VARBIT: Opcode = Opcode(25);
pub const SET_VARBIT: Opcode = Opcode(27);
pub const BRANCH_LESS_THAN_OR_EQUALS: Opcode = Opcode(31);
pub const BRANCH_GREATER_THAN_OR_EQUALS: Opcode = Opcode(32);
pub const PUSH_INT_LOCAL: Opcode = Opcode(33);
pub const POP_INT_LOCAL: Opcode = Opcode(34);
pub const PUSH_STRING_LOCAL: Opcode = Opcode(35);
pub const POP_STRING_LOCAL: Opcode = Opcode(36);
pub const JOIN_STRING: Opcode = Opcode(37);
pub const POP_INT_DISCARD: Opcode = Opcode(38);
pub const POP_STRING_DISCARD: Opcode = Opcode(39);
pub const INVOKE: Opcode = Opcode(40);
pub const GET_VARC_INT: Opcode = Opcode(42);
pub const SET_VARC_INT: Opcode = Opcode(43);
pub const DEFINE_ARRAY: Opcode = Opcode(44);
pub const GET_ARRAY_INT: Opcode = Opcode(45);
pub const SET_ARRAY_INT: Opcode = Opcode(46);
pub const GET_VARC_STRING_OLD: Opcode = Opcode(47);
pub const SET_VARC_STRING_OLD: Opcode = Opcode(48);
pub const GET_VARC_STRING: Opcode = Opcode(49);
pub const SET_VARC_STRING: Opcode = Opcode(50);
pub const SWITCH: Opcode = Opcode(60);

// > Binary operators with an infix spelling
pub const ADD: Opcode = Opcode(4000);
pub const SUB: Opcode = Opcode(4001);
pub const MULTIPLY: Opcode = Opcode(4002);
pub const DIV: Opcode = Opcode(4003);
pub const MOD: Opcode = Opcode(4011);
pub const AND: Opcode = Opcode(4014);
pub const OR: Opcode = Opcode(4015);
pub const APPEND: Opcode = Opcode(4101);
