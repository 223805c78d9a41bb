//! The built-in instruction table.
//!
//! Rows must stay sorted strictly ascending by code: the `const` block at the
//! bottom of this file rejects duplicate or out-of-order codes at compile time.

use clientscript_types::{
    Access::{self, Read, Write},
    ArrayRole,
    Category::{self, *},
    Comparison::{self, *},
    ComponentRole::{self, *},
    ComponentTarget, Descriptor, Slots, StackEffect,
    StackType::{self, Int, String},
    Transfer::*,
    VarScope::{self, *},
};

const fn op(code: i32, mnemonic: &'static str, category: Category) -> Descriptor {
    Descriptor::new(code, mnemonic, category)
}

macro_rules! r {
    ($code:literal) => {
        Descriptor::reserved($code, concat!("_", $code))
    };
}

const fn var(scope: VarScope, access: Access, ty: StackType) -> Category {
    VariableAccess { scope, access, ty }
}

const fn branch(cmp: Comparison) -> Category {
    ControlTransfer(Branch(cmp))
}

const fn cc(role: ComponentRole) -> Category {
    ComponentOp { target: ComponentTarget::Active, role }
}

const fn iface(role: ComponentRole) -> Category {
    ComponentOp { target: ComponentTarget::Interface, role }
}

/// `(popped ints, popped strings, pushed ints, pushed strings)`
const fn fx(pop_ints: u8, pop_strings: u8, push_ints: u8, push_strings: u8) -> StackEffect {
    StackEffect::new(Slots::new(pop_ints, pop_strings), Slots::new(push_ints, push_strings))
}

#[rustfmt::skip]
pub(crate) const ENTRIES: &[Descriptor] = &[
    // > Synthesized branch conditions, never encoded
    op(-2, "ss_and", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(-1, "ss_or", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),

    // > Constants, locals and variables, branches, arrays
    op(0, "push_constant_int", PushConstant(Int)).with_effect(fx(0, 0, 1, 0)),
    op(1, "get_var", var(Player, Read, Int)).with_effect(fx(0, 0, 1, 0)),
    op(2, "set_var", var(Player, Write, Int)).with_effect(fx(1, 0, 0, 0)),
    op(3, "push_constant_string", PushConstant(String)).with_effect(fx(0, 0, 0, 1)),
    op(6, "branch", ControlTransfer(Jump)).with_effect(StackEffect::NEUTRAL),
    op(7, "branch_not", branch(NotEqual)).with_effect(fx(2, 0, 0, 0)),
    op(8, "branch_equals", branch(Equal)).with_effect(fx(2, 0, 0, 0)),
    op(9, "branch_less_than", branch(LessThan)).with_effect(fx(2, 0, 0, 0)),
    op(10, "branch_greater_than", branch(GreaterThan)).with_effect(fx(2, 0, 0, 0)),
    op(21, "return", ControlTransfer(Return)),
    op(25, "get_varbit", var(PlayerBit, Read, Int)).with_effect(fx(0, 0, 1, 0)),
    op(27, "set_varbit", var(PlayerBit, Write, Int)).with_effect(fx(1, 0, 0, 0)),
    op(31, "branch_less_than_or_equals", branch(LessThanOrEqual)).with_effect(fx(2, 0, 0, 0)),
    op(32, "branch_greater_than_or_equals", branch(GreaterThanOrEqual)).with_effect(fx(2, 0, 0, 0)),
    op(33, "push_int_local", PushLocal(Int)).with_effect(fx(0, 0, 1, 0)),
    op(34, "pop_int_local", PopLocal(Int)).with_effect(fx(1, 0, 0, 0)),
    op(35, "push_string_local", PushLocal(String)).with_effect(fx(0, 0, 0, 1)),
    op(36, "pop_string_local", PopLocal(String)).with_effect(fx(0, 1, 0, 0)),
    op(37, "join_string", StringOp),
    op(38, "pop_int_discard", Discard(Int)).with_effect(fx(1, 0, 0, 0)),
    op(39, "pop_string_discard", Discard(String)).with_effect(fx(0, 1, 0, 0)),
    op(40, "invoke", Invocation),
    op(42, "get_varc_int", var(Client, Read, Int)).with_effect(fx(0, 0, 1, 0)),
    op(43, "set_varc_int", var(Client, Write, Int)).with_effect(fx(1, 0, 0, 0)),
    op(44, "define_array", ArrayAccess(ArrayRole::Define)).with_effect(fx(1, 0, 0, 0)),
    op(45, "get_array_int", ArrayAccess(ArrayRole::Read)).with_effect(fx(1, 0, 1, 0)),
    op(46, "set_array_int", ArrayAccess(ArrayRole::Write)).with_effect(fx(2, 0, 0, 0)),
    op(47, "get_varc_string_old", var(Client, Read, String)).with_effect(fx(0, 0, 0, 1)),
    op(48, "set_varc_string_old", var(Client, Write, String)).with_effect(fx(0, 1, 0, 0)),
    op(49, "get_varc_string", var(Client, Read, String)).with_effect(fx(0, 0, 0, 1)),
    op(50, "set_varc_string", var(Client, Write, String)).with_effect(fx(0, 1, 0, 0)),
    op(60, "switch", ControlTransfer(Switch)).with_effect(fx(1, 0, 0, 0)),

    // > Component creation and lookup
    op(100, "cc_create", cc(Create)).with_effect(fx(3, 0, 0, 0)),
    op(101, "cc_delete", cc(Delete)).with_effect(fx(0, 0, 0, 0)),
    op(102, "cc_deleteall", iface(Delete)).with_effect(fx(1, 0, 0, 0)),
    op(200, "cc_find", cc(Find)).with_effect(fx(2, 0, 1, 0)),
    op(201, "if_find", iface(Find)).with_effect(fx(1, 0, 1, 0)),

    // > Active component (cc_*)
    op(1000, "cc_setposition", cc(Setter)).with_effect(fx(4, 0, 0, 0)),
    op(1001, "cc_setsize", cc(Setter)).with_effect(fx(4, 0, 0, 0)),
    op(1003, "cc_sethide", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1005, "cc_setnoclickthrough", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    r!(1006),
    op(1100, "cc_setscrollpos", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1101, "cc_setcolour", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1102, "cc_setfill", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1103, "cc_settrans", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1104, "cc_setlinewid", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1105, "cc_setgraphic", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1106, "cc_set2dangle", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1107, "cc_settiling", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1108, "cc_setmodel", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1109, "cc_setmodelangle", cc(Setter)).with_effect(fx(6, 0, 0, 0)),
    op(1110, "cc_setmodelanim", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1111, "cc_setmodelorthog", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1112, "cc_settext", cc(Setter)).with_effect(fx(0, 1, 0, 0)),
    op(1113, "cc_settextfont", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1114, "cc_settextalign", cc(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(1115, "cc_settextshadow", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1116, "cc_setoutline", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1117, "cc_setgraphicshadow", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1118, "cc_setvflip", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1119, "cc_sethflip", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1120, "cc_setscrollsize", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1121, "cc_resume_pausebutton", cc(Setter)).with_effect(fx(0, 0, 0, 0)),
    r!(1122),
    op(1123, "cc_setfillcolour", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    r!(1124), r!(1125),
    op(1126, "cc_setlinedirection", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    r!(1127),
    op(1200, "cc_setobject", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1201, "cc_setnpchead", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1202, "cc_setplayerhead_self", cc(Setter)).with_effect(fx(0, 0, 0, 0)),
    op(1205, "cc_setobject_nonum", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1212, "cc_setobject_always_num", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1300, "cc_setop", cc(Setter)).with_effect(fx(1, 1, 0, 0)),
    op(1301, "cc_setdraggable", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1302, "cc_setdraggablebehavior", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1303, "cc_setdragdeadzone", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1304, "cc_setdragdeadtime", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1305, "cc_setopbase", cc(Setter)).with_effect(fx(0, 1, 0, 0)),
    op(1306, "cc_settargetverb", cc(Setter)).with_effect(fx(0, 1, 0, 0)),
    op(1307, "cc_clearops", cc(Setter)).with_effect(fx(0, 0, 0, 0)),
    op(1350, "cc_setopkey", cc(Setter)).with_effect(fx(11, 0, 0, 0)),
    op(1351, "cc_setoptkey", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1352, "cc_setopkeyrate", cc(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(1353, "cc_setoptkeyrate", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(1354, "cc_setopkeyignoreheld", cc(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(1355, "cc_setoptkeyignoreheld", cc(Setter)).with_effect(fx(0, 0, 0, 0)),
    op(1400, "cc_setonclick", cc(Hook)),
    op(1401, "cc_setonhold", cc(Hook)),
    op(1402, "cc_setonrelease", cc(Hook)),
    op(1403, "cc_setonmouseover", cc(Hook)),
    op(1404, "cc_setonmouseleave", cc(Hook)),
    op(1405, "cc_setondrag", cc(Hook)),
    op(1406, "cc_setontargetleave", cc(Hook)),
    op(1407, "cc_setonvartransmit", cc(Hook)),
    op(1408, "cc_setontimer", cc(Hook)),
    op(1409, "cc_setonop", cc(Hook)),
    op(1410, "cc_setondragcomplete", cc(Hook)),
    op(1411, "cc_setonclickrepeat", cc(Hook)),
    op(1412, "cc_setonmouserepeat", cc(Hook)),
    op(1414, "cc_setoninvtransmit", cc(Hook)),
    op(1415, "cc_setonstattransmit", cc(Hook)),
    op(1416, "cc_setontargetenter", cc(Hook)),
    op(1417, "cc_setonscrollwheel", cc(Hook)),
    op(1418, "cc_setonchattransmit", cc(Hook)),
    op(1419, "cc_setonkey", cc(Hook)),
    op(1420, "cc_setonfriendtransmit", cc(Hook)),
    op(1421, "cc_setonclantransmit", cc(Hook)),
    op(1422, "cc_setonmisctransmit", cc(Hook)),
    op(1423, "cc_setondialogabort", cc(Hook)),
    op(1424, "cc_setonsubchange", cc(Hook)),
    op(1425, "cc_setonstocktransmit", cc(Hook)),
    r!(1426),
    op(1427, "cc_setonresize", cc(Hook)),
    op(1500, "cc_getx", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1501, "cc_gety", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1502, "cc_getwidth", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1503, "cc_getheight", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1504, "cc_gethide", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1505, "cc_getlayer", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1600, "cc_getscrollx", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1601, "cc_getscrolly", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1602, "cc_gettext", cc(Getter)).with_effect(fx(0, 0, 0, 1)),
    op(1603, "cc_getscrollwidth", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1604, "cc_getscrollheight", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1605, "cc_getmodelzoom", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1606, "cc_getmodelangle_x", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1607, "cc_getmodelangle_z", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1608, "cc_getmodelangle_y", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1609, "cc_gettrans", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    r!(1610),
    op(1611, "cc_getcolour", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1612, "cc_getfillcolour", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    r!(1613), r!(1614),
    op(1700, "cc_getinvobject", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1701, "cc_getinvcount", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1702, "cc_getid", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1800, "cc_gettargetmask", cc(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(1801, "cc_getop", cc(Getter)).with_effect(fx(1, 0, 0, 1)),
    op(1802, "cc_getopbase", cc(Getter)).with_effect(fx(0, 0, 0, 1)),
    op(1927, "cc_callonresize", cc(Hook)).with_effect(fx(1, 0, 0, 0)),

    // > Interface component (if_*)
    op(2000, "if_setposition", iface(Setter)).with_effect(fx(5, 0, 0, 0)),
    op(2001, "if_setsize", iface(Setter)).with_effect(fx(5, 0, 0, 0)),
    op(2003, "if_sethide", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2005, "if_setnoclickthrough", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    r!(2006),
    op(2100, "if_setscrollpos", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2101, "if_setcolour", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2102, "if_setfill", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2103, "if_settrans", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2104, "if_setlinewid", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2105, "if_setgraphic", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2106, "if_set2dangle", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2107, "if_settiling", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2108, "if_setmodel", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2109, "if_setmodelangle", iface(Setter)).with_effect(fx(7, 0, 0, 0)),
    op(2110, "if_setmodelanim", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2111, "if_setmodelorthog", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2112, "if_settext", iface(Setter)).with_effect(fx(1, 1, 0, 0)),
    op(2113, "if_settextfont", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2114, "if_settextalign", iface(Setter)).with_effect(fx(4, 0, 0, 0)),
    op(2115, "if_settextshadow", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2116, "if_setoutline", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2117, "if_setgraphicshadow", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2118, "if_setvflip", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2119, "if_sethflip", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2120, "if_setscrollsize", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2121, "if_resume_pausebutton", iface(Setter)).with_effect(fx(1, 0, 0, 0)),
    r!(2122),
    op(2123, "if_setfillcolour", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    r!(2124), r!(2125),
    op(2126, "if_setlinedirection", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    r!(2127),
    op(2200, "if_setobject", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2201, "if_setnpchead", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2202, "if_setplayerhead_self", iface(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(2205, "if_setobject_nonum", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2212, "if_setobject_always_num", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2300, "if_setop", iface(Setter)).with_effect(fx(2, 1, 0, 0)),
    op(2301, "if_setdraggable", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2302, "if_setdraggablebehavior", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2303, "if_setdragdeadzone", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2304, "if_setdragdeadtime", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2305, "if_setopbase", iface(Setter)).with_effect(fx(1, 1, 0, 0)),
    op(2306, "if_settargetverb", iface(Setter)).with_effect(fx(1, 1, 0, 0)),
    op(2307, "if_clearops", iface(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(2350, "if_setopkey", iface(Setter)).with_effect(fx(4, 0, 0, 0)),
    op(2351, "if_setoptkey", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2352, "if_setopkeyrate", iface(Setter)).with_effect(fx(4, 0, 0, 0)),
    op(2353, "if_setoptkeyrate", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(2354, "if_setopkeyignoreheld", iface(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(2355, "if_setoptkeyignoreheld", iface(Setter)).with_effect(fx(1, 0, 0, 0)),
    op(2400, "if_setonclick", iface(Hook)),
    op(2401, "if_setonhold", iface(Hook)),
    op(2402, "if_setonrelease", iface(Hook)),
    op(2403, "if_setonmouseover", iface(Hook)),
    op(2404, "if_setonmouseleave", iface(Hook)),
    op(2405, "if_setondrag", iface(Hook)),
    op(2406, "if_setontargetleave", iface(Hook)),
    op(2407, "if_setonvartransmit", iface(Hook)),
    op(2408, "if_setontimer", iface(Hook)),
    op(2409, "if_setonop", iface(Hook)),
    op(2410, "if_setondragcomplete", iface(Hook)),
    op(2411, "if_setonclickrepeat", iface(Hook)),
    op(2412, "if_setonmouserepeat", iface(Hook)),
    op(2414, "if_setoninvtransmit", iface(Hook)),
    op(2415, "if_setonstattransmit", iface(Hook)),
    op(2416, "if_setontargetenter", iface(Hook)),
    op(2417, "if_setonscrollwheel", iface(Hook)),
    op(2418, "if_setonchattransmit", iface(Hook)),
    op(2419, "if_setonkey", iface(Hook)),
    op(2420, "if_setonfriendtransmit", iface(Hook)),
    op(2421, "if_setonclantransmit", iface(Hook)),
    op(2422, "if_setonmisctransmit", iface(Hook)),
    op(2423, "if_setondialogabort", iface(Hook)),
    op(2424, "if_setonsubchange", iface(Hook)),
    op(2425, "if_setonstocktransmit", iface(Hook)),
    r!(2426),
    op(2427, "if_setonresize", iface(Hook)),
    op(2500, "if_getx", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2501, "if_gety", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2502, "if_getwidth", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2503, "if_getheight", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2504, "if_gethide", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2505, "if_getlayer", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2600, "if_getscrollx", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2601, "if_getscrolly", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2602, "if_gettext", iface(Getter)).with_effect(fx(1, 0, 0, 1)),
    op(2603, "if_getscrollwidth", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2604, "if_getscrollheight", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2605, "if_getmodelzoom", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2606, "if_getmodelangle_x", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2607, "if_getmodelangle_z", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2608, "if_getmodelangle_y", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2609, "if_gettrans", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    r!(2610),
    op(2611, "if_getcolour", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2612, "if_getfillcolour", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    r!(2613), r!(2614),
    op(2700, "if_getinvobject", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2701, "if_getinvcount", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2702, "if_hassub", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2706, "if_gettop", iface(Getter)).with_effect(fx(0, 0, 1, 0)),
    op(2800, "if_gettargetmask", iface(Getter)).with_effect(fx(1, 0, 1, 0)),
    op(2801, "if_getop", iface(Getter)).with_effect(fx(2, 0, 0, 1)),
    op(2802, "if_getopbase", iface(Getter)).with_effect(fx(1, 0, 0, 1)),
    op(2927, "if_callonresize", iface(Hook)).with_effect(fx(1, 0, 0, 0)),

    // > Client: misc
    op(3100, "mes", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3101, "anim", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(3103, "if_close", ClientQuery).with_effect(fx(0, 0, 0, 0)),
    op(3104, "resume_countdialog", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3105, "resume_namedialog", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3106, "resume_stringdialog", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3107, "opplayer", ClientQuery).with_effect(fx(1, 1, 0, 0)),
    op(3108, "if_dragpickup", iface(Setter)).with_effect(fx(3, 0, 0, 0)),
    op(3109, "cc_dragpickup", cc(Setter)).with_effect(fx(2, 0, 0, 0)),
    op(3110, "mousecam", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3111, "getremoveroofs", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3112, "setremoveroofs", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3113, "openurl", ClientQuery).with_effect(fx(1, 1, 0, 0)),
    op(3115, "resume_objdialog", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3116, "bug_report", ClientQuery).with_effect(fx(1, 2, 0, 0)),
    op(3117, "setshiftclickdrop", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3118, "setshowmouseovertext", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3119, "renderself", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    r!(3120), r!(3121), r!(3122), r!(3123), r!(3124),
    op(3125, "setshowmousecross", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3126, "setshowloadingmessages", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3127, "settaptodrop", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3128, "gettaptodrop", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    r!(3129), r!(3130), r!(3131),
    op(3132, "getcanvassize", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    r!(3133), r!(3134), r!(3135), r!(3136), r!(3137), r!(3138), r!(3139), r!(3140),
    op(3141, "sethideusername", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3142, "gethideusername", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3143, "setrememberusername", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3144, "getrememberusername", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    r!(3145),

    // > Client: sound
    op(3200, "sound_synth", ClientQuery).with_effect(fx(3, 0, 0, 0)),
    op(3201, "sound_song", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3202, "sound_jingle", ClientQuery).with_effect(fx(2, 0, 0, 0)),

    // > Client: player and inventory state
    op(3300, "clientclock", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3301, "inv_getobj", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3302, "inv_getnum", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3303, "inv_total", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3304, "inv_size", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3305, "stat", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3306, "stat_base", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3307, "stat_xp", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3308, "coord", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3309, "coordx", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3310, "coordy", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3311, "coordz", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3312, "map_members", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3313, "invother_getobj", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3314, "invother_getnum", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3315, "invother_total", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(3316, "staffmodlevel", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3317, "reboottimer", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3318, "map_world", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3321, "runenergy_visible", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3322, "runweight_visible", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3323, "playermod", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3324, "worldflags", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3325, "movecoord", ClientQuery).with_effect(fx(4, 0, 1, 0)),

    // > Client: enums
    op(3400, "enum_string", ClientQuery).with_effect(fx(2, 0, 0, 1)),
    op(3408, "enum", ClientQuery),
    op(3411, "enum_getoutputcount", ClientQuery).with_effect(fx(1, 0, 1, 0)),

    // > Client: friends, ignores and clan chat
    op(3600, "friend_count", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3601, "friend_getname", ClientQuery).with_effect(fx(1, 0, 0, 2)),
    op(3602, "friend_getworld", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3603, "friend_getrank", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3604, "friend_setrank", ClientQuery).with_effect(fx(1, 1, 0, 0)),
    op(3605, "friend_add", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3606, "friend_del", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3607, "ignore_add", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3608, "ignore_del", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3609, "friend_test", ClientQuery).with_effect(fx(0, 1, 1, 0)),
    op(3611, "clan_getchatdisplayname", ClientQuery).with_effect(fx(0, 0, 0, 1)),
    op(3612, "clan_getchatcount", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3613, "clan_getchatusername", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(3614, "clan_getchatuserworld", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3615, "clan_getchatuserrank", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3616, "clan_getchatminkick", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3617, "clan_kickuser", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3618, "clan_getchatrank", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3619, "clan_joinchat", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(3620, "clan_leavechat", ClientQuery).with_effect(fx(0, 0, 0, 0)),
    op(3621, "ignore_count", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3622, "ignore_getname", ClientQuery).with_effect(fx(1, 0, 0, 2)),
    op(3623, "ignore_test", ClientQuery).with_effect(fx(0, 1, 1, 0)),
    op(3624, "clan_isself", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3625, "clan_getchatownername", ClientQuery).with_effect(fx(0, 0, 0, 1)),
    op(3626, "clan_isfriend", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3627, "clan_isignore", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    r!(3628), r!(3629), r!(3630), r!(3631), r!(3632), r!(3633), r!(3634), r!(3635),
    r!(3636), r!(3637), r!(3638), r!(3639), r!(3640), r!(3641), r!(3642), r!(3643),
    r!(3644), r!(3645), r!(3646), r!(3647), r!(3648), r!(3649), r!(3650), r!(3651),
    r!(3652), r!(3653), r!(3654), r!(3655), r!(3656), r!(3657),

    // > Client: grand exchange and trading post
    op(3903, "stockmarket_getoffertype", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3904, "stockmarket_getofferitem", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3905, "stockmarket_getofferprice", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3906, "stockmarket_getoffercount", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3907, "stockmarket_getoffercompletedcount", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3908, "stockmarket_getoffercompletedgold", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3910, "stockmarket_isofferempty", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3911, "stockmarket_isofferstable", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3912, "stockmarket_isofferfinished", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3913, "stockmarket_isofferadding", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3914, "tradingpost_sortby_name", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3915, "tradingpost_sortby_price", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3916, "tradingpost_sortfilterby_world", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(3917, "tradingpost_sortby_age", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3918, "tradingpost_sortby_count", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(3919, "tradingpost_gettotaloffers", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(3920, "tradingpost_getofferworld", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3921, "tradingpost_getoffername", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(3922, "tradingpost_getofferpreviousname", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(3923, "tradingpost_getofferage", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(3924, "tradingpost_getoffercount", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3925, "tradingpost_getofferprice", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(3926, "tradingpost_getofferitem", ClientQuery).with_effect(fx(1, 0, 1, 0)),

    // > Arithmetic
    op(4000, "add", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4001, "sub", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4002, "multiply", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4003, "div", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4004, "random", ArithmeticOp).with_effect(fx(1, 0, 1, 0)),
    op(4005, "randominc", ArithmeticOp).with_effect(fx(1, 0, 1, 0)),
    op(4006, "interpolate", ArithmeticOp).with_effect(fx(5, 0, 1, 0)),
    op(4007, "addpercent", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4008, "setbit", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4009, "clearbit", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4010, "testbit", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4011, "mod", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4012, "pow", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4013, "invpow", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4014, "and", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4015, "or", ArithmeticOp).with_effect(fx(2, 0, 1, 0)),
    op(4018, "scale", ArithmeticOp).with_effect(fx(3, 0, 1, 0)),

    // > Strings
    op(4100, "append_num", StringOp).with_effect(fx(1, 1, 0, 1)),
    op(4101, "append", StringOp).with_effect(fx(0, 2, 0, 1)),
    op(4102, "append_signnum", StringOp).with_effect(fx(1, 1, 0, 1)),
    op(4103, "lowercase", StringOp).with_effect(fx(0, 1, 0, 1)),
    op(4104, "fromdate", StringOp).with_effect(fx(1, 0, 0, 1)),
    op(4105, "text_gender", StringOp).with_effect(fx(0, 2, 0, 1)),
    op(4106, "tostring", StringOp).with_effect(fx(1, 0, 0, 1)),
    op(4107, "compare", StringOp).with_effect(fx(0, 2, 1, 0)),
    op(4108, "paraheight", StringOp).with_effect(fx(2, 1, 1, 0)),
    op(4109, "parawidth", StringOp).with_effect(fx(2, 1, 1, 0)),
    op(4110, "text_switch", StringOp).with_effect(fx(1, 2, 0, 1)),
    op(4111, "escape", StringOp).with_effect(fx(0, 1, 0, 1)),
    op(4112, "append_char", StringOp).with_effect(fx(1, 1, 0, 1)),
    op(4113, "char_isprintable", StringOp).with_effect(fx(1, 0, 1, 0)),
    op(4114, "char_isalphanumeric", StringOp).with_effect(fx(1, 0, 1, 0)),
    op(4115, "char_isalpha", StringOp).with_effect(fx(1, 0, 1, 0)),
    op(4116, "char_isnumeric", StringOp).with_effect(fx(1, 0, 1, 0)),
    op(4117, "string_length", StringOp).with_effect(fx(0, 1, 1, 0)),
    op(4118, "substring", StringOp).with_effect(fx(2, 1, 0, 1)),
    op(4119, "removetags", StringOp).with_effect(fx(0, 1, 0, 1)),
    op(4120, "string_indexof_char", StringOp).with_effect(fx(1, 1, 1, 0)),
    op(4121, "string_indexof_string", StringOp).with_effect(fx(1, 2, 1, 0)),

    // > Obj config
    op(4200, "oc_name", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(4201, "oc_op", ClientQuery).with_effect(fx(2, 0, 0, 1)),
    op(4202, "oc_iop", ClientQuery).with_effect(fx(2, 0, 0, 1)),
    op(4203, "oc_cost", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4204, "oc_stackable", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4205, "oc_cert", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4206, "oc_uncert", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4207, "oc_members", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4208, "oc_placeholder", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4209, "oc_unplaceholder", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(4210, "oc_find", ClientQuery).with_effect(fx(1, 1, 1, 0)),
    op(4211, "oc_findnext", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(4212, "oc_findreset", ClientQuery).with_effect(fx(0, 0, 0, 0)),

    // > Client: chat
    op(5000, "chat_getfilter_public", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5001, "chat_setfilter", ClientQuery).with_effect(fx(3, 0, 0, 0)),
    op(5002, "chat_sendabusereport", ClientQuery).with_effect(fx(2, 1, 0, 0)),
    op(5003, "chat_gethistory_bytypeandline", ClientQuery).with_effect(fx(2, 0, 3, 3)),
    op(5004, "chat_gethistory_byuid", ClientQuery).with_effect(fx(1, 0, 3, 3)),
    op(5005, "chat_getfilter_private", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5008, "chat_sendpublic", ClientQuery).with_effect(fx(1, 1, 0, 0)),
    op(5009, "chat_sendprivate", ClientQuery).with_effect(fx(0, 2, 0, 0)),
    op(5015, "chat_playername", ClientQuery).with_effect(fx(0, 0, 0, 1)),
    op(5016, "chat_getfilter_trade", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5017, "chat_gethistorylength", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(5018, "chat_getnextuid", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(5019, "chat_getprevuid", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(5020, "docheat", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(5021, "chat_setmessagefilter", ClientQuery).with_effect(fx(0, 1, 0, 0)),
    op(5022, "chat_getmessagefilter", ClientQuery).with_effect(fx(0, 0, 0, 1)),

    // > Client: window
    op(5306, "getwindowmode", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5307, "setwindowmode", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(5308, "getdefaultwindowmode", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5309, "setdefaultwindowmode", ClientQuery).with_effect(fx(1, 0, 0, 0)),

    // > Client: camera
    op(5504, "cam_forceangle", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(5505, "cam_getangle_xa", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5506, "cam_getangle_ya", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(5530, "cam_setfollowheight", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(5531, "cam_getfollowheight", ClientQuery).with_effect(fx(0, 0, 1, 0)),

    // > Client: session
    op(5630, "logout", ClientQuery).with_effect(fx(0, 0, 0, 0)),

    // > Client: viewport
    op(6200, "viewport_setfov", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(6201, "viewport_setzoom", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(6202, "viewport_clampfov", ClientQuery).with_effect(fx(4, 0, 0, 0)),
    op(6203, "viewport_geteffectivesize", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    op(6204, "viewport_getzoom", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    op(6205, "viewport_getfov", ClientQuery).with_effect(fx(0, 0, 2, 0)),

    // > Client: world list, params and device
    op(6500, "worldlist_fetch", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6501, "worldlist_start", ClientQuery).with_effect(fx(0, 0, 4, 2)),
    op(6502, "worldlist_next", ClientQuery).with_effect(fx(0, 0, 4, 2)),
    op(6506, "worldlist_specific", ClientQuery).with_effect(fx(1, 0, 4, 2)),
    op(6507, "worldlist_sort", ClientQuery).with_effect(fx(4, 0, 0, 0)),
    r!(6511),
    op(6512, "setfolloweropslowpriority", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6513, "nc_param", ClientQuery),
    op(6514, "lc_param", ClientQuery),
    op(6515, "oc_param", ClientQuery),
    op(6516, "struct_param", ClientQuery),
    op(6518, "on_mobile", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6519, "clienttype", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    r!(6520), r!(6521), r!(6522), r!(6523),
    op(6524, "batterylevel", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6525, "batterycharging", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6526, "wifiavailable", ClientQuery).with_effect(fx(0, 0, 1, 0)),

    // > Client: world map
    r!(6600),
    op(6601, "worldmap_getmapname", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(6602, "worldmap_setmap", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6603, "worldmap_getzoom", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6604, "worldmap_setzoom", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6605, "worldmap_isloaded", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6606, "worldmap_jumptodisplaycoord", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6607, "worldmap_jumptodisplaycoord_instant", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6608, "worldmap_jumptosourcecoord", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6609, "worldmap_jumptosourcecoord_instant", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6610, "worldmap_getdisplayposition", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    op(6611, "worldmap_getconfigorigin", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(6612, "worldmap_getconfigsize", ClientQuery).with_effect(fx(1, 0, 2, 0)),
    op(6613, "worldmap_getconfigbounds", ClientQuery).with_effect(fx(1, 0, 4, 0)),
    op(6614, "worldmap_getconfigzoom", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    r!(6615),
    op(6616, "worldmap_getcurrentmap", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6617, "worldmap_getdisplaycoord", ClientQuery).with_effect(fx(1, 0, 2, 0)),
    r!(6618), r!(6619), r!(6620),
    op(6621, "worldmap_coordinmap", ClientQuery).with_effect(fx(2, 0, 1, 0)),
    op(6622, "worldmap_getsize", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    r!(6623), r!(6624), r!(6625), r!(6626), r!(6627),
    op(6628, "worldmap_perpetualflash", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6629, "worldmap_flashelement", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6630, "worldmap_flashelementcategory", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6631, "worldmap_stopcurrentflashes", ClientQuery).with_effect(fx(0, 0, 0, 0)),
    op(6632, "worldmap_disableelements", ClientQuery).with_effect(fx(1, 0, 0, 0)),
    op(6633, "worldmap_disableelement", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(6634, "worldmap_disableelementcategory", ClientQuery).with_effect(fx(2, 0, 0, 0)),
    op(6635, "worldmap_getdisableelements", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    op(6636, "worldmap_getdisableelement", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(6637, "worldmap_getdisableelementcategory", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    r!(6638),
    op(6639, "worldmap_listelement_start", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    op(6640, "worldmap_listelement_next", ClientQuery).with_effect(fx(0, 0, 2, 0)),
    op(6693, "mec_text", ClientQuery).with_effect(fx(1, 0, 0, 1)),
    op(6694, "mec_textsize", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(6695, "mec_category", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(6696, "mec_sprite", ClientQuery).with_effect(fx(1, 0, 1, 0)),
    op(6697, "worldmap_element", ClientQuery).with_effect(fx(0, 0, 1, 0)),
    r!(6698),
    op(6699, "worldmap_elementcoord", ClientQuery).with_effect(fx(0, 0, 1, 0)),
];

const _: () = {
    let mut i = 1;
    while i < ENTRIES.len() {
        assert!(ENTRIES[i - 1].code.0 < ENTRIES[i].code.0, "instruction table is not strictly ascending by code");
        i += 1;
    }
};
