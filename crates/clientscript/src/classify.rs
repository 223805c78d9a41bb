use clientscript_types::{
    Category, ComponentRole, ComponentTarget, Descriptor, Opcode, OperandDomain, StackEffect, Transfer,
};

use crate::{opcodes, Catalog, Lookup};

/// Structural questions the decoder and control-flow stages ask about an instruction.
///
/// Implemented for [`Descriptor`] and for [`Lookup`]. An unknown lookup answers
/// every question with the conservative default: it has category
/// [`Category::Unknown`], does not end a block, carries no operand domain and
/// has no known stack effect.
pub trait Classify {
    fn code(&self) -> Opcode;

    fn category(&self) -> Category;

    /// Whether the code resolved to a catalog entry.
    fn is_known(&self) -> bool;

    fn is_reserved(&self) -> bool;

    fn stack_effect(&self) -> Option<StackEffect>;

    /// True exactly for [`Category::ControlTransfer`]: jumps, branches, switches and returns.
    #[inline]
    fn terminates_block(&self) -> bool {
        matches!(self.category(), Category::ControlTransfer(_))
    }

    /// True only for the two negative codes used in synthesized branch conditions.
    #[inline]
    fn is_pseudo(&self) -> bool {
        self.is_known() && self.code().is_pseudo()
    }

    /// What the immediate operand of this instruction means.
    #[inline]
    fn operand_domain(&self) -> OperandDomain {
        operand_domain(self.code(), self.category())
    }

    #[inline]
    fn is_conditional_branch(&self) -> bool {
        matches!(self.category(), Category::ControlTransfer(Transfer::Branch(_)))
    }

    /// Calls into another procedure. Does not end a block, but the control-flow
    /// builder has to schedule around it.
    #[inline]
    fn is_scheduling_point(&self) -> bool {
        matches!(self.category(), Category::Invocation)
    }

    /// Creates, deletes or reconfigures a component.
    fn is_component_mutation(&self) -> bool {
        use ComponentRole::*;
        matches!(self.category(), Category::ComponentOp { role: Create | Delete | Setter | Hook, .. })
    }

    /// Leaves at least one new value on the string stack. False when the stack
    /// effect is not known.
    fn pushes_string(&self) -> bool {
        self.stack_effect().is_some_and(|effect| effect.pushes.strings > 0)
    }

    /// Source-level spelling of a binary operator, for the pretty-printer.
    fn infix_operator(&self) -> Option<&'static str> {
        infix_operator(self.code(), self.category())
    }
}

fn operand_domain(code: Opcode, category: Category) -> OperandDomain {
    use Category::*;

    match category {
        PushConstant(ty) => ty.operand_domain(),
        PushLocal(_) | PopLocal(_) | VariableAccess { .. } | ArrayAccess(_) | Invocation => OperandDomain::Integer,
        ControlTransfer(Transfer::Return) => OperandDomain::None,
        // branch offset, or index into the script's switch tables
        ControlTransfer(_) => OperandDomain::Integer,
        // argument count
        StringOp if code == opcodes::JOIN_STRING => OperandDomain::Integer,
        // primary/secondary active component flag
        ComponentOp { target: ComponentTarget::Active, .. } | ComponentOp { role: ComponentRole::Find, .. } => {
            OperandDomain::Integer
        }
        StringOp | ComponentOp { .. } | Discard(_) | ArithmeticOp | ClientQuery | Unknown => OperandDomain::None,
    }
}

fn infix_operator(code: Opcode, category: Category) -> Option<&'static str> {
    match category {
        Category::ControlTransfer(Transfer::Branch(cmp)) => Some(cmp.symbol()),
        Category::ArithmeticOp | Category::StringOp => match code {
            opcodes::ADD | opcodes::APPEND => Some("+"),
            opcodes::SUB => Some("-"),
            opcodes::MULTIPLY => Some("*"),
            opcodes::DIV => Some("/"),
            opcodes::MOD => Some("%"),
            opcodes::AND => Some("&"),
            opcodes::OR => Some("|"),
            opcodes::SS_OR => Some("||"),
            opcodes::SS_AND => Some("&&"),
            _ => None,
        },
        _ => None,
    }
}

impl Classify for Descriptor {
    #[inline]
    fn code(&self) -> Opcode {
        self.code
    }

    #[inline]
    fn category(&self) -> Category {
        self.category
    }

    #[inline]
    fn is_known(&self) -> bool {
        true
    }

    #[inline]
    fn is_reserved(&self) -> bool {
        self.is_reserved
    }

    #[inline]
    fn stack_effect(&self) -> Option<StackEffect> {
        self.effect
    }
}

impl Classify for Lookup<'_> {
    #[inline]
    fn code(&self) -> Opcode {
        Lookup::code(self)
    }

    #[inline]
    fn category(&self) -> Category {
        self.descriptor().map_or(Category::Unknown, |d| d.category)
    }

    #[inline]
    fn is_known(&self) -> bool {
        Lookup::is_known(self)
    }

    #[inline]
    fn is_reserved(&self) -> bool {
        self.descriptor().is_some_and(|d| d.is_reserved)
    }

    #[inline]
    fn stack_effect(&self) -> Option<StackEffect> {
        self.descriptor().and_then(|d| d.effect)
    }
}

/// Answers [`Classify`] questions straight from a raw code.
///
/// For consumers that hold opcodes rather than descriptors, such as a
/// control-flow builder walking a decoded instruction list.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a Catalog,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// A classifier over [`Catalog::global`].
    pub fn global() -> Classifier<'static> {
        Classifier::new(Catalog::global())
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    pub fn classify(&self, code: impl Into<Opcode>) -> Lookup<'a> {
        self.catalog.lookup(code)
    }

    #[inline]
    pub fn terminates_block(&self, code: impl Into<Opcode>) -> bool {
        self.classify(code).terminates_block()
    }

    #[inline]
    pub fn is_pseudo(&self, code: impl Into<Opcode>) -> bool {
        self.classify(code).is_pseudo()
    }

    #[inline]
    pub fn operand_domain(&self, code: impl Into<Opcode>) -> OperandDomain {
        self.classify(code).operand_domain()
    }

    /// Indices of the instructions in `codes` that end a basic block.
    pub fn block_ends<'c, I>(&self, codes: I) -> impl Iterator<Item = usize>
    where
        I: IntoIterator<Item = &'c Opcode>,
    {
        let catalog = self.catalog;
        codes.into_iter().enumerate().filter(move |(_, code)| catalog.lookup(**code).terminates_block()).map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientscript_types::StackType;

    #[test]
    fn test_operand_domain_by_category() {
        assert_eq!(operand_domain(Opcode(0), Category::PushConstant(StackType::Int)), OperandDomain::Integer);
        assert_eq!(operand_domain(Opcode(3), Category::PushConstant(StackType::String)), OperandDomain::String);
        assert_eq!(operand_domain(Opcode(21), Category::ControlTransfer(Transfer::Return)), OperandDomain::None);
        assert_eq!(operand_domain(Opcode(60), Category::ControlTransfer(Transfer::Switch)), OperandDomain::Integer);
        assert_eq!(operand_domain(opcodes::JOIN_STRING, Category::StringOp), OperandDomain::Integer);
        assert_eq!(operand_domain(opcodes::APPEND, Category::StringOp), OperandDomain::None);
        assert_eq!(operand_domain(Opcode(38), Category::Discard(StackType::Int)), OperandDomain::None);
        assert_eq!(operand_domain(Opcode(1), Category::Unknown), OperandDomain::None);
    }

    #[test]
    fn test_component_operand_domain() {
        let cc_setter = Category::ComponentOp { target: ComponentTarget::Active, role: ComponentRole::Setter };
        let if_setter = Category::ComponentOp { target: ComponentTarget::Interface, role: ComponentRole::Setter };
        let if_find = Category::ComponentOp { target: ComponentTarget::Interface, role: ComponentRole::Find };
        assert_eq!(operand_domain(Opcode(1000), cc_setter), OperandDomain::Integer);
        assert_eq!(operand_domain(Opcode(2000), if_setter), OperandDomain::None);
        assert_eq!(operand_domain(Opcode(201), if_find), OperandDomain::Integer);
    }

    #[test]
    fn test_infix_only_for_operator_categories() {
        // same code, but an unknown category never gets an operator
        assert_eq!(infix_operator(opcodes::ADD, Category::Unknown), None);
        assert_eq!(infix_operator(opcodes::ADD, Category::ArithmeticOp), Some("+"));
        assert_eq!(infix_operator(Opcode(4004), Category::ArithmeticOp), None);
    }

    #[test]
    fn test_block_ends() {
        let classifier = Classifier::global();
        let codes = [Opcode(0), Opcode(33), Opcode(7), Opcode(2), Opcode(6), Opcode(40), Opcode(21)];
        let ends: Vec<usize> = classifier.block_ends(&codes).collect();
        assert_eq!(ends, [2, 4, 6]);
    }
}
