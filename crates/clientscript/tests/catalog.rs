use std::collections::HashSet;

use clientscript::{Catalog, Category, Classify, Error, Lookup, Opcode, OperandDomain, Transfer, opcodes};
use eyre::Result;

#[test]
fn builtin_table_size() -> Result<()> {
    let catalog = Catalog::init()?;
    assert_eq!(catalog.len(), 560);
    assert_eq!(catalog.all().filter(|d| d.code.is_pseudo()).count(), 2);
    Ok(())
}

#[test]
fn injectivity() -> Result<()> {
    let catalog = Catalog::init()?;
    let codes: HashSet<_> = catalog.all().map(|d| d.code).collect();
    let mnemonics: HashSet<_> = catalog.all().map(|d| d.mnemonic).collect();
    assert_eq!(codes.len(), catalog.len());
    assert_eq!(mnemonics.len(), catalog.len());
    Ok(())
}

#[test]
fn round_trip() -> Result<()> {
    let catalog = Catalog::init()?;
    for d in catalog {
        assert_eq!(catalog.lookup_by_mnemonic(d.mnemonic)?, d);
        assert_eq!(catalog.lookup(d.code), Lookup::Known(d));
    }
    Ok(())
}

#[test]
fn ascending_order() -> Result<()> {
    let catalog = Catalog::init()?;
    let codes: Vec<_> = catalog.all().map(|d| d.code).collect();
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn pseudo_code_isolation() -> Result<()> {
    let catalog = Catalog::init()?;
    for d in catalog {
        assert_eq!(d.is_pseudo(), d.code == opcodes::SS_OR || d.code == opcodes::SS_AND, "{d}");
    }

    for code in [opcodes::SS_OR, opcodes::SS_AND] {
        let lookup = catalog.lookup(code);
        assert!(lookup.is_pseudo());
        assert!(!lookup.terminates_block());
        assert_eq!(catalog.lookup_encoded(code), Err(Error::PseudoInStream(code)));
    }

    // undefined negative codes are not pseudo-codes
    assert!(!catalog.lookup(-3).is_pseudo());
    assert!(catalog.lookup_encoded(60)?.is_known());
    Ok(())
}

#[test]
fn block_termination_coverage() -> Result<()> {
    let catalog = Catalog::init()?;
    for d in catalog {
        assert_eq!(d.terminates_block(), matches!(d.category, Category::ControlTransfer(_)), "{d}");
    }

    let terminators: Vec<i32> = catalog.all().filter(|d| d.terminates_block()).map(|d| d.code.0).collect();
    assert_eq!(terminators, [6, 7, 8, 9, 10, 21, 31, 32, 60]);

    let classifier = catalog.classifier();
    assert!(classifier.terminates_block(opcodes::RETURN));
    assert!(classifier.terminates_block(opcodes::BRANCH_EQUALS));
    assert!(classifier.terminates_block(opcodes::SWITCH));
    assert!(!classifier.terminates_block(1000)); // cc_setposition
    assert!(!classifier.terminates_block(opcodes::INVOKE));
    Ok(())
}

#[test]
fn unknown_safety() -> Result<()> {
    let catalog = Catalog::init()?;
    for code in [999_999, 7000, 1002, -3, i32::MIN, i32::MAX] {
        let lookup = catalog.lookup(code);
        assert_eq!(lookup, Lookup::Unknown(Opcode(code)));
        assert_eq!(lookup.category(), Category::Unknown);
        assert!(!lookup.terminates_block());
        assert!(!lookup.is_pseudo());
        assert!(!lookup.is_reserved());
        assert_eq!(lookup.operand_domain(), OperandDomain::None);
        assert_eq!(lookup.stack_effect(), None);
        assert_eq!(lookup.infix_operator(), None);
    }
    Ok(())
}

#[test]
fn concrete_scenario() -> Result<()> {
    let classifier = Catalog::init()?.classifier();
    let codes = [2, 21, 60];
    let terminates: Vec<bool> = codes.iter().map(|&c| classifier.terminates_block(c)).collect();
    let pseudo: Vec<bool> = codes.iter().map(|&c| classifier.is_pseudo(c)).collect();
    assert_eq!(terminates, [false, true, true]);
    assert_eq!(pseudo, [false, false, false]);
    Ok(())
}

#[test]
fn reserved_slots_are_opaque() -> Result<()> {
    let catalog = Catalog::init()?;
    let reserved: Vec<_> = catalog.reserved().collect();
    assert!(!reserved.is_empty());
    for d in &reserved {
        assert_eq!(d.category, Category::Unknown);
        assert_eq!(d.mnemonic, format!("_{}", d.code));
        assert_eq!(d.operand_domain(), OperandDomain::None);
        assert!(!d.terminates_block());
    }

    // and nothing else is left uncategorized
    let unknown = catalog.by_category(|c| *c == Category::Unknown).count();
    assert_eq!(unknown, reserved.len());
    Ok(())
}

#[test]
fn operand_domains() -> Result<()> {
    let classifier = Catalog::init()?.classifier();
    let expected = [
        (opcodes::PUSH_CONSTANT_INT, OperandDomain::Integer),
        (opcodes::PUSH_CONSTANT_STRING, OperandDomain::String),
        (opcodes::PUSH_INT_LOCAL, OperandDomain::Integer),
        (opcodes::GET_VARBIT, OperandDomain::Integer),
        (opcodes::BRANCH, OperandDomain::Integer),
        (opcodes::RETURN, OperandDomain::None),
        (opcodes::JOIN_STRING, OperandDomain::Integer),
        (opcodes::INVOKE, OperandDomain::Integer),
        (opcodes::SWITCH, OperandDomain::Integer),
        (opcodes::APPEND, OperandDomain::None),
        (opcodes::ADD, OperandDomain::None),
        (Opcode(1000), OperandDomain::Integer), // cc_setposition
        (Opcode(2000), OperandDomain::None),    // if_setposition
        (Opcode(3100), OperandDomain::None),    // mes
    ];
    for (code, domain) in expected {
        assert_eq!(classifier.operand_domain(code), domain, "{}", classifier.classify(code));
    }
    Ok(())
}

#[test]
fn infix_operators() -> Result<()> {
    let catalog = Catalog::init()?;
    let infix = |name: &str| -> Result<Option<&'static str>> { Ok(catalog.lookup_by_mnemonic(name)?.infix_operator()) };

    assert_eq!(infix("add")?, Some("+"));
    assert_eq!(infix("append")?, Some("+"));
    assert_eq!(infix("mod")?, Some("%"));
    assert_eq!(infix("ss_or")?, Some("||"));
    assert_eq!(infix("ss_and")?, Some("&&"));
    assert_eq!(infix("branch_greater_than_or_equals")?, Some(">="));
    assert_eq!(infix("branch_not")?, Some("!="));
    assert_eq!(infix("tostring")?, None);
    assert_eq!(infix("switch")?, None);
    Ok(())
}

#[test]
fn component_mutation() -> Result<()> {
    let catalog = Catalog::init()?;
    let mutates = |name: &str| -> Result<bool> { Ok(catalog.lookup_by_mnemonic(name)?.is_component_mutation()) };

    assert!(mutates("cc_create")?);
    assert!(mutates("cc_delete")?);
    assert!(mutates("cc_deleteall")?);
    assert!(mutates("cc_setposition")?);
    assert!(mutates("if_setposition")?);
    assert!(!mutates("cc_find")?);
    assert!(!mutates("mes")?);
    Ok(())
}

#[test]
fn stack_effects() -> Result<()> {
    let catalog = Catalog::init()?;
    let effect = |name: &str| -> Result<Option<(i16, i16)>> {
        Ok(catalog.lookup_by_mnemonic(name)?.stack_effect().map(|e| e.delta()))
    };

    assert_eq!(effect("push_constant_int")?, Some((1, 0)));
    assert_eq!(effect("pop_string_discard")?, Some((0, -1)));
    assert_eq!(effect("add")?, Some((-1, 0)));
    assert_eq!(effect("append_num")?, Some((-1, 0)));
    assert_eq!(effect("branch")?, Some((0, 0)));
    // arity depends on the callee
    assert_eq!(effect("invoke")?, None);
    assert_eq!(effect("return")?, None);

    assert!(catalog.lookup_by_mnemonic("tostring")?.pushes_string());
    assert!(!catalog.lookup_by_mnemonic("add")?.pushes_string());
    Ok(())
}

#[test]
fn mnemonic_lookup_is_exact() -> Result<()> {
    let catalog = Catalog::init()?;
    assert!(catalog.lookup_by_mnemonic("switch").is_ok());
    assert_eq!(catalog.lookup_by_mnemonic("SWITCH"), Err(Error::MnemonicNotFound("SWITCH".to_string())));
    assert_eq!(catalog.lookup_by_mnemonic(""), Err(Error::MnemonicNotFound(String::new())));
    Ok(())
}

#[test]
fn conditional_branches() -> Result<()> {
    let catalog = Catalog::init()?;
    let branches: Vec<_> = catalog.all().filter(|d| d.is_conditional_branch()).map(|d| d.mnemonic).collect();
    assert_eq!(branches.len(), 6);
    assert!(branches.iter().all(|m| m.starts_with("branch_")));
    assert!(!catalog.lookup(opcodes::BRANCH).is_conditional_branch());
    assert!(matches!(catalog.lookup(opcodes::BRANCH).category(), Category::ControlTransfer(Transfer::Jump)));
    Ok(())
}

#[test]
fn concurrent_reads() -> Result<()> {
    let catalog = Catalog::init()?;
    let expected: Vec<_> = (-3..7000).map(|code| catalog.lookup(code)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| (-3..7000).map(|code| Catalog::global().lookup(code)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("reader thread panicked"), expected);
        }
    });
    Ok(())
}
