use std::collections::BTreeMap;

use anstream::println;
use clientscript::{Catalog, Classify, Descriptor, Lookup};
use owo_colors::OwoColorize;

pub(crate) fn print_row(d: &Descriptor) {
    let effect = d.effect.map(|e| e.to_string()).unwrap_or_default();
    if d.is_reserved {
        println!("{:>6}  {:<36} {}", d.code.0, d.mnemonic.dimmed(), "reserved".dimmed());
    } else {
        println!("{:>6}  {:<36} {:<40} {}", d.code.0, d.mnemonic.bold(), d.category.to_string(), effect.dimmed());
    }
}

pub(crate) fn print_detail(lookup: Lookup<'_>) {
    let Lookup::Known(d) = lookup else {
        println!("{}", lookup.yellow());
        return;
    };

    println!("{:<10} {}", "code".dimmed(), d.code);
    println!("{:<10} {}", "mnemonic".dimmed(), d.mnemonic.bold());
    println!("{:<10} {}", "category".dimmed(), d.category);
    println!("{:<10} {}", "operand".dimmed(), d.operand_domain());
    if let Some(effect) = d.effect {
        println!("{:<10} {}", "effect".dimmed(), effect);
    }
    if let Some(op) = d.infix_operator() {
        println!("{:<10} {}", "infix".dimmed(), op);
    }

    let flags = [
        (d.is_reserved, "reserved"),
        (d.is_pseudo(), "pseudo"),
        (d.terminates_block(), "terminates block"),
        (d.is_scheduling_point(), "scheduling point"),
        (d.is_component_mutation(), "mutates component"),
    ];
    for (_, flag) in flags.iter().filter(|(set, _)| *set) {
        println!("{:<10} {}", "", flag.cyan());
    }
}

/// Per-category entry counts, in category name order.
pub(crate) fn summarize(catalog: &Catalog) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for d in catalog {
        *counts.entry(d.category.name()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn print_summary(catalog: &Catalog) {
    for (name, count) in summarize(catalog) {
        println!("{name:<20} {count:>4}");
    }
    println!(
        "{:<20} {:>4} ({} reserved)",
        "total".bold(),
        catalog.len(),
        catalog.reserved().count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_adds_up() {
        let catalog = Catalog::global();
        let counts = summarize(catalog);
        assert_eq!(counts.values().sum::<usize>(), catalog.len());
        assert_eq!(counts.get("unknown").copied(), Some(catalog.reserved().count()));
        assert_eq!(counts.get("discard").copied(), Some(2));
    }
}
