use std::hint::black_box;

use clientscript::{Catalog, Classify};
use criterion::{Criterion, criterion_group, criterion_main};
use eyre::Result;

fn build() -> Result<Catalog> {
    Ok(Catalog::from_entries(Catalog::builtin_entries())?)
}

fn lookup_all(catalog: &Catalog, codes: &[i32]) -> usize {
    codes.iter().filter(|&&code| catalog.lookup(code).terminates_block()).count()
}

fn lookup_mnemonics(catalog: &Catalog, names: &[&str]) -> Result<usize> {
    let mut pseudo = 0;
    for name in names {
        pseudo += catalog.lookup_by_mnemonic(name)?.is_pseudo() as usize;
    }
    Ok(pseudo)
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = build().expect("build");
    let codes: Vec<i32> = (-2..7000).collect();
    let names: Vec<&str> = catalog.all().map(|d| d.mnemonic).collect();

    c.bench_function("catalog_build", |b| b.iter(build));
    c.bench_function("lookup_range", |b| b.iter(|| lookup_all(&catalog, black_box(&codes))));
    c.bench_function("lookup_by_mnemonic", |b| b.iter(|| lookup_mnemonics(&catalog, black_box(&names))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
