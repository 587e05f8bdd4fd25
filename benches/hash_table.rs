#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::{HashTable, HashTableExtensions};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chain_table = HashTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chaintable set", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chain_table.set(key, value).unwrap();
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chaintable get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chain_table.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("chaintable entries", |b| {
        b.iter(|| chain_table.entries().len());
    });
    group.bench_function("growth from 16 buckets", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for (i, (key, _)) in items.iter().enumerate() {
                table.set(key.as_str(), i).unwrap();
            }
            table.bucket_count()
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
