use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockdesk_inventory::{InventoryStore, ProductId};

fn populated(size: usize) -> InventoryStore {
    let mut store = InventoryStore::new();
    for n in 0..size {
        let id = ProductId::new(&format!("SKU{n:05}")).expect("bench id");
        store
            .add(id, format!("Product {n}"), (n % 100) as f64, (n % 20) as i64)
            .expect("bench add");
    }
    store
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_add");
    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_list");
    for size in [100usize, 1_000, 10_000] {
        let store = populated(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.list().total_value));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_search");
    for size in [100usize, 1_000, 10_000] {
        let store = populated(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.search("product 1").count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_list, bench_search);
criterion_main!(benches);
