use criterion::{criterion_group, criterion_main, Criterion};

use linear_seq::DynamicArray;

const ITEMS: usize = 1000;

fn array_push(c: &mut Criterion) {
    c.bench_function("push-dynamic-array", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::with_capacity(0);
            for i in 0..ITEMS {
                arr.push(i);
            }
            arr
        })
    });

    c.bench_function("push-std-vec", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(0);
            for i in 0..ITEMS {
                vec.push(i);
            }
            vec
        })
    });
}

fn array_scan(c: &mut Criterion) {
    let arr: DynamicArray<_> = (0..ITEMS).collect();

    c.bench_function("scan-dynamic-array", |b| {
        b.iter(|| {
            assert_eq!(arr.index_of(&(ITEMS - 1)), Some(ITEMS - 1));
        })
    });
}

criterion_group!(benches, array_push, array_scan);
criterion_main!(benches);
