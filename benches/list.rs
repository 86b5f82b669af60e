use criterion::{criterion_group, criterion_main, Criterion};

use linear_seq::DoublyLinkedList;

const ITEMS: usize = 1000;

fn list_push_pop(c: &mut Criterion) {
    c.bench_function("queue-dlist", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..ITEMS {
                list.push_back(i);
            }
            for _ in 0..ITEMS {
                list.pop_front().unwrap();
            }
            assert!(list.is_empty());
        })
    });

    c.bench_function("queue-std-list", |b| {
        b.iter(|| {
            let mut list = std::collections::LinkedList::new();
            for i in 0..ITEMS {
                list.push_back(i);
            }
            for _ in 0..ITEMS {
                list.pop_front().unwrap();
            }
            assert!(list.is_empty());
        })
    });
}

fn list_remove_middle(c: &mut Criterion) {
    c.bench_function("remove-at-middle", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..ITEMS {
                list.push_back(i);
            }
            while !list.is_empty() {
                list.remove_at(list.len() / 2).unwrap();
            }
        })
    });
}

criterion_group!(benches, list_push_pop, list_remove_middle);
criterion_main!(benches);
