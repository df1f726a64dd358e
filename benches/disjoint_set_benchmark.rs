use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazegraph::DisjointSet;

// Quick-find baseline: O(n) union, O(1) find.
struct QuickFind {
    labels: Vec<usize>,
}

impl QuickFind {
    fn new(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
        }
    }

    fn find(&self, id: usize) -> usize {
        self.labels[id]
    }

    fn union(&mut self, id1: usize, id2: usize) -> bool {
        let (keep, drop) = (self.labels[id1], self.labels[id2]);
        if keep == drop {
            return false;
        }
        for label in &mut self.labels {
            if *label == drop {
                *label = keep;
            }
        }
        true
    }
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 4_000;
    const OPS: usize = 20_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        })
    });

    group.bench_function("QuickFind", |b| {
        b.iter(|| {
            let mut ds = QuickFind::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set);
criterion_main!(benches);
