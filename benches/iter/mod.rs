use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use evertree::{AvlTree, RbTree};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_avl(&mut g, n_values);
        bench_rbt(&mut g, n_values);
    }
}

macro_rules! iter_bench {
    (
        $name:ident,
        $tree:ty
    ) => {
        paste::paste! {
            /// Measure a full in-order traversal of a tree holding
            /// `n_values` entries.
            fn [<bench_ $name>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                // Generate the tree.
                let mut rand = Lfsr::default();
                let mut t = <$tree>::default();

                for _i in 0..n_values {
                    t = t.insert(rand.next(), 42_usize);
                }

                g.throughput(Throughput::Elements(n_values as _)); // Values per second
                g.bench_function(BenchmarkId::new(stringify!($name), n_values), |b| {
                    b.iter(|| {
                        for v in t.iter() {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
}

iter_bench!(avl, AvlTree<u16, usize>);
iter_bench!(rbt, RbTree<u16, usize>);
