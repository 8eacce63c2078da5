use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use evertree::{AvlTree, RbTree};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_avl(&mut g, n_values);
        bench_rbt(&mut g, n_values);
    }
}

macro_rules! insert_bench {
    (
        $name:ident,
        $tree:ty
    ) => {
        paste::paste! {
            /// Measure the time needed to insert `n_values` randomly
            /// generated keys into an empty tree, rebinding the new version
            /// returned by each insert.
            fn [<bench_ $name>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::new(stringify!($name), n_values), |b| {
                    b.iter_batched(
                        || (<$tree>::default(), Lfsr::default()),
                        |(mut t, mut rand)| {
                            for _i in 0..n_values {
                                t = t.insert(rand.next(), 42_usize);
                            }
                            t
                        },
                        criterion::BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

insert_bench!(avl, AvlTree<u16, usize>);
insert_bench!(rbt, RbTree<u16, usize>);
