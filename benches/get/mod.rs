use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use evertree::{AvlTree, RbTree};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("get");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of point lookups
        for n_lookups in [100, 1_000] {
            bench_avl(&mut g, n_values, n_lookups);
            bench_rbt(&mut g, n_values, n_lookups);
        }
    }
}

macro_rules! get_bench {
    (
        $name:ident,
        $tree:ty
    ) => {
        paste::paste! {
            /// For a tree containing `n_values`, perform two benchmarks that
            /// each perform `n_lookups`, one run causing all hits, one run
            /// causing all misses.
            fn [<bench_ $name>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                n_values: usize,
                n_lookups: usize,
            ) where
                M: Measurement,
            {
                // The tree must be at least as big as the number of lookups.
                assert!(n_values >= n_lookups);

                // Generate the tree.
                let mut rand = Lfsr::default();
                let mut t = <$tree>::default();

                for _i in 0..n_values {
                    t = t.insert(rand.next(), 42_usize);
                }

                // Perform a benchmark that continues using the LFSR to
                // generate n_lookups keys that will all miss (the LFSR does
                // not repeat a value within its cycle).
                let id = BenchmarkId::new(
                    format!("{}_{}_values_misses", stringify!($name), n_values),
                    n_lookups,
                );

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(id, |b| {
                    b.iter_batched(
                        // Provide the LFSR state after inserting n_values.
                        //
                        // It will now generate n_lookups of different keys.
                        || rand.clone(),
                        |mut rand| {
                            let mut any_hit = false;
                            for _ in 0..n_lookups {
                                any_hit |= t.contains_key(&rand.next());
                            }
                            assert!(!any_hit)
                        },
                        BatchSize::SmallInput,
                    )
                });

                let id = BenchmarkId::new(
                    format!("{}_{}_values_hits", stringify!($name), n_values),
                    n_lookups,
                );

                // Perform a benchmark that re-visits the inserted keys.
                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(id, |b| {
                    b.iter_batched(
                        // Reset the LFSR.
                        //
                        // It will now generate the same sequence of keys as
                        // what was inserted into the tree originally.
                        Lfsr::default,
                        |mut rand| {
                            let mut all_hit = true;
                            for _ in 0..n_lookups {
                                all_hit &= t.contains_key(&rand.next());
                            }
                            assert!(all_hit);
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

get_bench!(avl, AvlTree<u16, usize>);
get_bench!(rbt, RbTree<u16, usize>);
