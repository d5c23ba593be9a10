// https://bheisler.github.io/criterion.rs/book/getting_started.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricing::common::models::OptionParameters;
use pricing::lattice::{BinomialTree, OptionPrice};

criterion_group!(benches, criterion_binomial_call);
criterion_main!(benches);

pub fn criterion_binomial_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("European call on a binomial lattice");
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();

    for steps in [100, 1000, 5000] {
        let tree = BinomialTree::new(steps).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &tree, |b, tree| {
            b.iter(|| tree.call(black_box(&params)))
        });
    }

    group.finish()
}
