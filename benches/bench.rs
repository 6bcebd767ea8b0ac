use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;

use classic_sorts::registry::{self, Algorithm};
use sort_test_tools::patterns;

#[inline(never)]
fn bench_sort(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize, &mut StdRng) -> Vec<i32>,
    algorithm: &Algorithm<i32>,
    rng: &mut StdRng,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{}-i32-{pattern_name}-{test_size}", algorithm.name),
        |b| {
            b.iter_batched(
                || pattern_provider(test_size, rng),
                |mut test_data| algorithm.run(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn bench_patterns(c: &mut Criterion, test_size: usize, rng: &mut StdRng) {
    let pattern_providers: Vec<(&'static str, fn(usize, &mut StdRng) -> Vec<i32>)> = vec![
        ("fixed", |size: usize, _: &mut StdRng| {
            patterns::all_equal(size)
        }),
        ("ascending", |size: usize, _: &mut StdRng| {
            patterns::ascending(size)
        }),
        ("descending", |size: usize, _: &mut StdRng| {
            patterns::descending(size)
        }),
        ("random", |size: usize, rng: &mut StdRng| {
            patterns::random_uniform(size, 0..100, rng)
        }),
        ("random_full", patterns::random),
        ("saws_long", |size: usize, rng: &mut StdRng| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize, rng)
        }),
    ];

    for algorithm in registry::algorithms::<i32>() {
        if algorithm.is_quadratic() && test_size > 10_000 {
            // These would take hours.
            continue;
        }

        for (pattern_name, pattern_provider) in pattern_providers.iter() {
            if test_size < 3 && *pattern_name != "random" {
                continue;
            }

            bench_sort(
                c,
                test_size,
                pattern_name,
                *pattern_provider,
                &algorithm,
                rng,
            );
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [0, 1, 2, 3, 8, 15, 20, 50, 100, 1_000, 10_000, 100_000, 1_000_000];

    // Print the seed, slow outliers are only worth a look if they can be reproduced.
    let seed = patterns::resolve_seed(None);
    println!("Seed: {seed}");
    let mut rng = patterns::rng_from_seed(seed);

    for test_size in test_sizes {
        bench_patterns(c, test_size, &mut rng);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
