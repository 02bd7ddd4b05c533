use criterion::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use othello_engine::test_utils::{play_random_game, run_perft};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(8, black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_random_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_game");

    for size in [4, 8, 10].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| play_random_game(black_box(size), &mut rng))
        });
    }

    group.finish();
}

criterion_group!(perft, criterion_perft, criterion_random_game);
criterion_main!(perft);
