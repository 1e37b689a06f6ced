use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reversi_core::board::Board;
use reversi_core::disc::Side;
use reversi_core::search::{Search, SearchOptions};

fn search_benchmark(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [3, 4, 5] {
        for alpha_beta in [false, true] {
            let name = if alpha_beta { "alpha_beta" } else { "negamax" };
            let search = Search::new(&SearchOptions { depth, alpha_beta });
            group.bench_with_input(BenchmarkId::new(name, depth), &board, |b, board| {
                b.iter(|| black_box(search.run(black_box(board), Side::Black)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
