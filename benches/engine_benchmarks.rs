//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use minimax_chess::board::{Board, Color, SearchConfig};

const MIDDLEGAME: &str = "1. e2e4 e7e5 2. Ng1f3 Nb8c6 3. Bf1c4 Ng8f6 4. d2d3 Bf8c5 5. O-O d7d6";

fn middlegame() -> Board {
    let mut board = Board::new();
    board
        .load_game(MIDDLEGAME)
        .expect("benchmark move list is legal");
    board
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    // memo disabled so every iteration generates
    let mut startpos = Board::new().with_memo_capacity(0, 0);
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves(Color::White)))
    });

    let mut position = middlegame().with_memo_capacity(0, 0);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(position.legal_moves(Color::White)))
    });

    let mut memoized = middlegame();
    group.bench_function("middlegame_memoized", |b| {
        b.iter(|| black_box(memoized.legal_moves(Color::White)))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let position = middlegame();
    group.bench_function("terms", |b| {
        b.iter(|| black_box(position.evaluate_terms(Color::White).total()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let config = SearchConfig {
                depth: Some(depth),
                ..SearchConfig::default()
            };
            b.iter(|| {
                let mut board = middlegame();
                black_box(board.choose_move_with(&config))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
