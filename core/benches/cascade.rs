//! Criterion micro-benchmarks for board creation, move validation and cascades.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gemfall_core::{Board, Position, RandomTileSource, can_move, create, make_move};

const PALETTE: [char; 5] = ['r', 'g', 'b', 'y', 'p'];

fn seeded(seed: u64) -> RandomTileSource<char> {
    RandomTileSource::new(seed, PALETTE.to_vec()).unwrap()
}

/// All co-linear pairs of a board, the candidates a UI would probe.
fn colinear_pairs(board: &Board<char>) -> Vec<(Position, Position)> {
    board
        .positions()
        .flat_map(|p| board.positions().map(move |q| (p, q)))
        .filter(|&(p, q)| p < q && p.is_colinear_with(q))
        .collect()
}

/// Benchmark: fill a standard 8x8 board.
fn bench_create_8x8(c: &mut Criterion) {
    c.bench_function("create_8x8", |b| {
        b.iter(|| {
            let mut source = seeded(1);
            black_box(create(&mut source, 8, 8).unwrap());
        });
    });
}

/// Benchmark: probe every co-linear pair of an 8x8 board with can_move.
fn bench_can_move_scan_8x8(c: &mut Criterion) {
    let board = create(&mut seeded(2), 8, 8).unwrap();
    let pairs = colinear_pairs(&board);

    c.bench_function("can_move_scan_8x8", |b| {
        b.iter(|| {
            let legal = pairs
                .iter()
                .filter(|&&(p, q)| can_move(&board, p, q))
                .count();
            black_box(legal);
        });
    });
}

/// Benchmark: resolve every legal move of an 8x8 board, cascades included.
fn bench_make_move_8x8(c: &mut Criterion) {
    let board = create(&mut seeded(3), 8, 8).unwrap();
    let legal: Vec<_> = colinear_pairs(&board)
        .into_iter()
        .filter(|&(p, q)| can_move(&board, p, q))
        .collect();

    c.bench_function("make_move_8x8", |b| {
        b.iter(|| {
            let mut source = seeded(4);
            for &(p, q) in &legal {
                black_box(make_move(&mut source, &board, p, q));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_create_8x8,
    bench_can_move_scan_8x8,
    bench_make_move_8x8
);
criterion_main!(benches);
