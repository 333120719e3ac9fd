use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use noughts::{Board, Player, evaluate, search::Solver};

fn bench_evaluate(c: &mut Criterion) {
    let board = Board::from_string("XOXXOOOXX").unwrap();
    c.bench_function("evaluate_full_board", |b| b.iter(|| evaluate(black_box(&board))));
}

fn bench_best_move_empty_board(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("best_move_empty_exhaustive", |b| {
        b.iter(|| Solver::new().best_move(black_box(&board), Player::X))
    });
    c.bench_function("best_move_empty_fresh_cache", |b| {
        b.iter(|| Solver::with_cache().best_move(black_box(&board), Player::X))
    });
}

fn bench_best_move_after_center(c: &mut Criterion) {
    let board = Board::from_string("....X....").unwrap();
    c.bench_function("best_move_reply_to_center", |b| {
        b.iter(|| Solver::new().best_move(black_box(&board), Player::O))
    });

    let mut warm = Solver::with_cache();
    c.bench_function("best_move_reply_to_center_warm_cache", |b| {
        b.iter(|| warm.best_move(black_box(&board), Player::O))
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_best_move_empty_board,
    bench_best_move_after_center
);
criterion_main!(benches);
