use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::GameState;
use tui_2048::engine::{apply_move, is_terminal, Grid};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows(vec![
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 16],
        vec![8, 0, 8, 2],
        vec![2, 4, 2, 0],
    ])
    .unwrap()
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = busy_grid();

    c.bench_function("apply_move_left", |b| {
        b.iter(|| apply_move(black_box(&grid), black_box(Direction::Left)))
    });
    c.bench_function("apply_move_up", |b| {
        b.iter(|| apply_move(black_box(&grid), black_box(Direction::Up)))
    });
}

fn bench_is_terminal(c: &mut Criterion) {
    // Worst case: every direction must be tried.
    let stuck = Grid::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
    .unwrap();

    c.bench_function("is_terminal_stuck", |b| b.iter(|| is_terminal(black_box(&stuck))));
}

fn bench_game_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut step = 0usize;

    c.bench_function("game_step", |b| {
        b.iter(|| {
            if state.is_terminal() {
                state.restart();
            }
            state.slide(Direction::ALL[step % 4]);
            step += 1;
        })
    });
}

criterion_group!(benches, bench_apply_move, bench_is_terminal, bench_game_step);
criterion_main!(benches);
