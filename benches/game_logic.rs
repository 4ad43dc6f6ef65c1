use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, get_shape, Board, GameState};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("frame_tick", |b| {
        b.iter(|| {
            if state.is_finished() {
                state = GameState::new(12345);
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I, &[]);
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::S, &[3]);
    let mask = get_shape(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(collides(mask, black_box(4), black_box(17), &board)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn_piece());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.apply_action(GameAction::MoveRight);
            state.apply_action(GameAction::MoveLeft);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(state.try_rotate());
        })
    });
}

fn bench_render_view(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let view = GameView::default();

    c.bench_function("render_view_80x24", |b| {
        b.iter(|| black_box(view.render(&state, Viewport::new(80, 24))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_render_view
);
criterion_main!(benches);
