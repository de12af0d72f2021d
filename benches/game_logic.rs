use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isoboard::core::{destination, GameState};
use isoboard::term::{GameView, Overlay, Viewport};
use isoboard::types::{BoardAction, CellPos, Player};

fn bench_turn(c: &mut Criterion) {
    let mut state = GameState::default();

    c.bench_function("roll_and_move", |b| {
        b.iter(|| {
            let _ = state.apply_action(BoardAction::RollRequested);
            match state.legal_moves().first() {
                Some(&(from, _)) => {
                    let _ = state.apply_action(BoardAction::TileClicked(black_box(from)));
                }
                None => state.restart(),
            }
        })
    });
}

fn bench_destination(c: &mut Criterion) {
    c.bench_function("destination_all_rolls", |b| {
        b.iter(|| {
            for dice in 1..=6 {
                black_box(destination(
                    black_box(CellPos::new(3, 6)),
                    Player::One,
                    dice,
                    8,
                ));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::default().snapshot();
    let view = GameView::default();
    let mut fb = isoboard::term::FrameBuffer::new(80, 24);

    c.bench_function("render_board_80x24", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&snap),
                &Overlay::default(),
                Viewport::new(80, 24),
                &mut fb,
            );
        })
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let view = GameView::default();

    c.bench_function("target_at_full_screen", |b| {
        b.iter(|| {
            for y in 0..24 {
                for x in 0..80 {
                    black_box(view.target_at(8, 8, x, y));
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_turn,
    bench_destination,
    bench_render,
    bench_hit_test
);
criterion_main!(benches);
