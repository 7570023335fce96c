use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{FoodSpawner, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{GameConfig, Heading, Position};

/// A snake snaking through the top `rows` rows of a 20x20 grid, head first.
fn long_body(rows: i32) -> Vec<Position> {
    let mut body = Vec::new();
    for y in 0..rows {
        for i in 0..20 {
            let x = if y % 2 == 0 { i } else { 19 - i };
            body.push(Position::new(x, y));
        }
    }
    body.reverse();
    body
}

fn bench_step(c: &mut Criterion) {
    let body = long_body(10);
    let state = GameState::with_layout(
        GameConfig::default(),
        &body,
        Position::new(0, 19),
        Heading::Down,
    );

    c.bench_function("step_len_200", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| black_box(s.step()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_food_crowded(c: &mut Criterion) {
    let body = long_body(19);
    let mut spawner = FoodSpawner::new(12345, 1600);

    c.bench_function("place_food_380_of_400", |b| {
        b.iter(|| {
            let _ = black_box(spawner.place(20, |p| body.contains(&p)));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::with_layout(
        GameConfig::default(),
        &long_body(10),
        Position::new(0, 19),
        Heading::Down,
    );
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), vp, &mut fb);
        })
    });
}

criterion_group!(benches, bench_step, bench_food_crowded, bench_render);
criterion_main!(benches);
