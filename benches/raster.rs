use criterion::{black_box, criterion_group, criterion_main, Criterion};
use asciirast::core::{draw_line, Canvas, Point, Segment};
use asciirast::engine::{Engine, SpiralScene, StarScene};
use asciirast::term::{PresentMode, Presenter};
use asciirast::types::color::{BLACK, RED, WHITE};

fn canvas() -> Canvas {
    Canvas::new(160, 48, WHITE, BLACK, b' ').unwrap()
}

fn bench_clear(c: &mut Criterion) {
    let mut canvas = canvas();

    c.bench_function("canvas_clear_160x48", |b| {
        b.iter(|| {
            canvas.clear();
            black_box(&canvas);
        })
    });
}

fn bench_draw_line(c: &mut Criterion) {
    let mut canvas = canvas();
    let inside = Segment::new(Point::new(3.2, 1.7), Point::new(150.4, 44.1), 0.5, RED, BLACK, b'#');
    let clipped = Segment::new(
        Point::new(-500.0, -120.0),
        Point::new(700.0, 200.0),
        0.5,
        RED,
        BLACK,
        b'#',
    );

    c.bench_function("draw_line_inside", |b| {
        b.iter(|| draw_line(&mut canvas, black_box(&inside)))
    });

    c.bench_function("draw_line_clipped", |b| {
        b.iter(|| draw_line(&mut canvas, black_box(&clipped)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut canvas = canvas();
    for y in 0..48 {
        canvas.plot(y * 3, y, 1.0, RED, BLACK, b'*');
    }
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("encode_160x48_with_bg", |b| {
        let presenter = Presenter::new(PresentMode::WithBackground);
        b.iter(|| {
            out.clear();
            presenter.encode_into(&canvas, &mut out).unwrap();
            black_box(out.len())
        })
    });

    c.bench_function("encode_160x48_coalesced", |b| {
        let presenter = Presenter::new(PresentMode::WithBackground).with_style_coalescing(true);
        b.iter(|| {
            out.clear();
            presenter.encode_into(&canvas, &mut out).unwrap();
            black_box(out.len())
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut engine = Engine::new(
        Canvas::new(60, 30, WHITE, BLACK, b' ').unwrap(),
        Box::new(StarScene::new()),
    )
    .with_scene(Box::new(SpiralScene::new()));

    c.bench_function("engine_frame_star", |b| {
        b.iter(|| {
            engine.tick(black_box(16), 1);
            black_box(engine.render().width());
        })
    });
}

criterion_group!(benches, bench_clear, bench_draw_line, bench_encode, bench_frame);
criterion_main!(benches);
