use criterion::{criterion_group, criterion_main, Criterion};
use dragboard::config::{DragMode, Settings};
use dragboard::engine::Engine;
use dragboard::geometry::Point;
use dragboard::grid::Bounds;
use std::hint::black_box;
use std::time::{Duration, Instant};

const BOUNDS: Bounds = Bounds {
    width: 500.0,
    height: 900.0,
};

/// A zig-zag trace across the board, one turn every `period` samples.
fn zigzag_trace(samples: usize, period: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(samples);
    let mut x = 10.0;
    let mut y = 10.0;
    for i in 0..samples {
        if (i / period) % 2 == 0 {
            x += 12.0;
        } else {
            y += 12.0;
        }
        points.push(Point::new(x % 490.0, y % 890.0));
    }
    points
}

fn run_trace(mode: DragMode, points: &[Point]) -> usize {
    let settings = Settings {
        mode,
        dwell_duration: 0.1,
        ..Default::default()
    };
    let mut engine = Engine::with_defaults(settings);
    let base = Instant::now();

    engine.on_gesture_start();
    for (i, point) in points.iter().enumerate() {
        engine.sample_at(*point, BOUNDS, base + Duration::from_millis(i as u64 * 150));
    }
    engine.on_gesture_end();
    engine.sentence().len()
}

fn criterion_benchmark(c: &mut Criterion) {
    let trace = zigzag_trace(2_000, 8);

    c.bench_function("direction_change (2k samples)", |b| {
        b.iter(|| run_trace(black_box(DragMode::DirectionChange), black_box(&trace)))
    });

    c.bench_function("dwell (2k samples)", |b| {
        b.iter(|| run_trace(black_box(DragMode::Dwell), black_box(&trace)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
