//! Render benchmark: layout passes and animated frames.
//!
//! Target: a full indicator frame well under a millisecond

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use typing_dots::{Buffer, DeferredQueue, OutputBuffer, Rect, TypingIndicator, Widget};

fn layout_pass(c: &mut Criterion) {
    let queue = DeferredQueue::new();
    let mut indicator = TypingIndicator::new(Rect::from_size(60.0, 20.0), &queue);
    let mut width = 60.0_f32;

    c.bench_function("indicator_layout", |b| {
        b.iter(|| {
            width = if width > 90.0 { 30.0 } else { width + 1.0 };
            indicator.set_bounds(black_box(Rect::from_size(width, 20.0)));
        });
    });
}

fn animated_frame(c: &mut Criterion) {
    let queue = DeferredQueue::new();
    let mut indicator = TypingIndicator::new(Rect::from_size(60.0, 20.0), &queue);
    indicator.set_bounce_enabled(true);
    indicator.start();
    queue.advance_by(Duration::from_secs(1));

    let mut buffer = Buffer::new(60, 20);
    let mut now = Duration::from_secs(1);

    c.bench_function("indicator_render_frame", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            buffer.clear();
            indicator.render(&mut buffer, black_box(now));
        });
    });
}

fn frame_to_ansi(c: &mut Criterion) {
    let queue = DeferredQueue::new();
    let indicator = TypingIndicator::new(Rect::from_size(60.0, 20.0), &queue);
    let mut buffer = Buffer::new(60, 20);
    indicator.render(&mut buffer, Duration::ZERO);
    let mut output = OutputBuffer::new();

    c.bench_function("frame_to_ansi", |b| {
        b.iter(|| {
            output.clear();
            output.write_frame(black_box(&buffer), (0, 0));
        });
    });
}

criterion_group!(benches, layout_pass, animated_frame, frame_to_ansi);
criterion_main!(benches);
