use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pageturner::{flip_variants, Direction, NavState, Page, Story, Turn};

/// Create a story with N pages
fn create_story_with_pages(num_pages: usize) -> Story {
    let pages = (0..num_pages)
        .map(|i| Page {
            id: i,
            title: format!("Chapter {}", i),
            image: format!("images/ch{}.png", i),
            text: "A paragraph of narrative.\n\nAnd another one.".to_string(),
        })
        .collect();
    Story::new("Bench Story", pages).expect("non-empty page list")
}

/// Benchmark a full forward walk with clamping at the end
fn bench_forward_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_walk");

    for page_count in [10, 1_000, 100_000].iter() {
        let story = create_story_with_pages(*page_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(page_count),
            page_count,
            |b, &count| {
                b.iter(|| {
                    let mut nav = NavState::new(story.len());
                    for _ in 0..count + 10 {
                        nav.navigate(black_box(1));
                    }
                    nav.current()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark the direction-to-variants mapping
fn bench_flip_variants(c: &mut Criterion) {
    c.bench_function("flip_variants", |b| {
        b.iter(|| {
            (
                flip_variants(black_box(Direction::Forward)),
                flip_variants(black_box(Direction::Backward)),
                flip_variants(black_box(Direction::None)),
            )
        });
    });
}

/// Benchmark per-frame parameter interpolation across a whole turn
fn bench_turn_frames(c: &mut Criterion) {
    let turn = Turn::start(0, 1, Direction::Forward);

    c.bench_function("turn_params_at", |b| {
        b.iter(|| {
            for step in 0..60 {
                let t = step as f32 / 59.0;
                black_box(turn.params_at(black_box(t)));
            }
        });
    });
}

criterion_group!(benches, bench_forward_walk, bench_flip_variants, bench_turn_frames);

criterion_main!(benches);
