use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tickframe_animation::{AnimationType, AnimatorConfig, AnimatorSet, ArcSettings};
use tickframe_core::StdRandom;

fn populated_set(count: u32) -> AnimatorSet {
    let mut set = AnimatorSet::with_random(StdRandom::seeded(7));
    for i in 0..count {
        let animation_type = match i % 4 {
            0 => AnimationType::Loop,
            1 => AnimationType::Yoyo,
            2 => AnimationType::Random,
            _ => AnimationType::Arcing(ArcSettings {
                min_static_wait_ticks: 20,
                max_static_wait_ticks: 60,
                should_cycle: true,
                cycle_frames_every_n_ticks: 3,
            }),
        };
        let config = AnimatorConfig::new(0, 8)
            .with_update_every(1 + i % 5)
            .with_extended_frame(3, 2)
            .with_animation_type(animation_type);
        set.insert(config).expect("valid bench config");
    }
    set
}

fn bench_advance_all(c: &mut Criterion) {
    let mut set = populated_set(10_000);
    c.bench_function("advance_all 10k animators", |b| {
        b.iter(|| black_box(set.advance_all(black_box(1))));
    });
}

criterion_group!(benches, bench_advance_all);
criterion_main!(benches);
