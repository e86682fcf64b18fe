// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification queue.
//!
//! Measures the performance of:
//! - Showing a burst of notifications
//! - Dismissing from the middle of a full queue
//! - Expiring a full queue on a single tick

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_atelier::timer::ManualClock;
use iced_atelier::ui::notifications::{Kind, NotificationQueue};
use std::hint::black_box;
use std::time::Duration;

const BURST: usize = 100;

fn filled_queue(clock: &ManualClock) -> NotificationQueue<ManualClock> {
    let mut queue = NotificationQueue::with_clock(clock.clone());
    for n in 0..BURST {
        queue.show_with_duration(Kind::Info, "bench", Duration::from_millis(n as u64 + 1));
    }
    queue
}

fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("show_burst", |b| {
        b.iter_batched(
            || NotificationQueue::with_clock(ManualClock::new()),
            |mut queue| {
                for _ in 0..BURST {
                    black_box(queue.show(Kind::Success, "Saved"));
                }
                queue
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");
    let clock = ManualClock::new();

    group.bench_function("dismiss_middle", |b| {
        b.iter_batched(
            || {
                let queue = filled_queue(&clock);
                let id = queue.iter().nth(BURST / 2).map(|n| n.id());
                (queue, id)
            },
            |(mut queue, id)| {
                if let Some(id) = id {
                    black_box(queue.dismiss(id));
                }
                queue
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("expire_all", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let queue = filled_queue(&clock);
                clock.advance(Duration::from_secs(1));
                queue
            },
            |mut queue| black_box(queue.tick()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_dismiss, bench_tick);
criterion_main!(benches);
