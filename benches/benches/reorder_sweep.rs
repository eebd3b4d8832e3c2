// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_reorder::commit::reorder;
use understory_reorder::headless::HeadlessList;
use understory_reorder::list::ReorderList;
use understory_reorder::types::Key;

const ROW: f64 = 24.0;

fn gen_rows(n: usize) -> HeadlessList<u32> {
    HeadlessList::uniform(0..n as u32, ROW)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_sweep");
    for &n in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        // One sample crosses every sibling.
        group.bench_function(format!("single_sample_n{}", n), |b| {
            b.iter_batched(
                || (gen_rows(n), ReorderList::<u32>::new()),
                |(mut host, mut engine)| {
                    engine.pointer_down(&mut host, 0, true, Point::new(1.0, ROW / 2.0));
                    let y = n as f64 * ROW;
                    engine.pointer_move(&mut host, Point::new(1.0, y), Vec2::new(0.0, y));
                    black_box(engine.pointer_up(&mut host));
                },
                BatchSize::SmallInput,
            )
        });
        // Many short samples, one crossing every few.
        group.bench_function(format!("stepwise_n{}", n), |b| {
            b.iter_batched(
                || (gen_rows(n), ReorderList::<u32>::new()),
                |(mut host, mut engine)| {
                    let mut y = ROW / 2.0;
                    engine.pointer_down(&mut host, 0, true, Point::new(1.0, y));
                    while y < n as f64 * ROW {
                        y += 5.0;
                        engine.pointer_move(&mut host, Point::new(1.0, y), Vec2::new(0.0, 5.0));
                    }
                    black_box(engine.pointer_up(&mut host));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_pointer_jitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_jitter");
    let n = 256;
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let path: Vec<f64> = (0..2_000)
        .map(|_| rng.next_f64() * n as f64 * ROW)
        .collect();
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("random_path_n256", |b| {
        b.iter_batched(
            || (gen_rows(n), ReorderList::<u32>::new()),
            |(mut host, mut engine)| {
                let mut last = ROW * 100.5;
                engine.pointer_down(&mut host, 100, true, Point::new(1.0, last));
                for &y in &path {
                    engine.pointer_move(&mut host, Point::new(1.0, y), Vec2::new(0.0, y - last));
                    last = y;
                }
                black_box(engine.pointer_up(&mut host));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard");
    for &n in &[16usize, 1024] {
        group.bench_function(format!("grab_walk_drop_n{}", n), |b| {
            b.iter_batched(
                || (gen_rows(n), ReorderList::<u32>::new()),
                |(mut host, mut engine)| {
                    engine.key_down(&mut host, 0, true, Key::Enter);
                    for _ in 0..n {
                        engine.key_down(&mut host, 0, true, Key::ArrowDown);
                    }
                    black_box(engine.key_down(&mut host, 0, true, Key::Enter));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");
    for &n in &[1024usize, 65_536] {
        let items: Vec<u32> = (0..n as u32).collect();
        group.bench_function(format!("reorder_first_to_last_n{}", n), |b| {
            b.iter_batched(
                || items.clone(),
                |mut v| {
                    black_box(reorder(&mut v, 0, n as isize));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pointer_sweep,
    bench_pointer_jitter,
    bench_keyboard,
    bench_commit,
);
criterion_main!(benches);
