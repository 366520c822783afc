use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vizij_curve_core::{bake_curve, build, BakingConfig, CurveConfig, KeyframeRecord, LaneId};

fn mk_records(keys: usize) -> Vec<KeyframeRecord> {
    (0..keys)
        .map(|i| {
            let t = i as f32 * 0.1;
            KeyframeRecord::new(t, t.sin(), t.cos(), t.cos())
        })
        .collect()
}

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluate");
    for &keys in &[8usize, 64, 512] {
        let curve = build(&mk_records(keys), &CurveConfig::default()).expect("build");
        let (_, end) = curve.domain().expect("domain");
        let frames: Vec<f32> = (0..1000).map(|i| end * i as f32 / 1000.0).collect();

        group.bench_with_input(BenchmarkId::new("monotonic", keys), &frames, |b, frames| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &t in frames {
                    acc += curve.evaluate(LaneId(0), black_box(t));
                }
                acc
            })
        });

        let scattered: Vec<f32> = (0..1000)
            .map(|i| end * ((i * 7919) % 1000) as f32 / 1000.0)
            .collect();
        group.bench_with_input(
            BenchmarkId::new("scattered", keys),
            &scattered,
            |b, frames| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for &t in frames {
                        acc += curve.evaluate(LaneId(1), black_box(t));
                    }
                    acc
                })
            },
        );
    }
    group.finish();
}

fn bench_bake(c: &mut Criterion) {
    let curve = build(&mk_records(256), &CurveConfig::default()).expect("build");
    let cfg = BakingConfig::default();
    c.bench_function("bake_256_keys_60hz", |b| {
        b.iter(|| bake_curve(black_box(&curve), LaneId(0), &cfg))
    });
}

criterion_group!(benches, bench_playback, bench_bake);
criterion_main!(benches);
