use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vtf_decode::{ImageFormat, VtfTexture};
use vtf_decode_format::test_utils::VtfBuilder;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Number of samples taken per iteration, spread over the texture.
const SAMPLES: usize = 4096;

fn coordinates() -> Vec<(f32, f32)> {
    (0..SAMPLES)
        .map(|i| {
            let u = (i % 64) as f32 / 64.0 + 0.003;
            let v = (i / 64) as f32 / 64.0 - 0.5;
            (u, v)
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode VTF");

    for format in [ImageFormat::Dxt1, ImageFormat::Dxt5, ImageFormat::Bgra8888] {
        let file = VtfBuilder::new(format, 512, 512).mipmap_count(10).build();
        group.throughput(criterion::Throughput::Bytes(file.len() as u64));
        group.bench_function(BenchmarkId::new(format!("{format:?}"), "512x512"), |b| {
            b.iter(|| VtfTexture::new(black_box(&file)))
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sample VTF");
    let file = VtfBuilder::new(ImageFormat::Dxt5, 512, 512)
        .mipmap_count(10)
        .build();
    let texture = VtfTexture::new(&file);
    let coordinates = coordinates();
    group.throughput(criterion::Throughput::Elements(SAMPLES as u64));

    group.bench_function("pixel", |b| {
        b.iter(|| {
            for &(u, v) in &coordinates {
                let x = (u * 511.0) as u32;
                let y = ((v + 0.5) * 511.0) as u32;
                black_box(texture.pixel_2d(x, y, 0));
            }
        })
    });

    group.bench_function("bilinear", |b| {
        b.iter(|| {
            for &(u, v) in &coordinates {
                black_box(texture.sample_bilinear(u, v, 0, 0, 0, 0));
            }
        })
    });

    group.bench_function("trilinear", |b| {
        b.iter(|| {
            for &(u, v) in &coordinates {
                black_box(texture.sample(u, v, 0, 2.5, 0, 0));
            }
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_decode, bench_sample
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_decode, bench_sample
}

criterion_main!(benches);
