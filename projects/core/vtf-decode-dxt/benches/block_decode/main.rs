use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use vtf_decode_dxt::{decompress_dxt1, decompress_dxt3, decompress_dxt5, DecompressError};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

type DecompressFn = fn(&[u8], &mut [u8], usize, usize) -> Result<(), DecompressError>;

/// Fills a buffer with blocks whose endpoints and indices vary from block to block.
fn generate_blocks(num_bytes: usize) -> Vec<u8> {
    (0..num_bytes)
        .map(|i| ((i / 8).wrapping_mul(31) ^ i.wrapping_mul(7)) as u8)
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT Decompress Plane (DXT -> RGBA8888)");

    // 1024x1024 texels per plane.
    let width = 1024;
    let height = 1024;
    let mut output = vec![0u8; width * height * 4];

    let formats: [(&str, usize, DecompressFn); 3] = [
        ("dxt1", 8, decompress_dxt1),
        ("dxt3", 16, decompress_dxt3),
        ("dxt5", 16, decompress_dxt5),
    ];

    for (name, block_size, decompress) in formats {
        let input = generate_blocks((width / 4) * (height / 4) * block_size);
        group.throughput(criterion::Throughput::Bytes(input.len() as u64));
        group.bench_function(BenchmarkId::new(name, "1024x1024"), |b| {
            b.iter(|| decompress(&input, &mut output, width, height))
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
