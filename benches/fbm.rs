//! Batched Noise Benchmarks
//!
//! Measures the lane kernels and the layers built on top of them:
//!
//! ## 1. **Kernels**
//! - Single-octave simplex and 5-octave FBM on 4- and 8-wide lanes
//!
//! ## 2. **Slice sampling**
//! - `sample_points` vs `par_sample_points` across cache-sized inputs
//!
//! ## 3. **Maps**
//! - Sphere maps at a few output resolutions

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanenoise::map::SphereMap;
use lanenoise::noise::{simplex3d, FractalSettings};
use lanenoise::simd::select::Lane;
use lanenoise::simd::{FloatLane, SimdLane};
use lanenoise::slice::{par_sample_points, sample_points};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Point counts for the slice benchmarks (f32 = 4 bytes per coordinate).
const POINT_COUNTS: &[usize] = &[
    1_024,     // 12 KiB of coordinates - L1 cache
    16_384,    // 192 KiB - parallel threshold
    262_144,   // 3 MiB - L2/L3
    1_048_576, // 12 MiB - L3
];

/// Map resolutions as `(width, height)`.
const MAP_SIZES: &[(usize, usize)] = &[(256, 128), (1_024, 512), (2_048, 1_024)];

/// Points evaluated per kernel benchmark iteration.
const KERNEL_POINTS: usize = 4_096;

// ================================================================================================
// TEST DATA GENERATION
// ================================================================================================

/// Random coordinates in `[-range, range)` for each of the three axes.
fn generate_points(len: usize, range: f32) -> [Vec<f32>; 3] {
    let mut rng = StdRng::seed_from_u64(42); // Fixed seed for reproducibility
    let mut axis = || -> Vec<f32> { (0..len).map(|_| rng.random_range(-range..range)).collect() };
    [axis(), axis(), axis()]
}

/// Widest lane type the target provides.
#[cfg(lane8)]
type Wide = Lane<f32, 8>;
#[cfg(all(lane4, not(lane8)))]
type Wide = Lane<f32, 4>;

fn settings() -> FractalSettings {
    FractalSettings::default()
        .with_octaves(5)
        .with_frequency(0.05)
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

/// Runs `kernel` over `KERNEL_POINTS` packed points and returns a checksum.
#[inline(always)]
fn run_kernel<F: FloatLane>(points: &[Vec<f32>; 3], kernel: impl Fn(F, F, F) -> F) -> f32 {
    let [xs, ys, zs] = points;
    let mut acc = F::zero();
    for start in (0..xs.len()).step_by(F::LANES) {
        let end = start + F::LANES;
        acc += kernel(
            F::from_slice(&xs[start..end]),
            F::from_slice(&ys[start..end]),
            F::from_slice(&zs[start..end]),
        );
    }
    acc.to_vec().iter().sum()
}

#[cfg(any(lane4, lane8))]
fn benchmark_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kernels");
    group.throughput(Throughput::Elements(KERNEL_POINTS as u64));

    let points = generate_points(KERNEL_POINTS, 100.0);
    let fractal = settings();

    #[cfg(lane4)]
    {
        let seed = Lane::<i32, 4>::splat(1337);
        group.bench_function(BenchmarkId::new("simplex", "4 lanes"), |b| {
            b.iter(|| {
                black_box(run_kernel::<Lane<f32, 4>>(black_box(&points), |x, y, z| {
                    simplex3d(seed, x, y, z)
                }))
            })
        });

        group.bench_function(BenchmarkId::new("fbm", "4 lanes"), |b| {
            b.iter(|| {
                black_box(run_kernel::<Lane<f32, 4>>(black_box(&points), |x, y, z| {
                    fractal.fbm(x, y, z)
                }))
            })
        });
    }

    #[cfg(lane8)]
    {
        let seed = Lane::<i32, 8>::splat(1337);
        group.bench_function(BenchmarkId::new("simplex", "8 lanes"), |b| {
            b.iter(|| {
                black_box(run_kernel::<Lane<f32, 8>>(black_box(&points), |x, y, z| {
                    simplex3d(seed, x, y, z)
                }))
            })
        });

        group.bench_function(BenchmarkId::new("fbm", "8 lanes"), |b| {
            b.iter(|| {
                black_box(run_kernel::<Lane<f32, 8>>(black_box(&points), |x, y, z| {
                    fractal.fbm(x, y, z)
                }))
            })
        });
    }

    group.finish();
}

#[cfg(any(lane4, lane8))]
fn benchmark_slice_sampling(c: &mut Criterion) {
    let fractal = settings();

    for &count in POINT_COUNTS {
        let mut group = c.benchmark_group(format!("Sampling_{count}"));
        group.throughput(Throughput::Elements(count as u64));

        let [xs, ys, zs] = generate_points(count, 1_000.0);
        let mut out = vec![0.0f32; count];

        group.bench_with_input(BenchmarkId::new("serial", count), &count, |b, _| {
            b.iter(|| {
                sample_points::<Wide, _>(&fractal, &xs, &ys, &zs, black_box(&mut out))
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, _| {
            b.iter(|| {
                par_sample_points::<Wide, _>(&fractal, &xs, &ys, &zs, black_box(&mut out))
            })
        });

        group.finish();
    }
}

#[cfg(any(lane4, lane8))]
fn benchmark_maps(c: &mut Criterion) {
    let fractal = settings().with_frequency(2.0);
    let map = SphereMap::default();

    let mut group = c.benchmark_group("SphereMap");
    group.sample_size(20);

    for &(width, height) in MAP_SIZES {
        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::new("build", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                b.iter(|| black_box(map.build::<Wide, _>(width, height, &fractal)))
            },
        );
    }

    group.finish();
}

// ================================================================================================
// CRITERION INTEGRATION
// ================================================================================================

fn all_benchmarks(c: &mut Criterion) {
    println!("🚀 Starting noise benchmarks");
    let start_time = Instant::now();

    #[cfg(any(lane4, lane8))]
    {
        benchmark_kernels(c);
        benchmark_slice_sampling(c);
        benchmark_maps(c);
    }
    #[cfg(fallback)]
    {
        let _ = c;
        println!("no SIMD lanes on this target, nothing to measure");
    }

    println!(
        "✅ Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
