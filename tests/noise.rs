//! End-to-end properties of the simplex kernel and the fractal compositors.

#![cfg(any(lane4, lane8))]

use lanenoise::noise::{fbm, ridged_multi, simplex3d, FractalSettings};
use lanenoise::simd::{FloatLane, SimdLane};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Magnitude bound for a single simplex octave.
const SIMPLEX_BOUND: f32 = 1.0;

fn random_points(count: usize, range: f32, seed: u64) -> [Vec<f32>; 3] {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut axis = || -> Vec<f32> { (0..count).map(|_| rng.random_range(-range..range)).collect() };
    [axis(), axis(), axis()]
}

/// Evaluates `f` over the points `F::LANES` at a time and collects the results.
fn evaluate<F: FloatLane>(points: &[Vec<f32>; 3], f: impl Fn(F, F, F) -> F) -> Vec<f32> {
    let [xs, ys, zs] = points;
    let mut out = vec![0.0f32; xs.len()];
    for (block, out) in out.chunks_mut(F::LANES).enumerate() {
        let start = block * F::LANES;
        let end = start + out.len();
        f(
            F::from_slice(&xs[start..end]),
            F::from_slice(&ys[start..end]),
            F::from_slice(&zs[start..end]),
        )
        .write_to_slice(out);
    }
    out
}

fn simplex_field<F: FloatLane>(points: &[Vec<f32>; 3], seed: i32) -> Vec<f32> {
    let seed = F::Int::splat(seed);
    evaluate::<F>(points, |x, y, z| simplex3d(seed, x, y, z))
}

fn check_simplex_magnitude<F: FloatLane>() {
    let points = random_points(4_096, 100.0, 1);

    for v in simplex_field::<F>(&points, 1337) {
        assert!(v.is_finite());
        assert!(v.abs() <= SIMPLEX_BOUND, "simplex value {v} out of range");
    }
}

fn check_reference_row<F: FloatLane>() {
    let seed = F::Int::splat(12345);
    let x = F::from_slice(&[0.0, 1.0, 2.0, 3.0]);
    let zero = F::zero();

    let first = simplex3d(seed, x, zero, zero).to_vec();
    for v in &first[..4] {
        assert!((-1.0..=1.0).contains(v), "simplex value {v} outside [-1, 1]");
    }

    // x = 0 and x = 3 are lattice points of the skewed grid.
    assert_eq!(first[0], 0.0);
    assert_eq!(first[3], 0.0);
    assert!((first[1] - 0.760_099_65).abs() < 1e-5, "{first:?}");
    assert!((first[2] - 0.760_099_4).abs() < 1e-5, "{first:?}");

    for _ in 0..16 {
        let again = simplex3d(seed, x, zero, zero);
        assert_eq!(again.extract(0).to_bits(), first[0].to_bits());
        assert_eq!(&again.to_vec()[..4], &first[..4]);
    }
}

fn check_simplex_is_deterministic<F: FloatLane>() {
    let points = random_points(512, 10.0, 2);
    let a = simplex_field::<F>(&points, -77);
    let b = simplex_field::<F>(&points, -77);
    assert_eq!(
        a.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
        b.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
    );
}

fn check_diagonal_ties_are_finite<F: FloatLane>() {
    let seed = F::Int::splat(1337);
    for i in -20..20 {
        let p = F::splat(i as f32 * 0.25);
        let v = simplex3d(seed, p, p, p);
        assert!(v.to_vec().iter().all(|x| x.is_finite() && x.abs() <= SIMPLEX_BOUND));
    }
}

fn check_zero_octaves<F: FloatLane>() {
    let p = F::splat(3.7);
    assert!(fbm(1, p, p, p, 1.0, 0, 2.0, 0.5).to_vec().iter().all(|&v| v == 0.0));
    assert!(ridged_multi(1, p, p, p, 1.0, 0, 2.0, 0.5).to_vec().iter().all(|&v| v == 0.0));
}

fn check_single_octave_is_scaled_simplex<F: FloatLane>() {
    let points = random_points(1_024, 50.0, 3);
    let frequency = 0.37;

    let octave = evaluate::<F>(&points, |x, y, z| fbm(9, x, y, z, frequency, 1, 2.0, 0.5));
    let direct = evaluate::<F>(&points, |x, y, z| {
        let f = F::splat(frequency);
        simplex3d(F::Int::splat(9), x * f, y * f, z * f)
    });

    assert_eq!(octave, direct);
}

fn check_zero_gain_keeps_first_octave<F: FloatLane>() {
    let points = random_points(1_024, 20.0, 4);
    let many = evaluate::<F>(&points, |x, y, z| fbm(5, x, y, z, 1.0, 6, 2.0, 0.0));
    let one = evaluate::<F>(&points, |x, y, z| fbm(5, x, y, z, 1.0, 1, 2.0, 0.0));
    assert_eq!(many, one);
}

fn check_fbm_bounded_by_amplitudes<F: FloatLane>() {
    let settings = FractalSettings::default().with_octaves(6).with_frequency(0.1);
    let bound = SIMPLEX_BOUND * settings.amplitude_sum();
    let points = random_points(2_048, 200.0, 5);

    for v in evaluate::<F>(&points, |x, y, z| settings.fbm(x, y, z)) {
        assert!(v.abs() <= bound, "fbm value {v} exceeds {bound}");
    }
}

fn check_seed_changes_field<F: FloatLane>() {
    let points = random_points(256, 10.0, 6);
    let a = evaluate::<F>(&points, |x, y, z| fbm(1, x, y, z, 1.0, 3, 2.0, 0.5));
    let b = evaluate::<F>(&points, |x, y, z| fbm(2, x, y, z, 1.0, 3, 2.0, 0.5));
    let differing = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    assert!(differing > 200, "only {differing} of 256 samples changed with the seed");
}

macro_rules! width_tests {
    ($module:ident, $lane:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn test_simplex_magnitude() {
                check_simplex_magnitude::<$lane>();
            }

            #[test]
            fn test_reference_row() {
                check_reference_row::<$lane>();
            }

            #[test]
            fn test_simplex_is_deterministic() {
                check_simplex_is_deterministic::<$lane>();
            }

            #[test]
            fn test_diagonal_ties_are_finite() {
                check_diagonal_ties_are_finite::<$lane>();
            }

            #[test]
            fn test_zero_octaves() {
                check_zero_octaves::<$lane>();
            }

            #[test]
            fn test_single_octave_is_scaled_simplex() {
                check_single_octave_is_scaled_simplex::<$lane>();
            }

            #[test]
            fn test_zero_gain_keeps_first_octave() {
                check_zero_gain_keeps_first_octave::<$lane>();
            }

            #[test]
            fn test_fbm_bounded_by_amplitudes() {
                check_fbm_bounded_by_amplitudes::<$lane>();
            }

            #[test]
            fn test_seed_changes_field() {
                check_seed_changes_field::<$lane>();
            }
        }
    };
}

#[cfg(lane4)]
width_tests!(four_wide, lanenoise::simd::select::Lane<f32, 4>);

#[cfg(lane8)]
width_tests!(eight_wide, lanenoise::simd::select::Lane<f32, 8>);

#[cfg(all(lane4, lane8))]
mod cross_width {
    use super::*;
    use lanenoise::simd::select::Lane;

    type F4 = Lane<f32, 4>;
    type F8 = Lane<f32, 8>;
    type I4 = Lane<i32, 4>;
    type I8 = Lane<i32, 8>;

    const JUNK_X: [f32; 4] = [f32::NAN, f32::INFINITY, 1e30, -1e30];
    const JUNK_Y: [f32; 4] = [f32::NEG_INFINITY, f32::NAN, -1e30, f32::INFINITY];
    const JUNK_Z: [f32; 4] = [1e30, f32::NEG_INFINITY, f32::NAN, f32::NAN];

    fn bits(values: Vec<f32>) -> Vec<u32> {
        values.into_iter().map(f32::to_bits).collect()
    }

    /// Four real values followed by four junk values.
    fn padded(real: &[f32], junk: [f32; 4]) -> F8 {
        let mut values = [0.0f32; 8];
        values[..4].copy_from_slice(real);
        values[4..].copy_from_slice(&junk);
        F8::from_slice(&values)
    }

    /// Evaluates `narrow` on 4-wide lanes and `wide` on 8-wide lanes whose upper half
    /// is junk, returning the bits of the real lanes of both.
    fn against_junk(
        points: &[Vec<f32>; 3],
        narrow: impl Fn(F4, F4, F4) -> F4,
        wide: impl Fn(F8, F8, F8) -> F8,
    ) -> (Vec<u32>, Vec<u32>) {
        let [xs, ys, zs] = points;
        let mut expected = Vec::with_capacity(xs.len());
        let mut actual = Vec::with_capacity(xs.len());

        for start in (0..xs.len()).step_by(4) {
            let range = start..start + 4;
            let n = narrow(
                F4::from_slice(&xs[range.clone()]),
                F4::from_slice(&ys[range.clone()]),
                F4::from_slice(&zs[range.clone()]),
            );
            let w = wide(
                padded(&xs[range.clone()], JUNK_X),
                padded(&ys[range.clone()], JUNK_Y),
                padded(&zs[range], JUNK_Z),
            );
            expected.extend(bits(n.to_vec()));
            actual.extend(bits(w.to_vec()[..4].to_vec()));
        }

        (expected, actual)
    }

    #[test]
    fn test_junk_upper_lanes_do_not_leak_into_simplex() {
        let points = random_points(1_024, 64.0, 10);
        let narrow_seed = I4::splat(777);
        let wide_seed =
            I8::from_slice(&[777, 777, 777, 777, i32::MIN, i32::MIN, i32::MIN, i32::MIN]);

        let (expected, actual) = against_junk(
            &points,
            |x, y, z| simplex3d(narrow_seed, x, y, z),
            |x, y, z| simplex3d(wide_seed, x, y, z),
        );
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_junk_upper_lanes_do_not_leak_into_fbm() {
        let settings = FractalSettings::default().with_seed(90).with_octaves(4);
        let points = random_points(512, 32.0, 11);

        let (expected, actual) = against_junk(
            &points,
            |x, y, z| settings.fbm(x, y, z),
            |x, y, z| settings.fbm(x, y, z),
        );
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_simplex_is_identical_across_widths() {
        let points = random_points(4_099, 64.0, 7);
        let narrow = simplex_field::<F4>(&points, 1337);
        let wide = simplex_field::<F8>(&points, 1337);
        assert_eq!(bits(narrow), bits(wide));
    }

    #[test]
    fn test_fbm_is_identical_across_widths() {
        let settings = FractalSettings::default().with_seed(31).with_octaves(5);
        let points = random_points(1_003, 16.0, 8);
        let narrow = evaluate::<F4>(&points, |x, y, z| settings.fbm(x, y, z));
        let wide = evaluate::<F8>(&points, |x, y, z| settings.fbm(x, y, z));
        assert_eq!(bits(narrow), bits(wide));
    }

    #[test]
    fn test_ridged_is_identical_across_widths() {
        let settings = FractalSettings::default().with_seed(-8).with_frequency(0.5);
        let points = random_points(517, 16.0, 9);
        let narrow = evaluate::<F4>(&points, |x, y, z| settings.ridged(x, y, z));
        let wide = evaluate::<F8>(&points, |x, y, z| settings.ridged(x, y, z));
        assert_eq!(bits(narrow), bits(wide));
    }
}
