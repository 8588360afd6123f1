//! Evaluating noise sources over slices of scalar coordinates.
//!
//! Points are packed `F::LANES` at a time; the last block is zero-filled, so every
//! lane evaluated is a real point or the origin and only `out.len()` results
//! are written back.
//!
//! # Usage
//!
//! ```rust
//! # #[cfg(lane4)]
//! # {
//! use lanenoise::noise::FractalSettings;
//! use lanenoise::simd::select::Lane;
//! use lanenoise::slice::sample_points;
//!
//! let xs: Vec<f32> = (0..10).map(|i| i as f32 * 0.1).collect();
//! let ys = vec![0.5f32; 10];
//! let zs = vec![0.0f32; 10];
//! let mut out = vec![0.0f32; 10];
//!
//! sample_points::<Lane<f32, 4>, _>(&FractalSettings::default(), &xs, &ys, &zs, &mut out)
//!     .unwrap();
//! # }
//! ```

use rayon::prelude::*;

use crate::{
    error::{length_mismatch, Result},
    noise::NoiseSource,
    simd::FloatLane,
    PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD,
};

fn check_lengths(xs: &[f32], ys: &[f32], zs: &[f32], out: &[f32]) -> Result<()> {
    let expected = out.len();
    for (name, len) in [("x", xs.len()), ("y", ys.len()), ("z", zs.len())] {
        if len != expected {
            return Err(length_mismatch(
                expected,
                len,
                format!("{name} coordinates must match the output length"),
            ));
        }
    }
    Ok(())
}

/// Evaluates one packed block of at most `F::LANES` points.
#[inline(always)]
fn sample_block<F, S>(source: &S, xs: &[f32], ys: &[f32], zs: &[f32], out: &mut [f32])
where
    F: FloatLane,
    S: NoiseSource<F> + ?Sized,
{
    let values = source.sample(F::from_slice(xs), F::from_slice(ys), F::from_slice(zs));
    values.write_to_slice(out);
}

/// Samples without length checks; every slice must have `out.len()` elements.
pub(crate) fn sample_serial<F, S>(source: &S, xs: &[f32], ys: &[f32], zs: &[f32], out: &mut [f32])
where
    F: FloatLane,
    S: NoiseSource<F> + ?Sized,
{
    let step = F::LANES;
    for (block, out) in out.chunks_mut(step).enumerate() {
        let start = block * step;
        let end = start + out.len();
        sample_block(source, &xs[start..end], &ys[start..end], &zs[start..end], out);
    }
}

/// Samples `source` at every `(xs[i], ys[i], zs[i])` into `out[i]`.
///
/// # Errors
///
/// Returns [`NoiseError::LengthMismatch`](crate::error::NoiseError::LengthMismatch) if
/// the three coordinate slices and `out` do not all have the same length. Nothing is
/// written in that case.
pub fn sample_points<F, S>(
    source: &S,
    xs: &[f32],
    ys: &[f32],
    zs: &[f32],
    out: &mut [f32],
) -> Result<()>
where
    F: FloatLane,
    S: NoiseSource<F> + ?Sized,
{
    check_lengths(xs, ys, zs, out)?;
    sample_serial(source, xs, ys, zs, out);
    Ok(())
}

/// Parallel version of [`sample_points`] on the rayon global pool.
///
/// Inputs of at most [`PARALLEL_SIMD_THRESHOLD`] points run serially. Larger inputs
/// are split into chunks of about [`PARALLEL_CHUNK_SIZE`] points, rounded to a whole
/// number of lanes; each point is still evaluated in the same lane position as in the
/// serial path, so the output is identical bit for bit.
pub fn par_sample_points<F, S>(
    source: &S,
    xs: &[f32],
    ys: &[f32],
    zs: &[f32],
    out: &mut [f32],
) -> Result<()>
where
    F: FloatLane,
    S: NoiseSource<F> + ?Sized,
{
    check_lengths(xs, ys, zs, out)?;

    if out.len() <= PARALLEL_SIMD_THRESHOLD {
        sample_serial(source, xs, ys, zs, out);
        return Ok(());
    }

    let step = F::LANES;
    let chunk_size = ((PARALLEL_CHUNK_SIZE / step) * step).max(step);
    log::trace!(
        "sampling {} points in chunks of {} ({} lanes)",
        out.len(),
        chunk_size,
        step
    );

    out.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_idx, out_chunk)| {
            let start = chunk_idx * chunk_size;
            let end = start + out_chunk.len();
            sample_serial(source, &xs[start..end], &ys[start..end], &zs[start..end], out_chunk);
        });

    Ok(())
}

#[cfg(all(test, lane4))]
mod tests {
    use super::*;
    use crate::error::NoiseError;
    use crate::noise::{FractalSettings, Simplex};
    use crate::simd::{select::Lane, SimdLane};

    type F4 = Lane<f32, 4>;

    fn coords(n: usize) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let xs = (0..n).map(|i| i as f32 * 0.37).collect();
        let ys = (0..n).map(|i| (i % 13) as f32 * -0.21).collect();
        let zs = (0..n).map(|i| (i % 7) as f32 * 0.5).collect();
        (xs, ys, zs)
    }

    #[test]
    fn test_matches_direct_lane_evaluation() {
        let source = Simplex { seed: 3 };
        let (xs, ys, zs) = coords(8);
        let mut out = vec![0.0f32; 8];
        sample_points::<F4, _>(&source, &xs, &ys, &zs, &mut out).unwrap();

        for block in 0..2 {
            let range = block * 4..block * 4 + 4;
            let direct: F4 = source.sample(
                F4::from_slice(&xs[range.clone()]),
                F4::from_slice(&ys[range.clone()]),
                F4::from_slice(&zs[range.clone()]),
            );
            assert_eq!(&out[range], direct.to_vec().as_slice());
        }
    }

    #[test]
    fn test_tail_is_written_exactly() {
        let (xs, ys, zs) = coords(6);
        let mut out = vec![f32::NAN; 6];
        sample_points::<F4, _>(&FractalSettings::default(), &xs, &ys, &zs, &mut out).unwrap();
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_input() {
        let mut out: Vec<f32> = Vec::new();
        assert!(sample_points::<F4, _>(&Simplex::default(), &[], &[], &[], &mut out).is_ok());
        assert!(par_sample_points::<F4, _>(&Simplex::default(), &[], &[], &[], &mut out).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let (xs, ys, zs) = coords(5);
        let mut out = vec![0.0f32; 4];
        let error = sample_points::<F4, _>(&Simplex::default(), &xs, &ys, &zs, &mut out)
            .unwrap_err();

        assert_eq!(
            error,
            NoiseError::LengthMismatch {
                expected: 4,
                actual: 5,
                message: "x coordinates must match the output length".to_string(),
            }
        );
        assert_eq!(out, vec![0.0; 4]);
    }

    #[test]
    fn test_parallel_equals_serial() {
        let n = PARALLEL_SIMD_THRESHOLD * 2 + 3;
        let (xs, ys, zs) = coords(n);
        let source = FractalSettings::default().with_frequency(0.05);

        let mut serial = vec![0.0f32; n];
        let mut parallel = vec![0.0f32; n];
        sample_points::<F4, _>(&source, &xs, &ys, &zs, &mut serial).unwrap();
        par_sample_points::<F4, _>(&source, &xs, &ys, &zs, &mut parallel).unwrap();

        let serial_bits: Vec<u32> = serial.iter().map(|v| v.to_bits()).collect();
        let parallel_bits: Vec<u32> = parallel.iter().map(|v| v.to_bits()).collect();
        assert_eq!(serial_bits, parallel_bits);
    }
}
