//! # lanenoise
//!
//! Fixed-width SIMD lanes and batched 3-D simplex noise built on them.
//!
//! - [`simd`]: the `F32x4`, `I32x4`, `F32x8` and `I32x8` lane types over SSE4.1, AVX2 and
//!   NEON, their shared traits, and the compile-time [`simd::select::Lane`] selector
//! - [`noise`]: lattice hashing, the simplex kernel and FBM / ridged compositors
//! - [`slice`]: evaluating a noise source over scalar coordinate slices (serial and rayon)
//! - [`map`]: plane, cylinder and sphere grids returned as `ndarray::Array2<f32>`
//! - [`error`]: [`NoiseError`](error::NoiseError) for the slice and map layers
//!
//! Which backends exist is decided at build time by `build.rs`, which enables
//! `cfg(sse)`, `cfg(avx2)` and `cfg(neon)` from the target features, plus `cfg(lane4)` /
//! `cfg(lane8)` when 4- / 8-wide lanes are available. On a target without SSE4.1 or NEON
//! (`cfg(fallback)`) no lane type exists and the generic layers have nothing to
//! instantiate; there is no scalar emulation.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(lane8)]
//! # {
//! use lanenoise::noise::fbm;
//! use lanenoise::simd::{select::Lane, SimdLane};
//!
//! type F = Lane<f32, 8>;
//!
//! let x = F::from_slice(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);
//! let n = fbm(1337, x, F::zero(), F::zero(), 1.0, 3, 2.0, 0.5);
//! assert!(n.to_vec().iter().all(|v| v.is_finite()));
//! # }
//! ```

pub mod error;
pub mod map;
pub mod noise;
pub mod simd;
pub mod slice;

pub use error::{NoiseError, Result};

/// Number of points below which parallel sampling runs on the calling thread.
pub const PARALLEL_SIMD_THRESHOLD: usize = 16_384;

/// Target number of points per rayon task in parallel sampling.
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;

/// Largest octave count accepted by [`noise::FractalSettings::validate`].
pub const MAX_OCTAVES: u32 = 32;
