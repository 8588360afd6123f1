//! Batched 3-D simplex noise and fractal compositing.
//!
//! All kernels are generic over [`FloatLane`](crate::simd::FloatLane) and evaluate one
//! point per lane. They are pure and infallible: the same seed and coordinates give the
//! same bits on every lane width, because only wrapping integer arithmetic, individually
//! rounded float operations and truncating conversions are involved.
//!
//! - [`hash`]: lattice hashing and gradient selection
//! - [`simplex`]: the single-octave kernel
//! - [`fractal`]: FBM and ridged multifractal sums, [`FractalSettings`]
//! - [`source`]: the [`NoiseSource`] seam used by the sampling and map layers

pub mod fractal;
pub mod hash;
pub mod simplex;
pub mod source;

pub use fractal::{fbm, ridged_multi, FractalSettings, Octave, Octaves};
pub use simplex::simplex3d;
pub use source::{NoiseSource, Ridged, Simplex};
