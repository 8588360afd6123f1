//! AVX2 implementations for 256-bit lanes.
//!
//! AVX2 is available on most Intel processors since Haswell (2013) and AMD processors
//! since Excavator (2015).
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script enables this module (`cfg(avx2)`) when the
//!   host CPU or the requested target features provide AVX2
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 8 packed single-precision floats (`__m256`)
//! - [`i32x8::I32x8`]: 8 packed 32-bit signed integers (`__m256i`)
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(avx2)]
//! # {
//! use lanenoise::simd::avx2::i32x8::I32x8;
//! use lanenoise::simd::SimdLane;
//!
//! let lanes = I32x8::from_slice(&[1, 2, 3]);
//! assert_eq!(lanes.to_array(), [1, 2, 3, 0, 0, 0, 0, 0]);
//! # }
//! ```

pub mod f32x8;

pub mod i32x8;
