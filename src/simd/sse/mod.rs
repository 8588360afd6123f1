//! SSE4.1 implementations for 128-bit lanes.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: SSE4.1 (Intel Penryn 2007+, AMD Bulldozer 2011+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script enables this module (`cfg(sse)`) when the
//!   host CPU or the requested target features provide SSE4.1
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 4 packed single-precision floats (`__m128`)
//! - [`i32x4::I32x4`]: 4 packed 32-bit signed integers (`__m128i`)
//!
//! SSE4.1 is required (not just SSE2) for `roundps` (`floor`), `pmulld` (wrapping
//! 32-bit multiply) and `pminsd`/`pmaxsd`.

pub mod f32x4;

pub mod i32x4;
