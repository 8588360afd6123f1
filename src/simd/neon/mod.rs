//! ARM NEON implementations.
//!
//! NEON is available on all AArch64 processors, including Apple Silicon, AWS Graviton
//! and modern mobile devices.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any AArch64 processor
//! - **Target Architecture**: AArch64
//! - **Runtime Detection**: The build script always enables this module (`cfg(neon)`) on
//!   AArch64, where Advanced SIMD is part of the baseline
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`] / [`i32x4::I32x4`]: one 128-bit register (`float32x4_t`, `int32x4_t`)
//! - [`f32x8::F32x8`] / [`i32x8::I32x8`]: two 128-bit registers treated as one 8-lane
//!   value; every operation is applied to both halves
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1, M2, M3 processors (macOS, iOS)
//! - **AWS Graviton**: Graviton2, Graviton3 processors
//! - **Mobile**: Modern Android and iOS devices

/// Implements a binary operator on a register pair by applying it to both halves.
macro_rules! impl_pair_binary_ops {
    ($pair:ty: $($trait:ident $method:ident),+ $(,)?) => {
        $(
            impl std::ops::$trait for $pair {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self::Output {
                    Self {
                        lo: std::ops::$trait::$method(self.lo, rhs.lo),
                        hi: std::ops::$trait::$method(self.hi, rhs.hi),
                    }
                }
            }
        )+
    };
}

pub mod f32x4;

pub mod f32x8;

pub mod i32x4;

pub mod i32x8;
