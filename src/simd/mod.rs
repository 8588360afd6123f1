//! Fixed-width SIMD lanes.
//!
//! Four lane kinds are available, each owning its hardware register(s) by value:
//!
//! - [`F32x4`] / [`I32x4`]: SSE4.1 on x86, NEON on aarch64
//! - [`F32x8`] / [`I32x8`]: AVX2 on x86, a NEON register pair on aarch64
//!
//! The backend modules are compiled only when the build script enables them
//! (`cfg(sse)`, `cfg(avx2)`, `cfg(neon)`). Code that should work on any width is
//! written against [`FloatLane`] / [`IntLane`]; [`select::Lane`] picks a concrete type
//! from an element type and a lane count at compile time.

/// Implements the compound assignment operators in terms of the binary ones.
#[allow(unused_macros)]
macro_rules! impl_assign_ops {
    ($lane:ty: $($assign:ident $assign_fn:ident => $op:tt),+ $(,)?) => {
        $(
            impl std::ops::$assign for $lane {
                #[inline(always)]
                fn $assign_fn(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

/// Implements `ShlAssign<u32>` / `ShrAssign<u32>` in terms of the shift operators.
#[allow(unused_macros)]
macro_rules! impl_shift_assign_ops {
    ($lane:ty) => {
        impl std::ops::ShlAssign<u32> for $lane {
            #[inline(always)]
            fn shl_assign(&mut self, count: u32) {
                *self = *self << count;
            }
        }

        impl std::ops::ShrAssign<u32> for $lane {
            #[inline(always)]
            fn shr_assign(&mut self, count: u32) {
                *self = *self >> count;
            }
        }
    };
}

#[cfg(sse)]
pub mod sse;

#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

pub mod select;

pub mod traits;

pub use traits::{FloatLane, IntLane, SimdLane};

#[cfg(sse)]
pub use sse::{f32x4::F32x4, i32x4::I32x4};

#[cfg(avx2)]
pub use avx2::{f32x8::F32x8, i32x8::I32x8};

#[cfg(neon)]
pub use neon::{f32x4::F32x4, f32x8::F32x8, i32x4::I32x4, i32x8::I32x8};
