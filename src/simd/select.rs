//! Compile-time lane type selection.
//!
//! [`LaneSelect`] maps an element type and a lane count to the concrete lane type
//! the build target can represent, together with its alignment and the instruction
//! set behind it. [`Lane<T, N>`] projects through the trait, so naming a pair that the
//! target has no backend for is a compile error rather than a silent scalar loop:
//!
//! ```compile_fail
//! use lanenoise::simd::select::Lane;
//! // There is no 16-lane representation on any target.
//! let _ = <Lane<f32, 16> as lanenoise::simd::SimdLane>::zero();
//! ```
//!
//! | pair    | x86 / x86_64        | aarch64                  |
//! |---------|---------------------|--------------------------|
//! | f32 × 4 | `__m128` (SSE4.1)   | `float32x4_t`            |
//! | i32 × 4 | `__m128i` (SSE4.1)  | `int32x4_t`              |
//! | f32 × 8 | `__m256` (AVX2)     | 2 × `float32x4_t`        |
//! | i32 × 8 | `__m256i` (AVX2)    | 2 × `int32x4_t`          |
//!
//! Every representation holds exactly the requested number of elements; nothing is
//! widened, so there are no don't-care lanes. NEON has no 256-bit registers, so its
//! 8-wide lanes split the work across a register pair instead.

use std::fmt;

use crate::simd::SimdLane;

/// Instruction set family backing a lane representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstructionSet {
    Sse41,
    Avx2,
    Neon,
}

impl fmt::Display for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstructionSet::Sse41 => "sse4.1",
            InstructionSet::Avx2 => "avx2",
            InstructionSet::Neon => "neon",
        };
        f.write_str(name)
    }
}

/// Maps `(Self, N)` to a hardware lane representation.
///
/// Implemented only for the pairs the current target supports.
pub trait LaneSelect<const N: usize>: Sized {
    /// The concrete lane type.
    type Lane: SimdLane<Scalar = Self>;

    /// Instruction set used by every operation on [`LaneSelect::Lane`].
    const INSTRUCTION_SET: InstructionSet;

    /// Hardware registers making up one lane value.
    const REGISTERS: usize;

    /// Required memory alignment in bytes.
    const ALIGNMENT: usize = <Self::Lane as SimdLane>::ALIGNMENT;
}

/// The lane type holding `N` elements of `T` on this target.
pub type Lane<T, const N: usize> = <T as LaneSelect<N>>::Lane;

#[cfg(sse)]
mod x86_pairs {
    use super::{InstructionSet, LaneSelect};
    use crate::simd::sse::{f32x4::F32x4, i32x4::I32x4};

    impl LaneSelect<4> for f32 {
        type Lane = F32x4;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Sse41;
        const REGISTERS: usize = 1;
    }

    impl LaneSelect<4> for i32 {
        type Lane = I32x4;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Sse41;
        const REGISTERS: usize = 1;
    }
}

#[cfg(avx2)]
mod x86_wide_pairs {
    use super::{InstructionSet, LaneSelect};
    use crate::simd::avx2::{f32x8::F32x8, i32x8::I32x8};

    impl LaneSelect<8> for f32 {
        type Lane = F32x8;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Avx2;
        const REGISTERS: usize = 1;
    }

    impl LaneSelect<8> for i32 {
        type Lane = I32x8;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Avx2;
        const REGISTERS: usize = 1;
    }
}

#[cfg(neon)]
mod neon_pairs {
    use super::{InstructionSet, LaneSelect};
    use crate::simd::neon::{f32x4::F32x4, f32x8::F32x8, i32x4::I32x4, i32x8::I32x8};

    impl LaneSelect<4> for f32 {
        type Lane = F32x4;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Neon;
        const REGISTERS: usize = 1;
    }

    impl LaneSelect<4> for i32 {
        type Lane = I32x4;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Neon;
        const REGISTERS: usize = 1;
    }

    impl LaneSelect<8> for f32 {
        type Lane = F32x8;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Neon;
        const REGISTERS: usize = 2;
    }

    impl LaneSelect<8> for i32 {
        type Lane = I32x8;
        const INSTRUCTION_SET: InstructionSet = InstructionSet::Neon;
        const REGISTERS: usize = 2;
    }
}
