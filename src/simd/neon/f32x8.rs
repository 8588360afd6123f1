//! Eight f32 lanes on NEON, held as a pair of 128-bit registers.
//!
//! Lanes 0..4 live in `lo` and lanes 4..8 in `hi`. The pair is aligned to 32 bytes so
//! that buffers sized for [`F32x8`] have the same layout requirements on every target.

use std::ops::{Neg, Not};

use crate::simd::{
    neon::{f32x4::F32x4, i32x8::I32x8},
    FloatLane, SimdLane,
};

const HALF: usize = 4;

pub(crate) const PAIR_ALIGNMENT: usize = 32;

pub(crate) const LANE_COUNT: usize = 8;

/// Eight packed f32 values in two NEON registers.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, align(32))]
pub struct F32x8 {
    pub(crate) lo: F32x4,
    pub(crate) hi: F32x4,
}

const _: () = assert!(std::mem::align_of::<F32x8>() == PAIR_ALIGNMENT);
const _: () = assert!(std::mem::size_of::<F32x8>() == LANE_COUNT * 4);

impl F32x8 {
    #[inline(always)]
    pub(crate) fn from_halves(lo: F32x4, hi: F32x4) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    fn map(self, f: impl Fn(F32x4) -> F32x4) -> Self {
        Self::from_halves(f(self.lo), f(self.hi))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(F32x4, F32x4) -> F32x4) -> Self {
        Self::from_halves(f(self.lo, rhs.lo), f(self.hi, rhs.hi))
    }

    /// Creates a vector from exactly eight values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [f32; LANE_COUNT]) -> Self {
        Self::from_slice(&values)
    }

    /// Copies the eight lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        self.write_to_slice(&mut out);
        out
    }
}

impl From<[f32; LANE_COUNT]> for F32x8 {
    fn from(values: [f32; LANE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for F32x8 {
    fn from(slice: &[f32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for F32x8 {
    type Scalar = f32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = PAIR_ALIGNMENT;
    const ONE: f32 = 1.0;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        let half = F32x4::splat(value);
        Self::from_halves(half, half)
    }

    #[inline(always)]
    fn all_ones() -> Self {
        let half = F32x4::all_ones();
        Self::from_halves(half, half)
    }

    #[inline(always)]
    fn from_slice(values: &[f32]) -> Self {
        let split = values.len().min(HALF);
        Self::from_halves(
            F32x4::from_slice(&values[..split]),
            F32x4::from_slice(&values[split..]),
        )
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [f32]) {
        let split = out.len().min(HALF);
        let (lo, hi) = out.split_at_mut(split);
        self.lo.write_to_slice(lo);
        self.hi.write_to_slice(hi);
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            (ptr as usize) % PAIR_ALIGNMENT == 0,
            "Pointer must be {PAIR_ALIGNMENT}-byte aligned"
        );

        Self::from_halves(F32x4::load_aligned(ptr), F32x4::load_aligned(ptr.add(HALF)))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self::from_halves(
            F32x4::load_unaligned(ptr),
            F32x4::load_unaligned(ptr.add(HALF)),
        )
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(
            (ptr as usize) % PAIR_ALIGNMENT == 0,
            "Pointer must be {PAIR_ALIGNMENT}-byte aligned"
        );

        self.lo.store_aligned(ptr);
        self.hi.store_aligned(ptr.add(HALF));
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        self.lo.store_unaligned(ptr);
        self.hi.store_unaligned(ptr.add(HALF));
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::and_not)
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::eq_elements)
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::lt_elements)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::le_elements)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::gt_elements)
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        self.zip(rhs, F32x4::ge_elements)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, SimdLane::min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, SimdLane::max)
    }
}

impl FloatLane for F32x8 {
    type Int = I32x8;

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(F32x4::floor)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        self.map(F32x4::ceil)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(F32x4::sqrt)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(F32x4::abs)
    }

    #[inline(always)]
    fn cast_to_int(self) -> I32x8 {
        I32x8::from_halves(self.lo.cast_to_int(), self.hi.cast_to_int())
    }

    #[inline(always)]
    fn convert_to_int(self) -> I32x8 {
        I32x8::from_halves(self.lo.convert_to_int(), self.hi.convert_to_int())
    }
}

impl_pair_binary_ops!(F32x8:
    Add add,
    Sub sub,
    Mul mul,
    Div div,
    BitAnd bitand,
    BitOr bitor,
    BitXor bitxor,
);

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.map(F32x4::neg)
    }
}

impl Not for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.map(F32x4::not)
    }
}

impl_assign_ops!(F32x8:
    AddAssign add_assign => +,
    SubAssign sub_assign => -,
    MulAssign mul_assign => *,
    DivAssign div_assign => /,
    BitAndAssign bitand_assign => &,
    BitOrAssign bitor_assign => |,
    BitXorAssign bitxor_assign => ^,
);
