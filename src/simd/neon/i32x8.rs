//! Eight i32 lanes on NEON, held as a pair of 128-bit registers.

use std::ops::{Not, Shl, Shr};

use crate::simd::{
    neon::{
        f32x8::{F32x8, LANE_COUNT, PAIR_ALIGNMENT},
        i32x4::I32x4,
    },
    IntLane, SimdLane,
};

const HALF: usize = 4;

/// Eight packed i32 values in two NEON registers.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, align(32))]
pub struct I32x8 {
    pub(crate) lo: I32x4,
    pub(crate) hi: I32x4,
}

const _: () = assert!(std::mem::align_of::<I32x8>() == PAIR_ALIGNMENT);

impl I32x8 {
    #[inline(always)]
    pub(crate) fn from_halves(lo: I32x4, hi: I32x4) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(I32x4, I32x4) -> I32x4) -> Self {
        Self::from_halves(f(self.lo, rhs.lo), f(self.hi, rhs.hi))
    }

    /// Creates a vector from exactly eight values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [i32; LANE_COUNT]) -> Self {
        Self::from_slice(&values)
    }

    /// Copies the eight lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [i32; LANE_COUNT] {
        let mut out = [0i32; LANE_COUNT];
        self.write_to_slice(&mut out);
        out
    }
}

impl From<[i32; LANE_COUNT]> for I32x8 {
    fn from(values: [i32; LANE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl From<&[i32]> for I32x8 {
    fn from(slice: &[i32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for I32x8 {
    type Scalar = i32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = PAIR_ALIGNMENT;
    const ONE: i32 = 1;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0)
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        let half = I32x4::splat(value);
        Self::from_halves(half, half)
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::splat(-1)
    }

    #[inline(always)]
    fn from_slice(values: &[i32]) -> Self {
        let split = values.len().min(HALF);
        Self::from_halves(
            I32x4::from_slice(&values[..split]),
            I32x4::from_slice(&values[split..]),
        )
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [i32]) {
        let split = out.len().min(HALF);
        let (lo, hi) = out.split_at_mut(split);
        self.lo.write_to_slice(lo);
        self.hi.write_to_slice(hi);
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(
            (ptr as usize) % PAIR_ALIGNMENT == 0,
            "Pointer must be {PAIR_ALIGNMENT}-byte aligned"
        );

        Self::from_halves(I32x4::load_aligned(ptr), I32x4::load_aligned(ptr.add(HALF)))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        Self::from_halves(
            I32x4::load_unaligned(ptr),
            I32x4::load_unaligned(ptr.add(HALF)),
        )
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(
            (ptr as usize) % PAIR_ALIGNMENT == 0,
            "Pointer must be {PAIR_ALIGNMENT}-byte aligned"
        );

        self.lo.store_aligned(ptr);
        self.hi.store_aligned(ptr.add(HALF));
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        self.lo.store_unaligned(ptr);
        self.hi.store_unaligned(ptr.add(HALF));
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::and_not)
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::eq_elements)
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::lt_elements)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::le_elements)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::gt_elements)
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        self.zip(rhs, I32x4::ge_elements)
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

impl IntLane for I32x8 {
    type Float = F32x8;

    #[inline(always)]
    fn cast_to_float(self) -> F32x8 {
        F32x8::from_halves(self.lo.cast_to_float(), self.hi.cast_to_float())
    }

    #[inline(always)]
    fn convert_to_float(self) -> F32x8 {
        F32x8::from_halves(self.lo.convert_to_float(), self.hi.convert_to_float())
    }
}

impl_pair_binary_ops!(I32x8:
    Add add,
    Sub sub,
    Mul mul,
    BitAnd bitand,
    BitOr bitor,
    BitXor bitxor,
    Shl shl,
    Shr shr,
);

impl Not for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::from_halves(!self.lo, !self.hi)
    }
}

impl Shl<u32> for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, count: u32) -> Self::Output {
        Self::from_halves(self.lo << count, self.hi << count)
    }
}

impl Shr<u32> for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, count: u32) -> Self::Output {
        Self::from_halves(self.lo >> count, self.hi >> count)
    }
}

impl_assign_ops!(I32x8:
    AddAssign add_assign => +,
    SubAssign sub_assign => -,
    MulAssign mul_assign => *,
    BitAndAssign bitand_assign => &,
    BitOrAssign bitor_assign => |,
    BitXorAssign bitxor_assign => ^,
);

impl_shift_assign_ops!(I32x8);
