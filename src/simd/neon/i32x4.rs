//! NEON 4-lane i32 SIMD vector implementation.
//!
//! Shifts go through `ushl` on the unsigned reinterpretation of the register, which
//! takes a signed per-lane amount (negative shifts right). Only the low byte of each
//! amount is honoured by the hardware, so counts are range-checked before use.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use crate::simd::{
    neon::f32x4::{F32x4, LANE_COUNT, NEON_ALIGNMENT},
    IntLane, SimdLane,
};

/// A SIMD vector of 4 32-bit signed integers
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4 {
    pub(crate) elements: int32x4_t,
}

const _: () = assert!(std::mem::align_of::<I32x4>() == NEON_ALIGNMENT);

impl I32x4 {
    #[inline(always)]
    pub(crate) fn from_raw(elements: int32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn from_mask(mask: uint32x4_t) -> Self {
        Self::from_raw(unsafe { vreinterpretq_s32_u32(mask) })
    }

    #[inline(always)]
    fn unsigned(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_s32(self.elements) }
    }

    /// Creates a vector from exactly four values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [i32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { vld1q_s32(values.as_ptr()) })
    }

    /// Copies the four lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [i32; LANE_COUNT] {
        let mut out = [0i32; LANE_COUNT];
        unsafe { vst1q_s32(out.as_mut_ptr(), self.elements) };
        out
    }

    /// Shifts each lane by a signed amount in `-32..=32`; zero for anything else.
    #[inline(always)]
    fn shift_lanes(self, amounts: int32x4_t, in_range: uint32x4_t) -> Self {
        unsafe {
            let shifted = vshlq_u32(self.unsigned(), amounts);
            Self::from_mask(vandq_u32(shifted, in_range))
        }
    }
}

impl Default for I32x4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[i32; LANE_COUNT]> for I32x4 {
    fn from(values: [i32; LANE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl From<&[i32]> for I32x4 {
    fn from(slice: &[i32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for I32x4 {
    type Scalar = i32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;
    const ONE: i32 = 1;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0)
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_raw(unsafe { vdupq_n_s32(value) })
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::splat(-1)
    }

    #[inline(always)]
    fn from_slice(values: &[i32]) -> Self {
        if values.len() >= LANE_COUNT {
            return unsafe { Self::load_unaligned(values.as_ptr()) };
        }

        let mut padded = [0i32; LANE_COUNT];
        padded[..values.len()].copy_from_slice(values);
        Self::new(padded)
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [i32]) {
        let count = out.len().min(LANE_COUNT);
        out[..count].copy_from_slice(&self.to_array()[..count]);
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(
            (ptr as usize) % NEON_ALIGNMENT == 0,
            "Pointer must be {NEON_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(vld1q_s32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(vld1q_s32(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(
            (ptr as usize) % NEON_ALIGNMENT == 0,
            "Pointer must be {NEON_ALIGNMENT}-byte aligned"
        );

        vst1q_s32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        vst1q_s32(ptr, self.elements)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { vbicq_s32(rhs.elements, self.elements) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceqq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcltq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcleq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgtq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgeq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { vminq_s32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { vmaxq_s32(self.elements, rhs.elements) })
    }
}

impl IntLane for I32x4 {
    type Float = F32x4;

    #[inline(always)]
    fn cast_to_float(self) -> F32x4 {
        F32x4::from_raw(unsafe { vreinterpretq_f32_s32(self.elements) })
    }

    #[inline(always)]
    fn convert_to_float(self) -> F32x4 {
        F32x4::from_raw(unsafe { vcvtq_f32_s32(self.elements) })
    }
}

impl Add for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vaddq_s32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vsubq_s32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vmulq_s32(self.elements, rhs.elements) })
    }
}

impl BitAnd for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vandq_s32(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vorrq_s32(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { veorq_s32(self.elements, rhs.elements) })
    }
}

impl Not for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::from_raw(unsafe { vmvnq_s32(self.elements) })
    }
}

impl Shl<u32> for I32x4 {
    type Output = Self;

    /// Logical left shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shl(self, count: u32) -> Self::Output {
        if count >= 32 {
            return Self::zero();
        }
        Self::from_mask(unsafe { vshlq_u32(self.unsigned(), vdupq_n_s32(count as i32)) })
    }
}

impl Shr<u32> for I32x4 {
    type Output = Self;

    /// Logical right shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shr(self, count: u32) -> Self::Output {
        if count >= 32 {
            return Self::zero();
        }
        Self::from_mask(unsafe { vshlq_u32(self.unsigned(), vdupq_n_s32(-(count as i32))) })
    }
}

impl Shl for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, counts: Self) -> Self::Output {
        let in_range = unsafe { vcltq_u32(counts.unsigned(), vdupq_n_u32(32)) };
        self.shift_lanes(counts.elements, in_range)
    }
}

impl Shr for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, counts: Self) -> Self::Output {
        unsafe {
            let in_range = vcltq_u32(counts.unsigned(), vdupq_n_u32(32));
            self.shift_lanes(vnegq_s32(counts.elements), in_range)
        }
    }
}

impl_assign_ops!(I32x4:
    AddAssign add_assign => +,
    SubAssign sub_assign => -,
    MulAssign mul_assign => *,
    BitAndAssign bitand_assign => &,
    BitOrAssign bitor_assign => |,
    BitXorAssign bitxor_assign => ^,
);

impl_shift_assign_ops!(I32x4);
