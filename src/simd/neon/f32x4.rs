//! NEON 4-lane f32 SIMD vector implementation.
//!
//! `F32x4` wraps `float32x4_t`. NEON has no alignment-faulting loads, so
//! `load_aligned` only checks the pointer in debug builds and otherwise behaves like
//! `load_unaligned`.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::simd::{neon::i32x4::I32x4, FloatLane, SimdLane};

pub(crate) const NEON_ALIGNMENT: usize = 16;

pub(crate) const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4 {
    pub(crate) elements: float32x4_t,
}

const _: () = assert!(std::mem::align_of::<F32x4>() == NEON_ALIGNMENT);

impl F32x4 {
    #[inline(always)]
    pub(crate) fn from_raw(elements: float32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn from_bits(bits: uint32x4_t) -> Self {
        Self::from_raw(unsafe { vreinterpretq_f32_u32(bits) })
    }

    #[inline(always)]
    fn bits(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_f32(self.elements) }
    }

    /// Creates a vector from exactly four values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [f32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { vld1q_f32(values.as_ptr()) })
    }

    /// Copies the four lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.elements) };
        out
    }

    /// Loads fewer than 4 elements; the remaining lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` reads.
    #[inline(always)]
    pub unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let zero = vdupq_n_f32(0.0);
        let elements = match size {
            0 => zero,
            1 => vsetq_lane_f32::<0>(*ptr, zero),
            2 => vcombine_f32(vld1_f32(ptr), vdup_n_f32(0.0)),
            _ => vsetq_lane_f32::<2>(*ptr.add(2), vcombine_f32(vld1_f32(ptr), vdup_n_f32(0.0))),
        };

        Self::from_raw(elements)
    }

    /// Stores the first `size` lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` writes.
    #[inline(always)]
    pub unsafe fn store_partial(self, ptr: *mut f32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");

        match size {
            0 => {}
            1 => *ptr = vgetq_lane_f32::<0>(self.elements),
            2 => vst1_f32(ptr, vget_low_f32(self.elements)),
            _ => {
                vst1_f32(ptr, vget_low_f32(self.elements));
                *ptr.add(2) = vgetq_lane_f32::<2>(self.elements);
            }
        }
    }
}

impl Default for F32x4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f32; LANE_COUNT]> for F32x4 {
    fn from(values: [f32; LANE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for F32x4 {
    fn from(slice: &[f32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for F32x4 {
    type Scalar = f32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;
    const ONE: f32 = 1.0;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_raw(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::from_bits(unsafe { vdupq_n_u32(u32::MAX) })
    }

    #[inline(always)]
    fn from_slice(values: &[f32]) -> Self {
        match values.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe {
                Self::load_partial(values.as_ptr(), values.len())
            },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load_unaligned(values.as_ptr())
            },
        }
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [f32]) {
        match out.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { self.store_partial(out.as_mut_ptr(), out.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                self.store_unaligned(out.as_mut_ptr())
            },
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            (ptr as usize) % NEON_ALIGNMENT == 0,
            "Pointer must be {NEON_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(
            (ptr as usize) % NEON_ALIGNMENT == 0,
            "Pointer must be {NEON_ALIGNMENT}-byte aligned"
        );

        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    /// `vbicq` clears the bits of its first operand that are set in the second.
    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vbicq_u32(rhs.bits(), self.bits()) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vceqq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vcltq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vcleq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vcgtq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_bits(unsafe { vcgeq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { vminq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { vmaxq_f32(self.elements, rhs.elements) })
    }
}

impl FloatLane for F32x4 {
    type Int = I32x4;

    #[inline(always)]
    fn floor(self) -> Self {
        Self::from_raw(unsafe { vrndmq_f32(self.elements) })
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self::from_raw(unsafe { vrndpq_f32(self.elements) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_raw(unsafe { vsqrtq_f32(self.elements) })
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_raw(unsafe { vabsq_f32(self.elements) })
    }

    #[inline(always)]
    fn cast_to_int(self) -> I32x4 {
        I32x4::from_raw(unsafe { vreinterpretq_s32_f32(self.elements) })
    }

    #[inline(always)]
    fn convert_to_int(self) -> I32x4 {
        I32x4::from_raw(unsafe { vcvtq_s32_f32(self.elements) })
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vaddq_f32(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vsubq_f32(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    // Plain `fmul`; products are never fused into a following add.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vmulq_f32(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { vdivq_f32(self.elements, rhs.elements) })
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::from_raw(unsafe { vnegq_f32(self.elements) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(unsafe { vandq_u32(self.bits(), rhs.bits()) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(unsafe { vorrq_u32(self.bits(), rhs.bits()) })
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_bits(unsafe { veorq_u32(self.bits(), rhs.bits()) })
    }
}

impl Not for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::from_bits(unsafe { vmvnq_u32(self.bits()) })
    }
}

impl_assign_ops!(F32x4:
    AddAssign add_assign => +,
    SubAssign sub_assign => -,
    MulAssign mul_assign => *,
    DivAssign div_assign => /,
    BitAndAssign bitand_assign => &,
    BitOrAssign bitor_assign => |,
    BitXorAssign bitxor_assign => ^,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: F32x4) -> [u32; LANE_COUNT] {
        v.to_array().map(f32::to_bits)
    }

    #[test]
    fn test_partial_load_zero_fills() {
        let data = [1.0f32, 2.0, 3.0];
        for size in 0..LANE_COUNT {
            let v = F32x4::from_slice(&data[..size]);
            let out = v.to_array();
            assert_eq!(&out[..size], &data[..size]);
            assert!(out[size..].iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_partial_store() {
        let v = F32x4::new([1.0, 2.0, 3.0, 4.0]);
        let mut out = [0.0f32; 3];
        v.write_to_slice(&mut out);
        assert_eq!(out, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_and_not_complements_self() {
        let a = F32x4::all_ones();
        let b = F32x4::new([1.0, -2.0, 3.0, -4.0]);
        assert_eq!(bits(a.and_not(b)), [0; 4]);
        assert_eq!(bits(F32x4::zero().and_not(b)), bits(b));
    }

    #[test]
    fn test_rounding_and_conversion() {
        let v = F32x4::new([-1.5, -0.25, 0.75, 2.5]);
        assert_eq!(v.floor().to_array(), [-2.0, -1.0, 0.0, 2.0]);
        assert_eq!(v.ceil().to_array(), [-1.0, -0.0, 1.0, 3.0]);
        assert_eq!(v.convert_to_int().to_array(), [-1, 0, 0, 2]);
        assert_eq!(v.abs().to_array(), [1.5, 0.25, 0.75, 2.5]);
    }

    #[test]
    fn test_select_preserves_signed_zero() {
        let a = F32x4::splat(-0.0);
        let b = F32x4::splat(0.0);
        let mask = F32x4::new([0.0, 1.0, 0.0, 1.0]).eq_elements(F32x4::zero());
        assert_eq!(
            bits(F32x4::select(a, b, mask)),
            [0x8000_0000, 0, 0x8000_0000, 0]
        );
    }
}
