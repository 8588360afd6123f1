//! SSE4.1 4-lane i32 SIMD vector implementation.
//!
//! `I32x4` wraps `__m128i`. Multiplication uses SSE4.1 `pmulld` and keeps the low
//! 32 bits of each product (wrapping). Shifts are logical. Per-lane shift amounts use
//! AVX2 `vpsllvd`/`vpsrlvd` when the build enables AVX2 and an element loop otherwise.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use crate::simd::{
    sse::f32x4::{F32x4, LANE_COUNT, SSE_ALIGNMENT},
    IntLane, SimdLane,
};

/// SSE SIMD vector containing 4 packed i32 values.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4 {
    pub(crate) elements: __m128i,
}

const _: () = assert!(std::mem::align_of::<I32x4>() == SSE_ALIGNMENT);

impl I32x4 {
    #[inline(always)]
    pub(crate) fn from_raw(elements: __m128i) -> Self {
        Self { elements }
    }

    /// Creates a vector from exactly four values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [i32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { _mm_loadu_si128(values.as_ptr() as *const __m128i) })
    }

    /// Copies the four lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [i32; LANE_COUNT] {
        let mut out = [0i32; LANE_COUNT];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.elements) };
        out
    }

    // Element loop for per-lane shifts without AVX2; amounts outside 0..32 give zero.
    #[cfg(not(avx2))]
    #[inline(always)]
    fn shift_each(self, counts: Self, shift: fn(u32, u32) -> u32) -> Self {
        let values = self.to_array();
        let counts = counts.to_array();
        let mut out = [0i32; LANE_COUNT];
        for ((out, value), count) in out.iter_mut().zip(values).zip(counts) {
            let count = count as u32;
            if count < 32 {
                *out = shift(value as u32, count) as i32;
            }
        }
        Self::new(out)
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
    /// Loads up to four values; missing lanes are zero.
    fn from(slice: &[i32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for I32x4 {
    type Scalar = i32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;
    const ONE: i32 = 1;

    #[inline(always)]
    fn zero() -> Self {
        Self::from_raw(unsafe { _mm_setzero_si128() })
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_raw(unsafe { _mm_set1_epi32(value) })
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
            (ptr as usize) % SSE_ALIGNMENT == 0,
            "Pointer must be {SSE_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(_mm_load_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(
            (ptr as usize) % SSE_ALIGNMENT == 0,
            "Pointer must be {SSE_ALIGNMENT}-byte aligned"
        );

        _mm_store_si128(ptr as *mut __m128i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        _mm_storeu_si128(ptr as *mut __m128i, self.elements)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_andnot_si128(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmpeq_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmplt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        !self.gt_elements(rhs)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmpgt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        !self.lt_elements(rhs)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_min_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_max_epi32(self.elements, rhs.elements) })
    }
}

impl IntLane for I32x4 {
    type Float = F32x4;

    #[inline(always)]
    fn cast_to_float(self) -> F32x4 {
        F32x4::from_raw(unsafe { _mm_castsi128_ps(self.elements) })
    }

    #[inline(always)]
    fn convert_to_float(self) -> F32x4 {
        F32x4::from_raw(unsafe { _mm_cvtepi32_ps(self.elements) })
    }
}

impl Add for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl BitAnd for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_and_si128(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_or_si128(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_xor_si128(self.elements, rhs.elements) })
    }
}

impl Not for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self ^ Self::all_ones()
    }
}

impl Shl<u32> for I32x4 {
    type Output = Self;

    /// Logical left shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shl(self, count: u32) -> Self::Output {
        Self::from_raw(unsafe {
            _mm_sll_epi32(self.elements, _mm_cvtsi32_si128(count.min(32) as i32))
        })
    }
}

impl Shr<u32> for I32x4 {
    type Output = Self;

    /// Logical right shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shr(self, count: u32) -> Self::Output {
        Self::from_raw(unsafe {
            _mm_srl_epi32(self.elements, _mm_cvtsi32_si128(count.min(32) as i32))
        })
    }
}

impl Shl for I32x4 {
    type Output = Self;

    /// Logical left shift of each lane by the matching lane of `counts`.
    #[inline(always)]
    fn shl(self, counts: Self) -> Self::Output {
        #[cfg(avx2)]
        {
            Self::from_raw(unsafe { _mm_sllv_epi32(self.elements, counts.elements) })
        }
        #[cfg(not(avx2))]
        {
            self.shift_each(counts, |value, count| value << count)
        }
    }
}

impl Shr for I32x4 {
    type Output = Self;

    /// Logical right shift of each lane by the matching lane of `counts`.
    #[inline(always)]
    fn shr(self, counts: Self) -> Self::Output {
        #[cfg(avx2)]
        {
            Self::from_raw(unsafe { _mm_srlv_epi32(self.elements, counts.elements) })
        }
        #[cfg(not(avx2))]
        {
            self.shift_each(counts, |value, count| value >> count)
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
