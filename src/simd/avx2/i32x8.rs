//! AVX2 8-lane i32 SIMD vector implementation.
//!
//! `I32x8` wraps `__m256i`. Arithmetic wraps on overflow, shifts are logical and
//! per-lane shift amounts use `vpsllvd`/`vpsrlvd`, which already yield zero for
//! amounts outside `0..32`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use crate::simd::{
    avx2::f32x8::{partial_mask, F32x8, AVX_ALIGNMENT, LANE_COUNT},
    IntLane, SimdLane,
};

/// AVX2 SIMD vector containing 8 packed i32 values.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x8 {
    pub(crate) elements: __m256i,
}

const _: () = assert!(std::mem::align_of::<I32x8>() == AVX_ALIGNMENT);

impl I32x8 {
    #[inline(always)]
    pub(crate) fn from_raw(elements: __m256i) -> Self {
        Self { elements }
    }

    /// Creates a vector from exactly eight values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [i32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { _mm256_loadu_si256(values.as_ptr() as *const __m256i) })
    }

    /// Copies the eight lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [i32; LANE_COUNT] {
        let mut out = [0i32; LANE_COUNT];
        unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.elements) };
        out
    }

    /// Loads the first `size` elements; the remaining lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` reads.
    #[inline(always)]
    pub unsafe fn load_partial(ptr: *const i32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm256_maskload_epi32(ptr, partial_mask(size)))
    }

    /// Stores the first `size` lanes with a masked store.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` writes.
    #[inline(always)]
    pub unsafe fn store_partial(self, ptr: *mut i32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_maskstore_epi32(ptr, partial_mask(size), self.elements)
    }
}

impl Default for I32x8 {
    fn default() -> Self {
        Self::zero()
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
    const ALIGNMENT: usize = AVX_ALIGNMENT;
    const ONE: i32 = 1;

    #[inline(always)]
    fn zero() -> Self {
        Self::from_raw(unsafe { _mm256_setzero_si256() })
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self::from_raw(unsafe { _mm256_set1_epi32(value) })
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::splat(-1)
    }

    #[inline(always)]
    fn from_slice(values: &[i32]) -> Self {
        match values.len() {
            0 => Self::zero(),
            len if len < LANE_COUNT => unsafe { Self::load_partial(values.as_ptr(), len) },
            _ => unsafe { Self::load_unaligned(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [i32]) {
        match out.len() {
            0 => {}
            len if len < LANE_COUNT => unsafe { self.store_partial(out.as_mut_ptr(), len) },
            _ => unsafe { self.store_unaligned(out.as_mut_ptr()) },
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self {
        debug_assert!(
            (ptr as usize) % AVX_ALIGNMENT == 0,
            "Pointer must be {AVX_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(_mm256_load_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm256_loadu_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut i32) {
        debug_assert!(
            (ptr as usize) % AVX_ALIGNMENT == 0,
            "Pointer must be {AVX_ALIGNMENT}-byte aligned"
        );

        _mm256_store_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut i32) {
        _mm256_storeu_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_andnot_si256(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmpeq_epi32(self.elements, rhs.elements) })
    }

    // AVX2 only has a signed greater-than; the other orderings are derived from it.
    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        rhs.gt_elements(self)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        !self.gt_elements(rhs)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmpgt_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        !rhs.gt_elements(self)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_min_epi32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_max_epi32(self.elements, rhs.elements) })
    }
}

impl IntLane for I32x8 {
    type Float = F32x8;

    #[inline(always)]
    fn cast_to_float(self) -> F32x8 {
        F32x8::from_raw(unsafe { _mm256_castsi256_ps(self.elements) })
    }

    #[inline(always)]
    fn convert_to_float(self) -> F32x8 {
        F32x8::from_raw(unsafe { _mm256_cvtepi32_ps(self.elements) })
    }
}

impl Add for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_add_epi32(self.elements, rhs.elements) })
    }
}

impl Sub for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_sub_epi32(self.elements, rhs.elements) })
    }
}

impl Mul for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) })
    }
}

impl BitAnd for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_and_si256(self.elements, rhs.elements) })
    }
}

impl BitOr for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_or_si256(self.elements, rhs.elements) })
    }
}

impl BitXor for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_xor_si256(self.elements, rhs.elements) })
    }
}

impl Not for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self ^ Self::all_ones()
    }
}

impl Shl<u32> for I32x8 {
    type Output = Self;

    /// Logical left shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shl(self, count: u32) -> Self::Output {
        Self::from_raw(unsafe {
            _mm256_sll_epi32(self.elements, _mm_cvtsi32_si128(count.min(32) as i32))
        })
    }
}

impl Shr<u32> for I32x8 {
    type Output = Self;

    /// Logical right shift of every lane by `count`; `count >= 32` gives zero.
    #[inline(always)]
    fn shr(self, count: u32) -> Self::Output {
        Self::from_raw(unsafe {
            _mm256_srl_epi32(self.elements, _mm_cvtsi32_si128(count.min(32) as i32))
        })
    }
}

impl Shl for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, counts: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_sllv_epi32(self.elements, counts.elements) })
    }
}

impl Shr for I32x8 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, counts: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_srlv_epi32(self.elements, counts.elements) })
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
