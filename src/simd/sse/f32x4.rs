//! SSE4.1 4-lane f32 SIMD vector implementation.
//!
//! This module provides `F32x4`, a SIMD vector type that wraps the 128-bit `__m128`
//! register to operate on 4 single-precision floating-point values at once.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: SSE4.1 (Penryn and later, every x86_64 CPU with AVX2)
//! - **Target Architecture**: x86 and x86_64
//! - **Instructions**: `roundps` for `floor`/`ceil`, everything else is SSE/SSE2
//!
//! # Supported Operations
//!
//! - Construction from scalars, slices (zero-filled) and aligned/unaligned memory
//! - Arithmetic operators `+ - * /`, unary `-` and their compound forms
//! - Mask-producing comparisons (`lt_elements`, `ge_elements`, ...)
//! - Bitwise operators on the raw bit pattern, `and_not`, `select`
//! - `floor`, `ceil`, `sqrt`, `abs`, `min`, `max`
//! - Bit cast and value conversion to [`I32x4`]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::simd::{sse::i32x4::I32x4, FloatLane, SimdLane};

/// SSE memory alignment requirement in bytes.
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Number of f32 elements that fit in a 128-bit register.
pub(crate) const LANE_COUNT: usize = 4;

/// SSE SIMD vector containing 4 packed f32 values.
///
/// The register is owned by value; copies are plain register moves.
///
/// ```rust
/// # #[cfg(sse)]
/// # {
/// use lanenoise::simd::{F32x4, SimdLane};
///
/// let v = F32x4::new([1.0, 2.0, 3.0, 4.0]);
/// let doubled = v + v;
/// assert_eq!(doubled.to_array(), [2.0, 4.0, 6.0, 8.0]);
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4 {
    pub(crate) elements: __m128,
}

const _: () = assert!(std::mem::align_of::<F32x4>() == SSE_ALIGNMENT);
const _: () = assert!(std::mem::size_of::<F32x4>() == LANE_COUNT * 4);

impl F32x4 {
    /// Wraps an existing register.
    #[inline(always)]
    pub(crate) fn from_raw(elements: __m128) -> Self {
        Self { elements }
    }

    /// Creates a vector from exactly four values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [f32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { _mm_loadu_ps(values.as_ptr()) })
    }

    /// Copies the four lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.elements) };
        out
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
    /// Loads up to four values; missing lanes are zero.
    fn from(slice: &[f32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for F32x4 {
    type Scalar = f32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;
    const ONE: f32 = 1.0;

    #[inline(always)]
    fn zero() -> Self {
        Self::from_raw(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_raw(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::from_raw(unsafe { _mm_castsi128_ps(_mm_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn from_slice(values: &[f32]) -> Self {
        if values.len() >= LANE_COUNT {
            return unsafe { Self::load_unaligned(values.as_ptr()) };
        }

        let mut padded = [0.0f32; LANE_COUNT];
        padded[..values.len()].copy_from_slice(values);
        Self::new(padded)
    }

    #[inline(always)]
    fn write_to_slice(self, out: &mut [f32]) {
        let count = out.len().min(LANE_COUNT);
        out[..count].copy_from_slice(&self.to_array()[..count]);
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        debug_assert!(
            (ptr as usize) % SSE_ALIGNMENT == 0,
            "Pointer must be {SSE_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(_mm_load_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm_loadu_ps(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(
            (ptr as usize) % SSE_ALIGNMENT == 0,
            "Pointer must be {SSE_ALIGNMENT}-byte aligned"
        );

        _mm_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_andnot_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmpeq_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmplt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmple_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmpgt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_cmpge_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_min_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm_max_ps(self.elements, rhs.elements) })
    }
}

impl FloatLane for F32x4 {
    type Int = I32x4;

    #[inline(always)]
    fn floor(self) -> Self {
        Self::from_raw(unsafe { _mm_floor_ps(self.elements) })
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self::from_raw(unsafe { _mm_ceil_ps(self.elements) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_raw(unsafe { _mm_sqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::splat(-0.0).and_not(self)
    }

    #[inline(always)]
    fn cast_to_int(self) -> I32x4 {
        I32x4::from_raw(unsafe { _mm_castps_si128(self.elements) })
    }

    #[inline(always)]
    fn convert_to_int(self) -> I32x4 {
        I32x4::from_raw(unsafe { _mm_cvttps_epi32(self.elements) })
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_add_ps(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_sub_ps(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_mul_ps(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_div_ps(self.elements, rhs.elements) })
    }
}

impl Neg for F32x4 {
    type Output = Self;

    /// Flips the sign bit of every lane.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        self ^ Self::splat(-0.0)
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_and_ps(self.elements, rhs.elements) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_or_ps(self.elements, rhs.elements) })
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm_xor_ps(self.elements, rhs.elements) })
    }
}

impl Not for F32x4 {
    type Output = Self;

    /// SSE has no packed NOT; xor against all ones.
    #[inline(always)]
    fn not(self) -> Self::Output {
        self ^ Self::all_ones()
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

    mod construction_tests {
        use super::*;

        #[test]
        fn test_zero_and_splat() {
            assert_eq!(F32x4::zero().to_array(), [0.0; 4]);
            assert_eq!(F32x4::splat(2.5).to_array(), [2.5; 4]);
        }

        #[test]
        fn test_from_slice_zero_fills_trailing_lanes() {
            let v = F32x4::from_slice(&[1.0, 2.0, 3.0]);
            assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.0]);

            let empty = F32x4::from_slice(&[]);
            assert_eq!(empty.to_array(), [0.0; 4]);
        }

        #[test]
        fn test_from_slice_oversized() {
            let v = F32x4::from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]);
            assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        }

        #[test]
        fn test_aligned_round_trip() {
            #[repr(align(16))]
            struct Aligned([f32; 4]);

            let input = Aligned([1.5, -2.5, 3.5, -4.5]);
            let mut output = Aligned([0.0; 4]);
            unsafe {
                let v = F32x4::load_aligned(input.0.as_ptr());
                v.store_aligned(output.0.as_mut_ptr());
            }
            assert_eq!(output.0, input.0);
        }

        #[test]
        fn test_write_to_short_slice() {
            let v = F32x4::new([1.0, 2.0, 3.0, 4.0]);
            let mut out = [9.0f32; 2];
            v.write_to_slice(&mut out);
            assert_eq!(out, [1.0, 2.0]);
        }

        #[test]
        fn test_extract() {
            let v = F32x4::new([1.0, 2.0, 3.0, 4.0]);
            assert_eq!(v.extract(2), 3.0);
        }

        #[test]
        #[should_panic]
        fn test_extract_out_of_range_panics() {
            F32x4::zero().extract(4);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_operators() {
            let a = F32x4::new([1.0, 2.0, 3.0, 4.0]);
            let b = F32x4::new([4.0, 3.0, 2.0, 1.0]);

            assert_eq!((a + b).to_array(), [5.0; 4]);
            assert_eq!((a - b).to_array(), [-3.0, -1.0, 1.0, 3.0]);
            assert_eq!((a * b).to_array(), [4.0, 6.0, 6.0, 4.0]);
            assert_eq!((a / b).to_array(), [0.25, 2.0 / 3.0, 1.5, 4.0]);
            assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
        }

        #[test]
        fn test_compound_assignment() {
            let mut v = F32x4::splat(1.0);
            v += F32x4::splat(2.0);
            v *= F32x4::splat(3.0);
            v -= F32x4::splat(1.0);
            v /= F32x4::splat(4.0);
            assert_eq!(v.to_array(), [2.0; 4]);
        }

        #[test]
        fn test_increment_forms() {
            let mut v = F32x4::new([0.0, 1.0, 2.0, 3.0]);
            let previous = v.post_increment();
            assert_eq!(previous.to_array(), [0.0, 1.0, 2.0, 3.0]);
            assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);

            v.decrement().decrement();
            assert_eq!(v.to_array(), [-1.0, 0.0, 1.0, 2.0]);
        }

        #[test]
        fn test_rounding_and_math() {
            let v = F32x4::new([-1.5, -0.5, 0.5, 1.5]);
            assert_eq!(v.floor().to_array(), [-2.0, -1.0, 0.0, 1.0]);
            assert_eq!(v.ceil().to_array(), [-1.0, -0.0, 1.0, 2.0]);
            assert_eq!(v.abs().to_array(), [1.5, 0.5, 0.5, 1.5]);
            assert_eq!(F32x4::new([1.0, 4.0, 9.0, 16.0]).sqrt().to_array(), [1.0, 2.0, 3.0, 4.0]);
            assert_eq!(v.min(F32x4::zero()).to_array(), [-1.5, -0.5, 0.0, 0.0]);
            assert_eq!(v.max(F32x4::zero()).to_array(), [0.0, 0.0, 0.5, 1.5]);
        }
    }

    mod mask_tests {
        use super::*;

        #[test]
        fn test_comparisons_produce_full_masks() {
            let a = F32x4::new([1.0, 2.0, 3.0, 4.0]);
            let b = F32x4::splat(2.0);

            assert_eq!(bits(a.lt_elements(b)), [u32::MAX, 0, 0, 0]);
            assert_eq!(bits(a.le_elements(b)), [u32::MAX, u32::MAX, 0, 0]);
            assert_eq!(bits(a.gt_elements(b)), [0, 0, u32::MAX, u32::MAX]);
            assert_eq!(bits(a.ge_elements(b)), [0, u32::MAX, u32::MAX, u32::MAX]);
            assert_eq!(bits(a.eq_elements(b)), [0, u32::MAX, 0, 0]);
        }

        #[test]
        fn test_select_preserves_bit_patterns() {
            let a = F32x4::new([-0.0, -1.5, f32::INFINITY, 7.0]);
            let b = F32x4::new([0.0, 2.5, f32::NEG_INFINITY, -7.0]);

            assert_eq!(bits(F32x4::select(a, b, F32x4::all_ones())), bits(a));
            assert_eq!(bits(F32x4::select(a, b, F32x4::zero())), bits(b));

            let mixed = F32x4::new([1.0, 0.0, 1.0, 0.0]).gt_elements(F32x4::splat(0.5));
            assert_eq!(F32x4::select(a, b, mixed).to_array(), [-0.0, 2.5, f32::INFINITY, -7.0]);
        }

        #[test]
        fn test_not_and_and_not() {
            let v = F32x4::splat(1.0);
            assert_eq!(bits(!v), [!1.0f32.to_bits(); 4]);
            assert_eq!(bits(F32x4::all_ones().and_not(v)), [0; 4]);
            assert_eq!(bits(F32x4::zero().and_not(v)), bits(v));
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_cast_vs_convert() {
            let v = F32x4::splat(1.0);
            assert_eq!(v.cast_to_int().to_array(), [0x3F80_0000; 4]);
            assert_eq!(v.convert_to_int().to_array(), [1; 4]);
        }

        #[test]
        fn test_convert_truncates_toward_zero() {
            let v = F32x4::new([-1.7, -0.2, 0.9, 2.999]);
            assert_eq!(v.convert_to_int().to_array(), [-1, 0, 0, 2]);
            assert_eq!(v.floor_to_int().to_array(), [-2, -1, 0, 2]);
        }
    }
}
