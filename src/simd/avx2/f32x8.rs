//! AVX2 8-lane f32 SIMD vector implementation.
//!
//! This module provides `F32x8`, a SIMD vector type that wraps Intel's `__m256`
//! register to operate on 8 single-precision floating-point values simultaneously
//! using 256-bit AVX instructions.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel processors with AVX2 support (Haswell and later)
//! - **Target Architecture**: x86_64 (and x86)
//! - **Runtime Detection**: enabled by the build script as `cfg(avx2)`
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32)
//! - **Memory Alignment**: 32-byte aligned data for `load_aligned`/`store_aligned`
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `From<&[f32]>` / `from_slice()` - loading with automatic partial handling
//! - `load_aligned()`, `load_unaligned()` - direct memory loading
//! - `load_partial()` - masked partial loading for sizes < 8
//! - `store_aligned()`, `store_unaligned()`, `store_partial()` - direct memory storing
//!
//! ## Lane Operations
//! - Element-wise `+`, `-`, `*`, `/`, unary `-`
//! - Mask comparisons, bitwise operators, `select`
//! - `floor()`, `ceil()`, `sqrt()`, `abs()`, `min()`, `max()`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::simd::{avx2::i32x8::I32x8, FloatLane, SimdLane};

/// AVX2 memory alignment requirement in bytes.
///
/// `_mm256_load_ps` and `_mm256_store_ps` fault on addresses that are not
/// 32-byte aligned.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// # Usage
///
/// ```rust
/// # #[cfg(avx2)]
/// # {
/// use lanenoise::simd::{F32x8, SimdLane, FloatLane};
///
/// let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let vector = F32x8::from(data.as_slice());
/// let rounded = (vector * F32x8::splat(0.5)).floor();
/// assert_eq!(rounded.to_array(), [0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x8 {
    /// AVX 256-bit register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

const _: () = assert!(std::mem::align_of::<F32x8>() == AVX_ALIGNMENT);
const _: () = assert!(std::mem::size_of::<F32x8>() == LANE_COUNT * 4);

/// Mask with the first `size` lanes set, for `maskload`/`maskstore`.
#[inline(always)]
pub(crate) fn partial_mask(size: usize) -> __m256i {
    unsafe {
        _mm256_cmpgt_epi32(
            _mm256_set1_epi32(size as i32),
            _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7),
        )
    }
}

impl F32x8 {
    /// Wraps an existing register.
    #[inline(always)]
    pub(crate) fn from_raw(elements: __m256) -> Self {
        Self { elements }
    }

    /// Creates a vector from exactly eight values, lane 0 first.
    #[inline(always)]
    pub fn new(values: [f32; LANE_COUNT]) -> Self {
        Self::from_raw(unsafe { _mm256_loadu_ps(values.as_ptr()) })
    }

    /// Copies the eight lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { _mm256_storeu_ps(out.as_mut_ptr(), self.elements) };
        out
    }

    /// Loads fewer than 8 elements using masked loading operations.
    ///
    /// Lanes at or beyond `size` are zero; memory past `ptr + size` is never read.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` reads.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `size >= 8` or if the pointer is null.
    #[inline(always)]
    pub unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm256_maskload_ps(ptr, partial_mask(size)))
    }

    /// Stores the first `size` lanes with a masked store.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` writes.
    #[inline(always)]
    pub unsafe fn store_partial(self, ptr: *mut f32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_maskstore_ps(ptr, partial_mask(size), self.elements)
    }
}

impl Default for F32x8 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f32; LANE_COUNT]> for F32x8 {
    fn from(values: [f32; LANE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for F32x8 {
    /// Creates an F32x8 vector from a slice of f32 values.
    ///
    /// - For slices with 8 or more elements: full unaligned load of the first 8
    /// - For shorter slices: masked partial load with zero-padding
    fn from(slice: &[f32]) -> Self {
        Self::from_slice(slice)
    }
}

impl SimdLane for F32x8 {
    type Scalar = f32;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = AVX_ALIGNMENT;
    const ONE: f32 = 1.0;

    #[inline(always)]
    fn zero() -> Self {
        Self::from_raw(unsafe { _mm256_setzero_ps() })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_raw(unsafe { _mm256_set1_ps(value) })
    }

    #[inline(always)]
    fn all_ones() -> Self {
        Self::from_raw(unsafe { _mm256_castsi256_ps(_mm256_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn from_slice(values: &[f32]) -> Self {
        match values.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less if values.is_empty() => Self::zero(),
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
            std::cmp::Ordering::Less if out.is_empty() => {}
            std::cmp::Ordering::Less => unsafe { self.store_partial(out.as_mut_ptr(), out.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                self.store_unaligned(out.as_mut_ptr())
            },
        }
    }

    /// Loads 8 elements from 32-byte aligned memory.
    ///
    /// This is the fastest loading method when alignment is guaranteed.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            (ptr as usize) % AVX_ALIGNMENT == 0,
            "Pointer must be {AVX_ALIGNMENT}-byte aligned"
        );

        Self::from_raw(_mm256_load_ps(ptr))
    }

    /// Loads 8 elements from unaligned memory with `_mm256_loadu_ps`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self::from_raw(_mm256_loadu_ps(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(
            (ptr as usize) % AVX_ALIGNMENT == 0,
            "Pointer must be {AVX_ALIGNMENT}-byte aligned"
        );

        _mm256_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_andnot_ps(self.elements, rhs.elements) })
    }

    // Ordered, non-signalling predicates: any comparison against NaN is false.
    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmp_ps::<_CMP_EQ_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmp_ps::<_CMP_LT_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmp_ps::<_CMP_LE_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmp_ps::<_CMP_GT_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_cmp_ps::<_CMP_GE_OQ>(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_min_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_raw(unsafe { _mm256_max_ps(self.elements, rhs.elements) })
    }
}

impl FloatLane for F32x8 {
    type Int = I32x8;

    #[inline(always)]
    fn floor(self) -> Self {
        Self::from_raw(unsafe { _mm256_floor_ps(self.elements) })
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self::from_raw(unsafe { _mm256_ceil_ps(self.elements) })
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_raw(unsafe { _mm256_sqrt_ps(self.elements) })
    }

    /// Clears the sign bit of every element.
    #[inline(always)]
    fn abs(self) -> Self {
        Self::splat(-0.0).and_not(self)
    }

    #[inline(always)]
    fn cast_to_int(self) -> I32x8 {
        I32x8::from_raw(unsafe { _mm256_castps_si256(self.elements) })
    }

    #[inline(always)]
    fn convert_to_int(self) -> I32x8 {
        I32x8::from_raw(unsafe { _mm256_cvttps_epi32(self.elements) })
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_add_ps(self.elements, rhs.elements) })
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_sub_ps(self.elements, rhs.elements) })
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_mul_ps(self.elements, rhs.elements) })
    }
}

impl Div for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_div_ps(self.elements, rhs.elements) })
    }
}

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self ^ Self::splat(-0.0)
    }
}

impl BitAnd for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_and_ps(self.elements, rhs.elements) })
    }
}

impl BitOr for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_or_ps(self.elements, rhs.elements) })
    }
}

impl BitXor for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_raw(unsafe { _mm256_xor_ps(self.elements, rhs.elements) })
    }
}

impl Not for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self ^ Self::all_ones()
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
