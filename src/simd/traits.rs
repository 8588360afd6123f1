//! Trait layer shared by every lane kind.
//!
//! The crate exposes a closed set of four lane types (`F32x4`, `F32x8`, `I32x4`,
//! `I32x8`). They are not meant to be extended from outside; the traits exist so that
//! the noise kernels can be written once and instantiated for either width.
//!
//! # Mask lanes
//!
//! Every comparison returns a lane of the *same* type whose elements are either all
//! ones or all zeros. Masks feed [`SimdLane::select`] and the bitwise operators; they
//! are never reduced to a single `bool`.
//!
//! # Cast vs convert
//!
//! - `cast_to_*` reinterprets the 32-bit pattern of every element (free).
//! - `convert_to_*` changes the numeric value (`f32 -> i32` truncates toward zero).

use std::fmt::Debug;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// Operations common to float and integer lanes.
pub trait SimdLane:
    Copy
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    /// Element type held in every lane.
    type Scalar: Copy + Default + Debug + PartialEq + Send + Sync;

    /// Number of elements.
    const LANES: usize;

    /// Required memory alignment in bytes (`LANES * 4`).
    const ALIGNMENT: usize;

    /// Scalar value added by the increment/decrement helpers.
    const ONE: Self::Scalar;

    /// All lanes set to zero.
    fn zero() -> Self;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Every bit set, in every lane. This is the canonical "true" mask.
    fn all_ones() -> Self;

    /// Builds a lane from up to `LANES` values.
    ///
    /// Missing trailing lanes are zero, extra values are ignored. Callers rely on the
    /// zero fill when packing 3-component data into a 4-wide lane.
    fn from_slice(values: &[Self::Scalar]) -> Self;

    /// Writes `min(out.len(), LANES)` leading elements into `out`.
    fn write_to_slice(self, out: &mut [Self::Scalar]);

    /// Loads `LANES` elements from memory aligned to [`SimdLane::ALIGNMENT`].
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to `ALIGNMENT` bytes and valid for `LANES` reads.
    unsafe fn load_aligned(ptr: *const Self::Scalar) -> Self;

    /// Loads `LANES` elements from memory with any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANES` reads.
    unsafe fn load_unaligned(ptr: *const Self::Scalar) -> Self;

    /// Stores every element to memory aligned to [`SimdLane::ALIGNMENT`].
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to `ALIGNMENT` bytes and valid for `LANES` writes.
    unsafe fn store_aligned(self, ptr: *mut Self::Scalar);

    /// Stores every element to memory with any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANES` writes.
    unsafe fn store_unaligned(self, ptr: *mut Self::Scalar);

    /// `!self & rhs`, bit for bit.
    fn and_not(self, rhs: Self) -> Self;

    fn eq_elements(self, rhs: Self) -> Self;
    fn lt_elements(self, rhs: Self) -> Self;
    fn le_elements(self, rhs: Self) -> Self;
    fn gt_elements(self, rhs: Self) -> Self;
    fn ge_elements(self, rhs: Self) -> Self;

    /// Element-wise minimum.
    fn min(self, rhs: Self) -> Self;

    /// Element-wise maximum.
    fn max(self, rhs: Self) -> Self;

    /// Per lane, `a` where `mask` is all ones and `b` where it is all zeros.
    ///
    /// The blend is bitwise, `(mask & a) | (!mask & b)`, so float payloads, signed
    /// zeros and negative integers pass through unchanged.
    #[inline(always)]
    fn select(a: Self, b: Self, mask: Self) -> Self {
        (mask & a) | mask.and_not(b)
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`.
    #[inline]
    fn extract(self, index: usize) -> Self::Scalar {
        assert!(
            index < Self::LANES,
            "lane index {index} out of range for {} lanes",
            Self::LANES
        );
        let mut out = vec![Self::Scalar::default(); Self::LANES];
        self.write_to_slice(&mut out);
        out[index]
    }

    /// Copies every element into a new `Vec`.
    #[inline]
    fn to_vec(self) -> Vec<Self::Scalar> {
        let mut out = vec![Self::Scalar::default(); Self::LANES];
        self.write_to_slice(&mut out);
        out
    }

    /// Adds one to every lane in place and returns the updated lane (`++x`).
    #[inline(always)]
    fn increment(&mut self) -> &mut Self {
        *self += Self::splat(Self::ONE);
        self
    }

    /// Adds one to every lane in place and returns the previous value (`x++`).
    #[inline(always)]
    fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += Self::splat(Self::ONE);
        previous
    }

    /// Subtracts one from every lane in place and returns the updated lane (`--x`).
    #[inline(always)]
    fn decrement(&mut self) -> &mut Self {
        *self -= Self::splat(Self::ONE);
        self
    }

    /// Subtracts one from every lane in place and returns the previous value (`x--`).
    #[inline(always)]
    fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= Self::splat(Self::ONE);
        previous
    }
}

/// Single-precision float lanes.
pub trait FloatLane:
    SimdLane<Scalar = f32> + Div<Output = Self> + DivAssign + Neg<Output = Self>
{
    /// Integer lane of the same width.
    type Int: IntLane<Float = Self>;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn sqrt(self) -> Self;

    /// Clears the sign bit of every element.
    fn abs(self) -> Self;

    /// Reinterprets the bits of every element as `i32`.
    fn cast_to_int(self) -> Self::Int;

    /// Converts every element to `i32`, truncating toward zero.
    ///
    /// Out-of-range inputs and NaN are platform defined (x86 yields `i32::MIN`, NEON
    /// saturates and maps NaN to zero).
    fn convert_to_int(self) -> Self::Int;

    /// `floor` followed by `convert_to_int`.
    #[inline(always)]
    fn floor_to_int(self) -> Self::Int {
        self.floor().convert_to_int()
    }
}

/// 32-bit signed integer lanes.
///
/// There is deliberately no `Div` implementation: the hardware has no packed integer
/// divide. [`IntLane::div_through_float`] performs the round trip explicitly.
pub trait IntLane:
    SimdLane<Scalar = i32>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Shl<Self, Output = Self>
    + Shr<Self, Output = Self>
    + ShlAssign<u32>
    + ShrAssign<u32>
{
    /// Float lane of the same width.
    type Float: FloatLane<Int = Self>;

    /// Reinterprets the bits of every element as `f32`.
    fn cast_to_float(self) -> Self::Float;

    /// Converts every element to the nearest `f32`.
    fn convert_to_float(self) -> Self::Float;

    /// Divides through `f32` and truncates the quotient back to `i32`.
    ///
    /// Exact for operands whose magnitude fits the 24-bit float mantissa.
    #[inline(always)]
    fn div_through_float(self, rhs: Self) -> Self {
        (self.convert_to_float() / rhs.convert_to_float()).convert_to_int()
    }
}
