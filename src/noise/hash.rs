//! Lattice hashing and gradient selection.
//!
//! Both functions work on whole lanes: each lane hashes its own lattice point, and
//! the gradient is picked with masks and sign-bit flips rather than a lookup table.
//! Integer arithmetic wraps, so the same inputs produce the same bits at every lane
//! width.

use crate::simd::{FloatLane, IntLane, SimdLane};

/// Multiplier applied to the x lattice coordinate.
pub const X_PRIME: i32 = 1619;

/// Multiplier applied to the y lattice coordinate.
pub const Y_PRIME: i32 = 31337;

/// Multiplier applied to the z lattice coordinate.
pub const Z_PRIME: i32 = 6971;

/// Multiplier of the cubing step.
pub const HASH_MULTIPLIER: i32 = 60493;

/// Pseudo-random 32-bit value per lane for the lattice point `(x, y, z)`.
///
/// `h = seed + x*1619 + y*31337 + z*6971`, then `h = h*h*60493*h`, then
/// `h ^ (h >> 13)` with a logical shift.
#[inline(always)]
pub fn hash<I: IntLane>(seed: I, x: I, y: I, z: I) -> I {
    let mut h = seed + x * I::splat(X_PRIME) + y * I::splat(Y_PRIME) + z * I::splat(Z_PRIME);
    h = h * h * I::splat(HASH_MULTIPLIER) * h;
    (h >> 13) ^ h
}

/// Dot product of the offset with the gradient chosen by hashing `cell`.
///
/// The low four bits of the hash pick the first component (`x` below 8, else `y`),
/// the second component (`y` below 4, `x` for 12 and 14, else `z`), and the sign of
/// each from bits 0 and 1.
#[inline(always)]
pub fn gradient_dot<F: FloatLane>(seed: F::Int, cell: [F::Int; 3], offset: [F; 3]) -> F {
    let [xi, yi, zi] = cell;
    let [x, y, z] = offset;

    let h = hash(seed, xi, yi, zi) & F::Int::splat(15);

    let u_is_x = h.lt_elements(F::Int::splat(8)).cast_to_float();
    let u = F::select(x, y, u_is_x);

    let v_is_y = h.lt_elements(F::Int::splat(4)).cast_to_float();
    let v_is_x = (h.eq_elements(F::Int::splat(12)) | h.eq_elements(F::Int::splat(14)))
        .cast_to_float();
    let v = F::select(y, F::select(x, z, v_is_x), v_is_y);

    let u_sign = ((h & F::Int::splat(1)) << 31).cast_to_float();
    let v_sign = ((h & F::Int::splat(2)) << 30).cast_to_float();

    (u ^ u_sign) + (v ^ v_sign)
}
