//! 3-D simplex noise over whole lanes.
//!
//! Every lane evaluates its own point. Branches of the scalar algorithm (which of the
//! six tetrahedra the point falls in, and whether a corner is within range) become
//! mask lanes, so all lanes run the same instruction stream.

use crate::noise::hash::gradient_dot;
use crate::simd::{FloatLane, IntLane, SimdLane};

/// Skew factor for three dimensions, `1/3`.
pub const F3: f32 = 1.0 / 3.0;

/// Unskew factor for three dimensions, `1/6`.
pub const G3: f32 = 1.0 / 6.0;

/// Squared radius of a corner's contribution.
const FALLOFF: f32 = 0.6;

/// Scales the summed contributions to roughly [-1, 1].
const OUTPUT_SCALE: f32 = 32.0;

/// Contribution of one simplex corner, zero wherever the corner is out of range.
#[inline(always)]
fn corner<F: FloatLane>(seed: F::Int, cell: [F::Int; 3], offset: [F; 3]) -> F {
    let [x, y, z] = offset;
    let t = F::splat(FALLOFF) - x * x - y * y - z * z;
    let in_range = t.ge_elements(F::zero());

    let t2 = t * t;
    (t2 * t2 * gradient_dot(seed, cell, offset)) & in_range
}

/// Simplex noise at `(x, y, z)`, per lane, approximately in [-1, 1].
///
/// # Arguments
///
/// * `seed` - Seed broadcast to every lane (lanes may also carry different seeds)
/// * `x`, `y`, `z` - Sample coordinates
///
/// # Example
///
/// ```rust
/// # #[cfg(lane4)]
/// # {
/// use lanenoise::noise::simplex::simplex3d;
/// use lanenoise::simd::{select::Lane, SimdLane};
///
/// let x = <Lane<f32, 4>>::from_slice(&[0.1, 0.7, 1.3, 2.9]);
/// let zero = <Lane<f32, 4>>::zero();
/// let n = simplex3d(<Lane<i32, 4>>::splat(1337), x, zero, zero);
/// assert!(n.to_vec().iter().all(|v| v.is_finite()));
/// # }
/// ```
#[inline(always)]
pub fn simplex3d<F: FloatLane>(seed: F::Int, x: F, y: F, z: F) -> F {
    let one = F::Int::splat(1);

    // Skew into the cubic lattice and find the cell origin.
    let s = (x + y + z) * F::splat(F3);
    let i = (x + s).floor_to_int();
    let j = (y + s).floor_to_int();
    let k = (z + s).floor_to_int();

    // Unskew the origin back and take the offset from it.
    let t = (i + j + k).convert_to_float() * F::splat(G3);
    let x0 = x - (i.convert_to_float() - t);
    let y0 = y - (j.convert_to_float() - t);
    let z0 = z - (k.convert_to_float() - t);

    let xy = x0.ge_elements(y0).cast_to_int();
    let yz = y0.ge_elements(z0).cast_to_int();
    let xz = x0.ge_elements(z0).cast_to_int();

    // Second and third corners of the tetrahedron, as 0/1 steps.
    let i1 = one & (xy & xz);
    let j1 = one & xy.and_not(yz);
    let k1 = one & xz.and_not(!yz);

    let i2 = one & (xy | xz);
    let j2 = one & (!xy | yz);
    let k2 = one & !(xz & yz);

    let g3 = F::splat(G3);
    let g3_twice = F::splat(2.0 * G3);
    let g3_thrice = F::splat(3.0 * G3);
    let unit = F::splat(1.0);

    let x1 = x0 - i1.convert_to_float() + g3;
    let y1 = y0 - j1.convert_to_float() + g3;
    let z1 = z0 - k1.convert_to_float() + g3;

    let x2 = x0 - i2.convert_to_float() + g3_twice;
    let y2 = y0 - j2.convert_to_float() + g3_twice;
    let z2 = z0 - k2.convert_to_float() + g3_twice;

    let x3 = x0 - unit + g3_thrice;
    let y3 = y0 - unit + g3_thrice;
    let z3 = z0 - unit + g3_thrice;

    let n0 = corner(seed, [i, j, k], [x0, y0, z0]);
    let n1 = corner(seed, [i + i1, j + j1, k + k1], [x1, y1, z1]);
    let n2 = corner(seed, [i + i2, j + j2, k + k2], [x2, y2, z2]);
    let n3 = corner(seed, [i + one, j + one, k + one], [x3, y3, z3]);

    F::splat(OUTPUT_SCALE) * (n0 + n1 + n2 + n3)
}

#[cfg(all(test, lane4))]
mod tests {
    use super::*;
    use crate::simd::select::Lane;

    type F4 = Lane<f32, 4>;
    type I4 = Lane<i32, 4>;

    fn steps(x0: f32, y0: f32, z0: f32) -> ([i32; 3], [i32; 3]) {
        let mask = |a: f32, b: f32| if a >= b { -1 } else { 0 };
        let xy = I4::splat(mask(x0, y0));
        let yz = I4::splat(mask(y0, z0));
        let xz = I4::splat(mask(x0, z0));
        let one = I4::splat(1);

        let first = [
            (one & (xy & xz)).extract(0),
            (one & xy.and_not(yz)).extract(0),
            (one & xz.and_not(!yz)).extract(0),
        ];
        let second = [
            (one & (xy | xz)).extract(0),
            (one & (!xy | yz)).extract(0),
            (one & !(xz & yz)).extract(0),
        ];
        (first, second)
    }

    mod tetrahedron_tests {
        use super::*;

        #[test]
        fn test_corner_steps_for_every_ordering() {
            // x >= y >= z
            assert_eq!(steps(0.3, 0.2, 0.1), ([1, 0, 0], [1, 1, 0]));
            // x >= z > y
            assert_eq!(steps(0.3, 0.1, 0.2), ([1, 0, 0], [1, 0, 1]));
            // z > x >= y
            assert_eq!(steps(0.2, 0.1, 0.3), ([0, 0, 1], [1, 0, 1]));
            // y > x >= z
            assert_eq!(steps(0.2, 0.3, 0.1), ([0, 1, 0], [1, 1, 0]));
            // y >= z > x
            assert_eq!(steps(0.1, 0.3, 0.2), ([0, 1, 0], [0, 1, 1]));
            // z > y > x
            assert_eq!(steps(0.1, 0.2, 0.3), ([0, 0, 1], [0, 1, 1]));
        }

        #[test]
        fn test_ties_take_the_x_y_z_ordering() {
            assert_eq!(steps(0.25, 0.25, 0.25), ([1, 0, 0], [1, 1, 0]));
        }
    }

    mod evaluation_tests {
        use super::*;

        #[test]
        fn test_origin_is_finite_and_deterministic() {
            let zero = F4::zero();
            let a = simplex3d(I4::splat(1337), zero, zero, zero).to_vec();
            let b = simplex3d(I4::splat(1337), zero, zero, zero).to_vec();

            assert!(a.iter().all(|v| v.is_finite()));
            assert_eq!(a, b);
            // The origin corner has a zero offset and the other three are out of range.
            assert!(a.iter().all(|&v| v == 0.0));
        }

        #[test]
        fn test_lanes_are_independent() {
            let seed = I4::splat(42);
            let xs = [0.5f32, 1.25, -3.75, 10.0];
            let together = simplex3d(seed, F4::from_slice(&xs), F4::splat(0.3), F4::splat(-0.7));

            for (lane, &x) in xs.iter().enumerate() {
                let alone = simplex3d(seed, F4::splat(x), F4::splat(0.3), F4::splat(-0.7));
                assert_eq!(together.extract(lane).to_bits(), alone.extract(0).to_bits());
            }
        }

        #[test]
        fn test_junk_neighbours_leave_lane_zero_alone() {
            let seeds = I4::from_slice(&[42, i32::MIN, i32::MIN, i32::MIN]);
            let x = F4::from_slice(&[0.5, f32::NAN, f32::INFINITY, 1e30]);
            let y = F4::from_slice(&[0.3, f32::NEG_INFINITY, f32::NAN, -1e30]);
            let z = F4::from_slice(&[-0.7, 1e30, -1e30, f32::NAN]);

            let mixed = simplex3d(seeds, x, y, z);
            let alone = simplex3d(I4::splat(42), F4::splat(0.5), F4::splat(0.3), F4::splat(-0.7));
            assert_eq!(mixed.extract(0).to_bits(), alone.extract(0).to_bits());
        }

        #[test]
        fn test_per_lane_seeds() {
            let p = F4::splat(0.4);
            let mixed = simplex3d(I4::from_slice(&[1, 2, 1, 2]), p, p, p).to_vec();
            assert_eq!(mixed[0].to_bits(), mixed[2].to_bits());
            assert_eq!(mixed[1].to_bits(), mixed[3].to_bits());
        }
    }
}
