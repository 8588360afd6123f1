//! Noise maps: 2-D grids of noise sampled over a plane, a cylinder or a sphere.
//!
//! A map owns only its bounds. [`build`](PlaneMap::build) walks a `width × height`
//! grid over those bounds, turns every grid point into a 3-D coordinate and samples a
//! [`NoiseSource`] there. Rows are filled in parallel on the rayon pool.
//!
//! Grid sample `k` of `n` along an axis sits at `lower + (upper - lower) * k / (n - 1)`,
//! so both bounds are included; a single sample sits at `lower`.
//!
//! ```rust
//! # #[cfg(lane8)]
//! # {
//! use lanenoise::map::SphereMap;
//! use lanenoise::noise::FractalSettings;
//! use lanenoise::simd::select::Lane;
//!
//! let map = SphereMap::default();
//! let grid = map
//!     .build::<Lane<f32, 8>, _>(64, 32, &FractalSettings::default())
//!     .unwrap();
//! assert_eq!(grid.dim(), (32, 64));
//! # }
//! ```

use ndarray::Array2;
use rayon::prelude::*;

use crate::{
    error::{invalid_bounds, invalid_resolution, Result},
    noise::NoiseSource,
    simd::FloatLane,
    slice::sample_serial,
};

// ================================================================================================
// Bounds
// ================================================================================================

/// A closed, finite `[lower, upper]` interval.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(invalid_bounds(lower, upper, "bounds must be finite"));
        }
        if lower > upper {
            return Err(invalid_bounds(
                lower,
                upper,
                "lower bound exceeds upper bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    fn pair(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Position of sample `k` out of `n` evenly spaced samples.
    #[inline]
    fn at(&self, k: usize, n: usize) -> f64 {
        if n <= 1 {
            return self.lower;
        }
        self.lower + (self.upper - self.lower) * k as f64 / (n - 1) as f64
    }
}

// ================================================================================================
// Grid builder
// ================================================================================================

/// Samples `source` at `project(u, v)` for every grid point, one row per `v`.
fn build_grid<F, S>(
    kind: &str,
    width: usize,
    height: usize,
    u: Bounds,
    v: Bounds,
    project: impl Fn(f64, f64) -> [f64; 3] + Sync,
    source: &S,
) -> Result<Array2<f32>>
where
    F: FloatLane,
    S: NoiseSource<F> + ?Sized,
{
    if width == 0 || height == 0 {
        return Err(invalid_resolution(
            width,
            height,
            "width and height must be non-zero",
        ));
    }
    let len = width
        .checked_mul(height)
        .ok_or_else(|| invalid_resolution(width, height, "grid size overflows usize"))?;

    source.validate()?;

    log::debug!(
        "building {}x{} {} map with {} ({} lanes)",
        width,
        height,
        kind,
        std::any::type_name::<F>(),
        F::LANES
    );

    let mut data = vec![0.0f32; len];
    data.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out)| {
            let row_position = v.at(row, height);
            let mut xs = Vec::with_capacity(width);
            let mut ys = Vec::with_capacity(width);
            let mut zs = Vec::with_capacity(width);

            for column in 0..width {
                let [x, y, z] = project(u.at(column, width), row_position);
                xs.push(x as f32);
                ys.push(y as f32);
                zs.push(z as f32);
            }

            sample_serial(source, &xs, &ys, &zs, out);
        });

    Array2::from_shape_vec((height, width), data)
        .map_err(|error| invalid_resolution(width, height, error.to_string()))
}

// ================================================================================================
// Plane
// ================================================================================================

/// Rectangle `x_bounds × y_bounds` in the `z = 0` plane.
///
/// Columns follow `x`, rows follow `y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMap {
    x_bounds: Bounds,
    y_bounds: Bounds,
}

impl Default for PlaneMap {
    fn default() -> Self {
        Self {
            x_bounds: Bounds {
                lower: -1.0,
                upper: 1.0,
            },
            y_bounds: Bounds {
                lower: -1.0,
                upper: 1.0,
            },
        }
    }
}

impl PlaneMap {
    pub fn new(x_bounds: (f64, f64), y_bounds: (f64, f64)) -> Result<Self> {
        Ok(Self {
            x_bounds: Bounds::new(x_bounds.0, x_bounds.1)?,
            y_bounds: Bounds::new(y_bounds.0, y_bounds.1)?,
        })
    }

    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_bounds.pair()
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        self.y_bounds.pair()
    }

    pub fn set_x_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.x_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    pub fn set_y_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.y_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    /// Samples `source` on a `width × height` grid; the array has `height` rows.
    pub fn build<F, S>(&self, width: usize, height: usize, source: &S) -> Result<Array2<f32>>
    where
        F: FloatLane,
        S: NoiseSource<F> + ?Sized,
    {
        build_grid(
            "plane",
            width,
            height,
            self.x_bounds,
            self.y_bounds,
            |x, y| [x, y, 0.0],
            source,
        )
    }
}

// ================================================================================================
// Cylinder
// ================================================================================================

/// Unit-radius cylinder around the y axis.
///
/// Columns follow the angle in degrees (`(cos a, h, sin a)`), rows follow the height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CylinderMap {
    angle_bounds: Bounds,
    height_bounds: Bounds,
}

impl Default for CylinderMap {
    fn default() -> Self {
        Self {
            angle_bounds: Bounds {
                lower: -180.0,
                upper: 180.0,
            },
            height_bounds: Bounds {
                lower: -1.0,
                upper: 1.0,
            },
        }
    }
}

impl CylinderMap {
    pub fn new(angle_bounds: (f64, f64), height_bounds: (f64, f64)) -> Result<Self> {
        Ok(Self {
            angle_bounds: Bounds::new(angle_bounds.0, angle_bounds.1)?,
            height_bounds: Bounds::new(height_bounds.0, height_bounds.1)?,
        })
    }

    pub fn angle_bounds(&self) -> (f64, f64) {
        self.angle_bounds.pair()
    }

    pub fn height_bounds(&self) -> (f64, f64) {
        self.height_bounds.pair()
    }

    pub fn set_angle_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.angle_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    pub fn set_height_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.height_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    /// Samples `source` on a `width × height` grid; the array has `height` rows.
    pub fn build<F, S>(&self, width: usize, height: usize, source: &S) -> Result<Array2<f32>>
    where
        F: FloatLane,
        S: NoiseSource<F> + ?Sized,
    {
        build_grid(
            "cylinder",
            width,
            height,
            self.angle_bounds,
            self.height_bounds,
            |angle, h| {
                let (sin, cos) = angle.to_radians().sin_cos();
                [cos, h, sin]
            },
            source,
        )
    }
}

// ================================================================================================
// Sphere
// ================================================================================================

/// Unit sphere.
///
/// Columns follow longitude λ, rows follow latitude φ, both in degrees; the point is
/// `(cos φ cos λ, sin φ, cos φ sin λ)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereMap {
    longitude_bounds: Bounds,
    latitude_bounds: Bounds,
}

impl Default for SphereMap {
    fn default() -> Self {
        Self {
            longitude_bounds: Bounds {
                lower: -180.0,
                upper: 180.0,
            },
            latitude_bounds: Bounds {
                lower: -90.0,
                upper: 90.0,
            },
        }
    }
}

impl SphereMap {
    pub fn new(longitude_bounds: (f64, f64), latitude_bounds: (f64, f64)) -> Result<Self> {
        Ok(Self {
            longitude_bounds: Bounds::new(longitude_bounds.0, longitude_bounds.1)?,
            latitude_bounds: Bounds::new(latitude_bounds.0, latitude_bounds.1)?,
        })
    }

    pub fn longitude_bounds(&self) -> (f64, f64) {
        self.longitude_bounds.pair()
    }

    pub fn latitude_bounds(&self) -> (f64, f64) {
        self.latitude_bounds.pair()
    }

    pub fn set_longitude_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.longitude_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    pub fn set_latitude_bounds(&mut self, lower: f64, upper: f64) -> Result<()> {
        self.latitude_bounds = Bounds::new(lower, upper)?;
        Ok(())
    }

    /// Samples `source` on a `width × height` grid; the array has `height` rows.
    pub fn build<F, S>(&self, width: usize, height: usize, source: &S) -> Result<Array2<f32>>
    where
        F: FloatLane,
        S: NoiseSource<F> + ?Sized,
    {
        build_grid(
            "sphere",
            width,
            height,
            self.longitude_bounds,
            self.latitude_bounds,
            |longitude, latitude| {
                let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
                let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
                [cos_lat * cos_lon, sin_lat, cos_lat * sin_lon]
            },
            source,
        )
    }
}
