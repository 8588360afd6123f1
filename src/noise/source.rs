//! Lane-level noise sources consumed by the sampling and map layers.

use crate::error::Result;
use crate::noise::{fractal::FractalSettings, simplex::simplex3d};
use crate::simd::{FloatLane, SimdLane};

/// Anything that turns a lane of coordinates into a lane of noise values.
///
/// Sources are shared across rayon workers, hence the `Sync` bound.
pub trait NoiseSource<F: FloatLane>: Sync {
    /// Evaluates the source at every lane of `(x, y, z)`.
    fn sample(&self, x: F, y: F, z: F) -> F;

    /// Rejects parameters that cannot produce meaningful output.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Fractal Brownian motion with the given settings.
impl<F: FloatLane> NoiseSource<F> for FractalSettings {
    #[inline]
    fn sample(&self, x: F, y: F, z: F) -> F {
        self.fbm(x, y, z)
    }

    fn validate(&self) -> Result<()> {
        FractalSettings::validate(self)
    }
}

/// Ridged multifractal noise with the wrapped settings.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ridged(pub FractalSettings);

impl<F: FloatLane> NoiseSource<F> for Ridged {
    #[inline]
    fn sample(&self, x: F, y: F, z: F) -> F {
        self.0.ridged(x, y, z)
    }

    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

/// A single octave of simplex noise at unit frequency.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Simplex {
    pub seed: i32,
}

impl Default for Simplex {
    fn default() -> Self {
        Self {
            seed: FractalSettings::default().seed,
        }
    }
}

impl<F: FloatLane> NoiseSource<F> for Simplex {
    #[inline]
    fn sample(&self, x: F, y: F, z: F) -> F {
        simplex3d(F::Int::splat(self.seed), x, y, z)
    }
}

impl<F, C> NoiseSource<F> for C
where
    F: FloatLane,
    C: Fn(F, F, F) -> F + Sync,
{
    #[inline]
    fn sample(&self, x: F, y: F, z: F) -> F {
        self(x, y, z)
    }
}
