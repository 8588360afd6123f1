//! Fractal compositing of simplex octaves.
//!
//! Both compositors walk the same [`Octaves`] schedule: octave `n` samples at
//! `frequency * lacunarity^n` and is weighted by `gain^n`.

use rand::Rng;

use crate::error::{validation_error, Result};
use crate::noise::simplex::simplex3d;
use crate::simd::{FloatLane, SimdLane};
use crate::MAX_OCTAVES;

/// Frequency and weight of a single octave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Octave {
    /// Zero-based position in the schedule.
    pub index: u32,
    /// Coordinate multiplier for this octave.
    pub frequency: f32,
    /// Weight of this octave's sample in the sum.
    pub amplitude: f32,
}

/// Iterator over the octave schedule of a fractal sum.
///
/// Frequency and amplitude are accumulated by repeated multiplication, so the
/// schedule matches what a sequential loop would compute bit for bit.
#[derive(Clone, Debug)]
pub struct Octaves {
    index: u32,
    count: u32,
    frequency: f32,
    amplitude: f32,
    lacunarity: f32,
    gain: f32,
}

impl Octaves {
    /// Schedule of `octaves` octaves starting at `frequency` with amplitude 1.
    pub fn new(frequency: f32, octaves: u32, lacunarity: f32, gain: f32) -> Self {
        Self {
            index: 0,
            count: octaves,
            frequency,
            amplitude: 1.0,
            lacunarity,
            gain,
        }
    }
}

impl Iterator for Octaves {
    type Item = Octave;

    fn next(&mut self) -> Option<Octave> {
        if self.index >= self.count {
            return None;
        }

        let octave = Octave {
            index: self.index,
            frequency: self.frequency,
            amplitude: self.amplitude,
        };
        self.index += 1;
        self.frequency *= self.lacunarity;
        self.amplitude *= self.gain;
        Some(octave)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Octaves {}

/// Fractal Brownian motion: the weighted sum of `octaves` simplex samples.
///
/// Zero octaves yield an all-zero lane. With one octave the result equals
/// `simplex3d` at `(x, y, z) * frequency`.
///
/// # Arguments
///
/// * `seed` - Seed broadcast to every lane
/// * `x`, `y`, `z` - Sample coordinates
/// * `frequency` - Coordinate multiplier of the first octave
/// * `octaves` - Number of octaves to sum
/// * `lacunarity` - Frequency ratio between consecutive octaves
/// * `gain` - Amplitude ratio between consecutive octaves
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn fbm<F: FloatLane>(
    seed: i32,
    x: F,
    y: F,
    z: F,
    frequency: f32,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
) -> F {
    let seed = F::Int::splat(seed);

    Octaves::new(frequency, octaves, lacunarity, gain).fold(F::zero(), |sum, octave| {
        let f = F::splat(octave.frequency);
        sum + simplex3d(seed, x * f, y * f, z * f) * F::splat(octave.amplitude)
    })
}

/// Ridged multifractal: like [`fbm`], but each octave contributes
/// `(1 - |n|)^2 * amplitude`, which turns zero crossings into sharp ridges.
///
/// The result lies in `[0, sum of amplitudes]`.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn ridged_multi<F: FloatLane>(
    seed: i32,
    x: F,
    y: F,
    z: F,
    frequency: f32,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
) -> F {
    let seed = F::Int::splat(seed);
    let one = F::splat(1.0);

    Octaves::new(frequency, octaves, lacunarity, gain).fold(F::zero(), |sum, octave| {
        let f = F::splat(octave.frequency);
        let ridge = one - simplex3d(seed, x * f, y * f, z * f).abs();
        sum + ridge * ridge * F::splat(octave.amplitude)
    })
}

/// Parameters of a fractal noise field.
///
/// ```rust
/// use lanenoise::noise::FractalSettings;
///
/// let settings = FractalSettings::default().with_octaves(5).with_frequency(0.02);
/// assert!(settings.validate().is_ok());
/// assert!(settings.with_gain(f32::NAN).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractalSettings {
    pub seed: i32,
    pub frequency: f32,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            seed: 1337,
            frequency: 1.0,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl FractalSettings {
    /// Sets the seed broadcast to every lane.
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the coordinate multiplier of the first octave.
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the number of octaves summed.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the frequency ratio between consecutive octaves.
    pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the amplitude ratio between consecutive octaves.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Replaces the seed with one drawn from `rng`.
    pub fn random_seed<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.seed = rng.random();
        self
    }

    /// Checks that every parameter is finite and the octave count is at most
    /// [`MAX_OCTAVES`].
    pub fn validate(&self) -> Result<()> {
        let parameters = [
            ("frequency", self.frequency),
            ("lacunarity", self.lacunarity),
            ("gain", self.gain),
        ];
        for (name, value) in parameters {
            if !value.is_finite() {
                return Err(validation_error(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.octaves > MAX_OCTAVES {
            return Err(validation_error(format!(
                "octave count {} exceeds the maximum of {MAX_OCTAVES}",
                self.octaves
            )));
        }

        Ok(())
    }

    /// The octave schedule these settings describe.
    pub fn octaves(&self) -> Octaves {
        Octaves::new(self.frequency, self.octaves, self.lacunarity, self.gain)
    }

    /// Sum of the octave amplitudes, the largest magnitude [`ridged`](Self::ridged)
    /// can reach.
    pub fn amplitude_sum(&self) -> f32 {
        self.octaves().map(|octave| octave.amplitude).sum()
    }

    #[inline]
    pub fn fbm<F: FloatLane>(&self, x: F, y: F, z: F) -> F {
        fbm(
            self.seed,
            x,
            y,
            z,
            self.frequency,
            self.octaves,
            self.lacunarity,
            self.gain,
        )
    }

    #[inline]
    pub fn ridged<F: FloatLane>(&self, x: F, y: F, z: F) -> F {
        ridged_multi(
            self.seed,
            x,
            y,
            z,
            self.frequency,
            self.octaves,
            self.lacunarity,
            self.gain,
        )
    }
}
