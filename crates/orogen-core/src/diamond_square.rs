//! Diamond-square midpoint displacement terrain generation.
//!
//! Generates fractal-like heightmaps by recursively averaging and perturbing
//! grid midpoints at halving resolutions. Perturbation amplitude decays by a
//! caller-chosen roughness factor each pass, so coarse passes shape the large
//! landforms and fine passes add surface detail.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{OrogenError, Result};
use crate::heightmap::Heightmap;

/// Default roughness when none is specified.
pub const DEFAULT_ROUGHNESS: f32 = 0.7;

/// Largest accepted size exponent. `size = 12` already yields a
/// 4097 x 4097 grid (~67 MB of f32); anything beyond that is almost
/// certainly a caller mistake.
pub const MAX_SIZE: u32 = 12;

/// Diamond-square heightmap generator.
///
/// Produces a square grid of side `2^size + 1`. The caller supplies the
/// random source, so a seeded RNG gives reproducible terrain and an
/// entropy-seeded RNG gives fresh terrain each run.
///
/// # Example
/// ```
/// use orogen_core::DiamondSquare;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let map = DiamondSquare::new(4).with_roughness(0.6).generate(&mut rng).unwrap();
/// assert_eq!(map.side(), 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondSquare {
    size: u32,
    roughness: f32,
}

impl DiamondSquare {
    /// Creates a generator for a grid of side `2^size + 1` with the
    /// default roughness.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            roughness: DEFAULT_ROUGHNESS,
        }
    }

    /// Sets the roughness factor. Must lie in the open interval `(0, 1)`;
    /// validated when the generator runs. Lower values produce smoother
    /// terrain.
    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// The configured size exponent.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The configured roughness factor.
    #[must_use]
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Runs the generator, drawing perturbations from `rng` as standard
    /// normal samples.
    ///
    /// # Errors
    /// Returns [`OrogenError::InvalidParameter`] if `size` is outside
    /// `[1, MAX_SIZE]` or `roughness` is outside `(0, 1)`. No partially
    /// computed grid is ever returned.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Heightmap> {
        self.generate_with(|| rng.sample(StandardNormal))
    }

    /// Runs the generator with an explicit noise source.
    ///
    /// `noise` is called once per cell (four corner seeds first, then one
    /// call per midpoint in pass order) and should return one standard
    /// normal sample; the generator applies the per-pass amplitude scaling
    /// itself. [`generate`](Self::generate) is the usual entry point; this
    /// seam exists for custom noise sources and exact-value testing.
    ///
    /// # Errors
    /// Same contract as [`generate`](Self::generate).
    pub fn generate_with(&self, mut noise: impl FnMut() -> f32) -> Result<Heightmap> {
        self.validate()?;

        let n = (1_usize << self.size) + 1;
        let mut map = Heightmap::new(n);

        // Seed the corners; no later pass touches them.
        map.set(0, 0, noise());
        map.set(0, n - 1, noise());
        map.set(n - 1, 0, noise());
        map.set(n - 1, n - 1, noise());

        let mut step = n - 1;
        let mut scale = 1.0_f32;

        while step > 1 {
            let half = step / 2;
            log::debug!("diamond-square pass: step={step}, scale={scale}");

            // Diamond step: center of each square gets the mean of its four
            // corners plus scaled noise.
            for i in (0..n - 1).step_by(step) {
                for j in (0..n - 1).step_by(step) {
                    let avg = (map.get(i, j)
                        + map.get(i, j + step)
                        + map.get(i + step, j)
                        + map.get(i + step, j + step))
                        / 4.0;
                    map.set(i + half, j + half, avg + noise() * scale);
                }
            }

            // Square step: each edge midpoint gets the mean of its in-bounds
            // axis-aligned neighbors at distance `half`. Cells at the grid
            // boundary have 2 or 3 such neighbors; never wrap or reflect.
            for i in (0..n).step_by(half) {
                let start = (i + half) % step;
                for j in (start..n).step_by(step) {
                    let mut total = 0.0_f32;
                    let mut count = 0_u8;

                    if i >= half {
                        total += map.get(i - half, j);
                        count += 1;
                    }
                    if i + half < n {
                        total += map.get(i + half, j);
                        count += 1;
                    }
                    if j >= half {
                        total += map.get(i, j - half);
                        count += 1;
                    }
                    if j + half < n {
                        total += map.get(i, j + half);
                        count += 1;
                    }

                    map.set(i, j, total / f32::from(count) + noise() * scale);
                }
            }

            step = half;
            scale *= self.roughness;
        }

        Ok(map)
    }

    fn validate(&self) -> Result<()> {
        if self.size < 1 || self.size > MAX_SIZE {
            return Err(OrogenError::invalid_parameter(
                "size",
                format!("{} is outside [1, {MAX_SIZE}]", self.size),
            ));
        }
        if !self.roughness.is_finite() || self.roughness <= 0.0 || self.roughness >= 1.0 {
            return Err(OrogenError::invalid_parameter(
                "roughness",
                format!("{} is outside the open interval (0, 1)", self.roughness),
            ));
        }
        Ok(())
    }
}
