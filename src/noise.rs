use std::f64::consts::TAU;
use std::path::Path;

use log::debug;
use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

use crate::buffer::{Layout, PatternBuffer};
use crate::error::{Error, Result};
use crate::writer::write_image;

const MEAN: f64 = 0.0;
const VARIANCE: f64 = 0.1;

/// Gaussian noise field, one or three channels.
///
/// Samples are `N(0, 0.1) * 255` cast to `u8` with wraparound, so negative
/// draws land near the top of the range instead of at zero.
pub struct Noise {
    monochrome: bool,
    buffer: PatternBuffer,
}

impl Noise {
    pub fn new<R: RngCore>(height: usize, width: usize, monochrome: bool, rng: &mut R) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid(format!(
                "noise shape must be positive, got ({height}, {width})"
            )));
        }

        let layout = if monochrome { Layout::Gray } else { Layout::Rgb };
        let mut buffer = PatternBuffer::new(height, width, layout)?;

        let mut gauss = Gaussian::new(MEAN, VARIANCE.sqrt());
        for sample in buffer.samples_mut() {
            *sample = quantize(gauss.sample(rng) * 255.0);
        }

        debug!(
            "generated {height}x{width} noise, {} channel(s)",
            layout.channels()
        );

        Ok(Self { monochrome, buffer })
    }

    pub fn from_seed(height: usize, width: usize, monochrome: bool, seed: u64) -> Result<Self> {
        let mut rng = Xoshiro256Plus::seed_from_u64(seed);
        Self::new(height, width, monochrome, &mut rng)
    }

    pub fn from_entropy(height: usize, width: usize, monochrome: bool) -> Result<Self> {
        let mut rng = Xoshiro256Plus::from_entropy();
        Self::new(height, width, monochrome, &mut rng)
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn is_monochrome(&self) -> bool {
        self.monochrome
    }

    pub fn buffer(&self) -> &PatternBuffer {
        &self.buffer
    }

    /// Gray colormap when monochrome, plain RGB otherwise. No scaling.
    pub fn save_raw(&self, path: impl AsRef<Path>) -> Result<()> {
        write_image(path, &self.buffer)
    }
}

/// Fixed-width cast: truncate toward zero, keep the low 8 bits.
///
/// Not a clamp. `-1.5` becomes 255 and `300.9` becomes 44.
// TODO: confirm with the image consumers whether clamping was intended
pub fn quantize(value: f64) -> u8 {
    (value as i64) as u8
}

/// Box-Muller sampler; each transform yields two draws, the second is cached.
struct Gaussian {
    mean: f64,
    sigma: f64,
    spare: Option<f64>,
}

impl Gaussian {
    fn new(mean: f64, sigma: f64) -> Self {
        Self {
            mean,
            sigma,
            spare: None,
        }
    }

    fn sample<R: RngCore>(&mut self, rng: &mut R) -> f64 {
        if let Some(z) = self.spare.take() {
            return self.mean + self.sigma * z;
        }

        // u1 in (0, 1] keeps ln() finite
        let u1 = 1.0 - unit_f64(rng);
        let u2 = unit_f64(rng);
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = TAU * u2;

        self.spare = Some(r * theta.sin());
        self.mean + self.sigma * r * theta.cos()
    }
}

/// Uniform in [0, 1) from the top 53 bits.
fn unit_f64<R: RngCore>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
