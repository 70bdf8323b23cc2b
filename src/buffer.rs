//! In-memory pixel buffers shared by the generators, the scaler and the writer.

use crate::error::{Error, Result};

/// Channel layout of a [`PatternBuffer`].
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[repr(u32)]
pub enum Layout {
    #[default]
    Gray = 1,
    Rgb = 3,
}

impl Layout {
    pub fn channels(&self) -> usize {
        *self as usize
    }
}

/// Array shape of a buffer. Grayscale buffers have no channel axis.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Shape {
    Gray(usize, usize),
    Rgb(usize, usize, usize),
}

/// Dense row-major `u8` samples, channel-interleaved for [`Layout::Rgb`].
///
/// `samples.len() == height * width * channels` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBuffer {
    height: usize,
    width: usize,
    layout: Layout,
    samples: Vec<u8>,
}

impl PatternBuffer {
    /// Zero-filled buffer.
    pub fn new(height: usize, width: usize, layout: Layout) -> Result<Self> {
        let len = sample_count(height, width, layout)?;
        Ok(Self {
            height,
            width,
            layout,
            samples: vec![0; len],
        })
    }

    pub fn from_samples(
        height: usize,
        width: usize,
        layout: Layout,
        samples: Vec<u8>,
    ) -> Result<Self> {
        let len = sample_count(height, width, layout)?;
        if samples.len() != len {
            return Err(Error::invalid(format!(
                "expected {len} samples for {height}x{width}x{}, got {}",
                layout.channels(),
                samples.len()
            )));
        }

        Ok(Self {
            height,
            width,
            layout,
            samples,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn shape(&self) -> Shape {
        match self.layout {
            Layout::Gray => Shape::Gray(self.height, self.width),
            Layout::Rgb => Shape::Rgb(self.height, self.width, 3),
        }
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width * self.channels()
    }

    /// All channel values of one pixel.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        assert!(row < self.height && col < self.width);
        let channels = self.channels();
        let start = row * self.stride() + col * channels;
        &self.samples[start..start + channels]
    }

    pub fn get(&self, row: usize, col: usize, channel: usize) -> u8 {
        assert!(channel < self.channels());
        self.pixel(row, col)[channel]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.stride())
    }

    /// Smallest and largest sample value.
    pub fn min_max(&self) -> (u8, u8) {
        self.samples
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

fn sample_count(height: usize, width: usize, layout: Layout) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(Error::invalid(format!(
            "shape must be positive, got ({height}, {width})"
        )));
    }

    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(layout.channels()))
        .ok_or_else(|| Error::invalid(format!("shape ({height}, {width}) is too large")))
}
