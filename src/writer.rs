//! Raster output for [`PatternBuffer`]s.
//!
//! The format is picked from the path extension: `png`, `pgm` (gray only)
//! or `ppm` (RGB only). Gray buffers go through a linear gray colormap that
//! stretches the buffer's own range to black..white, so a 0/1 checkerboard
//! comes out as 0/255.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::buffer::{Layout, PatternBuffer};
use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ImageFormat {
    Png,
    Pgm,
    Ppm,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<ImageFormat> {
        let extension = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("no file extension in {}", path.display()))
            })?;

        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "pgm" => Ok(ImageFormat::Pgm),
            "ppm" => Ok(ImageFormat::Ppm),
            other => Err(Error::UnsupportedFormat(format!(
                "unsupported file extension: {other}"
            ))),
        }
    }
}

pub fn write_image(path: impl AsRef<Path>, buffer: &PatternBuffer) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;

    match (format, buffer.layout()) {
        (ImageFormat::Pgm, Layout::Rgb) | (ImageFormat::Ppm, Layout::Gray) => {
            return Err(Error::UnsupportedFormat(format!(
                "{:?} cannot hold a {:?} buffer",
                format,
                buffer.layout()
            )));
        }
        _ => {}
    }

    let samples = match buffer.layout() {
        Layout::Gray => Cow::Owned(gray_colormap(buffer)),
        Layout::Rgb => Cow::Borrowed(buffer.samples()),
    };

    let file = File::create(path)?;
    let file_writer = BufWriter::new(file);

    match format {
        ImageFormat::Png => write_png(file_writer, buffer, &samples)?,
        ImageFormat::Pgm | ImageFormat::Ppm => write_netpbm(file_writer, buffer, &samples)?,
    }

    info!(
        "wrote {}x{} {:?} image to {}",
        buffer.width(),
        buffer.height(),
        buffer.layout(),
        path.display()
    );

    Ok(())
}

/// Maps gray samples onto 0..=255 using the buffer's own min..max range.
/// A constant buffer maps to black.
pub fn gray_colormap(buffer: &PatternBuffer) -> Vec<u8> {
    let (lo, hi) = buffer.min_max();
    let span = (hi - lo) as u32;
    if span == 0 {
        return vec![0; buffer.samples().len()];
    }

    // 256 evenly sized bins over [lo, hi], the top value lands in the last one
    buffer
        .samples()
        .iter()
        .map(|&v| (((v - lo) as u32 * 256) / span).min(255) as u8)
        .collect()
}

fn write_png<W: Write>(writer: W, buffer: &PatternBuffer, samples: &[u8]) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, dimension(buffer.width())?, dimension(buffer.height())?);

    encoder.set_color(match buffer.layout() {
        Layout::Gray => png::ColorType::Grayscale,
        Layout::Rgb => png::ColorType::Rgb,
    });
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(samples)?;
    png_writer.finish()?;

    Ok(())
}

fn write_netpbm<W: Write>(mut writer: W, buffer: &PatternBuffer, samples: &[u8]) -> Result<()> {
    let magic = match buffer.layout() {
        Layout::Gray => "P5",
        Layout::Rgb => "P6",
    };

    write!(writer, "{}\n{} {}\n255\n", magic, buffer.width(), buffer.height())?;
    writer.write_all(samples)?;
    writer.flush()?;

    Ok(())
}

fn dimension(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::UnsupportedFormat(format!("dimension {n} exceeds PNG limits")))
}
