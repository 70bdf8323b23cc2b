use std::borrow::Cow;

use log::debug;

use crate::buffer::PatternBuffer;
use crate::error::{Error, Result};

/// Nearest-neighbour upscale: every cell becomes a `factor x factor` block.
///
/// Only the two spatial axes are replicated, the channel layout is kept.
/// A factor of 1 hands the input back without copying. Memory grows with
/// `factor^2` and nothing caps it besides address-space overflow.
pub fn scale_squares(buffer: &PatternBuffer, factor: usize) -> Result<Cow<'_, PatternBuffer>> {
    if factor < 1 {
        return Err(Error::invalid("square size must be greater than 0"));
    }
    if factor == 1 {
        return Ok(Cow::Borrowed(buffer));
    }

    let height = buffer
        .height()
        .checked_mul(factor)
        .ok_or_else(|| Error::invalid(format!("scaled height overflows at factor {factor}")))?;
    let width = buffer
        .width()
        .checked_mul(factor)
        .ok_or_else(|| Error::invalid(format!("scaled width overflows at factor {factor}")))?;

    debug!(
        "scaling {}x{} by {} -> {}x{}",
        buffer.height(),
        buffer.width(),
        factor,
        height,
        width
    );

    let mut scaled = PatternBuffer::new(height, width, buffer.layout())?;
    let out_stride = scaled.stride();
    let channels = buffer.channels();
    let out = scaled.samples_mut();

    for (y, src_row) in buffer.rows().enumerate() {
        // widen one source row, then copy it down the block
        let first = y * factor * out_stride;
        let dst_row = &mut out[first..first + out_stride];
        for (x, px) in src_row.chunks_exact(channels).enumerate() {
            let start = x * factor * channels;
            for block in dst_row[start..start + factor * channels].chunks_exact_mut(channels) {
                block.copy_from_slice(px);
            }
        }

        for dy in 1..factor {
            out.copy_within(first..first + out_stride, first + dy * out_stride);
        }
    }

    Ok(Cow::Owned(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Layout;

    fn gray(height: usize, width: usize, samples: &[u8]) -> PatternBuffer {
        PatternBuffer::from_samples(height, width, Layout::Gray, samples.to_vec()).unwrap()
    }

    #[test]
    fn factor_zero_is_rejected() {
        let buf = gray(1, 1, &[1]);
        assert!(matches!(scale_squares(&buf, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn factor_one_borrows_input() {
        let buf = gray(2, 2, &[0, 1, 1, 0]);
        let scaled = scale_squares(&buf, 1).unwrap();
        assert!(matches!(scaled, Cow::Borrowed(_)));
        assert_eq!(*scaled, buf);
    }

    #[test]
    fn two_by_two_doubles_into_blocks() {
        let buf = gray(2, 2, &[0, 1, 1, 0]);
        let scaled = scale_squares(&buf, 2).unwrap();
        #[rustfmt::skip]
        let expected = [
            0, 0, 1, 1,
            0, 0, 1, 1,
            1, 1, 0, 0,
            1, 1, 0, 0,
        ];
        assert_eq!(scaled.height(), 4);
        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.samples(), &expected);
    }

    #[test]
    fn every_pixel_maps_back_to_its_source_cell() {
        let samples: Vec<u8> = (0..15).collect();
        let buf = gray(3, 5, &samples);
        let k = 3;
        let scaled = scale_squares(&buf, k).unwrap();
        assert_eq!((scaled.height(), scaled.width()), (9, 15));
        for r in 0..scaled.height() {
            for c in 0..scaled.width() {
                assert_eq!(scaled.get(r, c, 0), buf.get(r / k, c / k, 0));
            }
        }
    }

    #[test]
    fn channel_axis_is_not_replicated() {
        let buf = PatternBuffer::from_samples(1, 2, Layout::Rgb, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let scaled = scale_squares(&buf, 2).unwrap();
        assert_eq!(scaled.layout(), Layout::Rgb);
        assert_eq!((scaled.height(), scaled.width()), (2, 4));
        assert_eq!(scaled.pixel(1, 0), &[1, 2, 3]);
        assert_eq!(scaled.pixel(1, 1), &[1, 2, 3]);
        assert_eq!(scaled.pixel(0, 2), &[4, 5, 6]);
        assert_eq!(scaled.pixel(1, 3), &[4, 5, 6]);
    }

    #[test]
    fn overflowing_factor_is_rejected() {
        let buf = gray(2, 2, &[0, 1, 1, 0]);
        assert!(matches!(
            scale_squares(&buf, usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }
}
