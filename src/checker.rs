use std::path::Path;

use bitvec::prelude::{bitvec, BitVec};
use log::debug;

use crate::buffer::{Layout, PatternBuffer};
use crate::error::{Error, Result};
use crate::paper::PaperSize;
use crate::scale::scale_squares;
use crate::units::mm_to_px;
use crate::writer::write_image;

/// Checkerboard with one sample per square; cell `(r, c)` is `(r + c) % 2`.
///
/// The origin square is dark. Scaling to printable sizes happens at save time.
pub struct Checkerboard {
    height: usize,
    width: usize,
    cells: BitVec,
    buffer: PatternBuffer,
}

impl Checkerboard {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid(format!(
                "checkerboard shape must be positive, got ({height}, {width})"
            )));
        }

        let cells = Self::make_cells(height, width);
        let samples = cells.iter().map(|bit| *bit as u8).collect();
        let buffer = PatternBuffer::from_samples(height, width, Layout::Gray, samples)?;

        debug!("generated {height}x{width} checkerboard");

        Ok(Self {
            height,
            width,
            cells,
            buffer,
        })
    }

    fn make_cells(height: usize, width: usize) -> BitVec {
        let mut cells = bitvec![0; height * width];
        for index in 0..cells.len() {
            let row = index / width;
            let col = index % width;
            cells.set(index, (row + col) % 2 == 1);
        }
        cells
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// `true` for light squares.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Unscaled board, samples 0 and 1.
    pub fn buffer(&self) -> &PatternBuffer {
        &self.buffer
    }

    /// Writes the board with each square `square_size_px` pixels wide.
    pub fn save_raw(&self, path: impl AsRef<Path>, square_size_px: usize) -> Result<()> {
        let data = scale_squares(&self.buffer, square_size_px)?;
        write_image(path, &data)
    }

    pub fn save_raw_default(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_raw(path, 1)
    }

    /// Writes the board so that one square prints `square_size_mm` wide at `ppi`.
    ///
    /// Neither argument is validated; a derived square size below one pixel
    /// is rejected by the scaler.
    pub fn save_mm(&self, path: impl AsRef<Path>, square_size_mm: f64, ppi: f64) -> Result<()> {
        let square_size_px = mm_to_px(square_size_mm, ppi);
        debug!("{square_size_mm} mm at {ppi} ppi -> {square_size_px} px squares");

        let square_size_px = usize::try_from(square_size_px).map_err(|_| {
            Error::invalid(format!(
                "square size must be greater than 0, got {square_size_px} px"
            ))
        })?;
        self.save_raw(path, square_size_px)
    }

    /// Page layout onto a sheet of `paper_size` is not available yet.
    pub fn save_page(
        &self,
        _path: impl AsRef<Path>,
        _paper_size: PaperSize,
        _square_size_mm: f64,
        _margin_mm: f64,
    ) -> Result<()> {
        Err(Error::Unimplemented("Checkerboard::save_page"))
    }
}
