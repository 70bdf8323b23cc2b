//! Physical unit conversions and print defaults.

pub const MM_PER_INCH: f64 = 25.4;

/// Side of one checkerboard square when printing, in millimetres.
pub const DEFAULT_SQUARE_SIZE_MM: f64 = 36.0;
pub const DEFAULT_PPI: f64 = 300.0;
pub const DEFAULT_MARGIN_MM: f64 = 5.0;

pub fn pixels_per_mm(ppi: f64) -> f64 {
    ppi / MM_PER_INCH
}

/// Pixel count covering `size_mm` at `ppi`, truncated toward zero.
///
/// Not validated: zero or negative results are passed on to the caller.
pub fn mm_to_px(size_mm: f64, ppi: f64) -> i64 {
    (size_mm * pixels_per_mm(ppi)) as i64
}
