//! Synthetic test images: checkerboards for camera calibration and
//! Gaussian noise fields, written as PNG or Netpbm files.
//!
//! ```no_run
//! use patterngen::{Checkerboard, Noise};
//!
//! let board = Checkerboard::new(7, 11)?;
//! board.save_raw("checkerboard_px.png", 200)?;
//! board.save_mm("checkerboard_mm.png", 36.0, 300.0)?;
//!
//! let noise = Noise::from_entropy(420, 594, true)?;
//! noise.save_raw("noise_px.png")?;
//! # Ok::<(), patterngen::Error>(())
//! ```

pub mod buffer;
pub mod checker;
pub mod error;
pub mod noise;
pub mod paper;
pub mod scale;
pub mod units;
pub mod writer;

pub use buffer::{Layout, PatternBuffer, Shape};
pub use checker::Checkerboard;
pub use error::{Error, Result};
pub use noise::{quantize, Noise};
pub use paper::PaperSize;
pub use scale::scale_squares;
pub use writer::{write_image, ImageFormat};
