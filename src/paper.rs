//! ISO A-series paper sizes.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Error, Result};

/// Portrait page dimensions in millimetres.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl PaperSize {
    /// `(width_mm, height_mm)` in portrait orientation.
    pub const fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.5, 210.0),
            PaperSize::A6 => (105.0, 148.5),
        }
    }

    pub const fn width_mm(&self) -> f64 {
        self.dimensions_mm().0
    }

    pub const fn height_mm(&self) -> f64 {
        self.dimensions_mm().1
    }

    /// Dimensions with width and height swapped.
    pub const fn landscape(&self) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        (h, w)
    }

    pub fn lookup(name: &str) -> Result<PaperSize> {
        PaperSize::from_str(name.trim()).map_err(|_| Error::UnknownPaperSize(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(PaperSize::lookup("a4").unwrap(), PaperSize::A4);
        assert_eq!(PaperSize::lookup("A0").unwrap(), PaperSize::A0);
        assert_eq!(PaperSize::lookup(" a6 ").unwrap(), PaperSize::A6);
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert!(matches!(
            PaperSize::lookup("letter"),
            Err(Error::UnknownPaperSize(name)) if name == "letter"
        ));
    }

    #[test]
    fn a4_is_210_by_297() {
        assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
        assert_eq!(PaperSize::A4.landscape(), (297.0, 210.0));
        assert_eq!(PaperSize::A4.to_string(), "A4");
    }

    #[test]
    fn each_size_halves_the_previous_one() {
        let sizes: Vec<_> = PaperSize::iter().collect();
        assert_eq!(sizes.len(), 7);
        for pair in sizes.windows(2) {
            let (w0, h0) = pair[0].dimensions_mm();
            let (w1, h1) = pair[1].dimensions_mm();
            assert!(w0 > w1 && h0 > h1);
            assert_eq!(h1, w0);
        }
    }
}
