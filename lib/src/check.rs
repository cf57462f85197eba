//! Integrity checks over image records and the symbol table.

use log::{debug, trace};

use crate::header::HEADER_SIZE;
use crate::image::Image;
use crate::logo::Logo;
use crate::symbols::{symbols, Kind, Symbol};
use crate::Error;

const HEADER_PREFIX: &str = "header_";
const PIXELS_PREFIX: &str = "logo_";

/// A broken integrity property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation<'a> {
    #[error("{symbol}: {error}")]
    Image { symbol: &'a str, error: Error },
    #[error("{symbol}: compiled size is {actual} bytes, header and payload need {expected}")]
    FlatSize { symbol: &'a str, expected: usize, actual: usize },
    #[error("{symbol}: record does not parse back to itself")]
    Reparse { symbol: &'a str },
    #[error("header_{suffix} has no matching logo_{suffix}")]
    OrphanHeader { suffix: &'a str },
    #[error("logo_{suffix} has no matching header_{suffix}")]
    OrphanPixels { suffix: &'a str },
}

/// Check that `img` has positive extents and a payload.
pub fn check_image<'a>(symbol: &'a str, img: &Image<'_>) -> Result<(), Violation<'a>> {
    img.validate().map_err(|error| Violation::Image { symbol, error })
}

/// Check a self-describing record against its compiled bytes: the sizes must
/// add up, and parsing the bytes must give the same record back.
pub fn check_flat<'a>(symbol: &'a str, flat: &[u8], img: &Image<'_>) -> Result<(), Violation<'a>> {
    let expected = HEADER_SIZE + img.data().len();
    if flat.len() != expected {
        return Err(Violation::FlatSize { symbol, expected, actual: flat.len() });
    }
    match Image::from_flat(flat) {
        Ok(parsed) if parsed == *img => Ok(()),
        _ => Err(Violation::Reparse { symbol }),
    }
}

/// Check that every `header_<x>` has a `logo_<x>` pixel array and the other
/// way around.  Self-describing logos need no partner.
pub fn check_pairing<'a, I>(entries: I) -> Result<(), Violation<'a>>
where
    I: IntoIterator<Item = (&'a str, Kind)>,
    I::IntoIter: Clone,
{
    let entries = entries.into_iter();
    let has = |kind: Kind, prefix: &str, suffix: &str| {
        entries.clone().any(|(name, k)| k == kind && name.strip_prefix(prefix) == Some(suffix))
    };
    for (name, kind) in entries.clone() {
        match kind {
            Kind::Header => {
                let suffix = name.strip_prefix(HEADER_PREFIX).unwrap_or(name);
                if !has(Kind::Pixels, PIXELS_PREFIX, suffix) {
                    return Err(Violation::OrphanHeader { suffix });
                }
            }
            Kind::Pixels => {
                let suffix = name.strip_prefix(PIXELS_PREFIX).unwrap_or(name);
                if !has(Kind::Header, HEADER_PREFIX, suffix) {
                    return Err(Violation::OrphanPixels { suffix });
                }
            }
            Kind::Logo => {}
        }
    }
    Ok(())
}

/// Run every check over the shipped asset table.
pub fn check_all() -> Result<(), Violation<'static>> {
    for sym in symbols() {
        let img = sym.image();
        trace!("checking {} ({}x{}, {} bytes)", sym.name(), img.width(), img.height(), img.data().len());
        check_image(sym.name(), &img)?;
    }
    for logo in Logo::ALL {
        check_flat(logo.symbol(), logo.flat_bytes(), logo.image())?;
    }
    check_pairing(symbols().map(|sym: Symbol| (sym.name(), sym.kind())))?;
    debug!("all {} asset symbols passed", symbols().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ImageHeader;

    #[test]
    fn shipped_table_is_consistent() {
        assert_eq!(check_all(), Ok(()));
    }

    #[test]
    fn image_violation_names_symbol() {
        let img = Image::new(ImageHeader::new(0, 4), &[1, 2]);
        assert_eq!(check_image("logo_x", &img),
                   Err(Violation::Image { symbol: "logo_x", error: Error::EmptyExtent { width: 0, height: 4 } }));
    }

    #[test]
    fn flat_size_mismatch() {
        let flat = [2, 0, 0, 0, 2, 0, 0, 0, 0xc0, 0x40];
        let img = Image::new(ImageHeader::new(2, 2), &flat[8..9]);
        assert_eq!(check_flat("logo_x", &flat, &img),
                   Err(Violation::FlatSize { symbol: "logo_x", expected: 9, actual: 10 }));
    }

    #[test]
    fn flat_header_mismatch() {
        let flat = [2, 0, 0, 0, 2, 0, 0, 0, 0xc0, 0x40];
        let img = Image::new(ImageHeader::new(4, 1), &flat[8..]);
        assert_eq!(check_flat("logo_x", &flat, &img), Err(Violation::Reparse { symbol: "logo_x" }));
        let img = Image::new(ImageHeader::new(2, 2), &flat[8..]);
        assert_eq!(check_flat("logo_x", &flat, &img), Ok(()));
    }

    #[test]
    fn pairing_accepts_logos_without_header() {
        let table = [
            ("logo_rgo", Kind::Logo),
            ("header_gb", Kind::Header),
            ("logo_gb", Kind::Pixels),
        ];
        assert_eq!(check_pairing(table.iter().copied()), Ok(()));
    }

    #[test]
    fn pairing_reports_orphans() {
        let table = [("header_gb", Kind::Header), ("logo_gg", Kind::Pixels)];
        assert_eq!(check_pairing(table.iter().copied()), Err(Violation::OrphanHeader { suffix: "gb" }));
        let table = [("logo_nes", Kind::Pixels), ("header_nes", Kind::Header), ("logo_sms", Kind::Pixels)];
        assert_eq!(check_pairing(table.iter().copied()), Err(Violation::OrphanPixels { suffix: "sms" }));
    }

    #[test]
    fn pairing_needs_matching_kind() {
        // a self-describing logo does not satisfy a header
        let table = [("header_rgo", Kind::Header), ("logo_rgo", Kind::Logo)];
        assert_eq!(check_pairing(table.iter().copied()), Err(Violation::OrphanHeader { suffix: "rgo" }));
    }
}
