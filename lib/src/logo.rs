//! Standalone logos, stored as self-describing records.
//!
//! Each asset file holds the header immediately followed by the pixel data.
//! The files are parsed while compiling, so a malformed asset fails the build.

use crate::image::Image;

macro_rules! flat_image {
    ($file:literal) => {
        match Image::from_flat(include_bytes!($file)) {
            Ok(img) => img,
            Err(_) => panic!(concat!("malformed image asset ", $file)),
        }
    };
}

/// Launcher splash logo.
pub static LOGO_RGO: Image<'static> = flat_image!("assets/logo_rgo.img");
/// Shown while flashing.
pub static LOGO_FLASH: Image<'static> = flat_image!("assets/logo_flash.img");
pub static LOGO_GNW: Image<'static> = flat_image!("assets/logo_gnw.img");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Logo {
    Rgo,
    Flash,
    Gnw,
}

impl Logo {
    pub const ALL: [Logo; 3] = [Logo::Rgo, Logo::Flash, Logo::Gnw];

    /// The symbol name of this logo in the asset table.
    pub const fn symbol(self) -> &'static str {
        match self {
            Logo::Rgo   => "logo_rgo",
            Logo::Flash => "logo_flash",
            Logo::Gnw   => "logo_gnw",
        }
    }

    pub fn image(self) -> &'static Image<'static> {
        match self {
            Logo::Rgo   => &LOGO_RGO,
            Logo::Flash => &LOGO_FLASH,
            Logo::Gnw   => &LOGO_GNW,
        }
    }

    /// The compiled self-describing record, header included.
    pub fn flat_bytes(self) -> &'static [u8] {
        match self {
            Logo::Rgo   => include_bytes!("assets/logo_rgo.img"),
            Logo::Flash => include_bytes!("assets/logo_flash.img"),
            Logo::Gnw   => include_bytes!("assets/logo_gnw.img"),
        }
    }

    pub fn from_symbol(name: &str) -> Option<Logo> {
        Logo::ALL.iter().copied().find(|logo| logo.symbol() == name)
    }
}
