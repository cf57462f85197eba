#![no_std]

//! Logo and console header bitmaps shown by the retro-go launcher.
//!
//! All records are statics built at compile time.  The pixel data is kept
//! opaque: its format is decided by the renderer, not by this crate.

mod error;
pub mod header;
pub mod image;
pub mod logo;
pub mod console;
pub mod symbols;
pub mod check;

pub use error::Error;
pub use header::{ImageHeader, HEADER_SIZE};
pub use image::Image;
pub use logo::{Logo, LOGO_FLASH, LOGO_GNW, LOGO_RGO};
pub use console::{Console, ConsoleBitmap};
pub use symbols::{lookup, symbols, Kind, Shape, Symbol};

use pkg_version::{pkg_version_major, pkg_version_minor, pkg_version_patch};

/// Version of the asset table, as (major, minor, patch).
pub const VERSION: (u32, u32, u32) = (pkg_version_major!(), pkg_version_minor!(), pkg_version_patch!());
