//! Header bitmaps for the supported consoles.
//!
//! Every console owns exactly one `ConsoleBitmap`, which bundles the header
//! with its pixel array.  The mapping is a `match` over `Console`, so adding
//! a console without a bitmap does not compile.

use crate::header::ImageHeader;
use crate::image::Image;

/// A split image: header and pixels declared separately, held together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleBitmap {
    pub header: ImageHeader,
    pub pixels: &'static [u8],
}

impl ConsoleBitmap {
    pub const fn new(header: ImageHeader, pixels: &'static [u8]) -> Self {
        Self { header, pixels }
    }

    pub const fn image(&self) -> Image<'static> {
        Image::new(self.header, self.pixels)
    }
}

static SG1000: ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(56, 12), include_bytes!("assets/logo_sg1000.dat"));
static COL:    ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(48, 12), include_bytes!("assets/logo_col.dat"));
static GB:     ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(16, 12), include_bytes!("assets/logo_gb.dat"));
static GG:     ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(16, 12), include_bytes!("assets/logo_gg.dat"));
static NES:    ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(24, 12), include_bytes!("assets/logo_nes.dat"));
static PCE:    ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(24, 12), include_bytes!("assets/logo_pce.dat"));
static SMS:    ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(24, 12), include_bytes!("assets/logo_sms.dat"));
static GW:     ConsoleBitmap = ConsoleBitmap::new(ImageHeader::new(24, 12), include_bytes!("assets/logo_gw.dat"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Console {
    Sg1000,
    Colecovision,
    GameBoy,
    GameGear,
    Nes,
    PcEngine,
    MasterSystem,
    GameAndWatch,
}

impl Console {
    pub const ALL: [Console; 8] = [
        Console::Sg1000,
        Console::Colecovision,
        Console::GameBoy,
        Console::GameGear,
        Console::Nes,
        Console::PcEngine,
        Console::MasterSystem,
        Console::GameAndWatch,
    ];

    /// Suffix shared by the header and pixel symbols of this console.
    pub const fn suffix(self) -> &'static str {
        match self {
            Console::Sg1000       => "sg1000",
            Console::Colecovision => "col",
            Console::GameBoy      => "gb",
            Console::GameGear     => "gg",
            Console::Nes          => "nes",
            Console::PcEngine     => "pce",
            Console::MasterSystem => "sms",
            Console::GameAndWatch => "gw",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Console::Sg1000       => "Sega SG-1000",
            Console::Colecovision => "ColecoVision",
            Console::GameBoy      => "Game Boy",
            Console::GameGear     => "Sega Game Gear",
            Console::Nes          => "Nintendo Entertainment System",
            Console::PcEngine     => "PC Engine",
            Console::MasterSystem => "Sega Master System",
            Console::GameAndWatch => "Game & Watch",
        }
    }

    /// Name of the header symbol, e.g. `header_gb`.
    pub const fn header_symbol(self) -> &'static str {
        match self {
            Console::Sg1000       => "header_sg1000",
            Console::Colecovision => "header_col",
            Console::GameBoy      => "header_gb",
            Console::GameGear     => "header_gg",
            Console::Nes          => "header_nes",
            Console::PcEngine     => "header_pce",
            Console::MasterSystem => "header_sms",
            Console::GameAndWatch => "header_gw",
        }
    }

    /// Name of the pixel array symbol, e.g. `logo_gb`.
    pub const fn logo_symbol(self) -> &'static str {
        match self {
            Console::Sg1000       => "logo_sg1000",
            Console::Colecovision => "logo_col",
            Console::GameBoy      => "logo_gb",
            Console::GameGear     => "logo_gg",
            Console::Nes          => "logo_nes",
            Console::PcEngine     => "logo_pce",
            Console::MasterSystem => "logo_sms",
            Console::GameAndWatch => "logo_gw",
        }
    }

    pub fn bitmap(self) -> &'static ConsoleBitmap {
        match self {
            Console::Sg1000       => &SG1000,
            Console::Colecovision => &COL,
            Console::GameBoy      => &GB,
            Console::GameGear     => &GG,
            Console::Nes          => &NES,
            Console::PcEngine     => &PCE,
            Console::MasterSystem => &SMS,
            Console::GameAndWatch => &GW,
        }
    }

    pub fn image(self) -> Image<'static> {
        self.bitmap().image()
    }

    pub fn from_suffix(suffix: &str) -> Option<Console> {
        Console::ALL.iter().copied().find(|c| c.suffix() == suffix)
    }
}
