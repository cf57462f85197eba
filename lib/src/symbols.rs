//! The asset symbol table.

use crate::console::Console;
use crate::image::Image;
use crate::logo::Logo;

/// Record shape of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Header with the payload inline after it.
    SelfDescribing,
    /// Header and payload declared as two symbols.
    Split,
}

/// What a symbol holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Logo,
    Header,
    Pixels,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Logo(Logo),
    Header(Console),
    Pixels(Console),
}

/// Number of symbols in the table.
pub const SYMBOL_COUNT: usize = Logo::ALL.len() + 2 * Console::ALL.len();

/// All symbols, in declaration order.
pub static SYMBOLS: [Symbol; SYMBOL_COUNT] = [
    Symbol::Logo(Logo::Rgo),
    Symbol::Logo(Logo::Flash),
    Symbol::Logo(Logo::Gnw),
    Symbol::Header(Console::Sg1000),
    Symbol::Pixels(Console::Sg1000),
    Symbol::Header(Console::Colecovision),
    Symbol::Pixels(Console::Colecovision),
    Symbol::Header(Console::GameBoy),
    Symbol::Pixels(Console::GameBoy),
    Symbol::Header(Console::GameGear),
    Symbol::Pixels(Console::GameGear),
    Symbol::Header(Console::Nes),
    Symbol::Pixels(Console::Nes),
    Symbol::Header(Console::PcEngine),
    Symbol::Pixels(Console::PcEngine),
    Symbol::Header(Console::MasterSystem),
    Symbol::Pixels(Console::MasterSystem),
    Symbol::Header(Console::GameAndWatch),
    Symbol::Pixels(Console::GameAndWatch),
];

impl Symbol {
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Logo(logo)  => logo.symbol(),
            Symbol::Header(con) => con.header_symbol(),
            Symbol::Pixels(con) => con.logo_symbol(),
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            Symbol::Logo(_)   => Kind::Logo,
            Symbol::Header(_) => Kind::Header,
            Symbol::Pixels(_) => Kind::Pixels,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Symbol::Logo(_) => Shape::SelfDescribing,
            _ => Shape::Split,
        }
    }

    /// The image record this symbol is part of.
    pub fn image(self) -> Image<'static> {
        match self {
            Symbol::Logo(logo) => *logo.image(),
            Symbol::Header(con) | Symbol::Pixels(con) => con.image(),
        }
    }
}

/// Iterate over every symbol in declaration order.
pub fn symbols() -> impl Iterator<Item = Symbol> + Clone {
    SYMBOLS.iter().copied()
}

/// Find a symbol by its name.
pub fn lookup(name: &str) -> Option<Symbol> {
    symbols().find(|sym| sym.name() == name)
}
