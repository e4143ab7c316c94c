//! Built-in palette registry.
//!
//! Each [`NamedPalette`] maps to a fixed, ordered color table. Tables are
//! `const` data; nothing here is mutable.

use super::palette::Palette;
use crate::color::Rgb;
use crate::names;

const fn rgb(packed: u32) -> Rgb {
    Rgb::from_u32(packed)
}

#[rustfmt::skip]
const GAMEBOY: &[Rgb] = &[
    rgb(0x0f380f), rgb(0x306230), rgb(0x8bac0f), rgb(0x9bbc0f),
];

#[rustfmt::skip]
const GBC: &[Rgb] = &[
    rgb(0x0f380f), rgb(0x306230), rgb(0x8bac0f), rgb(0x9bbc0f), rgb(0xe0f8cf), rgb(0x86c06c),
    rgb(0x306850), rgb(0x071821), rgb(0x65a49b), rgb(0x8b8b8b), rgb(0xd8d8d8), rgb(0xffffff),
    rgb(0x555555), rgb(0xaa3939), rgb(0xff7777), rgb(0xffaa00),
];

#[rustfmt::skip]
const GBA: &[Rgb] = &[
    rgb(0x000000), rgb(0x400000), rgb(0x800000), rgb(0xc00000), rgb(0xff0000), rgb(0x004000),
    rgb(0x008000), rgb(0x00c000), rgb(0x00ff00), rgb(0x000040), rgb(0x000080), rgb(0x0000c0),
    rgb(0x0000ff), rgb(0xffffff), rgb(0xc0c0c0), rgb(0x808080), rgb(0x404040), rgb(0xffff00),
    rgb(0xff8000), rgb(0x00ffff), rgb(0xff00ff), rgb(0x8080ff), rgb(0x80ff80), rgb(0xff8080),
    rgb(0x200020), rgb(0x402040), rgb(0x604060), rgb(0x806080), rgb(0xa080a0), rgb(0xc0a0c0),
    rgb(0xe0c0e0), rgb(0xffe0ff),
];

#[rustfmt::skip]
const NES: &[Rgb] = &[
    rgb(0x000000), rgb(0xfcfcfc), rgb(0xf8f8f8), rgb(0xbcbcbc), rgb(0x7c7c7c), rgb(0xa4e4fc),
    rgb(0x3cbcfc), rgb(0x0078f8), rgb(0x0000fc), rgb(0xb8b8f8), rgb(0x6888fc), rgb(0x0058f8),
    rgb(0x0000bc), rgb(0xd8b8f8), rgb(0x9878f8), rgb(0x6844fc), rgb(0x4428bc), rgb(0xf8b8f8),
    rgb(0xf878f8), rgb(0xd800cc), rgb(0x940084), rgb(0xf8a4c0), rgb(0xf85898), rgb(0xe40058),
    rgb(0xa80020), rgb(0xf0d0b0), rgb(0xf87858), rgb(0xf83800), rgb(0xa81000), rgb(0xfce0a8),
    rgb(0xfca044), rgb(0xe45c10), rgb(0x881400), rgb(0xf8d878), rgb(0xf8b800), rgb(0xac7c00),
    rgb(0x503000), rgb(0xd8f878), rgb(0xb8f818), rgb(0x00b800), rgb(0x007800), rgb(0xb8f8b8),
    rgb(0x58d854), rgb(0x00a800), rgb(0x006800), rgb(0xb8f8d8), rgb(0x58f898), rgb(0x00a844),
    rgb(0x005800), rgb(0x00fcfc), rgb(0x00e8d8), rgb(0x008888), rgb(0x004058), rgb(0xf8d8f8),
    rgb(0x787878),
];

#[rustfmt::skip]
const SNES: &[Rgb] = &[
    rgb(0x000000), rgb(0xffffff), rgb(0xff0000), rgb(0x00ff00), rgb(0x0000ff), rgb(0xffff00),
    rgb(0xff00ff), rgb(0x00ffff), rgb(0x800000), rgb(0x008000), rgb(0x000080), rgb(0x808000),
    rgb(0x800080), rgb(0x008080), rgb(0xc0c0c0), rgb(0x808080),
];

#[rustfmt::skip]
const GENESIS: &[Rgb] = &[
    rgb(0x000000), rgb(0x002200), rgb(0x004400), rgb(0x006600), rgb(0x008800), rgb(0x00aa00),
    rgb(0x00cc00), rgb(0x00ee00), rgb(0x220000), rgb(0x440000), rgb(0x660000), rgb(0x880000),
    rgb(0xaa0000), rgb(0xcc0000), rgb(0xee0000), rgb(0x000022), rgb(0x000044), rgb(0x000066),
    rgb(0x000088), rgb(0x0000aa), rgb(0x0000cc), rgb(0x0000ee), rgb(0xeeeeee), rgb(0xcccccc),
    rgb(0xaaaaaa), rgb(0x888888), rgb(0x666666), rgb(0x444444), rgb(0x222222), rgb(0xee8800),
    rgb(0xeeee00), rgb(0x00eeee),
];

#[rustfmt::skip]
const C64: &[Rgb] = &[
    rgb(0x000000), rgb(0xffffff), rgb(0x880000), rgb(0xaaffee), rgb(0xcc44cc), rgb(0x00cc55),
    rgb(0x0000aa), rgb(0xeeee77), rgb(0xdd8855), rgb(0x664400), rgb(0xff7777), rgb(0x333333),
    rgb(0x777777), rgb(0xaaff66), rgb(0x0088ff), rgb(0xbbbbbb),
];

#[rustfmt::skip]
const PICO8: &[Rgb] = &[
    rgb(0x000000), rgb(0x1d2b53), rgb(0x7e2553), rgb(0x008751), rgb(0xab5236), rgb(0x5f574f),
    rgb(0xc2c3c7), rgb(0xfff1e8), rgb(0xff004d), rgb(0xffa300), rgb(0xffec27), rgb(0x00e436),
    rgb(0x29adff), rgb(0x83769c), rgb(0xff77a8), rgb(0xffccaa),
];

const BW: &[Rgb] = &[rgb(0x000000), rgb(0xffffff)];

#[rustfmt::skip]
const MAC: &[Rgb] = &[
    rgb(0x000000), rgb(0xffffff), rgb(0x555555), rgb(0xaaaaaa), rgb(0x2b2b2b), rgb(0xd4d4d4),
];

const NEWSPAPER: &[Rgb] = &[rgb(0x000000), rgb(0xffffff), rgb(0xf5f0e1), rgb(0x1a1a1a)];

#[rustfmt::skip]
const PRINT: &[Rgb] = &[
    rgb(0x000000), rgb(0xffffff), rgb(0x00ffff), rgb(0xff00ff), rgb(0xffff00), rgb(0xff0000),
];

/// A palette from the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedPalette {
    /// Original Game Boy, 4 greens
    GameBoy,
    /// Game Boy Color inspired, 16 colors
    GameBoyColor,
    /// Game Boy Advance inspired, 32 colors
    GameBoyAdvance,
    /// NES system palette, 55 colors
    Nes,
    /// SNES inspired, 16 colors
    Snes,
    /// Sega Genesis inspired, 32 colors
    Genesis,
    /// Commodore 64, 16 colors
    C64,
    /// PICO-8 fantasy console, 16 colors
    Pico8,
    /// Pure black and white
    #[default]
    BlackWhite,
    /// Classic Macintosh grays, 6 colors
    Mac,
    /// Newsprint, 4 colors
    Newspaper,
    /// Print primaries, 6 colors
    Print,
}

impl NamedPalette {
    /// Every registry palette, in display order.
    pub const ALL: [NamedPalette; 12] = [
        NamedPalette::GameBoy,
        NamedPalette::GameBoyColor,
        NamedPalette::GameBoyAdvance,
        NamedPalette::Nes,
        NamedPalette::Snes,
        NamedPalette::Genesis,
        NamedPalette::C64,
        NamedPalette::Pico8,
        NamedPalette::BlackWhite,
        NamedPalette::Mac,
        NamedPalette::Newspaper,
        NamedPalette::Print,
    ];

    /// Registry key.
    pub fn name(self) -> &'static str {
        match self {
            NamedPalette::GameBoy => "gameboy",
            NamedPalette::GameBoyColor => "gbc",
            NamedPalette::GameBoyAdvance => "gba",
            NamedPalette::Nes => "nes",
            NamedPalette::Snes => "snes",
            NamedPalette::Genesis => "genesis",
            NamedPalette::C64 => "c64",
            NamedPalette::Pico8 => "pico8",
            NamedPalette::BlackWhite => "bw",
            NamedPalette::Mac => "mac",
            NamedPalette::Newspaper => "newspaper",
            NamedPalette::Print => "print",
        }
    }

    /// Look up a palette by registry key. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| names::matches(name, p.name()))
    }

    /// The color table, in registry order.
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            NamedPalette::GameBoy => GAMEBOY,
            NamedPalette::GameBoyColor => GBC,
            NamedPalette::GameBoyAdvance => GBA,
            NamedPalette::Nes => NES,
            NamedPalette::Snes => SNES,
            NamedPalette::Genesis => GENESIS,
            NamedPalette::C64 => C64,
            NamedPalette::Pico8 => PICO8,
            NamedPalette::BlackWhite => BW,
            NamedPalette::Mac => MAC,
            NamedPalette::Newspaper => NEWSPAPER,
            NamedPalette::Print => PRINT,
        }
    }

    /// The color table as `#rrggbb` literals, for swatch display.
    pub fn hex_colors(self) -> Vec<String> {
        self.colors().iter().map(|c| c.to_hex()).collect()
    }

    /// Build a [`Palette`] over this table.
    pub fn palette(self) -> Palette {
        Palette::from_static(self.colors())
    }
}

/// Which palette a render should quantize to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteChoice {
    /// Skip quantization entirely (pixel art only).
    None,
    /// A registry palette.
    Named(NamedPalette),
    /// Caller-supplied colors, in order.
    Custom(Vec<Rgb>),
}

impl Default for PaletteChoice {
    fn default() -> Self {
        PaletteChoice::Named(NamedPalette::default())
    }
}

impl PaletteChoice {
    /// The palette to quantize against, or `None` when quantization is off.
    ///
    /// An empty custom list also disables quantization.
    pub fn resolve(&self) -> Option<Palette> {
        match self {
            PaletteChoice::None => None,
            PaletteChoice::Named(named) => Some(named.palette()),
            PaletteChoice::Custom(colors) => Palette::new(colors.clone()).ok(),
        }
    }

    /// Like [`resolve`](Self::resolve) but never disables quantization:
    /// falls back to the black/white palette.
    pub fn resolve_or_default(&self) -> Palette {
        self.resolve()
            .unwrap_or_else(|| NamedPalette::default().palette())
    }
}
