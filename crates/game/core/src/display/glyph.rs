//! Attribute and glyph types shared by glyph tables and renderers.

use super::Color;

/// Background treatment of a text attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Background {
    /// Normal black background.
    #[default]
    Black,
    /// Background filled with the foreground colour (solid walls).
    Same,
    /// Background filled with a dark variant of the foreground (hybrid walls).
    Dark,
}

/// Attribute of a text-mode glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttr {
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(default))]
    pub background: Background,
    /// Reverse-video marker; survives every lighting transform.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
}

impl TextAttr {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            background: Background::Black,
            inverted: false,
        }
    }

    #[must_use]
    pub const fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Drawing attribute of a glyph.
///
/// `Special` replaces the legacy "high bit set" convention: it carries a
/// hardcoded tile code that renderers must use verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attr {
    Text(TextAttr),
    Special(u8),
}

impl Attr {
    pub const fn text(color: Color) -> Self {
        Attr::Text(TextAttr::new(color))
    }

    pub const fn is_special(self) -> bool {
        matches!(self, Attr::Special(_))
    }

    /// Foreground colour for text attributes.
    pub const fn color(self) -> Option<Color> {
        match self {
            Attr::Text(text) => Some(text.color),
            Attr::Special(_) => None,
        }
    }
}

/// An attribute/character pair occupying one display cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub attr: Attr,
    pub ch: char,
}

impl Glyph {
    /// Empty cell.
    pub const BLANK: Glyph = Glyph::text(Color::White, ' ');

    /// Filler for the non-anchor cells of a big graphical tile.
    pub const TILE_PADDING: Glyph = Glyph::special(u8::MAX, ' ');

    /// Drawn when content asks for a glyph that has no display entry.
    pub const UNKNOWN: Glyph = Glyph::text(Color::LightPurple, '?');

    pub const fn new(attr: Attr, ch: char) -> Self {
        Self { attr, ch }
    }

    pub const fn text(color: Color, ch: char) -> Self {
        Self {
            attr: Attr::text(color),
            ch,
        }
    }

    pub const fn special(code: u8, ch: char) -> Self {
        Self {
            attr: Attr::Special(code),
            ch,
        }
    }

    /// Glyph used for the remaining cells of a multi-cell tile anchored by `self`.
    pub const fn padding(self) -> Glyph {
        match self.attr {
            Attr::Special(_) => Glyph::TILE_PADDING,
            Attr::Text(_) => Glyph::BLANK,
        }
    }

    #[must_use]
    pub const fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }
}

/// Default appearance of a monster race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaceGlyph {
    /// Ordinary colour and character, subject to the race's clear and multi-hue flags.
    Standard { color: Color, ch: char },
    /// Hardcoded tile code drawn verbatim, overriding whatever the cell shows.
    Special { code: u8, ch: char },
}

impl RaceGlyph {
    /// The race default as a plain glyph.
    pub const fn glyph(self) -> Glyph {
        match self {
            RaceGlyph::Standard { color, ch } => Glyph::text(color, ch),
            RaceGlyph::Special { code, ch } => Glyph::special(code, ch),
        }
    }

    pub const fn ch(self) -> char {
        match self {
            RaceGlyph::Standard { ch, .. } | RaceGlyph::Special { ch, .. } => ch,
        }
    }
}
