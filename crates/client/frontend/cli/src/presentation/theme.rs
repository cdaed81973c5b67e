//! Ratatui styling of map glyphs.
//!
//! Text glyphs map their named colour onto a fixed RGB palette. Special tile
//! codes have no terminal artwork, so they are drawn as their character in a
//! highlighted style.
use game_core::{Attr, Background, Color as GlyphColor, Glyph, TextAttr};
use ratatui::style::{Color, Modifier, Style};

/// Background behind hybrid walls.
const WALL_SHADE: Color = Color::Rgb(40, 40, 40);

/// Terminal colour of a named glyph colour.
pub fn color(color: GlyphColor) -> Color {
    let (r, g, b) = match color {
        GlyphColor::Dark => (0, 0, 0),
        GlyphColor::White => (255, 255, 255),
        GlyphColor::Slate => (128, 128, 128),
        GlyphColor::Orange => (255, 128, 0),
        GlyphColor::Red => (192, 0, 0),
        GlyphColor::Green => (0, 128, 64),
        GlyphColor::Blue => (0, 64, 255),
        GlyphColor::Umber => (128, 64, 0),
        GlyphColor::LightDark => (96, 96, 96),
        GlyphColor::LightWhite => (192, 192, 192),
        GlyphColor::LightPurple => (255, 0, 255),
        GlyphColor::Yellow => (255, 255, 0),
        GlyphColor::LightRed => (255, 64, 64),
        GlyphColor::LightGreen => (0, 255, 0),
        GlyphColor::LightBlue => (0, 255, 255),
        GlyphColor::LightUmber => (192, 128, 64),
        GlyphColor::Purple => (144, 0, 144),
        GlyphColor::Violet => (144, 32, 255),
        GlyphColor::Teal => (0, 160, 160),
        GlyphColor::Mud => (108, 108, 48),
        GlyphColor::LightYellow => (255, 255, 144),
        GlyphColor::Magenta => (255, 0, 160),
        GlyphColor::LightTeal => (32, 255, 220),
        GlyphColor::LightViolet => (184, 168, 255),
        GlyphColor::LightPink => (255, 128, 128),
        GlyphColor::Mustard => (180, 180, 0),
        GlyphColor::BlueSlate => (160, 192, 208),
        GlyphColor::DeepLightBlue => (0, 176, 255),
        GlyphColor::Shade => (40, 40, 40),
    };
    Color::Rgb(r, g, b)
}

/// Style of a text attribute.
pub fn text_style(text: TextAttr) -> Style {
    let fg = color(text.color);
    let mut style = Style::default().fg(fg);
    style = match text.background {
        Background::Black => style.bg(Color::Reset),
        Background::Same => style.bg(fg),
        Background::Dark => style.bg(WALL_SHADE),
    };
    if text.inverted {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Character and style a glyph is drawn with.
pub fn glyph_style(glyph: Glyph) -> (char, Style) {
    match glyph.attr {
        Attr::Text(text) => (glyph.ch, text_style(text)),
        Attr::Special(_) if glyph == Glyph::TILE_PADDING => (' ', Style::default()),
        Attr::Special(_) => (
            glyph.ch,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
    }
}
