//! Named text colours and their lighting translation steps.

use strum::{EnumCount, EnumIter};

/// One of the named text colours a glyph can be drawn in.
///
/// Discriminants are the colour indices used by glyph tables and pref data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    Dark = 0,
    White = 1,
    Slate = 2,
    Orange = 3,
    Red = 4,
    Green = 5,
    Blue = 6,
    Umber = 7,
    LightDark = 8,
    LightWhite = 9,
    LightPurple = 10,
    Yellow = 11,
    LightRed = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightUmber = 15,
    Purple = 16,
    Violet = 17,
    Teal = 18,
    Mud = 19,
    LightYellow = 20,
    Magenta = 21,
    LightTeal = 22,
    LightViolet = 23,
    LightPink = 24,
    Mustard = 25,
    BlueSlate = 26,
    DeepLightBlue = 27,
    Shade = 28,
}

impl Color {
    /// Colours a multi-hued monster cycles through.
    pub const SHIMMER: [Color; 15] = [
        Color::White,
        Color::Slate,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Umber,
        Color::LightDark,
        Color::LightWhite,
        Color::LightPurple,
        Color::Yellow,
        Color::LightRed,
        Color::LightGreen,
        Color::LightBlue,
        Color::LightUmber,
    ];

    /// Colour index as stored in glyph tables.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Dark => "Dark",
            Color::White => "White",
            Color::Slate => "Slate",
            Color::Orange => "Orange",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Umber => "Umber",
            Color::LightDark => "Light Dark",
            Color::LightWhite => "Light Slate",
            Color::LightPurple => "Light Purple",
            Color::Yellow => "Yellow",
            Color::LightRed => "Light Red",
            Color::LightGreen => "Light Green",
            Color::LightBlue => "Light Blue",
            Color::LightUmber => "Light Umber",
            Color::Purple => "Purple",
            Color::Violet => "Violet",
            Color::Teal => "Teal",
            Color::Mud => "Mud",
            Color::LightYellow => "Light Yellow",
            Color::Magenta => "Magenta-Pink",
            Color::LightTeal => "Light Teal",
            Color::LightViolet => "Light Violet",
            Color::LightPink => "Light Pink",
            Color::Mustard => "Mustard",
            Color::BlueSlate => "Blue Slate",
            Color::DeepLightBlue => "Deep Light Blue",
            Color::Shade => "Shade",
        }
    }

    /// One brightening step, as used for torch-lit terrain.
    pub const fn lighter(self) -> Color {
        match self {
            Color::Dark => Color::LightDark,
            Color::White => Color::Yellow,
            Color::Slate => Color::LightWhite,
            Color::Orange => Color::Yellow,
            Color::Red => Color::LightRed,
            Color::Green => Color::LightGreen,
            Color::Blue => Color::LightBlue,
            Color::Umber => Color::LightUmber,
            Color::LightDark => Color::Slate,
            Color::LightWhite => Color::White,
            Color::LightPurple => Color::Yellow,
            Color::Yellow => Color::LightYellow,
            Color::LightRed => Color::Yellow,
            Color::LightGreen => Color::Yellow,
            Color::LightBlue => Color::Yellow,
            Color::LightUmber => Color::Yellow,
            Color::Purple => Color::LightPurple,
            Color::Violet => Color::LightViolet,
            Color::Teal => Color::LightTeal,
            Color::Mud => Color::Mustard,
            Color::LightYellow => Color::White,
            Color::Magenta => Color::LightPink,
            Color::LightTeal => Color::White,
            Color::LightViolet => Color::White,
            Color::LightPink => Color::Yellow,
            Color::Mustard => Color::Yellow,
            Color::BlueSlate => Color::DeepLightBlue,
            Color::DeepLightBlue => Color::LightBlue,
            Color::Shade => Color::LightDark,
        }
    }

    /// One darkening step, as used for remembered and unlit terrain.
    pub const fn darker(self) -> Color {
        match self {
            Color::Dark => Color::Dark,
            Color::White => Color::Slate,
            Color::Slate => Color::LightDark,
            Color::Orange => Color::Slate,
            Color::Red => Color::Slate,
            Color::Green => Color::Slate,
            Color::Blue => Color::Slate,
            Color::Umber => Color::LightDark,
            Color::LightDark => Color::Dark,
            Color::LightWhite => Color::Slate,
            Color::LightPurple => Color::Slate,
            Color::Yellow => Color::LightWhite,
            Color::LightRed => Color::Red,
            Color::LightGreen => Color::Green,
            Color::LightBlue => Color::Blue,
            Color::LightUmber => Color::Umber,
            Color::Purple => Color::Slate,
            Color::Violet => Color::Slate,
            Color::Teal => Color::Slate,
            Color::Mud => Color::Slate,
            Color::LightYellow => Color::Yellow,
            Color::Magenta => Color::Slate,
            Color::LightTeal => Color::Teal,
            Color::LightViolet => Color::Violet,
            Color::LightPink => Color::Magenta,
            Color::Mustard => Color::Slate,
            Color::BlueSlate => Color::Slate,
            Color::DeepLightBlue => Color::BlueSlate,
            Color::Shade => Color::Dark,
        }
    }

    /// Applies [`Color::lighter`] `steps` times.
    pub fn lighten(self, steps: u8) -> Color {
        (0..steps).fold(self, |color, _| color.lighter())
    }

    /// Applies [`Color::darker`] `steps` times.
    pub fn darken(self, steps: u8) -> Color {
        (0..steps).fold(self, |color, _| color.darker())
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn discriminants_are_dense() {
        for (index, color) in Color::iter().enumerate() {
            assert_eq!(color.index() as usize, index);
        }
        assert_eq!(Color::COUNT, 29);
    }

    #[test]
    fn darkening_bottoms_out_at_dark() {
        assert_eq!(Color::White.darken(2), Color::LightDark);
        assert_eq!(Color::White.darken(3), Color::Dark);
        assert_eq!(Color::Dark.darken(5), Color::Dark);
    }

    #[test]
    fn torch_step_brightens() {
        assert_eq!(Color::White.lighten(1), Color::Yellow);
        assert_eq!(Color::Umber.lighten(1), Color::LightUmber);
    }
}
