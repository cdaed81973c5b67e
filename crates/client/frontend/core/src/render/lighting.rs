//! Text-mode lighting of terrain attributes.

use game_core::{Attr, Background, FeatureInfo, Lighting, WallStyle};

/// Adjusts a terrain attribute for the cell's lighting and the wall style.
///
/// Glowing features brighten one step under torchlight and darken one or two
/// steps when lit-but-unseen or remembered. Walls then receive the background
/// treatment of `wall_style`. The inversion marker and special tiles pass
/// through untouched.
pub fn apply_lighting(
    attr: Attr,
    lighting: Lighting,
    feature: &FeatureInfo,
    wall_style: WallStyle,
) -> Attr {
    let Attr::Text(mut text) = attr else {
        return attr;
    };

    if feature.light_source {
        text.color = match lighting {
            Lighting::Torch => text.color.lighten(1),
            Lighting::Lit => text.color.darken(1),
            Lighting::Dark => text.color.darken(2),
            Lighting::Los => text.color,
        };
    }

    if feature.wall {
        match wall_style {
            WallStyle::Hybrid => text.background = Background::Dark,
            WallStyle::Solid => text.background = Background::Same,
            WallStyle::Plain => {}
        }
    }

    Attr::Text(text)
}

#[cfg(test)]
mod tests {
    use game_core::{Color, TextAttr};

    use super::*;

    fn lava() -> FeatureInfo {
        FeatureInfo::new("lava", 10).with_light_source(true)
    }

    fn granite() -> FeatureInfo {
        FeatureInfo::new("granite", 10).with_wall(true)
    }

    #[test]
    fn light_sources_follow_lighting_steps() {
        let red = Attr::text(Color::Red);
        let torch = apply_lighting(red, Lighting::Torch, &lava(), WallStyle::Plain);
        let lit = apply_lighting(red, Lighting::Lit, &lava(), WallStyle::Plain);
        let dark = apply_lighting(red, Lighting::Dark, &lava(), WallStyle::Plain);
        let los = apply_lighting(red, Lighting::Los, &lava(), WallStyle::Plain);

        assert_eq!(torch.color(), Some(Color::Red.lighter()));
        assert_eq!(lit.color(), Some(Color::Red.darker()));
        assert_eq!(dark.color(), Some(Color::Red.darker().darker()));
        assert_eq!(los, red);
    }

    #[test]
    fn ordinary_features_keep_colour() {
        let floor = FeatureInfo::new("floor", 5);
        let white = Attr::text(Color::White);
        assert_eq!(
            apply_lighting(white, Lighting::Dark, &floor, WallStyle::Hybrid),
            white
        );
    }

    #[test]
    fn walls_take_style_background() {
        let white = Attr::text(Color::White);
        let hybrid = apply_lighting(white, Lighting::Los, &granite(), WallStyle::Hybrid);
        let solid = apply_lighting(white, Lighting::Los, &granite(), WallStyle::Solid);
        let plain = apply_lighting(white, Lighting::Los, &granite(), WallStyle::Plain);

        assert_eq!(
            hybrid,
            Attr::Text(TextAttr::new(Color::White).with_background(Background::Dark))
        );
        assert_eq!(
            solid,
            Attr::Text(TextAttr::new(Color::White).with_background(Background::Same))
        );
        assert_eq!(plain, white);
    }

    #[test]
    fn inversion_survives() {
        let inverted = Attr::Text(TextAttr::new(Color::Red).with_inverted(true));
        let feature = lava().with_wall(true);
        let out = apply_lighting(inverted, Lighting::Dark, &feature, WallStyle::Solid);

        let Attr::Text(text) = out else {
            panic!("text attribute expected");
        };
        assert!(text.inverted);
        assert_eq!(text.background, Background::Same);
    }

    #[test]
    fn special_tiles_pass_through() {
        let special = Attr::Special(0x85);
        assert_eq!(
            apply_lighting(special, Lighting::Torch, &lava(), WallStyle::Solid),
            special
        );
    }
}
