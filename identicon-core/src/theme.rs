use std::ops::Index;

use crate::color::{self, Color, compensate_lightness};
use crate::style::IdenticonStyle;

/// The 5-color palette derived from one hue for one icon: a base color
/// with light and dark variants plus a light and a dark shade of gray.
pub(crate) struct ColorTheme {
    dark_gray: Color,
    color: Color,
    light_gray: Color,
    light_color: Color,
    dark_color: Color,
}

impl ColorTheme {
    pub const COUNT: usize = 5;

    /// Derives the palette from a hue and a style. The hue must be in
    /// [0.0, 1.0]; a value outside that range is a generator bug.
    pub fn new(hue: f32, style: &IdenticonStyle) -> Self {
        assert!(
            (0.0..=1.0).contains(&hue),
            "hue should be in [0.0, 1.0], was {hue}"
        );

        let saturation = style.saturation();
        let lightness = style.color_lightness();
        let mid_lightness = (lightness.start() + lightness.end()) / 2.0;

        Self {
            color: color::hsl(hue, saturation, compensate_lightness(mid_lightness, hue)),
            light_color: color::hsl(
                hue,
                saturation,
                compensate_lightness(*lightness.end(), hue),
            ),
            // Derived from the same upper lightness bound as the light
            // variant, so the two are always equal. Changing this would
            // change every generated icon; see DESIGN.md.
            dark_color: color::hsl(
                hue,
                saturation,
                compensate_lightness(*lightness.end(), hue),
            ),
            light_gray: color::hsl(0.0, 0.0, *style.gray_lightness().end()),
            dark_gray: color::hsl(0.0, 0.0, *style.gray_lightness().start()),
        }
    }
}

impl Index<usize> for ColorTheme {
    type Output = Color;

    /// Fixed palette order; any index outside 0..5 is a programming error.
    fn index(&self, index: usize) -> &Color {
        match index {
            0 => &self.dark_gray,
            1 => &self.color,
            2 => &self.light_gray,
            3 => &self.light_color,
            4 => &self.dark_color,
            _ => panic!("color theme index should be in 0..5, was {index}"),
        }
    }
}
