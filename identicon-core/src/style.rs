use std::ops::RangeInclusive;

use crate::color::Color;
use crate::error::Error;

/// Visual configuration of an identicon, validated once at construction
/// and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct IdenticonStyle {
    background_color: Color,
    padding: f32,
    saturation: f32,
    color_lightness: RangeInclusive<f32>,
    gray_lightness: RangeInclusive<f32>,
}

impl IdenticonStyle {
    pub const DEFAULT_PADDING: f32 = 0.08;
    pub const DEFAULT_SATURATION: f32 = 0.5;
    pub const DEFAULT_COLOR_LIGHTNESS: RangeInclusive<f32> = 0.4..=0.8;
    pub const DEFAULT_GRAY_LIGHTNESS: RangeInclusive<f32> = 0.3..=0.9;

    /// Builds a style, rejecting out-of-range parameters:
    /// padding in [0.0, 0.4], saturation and both lightness ranges in
    /// [0.0, 1.0].
    pub fn new(
        background_color: Color,
        padding: f32,
        saturation: f32,
        color_lightness: RangeInclusive<f32>,
        gray_lightness: RangeInclusive<f32>,
    ) -> Result<Self, Error> {
        if !(0.0..=0.4).contains(&padding) {
            return Err(Error::InvalidPadding(padding));
        }
        if !(0.0..=1.0).contains(&saturation) {
            return Err(Error::InvalidSaturation(saturation));
        }
        check_lightness_range("color lightness", &color_lightness)?;
        check_lightness_range("gray lightness", &gray_lightness)?;

        Ok(Self {
            background_color,
            padding,
            saturation,
            color_lightness,
            gray_lightness,
        })
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Fraction of the icon size left blank around the drawing area.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Lightness bounds for the colored theme entries.
    pub fn color_lightness(&self) -> &RangeInclusive<f32> {
        &self.color_lightness
    }

    /// Lightness bounds for the gray theme entries.
    pub fn gray_lightness(&self) -> &RangeInclusive<f32> {
        &self.gray_lightness
    }
}

impl Default for IdenticonStyle {
    /// White background, 8% padding, 50% saturation, colors in the
    /// 0.4..=0.8 lightness band and grays in 0.3..=0.9.
    fn default() -> Self {
        Self {
            background_color: Color::from_hex(0xffffffff),
            padding: Self::DEFAULT_PADDING,
            saturation: Self::DEFAULT_SATURATION,
            color_lightness: Self::DEFAULT_COLOR_LIGHTNESS,
            gray_lightness: Self::DEFAULT_GRAY_LIGHTNESS,
        }
    }
}

fn check_lightness_range(
    range: &'static str,
    bounds: &RangeInclusive<f32>,
) -> Result<(), Error> {
    if (0.0..=1.0).contains(bounds.start()) && (0.0..=1.0).contains(bounds.end()) {
        Ok(())
    } else {
        Err(Error::InvalidLightnessRange { range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_documented_values() {
        let style = IdenticonStyle::default();
        assert_eq!(style.background_color(), Color::from_hex(0xffffffff));
        assert_eq!(style.padding(), 0.08);
        assert_eq!(style.saturation(), 0.5);
        assert_eq!(style.color_lightness(), &(0.4..=0.8));
        assert_eq!(style.gray_lightness(), &(0.3..=0.9));
    }

    #[test]
    fn padding_above_limit_is_rejected() {
        let result = IdenticonStyle::new(
            Color::from_hex(0xffffffff),
            0.5,
            0.5,
            0.4..=0.8,
            0.3..=0.9,
        );
        assert_eq!(result, Err(Error::InvalidPadding(0.5)));
    }

    #[test]
    fn negative_saturation_is_rejected() {
        let result = IdenticonStyle::new(
            Color::from_hex(0xffffffff),
            0.08,
            -0.1,
            0.4..=0.8,
            0.3..=0.9,
        );
        assert_eq!(result, Err(Error::InvalidSaturation(-0.1)));
    }

    #[test]
    fn lightness_bounds_outside_unit_interval_are_rejected() {
        let bad_color = IdenticonStyle::new(
            Color::from_hex(0xffffffff),
            0.08,
            0.5,
            0.4..=1.2,
            0.3..=0.9,
        );
        assert!(matches!(
            bad_color,
            Err(Error::InvalidLightnessRange { range: "color lightness" })
        ));

        let bad_gray = IdenticonStyle::new(
            Color::from_hex(0xffffffff),
            0.08,
            0.5,
            0.4..=0.8,
            -0.3..=0.9,
        );
        assert!(matches!(
            bad_gray,
            Err(Error::InvalidLightnessRange { range: "gray lightness" })
        ));
    }
}
