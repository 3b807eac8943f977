use crate::error::Error;

/// An immutable 32-bit RGBA color value.
///
/// Channels are packed as `0xRRGGBBAA`. Colors are cheap to copy and compare
/// structurally, regardless of which constructor produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Builds a color from a packed `0xRRGGBBAA` value.
    /// Every 32-bit pattern is a valid color.
    pub const fn from_hex(rgba: u32) -> Self {
        Self(rgba)
    }

    /// Builds a fully specified color from its four channels.
    /// Each component must fit in [0, 255].
    pub fn from_components(red: u32, green: u32, blue: u32, alpha: u32) -> Result<Self, Error> {
        check_channel("red", red)?;
        check_channel("green", green)?;
        check_channel("blue", blue)?;
        check_channel("alpha", alpha)?;
        Ok(Self((red << 24) | (green << 16) | (blue << 8) | alpha))
    }

    /// Builds an opaque color from hue, saturation and lightness,
    /// each in [0.0, 1.0].
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Result<Self, Error> {
        check_fraction("hue", hue)?;
        check_fraction("saturation", saturation)?;
        check_fraction("lightness", lightness)?;
        Ok(hsl(hue, saturation, lightness))
    }

    pub const fn red(self) -> u32 {
        (self.0 >> 24) & 0xff
    }

    pub const fn green(self) -> u32 {
        (self.0 >> 16) & 0xff
    }

    pub const fn blue(self) -> u32 {
        (self.0 >> 8) & 0xff
    }

    pub const fn alpha(self) -> u32 {
        self.0 & 0xff
    }

    /// `#rrggbbaa`, lowercase, zero-padded.
    pub fn to_rgba_string(self) -> String {
        format!("#{:08x}", self.0)
    }

    /// `#rrggbb`, lowercase, zero-padded; the alpha channel is dropped.
    pub fn to_rgb_string(self) -> String {
        format!("#{:06x}", self.0 >> 8)
    }

    /// Alpha in [0.0, 1.0], as written to SVG `fill-opacity`.
    pub fn opacity(self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// Composites this color over `background` with the standard
    /// "over" operator. Only raster backends need this; vector backends
    /// let the output format blend.
    pub fn blend_over(self, background: Color) -> Color {
        let fore_alpha = self.alpha();
        if fore_alpha < 1 {
            return background;
        }
        if fore_alpha > 254 || background.alpha() < 1 {
            return self;
        }

        // Premultiplied-alpha weighted average of each channel.
        let fore_pa = fore_alpha * 255;
        let back_pa = background.alpha() * (255 - fore_alpha);
        let alpha = fore_pa + back_pa;

        let red = (fore_pa * self.red() + back_pa * background.red()) / alpha;
        let green = (fore_pa * self.green() + back_pa * background.green()) / alpha;
        let blue = (fore_pa * self.blue() + back_pa * background.blue()) / alpha;
        Self((red << 24) | (green << 16) | (blue << 8) | (alpha / 255))
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.to_rgba_string())
    }
}

fn check_channel(component: &'static str, value: u32) -> Result<(), Error> {
    if value > 0xff {
        Err(Error::ComponentOutOfRange { component, value })
    } else {
        Ok(())
    }
}

fn check_fraction(component: &'static str, value: f32) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::HslOutOfRange { component, value })
    }
}

/// HSL conversion without argument validation; callers guarantee that
/// every component is in [0.0, 1.0].
pub(crate) fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    debug_assert!((0.0..=1.0).contains(&hue));
    debug_assert!((0.0..=1.0).contains(&saturation));
    debug_assert!((0.0..=1.0).contains(&lightness));

    if saturation == 0.0 {
        // No saturation: a shade of gray, always opaque.
        let light = (lightness * 255.0).round() as u32;
        return Color((light << 24) | (light << 16) | (light << 8) | 0xff);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = lightness * 2.0 - m2;

    let red = hue_to_channel(m1, m2, hue * 6.0 + 2.0);
    let green = hue_to_channel(m1, m2, hue * 6.0);
    let blue = hue_to_channel(m1, m2, hue * 6.0 - 2.0);
    Color((red << 24) | (green << 16) | (blue << 8) | 0xff)
}

fn hue_to_channel(m1: f32, m2: f32, h: f32) -> u32 {
    // Wrap into [0, 6) before the piecewise evaluation.
    let hh = if h < 0.0 {
        h + 6.0
    } else if h > 6.0 {
        h - 6.0
    } else {
        h
    };

    let value = if hh < 1.0 {
        m1 + (m2 - m1) * hh
    } else if hh < 3.0 {
        m2
    } else if hh < 4.0 {
        m1 + (m2 - m1) * (4.0 - hh)
    } else {
        m1
    };
    (255.0 * value).round() as u32
}

const COMPENSATION_FACTORS: [f32; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// Adjusts a target lightness so that perceived brightness stays even
/// across hues. Raw HSL lightness at a fixed value looks lighter for
/// yellow or cyan than for blue or red; each hue sextant gets its own
/// correction factor.
pub(crate) fn compensate_lightness(lightness: f32, hue: f32) -> f32 {
    debug_assert!((0.0..=1.0).contains(&hue));
    debug_assert!((0.0..=1.0).contains(&lightness));

    let factor = COMPENSATION_FACTORS[(hue * 6.0 + 0.5) as usize];
    if lightness < 0.5 {
        lightness * factor * 2.0
    } else {
        factor + (lightness - 0.5) * (1.0 - factor) * 2.0
    }
}
