use thiserror::Error;

/// Validation failures raised when constructing icons, styles or colors.
///
/// These are argument errors: they are reported before any rendering starts,
/// so partially drawn output is impossible. Internal consistency failures
/// (a computed hue outside [0, 1], a color theme index outside 0..5) are
/// bugs, not input errors, and panic instead.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("{component} should be in [0, 255], was {value}")]
    ComponentOutOfRange { component: &'static str, value: u32 },

    #[error("{component} should be in [0.0, 1.0], was {value}")]
    HslOutOfRange { component: &'static str, value: f32 },

    #[error("padding should be in [0.0, 0.4], was {0}")]
    InvalidPadding(f32),

    #[error("saturation should be in [0.0, 1.0], was {0}")]
    InvalidSaturation(f32),

    #[error("{range} bounds should be in [0.0, 1.0]")]
    InvalidLightnessRange { range: &'static str },

    #[error("input hash should be composed of at least 6 bytes, got {0}")]
    HashTooShort(usize),

    #[error("icon size should be 1 pixel or larger")]
    InvalidSize,
}
