use std::fmt::Display;

use sha1::{Digest, Sha1};

use crate::error::Error;
use crate::generator::IconGenerator;
use crate::geometry::Rectangle;
use crate::renderer::Renderer;
use crate::style::IdenticonStyle;
use crate::svg::SvgRenderer;

/// An icon made of simple shapes, generated deterministically from a hash:
/// the same hash always draws the same icon.
///
/// Commonly used as a placeholder avatar for users without a picture.
#[derive(Clone, Debug)]
pub struct Identicon {
    hash: Vec<u8>,
    size: u32,
    style: IdenticonStyle,
}

impl Identicon {
    /// Creates an identicon from a precomputed hash of at least 6 bytes,
    /// rendered at `size` pixels (at least 1) square.
    pub fn from_hash(
        hash: impl Into<Vec<u8>>,
        size: u32,
        style: IdenticonStyle,
    ) -> Result<Self, Error> {
        let hash = hash.into();
        if hash.len() < 6 {
            return Err(Error::HashTooShort(hash.len()));
        }
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self { hash, size, style })
    }

    /// Creates an identicon for an arbitrary value by hashing its string
    /// form with SHA-1. Only the resulting 20 bytes matter to generation;
    /// any other source of bytes works through [`Identicon::from_hash`].
    pub fn from_value(
        value: impl Display,
        size: u32,
        style: IdenticonStyle,
    ) -> Result<Self, Error> {
        let digest = Sha1::digest(value.to_string().as_bytes());
        Self::from_hash(digest.to_vec(), size, style)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn style(&self) -> &IdenticonStyle {
        &self.style
    }

    /// Draws this icon through the given renderer. Use this with a custom
    /// backend to render formats the crate does not support natively.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        IconGenerator::new().generate(renderer, self.icon_bounds(), &self.style, &self.hash);
    }

    /// Renders this icon as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut renderer = SvgRenderer::new(self.size, self.size);
        self.draw(&mut renderer);
        renderer.to_svg()
    }

    /// Icon bounds with the style's padding applied on all sides.
    fn icon_bounds(&self) -> Rectangle {
        let size = self.size as i32;
        let padding = (self.style.padding() * self.size as f32) as i32;
        Rectangle::new(padding, padding, size - padding * 2, size - padding * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hash_is_rejected() {
        let result = Identicon::from_hash([1u8, 2, 3, 4, 5], 100, IdenticonStyle::default());
        assert_eq!(result.unwrap_err(), Error::HashTooShort(5));
    }

    #[test]
    fn six_byte_hash_is_accepted() {
        assert!(Identicon::from_hash([1u8, 2, 3, 4, 5, 6], 100, IdenticonStyle::default()).is_ok());
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = Identicon::from_hash([0u8; 20], 0, IdenticonStyle::default());
        assert_eq!(result.unwrap_err(), Error::InvalidSize);
    }

    #[test]
    fn value_hashing_is_deterministic() {
        let a = Identicon::from_value("john.doe@example.com", 64, IdenticonStyle::default());
        let b = Identicon::from_value("john.doe@example.com", 64, IdenticonStyle::default());
        assert_eq!(a.unwrap().to_svg(), b.unwrap().to_svg());
    }

    #[test]
    fn different_values_generally_differ() {
        let a = Identicon::from_value("alice", 64, IdenticonStyle::default()).unwrap();
        let b = Identicon::from_value("bob", 64, IdenticonStyle::default()).unwrap();
        assert_ne!(a.to_svg(), b.to_svg());
    }

    #[test]
    fn padding_shrinks_the_drawing_area() {
        let icon = Identicon::from_hash([0u8; 20], 100, IdenticonStyle::default()).unwrap();
        assert_eq!(icon.icon_bounds(), Rectangle::new(8, 8, 84, 84));
    }
}
