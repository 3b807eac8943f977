//! Deterministic identicon generation.
//!
//! An input hash is mapped to a hue, a 5-color theme and a set of
//! positioned, rotated shapes on a 4x4 grid, then drawn through a
//! [`Renderer`]. The same hash always produces the same icon; any backend
//! implementing the renderer trait can emit the result in its own format.
//! [`SvgRenderer`] is the built-in reference backend.
//!
//! ```
//! use identicon_core::{Identicon, IdenticonStyle};
//!
//! let icon = Identicon::from_value("john.doe@example.com", 100, IdenticonStyle::default())?;
//! let svg = icon.to_svg();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), identicon_core::Error>(())
//! ```

mod color;
mod error;
mod generator;
mod geometry;
mod identicon;
mod renderer;
mod shape;
mod style;
mod svg;
mod theme;

pub use color::Color;
pub use error::Error;
pub use generator::IconGenerator;
pub use geometry::{Point, Rectangle, Transform};
pub use identicon::Identicon;
pub use renderer::{Renderer, TriangleDirection};
pub use style::IdenticonStyle;
pub use svg::SvgRenderer;
