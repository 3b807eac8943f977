use crate::geometry::{Rectangle, Transform};
use crate::renderer::Renderer;
use crate::shape::{CATEGORIES, Shape, ShapeCategory};
use crate::style::IdenticonStyle;
use crate::theme::ColorTheme;

/// Derives every icon decision from hash bytes and drives the renderer.
///
/// A generator holds no cross-call state: identical `(style, hash, rect)`
/// inputs always produce the identical sequence of drawing calls, so one
/// generator may serve any number of callers concurrently.
pub struct IconGenerator {
    cell_count: i32,
}

impl IconGenerator {
    pub fn new() -> Self {
        Self { cell_count: 4 }
    }

    /// Renders the icon described by `hash` into `rect` through `renderer`.
    ///
    /// The hash must provide at least the 11 octet positions used by the
    /// built-in categories after wrap-around, which every hash of 6 or
    /// more bytes does; [`crate::Identicon`] enforces that minimum.
    pub fn generate(
        &self,
        renderer: &mut impl Renderer,
        rect: Rectangle,
        style: &IdenticonStyle,
        hash: &[u8],
    ) {
        let hue = compute_hue(hash);
        assert!(
            (0.0..=1.0).contains(&hue),
            "computed hue should be in [0.0, 1.0], was {hue}"
        );

        let theme = ColorTheme::new(hue, style);
        renderer.set_background(style.background_color());
        self.render_foreground(renderer, rect, &theme, hash);
    }

    /// Shrinks `rect` to the largest centered square whose side is a
    /// multiple of the cell count, so every cell gets an integer size and
    /// margins stay uniform.
    fn normalized_rectangle(&self, rect: Rectangle) -> Rectangle {
        let mut size = rect.width.min(rect.height);
        size -= size % self.cell_count;

        Rectangle::new(
            rect.x + (rect.width - size) / 2,
            rect.y + (rect.height - size) / 2,
            size,
            size,
        )
    }

    /// Resolves each category into a concrete shape, color and start
    /// rotation for this hash.
    fn resolve_shapes(&self, theme: &ColorTheme, hash: &[u8]) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(CATEGORIES.len());
        let mut used_color_indexes: Vec<usize> = Vec::new();

        for category in &CATEGORIES {
            let mut color_index =
                get_octet(hash, category.color_octet) as usize % ColorTheme::COUNT;

            // Disallow dark gray next to the dark color variant, and light
            // gray next to the light variant: the pairs are too close in
            // tone to keep coexisting categories distinguishable. Fall back
            // to the base color.
            if is_duplicate(&used_color_indexes, color_index, [0, 4])
                || is_duplicate(&used_color_indexes, color_index, [2, 3])
            {
                color_index = 1;
            }
            used_color_indexes.push(color_index);

            let start_rotation = category
                .rotation_octet
                .map_or(0, |octet| u32::from(get_octet(hash, octet)));
            let shape_index =
                get_octet(hash, category.shape_octet) as usize % category.shapes.len();

            shapes.push(Shape {
                definition: category.shapes[shape_index],
                color: theme[color_index],
                start_rotation,
                positions: category.positions,
            });
        }

        shapes
    }

    fn render_foreground(
        &self,
        renderer: &mut impl Renderer,
        rect: Rectangle,
        theme: &ColorTheme,
        hash: &[u8],
    ) {
        let normalized = self.normalized_rectangle(rect);
        let cell_size = normalized.width / self.cell_count;

        for shape in self.resolve_shapes(theme, hash) {
            // One render_shape block per category lets backends batch all
            // of its cells into a single colored output element.
            renderer.render_shape(shape.color, |renderer| {
                for (index, position) in shape.positions.iter().enumerate() {
                    renderer.set_transform(Transform::new(
                        normalized.x + position.x * cell_size,
                        normalized.y + position.y * cell_size,
                        cell_size,
                        shape.start_rotation + index as u32,
                    ));
                    shape.definition.render(renderer, cell_size, index);
                }
            });
        }
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps the first 4 hash bytes, read as a big-endian unsigned integer, to
/// a hue in [0.0, 1.0].
pub(crate) fn compute_hue(hash: &[u8]) -> f32 {
    let value = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
    value as f32 / u32::MAX as f32
}

/// Reads one hash byte as an unsigned value, wrapping the index around the
/// hash length.
pub(crate) fn get_octet(source: &[u8], index: usize) -> u8 {
    source[index % source.len()]
}

/// True when `new_value` belongs to a forbidden pair whose other member
/// (or itself) was already assigned to an earlier category.
fn is_duplicate(used: &[usize], new_value: usize, pair: [usize; 2]) -> bool {
    pair.contains(&new_value) && pair.iter().any(|value| used.contains(value))
}
