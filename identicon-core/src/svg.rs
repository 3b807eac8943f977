use crate::color::Color;
use crate::geometry::{Point, Transform};
use crate::renderer::Renderer;

/// Accumulates SVG path data (`M`/`L`/`a`/`Z` commands) for one fill color.
#[derive(Default)]
pub(crate) struct SvgPath {
    data: String,
}

impl SvgPath {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.data.push_str(&format!("M{x} {y}"));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.data.push_str(&format!("L{x} {y}"));
    }

    /// Relative elliptical arc to `(dx_end, dy_end)`.
    pub fn arc_by(&mut self, x_radius: f32, y_radius: f32, dx_end: f32, dy_end: f32, clockwise: bool) {
        let sweep = i32::from(clockwise);
        self.data
            .push_str(&format!("a{x_radius},{y_radius} 0 0,{sweep} {dx_end},{dy_end}"));
    }

    pub fn close(&mut self) {
        self.data.push('Z');
    }

    pub fn add_polygon(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first.x, first.y);
        for point in rest {
            self.line_to(point.x, point.y);
        }
        self.close();
    }

    /// A full circle as two half-circle arcs; a counter-clockwise sweep
    /// carves the disk out of the surrounding fill under the nonzero rule.
    pub fn add_circle(&mut self, north_west: Point, diameter: f32, counter_clockwise: bool) {
        let radius = diameter / 2.0;
        self.move_to(north_west.x, north_west.y + radius);
        self.arc_by(radius, radius, diameter, 0.0, !counter_clockwise);
        self.arc_by(radius, radius, -diameter, 0.0, !counter_clockwise);
        self.close();
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// Renderer backend that serializes drawing calls to an SVG document,
/// batching all primitives of one fill color into a single `<path>`.
pub struct SvgRenderer {
    width: u32,
    height: u32,
    transform: Transform,
    // Vec keyed by color keeps paths in first-use order, so output is
    // deterministic. The catalog produces at most a handful of colors.
    paths: Vec<(Color, SvgPath)>,
    current: usize,
    background: Color,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Transform::default(),
            paths: Vec::new(),
            current: usize::MAX,
            background: Color::from_hex(0x00000000),
        }
    }

    fn current_path(&mut self) -> &mut SvgPath {
        self.paths
            .get_mut(self.current)
            .map(|(_, path)| path)
            .expect("drawing primitives may only be added inside render_shape")
    }

    /// Serializes the accumulated icon as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"xMidYMid meet\">\n"
        ));

        // A fully transparent background needs no rect.
        if self.background.alpha() > 0 {
            out.push_str(&format!(
                "<rect fill=\"{}\" fill-opacity=\"{}\" x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\"/>\n",
                self.background.to_rgb_string(),
                self.background.opacity(),
            ));
        }

        for (color, path) in &self.paths {
            out.push_str(&format!(
                "<path fill=\"{}\" d=\"{}\"/>\n",
                color.to_rgb_string(),
                path.as_str(),
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Renderer for SvgRenderer {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn add_polygon_no_transform(&mut self, points: Vec<Point>) {
        self.current_path().add_polygon(&points);
    }

    fn add_circle_no_transform(&mut self, north_west: Point, diameter: f32, counter_clockwise: bool) {
        self.current_path()
            .add_circle(north_west, diameter, counter_clockwise);
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn begin_shape(&mut self, color: Color) {
        self.current = self
            .paths
            .iter()
            .position(|(existing, _)| *existing == color)
            .unwrap_or_else(|| {
                self.paths.push((color, SvgPath::default()));
                self.paths.len() - 1
            });
    }

    fn end_shape(&mut self) {
        self.current = usize::MAX;
    }
}
