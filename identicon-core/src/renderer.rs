use crate::color::Color;
use crate::geometry::{Point, Transform};

/// Which corner of a triangle's bounding box holds the right angle.
///
/// The triangle is built from the four box corners in the fixed order
/// top-right, bottom-right, bottom-left, top-left; the variant's index
/// picks the corner to drop from that list, leaving the three whose right
/// angle sits at the named corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleDirection {
    SouthWest = 0,
    NorthWest = 1,
    NorthEast = 2,
    SouthEast = 3,
}

/// Drawing capability that shape definitions render into.
///
/// Backends implement the raw polygon/circle sinks plus the shape and
/// background hooks; the geometric primitives are provided on top and
/// route every polygon-like shape through one shared transform step.
/// Circles keep a dedicated codepath: rotating a circle's bounding box
/// must still yield a valid bounding box for the same circle.
///
/// A renderer instance accumulates state during one generation and is not
/// meant to be shared across concurrent generations.
pub trait Renderer {
    /// The transform applied to all subsequently added shapes.
    fn transform(&self) -> Transform;

    /// Replaces the active transform.
    fn set_transform(&mut self, transform: Transform);

    /// Receives a polygon whose points are already in icon coordinates.
    fn add_polygon_no_transform(&mut self, points: Vec<Point>);

    /// Receives a circle by the transformed north-west corner of its
    /// bounding box. `counter_clockwise` carves the circle out of the
    /// surrounding fill instead of adding it.
    fn add_circle_no_transform(&mut self, north_west: Point, diameter: f32, counter_clockwise: bool);

    /// Fills the whole icon area with a single color.
    fn set_background(&mut self, color: Color);

    /// Opens a batch of primitives sharing one fill color.
    fn begin_shape(&mut self, color: Color);

    /// Closes the batch opened by [`Renderer::begin_shape`].
    fn end_shape(&mut self);

    /// Renders everything drawn by `draw` in the given color. Backends may
    /// merge all primitives of one color into a single output element.
    fn render_shape(&mut self, color: Color, draw: impl FnOnce(&mut Self))
    where
        Self: Sized,
    {
        self.begin_shape(color);
        draw(self);
        self.end_shape();
    }

    /// Adds a polygon from cell-local points. `invert` reverses the
    /// winding order so fill-rule-aware backends subtract the area.
    fn add_polygon(&mut self, mut points: Vec<Point>, invert: bool) {
        if invert {
            points.reverse();
        }
        let transform = self.transform();
        for point in &mut points {
            *point = transform.transform_point(point.x, point.y, 0.0, 0.0);
        }
        self.add_polygon_no_transform(points);
    }

    /// Adds an axis-aligned rectangle.
    fn add_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, invert: bool) {
        self.add_polygon(
            vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            invert,
        );
    }

    /// Adds a circle inscribed in the square at (`x`, `y`) with side `size`.
    fn add_circle(&mut self, x: f32, y: f32, size: f32, invert: bool) {
        let north_west = self.transform().transform_point(x, y, size, size);
        self.add_circle_no_transform(north_west, size, invert);
    }

    /// Adds a right triangle filling the given bounding box, with the
    /// right angle at the corner named by `direction`.
    fn add_triangle(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        direction: TriangleDirection,
        invert: bool,
    ) {
        let mut points = vec![
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ];
        points.remove(direction as usize);
        self.add_polygon(points, invert);
    }

    /// Adds a rhombus from the midpoints of the bounding box's edges.
    fn add_rhombus(&mut self, x: f32, y: f32, width: f32, height: f32, invert: bool) {
        self.add_polygon(
            vec![
                Point::new(x + width / 2.0, y),
                Point::new(x + width, y + height / 2.0),
                Point::new(x + width / 2.0, y + height),
                Point::new(x, y + height / 2.0),
            ],
            invert,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records raw primitive calls for inspection.
    #[derive(Default)]
    struct RecordingRenderer {
        transform: Transform,
        polygons: Vec<Vec<Point>>,
        circles: Vec<(Point, f32, bool)>,
    }

    impl Renderer for RecordingRenderer {
        fn transform(&self) -> Transform {
            self.transform
        }

        fn set_transform(&mut self, transform: Transform) {
            self.transform = transform;
        }

        fn add_polygon_no_transform(&mut self, points: Vec<Point>) {
            self.polygons.push(points);
        }

        fn add_circle_no_transform(
            &mut self,
            north_west: Point,
            diameter: f32,
            counter_clockwise: bool,
        ) {
            self.circles.push((north_west, diameter, counter_clockwise));
        }

        fn set_background(&mut self, _color: Color) {}
        fn begin_shape(&mut self, _color: Color) {}
        fn end_shape(&mut self) {}
    }

    #[test]
    fn rectangle_expands_to_four_corners() {
        let mut renderer = RecordingRenderer::default();
        renderer.add_rectangle(1.0, 2.0, 3.0, 4.0, false);
        assert_eq!(
            renderer.polygons,
            vec![vec![
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]]
        );
    }

    #[test]
    fn invert_reverses_winding_before_transform() {
        let mut renderer = RecordingRenderer::default();
        renderer.add_rectangle(1.0, 2.0, 3.0, 4.0, true);
        assert_eq!(
            renderer.polygons,
            vec![vec![
                Point::new(1.0, 6.0),
                Point::new(4.0, 6.0),
                Point::new(4.0, 2.0),
                Point::new(1.0, 2.0),
            ]]
        );
    }

    #[test]
    fn triangle_drops_the_direction_corner() {
        let mut renderer = RecordingRenderer::default();
        // North-east keeps the right angle at the top-right corner and
        // drops the opposite (bottom-left) point.
        renderer.add_triangle(0.0, 0.0, 2.0, 2.0, TriangleDirection::NorthEast, false);
        assert_eq!(
            renderer.polygons,
            vec![vec![
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 0.0),
            ]]
        );
    }

    #[test]
    fn rhombus_uses_edge_midpoints() {
        let mut renderer = RecordingRenderer::default();
        renderer.add_rhombus(0.0, 0.0, 4.0, 2.0, false);
        assert_eq!(
            renderer.polygons,
            vec![vec![
                Point::new(2.0, 0.0),
                Point::new(4.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 1.0),
            ]]
        );
    }

    #[test]
    fn polygons_pass_through_the_active_transform() {
        let mut renderer = RecordingRenderer::default();
        renderer.set_transform(Transform::new(10, 20, 4, 0));
        renderer.add_rectangle(0.0, 0.0, 1.0, 1.0, false);
        assert_eq!(renderer.polygons[0][0], Point::new(10.0, 20.0));
    }

    #[test]
    fn circles_transform_their_bounding_box_origin() {
        let mut renderer = RecordingRenderer::default();
        renderer.set_transform(Transform::new(0, 0, 10, 1));
        renderer.add_circle(1.0, 1.0, 4.0, false);
        // Quarter turn: box origin moves to (size - y - diameter, x).
        assert_eq!(renderer.circles, vec![(Point::new(5.0, 1.0), 4.0, false)]);
    }
}
