use crate::color::Color;
use crate::geometry::Point;
use crate::renderer::{Renderer, TriangleDirection};

/// Grid coordinates of one cell occupied by a shape instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ShapePosition {
    pub x: i32,
    pub y: i32,
}

const fn at(x: i32, y: i32) -> ShapePosition {
    ShapePosition { x, y }
}

/// Hash-independent description of where and how one class of shapes
/// appears: which hash octets drive its color, shape and rotation choices,
/// and the grid cells it occupies. Defined once as static catalog data.
pub(crate) struct ShapeCategory {
    pub color_octet: usize,
    pub shapes: &'static [ShapeDefinition],
    pub shape_octet: usize,
    pub rotation_octet: Option<usize>,
    pub positions: &'static [ShapePosition],
}

/// The three built-in categories: edge cells, corner cells, center cells.
pub(crate) static CATEGORIES: [ShapeCategory; 3] = [
    ShapeCategory {
        color_octet: 8,
        shapes: &OUTER_SHAPES,
        shape_octet: 2,
        rotation_octet: Some(3),
        positions: &[
            at(1, 0),
            at(2, 0),
            at(2, 3),
            at(1, 3),
            at(0, 1),
            at(3, 1),
            at(3, 2),
            at(0, 2),
        ],
    },
    ShapeCategory {
        color_octet: 9,
        shapes: &OUTER_SHAPES,
        shape_octet: 4,
        rotation_octet: Some(5),
        positions: &[at(0, 0), at(3, 0), at(3, 3), at(0, 3)],
    },
    ShapeCategory {
        color_octet: 10,
        shapes: &CENTER_SHAPES,
        shape_octet: 1,
        rotation_octet: None,
        positions: &[at(1, 1), at(2, 1), at(2, 2), at(1, 2)],
    },
];

/// A shape resolved for one generation: the chosen definition, its fill
/// color, the rotation of its first cell, and the cells it occupies.
pub(crate) struct Shape {
    pub definition: ShapeDefinition,
    pub color: Color,
    pub start_rotation: u32,
    pub positions: &'static [ShapePosition],
}

/// The fixed catalog of unit-cell painters. Each variant draws itself into
/// a cell of the given size, knowing its zero-based index within its
/// category's position list. Definitions hold no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShapeDefinition {
    // Outer shapes, drawn on the icon border.
    LargeTriangle,
    SmallTriangle,
    Rhombus,
    Circle,
    // Center shapes, drawn in the four middle cells.
    InverseWindmill,
    FourTriangles,
    Square,
    Window,
    FourCircles,
    FourShards,
    Cross,
    RhombusPart,
    InverseRhombusPart,
    InverseWindow,
    FourInverseCircles,
    Chess,
    QuarterDisk,
}

pub(crate) static OUTER_SHAPES: [ShapeDefinition; 4] = [
    ShapeDefinition::LargeTriangle,
    ShapeDefinition::SmallTriangle,
    ShapeDefinition::Rhombus,
    ShapeDefinition::Circle,
];

pub(crate) static CENTER_SHAPES: [ShapeDefinition; 13] = [
    ShapeDefinition::InverseWindmill,
    ShapeDefinition::FourTriangles,
    ShapeDefinition::Square,
    ShapeDefinition::Window,
    ShapeDefinition::FourCircles,
    ShapeDefinition::FourShards,
    ShapeDefinition::Cross,
    ShapeDefinition::RhombusPart,
    ShapeDefinition::InverseRhombusPart,
    ShapeDefinition::InverseWindow,
    ShapeDefinition::FourInverseCircles,
    ShapeDefinition::Chess,
    ShapeDefinition::QuarterDisk,
];

impl ShapeDefinition {
    /// Issues drawing calls local to a unit cell of side `cell`. `index` is
    /// this instance's position within the category's position list.
    ///
    /// Several shapes branch on the integer cell size or truncate
    /// intermediate values; those rules keep thin borders visible in tiny
    /// icons and must not be simplified to pure float math.
    pub fn render(self, renderer: &mut impl Renderer, cell: i32, index: usize) {
        let c = cell as f32;
        match self {
            Self::LargeTriangle => {
                renderer.add_triangle(0.0, 0.0, c, c, TriangleDirection::SouthWest, false);
            }
            Self::SmallTriangle => {
                renderer.add_triangle(0.0, c / 2.0, c, c / 2.0, TriangleDirection::SouthWest, false);
            }
            Self::Rhombus => {
                renderer.add_rhombus(0.0, 0.0, c, c, false);
            }
            Self::Circle => {
                let m = c / 6.0;
                renderer.add_circle(m, m, c - 2.0 * m, false);
            }
            Self::InverseWindmill => {
                let k = c * 0.42;
                renderer.add_polygon(
                    vec![
                        Point::new(0.0, 0.0),
                        Point::new(c, 0.0),
                        Point::new(c, c - k * 2.0),
                        Point::new(c - k, c),
                        Point::new(0.0, c),
                    ],
                    false,
                );
            }
            Self::FourTriangles => {
                let w = c * 0.5;
                let h = c * 0.8;
                renderer.add_triangle(c - w, 0.0, w, h, TriangleDirection::NorthEast, false);
            }
            Self::Square => {
                let s = c / 3.0;
                renderer.add_rectangle(s, s, c - s, c - s, false);
            }
            Self::Window => {
                let tmp = c * 0.1;
                let inner = if tmp > 1.0 {
                    // Truncate decimals in large icons.
                    tmp.trunc()
                } else if tmp > 0.5 {
                    1.0
                } else {
                    tmp
                };
                let outer = if cell < 6 {
                    1.0
                } else if cell < 8 {
                    2.0
                } else {
                    (cell / 4) as f32
                };
                renderer.add_rectangle(outer, outer, c - inner - outer, c - inner - outer, false);
            }
            Self::FourCircles => {
                let m = (c * 0.15) as i32;
                let s = (c * 0.5) as i32;
                let pos = (cell - s - m) as f32;
                renderer.add_circle(pos, pos, s as f32, false);
            }
            Self::FourShards => {
                let inner = c * 0.1;
                let outer = inner * 4.0;
                renderer.add_rectangle(0.0, 0.0, c, c, false);
                renderer.add_polygon(
                    vec![
                        Point::new(outer, outer),
                        Point::new(c - inner, outer),
                        Point::new(outer + (c - outer - inner) / 2.0, c - inner),
                    ],
                    true,
                );
            }
            Self::Cross => {
                renderer.add_polygon(
                    vec![
                        Point::new(0.0, 0.0),
                        Point::new(c, 0.0),
                        Point::new(c, c * 0.7),
                        Point::new(c * 0.4, c * 0.4),
                        Point::new(c * 0.7, c),
                        Point::new(0.0, c),
                    ],
                    false,
                );
            }
            Self::RhombusPart => {
                renderer.add_triangle(
                    c / 2.0,
                    c / 2.0,
                    c / 2.0,
                    c / 2.0,
                    TriangleDirection::SouthEast,
                    false,
                );
            }
            Self::InverseRhombusPart => {
                renderer.add_polygon(
                    vec![
                        Point::new(0.0, 0.0),
                        Point::new(c, 0.0),
                        Point::new(c, c / 2.0),
                        Point::new(c / 2.0, c),
                        Point::new(0.0, c),
                    ],
                    false,
                );
            }
            Self::InverseWindow => {
                let tmp = c * 0.14;
                // Small icons keep the fraction as an anti-alias border;
                // large icons truncate decimals.
                let inner = if cell < 8 { tmp } else { tmp.trunc() };
                // Fixed border widths in small icons so the border stays visible.
                let outer = if cell < 4 {
                    1.0
                } else if cell < 6 {
                    2.0
                } else {
                    (c * 0.35) as i32 as f32
                };
                renderer.add_rectangle(0.0, 0.0, c, c, false);
                renderer.add_rectangle(outer, outer, c - outer - inner, c - outer - inner, true);
            }
            Self::FourInverseCircles => {
                let inner = c * 0.12;
                let outer = inner * 3.0;
                renderer.add_rectangle(0.0, 0.0, c, c, false);
                renderer.add_circle(outer, outer, c - inner - outer, true);
            }
            Self::Chess => {
                let m = c * 0.25;
                renderer.add_rectangle(0.0, 0.0, c, c, false);
                renderer.add_rhombus(m, m, c - m, c - m, true);
            }
            Self::QuarterDisk => {
                let m = c * 0.4;
                let s = c * 1.2;
                // The disk spills over its neighbors; the first cell stays
                // empty so only one disk is drawn per icon.
                if index != 0 {
                    renderer.add_circle(m, m, s, false);
                }
            }
        }
    }
}
