/// A 2D coordinate pair in icon space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned integer region, used for icon bounds and the
/// normalized square drawing area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Maps points local to one grid cell into icon coordinates, applying the
/// cell's origin and a rotation in 90-degree steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transform {
    x: i32,
    y: i32,
    size: i32,
    rotation: u8,
}

impl Transform {
    /// Rotation is taken modulo 4: 0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°.
    pub fn new(x: i32, y: i32, size: i32, rotation: u32) -> Self {
        Self {
            x,
            y,
            size,
            rotation: (rotation % 4) as u8,
        }
    }

    /// Transforms a point from cell-local to icon coordinates.
    ///
    /// `width` and `height` describe a bounding box whose origin corner is
    /// being transformed; rotating a box's top-left corner as a bare point
    /// would not land on the rotated box's top-left corner, so the box
    /// extent is subtracted on the rotated axis. Pass zero for bare points.
    pub fn transform_point(&self, x: f32, y: f32, width: f32, height: f32) -> Point {
        let right = (self.x + self.size) as f32;
        let bottom = (self.y + self.size) as f32;

        match self.rotation {
            1 => Point::new(right - y - height, self.y as f32 + x),
            2 => Point::new(right - x - width, bottom - y - height),
            3 => Point::new(self.x as f32 + y, bottom - x - width),
            _ => Point::new(self.x as f32 + x, self.y as f32 + y),
        }
    }
}
