use crate::Vec4;

/// A 2D position in clip space.
///
/// Laid out as two consecutive `f32`s so a slice of vertices can be uploaded
/// to an `ARRAY_BUFFER` as-is and read by a `vec2` attribute.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    /// Number of float components per vertex.
    pub const COMPONENTS: i32 = 2;

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Widens the position the same way the vertex shader widens a `vec2`
    /// attribute: `z = 0`, `w = 1`.
    pub fn to_homogeneous(self) -> Vec4 {
        Vec4::new(self.x, self.y, 0.0, 1.0)
    }
}

/// The one triangle rendered by trishear, in clip space.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5),
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.5, -0.5),
];
