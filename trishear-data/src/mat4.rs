use std::ops::Mul;

/// A 4x4 homogeneous transform stored in column-major order.
///
/// The layout matches what `uniformMatrix4fv` expects with `transpose = false`:
/// `data[col * 4 + row]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

/// Homogeneous 4-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Mat4 {
    pub fn new_identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    /// Creates a matrix from 16 values already in column-major order.
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the element at the given column and row.
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Matrix product `self * rhs`.
    pub fn mul_mat4(&self, rhs: &Mat4) -> Mat4 {
        let mut data = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[col * 4 + row] = (0..4)
                    .map(|k| self.get(k, row) * rhs.get(col, k))
                    .sum();
            }
        }

        Mat4 { data }
    }

    /// Transforms `v` by this matrix, i.e. `self * v`.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let row = |r: usize| {
            self.get(0, r) * v.x + self.get(1, r) * v.y + self.get(2, r) * v.z + self.get(3, r) * v.w
        };

        Vec4 { x: row(0), y: row(1), z: row(2), w: row(3) }
    }

    /// Determinant of the upper-left 2x2 block.
    pub fn determinant_2x2(&self) -> f32 {
        self.get(0, 0) * self.get(1, 1) - self.get(1, 0) * self.get(0, 1)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::new_identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.mul_mat4(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const SAMPLE: Mat4 = Mat4::from_cols_array([
        1.0,  2.0,  3.0,  4.0,
        5.0,  6.0,  7.0,  8.0,
        9.0, 10.0, 11.0, 12.0,
       13.0, 14.0, 15.0, 16.0,
    ]);

    #[test]
    fn test_column_major_indexing() {
        assert_eq!(SAMPLE.get(0, 0), 1.0);
        assert_eq!(SAMPLE.get(0, 3), 4.0);
        assert_eq!(SAMPLE.get(1, 0), 5.0);
        assert_eq!(SAMPLE.get(3, 2), 15.0);
    }

    #[test]
    fn test_identity_is_neutral() {
        let identity = Mat4::new_identity();

        assert_eq!(identity * SAMPLE, SAMPLE);
        assert_eq!(SAMPLE * identity, SAMPLE);

        let v = Vec4::new(0.25, -1.5, 3.0, 1.0);
        assert_eq!(identity * v, v);
    }

    #[test]
    fn test_transform_applies_columns() {
        // translation lives in the last column
        let mut translate = Mat4::new_identity();
        translate.data[12] = 2.0;
        translate.data[13] = -3.0;

        let p = translate * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(3.0, -2.0, 0.0, 1.0));

        // directions are unaffected by translation
        let d = translate * Vec4::new(1.0, 1.0, 0.0, 0.0);
        assert_eq!(d, Vec4::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_product_matches_sequential_transform() {
        let mut a = Mat4::new_identity();
        a.data[4] = 2.0; // x += 2y
        let mut b = Mat4::new_identity();
        b.data[0] = 3.0; // x *= 3

        let v = Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!((a * b) * v, a * (b * v));
        assert_ne!((a * b) * v, (b * a) * v);
    }
}
