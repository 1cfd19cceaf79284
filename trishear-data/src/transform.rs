use std::f32::consts::PI;

use crate::{Mat4, Vec4, Vertex};

/// Builds a rotation about the z axis from an angle in degrees.
///
/// The z row and column of the linear block are zero rather than identity, so
/// this matrix alone collapses any z component. Depth is carried through by
/// the scale/shear matrix it is paired with.
#[rustfmt::skip]
pub fn rotation_matrix(angle_degrees: f32) -> Mat4 {
    let radians = PI * angle_degrees / 180.0;
    let (s, c) = radians.sin_cos();

    Mat4::from_cols_array([
          c,   s, 0.0, 0.0,
         -s,   c, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Builds a per-axis scale combined with a vertical and horizontal shear.
///
/// `horizontal_shear` occupies column 0, row 1 and `vertical_shear` column 1,
/// row 0 of the column-major result.
#[rustfmt::skip]
pub fn scale_shear_matrix(
    sx: f32,
    sy: f32,
    sz: f32,
    vertical_shear: f32,
    horizontal_shear: f32,
) -> Mat4 {
    Mat4::from_cols_array([
                    sx, horizontal_shear, 0.0, 0.0,
        vertical_shear,               sy, 0.0, 0.0,
                   0.0,              0.0,  sz, 0.0,
                   0.0,              0.0, 0.0, 1.0,
    ])
}

/// The pair of matrices uploaded to the vertex shader.
///
/// They are kept separate on the GPU; the shader evaluates
/// `rotation * scale_shear * position`, so the rotation is applied last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPair {
    pub rotation: Mat4,
    pub scale_shear: Mat4,
}

impl TransformPair {
    /// The single matrix equivalent to what the shader computes.
    pub fn composed(&self) -> Mat4 {
        self.rotation.mul_mat4(&self.scale_shear)
    }

    /// Transforms a vertex exactly like the vertex shader does.
    pub fn apply(&self, vertex: Vertex) -> Vec4 {
        let p = vertex.to_homogeneous();
        self.rotation.transform(self.scale_shear.transform(p))
    }
}

/// Parameters of the triangle's transform.
///
/// Defaults are the reference configuration: a quarter turn, unit scale, no
/// vertical shear and a horizontal shear of one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TransformConfig {
    pub angle_degrees: f32,
    /// Scale factors along x, y and z.
    pub scale: [f32; 3],
    pub vertical_shear: f32,
    pub horizontal_shear: f32,
}

impl TransformConfig {
    pub const DEFAULT_ANGLE: f32 = 90.0;

    pub fn with_angle(mut self, angle_degrees: f32) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    pub fn with_scale(mut self, sx: f32, sy: f32, sz: f32) -> Self {
        self.scale = [sx, sy, sz];
        self
    }

    pub fn with_shear(mut self, vertical: f32, horizontal: f32) -> Self {
        self.vertical_shear = vertical;
        self.horizontal_shear = horizontal;
        self
    }

    pub fn rotation(&self) -> Mat4 {
        rotation_matrix(self.angle_degrees)
    }

    pub fn scale_shear(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale;
        scale_shear_matrix(sx, sy, sz, self.vertical_shear, self.horizontal_shear)
    }

    pub fn build(&self) -> TransformPair {
        TransformPair {
            rotation: self.rotation(),
            scale_shear: self.scale_shear(),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            angle_degrees: Self::DEFAULT_ANGLE,
            scale: [1.0, 1.0, 1.0],
            vertical_shear: 0.0,
            horizontal_shear: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TRIANGLE;

    const EPSILON: f32 = 1e-6;

    fn assert_mat4_eq(actual: &Mat4, expected: [f32; 16]) {
        for (i, (a, e)) in actual.data.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() <= EPSILON, "element {i}: {a} != {e}\n{actual:?}");
        }
    }

    #[rustfmt::skip]
    const IDENTITY_NO_Z: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];

    #[test]
    fn test_rotation_zero_degrees() {
        assert_eq!(rotation_matrix(0.0).data, IDENTITY_NO_Z);
    }

    #[test]
    #[rustfmt::skip]
    fn test_rotation_quarter_turn() {
        assert_mat4_eq(&rotation_matrix(90.0), [
             0.0, 1.0, 0.0, 0.0,
            -1.0, 0.0, 0.0, 0.0,
             0.0, 0.0, 0.0, 0.0,
             0.0, 0.0, 0.0, 1.0,
        ]);
    }

    #[test]
    fn test_rotation_full_turn() {
        assert_mat4_eq(&rotation_matrix(360.0), IDENTITY_NO_Z);
    }

    #[test]
    fn test_rotation_keeps_z_collapsed() {
        for angle in [-270.0, -45.0, 0.0, 33.3, 90.0, 180.0, 720.0] {
            let m = rotation_matrix(angle);
            assert_eq!(m.get(2, 2), 0.0);
            assert_eq!(m.get(3, 3), 1.0);
            assert!((m.determinant_2x2() - 1.0).abs() <= EPSILON, "angle {angle}");
        }
    }

    #[test]
    #[rustfmt::skip]
    fn test_scale_shear_reference_values() {
        assert_eq!(scale_shear_matrix(1.0, 1.0, 1.0, 0.0, 1.0).data, [
            1.0, 1.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
    }

    #[test]
    fn test_scale_shear_is_linear_per_parameter() {
        let base = [1.5, -0.5, 2.0, 0.25, 0.75];
        let build = |p: [f32; 5]| scale_shear_matrix(p[0], p[1], p[2], p[3], p[4]);
        let reference = build(base);

        // parameter index -> position in the column-major array
        let positions = [0, 5, 10, 4, 1];
        for (param, &position) in positions.iter().enumerate() {
            let mut doubled = base;
            doubled[param] *= 2.0;
            let m = build(doubled);

            for i in 0..16 {
                if i == position {
                    assert_eq!(m.data[i], 2.0 * reference.data[i]);
                } else {
                    assert_eq!(m.data[i], reference.data[i], "param {param} touched {i}");
                }
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.angle_degrees, 90.0);
        assert_eq!(config.scale, [1.0, 1.0, 1.0]);
        assert_eq!(config.vertical_shear, 0.0);
        assert_eq!(config.horizontal_shear, 1.0);

        let pair = config.build();
        assert_eq!(pair.rotation, rotation_matrix(90.0));
        assert_eq!(pair.scale_shear, scale_shear_matrix(1.0, 1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_config_setters() {
        let config = TransformConfig::default()
            .with_angle(45.0)
            .with_scale(2.0, 3.0, 4.0)
            .with_shear(0.5, -0.5);

        assert_eq!(config.angle_degrees, 45.0);
        assert_eq!(config.scale_shear(), scale_shear_matrix(2.0, 3.0, 4.0, 0.5, -0.5));
    }

    #[test]
    fn test_apply_top_vertex_reference_config() {
        let pair = TransformConfig::default().build();
        let p = pair.apply(TRIANGLE[0]);

        assert!((p.x - -0.5).abs() <= EPSILON, "{p:?}");
        assert!(p.y.abs() <= EPSILON, "{p:?}");
        assert_eq!(p.z, 0.0);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn test_apply_matches_composed_matrix() {
        let pair = TransformConfig::default()
            .with_angle(30.0)
            .with_shear(0.2, 0.7)
            .build();
        let composed = pair.composed();

        for v in TRIANGLE {
            let a = pair.apply(v);
            let b = composed.transform(v.to_homogeneous());
            assert!((a.x - b.x).abs() <= EPSILON);
            assert!((a.y - b.y).abs() <= EPSILON);
        }
    }

    #[test]
    fn test_composition_order_matters() {
        let pair = TransformConfig::default().build();
        let swapped = pair.scale_shear.mul_mat4(&pair.rotation);

        assert_ne!(pair.composed(), swapped);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_partial_deserialization() {
        let config: TransformConfig =
            serde_json::from_str(r#"{ "angleDegrees": 45.0, "horizontalShear": 0.5 }"#).unwrap();

        assert_eq!(config.angle_degrees, 45.0);
        assert_eq!(config.horizontal_shear, 0.5);
        assert_eq!(config.scale, [1.0, 1.0, 1.0]);
        assert_eq!(config.vertical_shear, 0.0);
    }
}
