mod error;
mod gl;
mod scene;

pub(crate) mod js;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use ::trishear_data::{Mat4, TransformConfig, TransformPair, Vertex};
pub use scene::*;

pub use crate::{
    error::Error,
    gl::{Renderer, TriangleMesh},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_are_normalized() {
        for c in DEFAULT_CLEAR_COLOR.iter().chain(DEFAULT_FILL_COLOR.iter()) {
            assert!((0.0..=1.0).contains(c));
        }
        assert_eq!(DEFAULT_CLEAR_COLOR[3], 1.0);
        assert_eq!(DEFAULT_FILL_COLOR[3], 1.0);
    }

    #[test]
    fn test_default_transform_is_reference_configuration() {
        let pair = TransformConfig::default().build();
        assert_eq!(pair.scale_shear.data[1], 1.0);
        assert_eq!(pair.rotation.data[10], 0.0);
    }
}
