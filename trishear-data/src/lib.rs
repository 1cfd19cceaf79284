mod mat4;
mod transform;
mod vertex;

pub use mat4::{Mat4, Vec4};
pub use transform::{rotation_matrix, scale_shear_matrix, TransformConfig, TransformPair};
pub use vertex::{Vertex, TRIANGLE};
