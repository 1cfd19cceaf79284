mod buffer;
mod context;
mod program;
mod renderer;
mod triangle;

use buffer::*;
pub(crate) use program::*;
pub use renderer::*;
pub use triangle::TriangleMesh;

pub(crate) type GL = web_sys::WebGl2RenderingContext;
