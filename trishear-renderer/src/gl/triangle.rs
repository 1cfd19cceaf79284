use trishear_data::{TransformPair, Vertex, TRIANGLE};
use web_sys::{WebGlBuffer, WebGlUniformLocation, WebGlVertexArrayObject};

use crate::{
    error::Error,
    gl::{create_buffer, set_uniform_mat4, Drawable, RenderContext, ShaderProgram, GL},
    js,
};

/// The triangle, its shader program and the uniforms driving its transform.
///
/// Vertices are uploaded once; the rotation and scale/shear matrices are
/// uploaded as separate uniforms and combined in the vertex shader as
/// `u_rotation * u_scale_shear * a_position`.
#[derive(Debug)]
pub struct TriangleMesh {
    shader: ShaderProgram,
    vao: WebGlVertexArrayObject,
    vertices: WebGlBuffer,
    vertex_count: i32,
    uniforms: TriangleUniforms,
}

#[derive(Debug)]
struct TriangleUniforms {
    rotation: WebGlUniformLocation,
    scale_shear: WebGlUniformLocation,
    color: WebGlUniformLocation,
}

impl TriangleMesh {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/triangle.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/triangle.frag");

    const POSITION_ATTRIB: &'static str = "a_position";

    /// Compiles the shader program, uploads the vertex buffer and sets the
    /// initial transform and fill color.
    pub(crate) fn new(gl: &GL, transform: &TransformPair, color: [f32; 4]) -> Result<Self, Error> {
        let shader = ShaderProgram::create(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;
        shader.use_program(gl);

        let vao = gl.create_vertex_array().ok_or(Error::vertex_array_creation_failed())?;
        gl.bind_vertex_array(Some(&vao));

        let vertices = create_buffer(gl, GL::ARRAY_BUFFER, &TRIANGLE, GL::STATIC_DRAW)?;

        // vertex attributes (while VAO is bound)
        let position = shader.attribute_location(gl, Self::POSITION_ATTRIB)?;
        gl.vertex_attrib_pointer_with_i32(position, Vertex::COMPONENTS, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(position);

        gl.bind_vertex_array(None);
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        let uniforms = TriangleUniforms {
            rotation: shader.uniform_location(gl, "u_rotation")?,
            scale_shear: shader.uniform_location(gl, "u_scale_shear")?,
            color: shader.uniform_location(gl, "u_color")?,
        };

        let mesh = Self {
            shader,
            vao,
            vertices,
            vertex_count: TRIANGLE.len() as i32,
            uniforms,
        };
        js::log(&format!("triangle mesh ready, {} vertices", mesh.vertex_count));

        mesh.upload_transform(gl, transform);
        mesh.upload_color(gl, color);

        Ok(mesh)
    }

    /// Uploads both transform matrices. Leaves the program in use.
    pub(crate) fn upload_transform(&self, gl: &GL, transform: &TransformPair) {
        self.shader.use_program(gl);
        set_uniform_mat4(gl, &self.uniforms.rotation, &transform.rotation);
        set_uniform_mat4(gl, &self.uniforms.scale_shear, &transform.scale_shear);
    }

    pub(crate) fn upload_color(&self, gl: &GL, color: [f32; 4]) {
        self.shader.use_program(gl);
        gl.uniform4fv_with_f32_array(Some(&self.uniforms.color), &color);
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

impl Drawable for TriangleMesh {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.shader.use_program(gl);
        gl.bind_vertex_array(Some(&self.vao));
    }

    fn draw(&self, context: &mut RenderContext) {
        context.gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
    }

    fn cleanup(&self, context: &mut RenderContext) {
        context.gl.bind_vertex_array(None);
    }
}
