use trishear_data::Mat4;
use web_sys::{WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::{error::Error, gl::GL, js};

/// A linked vertex + fragment shader program.
#[derive(Debug)]
pub(crate) struct ShaderProgram {
    pub(crate) program: WebGlProgram,
}

impl ShaderProgram {
    pub(crate) fn create(
        gl: &GL,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, Error> {
        let program = gl.create_program().ok_or(Error::shader_program_creation_failed())?;

        // compile shaders
        let vertex_shader = compile_shader(gl, ShaderType::Vertex, vertex_source)?;
        let fragment_shader = compile_shader(gl, ShaderType::Fragment, fragment_source)?;

        // attach shaders and link program
        gl.attach_shader(&program, &vertex_shader);
        gl.attach_shader(&program, &fragment_shader);
        gl.link_program(&program);

        // delete shaders (no longer needed after linking)
        gl.delete_shader(Some(&vertex_shader));
        gl.delete_shader(Some(&fragment_shader));

        check_link_status(gl, &program)?;
        js::log("shader program linked");

        Ok(ShaderProgram { program })
    }

    pub(crate) fn use_program(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    /// Returns the location of a vertex attribute; absent attributes are an error.
    pub(crate) fn attribute_location(&self, gl: &GL, name: &str) -> Result<u32, Error> {
        let location = gl.get_attrib_location(&self.program, name);
        u32::try_from(location).map_err(|_| Error::attribute_location_failed(name))
    }

    pub(crate) fn uniform_location(
        &self,
        gl: &GL,
        name: &str,
    ) -> Result<WebGlUniformLocation, Error> {
        gl.get_uniform_location(&self.program, name)
            .ok_or(Error::uniform_location_failed(name))
    }
}

/// Uploads a column-major matrix; WebGL requires `transpose = false`.
pub(crate) fn set_uniform_mat4(gl: &GL, location: &WebGlUniformLocation, matrix: &Mat4) {
    gl.uniform_matrix4fv_with_f32_array(Some(location), false, matrix.as_slice());
}

fn compile_shader(gl: &GL, shader_type: ShaderType, source: &str) -> Result<WebGlShader, Error> {
    let shader = gl
        .create_shader(shader_type.into())
        .ok_or(Error::shader_creation_failed(shader_type.name()))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);

    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(Error::shader_compilation_failed(shader_type.name(), log))
    }
}

fn check_link_status(gl: &GL, program: &WebGlProgram) -> Result<(), Error> {
    let linked = gl
        .get_program_parameter(program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);

    if linked {
        Ok(())
    } else {
        let log = gl.get_program_info_log(program).unwrap_or_default();
        gl.delete_program(Some(program));
        Err(Error::shader_link_failed(log))
    }
}

#[derive(Clone, Copy)]
enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    fn name(self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
        }
    }
}

impl From<ShaderType> for u32 {
    fn from(shader_type: ShaderType) -> u32 {
        match shader_type {
            ShaderType::Vertex => GL::VERTEX_SHADER,
            ShaderType::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}
