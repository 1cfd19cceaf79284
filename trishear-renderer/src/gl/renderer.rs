use web_sys::HtmlCanvasElement;

use crate::{
    error::Error,
    gl::{context::GlState, GL},
    js,
};

/// Rendering context handed to [`Drawable`]s.
pub(crate) struct RenderContext<'a> {
    pub gl: &'a GL,
    pub state: &'a mut GlState,
}

/// Owns the WebGL2 context and the canvas it draws into.
///
/// The viewport covers the whole canvas; vertex positions are in clip space,
/// so no projection is applied.
#[derive(Debug)]
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    state: GlState,
    clear_color: [f32; 4],
}

impl Renderer {
    /// Creates a renderer for the canvas matching the CSS selector.
    ///
    /// # Errors
    /// * `Error::Initialization` - canvas not found, or WebGL2 unavailable
    pub fn create(canvas_selector: &str) -> Result<Self, Error> {
        let canvas = js::canvas_by_selector(canvas_selector)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a renderer from an existing canvas element.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let gl = js::webgl2_context(&canvas)?;

        let mut renderer = Self {
            gl,
            canvas,
            state: GlState::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        };

        let (width, height) = renderer.canvas_size();
        renderer.state.viewport(&renderer.gl, 0, 0, width, height);

        Ok(renderer)
    }

    /// Sets the color the framebuffer is cleared to at the start of each frame.
    pub fn clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// Clears the color buffer with the configured clear color.
    pub fn begin_frame(&mut self) {
        self.state.clear_color(&self.gl, self.clear_color);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    /// Runs a drawable's prepare, draw and cleanup steps in sequence.
    #[allow(private_bounds)]
    pub fn render(&mut self, drawable: &impl Drawable) {
        let mut context = RenderContext { gl: &self.gl, state: &mut self.state };

        drawable.prepare(&mut context);
        drawable.draw(&mut context);
        drawable.cleanup(&mut context);
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the canvas dimensions as (width, height) in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}

/// Something the [`Renderer`] can draw.
pub(crate) trait Drawable {
    /// Binds the program, vertex array and uniforms needed by `draw`.
    fn prepare(&self, context: &mut RenderContext);

    /// Issues the draw call.
    fn draw(&self, context: &mut RenderContext);

    /// Unbinds whatever `prepare` bound.
    fn cleanup(&self, context: &mut RenderContext);
}
