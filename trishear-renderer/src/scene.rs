use compact_str::CompactString;
use trishear_data::TransformConfig;

use crate::{Error, Renderer, TriangleMesh};

/// Clear color of the canvas behind the triangle.
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [1.0, 0.776, 0.598, 1.0];
/// Fill color of the triangle.
pub const DEFAULT_FILL_COLOR: [f32; 4] = [0.95, 0.538, 0.599, 1.0];

/// A canvas showing one triangle, rotated and sheared by a [`TransformConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use trishear_renderer::{Scene, TransformConfig};
///
/// # fn main() -> Result<(), trishear_renderer::Error> {
/// let mut scene = Scene::builder("#webgl")
///     .transform(TransformConfig::default().with_angle(45.0))
///     .build()?;
///
/// scene.render_frame();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Scene {
    renderer: Renderer,
    mesh: TriangleMesh,
    transform: TransformConfig,
}

impl Scene {
    /// Creates a new scene builder for a canvas selector or `HtmlCanvasElement`.
    #[allow(private_bounds)]
    pub fn builder(canvas: impl Into<CanvasSource>) -> SceneBuilder {
        SceneBuilder::new(canvas.into())
    }

    /// Clears the canvas and draws the triangle.
    pub fn render_frame(&mut self) {
        self.renderer.begin_frame();
        self.renderer.render(&self.mesh);
    }

    /// Rebuilds both matrices from `transform` and uploads them.
    ///
    /// Takes effect on the next [`Scene::render_frame`].
    pub fn set_transform(&mut self, transform: TransformConfig) {
        self.transform = transform;
        self.mesh.upload_transform(self.renderer.gl(), &transform.build());
    }

    pub fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
        self.renderer.canvas()
    }
}

/// Canvas source for scene initialization.
enum CanvasSource {
    /// CSS selector string for canvas lookup (e.g., "#webgl", "canvas").
    Id(CompactString),
    /// Direct reference to an existing canvas element.
    Element(web_sys::HtmlCanvasElement),
}

/// Builder for configuring and creating a [`Scene`].
///
/// Unset options fall back to the reference configuration: a 90° rotation,
/// unit scale, horizontal shear of one and the default colors.
pub struct SceneBuilder {
    canvas: CanvasSource,
    transform: TransformConfig,
    clear_color: [f32; 4],
    fill_color: [f32; 4],
}

impl SceneBuilder {
    fn new(canvas: CanvasSource) -> Self {
        SceneBuilder {
            canvas,
            transform: TransformConfig::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            fill_color: DEFAULT_FILL_COLOR,
        }
    }

    pub fn transform(mut self, transform: TransformConfig) -> Self {
        self.transform = transform;
        self
    }

    /// RGBA, each component in [0.0, 1.0].
    pub fn clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// RGBA, each component in [0.0, 1.0].
    pub fn fill_color(mut self, color: [f32; 4]) -> Self {
        self.fill_color = color;
        self
    }

    /// Acquires the WebGL2 context, builds the shader program and uploads the
    /// triangle and both transform matrices.
    ///
    /// Setup stops at the first failure; nothing is drawn until
    /// [`Scene::render_frame`] is called.
    pub fn build(self) -> Result<Scene, Error> {
        let renderer = match self.canvas {
            CanvasSource::Id(id) => Renderer::create(&id)?,
            CanvasSource::Element(element) => Renderer::create_with_canvas(element)?,
        };
        let renderer = renderer.clear_color(self.clear_color);

        let mesh = TriangleMesh::new(renderer.gl(), &self.transform.build(), self.fill_color)?;

        Ok(Scene { renderer, mesh, transform: self.transform })
    }
}

impl From<&str> for CanvasSource {
    fn from(id: &str) -> Self {
        CanvasSource::Id(id.into())
    }
}

impl From<web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(element: web_sys::HtmlCanvasElement) -> Self {
        CanvasSource::Element(element)
    }
}

impl<'a> From<&'a web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(value: &'a web_sys::HtmlCanvasElement) -> Self {
        value.clone().into()
    }
}
