use crate::gl::GL;

/// Tracks the bits of WebGL state the renderer touches, skipping redundant calls.
#[derive(Debug, Default)]
pub(crate) struct GlState {
    // [x, y, width, height]
    viewport: [i32; 4],
    clear_color: [f32; 4],
}

impl GlState {
    pub(crate) fn viewport(&mut self, gl: &GL, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let new_viewport = [x, y, width, height];
        if self.viewport != new_viewport {
            gl.viewport(x, y, width, height);
            self.viewport = new_viewport;
        }
        self
    }

    pub(crate) fn clear_color(&mut self, gl: &GL, color: [f32; 4]) -> &mut Self {
        if self.clear_color != color {
            let [r, g, b, a] = color;
            gl.clear_color(r, g, b, a);
            self.clear_color = color;
        }
        self
    }
}
