use js_sys::wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, WebGl2RenderingContext};

use crate::error::Error;

/// Looks up a canvas element by CSS selector, e.g. `"#webgl"` or `"canvas"`.
pub(crate) fn canvas_by_selector(selector: &str) -> Result<HtmlCanvasElement, Error> {
    let document = web_sys::window()
        .ok_or(Error::window_not_found())?
        .document()
        .ok_or(Error::document_not_found())?;

    document
        .query_selector(selector)
        .map_err(|_| Error::canvas_not_found())?
        .ok_or(Error::canvas_not_found())?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found())
}

/// Acquires the WebGL2 rendering context of `canvas`.
pub(crate) fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<WebGl2RenderingContext, Error> {
    let gl = canvas
        .get_context("webgl2")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())?;

    log(&format!("webgl2 context acquired, canvas {}x{}", canvas.width(), canvas.height()));
    Ok(gl)
}

pub(crate) fn log(message: &str) {
    console::log_1(&message.into());
}
