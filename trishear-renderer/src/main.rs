use trishear_renderer::{Error, Scene, TransformConfig};
use web_sys::console;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    if let Err(e) = run() {
        console::error_1(&format!("failed to render triangle: {e}").into());
    }
}

fn run() -> Result<(), Error> {
    let mut scene = Scene::builder("#webgl")
        .transform(TransformConfig::default())
        .build()?;

    scene.render_frame();

    Ok(())
}
