use std::slice;

use web_sys::WebGlBuffer;

use crate::{error::Error, gl::GL};

/// Uploads an array of elements to the buffer bound at `target` as raw bytes.
///
/// # Safety
/// Assumes `T` is `#[repr(C)]` with a layout WebGL can read directly.
/// No padding/alignment checks are performed.
pub(crate) fn buffer_upload_array<T>(gl: &GL, target: u32, data: &[T], usage: u32) {
    unsafe {
        let data_ptr = data.as_ptr() as *const u8;
        let size = size_of_val(data);
        let view = js_sys::Uint8Array::view(slice::from_raw_parts(data_ptr, size));
        gl.buffer_data_with_array_buffer_view(target, &view, usage);
    }
}

/// Creates a buffer, binds it to `target` and fills it with `data`.
///
/// The buffer is left bound so attribute pointers can be set up right after.
pub(crate) fn create_buffer<T>(
    gl: &GL,
    target: u32,
    data: &[T],
    usage: u32,
) -> Result<WebGlBuffer, Error> {
    let buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed("vertex"))?;
    gl.bind_buffer(target, Some(&buffer));
    buffer_upload_array(gl, target, data, usage);

    Ok(buffer)
}
