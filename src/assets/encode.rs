use std::path::Path;

use crate::{
    foundation::error::{StripError, StripResult},
    render::canvas::Canvas,
};

/// Encode `canvas` as an RGBA8 PNG at `path`, creating parent directories as needed.
#[tracing::instrument(skip(canvas), fields(width = canvas.width(), height = canvas.height()))]
pub fn write_png(canvas: &Canvas, path: &Path) -> StripResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StripError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &canvas.to_straight_rgba8(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| StripError::encode(format!("write png '{}': {e}", path.display())))
}
