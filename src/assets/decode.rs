use std::path::Path;

use crate::{
    foundation::error::{StripError, StripResult},
    render::canvas::Canvas,
    render::mask::CoverageMask,
};

/// Read an input file, mapping IO failures to [`StripError::AssetLoad`].
pub fn read_asset(path: &Path) -> StripResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| StripError::asset_load(format!("read '{}': {e}", path.display())))
}

/// Decode any raster format `image` understands into straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> StripResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StripError::asset_load(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Decode into a premultiplied [`Canvas`].
pub fn decode_image(bytes: &[u8]) -> StripResult<Canvas> {
    Ok(Canvas::from_straight(&decode_rgba(bytes)?))
}

/// Decode a mask image into a coverage plane.
///
/// Images with an alpha channel contribute their alpha; opaque images contribute their luma.
pub fn decode_mask(bytes: &[u8]) -> StripResult<CoverageMask> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StripError::asset_load(format!("decode mask from memory: {e}")))?;
    let (width, height) = (dyn_img.width(), dyn_img.height());

    let data: Vec<u8> = if dyn_img.color().has_alpha() {
        dyn_img.to_rgba8().pixels().map(|p| p.0[3]).collect()
    } else {
        dyn_img.to_luma8().into_raw()
    };

    CoverageMask::new(width, height, data)
        .ok_or_else(|| StripError::asset_load("mask buffer does not match its dimensions"))
}

/// Read and decode an image file into a premultiplied [`Canvas`].
pub fn load_image(path: &Path) -> StripResult<Canvas> {
    decode_image(&read_asset(path)?).map_err(|e| with_path(path, e))
}

/// Read and decode an image file into straight-alpha RGBA8.
pub fn load_rgba(path: &Path) -> StripResult<image::RgbaImage> {
    decode_rgba(&read_asset(path)?).map_err(|e| with_path(path, e))
}

/// Read and decode a mask file.
pub fn load_mask(path: &Path) -> StripResult<CoverageMask> {
    decode_mask(&read_asset(path)?).map_err(|e| with_path(path, e))
}

pub(crate) fn with_path(path: &Path, err: StripError) -> StripError {
    match err {
        StripError::AssetLoad(msg) => {
            StripError::asset_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
