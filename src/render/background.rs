use image::imageops::FilterType;

use crate::{
    foundation::error::{StripError, StripResult},
    layout::placement::Placement,
    render::canvas::Canvas,
    render::composite::premultiply,
    render::mask::CoverageMask,
};

/// Scale `src` to `width`, keeping its aspect ratio, with bilinear filtering.
pub fn scale_to_width(src: &image::RgbaImage, width: u32) -> image::RgbaImage {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 || width == 0 {
        return image::RgbaImage::new(width, 0);
    }
    let height = ((f64::from(h) * f64::from(width) / f64::from(w)).round() as u32).max(1);
    image::imageops::resize(src, width, height, FilterType::Triangle)
}

/// First background row shown at the top of the scene.
///
/// The scaled background is split into five bands and the crop starts at the band chosen by
/// `placement`. When fewer than `scene_height` rows would remain, the crop is pulled up so the
/// bottom edges align; a background shorter than the scene starts at row 0.
pub fn crop_offset(scaled_height: u32, scene_height: u32, placement: Placement) -> u32 {
    let band = scaled_height / Placement::SLOTS.len() as u32;
    let start = placement.index().saturating_sub(1) * band;
    if scaled_height.saturating_sub(start) < scene_height {
        scaled_height.saturating_sub(scene_height)
    } else {
        start
    }
}

/// Blend `background` onto a copy of `template` through `mask`.
///
/// The background is scaled to the template width and cropped vertically per [`crop_offset`].
/// Mask coverage decides how much background replaces the template at each pixel; scene pixels
/// with no background row behind them keep the template.
#[tracing::instrument(skip_all, fields(placement = ?placement))]
pub fn composite_background(
    template: &Canvas,
    mask: &CoverageMask,
    background: &image::RgbaImage,
    placement: Placement,
) -> StripResult<Canvas> {
    if !placement.is_resolved() {
        return Err(StripError::config("background placement must be 1..=5"));
    }
    if mask.width() != template.width() || mask.height() != template.height() {
        return Err(StripError::asset_load(format!(
            "mask is {}x{} but template is {}x{}",
            mask.width(),
            mask.height(),
            template.width(),
            template.height()
        )));
    }

    let scaled = scale_to_width(background, template.width());
    let offset = crop_offset(scaled.height(), template.height(), placement);
    tracing::debug!(
        scaled_height = scaled.height(),
        offset,
        "background crop"
    );

    let mut out = template.clone();
    for y in 0..template.height() {
        let sy = y + offset;
        if sy >= scaled.height() {
            break;
        }
        for x in 0..template.width().min(scaled.width()) {
            let coverage = mask.coverage(x, y);
            if coverage == 0 {
                continue;
            }
            let src = premultiply(scaled.get_pixel(x, sy).0);
            out.blend_pixel(x as i32, y as i32, src, coverage);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
