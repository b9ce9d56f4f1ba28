use crate::{
    assets::font::FontFace,
    composition::model::{Caption, PlacementMode, check_capacity},
    foundation::error::{StripError, StripResult},
    layout::panels::StripLayout,
    render::canvas::Canvas,
    render::text::render_panel_text,
};

/// Stamp each caption's panel canvas onto a copy of `background`.
///
/// Caption `i` goes to panel `i`. Captions with empty text are skipped, leaving the background
/// visible. More captions than panels is rejected before anything is drawn. `face` may be
/// `None` only when every caption is empty.
#[tracing::instrument(skip_all, fields(captions = captions.len()))]
pub fn assemble_scene(
    background: &Canvas,
    captions: &[Caption],
    layout: &StripLayout,
    face: Option<&FontFace>,
    mode: PlacementMode,
) -> StripResult<Canvas> {
    let table = layout.panel_table();
    check_capacity(captions.len(), table.len())?;

    let mut scene = background.clone();
    for (index, caption) in captions.iter().enumerate() {
        if caption.is_empty() {
            tracing::debug!(index, "empty caption, panel skipped");
            continue;
        }
        let Some(rect) = table.get(index) else {
            continue;
        };
        let face = face.ok_or_else(|| {
            StripError::asset_load(format!("panel {index} has text but no font was loaded"))
        })?;

        let panel = render_panel_text(caption, layout, face, mode)?;
        scene.composite_over(&panel, rect.min);
    }
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
