use crate::{
    assets::font::FontFace,
    composition::model::{Caption, PlacementMode},
    foundation::core::{IPoint, IRect},
    foundation::error::StripResult,
    layout::panels::StripLayout,
    layout::placement::{Jitter, Placement, choose_placement},
    render::canvas::Canvas,
    render::composite::{BLACK, WHITE},
};

/// Where a caption lands inside its panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionGeometry {
    /// Resolved slot.
    pub placement: Placement,
    /// Jitter added to the slot anchor.
    pub jitter: Jitter,
    /// Point the text is drawn from (slot anchor plus jitter).
    pub baseline: IPoint,
    /// Measured advance width of the text.
    pub advance: i32,
    /// Padded background box behind the text.
    pub background: IRect,
}

/// Resolve the caption's slot according to `mode`.
pub fn resolve_placement(caption: &Caption, mode: PlacementMode) -> Placement {
    if caption.placement.is_resolved() {
        return caption.placement;
    }
    match mode {
        PlacementMode::Derived => choose_placement(&caption.text),
        PlacementMode::Fixed => Placement::Top,
    }
}

/// Compute the baseline and background box for `caption` without drawing anything.
///
/// The box spans from the baseline start raised by the font ascent to the baseline end, then
/// grows by the layout padding on every side.
pub fn caption_geometry(
    caption: &Caption,
    layout: &StripLayout,
    face: &FontFace,
    mode: PlacementMode,
) -> StripResult<CaptionGeometry> {
    let placement = resolve_placement(caption, mode);
    let jitter = match mode {
        PlacementMode::Derived => Jitter::for_text(&caption.text, layout.jitter_modulus),
        PlacementMode::Fixed => Jitter::default(),
    };
    let baseline = layout
        .baseline_for(placement)?
        .offset(jitter.dx, jitter.dy);

    let advance = face.advance_width(&caption.text);
    let background = IRect::new(
        baseline.x,
        baseline.y - face.ascent(),
        baseline.x + advance,
        baseline.y,
    )
    .padded(layout.text_padding);

    Ok(CaptionGeometry {
        placement,
        jitter,
        baseline,
        advance,
        background,
    })
}

/// Render one caption into a fresh, transparent panel-sized canvas.
///
/// The white box is painted first, then the black glyphs from the same face and baseline used
/// for measurement. Anything past the panel edge is dropped; text is never wrapped.
#[tracing::instrument(skip(layout, face), fields(text = %caption.text))]
pub fn render_panel_text(
    caption: &Caption,
    layout: &StripLayout,
    face: &FontFace,
    mode: PlacementMode,
) -> StripResult<Canvas> {
    let geom = caption_geometry(caption, layout, face, mode)?;
    tracing::debug!(
        placement = ?geom.placement,
        dx = geom.jitter.dx,
        dy = geom.jitter.dy,
        "caption placed"
    );

    let mut canvas = Canvas::new(layout.panel_width, layout.panel_height);
    canvas.fill_rect_over(geom.background, WHITE);
    for run in face.glyph_runs(&caption.text, geom.baseline) {
        canvas.draw_coverage_over(run.origin, run.width, &run.coverage, BLACK);
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
