//! Font metrics provider.
//!
//! A [`FontFace`] is one parsed outline font at one point size. Measurement and glyph placement
//! go through the same advance/kerning walk, so a box sized from [`FontFace::advance_width`]
//! always matches the glyphs produced by [`FontFace::glyph_runs`].

use std::{path::Path, sync::Arc};

use crate::{
    assets::decode::{read_asset, with_path},
    foundation::core::IPoint,
    foundation::error::{StripError, StripResult},
};

/// Parsed outline font plus the point size it is measured and drawn at.
///
/// Sizes are points at 72 dpi, so one point is one pixel.
#[derive(Clone)]
pub struct FontFace {
    font: Arc<fontdue::Font>,
    size_pt: f32,
    ascent: f32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family_name())
            .field("size_pt", &self.size_pt)
            .finish()
    }
}

/// One rasterized glyph positioned on the canvas.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    /// Top-left of the coverage bitmap.
    pub origin: IPoint,
    /// Bitmap width in pixels.
    pub width: usize,
    /// Row-major 8-bit coverage.
    pub coverage: Vec<u8>,
}

impl FontFace {
    /// Parse font bytes (TrueType/OpenType) for use at `size_pt`.
    pub fn from_bytes(bytes: Vec<u8>, size_pt: f32) -> StripResult<Self> {
        if !size_pt.is_finite() || size_pt <= 0.0 {
            return Err(StripError::asset_load("font size must be finite and > 0"));
        }

        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| StripError::asset_load(format!("parse font: {e}")))?;
        let ascent = font
            .horizontal_line_metrics(size_pt)
            .map(|m| m.ascent)
            .ok_or_else(|| StripError::asset_load("font has no horizontal line metrics"))?;

        Ok(Self {
            font: Arc::new(font),
            size_pt,
            ascent,
        })
    }

    /// Read and parse a font file.
    pub fn from_path(path: &Path, size_pt: f32) -> StripResult<Self> {
        let bytes = read_asset(path)?;
        Self::from_bytes(bytes, size_pt).map_err(|e| with_path(path, e))
    }

    /// Point size this face measures and draws at.
    pub fn size_pt(&self) -> f32 {
        self.size_pt
    }

    /// Family name from the font's name table, if present.
    pub fn family_name(&self) -> Option<&str> {
        self.font.name()
    }

    /// Distance from baseline to the top of typical glyphs, rounded to whole pixels.
    pub fn ascent(&self) -> i32 {
        self.ascent.round() as i32
    }

    /// Horizontal distance `text` occupies when drawn, rounded to whole pixels.
    pub fn advance_width(&self, text: &str) -> i32 {
        self.pen_positions(text)
            .last()
            .map(|&(_, x)| x)
            .unwrap_or(0.0)
            .round() as i32
    }

    /// Rasterize `text` with its baseline starting at `baseline`.
    ///
    /// Glyphs with empty bitmaps (spaces) produce no run.
    pub fn glyph_runs(&self, text: &str, baseline: IPoint) -> Vec<GlyphRun> {
        let mut runs = Vec::new();
        for (ch, pen_x) in self.pen_positions(text) {
            let Some(ch) = ch else {
                continue;
            };
            let (metrics, coverage) = self.font.rasterize(ch, self.size_pt);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            let x = baseline.x + pen_x.round() as i32 + metrics.xmin;
            let y = baseline.y - (metrics.height as i32 + metrics.ymin);
            runs.push(GlyphRun {
                origin: IPoint::new(x, y),
                width: metrics.width,
                coverage,
            });
        }
        runs
    }

    // Each char paired with the pen offset it is drawn at, followed by `(None, end)`.
    fn pen_positions(&self, text: &str) -> Vec<(Option<char>, f32)> {
        let mut out = Vec::with_capacity(text.len() + 1);
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                pen += self.font.horizontal_kern(p, ch, self.size_pt).unwrap_or(0.0);
            }
            out.push((Some(ch), pen));
            pen += self.font.metrics(ch, self.size_pt).advance_width;
            prev = Some(ch);
        }
        out.push((None, pen));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
