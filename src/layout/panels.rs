use crate::{
    foundation::core::{IPoint, IRect},
    foundation::error::{StripError, StripResult},
    layout::placement::Placement,
};

/// Number of panels in a strip.
pub const PANEL_COUNT: usize = 3;

/// Immutable layout configuration for one render.
///
/// Built once and passed by reference to every stage that needs panel geometry or text metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    /// Size shared by every panel.
    pub panel_width: u32,
    /// Size shared by every panel.
    pub panel_height: u32,
    /// Top-left of each panel on the scene.
    pub panel_origins: [IPoint; PANEL_COUNT],
    /// X of every caption baseline before jitter.
    pub baseline_x: i32,
    /// Caption point size.
    pub font_size_pt: f32,
    /// Padding around the caption background box.
    pub text_padding: i32,
    /// Number of jitter buckets; offsets land in `[-modulus/2, modulus/2]` for odd moduli.
    pub jitter_modulus: i32,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            panel_width: 212,
            panel_height: 216,
            panel_origins: [
                IPoint::new(13, 37),
                IPoint::new(254, 37),
                IPoint::new(493, 38),
            ],
            baseline_x: 30,
            font_size_pt: 14.0,
            text_padding: 3,
            jitter_modulus: 21,
        }
    }
}

impl StripLayout {
    /// Panel-local rectangle `[0, w) x [0, h)`.
    pub fn panel_rect(&self) -> IRect {
        IRect::from_size(self.panel_width, self.panel_height)
    }

    /// Panel slot table for this layout.
    pub fn panel_table(&self) -> PanelTable {
        PanelTable::new(self.panel_rect(), self.panel_origins)
    }

    /// Canonical baseline anchor for a resolved slot.
    ///
    /// The panel height is split into five equal bands; the anchor sits at the middle of the
    /// band. Unresolved placements are rejected.
    pub fn baseline_for(&self, placement: Placement) -> StripResult<IPoint> {
        if !placement.is_resolved() {
            return Err(StripError::usage(
                "caption placement must be resolved before computing a baseline",
            ));
        }
        let band = (self.panel_height / Placement::SLOTS.len() as u32) as i32;
        let y = (placement.index() as i32 - 1) * band + band / 2;
        Ok(IPoint::new(self.baseline_x, y))
    }
}

/// Fixed mapping from panel index to its rectangle on the scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelTable {
    rects: [IRect; PANEL_COUNT],
}

impl PanelTable {
    /// Translate the shared `panel` rectangle to each origin.
    pub fn new(panel: IRect, origins: [IPoint; PANEL_COUNT]) -> Self {
        Self {
            rects: origins.map(|o| panel.translate(o)),
        }
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Always false; a table has exactly [`PANEL_COUNT`] panels.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Scene rectangle of panel `index`.
    pub fn get(&self, index: usize) -> Option<IRect> {
        self.rects.get(index).copied()
    }

    /// All panel rectangles in index order.
    pub fn iter(&self) -> impl Iterator<Item = IRect> + '_ {
        self.rects.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/panels.rs"]
mod tests;
