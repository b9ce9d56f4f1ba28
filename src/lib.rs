//! stripgen renders a fixed three-panel comic strip.
//!
//! A background photo is scaled to the strip width, cropped to a vertical band, and blended
//! through a mask onto the template artwork. Each non-empty caption is then drawn black on a
//! white padded box inside its panel. When a caption does not name a slot, the slot and a small
//! jitter are derived from the caption's own characters, so the same text always lands in the
//! same place.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`StripInputs::load`] reads the template, mask, background, and font (only
//!    when some caption has text).
//! 2. **Background**: [`composite_background`] builds the base scene.
//! 3. **Captions**: [`assemble_scene`] renders each caption with [`render_panel_text`] and
//!    stamps it into its panel.
//! 4. **Encode**: [`write_png`] writes the result.
//!
//! [`run`] does all four in one call. Every stage is synchronous and fails fast; errors surface
//! as [`StripError`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use assets::decode::{
    decode_image, decode_mask, decode_rgba, load_image, load_mask, load_rgba, read_asset,
};
pub use assets::encode::write_png;
pub use assets::font::{FontFace, GlyphRun};
pub use composition::model::{
    BackgroundConfig, Caption, DEFAULT_BACKGROUND_PATH, PanelConfig, PlacementMode, StripConfig,
    check_capacity,
};
pub use foundation::core::{IPoint, IRect};
pub use foundation::error::{StripError, StripResult};
pub use layout::panels::{PANEL_COUNT, PanelTable, StripLayout};
pub use layout::placement::{FoldOp, Jitter, Placement, choose_placement, fold_chars, jitter};
pub use pipeline::{
    AssetPaths, DEFAULT_FONT, DEFAULT_MASK, DEFAULT_OUT, DEFAULT_TEMPLATE, RenderOpts,
    StripInputs, render_strip, run,
};
pub use render::background::{composite_background, crop_offset, scale_to_width};
pub use render::canvas::Canvas;
pub use render::composite::{BLACK, PremulRgba8, TRANSPARENT, WHITE, over};
pub use render::mask::CoverageMask;
pub use render::scene::assemble_scene;
pub use render::text::{CaptionGeometry, caption_geometry, render_panel_text, resolve_placement};
