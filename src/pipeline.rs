use std::path::{Path, PathBuf};

use crate::{
    assets::decode::{load_image, load_mask, load_rgba},
    assets::encode::write_png,
    assets::font::FontFace,
    composition::model::{PlacementMode, StripConfig},
    foundation::error::StripResult,
    layout::panels::StripLayout,
    layout::placement::Placement,
    render::background::composite_background,
    render::canvas::Canvas,
    render::mask::CoverageMask,
    render::scene::assemble_scene,
};

/// Default template file name.
pub const DEFAULT_TEMPLATE: &str = "template.png";
/// Default mask file name.
pub const DEFAULT_MASK: &str = "template_mask.png";
/// Default font file name.
pub const DEFAULT_FONT: &str = "font.ttf";
/// Default output file name.
pub const DEFAULT_OUT: &str = "out.png";

/// Input and output file locations.
///
/// Relative paths resolve against `root`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    /// Base directory for relative paths.
    pub root: PathBuf,
    /// Opaque base artwork.
    pub template: PathBuf,
    /// Mask controlling where the background shows.
    pub mask: PathBuf,
    /// Outline font for captions.
    pub font: PathBuf,
    /// Overrides the background path from the config.
    pub background: Option<PathBuf>,
    /// Output PNG.
    pub out: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl AssetPaths {
    /// Default file names under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            mask: PathBuf::from(DEFAULT_MASK),
            font: PathBuf::from(DEFAULT_FONT),
            background: None,
            out: PathBuf::from(DEFAULT_OUT),
        }
    }

    /// Resolve `p` against the root.
    pub fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }

    /// Background path: the override if set, otherwise the config's.
    pub fn background_for(&self, config: &StripConfig) -> PathBuf {
        match &self.background {
            Some(p) => self.resolve(p),
            None => self.resolve(Path::new(&config.background.path)),
        }
    }
}

/// Settings that do not come from the config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOpts {
    /// Panel geometry and text metrics.
    pub layout: StripLayout,
    /// How unresolved placements are handled.
    pub mode: PlacementMode,
}

/// Decoded inputs for one render.
#[derive(Debug)]
pub struct StripInputs {
    /// Base artwork.
    pub template: Canvas,
    /// Background visibility mask.
    pub mask: CoverageMask,
    /// Background photo, straight alpha.
    pub background: image::RgbaImage,
    /// Caption font, loaded only when some caption has text.
    pub font: Option<FontFace>,
}

impl StripInputs {
    /// Load every input `config` needs. The font is skipped when all captions are empty.
    #[tracing::instrument(skip_all, fields(root = %paths.root.display()))]
    pub fn load(paths: &AssetPaths, config: &StripConfig, opts: &RenderOpts) -> StripResult<Self> {
        let template = load_image(&paths.resolve(&paths.template))?;
        let mask = load_mask(&paths.resolve(&paths.mask))?;
        let background = load_rgba(&paths.background_for(config))?;
        let font = if config.has_text() {
            Some(FontFace::from_path(
                &paths.resolve(&paths.font),
                opts.layout.font_size_pt,
            )?)
        } else {
            None
        };

        Ok(Self {
            template,
            mask,
            background,
            font,
        })
    }
}

/// Compose background and captions into the final scene.
///
/// Caption capacity and the background band are checked before any pixel is touched.
#[tracing::instrument(skip_all)]
pub fn render_strip(
    config: &StripConfig,
    inputs: &StripInputs,
    opts: &RenderOpts,
) -> StripResult<Canvas> {
    let band = config.validate()?;
    compose(config, inputs, opts, band)
}

/// Load, render, and write `out.png` in one pass.
///
/// The config is validated before any asset is read.
pub fn run(paths: &AssetPaths, config: &StripConfig, opts: &RenderOpts) -> StripResult<PathBuf> {
    let band = config.validate()?;
    let inputs = StripInputs::load(paths, config, opts)?;
    let scene = compose(config, &inputs, opts, band)?;

    let out = paths.resolve(&paths.out);
    write_png(&scene, &out)?;
    tracing::info!(out = %out.display(), "strip written");
    Ok(out)
}

fn compose(
    config: &StripConfig,
    inputs: &StripInputs,
    opts: &RenderOpts,
    band: Placement,
) -> StripResult<Canvas> {
    let base = composite_background(&inputs.template, &inputs.mask, &inputs.background, band)?;
    assemble_scene(
        &base,
        &config.captions(),
        &opts.layout,
        inputs.font.as_ref(),
        opts.mode,
    )
}
