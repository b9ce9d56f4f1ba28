use std::path::Path;

use crate::{
    assets::decode::read_asset,
    foundation::error::{StripError, StripResult},
    layout::panels::PANEL_COUNT,
    layout::placement::Placement,
};

/// Default background file name, resolved against the asset root.
pub const DEFAULT_BACKGROUND_PATH: &str = "background";

/// One panel's caption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caption {
    /// Caption text; empty text leaves the panel untouched.
    pub text: String,
    /// Requested slot, or [`Placement::None`] to derive it.
    pub placement: Placement,
}

impl Caption {
    /// Caption with a derived slot.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: Placement::None,
        }
    }

    /// Caption with an explicit slot.
    pub fn placed(text: impl Into<String>, placement: Placement) -> Self {
        Self {
            text: text.into(),
            placement,
        }
    }

    /// True when the caption renders nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// How unresolved caption placements are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementMode {
    /// Derive the slot and jitter from the caption text.
    #[default]
    Derived,
    /// Unresolved captions go to the top slot; no jitter is applied.
    Fixed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A panel entry as it appears in `config.json`.
pub struct PanelConfig {
    /// Caption text.
    #[serde(default)]
    pub text: String,
    /// Placement keyword; unknown or empty means automatic.
    #[serde(default)]
    pub placement: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Background image settings.
pub struct BackgroundConfig {
    /// Background image path, relative to the asset root.
    #[serde(default = "default_background_path")]
    pub path: String,
    /// Vertical band (1..=5) the crop starts at.
    #[serde(default = "default_background_placement")]
    pub placement: u32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            path: default_background_path(),
            placement: default_background_placement(),
        }
    }
}

impl BackgroundConfig {
    /// Validated placement band.
    pub fn band(&self) -> StripResult<Placement> {
        Placement::from_index(self.placement).ok_or_else(|| {
            StripError::config(format!(
                "background placement must be in 1..=5, got {}",
                self.placement
            ))
        })
    }
}

fn default_background_path() -> String {
    DEFAULT_BACKGROUND_PATH.to_string()
}

fn default_background_placement() -> u32 {
    Placement::TopMiddle.index()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Top-level strip description.
///
/// Mirrors `config.json`:
/// `{"panels": [{"text": .., "placement": ..}], "background": {"path": .., "placement": 1..5}}`.
pub struct StripConfig {
    /// Panel captions in panel order.
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
    /// Background settings.
    #[serde(default)]
    pub background: BackgroundConfig,
}

impl StripConfig {
    /// Parse JSON text.
    pub fn from_json_str(s: &str) -> StripResult<Self> {
        serde_json::from_str(s).map_err(|e| StripError::config(format!("parse config JSON: {e}")))
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> StripResult<Self> {
        let bytes = read_asset(path).map_err(|e| match e {
            StripError::AssetLoad(msg) => StripError::Config(msg),
            other => other,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            StripError::config(format!("parse config JSON '{}': {e}", path.display()))
        })
    }

    /// Plain caption list with automatic placement and the default background.
    pub fn from_captions<I, S>(captions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: captions
                .into_iter()
                .map(|text| PanelConfig {
                    text: text.into(),
                    placement: String::new(),
                })
                .collect(),
            background: BackgroundConfig::default(),
        }
    }

    /// Check panel capacity and background band, returning the band.
    pub fn validate(&self) -> StripResult<Placement> {
        check_capacity(self.panels.len(), PANEL_COUNT)?;
        self.background.band()
    }

    /// Captions in panel order.
    pub fn captions(&self) -> Vec<Caption> {
        self.panels
            .iter()
            .map(|p| Caption::placed(p.text.clone(), Placement::from_keyword(&p.placement)))
            .collect()
    }

    /// True when at least one caption has text, so a font is needed.
    pub fn has_text(&self) -> bool {
        self.panels.iter().any(|p| !p.text.is_empty())
    }
}

/// Reject more captions than there are panels.
pub fn check_capacity(captions: usize, panels: usize) -> StripResult<()> {
    if captions > panels {
        return Err(StripError::usage(format!(
            "{captions} captions supplied but the strip has only {panels} panels"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
