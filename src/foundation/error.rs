/// Convenience result type used across stripgen.
pub type StripResult<T> = Result<T, StripError>;

/// Top-level error taxonomy used by the render pipeline.
///
/// Every variant is fatal for the render that produced it; nothing is retried. Lower-level
/// failures are folded into one of these with a message; the binary wraps the result in
/// `anyhow` for context.
#[derive(thiserror::Error, Debug)]
pub enum StripError {
    /// Malformed or missing JSON config.
    #[error("config error: {0}")]
    Config(String),

    /// Missing or undecodable template, mask, background, or font.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// Caller asked for more than the panel table can hold.
    #[error("usage error: {0}")]
    Usage(String),

    /// Writing the output image failed.
    #[error("encode error: {0}")]
    Encode(String),
}

impl StripError {
    /// Build a [`StripError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StripError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`StripError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`StripError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
