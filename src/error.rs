//! Error types.
//!
//! Widget operations are total; only configuration loading can fail.

/// Errors produced while loading or validating an indicator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse indicator config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color was not a `#rrggbb` hex string.
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    /// The bounce offset was negative, NaN or infinite.
    #[error("bounce offset must be finite and non-negative, got {0}")]
    InvalidBounceOffset(f32),
}
