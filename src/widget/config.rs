//! Indicator configuration, loadable from TOML.
//!
//! ```toml
//! bounce_offset = 7.5
//! dot_color = "#aaaaaa"
//! bounce_enabled = true
//! fade_enabled = true
//! pending_policy = "cancel"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::buffer::Rgb;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default vertical bounce displacement.
pub const DEFAULT_BOUNCE_OFFSET: f32 = 7.5;

/// What happens to stagger callbacks still pending when `stop` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingPolicy {
    /// Pending callbacks from before the `stop` do nothing when they fire.
    #[default]
    Cancel,
    /// Pending callbacks still attach their effects after `stop`, leaving
    /// dots animated while the indicator reports it is not.
    Fire,
}

/// Configuration for a [`super::TypingIndicator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Vertical bounce displacement, in layout units.
    pub bounce_offset: f32,
    /// Fill color of all dots.
    pub dot_color: Rgb,
    /// Attach the bounce effect on start.
    pub bounce_enabled: bool,
    /// Attach the fade effect on start.
    pub fade_enabled: bool,
    /// Handling of stagger callbacks that outlive a `stop`.
    pub pending_policy: PendingPolicy,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            bounce_offset: DEFAULT_BOUNCE_OFFSET,
            dot_color: Rgb::LIGHT_GRAY,
            bounce_enabled: false,
            fade_enabled: true,
            pending_policy: PendingPolicy::Cancel,
        }
    }
}

impl IndicatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounce_offset(self.bounce_offset)
    }
}

/// A bounce offset must be finite and non-negative.
pub(crate) fn validate_bounce_offset(offset: f32) -> Result<(), ConfigError> {
    if !offset.is_finite() || offset < 0.0 {
        return Err(ConfigError::InvalidBounceOffset(offset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndicatorConfig::default();
        assert!((config.bounce_offset - 7.5).abs() < f32::EPSILON);
        assert!(!config.bounce_enabled);
        assert!(config.fade_enabled);
        assert_eq!(config.pending_policy, PendingPolicy::Cancel);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = IndicatorConfig::from_toml(
            r##"
            dot_color = "#ff8800"
            bounce_enabled = true
            pending_policy = "fire"
            "##,
        )
        .unwrap();

        assert_eq!(config.dot_color, Rgb::new(0xff, 0x88, 0x00));
        assert!(config.bounce_enabled);
        assert!(config.fade_enabled);
        assert_eq!(config.pending_policy, PendingPolicy::Fire);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(IndicatorConfig::from_toml("").unwrap(), IndicatorConfig::default());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = IndicatorConfig::from_toml(r#"dot_color = "blue""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let err = IndicatorConfig::from_toml("bounce_offset = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounceOffset(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(IndicatorConfig::from_toml("dot_count = 5").is_err());
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let config = IndicatorConfig {
            dot_color: Rgb::new(1, 2, 3),
            ..IndicatorConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("dot_color = \"#010203\""));
        assert_eq!(IndicatorConfig::from_toml(&text).unwrap(), config);
    }
}
