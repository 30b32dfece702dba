//! Calculator settings
//!
//! Defaults are baked in. A JSON document may override any subset of fields;
//! unknown fields are rejected so typos do not silently fall back.

use crate::service::{CalculatorError, CalculatorResult};
use serde::{Deserialize, Serialize};

/// Typed calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorSettings {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    /// Width of the readout, in characters
    pub display_width: usize,
    /// Process auto-repeat key events, not just presses
    pub accept_repeat: bool,
    /// Treat ',' as a decimal point
    pub comma_decimal: bool,
    /// Treat 'x' and 'X' as multiply
    pub x_multiplies: bool,
}

impl CalculatorSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> CalculatorResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| CalculatorError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> CalculatorResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalculatorError::Settings(e.to_string()))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.version != Self::CURRENT_VERSION {
            return Err(CalculatorError::UnsupportedSettingsVersion(self.version));
        }
        if self.display_width == 0 {
            return Err(CalculatorError::Settings(
                "display_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            display_width: 16,
            accept_repeat: true,
            comma_decimal: true,
            x_multiplies: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.version, CalculatorSettings::CURRENT_VERSION);
        assert_eq!(settings.display_width, 16);
        assert!(settings.accept_repeat);
        assert!(settings.comma_decimal);
        assert!(settings.x_multiplies);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let settings = CalculatorSettings::from_json(r#"{ "comma_decimal": false }"#).unwrap();
        assert!(!settings.comma_decimal);
        assert_eq!(settings.display_width, 16);
        assert!(settings.x_multiplies);
    }

    #[test]
    fn test_empty_document_is_defaults() {
        let settings = CalculatorSettings::from_json("{}").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CalculatorSettings::from_json(r#"{ "display_widht": 20 }"#).unwrap_err();
        assert!(matches!(err, CalculatorError::Settings(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            CalculatorSettings::from_json("{ not json"),
            Err(CalculatorError::Settings(_))
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            CalculatorSettings::from_json(r#"{ "display_width": 0 }"#),
            Err(CalculatorError::Settings(_))
        ));
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(
            CalculatorSettings::from_json(r#"{ "version": 99 }"#),
            Err(CalculatorError::UnsupportedSettingsVersion(99))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = CalculatorSettings {
            display_width: 24,
            accept_repeat: false,
            ..CalculatorSettings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(CalculatorSettings::from_json(&json).unwrap(), settings);
    }
}
