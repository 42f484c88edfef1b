//! Display configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for amount rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol appended or prepended to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Place the symbol before the amount ("$12.00") instead of after
    /// ("12.00 €").
    #[serde(default)]
    pub symbol_before_amount: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            symbol_before_amount: false,
        }
    }
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl DisplayConfig {
    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency_symbol.is_empty() {
            return Err(ValidationError::MissingRequired("currency_symbol"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_symbol_fails_validation() {
        let config = DisplayConfig {
            currency_symbol: String::new(),
            symbol_before_amount: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: DisplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert!(!config.symbol_before_amount);
    }
}
