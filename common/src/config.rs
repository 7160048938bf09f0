use log::debug;
use serde::{Deserialize, Serialize};

use crate::{crypto::Address, error::ConfigError};

// Token identity
// Both are fixed for the lifetime of a deployment
pub const TOKEN_NAME: &str = "Arigatai";
pub const TOKEN_SYMBOL: &str = "ARIG";
// 18 decimals, ERC20 convention
pub const TOKEN_DECIMALS: u8 = 18;

/// Maximum length of token name (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of token symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 12;

/// Maximum decimals for a token
pub const MAX_DECIMALS: u8 = 18;

/// Construction-time configuration of a token deployment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Human readable name
    pub name: String,
    /// Short ticker
    pub symbol: String,
    /// Decimal places (0-18)
    pub decimals: u8,
    /// Amount minted to the initial owner at deployment
    pub initial_supply: u64,
    /// Initial administrator (None = the deployer)
    pub initial_owner: Option<Address>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            initial_supply: 0,
            initial_owner: None,
        }
    }
}

impl TokenConfig {
    /// Parse a configuration from JSON, missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TokenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_owner(mut self, owner: Address) -> Self {
        self.initial_owner = Some(owner);
        self
    }

    pub fn with_initial_supply(mut self, supply: u64) -> Self {
        self.initial_supply = supply;
        self
    }

    /// Resolve the initial owner, defaulting to the deploying principal
    pub fn resolve_owner(&self, deployer: &Address) -> Address {
        self.initial_owner.unwrap_or(*deployer)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::NameEmpty);
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(ConfigError::NameTooLong {
                len: self.name.len(),
                max: MAX_NAME_LENGTH,
            });
        }
        if self.symbol.is_empty() {
            return Err(ConfigError::SymbolEmpty);
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(ConfigError::SymbolTooLong {
                len: self.symbol.len(),
                max: MAX_SYMBOL_LENGTH,
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::DecimalsTooHigh {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "token config {} ({}) validated, {} decimals",
                self.name, self.symbol, self.decimals
            );
        }
        Ok(())
    }

    pub fn metadata(&self) -> TokenMetadata {
        TokenMetadata {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
        }
    }
}

/// Immutable token identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenConfig::default();
        assert_eq!(config.name, "Arigatai");
        assert_eq!(config.symbol, "ARIG");
        assert_eq!(config.decimals, 18);
        assert_eq!(config.initial_supply, 0);
        assert!(config.initial_owner.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_owner_defaults_to_deployer() {
        let deployer = Address::new([7u8; 32]);
        let other = Address::new([9u8; 32]);

        let config = TokenConfig::default();
        assert_eq!(config.resolve_owner(&deployer), deployer);

        let config = config.with_initial_owner(other);
        assert_eq!(config.resolve_owner(&deployer), other);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{ "initial_supply": 1000 }"#;
        let config = TokenConfig::from_json(json).unwrap();
        assert_eq!(config.name, TOKEN_NAME);
        assert_eq!(config.initial_supply, 1000);
    }

    #[test]
    fn test_from_json_with_owner() {
        let owner = Address::new([2u8; 32]);
        let json = format!(r#"{{ "initial_owner": "{}" }}"#, owner);
        let config = TokenConfig::from_json(&json).unwrap();
        assert_eq!(config.initial_owner, Some(owner));
    }

    #[test]
    fn test_validation_rejects_bad_metadata() {
        let mut config = TokenConfig::default();
        config.symbol = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::SymbolEmpty)));

        let mut config = TokenConfig::default();
        config.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NameTooLong { len: 65, max: 64 })
        ));

        let mut config = TokenConfig::default();
        config.decimals = 19;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DecimalsTooHigh { .. })
        ));

        assert!(matches!(
            TokenConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    proptest::proptest! {
        #[test]
        fn test_decimals_bound(decimals in proptest::prelude::any::<u8>()) {
            let config = TokenConfig {
                decimals,
                ..TokenConfig::default()
            };
            proptest::prop_assert_eq!(config.validate().is_ok(), decimals <= MAX_DECIMALS);
        }

        #[test]
        fn test_symbol_length_bound(symbol in "[A-Z]{1,20}") {
            let config = TokenConfig {
                symbol: symbol.clone(),
                ..TokenConfig::default()
            };
            proptest::prop_assert_eq!(config.validate().is_ok(), symbol.len() <= MAX_SYMBOL_LENGTH);
        }
    }
}
