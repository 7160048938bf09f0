use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid hex string")]
    InvalidHex,

    #[error("Invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Token name cannot be empty")]
    NameEmpty,

    #[error("Token name too long: {len} bytes, maximum {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("Token symbol cannot be empty")]
    SymbolEmpty,

    #[error("Token symbol too long: {len} bytes, maximum {max}")]
    SymbolTooLong { len: usize, max: usize },

    #[error("Decimals too high: {decimals}, maximum {max}")]
    DecimalsTooHigh { decimals: u8, max: u8 },

    #[error("Invalid token configuration: {0}")]
    Json(#[from] serde_json::Error),
}
