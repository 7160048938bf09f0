//! Token Error Codes
//!
//! Range: 0x0300 - 0x03FF
//! Format: TOKEN_ERROR_<CATEGORY>_<SPECIFIC>

use arigatai_common::{crypto::Address, error::ConfigError};
use thiserror::Error;

// ===== Governance Errors (0x0300 - 0x030F) =====

pub const TOKEN_ERROR_UNAUTHORIZED: u64 = 0x0300;
pub const TOKEN_ERROR_EXPECTED_PAUSED: u64 = 0x0301;
pub const TOKEN_ERROR_CONTRACT_PAUSED: u64 = 0x0302;
pub const TOKEN_ERROR_REDUNDANT_STATE_TRANSITION: u64 = 0x0303;
pub const TOKEN_ERROR_INVALID_OWNER: u64 = 0x0304;
pub const TOKEN_ERROR_INVALID_CONFIG: u64 = 0x0305;

// ===== Instruction Errors (0x0310 - 0x031F) =====

pub const TOKEN_ERROR_INVALID_INSTRUCTION: u64 = 0x0310;
pub const TOKEN_ERROR_INVALID_PARAMS: u64 = 0x0311;

// ===== Ledger Errors (0x0320 - 0x032F) =====

pub const TOKEN_ERROR_INSUFFICIENT_BALANCE: u64 = 0x0320;
pub const TOKEN_ERROR_INSUFFICIENT_ALLOWANCE: u64 = 0x0321;
pub const TOKEN_ERROR_INVALID_SENDER: u64 = 0x0322;
pub const TOKEN_ERROR_INVALID_RECEIVER: u64 = 0x0323;
pub const TOKEN_ERROR_INVALID_APPROVER: u64 = 0x0324;
pub const TOKEN_ERROR_INVALID_SPENDER: u64 = 0x0325;
pub const TOKEN_ERROR_OVERFLOW: u64 = 0x0326;

/// Failures of the token accounting collaborator
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: u64, have: u64 },

    #[error("Insufficient allowance: need {need}, have {have}")]
    InsufficientAllowance { need: u64, have: u64 },

    #[error("Invalid sender: zero address")]
    InvalidSender,

    #[error("Invalid receiver: zero address")]
    InvalidReceiver,

    #[error("Invalid approver: zero address")]
    InvalidApprover,

    #[error("Invalid spender: zero address")]
    InvalidSpender,

    #[error("Total supply overflow")]
    Overflow,
}

/// Rejections raised by the governance gate
///
/// Every variant aborts the whole call with no state change and no event.
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// Caller is not the current owner
    #[error("Unauthorized account {0}")]
    Unauthorized(Address),

    /// Operation requires the paused state
    #[error("Expected pause: contract is active")]
    ExpectedPaused,

    /// Transfer-family operation while paused
    #[error("Contract is paused")]
    ContractPaused,

    /// pause() while paused, or unpause() while active
    #[error("Redundant state transition: contract is already {}", state_name(.paused))]
    RedundantStateTransition { paused: bool },

    /// Zero address given as owner
    #[error("Invalid owner {0}")]
    InvalidOwner(Address),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid instruction opcode {0:#04x}")]
    InvalidInstruction(u8),

    #[error("Invalid instruction parameters: expected {expected} bytes, got {got}")]
    InvalidParams { expected: usize, got: usize },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl GovernanceError {
    /// Convert error to u64 error code
    pub fn to_code(&self) -> u64 {
        match self {
            Self::Unauthorized(_) => TOKEN_ERROR_UNAUTHORIZED,
            Self::ExpectedPaused => TOKEN_ERROR_EXPECTED_PAUSED,
            Self::ContractPaused => TOKEN_ERROR_CONTRACT_PAUSED,
            Self::RedundantStateTransition { .. } => TOKEN_ERROR_REDUNDANT_STATE_TRANSITION,
            Self::InvalidOwner(_) => TOKEN_ERROR_INVALID_OWNER,
            Self::InvalidConfig(_) => TOKEN_ERROR_INVALID_CONFIG,
            Self::InvalidInstruction(_) => TOKEN_ERROR_INVALID_INSTRUCTION,
            Self::InvalidParams { .. } => TOKEN_ERROR_INVALID_PARAMS,
            Self::Ledger(e) => e.to_code(),
        }
    }

    /// Whether the error is an authorization failure
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl LedgerError {
    /// Convert error to u64 error code
    pub fn to_code(self) -> u64 {
        match self {
            Self::InsufficientBalance { .. } => TOKEN_ERROR_INSUFFICIENT_BALANCE,
            Self::InsufficientAllowance { .. } => TOKEN_ERROR_INSUFFICIENT_ALLOWANCE,
            Self::InvalidSender => TOKEN_ERROR_INVALID_SENDER,
            Self::InvalidReceiver => TOKEN_ERROR_INVALID_RECEIVER,
            Self::InvalidApprover => TOKEN_ERROR_INVALID_APPROVER,
            Self::InvalidSpender => TOKEN_ERROR_INVALID_SPENDER,
            Self::Overflow => TOKEN_ERROR_OVERFLOW,
        }
    }
}

/// Name of the error kind behind a code, None if the code is unknown
pub fn error_name(code: u64) -> Option<&'static str> {
    match code {
        TOKEN_ERROR_UNAUTHORIZED => Some("Unauthorized"),
        TOKEN_ERROR_EXPECTED_PAUSED => Some("ExpectedPaused"),
        TOKEN_ERROR_CONTRACT_PAUSED => Some("ContractPaused"),
        TOKEN_ERROR_REDUNDANT_STATE_TRANSITION => Some("RedundantStateTransition"),
        TOKEN_ERROR_INVALID_OWNER => Some("InvalidOwner"),
        TOKEN_ERROR_INVALID_CONFIG => Some("InvalidConfig"),
        TOKEN_ERROR_INVALID_INSTRUCTION => Some("InvalidInstruction"),
        TOKEN_ERROR_INVALID_PARAMS => Some("InvalidParams"),
        TOKEN_ERROR_INSUFFICIENT_BALANCE => Some("InsufficientBalance"),
        TOKEN_ERROR_INSUFFICIENT_ALLOWANCE => Some("InsufficientAllowance"),
        TOKEN_ERROR_INVALID_SENDER => Some("InvalidSender"),
        TOKEN_ERROR_INVALID_RECEIVER => Some("InvalidReceiver"),
        TOKEN_ERROR_INVALID_APPROVER => Some("InvalidApprover"),
        TOKEN_ERROR_INVALID_SPENDER => Some("InvalidSpender"),
        TOKEN_ERROR_OVERFLOW => Some("Overflow"),
        _ => None,
    }
}

fn state_name(paused: &bool) -> &'static str {
    if *paused {
        "paused"
    } else {
        "active"
    }
}

/// Result type for gate operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_codes_flow_through_governance_error() {
        let err: GovernanceError = LedgerError::InsufficientBalance { need: 5, have: 1 }.into();
        assert_eq!(err.to_code(), TOKEN_ERROR_INSUFFICIENT_BALANCE);
        assert_eq!(err.to_string(), "Insufficient balance: need 5, have 1");
    }

    #[test]
    fn test_every_code_has_a_name() {
        let errors = [
            GovernanceError::Unauthorized(Address::zero()),
            GovernanceError::ExpectedPaused,
            GovernanceError::ContractPaused,
            GovernanceError::RedundantStateTransition { paused: true },
            GovernanceError::InvalidOwner(Address::zero()),
            GovernanceError::InvalidConfig(ConfigError::NameEmpty),
            GovernanceError::InvalidInstruction(0xff),
            GovernanceError::InvalidParams {
                expected: 32,
                got: 0,
            },
            GovernanceError::Ledger(LedgerError::Overflow),
        ];
        for err in errors {
            assert!(error_name(err.to_code()).is_some(), "{err}");
        }
        assert_eq!(error_name(0xdead), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GovernanceError::RedundantStateTransition { paused: false }.to_string(),
            "Redundant state transition: contract is already active"
        );
        assert_eq!(
            GovernanceError::InvalidInstruction(0x7f).to_string(),
            "Invalid instruction opcode 0x7f"
        );
    }
}
