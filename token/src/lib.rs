//! Arigatai token
//!
//! A fungible token whose administration is held by a single owner and
//! whose transfers can be halted by a global pause switch. Ownership may
//! only change while the token is paused, which gives every change of
//! control an explicit maintenance window.
//!
//! ```
//! use arigatai_common::{config::TokenConfig, crypto::Address};
//! use arigatai_token::{GovernanceError, GovernanceGate};
//!
//! let owner = Address::new([1u8; 32]);
//! let successor = Address::new([2u8; 32]);
//! let mut token = GovernanceGate::deploy(&owner, TokenConfig::default()).unwrap();
//!
//! // Ownership only moves inside a pause window
//! assert!(matches!(
//!     token.transfer_ownership(&owner, &successor),
//!     Err(GovernanceError::ExpectedPaused)
//! ));
//! token.pause(&owner).unwrap();
//! token.transfer_ownership(&owner, &successor).unwrap();
//! assert_eq!(token.owner(), successor);
//! ```

pub mod error;
pub mod gate;
pub mod instruction;
pub mod ledger;
pub mod ownership;
pub mod pause;

pub use error::{GovernanceError, GovernanceResult, LedgerError};
pub use gate::{GateState, GovernanceGate, OperationalState, OwnershipState};
pub use instruction::{Instruction, Output};
pub use ledger::{Ledger, MemoryLedger};
pub use ownership::OwnershipRegistry;
pub use pause::PauseSwitch;
