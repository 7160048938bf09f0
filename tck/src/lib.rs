//! # Arigatai TCK: Technology Compatibility Kit
//!
//! Conformance tooling for the Arigatai governance gate:
//!
//! - **utilities**: deployment fixtures with well-known accounts
//! - **invariants**: `anyhow` checkers for properties that must hold after
//!   every call, successful or not
//! - **strategies**: proptest strategies generating governance call
//!   sequences
//! - **model**: reference state machine predicting the outcome of each
//!   generated call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arigatai_tck::prelude::*;
//!
//! let mut fixture = Fixture::deploy().unwrap();
//! fixture.token.pause(&fixture.deployer).unwrap();
//! check_governance(&fixture.token).unwrap();
//! ```

#![warn(clippy::all)]

pub mod invariants;
pub mod model;
pub mod strategies;
pub mod utilities;

/// Common imports for conformance tests
pub mod prelude {
    pub use crate::invariants::*;
    pub use crate::model::{Expected, GovernanceModel};
    pub use crate::strategies::{arb_action, arb_actions, arb_address, Action};
    pub use crate::utilities::{Fixture, FIXTURE_SUPPLY};
    pub use arigatai_common::{
        config::TokenConfig,
        crypto::Address,
        event::{Event, EventLog},
    };
    pub use arigatai_token::{
        GateState, GovernanceError, GovernanceGate, Instruction, OperationalState, Output,
        OwnershipState,
    };
}
