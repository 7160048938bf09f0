//! Reference governance state machine
//!
//! Tracks only the owner and the pause flag, and predicts which error a
//! call must fail with. Ledger-level outcomes are left to the ledger.

use arigatai_token::{GovernanceError, GovernanceResult};

use crate::strategies::{Action, ZERO_ACTOR};

/// Predicted outcome of one action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    Success,
    Unauthorized,
    ExpectedPaused,
    ContractPaused,
    RedundantStateTransition,
    InvalidOwner,
    /// Governance passes, balances decide
    LedgerDecides,
}

impl Expected {
    pub fn matches(&self, result: &GovernanceResult<()>) -> bool {
        match (self, result) {
            (Self::Success, Ok(())) => true,
            (Self::LedgerDecides, Ok(())) => true,
            (Self::LedgerDecides, Err(GovernanceError::Ledger(_))) => true,
            (Self::Unauthorized, Err(GovernanceError::Unauthorized(_))) => true,
            (Self::ExpectedPaused, Err(GovernanceError::ExpectedPaused)) => true,
            (Self::ContractPaused, Err(GovernanceError::ContractPaused)) => true,
            (
                Self::RedundantStateTransition,
                Err(GovernanceError::RedundantStateTransition { .. }),
            ) => true,
            (Self::InvalidOwner, Err(GovernanceError::InvalidOwner(_))) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceModel {
    /// Actor index of the owner, None once renounced
    pub owner: Option<usize>,
    pub paused: bool,
}

impl GovernanceModel {
    /// Freshly deployed: owned by `owner`, active
    pub fn new(owner: usize) -> Self {
        Self {
            owner: Some(owner),
            paused: false,
        }
    }

    pub fn predict(&self, action: &Action) -> Expected {
        if action.is_administrative() && self.owner != Some(action.caller()) {
            return Expected::Unauthorized;
        }

        match action {
            Action::Pause { .. } if self.paused => Expected::RedundantStateTransition,
            Action::Unpause { .. } if !self.paused => Expected::RedundantStateTransition,
            Action::Pause { .. } | Action::Unpause { .. } => Expected::Success,
            Action::TransferOwnership { .. } | Action::RenounceOwnership { .. }
                if !self.paused =>
            {
                Expected::ExpectedPaused
            }
            Action::TransferOwnership { new_owner, .. } if *new_owner == ZERO_ACTOR => {
                Expected::InvalidOwner
            }
            Action::TransferOwnership { .. } | Action::RenounceOwnership { .. } => {
                Expected::Success
            }
            _ if action.moves_balances() && self.paused => Expected::ContractPaused,
            _ => Expected::LedgerDecides,
        }
    }

    /// Advance the model after `action` succeeded on the gate
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Pause { .. } => self.paused = true,
            Action::Unpause { .. } => self.paused = false,
            Action::TransferOwnership { new_owner, .. } => self.owner = Some(*new_owner),
            Action::RenounceOwnership { .. } => self.owner = None,
            _ => {}
        }
    }
}
