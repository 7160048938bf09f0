//! Proptest strategies for governance call sequences
//!
//! Callers are drawn from a small pool of actors so that generated
//! sequences hit the owner often enough to reach every state. Actor 0 is
//! always the deployer.
//!
//! # Example
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use arigatai_tck::strategies::*;
//!
//! proptest! {
//!     #[test]
//!     fn test_sequence(actions in arb_actions(32)) {
//!         assert!(actions.len() <= 32);
//!     }
//! }
//! ```

use arigatai_common::crypto::Address;
use arigatai_token::{GovernanceGate, GovernanceResult};
use proptest::prelude::*;

/// Size of the actor pool
pub const ACTOR_COUNT: usize = 4;

/// Index used to target the zero address
pub const ZERO_ACTOR: usize = ACTOR_COUNT;

/// Strategy for arbitrary 32-byte addresses
///
/// Shrinks towards the zero address.
pub fn arb_address() -> impl Strategy<Value = Address> {
    prop::array::uniform32(any::<u8>()).prop_map(Address::new)
}

/// Strategy for a fixed pool of distinct, non-zero actors
pub fn arb_actor_pool() -> impl Strategy<Value = Vec<Address>> {
    prop::collection::hash_set(arb_address(), ACTOR_COUNT..=ACTOR_COUNT)
        .prop_filter("actors must be non-zero", |set| {
            set.iter().all(|address| !address.is_zero())
        })
        .prop_map(|set| set.into_iter().collect())
}

/// A single call against the gate, with callers given as pool indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Pause { caller: usize },
    Unpause { caller: usize },
    TransferOwnership { caller: usize, new_owner: usize },
    RenounceOwnership { caller: usize },
    Transfer { caller: usize, to: usize, amount: u64 },
    Approve { caller: usize, spender: usize, amount: u64 },
    TransferFrom { caller: usize, from: usize, to: usize, amount: u64 },
    Burn { caller: usize, amount: u64 },
}

/// Resolve an actor index, [`ZERO_ACTOR`] maps to the zero address
pub fn resolve(actors: &[Address], index: usize) -> Address {
    actors.get(index).copied().unwrap_or_else(Address::zero)
}

impl Action {
    pub fn caller(&self) -> usize {
        match self {
            Self::Pause { caller }
            | Self::Unpause { caller }
            | Self::TransferOwnership { caller, .. }
            | Self::RenounceOwnership { caller }
            | Self::Transfer { caller, .. }
            | Self::Approve { caller, .. }
            | Self::TransferFrom { caller, .. }
            | Self::Burn { caller, .. } => *caller,
        }
    }

    /// Owner-restricted calls
    pub fn is_administrative(&self) -> bool {
        matches!(
            self,
            Self::Pause { .. }
                | Self::Unpause { .. }
                | Self::TransferOwnership { .. }
                | Self::RenounceOwnership { .. }
        )
    }

    /// Calls that move balances
    pub fn moves_balances(&self) -> bool {
        matches!(
            self,
            Self::Transfer { .. } | Self::TransferFrom { .. } | Self::Burn { .. }
        )
    }

    /// Run the action against `gate`
    pub fn apply(&self, gate: &mut GovernanceGate, actors: &[Address]) -> GovernanceResult<()> {
        let caller = resolve(actors, self.caller());
        match self {
            Self::Pause { .. } => gate.pause(&caller),
            Self::Unpause { .. } => gate.unpause(&caller),
            Self::TransferOwnership { new_owner, .. } => {
                gate.transfer_ownership(&caller, &resolve(actors, *new_owner))
            }
            Self::RenounceOwnership { .. } => gate.renounce_ownership(&caller),
            Self::Transfer { to, amount, .. } => {
                gate.transfer(&caller, &resolve(actors, *to), *amount)
            }
            Self::Approve {
                spender, amount, ..
            } => gate.approve(&caller, &resolve(actors, *spender), *amount),
            Self::TransferFrom {
                from, to, amount, ..
            } => gate.transfer_from(
                &caller,
                &resolve(actors, *from),
                &resolve(actors, *to),
                *amount,
            ),
            Self::Burn { amount, .. } => gate.burn(&caller, *amount),
        }
    }
}

fn arb_caller() -> impl Strategy<Value = usize> {
    0..ACTOR_COUNT
}

// Includes the zero address as a target
fn arb_target() -> impl Strategy<Value = usize> {
    0..=ZERO_ACTOR
}

fn arb_amount() -> impl Strategy<Value = u64> {
    prop_oneof![
        4 => 0u64..=1_000,
        1 => Just(u64::MAX),
    ]
}

/// Strategy for one action
///
/// Administrative calls are weighted up so that pause windows and
/// ownership changes show up in short sequences.
pub fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_caller().prop_map(|caller| Action::Pause { caller }),
        3 => arb_caller().prop_map(|caller| Action::Unpause { caller }),
        3 => (arb_caller(), arb_target())
            .prop_map(|(caller, new_owner)| Action::TransferOwnership { caller, new_owner }),
        1 => arb_caller().prop_map(|caller| Action::RenounceOwnership { caller }),
        3 => (arb_caller(), arb_target(), arb_amount())
            .prop_map(|(caller, to, amount)| Action::Transfer { caller, to, amount }),
        2 => (arb_caller(), arb_target(), arb_amount())
            .prop_map(|(caller, spender, amount)| Action::Approve { caller, spender, amount }),
        2 => (arb_caller(), arb_caller(), arb_target(), arb_amount()).prop_map(
            |(caller, from, to, amount)| Action::TransferFrom { caller, from, to, amount }
        ),
        1 => (arb_caller(), arb_amount()).prop_map(|(caller, amount)| Action::Burn { caller, amount }),
    ]
}

/// Strategy for a sequence of up to `max_len` actions
pub fn arb_actions(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 0..=max_len)
}
