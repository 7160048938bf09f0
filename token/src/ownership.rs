//! Single-owner registry
//!
//! Holds the one principal allowed to run administrative operations.
//! Authorization failures are raised by the gate, never here.

use arigatai_common::{
    crypto::Address,
    event::{Event, EventSink},
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRegistry {
    /// None once ownership has been renounced
    owner: Option<Address>,
}

impl OwnershipRegistry {
    /// Create the registry with its initial owner
    ///
    /// Emits `OwnershipTransferred(zero, initial_owner)`.
    pub(crate) fn new(initial_owner: Address, sink: &mut impl EventSink) -> Self {
        let mut registry = Self { owner: None };
        registry.set_owner(Some(initial_owner), sink);
        registry
    }

    pub fn current_owner(&self) -> Option<Address> {
        self.owner
    }

    /// Owner at the external boundary, zero address when ownerless
    pub fn owner(&self) -> Address {
        Address::from_option(self.owner)
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        self.owner.as_ref() == Some(caller)
    }

    /// Replace the owner without any check
    ///
    /// Callers must have authorized the change already.
    pub(crate) fn set_owner(&mut self, new_owner: Option<Address>, sink: &mut impl EventSink) {
        let previous_owner = Address::from_option(self.owner);
        let new_owner_address = Address::from_option(new_owner);
        self.owner = new_owner;

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "ownership transferred from {} to {}",
                previous_owner, new_owner_address
            );
        }

        sink.emit(Event::OwnershipTransferred {
            previous_owner,
            new_owner: new_owner_address,
        });
    }
}
