//! Core invariant checkers
//!
//! Implements the governance invariants:
//! - Supply conservation (sum of balances equals total supply)
//! - Owner consistency (zero sentinel, matching event trail)
//! - Event log ordering
//! - No-op rejection (a failed call leaves state and events untouched)
//! - Frozen pause flag once ownership is renounced

use anyhow::{bail, Result};
use arigatai_common::{
    crypto::Address,
    event::{Event, EventLog},
};
use arigatai_token::{GateState, GovernanceGate, OwnershipState};

/// Observable state captured around a call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub state: GateState,
    pub total_supply: u64,
    pub balances: Vec<(Address, u64)>,
    pub allowances: Vec<((Address, Address), u64)>,
    pub event_count: usize,
}

impl Snapshot {
    pub fn capture(gate: &GovernanceGate) -> Self {
        Self {
            state: gate.state(),
            total_supply: gate.total_supply(),
            balances: gate
                .ledger()
                .holders()
                .map(|(account, balance)| (*account, balance))
                .collect(),
            allowances: gate
                .ledger()
                .allowances()
                .map(|(pair, amount)| (*pair, amount))
                .collect(),
            event_count: gate.events().len(),
        }
    }
}

/// Check supply conservation invariant
///
/// Verifies that the sum of all balances equals the recorded total supply.
///
/// # Errors
/// Returns error if the sum overflows or differs from the total supply
pub fn check_supply_conservation(gate: &GovernanceGate) -> Result<()> {
    let mut sum: u64 = 0;
    for (account, balance) in gate.ledger().holders() {
        sum = match sum.checked_add(balance) {
            Some(sum) => sum,
            None => bail!("Balance sum overflowed at account {}", account),
        };
    }

    if sum != gate.total_supply() {
        bail!(
            "Supply conservation violated: sum of balances ({}) != total supply ({})",
            sum,
            gate.total_supply()
        );
    }
    Ok(())
}

/// Check owner consistency
///
/// The boundary owner must be the zero address exactly when ownerless, and
/// the last `OwnershipTransferred` event must name the current owner.
pub fn check_owner_consistency(gate: &GovernanceGate) -> Result<()> {
    let owner = gate.owner();
    match gate.current_owner() {
        Some(current) if current.is_zero() => bail!("Owner recorded as the zero address"),
        Some(current) if current != owner => {
            bail!("Owner mismatch: recorded {} but reported {}", current, owner)
        }
        None if !owner.is_zero() => bail!("Ownerless token reports owner {}", owner),
        _ => {}
    }

    let last_transfer = gate
        .events()
        .named("OwnershipTransferred")
        .last()
        .cloned();
    match last_transfer {
        Some(Event::OwnershipTransferred { new_owner, .. }) if new_owner == owner => Ok(()),
        Some(event) => bail!(
            "Last ownership event {:?} does not match owner {}",
            event,
            owner
        ),
        None => bail!("No OwnershipTransferred event recorded"),
    }
}

/// Check that log indices start at 0 and increase by one
pub fn check_event_ordering(log: &EventLog) -> Result<()> {
    for (position, record) in log.records().iter().enumerate() {
        if record.log_index != position as u64 {
            bail!(
                "Event ordering violated: record at position {} has log_index {}",
                position,
                record.log_index
            );
        }
    }
    Ok(())
}

/// Check that a rejected call had no observable effect
pub fn check_rejection_is_noop(before: &Snapshot, after: &Snapshot) -> Result<()> {
    if before != after {
        bail!(
            "Rejected call changed state: before {:?}, after {:?}",
            before,
            after
        );
    }
    Ok(())
}

/// Check that the pause flag never moves once ownership is renounced
pub fn check_frozen_when_ownerless(before: &GateState, after: &GateState) -> Result<()> {
    if before.ownership != OwnershipState::Ownerless {
        return Ok(());
    }
    if after.ownership != OwnershipState::Ownerless {
        bail!("Ownership reclaimed after renounce: {:?}", after.ownership);
    }
    if after.operational != before.operational {
        bail!(
            "Pause flag moved while ownerless: {:?} -> {:?}",
            before.operational,
            after.operational
        );
    }
    Ok(())
}

/// Run every stateless checker against `gate`
pub fn check_governance(gate: &GovernanceGate) -> Result<()> {
    check_supply_conservation(gate)?;
    check_owner_consistency(gate)?;
    check_event_ordering(gate.events())?;
    Ok(())
}
