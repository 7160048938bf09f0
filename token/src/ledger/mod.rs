//! Token accounting collaborator
//!
//! The gate decides *whether* a ledger call may run; the ledger decides
//! *how* balances move. Implementations must validate every precondition
//! before touching state so that a returned error leaves no partial effect.

mod memory;

pub use memory::MemoryLedger;

use arigatai_common::{crypto::Address, event::EventSink};

use crate::error::LedgerError;

/// Standard ERC20 accounting surface
pub trait Ledger {
    fn total_supply(&self) -> u64;

    fn balance_of(&self, account: &Address) -> u64;

    fn allowance(&self, owner: &Address, spender: &Address) -> u64;

    /// Create `amount` tokens for `to`, emits `Transfer(zero, to, amount)`
    fn mint(
        &mut self,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError>;

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError>;

    fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to` using the allowance granted to `spender`
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError>;

    /// Destroy `amount` tokens held by `from`, emits `Transfer(from, zero, amount)`
    fn burn(
        &mut self,
        from: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError>;
}
