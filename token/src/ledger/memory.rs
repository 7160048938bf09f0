use arigatai_common::{
    crypto::Address,
    event::{Event, EventSink},
};
use indexmap::IndexMap;
use log::trace;

use super::Ledger;
use crate::error::LedgerError;

/// Allowance value treated as unlimited (never decremented)
pub const INFINITE_ALLOWANCE: u64 = u64::MAX;

/// In-memory ERC20 bookkeeping
///
/// Balances keep insertion order so that holder listings are deterministic.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    total_supply: u64,
    balances: IndexMap<Address, u64>,
    allowances: IndexMap<(Address, Address), u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts holding a non-zero balance
    pub fn holders(&self) -> impl Iterator<Item = (&Address, u64)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(account, balance)| (account, *balance))
    }

    /// Every recorded allowance as `((owner, spender), amount)`, zero included
    pub fn allowances(&self) -> impl Iterator<Item = (&(Address, Address), u64)> {
        self.allowances
            .iter()
            .map(|(pair, amount)| (pair, *amount))
    }

    fn set_balance(&mut self, account: &Address, amount: u64) {
        self.balances.insert(*account, amount);
    }

    // Compute the post-transfer balances without writing anything
    fn check_transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: u64,
    ) -> Result<(u64, u64), LedgerError> {
        if from.is_zero() {
            return Err(LedgerError::InvalidSender);
        }
        if to.is_zero() {
            return Err(LedgerError::InvalidReceiver);
        }

        let have = self.balance_of(from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { need: amount, have });
        }

        if from == to {
            return Ok((have, have));
        }

        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok((have - amount, to_balance))
    }

    fn apply_transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u64,
        balances: (u64, u64),
        sink: &mut dyn EventSink,
    ) {
        let (from_balance, to_balance) = balances;
        self.set_balance(from, from_balance);
        self.set_balance(to, to_balance);

        if log::log_enabled!(log::Level::Trace) {
            trace!("transfer {} from {} to {}", amount, from, to);
        }

        sink.emit(Event::Transfer {
            from: *from,
            to: *to,
            value: amount,
        });
    }
}

impl Ledger for MemoryLedger {
    fn total_supply(&self) -> u64 {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> u64 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn mint(
        &mut self,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::InvalidReceiver);
        }

        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.total_supply = supply;
        self.set_balance(to, balance);

        sink.emit(Event::Transfer {
            from: Address::zero(),
            to: *to,
            value: amount,
        });
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        let balances = self.check_transfer(from, to, amount)?;
        self.apply_transfer(from, to, amount, balances, sink);
        Ok(())
    }

    fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        if owner.is_zero() {
            return Err(LedgerError::InvalidApprover);
        }
        if spender.is_zero() {
            return Err(LedgerError::InvalidSpender);
        }

        self.allowances.insert((*owner, *spender), amount);
        sink.emit(Event::Approval {
            owner: *owner,
            spender: *spender,
            value: amount,
        });
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        let current = self.allowance(from, spender);
        if current < amount {
            return Err(LedgerError::InsufficientAllowance {
                need: amount,
                have: current,
            });
        }
        let balances = self.check_transfer(from, to, amount)?;

        // Spending an allowance does not emit Approval
        if current != INFINITE_ALLOWANCE {
            self.allowances.insert((*from, *spender), current - amount);
        }
        self.apply_transfer(from, to, amount, balances, sink);
        Ok(())
    }

    fn burn(
        &mut self,
        from: &Address,
        amount: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        if from.is_zero() {
            return Err(LedgerError::InvalidSender);
        }

        let have = self.balance_of(from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { need: amount, have });
        }

        self.set_balance(from, have - amount);
        // Sum of balances never exceeds supply
        self.total_supply -= amount;

        sink.emit(Event::Transfer {
            from: *from,
            to: Address::zero(),
            value: amount,
        });
        Ok(())
    }
}
