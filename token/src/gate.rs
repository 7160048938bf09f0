//! Governance gate
//!
//! Composes the ownership registry and the pause switch in front of the
//! ledger. Every mutating call follows the same order:
//!
//! 1. authorization (owner-restricted calls only), `Unauthorized` wins over
//!    every other failure
//! 2. pause-state precondition
//! 3. argument validation
//! 4. effect
//!
//! Events produced by a call are staged and only reach the sink when the
//! whole call succeeds, so a rejected call has no observable effect.
//!
//! # Pattern Interactions
//!
//! | Operation | Requires owner | Requires state |
//! |---|---|---|
//! | `pause` | yes | Active |
//! | `unpause` | yes | Paused |
//! | `transfer_ownership` | yes | Paused |
//! | `renounce_ownership` | yes | Paused |
//! | `transfer` / `transfer_from` / `burn` | no | Active |
//! | `approve` and all queries | no | any |
//!
//! Once ownership is renounced no caller passes step 1 again, so the
//! pause flag is frozen at whatever value it had.

use arigatai_common::{
    config::{TokenConfig, TokenMetadata},
    crypto::Address,
    event::{Event, EventLog, EventSink},
};
use log::{debug, info};

use crate::{
    error::{GovernanceError, GovernanceResult},
    instruction::{Instruction, Output},
    ledger::{Ledger, MemoryLedger},
    ownership::OwnershipRegistry,
    pause::PauseSwitch,
};

/// Operational half of the composite state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationalState {
    Active,
    Paused,
}

/// Ownership half of the composite state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnershipState {
    Owned(Address),
    Ownerless,
}

/// Snapshot of the governance state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateState {
    pub operational: OperationalState,
    pub ownership: OwnershipState,
}

pub struct GovernanceGate<L: Ledger = MemoryLedger, S: EventSink = EventLog> {
    metadata: TokenMetadata,
    ownership: OwnershipRegistry,
    pause: PauseSwitch,
    ledger: L,
    sink: S,
}

impl GovernanceGate {
    /// Deploy with an empty in-memory ledger and event log
    pub fn deploy(deployer: &Address, config: TokenConfig) -> GovernanceResult<Self> {
        Self::deploy_with(deployer, config, MemoryLedger::new(), EventLog::new())
    }
}

impl<L: Ledger> GovernanceGate<L, EventLog> {
    pub fn events(&self) -> &EventLog {
        &self.sink
    }
}

impl<L: Ledger, S: EventSink> GovernanceGate<L, S> {
    /// Deploy over the given ledger and sink
    ///
    /// The initial owner is `config.initial_owner`, or the deployer when
    /// unset. The initial supply, if any, is minted to that owner.
    pub fn deploy_with(
        deployer: &Address,
        config: TokenConfig,
        mut ledger: L,
        mut sink: S,
    ) -> GovernanceResult<Self> {
        config.validate()?;

        let initial_owner = config.resolve_owner(deployer);
        if initial_owner.is_zero() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("deployment rejected: zero initial owner");
            }
            return Err(GovernanceError::InvalidOwner(initial_owner));
        }

        let mut staged: Vec<Event> = Vec::new();
        let ownership = OwnershipRegistry::new(initial_owner, &mut staged);
        if config.initial_supply > 0 {
            ledger.mint(&initial_owner, config.initial_supply, &mut staged)?;
        }
        for event in staged {
            sink.emit(event);
        }

        if log::log_enabled!(log::Level::Info) {
            info!(
                "{} ({}) deployed by {}, owner {}, supply {}",
                config.name,
                config.symbol,
                deployer,
                initial_owner,
                ledger.total_supply()
            );
        }

        Ok(Self {
            metadata: config.metadata(),
            ownership,
            pause: PauseSwitch::new(),
            ledger,
            sink,
        })
    }

    // ===== Queries =====

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Current owner, zero address when ownerless
    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    pub fn current_owner(&self) -> Option<Address> {
        self.ownership.current_owner()
    }

    pub fn paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn state(&self) -> GateState {
        GateState {
            operational: if self.pause.is_paused() {
                OperationalState::Paused
            } else {
                OperationalState::Active
            },
            ownership: match self.ownership.current_owner() {
                Some(owner) => OwnershipState::Owned(owner),
                None => OwnershipState::Ownerless,
            },
        }
    }

    pub fn total_supply(&self) -> u64 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> u64 {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u64 {
        self.ledger.allowance(owner, spender)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ===== Guards =====

    fn require_owner(&self, caller: &Address) -> GovernanceResult<()> {
        if !self.ownership.is_owner(caller) {
            if log::log_enabled!(log::Level::Debug) {
                debug!("unauthorized: {} is not the owner", caller);
            }
            return Err(GovernanceError::Unauthorized(*caller));
        }
        Ok(())
    }

    fn require_paused(&self) -> GovernanceResult<()> {
        if !self.pause.is_paused() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("rejected: contract must be paused");
            }
            return Err(GovernanceError::ExpectedPaused);
        }
        Ok(())
    }

    fn require_not_paused(&self) -> GovernanceResult<()> {
        if self.pause.is_paused() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("rejected: contract is paused");
            }
            return Err(GovernanceError::ContractPaused);
        }
        Ok(())
    }

    // Run `op` against a staging buffer, commit its events only on success
    fn staged<T, F>(&mut self, op: F) -> GovernanceResult<T>
    where
        F: FnOnce(&mut Self, &mut Vec<Event>) -> GovernanceResult<T>,
    {
        let mut staged: Vec<Event> = Vec::new();
        let value = op(self, &mut staged)?;
        for event in staged {
            self.sink.emit(event);
        }
        Ok(value)
    }

    // ===== Pausable =====

    pub fn pause(&mut self, caller: &Address) -> GovernanceResult<()> {
        self.require_owner(caller)?;
        if self.pause.is_paused() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("rejected: {} tried to pause, already paused", caller);
            }
            return Err(GovernanceError::RedundantStateTransition { paused: true });
        }

        self.staged(|gate, events| {
            gate.pause.set_paused(true, *caller, events);
            Ok(())
        })
    }

    pub fn unpause(&mut self, caller: &Address) -> GovernanceResult<()> {
        self.require_owner(caller)?;
        if !self.pause.is_paused() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("rejected: {} tried to unpause, already active", caller);
            }
            return Err(GovernanceError::RedundantStateTransition { paused: false });
        }

        self.staged(|gate, events| {
            gate.pause.set_paused(false, *caller, events);
            Ok(())
        })
    }

    // ===== Ownable =====

    /// Hand administrative control to `new_owner`; only while paused
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: &Address,
    ) -> GovernanceResult<()> {
        self.require_owner(caller)?;
        self.require_paused()?;
        if new_owner.is_zero() {
            if log::log_enabled!(log::Level::Debug) {
                debug!("rejected: ownership transfer to the zero address");
            }
            return Err(GovernanceError::InvalidOwner(*new_owner));
        }

        self.staged(|gate, events| {
            gate.ownership.set_owner(Some(*new_owner), events);
            Ok(())
        })
    }

    /// Leave the token without an owner; only while paused, irreversible
    pub fn renounce_ownership(&mut self, caller: &Address) -> GovernanceResult<()> {
        self.require_owner(caller)?;
        self.require_paused()?;

        self.staged(|gate, events| {
            gate.ownership.set_owner(None, events);
            Ok(())
        })?;

        if log::log_enabled!(log::Level::Info) {
            info!("ownership renounced by {}, pause state frozen", caller);
        }
        Ok(())
    }

    // ===== ERC20 =====

    pub fn transfer(&mut self, caller: &Address, to: &Address, amount: u64) -> GovernanceResult<()> {
        self.require_not_paused()?;
        self.staged(|gate, events| {
            gate.ledger
                .transfer(caller, to, amount, events)
                .map_err(GovernanceError::from)
        })
    }

    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
    ) -> GovernanceResult<()> {
        self.require_not_paused()?;
        self.staged(|gate, events| {
            gate.ledger
                .transfer_from(caller, from, to, amount, events)
                .map_err(GovernanceError::from)
        })
    }

    pub fn burn(&mut self, caller: &Address, amount: u64) -> GovernanceResult<()> {
        self.require_not_paused()?;
        self.staged(|gate, events| {
            gate.ledger
                .burn(caller, amount, events)
                .map_err(GovernanceError::from)
        })
    }

    /// Allowances do not move balances and stay available while paused
    pub fn approve(
        &mut self,
        caller: &Address,
        spender: &Address,
        amount: u64,
    ) -> GovernanceResult<()> {
        self.staged(|gate, events| {
            gate.ledger
                .approve(caller, spender, amount, events)
                .map_err(GovernanceError::from)
        })
    }

    // ===== Instruction boundary =====

    /// Decode and run a raw `[opcode:1][params:N]` instruction
    pub fn execute(&mut self, caller: &Address, input: &[u8]) -> GovernanceResult<Output> {
        let instruction = Instruction::decode(input)?;
        self.dispatch(caller, instruction)
    }

    /// Run a decoded instruction; queries take the read-only path
    pub fn dispatch(
        &mut self,
        caller: &Address,
        instruction: Instruction,
    ) -> GovernanceResult<Output> {
        if instruction.is_query() {
            return self.query(&instruction);
        }

        match instruction {
            Instruction::Transfer { to, amount } => self.transfer(caller, &to, amount)?,
            Instruction::Approve { spender, amount } => self.approve(caller, &spender, amount)?,
            Instruction::TransferFrom { from, to, amount } => {
                self.transfer_from(caller, &from, &to, amount)?
            }
            Instruction::Burn { amount } => self.burn(caller, amount)?,
            Instruction::Pause => self.pause(caller)?,
            Instruction::Unpause => self.unpause(caller)?,
            Instruction::TransferOwnership { new_owner } => {
                self.transfer_ownership(caller, &new_owner)?
            }
            Instruction::RenounceOwnership => self.renounce_ownership(caller)?,
            _ => return Err(GovernanceError::InvalidInstruction(instruction.opcode())),
        }
        Ok(Output::None)
    }

    /// Answer a read-only instruction without a caller or mutable access
    ///
    /// Mutating instructions are rejected with `InvalidInstruction`.
    pub fn query(&self, instruction: &Instruction) -> GovernanceResult<Output> {
        let metadata = self.metadata();
        let output = match instruction {
            Instruction::BalanceOf { account } => Output::Amount(self.balance_of(account)),
            Instruction::Allowance { owner, spender } => {
                Output::Amount(self.allowance(owner, spender))
            }
            Instruction::TotalSupply => Output::Amount(self.total_supply()),
            Instruction::Name => Output::Text(metadata.name.clone()),
            Instruction::Symbol => Output::Text(metadata.symbol.clone()),
            Instruction::Decimals => Output::Decimals(metadata.decimals),
            Instruction::Paused => Output::Bool(self.paused()),
            Instruction::Owner => Output::Address(self.owner()),
            _ => return Err(GovernanceError::InvalidInstruction(instruction.opcode())),
        };
        Ok(output)
    }
}
