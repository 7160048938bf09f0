//! Byte-level instruction boundary
//!
//! All instructions: `[opcode:1][params:N]`. Addresses are 32 raw bytes and
//! amounts are little-endian `u64`. Parameters must match the expected
//! length exactly.
//!
//! ## ERC20 Operations (0x01-0x15)
//!
//! - 0x01: Transfer - `[to:32][amount:8]`
//! - 0x02: Approve - `[spender:32][amount:8]`
//! - 0x03: TransferFrom - `[from:32][to:32][amount:8]`
//! - 0x05: Burn - `[amount:8]`
//! - 0x10: BalanceOf - `[account:32]` (query)
//! - 0x11: Allowance - `[owner:32][spender:32]` (query)
//! - 0x12: TotalSupply - `` (query)
//! - 0x13: Name - `` (query)
//! - 0x14: Symbol - `` (query)
//! - 0x15: Decimals - `` (query)
//!
//! ## Pausable Operations (0x20-0x21, 0x30)
//!
//! - 0x20: Pause - `` (owner-only)
//! - 0x21: Unpause - `` (owner-only)
//! - 0x30: Paused - `` (query)
//!
//! ## Ownable Operations (0x31-0x33)
//!
//! - 0x31: TransferOwnership - `[new_owner:32]` (owner-only, paused-only)
//! - 0x32: Owner - `` (query)
//! - 0x33: RenounceOwnership - `` (owner-only, paused-only)

use arigatai_common::crypto::{Address, ADDRESS_SIZE};

use crate::error::{GovernanceError, GovernanceResult};

const OP_TRANSFER: u8 = 0x01;
const OP_APPROVE: u8 = 0x02;
const OP_TRANSFER_FROM: u8 = 0x03;
const OP_BURN: u8 = 0x05;
const OP_BALANCE_OF: u8 = 0x10;
const OP_ALLOWANCE: u8 = 0x11;
const OP_TOTAL_SUPPLY: u8 = 0x12;
const OP_NAME: u8 = 0x13;
const OP_SYMBOL: u8 = 0x14;
const OP_DECIMALS: u8 = 0x15;

const OP_PAUSE: u8 = 0x20;
const OP_UNPAUSE: u8 = 0x21;
const OP_PAUSED: u8 = 0x30;

const OP_TRANSFER_OWNERSHIP: u8 = 0x31;
const OP_OWNER: u8 = 0x32;
const OP_RENOUNCE_OWNERSHIP: u8 = 0x33;

const AMOUNT_SIZE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Transfer { to: Address, amount: u64 },
    Approve { spender: Address, amount: u64 },
    TransferFrom { from: Address, to: Address, amount: u64 },
    Burn { amount: u64 },
    BalanceOf { account: Address },
    Allowance { owner: Address, spender: Address },
    TotalSupply,
    Name,
    Symbol,
    Decimals,
    Pause,
    Unpause,
    Paused,
    TransferOwnership { new_owner: Address },
    Owner,
    RenounceOwnership,
}

// Sequential reader over a parameter slice whose length was checked upfront
struct Params<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Params<'a> {
    fn expect(data: &'a [u8], expected: usize) -> GovernanceResult<Self> {
        if data.len() != expected {
            return Err(GovernanceError::InvalidParams {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, offset: 0 })
    }

    fn address(&mut self) -> Address {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + ADDRESS_SIZE]);
        self.offset += ADDRESS_SIZE;
        Address::new(bytes)
    }

    fn amount(&mut self) -> u64 {
        let mut bytes = [0u8; AMOUNT_SIZE];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + AMOUNT_SIZE]);
        self.offset += AMOUNT_SIZE;
        u64::from_le_bytes(bytes)
    }
}

impl Instruction {
    pub fn decode(input: &[u8]) -> GovernanceResult<Self> {
        let (&opcode, params) = input
            .split_first()
            .ok_or(GovernanceError::InvalidParams {
                expected: 1,
                got: 0,
            })?;

        let instruction = match opcode {
            OP_TRANSFER => {
                let mut p = Params::expect(params, ADDRESS_SIZE + AMOUNT_SIZE)?;
                Self::Transfer {
                    to: p.address(),
                    amount: p.amount(),
                }
            }
            OP_APPROVE => {
                let mut p = Params::expect(params, ADDRESS_SIZE + AMOUNT_SIZE)?;
                Self::Approve {
                    spender: p.address(),
                    amount: p.amount(),
                }
            }
            OP_TRANSFER_FROM => {
                let mut p = Params::expect(params, 2 * ADDRESS_SIZE + AMOUNT_SIZE)?;
                Self::TransferFrom {
                    from: p.address(),
                    to: p.address(),
                    amount: p.amount(),
                }
            }
            OP_BURN => {
                let mut p = Params::expect(params, AMOUNT_SIZE)?;
                Self::Burn { amount: p.amount() }
            }
            OP_BALANCE_OF => {
                let mut p = Params::expect(params, ADDRESS_SIZE)?;
                Self::BalanceOf {
                    account: p.address(),
                }
            }
            OP_ALLOWANCE => {
                let mut p = Params::expect(params, 2 * ADDRESS_SIZE)?;
                Self::Allowance {
                    owner: p.address(),
                    spender: p.address(),
                }
            }
            OP_TRANSFER_OWNERSHIP => {
                let mut p = Params::expect(params, ADDRESS_SIZE)?;
                Self::TransferOwnership {
                    new_owner: p.address(),
                }
            }
            OP_TOTAL_SUPPLY | OP_NAME | OP_SYMBOL | OP_DECIMALS | OP_PAUSE | OP_UNPAUSE
            | OP_PAUSED | OP_OWNER | OP_RENOUNCE_OWNERSHIP => {
                Params::expect(params, 0)?;
                match opcode {
                    OP_TOTAL_SUPPLY => Self::TotalSupply,
                    OP_NAME => Self::Name,
                    OP_SYMBOL => Self::Symbol,
                    OP_DECIMALS => Self::Decimals,
                    OP_PAUSE => Self::Pause,
                    OP_UNPAUSE => Self::Unpause,
                    OP_PAUSED => Self::Paused,
                    OP_OWNER => Self::Owner,
                    _ => Self::RenounceOwnership,
                }
            }
            _ => return Err(GovernanceError::InvalidInstruction(opcode)),
        };

        Ok(instruction)
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Self::Transfer { .. } => OP_TRANSFER,
            Self::Approve { .. } => OP_APPROVE,
            Self::TransferFrom { .. } => OP_TRANSFER_FROM,
            Self::Burn { .. } => OP_BURN,
            Self::BalanceOf { .. } => OP_BALANCE_OF,
            Self::Allowance { .. } => OP_ALLOWANCE,
            Self::TotalSupply => OP_TOTAL_SUPPLY,
            Self::Name => OP_NAME,
            Self::Symbol => OP_SYMBOL,
            Self::Decimals => OP_DECIMALS,
            Self::Pause => OP_PAUSE,
            Self::Unpause => OP_UNPAUSE,
            Self::Paused => OP_PAUSED,
            Self::TransferOwnership { .. } => OP_TRANSFER_OWNERSHIP,
            Self::Owner => OP_OWNER,
            Self::RenounceOwnership => OP_RENOUNCE_OWNERSHIP,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.opcode()];
        match self {
            Self::Transfer { to, amount } => {
                out.extend_from_slice(to.as_bytes());
                out.extend_from_slice(&amount.to_le_bytes());
            }
            Self::Approve { spender, amount } => {
                out.extend_from_slice(spender.as_bytes());
                out.extend_from_slice(&amount.to_le_bytes());
            }
            Self::TransferFrom { from, to, amount } => {
                out.extend_from_slice(from.as_bytes());
                out.extend_from_slice(to.as_bytes());
                out.extend_from_slice(&amount.to_le_bytes());
            }
            Self::Burn { amount } => out.extend_from_slice(&amount.to_le_bytes()),
            Self::BalanceOf { account } => out.extend_from_slice(account.as_bytes()),
            Self::Allowance { owner, spender } => {
                out.extend_from_slice(owner.as_bytes());
                out.extend_from_slice(spender.as_bytes());
            }
            Self::TransferOwnership { new_owner } => out.extend_from_slice(new_owner.as_bytes()),
            Self::TotalSupply
            | Self::Name
            | Self::Symbol
            | Self::Decimals
            | Self::Pause
            | Self::Unpause
            | Self::Paused
            | Self::Owner
            | Self::RenounceOwnership => {}
        }
        out
    }

    /// Whether the instruction only reads state
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::BalanceOf { .. }
                | Self::Allowance { .. }
                | Self::TotalSupply
                | Self::Name
                | Self::Symbol
                | Self::Decimals
                | Self::Paused
                | Self::Owner
        )
    }
}

/// Return data of an executed instruction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    None,
    Amount(u64),
    Bool(bool),
    Decimals(u8),
    Address(Address),
    Text(String),
}

impl Output {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::None => Vec::new(),
            Self::Amount(value) => value.to_le_bytes().to_vec(),
            Self::Bool(value) => vec![u8::from(*value)],
            Self::Decimals(value) => vec![*value],
            Self::Address(address) => address.as_bytes().to_vec(),
            Self::Text(text) => text.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_transfer() {
        let to = Address::new([5u8; 32]);
        let mut input = vec![OP_TRANSFER];
        input.extend_from_slice(to.as_bytes());
        input.extend_from_slice(&1234u64.to_le_bytes());

        assert_eq!(
            Instruction::decode(&input).unwrap(),
            Instruction::Transfer { to, amount: 1234 }
        );
    }

    #[test]
    fn test_transfer_from_keeps_parameter_order() {
        let instruction = Instruction::TransferFrom {
            from: Address::new([1u8; 32]),
            to: Address::new([2u8; 32]),
            amount: 9,
        };
        let encoded = instruction.encode();
        assert_eq!(encoded.len(), 1 + 32 + 32 + 8);
        assert_eq!(encoded[1], 1);
        assert_eq!(encoded[33], 2);
        assert_eq!(Instruction::decode(&encoded).unwrap(), instruction);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(
            Instruction::decode(&[]),
            Err(GovernanceError::InvalidParams {
                expected: 1,
                got: 0
            })
        ));
        assert!(matches!(
            Instruction::decode(&[0x7f]),
            Err(GovernanceError::InvalidInstruction(0x7f))
        ));
        assert!(matches!(
            Instruction::decode(&[OP_TRANSFER_OWNERSHIP, 1, 2, 3]),
            Err(GovernanceError::InvalidParams {
                expected: 32,
                got: 3
            })
        ));
        // Trailing bytes on a no-param instruction
        assert!(matches!(
            Instruction::decode(&[OP_PAUSE, 0]),
            Err(GovernanceError::InvalidParams {
                expected: 0,
                got: 1
            })
        ));
    }

    #[test]
    fn test_no_param_opcodes() {
        let cases = [
            (OP_TOTAL_SUPPLY, Instruction::TotalSupply),
            (OP_NAME, Instruction::Name),
            (OP_SYMBOL, Instruction::Symbol),
            (OP_DECIMALS, Instruction::Decimals),
            (OP_PAUSE, Instruction::Pause),
            (OP_UNPAUSE, Instruction::Unpause),
            (OP_PAUSED, Instruction::Paused),
            (OP_OWNER, Instruction::Owner),
            (OP_RENOUNCE_OWNERSHIP, Instruction::RenounceOwnership),
        ];
        for (opcode, expected) in cases {
            let decoded = Instruction::decode(&[opcode]).unwrap();
            assert_eq!(decoded, expected);
            assert_eq!(decoded.opcode(), opcode);
        }
    }

    #[test]
    fn test_query_classification() {
        assert!(Instruction::Owner.is_query());
        assert!(Instruction::Paused.is_query());
        assert!(!Instruction::Pause.is_query());
        assert!(!Instruction::Burn { amount: 1 }.is_query());
    }

    #[test]
    fn test_output_encoding() {
        assert!(Output::None.encode().is_empty());
        assert_eq!(Output::Bool(true).encode(), vec![1]);
        assert_eq!(Output::Amount(1).encode(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Output::Text("ARIG".into()).encode(), b"ARIG".to_vec());
        assert_eq!(Output::Address(Address::zero()).encode(), vec![0u8; 32]);
    }
}
