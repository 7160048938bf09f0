use rand::Rng;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use crate::error::AddressError;

pub const ADDRESS_SIZE: usize = 32; // 32 bytes / 256 bits

/// Opaque account identifier.
///
/// Nothing but equality is interpreted. The all-zero address is the
/// sentinel for "no principal" at the external boundary.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash, Debug)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; ADDRESS_SIZE])
    }

    /// Generate a random, non-zero address
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let mut bytes = [0u8; ADDRESS_SIZE];
            rng.fill(&mut bytes);
            let address = Address::new(bytes);
            if !address.is_zero() {
                return address;
            }
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; ADDRESS_SIZE] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;
        Ok(Address::new(bytes))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Map the boundary representation back to an optional principal
    pub fn into_option(self) -> Option<Address> {
        if self.is_zero() {
            None
        } else {
            Some(self)
        }
    }

    /// Map an optional principal to its boundary representation
    pub fn from_option(address: Option<Address>) -> Address {
        address.unwrap_or_else(Address::zero)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| AddressError::InvalidHex)?;
        Address::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address::new(bytes)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() != ADDRESS_SIZE * 2 {
            return Err(SerdeError::custom("Invalid hex length"));
        }

        let decoded_hex = hex::decode(hex).map_err(SerdeError::custom)?;
        let bytes: [u8; ADDRESS_SIZE] = decoded_hex
            .try_into()
            .map_err(|_| SerdeError::custom("Could not transform hex to bytes array for Address"))?;
        Ok(Address::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_address_is_sentinel() {
        assert!(Address::zero().is_zero());
        assert_eq!(Address::zero().into_option(), None);
        assert_eq!(Address::from_option(None), Address::zero());
    }

    #[test]
    fn test_random_address_is_never_zero() {
        for _ in 0..16 {
            assert!(!Address::random().is_zero());
        }
    }

    #[test]
    fn test_hex_parsing() {
        let address = Address::new([0xab; ADDRESS_SIZE]);
        let parsed: Address = address.to_hex().parse().unwrap();
        assert_eq!(parsed, address);

        let prefixed: Address = format!("0x{}", address).parse().unwrap();
        assert_eq!(prefixed, address);

        assert_eq!("zz".parse::<Address>(), Err(AddressError::InvalidHex));
        assert_eq!("abcd".parse::<Address>(), Err(AddressError::InvalidLength(2)));
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let address = Address::new([1u8; ADDRESS_SIZE]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(ADDRESS_SIZE)));

        let short = serde_json::from_str::<Address>("\"0101\"");
        assert!(short.is_err());
    }
}
