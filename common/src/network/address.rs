//! # IPv4 Address Model
//!
//! A four-octet IPv4 address parsed from dotted-decimal text.
//!
//! Addresses order by their big-endian 32-bit value, so `222.0.0.1` sorts
//! above `1.255.255.255`. Two predicates drive the filtered views:
//! * [`Address::matches_prefix`] compares a leading run of octets.
//! * [`Address::matches_any`] looks for a value in any position.

use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

use crate::utils::split::split;

pub const OCTET_COUNT: usize = 4;

/// Why a piece of address text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("not a decimal number")]
    NotDecimal,
    #[error("value exceeds 255")]
    OutOfRange,
    #[error("expected 4 dot-separated fields, found {0}")]
    FieldCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A field is not an integer in `0..=255`, or the address does not
    /// have exactly four fields.
    #[error("malformed octet in {text:?}: {fault}")]
    MalformedOctet { text: String, fault: Fault },
}

/// An IPv4 address held as four octets, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    octets: [u8; OCTET_COUNT],
}

impl Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// Builds an address from exactly four decimal fields.
    ///
    /// Fields must be non-empty runs of ASCII digits. Leading zeros are
    /// accepted (`"007"` is 7); signs, whitespace and trailing text are not.
    pub fn parse<S: AsRef<str>>(fields: &[S]) -> Result<Self, AddressError> {
        if fields.len() != OCTET_COUNT {
            let text = fields
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(".");
            return Err(AddressError::MalformedOctet {
                text,
                fault: Fault::FieldCount(fields.len()),
            });
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (slot, field) in octets.iter_mut().zip(fields) {
            *slot = parse_octet(field.as_ref())?;
        }

        Ok(Self { octets })
    }

    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// The address as a big-endian 32-bit integer.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// True when every supplied value equals the octet at the same position,
    /// starting from the first octet.
    ///
    /// An empty prefix matches everything. Values past the fourth have no
    /// octet to compare against and are ignored.
    pub fn matches_prefix(&self, prefix: &[u8]) -> bool {
        self.octets
            .iter()
            .zip(prefix)
            .all(|(octet, expected)| octet == expected)
    }

    /// True when `value` equals any of the four octets.
    pub fn matches_any(&self, value: u8) -> bool {
        self.octets.contains(&value)
    }

    /// Dotted-decimal text without leading zeros.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn parse_octet(field: &str) -> Result<u8, AddressError> {
    let malformed = |fault| AddressError::MalformedOctet {
        text: field.to_string(),
        fault,
    };

    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(Fault::NotDecimal));
    }

    // Only digits are left, so the sole failure is overflow.
    field.parse::<u8>().map_err(|_| malformed(Fault::OutOfRange))
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u32().cmp(&other.to_u32())
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&split(s, '.'))
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            octets: addr.octets(),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self {
            octets: value.to_be_bytes(),
        }
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.to_u32()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
