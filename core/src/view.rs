//! # Output Views
//!
//! Each view is one pass over the already sorted addresses. Views never
//! see each other's output.

use std::fmt;

use ipfilter_common::network::address::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every address.
    All,
    /// Addresses whose leading octets equal these values.
    Prefix(Vec<u8>),
    /// Addresses holding this value in any octet.
    Any(u8),
}

impl View {
    pub fn matches(&self, address: &Address) -> bool {
        match self {
            View::All => true,
            View::Prefix(octets) => address.matches_prefix(octets),
            View::Any(value) => address.matches_any(*value),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::All => write!(f, "all"),
            View::Prefix(octets) => {
                let joined = octets
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<String>>()
                    .join(".");
                write!(f, "prefix {joined}")
            }
            View::Any(value) => write!(f, "any {value}"),
        }
    }
}

/// The views printed by `ipfilter`, in output order: everything, first
/// octet 1, first two octets 46.70, then any octet 46.
pub fn default_views() -> Vec<View> {
    vec![
        View::All,
        View::Prefix(vec![1]),
        View::Prefix(vec![46, 70]),
        View::Any(46),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
