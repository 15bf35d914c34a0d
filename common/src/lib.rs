//! Shared building blocks for `ipfilter`: the [`network::address::Address`]
//! value type, the text splitter and the run configuration.

pub mod config;
pub mod network;
pub mod utils;
