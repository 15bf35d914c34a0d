//! Ingestion, sorting and filtered output of IPv4 address lists.
//!
//! [`pipeline::run`] is the entry point used by the binary; [`view`] holds
//! the filters applied to the sorted collection.

pub mod pipeline;
pub mod view;
