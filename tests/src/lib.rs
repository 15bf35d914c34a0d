//! End-to-end tests for `ipfilter`, kept out of the library crates.
