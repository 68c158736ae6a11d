//! # Integration Tests
//!
//! `scenarios` drives the `dbtool` command surface end to end,
//! `distribution` checks how checksummed keys spread over tables.

pub mod distribution;
