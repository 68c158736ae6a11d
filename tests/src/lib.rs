//! # Shard Resolver Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for key normalization and mapping
//! └── src/integration/  # End-to-end CLI scenarios and distribution checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dbtool-tests
//! cargo bench -p dbtool-tests
//! ```

pub mod integration;
