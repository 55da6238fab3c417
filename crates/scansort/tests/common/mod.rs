//! Shared test utilities for scansort integration tests.

pub mod harness;

pub use harness::TestHarness;
