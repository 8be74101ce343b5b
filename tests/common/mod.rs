//! Common test utilities for Segee integration tests.
//!
//! - `TestEnv`: isolated HOME/config directory plus helpers that run the
//!   `segee` binary with scripted stdin

pub mod env;

pub use env::*;
