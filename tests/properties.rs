//! Property tests for Segee.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "matches a brute-force model".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/parser.rs"]
mod parser;

#[path = "properties/segment_tree.rs"]
mod segment_tree;

#[path = "properties/session.rs"]
mod session;
