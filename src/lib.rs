//! Segee - interactive segment tree console
//!
//! Segee keeps a fixed 16-element sum, min or max segment tree and redraws
//! it as a pyramid after every command, next to a scrolling command log.

pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::{AggregateStructure, SegmentTree, Value, Variant, TREE_SIZE};
pub use error::{CommandError, SegeeError, SegeeResult, StructureError};
pub use parser::{parse, Command};
pub use session::{run, Console, Outcome, RunOptions, Session};
