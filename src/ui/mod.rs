//! Terminal presentation: capability detection, theming, and the views that
//! make up a session frame.

pub mod compositor;
pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use compositor::{compose, Frame};
pub use context::UiContext;
