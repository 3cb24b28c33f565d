//! Terminal UI: rendering, theme, and mouse interactivity.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

pub use interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
