//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: The working array as a bar chart, colored by highlight state
//! - [`controls`]: Algorithm picker, description, speed/size readout and legend
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that reads from the
//! [`Player`](crate::playback::Player) and never mutates it.

pub mod bars;
pub mod controls;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use controls::render_controls_pane;
pub use status::render_status_bar;
