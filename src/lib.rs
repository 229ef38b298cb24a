//! # Introduction
//!
//! sortty animates comparison sorts in the terminal. Each algorithm runs as a
//! resumable engine that stops at every comparison, swap, write and "sorted"
//! mark, and a playback driver replays those steps one at a time onto the
//! visible array.
//!
//! ## Pipeline
//!
//! ```text
//! Array → Engine → Steps → Player → Highlight → TUI
//! ```
//!
//! 1. [`generate`] — produces the unsorted input array.
//! 2. [`engine`] — six sorting algorithms as lazy step producers, each over a
//!    private copy of the input.
//! 3. [`step`] — the step protocol shared by engines and driver.
//! 4. [`playback`] — the [`playback::Player`] state machine: start, pause,
//!    tick, reset, and the working array it owns.
//! 5. [`highlight`] — per-index classification derived from consumed steps.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! [`catalog`] lists the algorithms and [`config`] bounds the user-adjustable
//! settings.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod generate;
pub mod highlight;
pub mod playback;
pub mod step;
pub mod ui;
