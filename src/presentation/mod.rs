//! Presentation layer handling terminal UI and user input.
//!
//! This module paints the step widget's view description with ratatui and
//! maps keyboard and mouse events to widget actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
