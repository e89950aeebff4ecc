//! Application layer hosting the step widget.
//!
//! This module sits between the domain widget and the terminal presentation,
//! tracking host state such as the current mode and pending repaints.

pub mod state;

pub use state::*;
