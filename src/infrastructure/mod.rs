//! Infrastructure layer providing system-level services.
//!
//! Currently this is file-based logging; the terminal owns stdout while the
//! widget is running, so diagnostics go to a log file instead.

pub mod logging;

pub use logging::*;
