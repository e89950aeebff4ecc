//! steps - Terminal Step Indicator Library
//!
//! A three-step progress indicator with Previous/Next navigation and a
//! dismiss toggle, hosted in the terminal.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod cli;

pub use domain::*;
pub use application::*;
