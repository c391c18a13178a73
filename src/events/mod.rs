//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Analytics events: measurements reported to the optional sink
//! - Terminal events: user input and terminal interactions

pub mod analytics;
pub mod terminal;
