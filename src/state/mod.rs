//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Section, NavState, Transition, etc.)
//! - State error handling

mod error;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use navigation::{
    swipe_recognized, NavState, Section, Transition, TransitionStep, ENTRANCE_HOLD,
    EXIT_FROM_MAIN, EXIT_FROM_SECTION, MAX_SWIPE_DRIFT, MIN_SWIPE_DISTANCE,
};
pub use state_impl::State;
