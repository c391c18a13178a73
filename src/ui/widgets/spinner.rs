//! Transition activity spinner.

use crate::state::State;

/// Frames cycled by the tick events while a view switch runs.
///
pub const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Return the frame for the current spinner index.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[state.get_spinner_index() % FRAMES.len()]
}
