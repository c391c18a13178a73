//! Navigation-related state types.
//!
//! This module contains the section enumeration, the derived navigation
//! state, and the in-flight transition record with its timing contract.

use std::time::{Duration, Instant};

/// Exit animation length when leaving the main quadrant grid.
///
pub const EXIT_FROM_MAIN: Duration = Duration::from_millis(400);

/// Exit animation length when leaving a section detail view.
///
pub const EXIT_FROM_SECTION: Duration = Duration::from_millis(300);

/// Hold between the container swap and the focus/announcement handoff,
/// so the entrance animation is observed before focus moves.
///
pub const ENTRANCE_HOLD: Duration = Duration::from_millis(120);

/// Minimum horizontal displacement for a back-swipe gesture.
///
pub const MIN_SWIPE_DISTANCE: f32 = 100.0;

/// Maximum vertical drift allowed for a back-swipe gesture.
///
pub const MAX_SWIPE_DRIFT: f32 = 50.0;

/// Specifying the four top-level portfolio sections.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Section {
    Standup,
    Branding,
    Writing,
    Corporates,
}

impl Section {
    /// Fixed display order, matching the digit hotkeys 1-4.
    ///
    pub const ALL: [Section; 4] = [
        Section::Standup,
        Section::Branding,
        Section::Writing,
        Section::Corporates,
    ];

    /// Return the human-readable section name.
    ///
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Standup => "Stand-up Comedy",
            Section::Branding => "Branding",
            Section::Writing => "Writing",
            Section::Corporates => "Corporate Services",
        }
    }

    /// Return the short identifier used in container ids.
    ///
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Standup => "standup",
            Section::Branding => "branding",
            Section::Writing => "writing",
            Section::Corporates => "corporates",
        }
    }

    /// Return the id of the section's detail container.
    ///
    pub fn container_id(&self) -> String {
        format!("{}-sub", self.slug())
    }

    /// Return the id of the section's first focusable element.
    ///
    pub fn heading_id(&self) -> String {
        format!("{}-heading", self.slug())
    }

    /// Return the id of the section's tile on the main grid.
    ///
    pub fn tile_id(&self) -> String {
        format!("quadrant-{}", self.slug())
    }

    /// Look up a section by its digit hotkey.
    ///
    pub fn from_digit(digit: char) -> Option<Section> {
        match digit {
            '1' => Some(Section::Standup),
            '2' => Some(Section::Branding),
            '3' => Some(Section::Writing),
            '4' => Some(Section::Corporates),
            _ => None,
        }
    }
}

/// Specifying the navigation state machine states.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavState {
    Main,
    Transitioning,
    Section(Section),
}

/// Specifying the steps of an in-flight view switch. The container swap
/// happens on the `Exit` to `Enter` boundary; focus transfer and the
/// pending announcement happen when `Enter` completes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionStep {
    Exit,
    Enter,
}

/// Record of a single in-flight view switch.
///
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: Option<Section>,
    pub to: Option<Section>,
    pub step: TransitionStep,
    pub step_started: Instant,
    pub requested_at: Instant,
    pub announcement: Option<String>,
}

impl Transition {
    /// Return a new transition in its exit step.
    ///
    pub fn new(
        from: Option<Section>,
        to: Option<Section>,
        announcement: Option<String>,
        now: Instant,
    ) -> Self {
        Transition {
            from,
            to,
            step: TransitionStep::Exit,
            step_started: now,
            requested_at: now,
            announcement,
        }
    }

    /// Return how long the exit step runs before the container swap.
    ///
    pub fn exit_duration(&self, reduced_motion: bool) -> Duration {
        if reduced_motion {
            return Duration::ZERO;
        }
        match self.from {
            None => EXIT_FROM_MAIN,
            Some(_) => EXIT_FROM_SECTION,
        }
    }

    /// Return the elapsed fraction of the current step, for easing.
    ///
    pub fn step_progress(&self, now: Instant, reduced_motion: bool) -> f32 {
        let length = match self.step {
            TransitionStep::Exit => self.exit_duration(reduced_motion),
            TransitionStep::Enter => ENTRANCE_HOLD,
        };
        if length.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.step_started);
        (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0)
    }
}

/// Return whether a drag gesture qualifies as a back-swipe.
///
pub fn swipe_recognized(delta_x: f32, delta_y: f32) -> bool {
    delta_x > MIN_SWIPE_DISTANCE && delta_y.abs() < MAX_SWIPE_DRIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_matches_digits() {
        assert_eq!(Section::from_digit('1'), Some(Section::Standup));
        assert_eq!(Section::from_digit('2'), Some(Section::Branding));
        assert_eq!(Section::from_digit('3'), Some(Section::Writing));
        assert_eq!(Section::from_digit('4'), Some(Section::Corporates));
        assert_eq!(Section::from_digit('5'), None);
        assert_eq!(Section::from_digit('0'), None);
    }

    #[test]
    fn test_section_display_names() {
        assert_eq!(Section::Standup.display_name(), "Stand-up Comedy");
        assert_eq!(Section::Branding.display_name(), "Branding");
        assert_eq!(Section::Writing.display_name(), "Writing");
        assert_eq!(Section::Corporates.display_name(), "Corporate Services");
    }

    #[test]
    fn test_section_container_ids() {
        assert_eq!(Section::Standup.container_id(), "standup-sub");
        assert_eq!(Section::Corporates.container_id(), "corporates-sub");
    }

    #[test]
    fn test_nav_state() {
        assert_eq!(NavState::Main, NavState::Main);
        assert_ne!(NavState::Main, NavState::Transitioning);
        assert_eq!(
            NavState::Section(Section::Writing),
            NavState::Section(Section::Writing)
        );
        assert_ne!(
            NavState::Section(Section::Writing),
            NavState::Section(Section::Branding)
        );
    }

    #[test]
    fn test_exit_duration_depends_on_origin() {
        let now = Instant::now();
        let outbound = Transition::new(None, Some(Section::Branding), None, now);
        assert_eq!(outbound.exit_duration(false), EXIT_FROM_MAIN);

        let inbound = Transition::new(Some(Section::Branding), None, None, now);
        assert_eq!(inbound.exit_duration(false), EXIT_FROM_SECTION);

        assert_eq!(inbound.exit_duration(true), Duration::ZERO);
    }

    #[test]
    fn test_swipe_recognition_thresholds() {
        assert!(swipe_recognized(150.0, 10.0));
        assert!(!swipe_recognized(150.0, 80.0));
        assert!(!swipe_recognized(50.0, 10.0));
        // Left swipes never qualify.
        assert!(!swipe_recognized(-150.0, 10.0));
    }
}
