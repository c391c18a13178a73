use crate::app::AnalyticsEventSender;
use crate::effects::AmbientEffects;
use crate::events::analytics::Event as AnalyticsEvent;
use crate::page::catalog;
use crate::page::Page;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::layout::Rect;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use super::navigation::{
    swipe_recognized, NavState, Section, Transition, TransitionStep,
};

/// Cap on retained log entries for the debug overlay.
///
const MAX_DEBUG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
pub struct State {
    analytics_sender: Option<AnalyticsEventSender>,
    page: Page,
    current_section: Option<Section>,
    transition: Option<Transition>,
    touch_origin: Option<(f32, f32)>,
    navigation_enabled: bool,
    initialized: bool,
    reduced_motion: bool,
    terminal_size: Rect,
    spinner_index: usize,
    grid_focus_index: usize,
    item_focus_index: usize,
    tile_areas: Vec<(Section, Rect)>,    // written by the renderer for hit tests
    item_areas: Vec<Rect>,               // rows of the visible section's items
    back_area: Option<Rect>,
    contact_area: Option<Rect>,
    modal_area: Option<Rect>,
    modal_close_area: Option<Rect>,
    modal_link_areas: Vec<Rect>,
    effects: AmbientEffects,
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>,
    log_receiver: Option<Receiver<String>>,
    theme: crate::ui::Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            analytics_sender: None,
            page: Page::standard(),
            current_section: None,
            transition: None,
            touch_origin: None,
            navigation_enabled: true,
            initialized: false,
            reduced_motion: false,
            terminal_size: Rect::default(),
            spinner_index: 0,
            grid_focus_index: 0,
            item_focus_index: 0,
            tile_areas: vec![],
            item_areas: vec![],
            back_area: None,
            contact_area: None,
            modal_area: None,
            modal_close_area: None,
            modal_link_areas: vec![],
            effects: AmbientEffects::new(),
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            log_receiver: None,
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        analytics_sender: Option<AnalyticsEventSender>,
        reduced_motion: bool,
        theme: crate::ui::Theme,
    ) -> Self {
        State {
            analytics_sender,
            reduced_motion,
            theme,
            ..State::default()
        }
    }

    /// Discover the page containers and prime the ambient effects.
    /// Idempotent across repeated calls. Navigation is disabled with a
    /// warning when the main container is absent.
    ///
    pub fn initialize(&mut self) -> &mut Self {
        if self.initialized {
            debug!("State already initialized, skipping setup");
            return self;
        }
        if !self.page.has_main() {
            warn!("Main quadrant container not found, navigation disabled");
            self.navigation_enabled = false;
        }
        self.effects.recompute();
        self.page.focus_first_tile();
        self.initialized = true;
        self
    }

    /// Replace the page registry. Intended for degraded setups and
    /// tests; must be called before `initialize`.
    ///
    #[allow(dead_code)]
    pub fn set_page(&mut self, page: Page) -> &mut Self {
        self.page = page;
        self
    }

    /// Return the page registry.
    ///
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Return the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Return the section stored by the last accepted request, if any.
    ///
    #[allow(dead_code)]
    pub fn current_section(&self) -> Option<Section> {
        self.current_section
    }

    /// Return whether a view switch is in flight.
    ///
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Return the in-flight transition, if any.
    ///
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Return whether navigation survived initialization.
    ///
    pub fn navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    /// Return whether exit delays are skipped.
    ///
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Return the derived navigation machine state.
    ///
    #[allow(dead_code)]
    pub fn nav_state(&self) -> NavState {
        if self.transition.is_some() {
            return NavState::Transitioning;
        }
        match self.current_section {
            Some(section) => NavState::Section(section),
            None => NavState::Main,
        }
    }

    /// Request a switch to the given section's detail view. Returns
    /// false when the request is ignored (navigation disabled or a
    /// switch already in flight).
    ///
    pub fn show_section(&mut self, section: Section) -> bool {
        if !self.navigation_enabled {
            debug!("Navigation disabled, ignoring switch to {}", section.slug());
            return false;
        }
        if self.transition.is_some() {
            debug!(
                "View switch already in flight, ignoring switch to {}",
                section.slug()
            );
            return false;
        }

        let from = self.current_section;
        self.current_section = Some(section);
        // Breadcrumb updates immediately, ahead of the animation.
        self.page.set_trail(Some(section));
        let announcement = format!("Navigated to {} section", section.display_name());
        self.transition = Some(Transition::new(
            from,
            Some(section),
            Some(announcement),
            Instant::now(),
        ));
        debug!("Starting view switch to {}", section.slug());
        true
    }

    /// Request a switch back to the main quadrant grid. A no-op when a
    /// switch is in flight or the grid is already current.
    ///
    pub fn show_main(&mut self) -> bool {
        if !self.navigation_enabled {
            debug!("Navigation disabled, ignoring switch to main grid");
            return false;
        }
        if self.transition.is_some() {
            debug!("View switch already in flight, ignoring switch to main grid");
            return false;
        }
        if self.current_section.is_none() {
            debug!("Main grid already current, nothing to do");
            return false;
        }

        let from = self.current_section.take();
        self.page.set_trail(None);
        self.transition = Some(Transition::new(from, None, None, Instant::now()));
        debug!("Starting view switch to main grid");
        true
    }

    /// Translate a tile activation (click or Enter/Space) into a
    /// section switch, reporting it to the analytics sink.
    ///
    pub fn handle_activation(&mut self, section: Section) -> bool {
        if self.transition.is_some() {
            debug!("Ignoring tile activation during view switch");
            return false;
        }
        if !self.show_section(section) {
            return false;
        }
        self.dispatch_analytics(AnalyticsEvent::QuadrantClick {
            section,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
        true
    }

    /// Activate the tile currently holding grid focus.
    ///
    pub fn activate_focused_tile(&mut self) -> bool {
        if self.current_section.is_some() {
            return false;
        }
        let section = Section::ALL[self.grid_focus_index % Section::ALL.len()];
        self.handle_activation(section)
    }

    /// Record the origin of a drag gesture.
    ///
    pub fn touch_start(&mut self, x: f32, y: f32) -> &mut Self {
        self.touch_origin = Some((x, y));
        self
    }

    /// Resolve a drag gesture. Returns true when it was recognized as a
    /// back-swipe and consumed.
    ///
    pub fn touch_end(&mut self, x: f32, y: f32) -> bool {
        let Some((start_x, start_y)) = self.touch_origin.take() else {
            return false;
        };
        let delta_x = x - start_x;
        let delta_y = y - start_y;
        if !swipe_recognized(delta_x, delta_y) || self.current_section.is_none() {
            return false;
        }
        if self.show_main() {
            self.announce("Swiped back to main sections");
            return true;
        }
        false
    }

    /// Advance the in-flight transition pipeline. The exit step ends
    /// with the container swap; the enter step ends with focus
    /// transfer, the pending announcement, and the guard clearing.
    ///
    pub fn advance_transition(&mut self, now: Instant) -> &mut Self {
        let (step, step_started, exit_due) = match self.transition.as_ref() {
            Some(transition) => (
                transition.step,
                transition.step_started,
                transition.exit_duration(self.reduced_motion),
            ),
            None => return self,
        };
        match step {
            TransitionStep::Exit => {
                if now.saturating_duration_since(step_started) >= exit_due {
                    self.complete_exit(now);
                }
            }
            TransitionStep::Enter => {
                if now.saturating_duration_since(step_started) >= super::navigation::ENTRANCE_HOLD
                {
                    self.complete_entrance(now);
                }
            }
        }
        self
    }

    /// Swap containers at the end of the exit step. A missing target
    /// container aborts the switch: the error is logged and the guard
    /// cleared so the machine stays usable.
    ///
    fn complete_exit(&mut self, now: Instant) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        let target = transition.to;

        self.page.hide_all_sections();
        match target {
            Some(section) => {
                self.page.set_main_shown(false);
                if !self.page.set_section_shown(section, true) {
                    error!("Target container not found: {}", section.container_id());
                    self.transition = None;
                    return;
                }
            }
            None => {
                if !self.page.set_main_shown(true) {
                    error!("Main quadrant container not found");
                    self.transition = None;
                    return;
                }
            }
        }

        self.effects.reset_scroll();
        if let Some(transition) = self.transition.as_mut() {
            transition.step = TransitionStep::Enter;
            transition.step_started = now;
        }
    }

    /// Finish the switch: move focus, emit the pending announcement,
    /// report the timing metric, and clear the guard.
    ///
    fn complete_entrance(&mut self, now: Instant) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        match transition.to {
            Some(section) => {
                self.page.focus(section.heading_id());
                self.item_focus_index = 0;
            }
            None => {
                self.page.focus_first_tile();
                self.grid_focus_index = 0;
            }
        }
        if let Some(message) = transition.announcement.as_deref() {
            self.announce(message);
        }
        if transition.to.is_some() {
            let elapsed = now.saturating_duration_since(transition.requested_at);
            self.dispatch_analytics(AnalyticsEvent::CustomMetric {
                name: "section_transition_time",
                value: elapsed.as_millis() as f64,
            });
        }
    }

    /// Overwrite the announcer text.
    ///
    pub fn announce(&mut self, message: &str) -> &mut Self {
        self.page.announce(message);
        self
    }

    /// Send an event to the analytics sink, if one is attached.
    ///
    pub fn dispatch_analytics(&self, event: AnalyticsEvent) {
        if let Some(sender) = &self.analytics_sender {
            if let Err(error) = sender.send(event) {
                warn!("Failed to dispatch analytics event: {}", error);
            }
        }
    }

    /// Placeholder for nesting further quadrant levels below a section.
    ///
    #[allow(dead_code)]
    pub fn add_quadrant_level(&mut self, parent: Section, labels: &[&str]) -> &mut Self {
        info!(
            "Adding new quadrant level to {} is not implemented: {:?}",
            parent.slug(),
            labels
        );
        self
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Return the terminal size.
    ///
    #[allow(dead_code)]
    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Return the index of the tile holding grid focus.
    ///
    pub fn grid_focus_index(&self) -> usize {
        self.grid_focus_index
    }

    fn set_grid_focus(&mut self, index: usize) {
        self.grid_focus_index = index;
        self.page.focus(Section::ALL[index].tile_id());
    }

    /// Move grid focus one column left.
    ///
    pub fn focus_tile_left(&mut self) -> &mut Self {
        if self.grid_focus_index % 2 == 1 {
            self.set_grid_focus(self.grid_focus_index - 1);
        }
        self
    }

    /// Move grid focus one column right.
    ///
    pub fn focus_tile_right(&mut self) -> &mut Self {
        if self.grid_focus_index % 2 == 0 {
            self.set_grid_focus(self.grid_focus_index + 1);
        }
        self
    }

    /// Move grid focus one row up.
    ///
    pub fn focus_tile_up(&mut self) -> &mut Self {
        if self.grid_focus_index >= 2 {
            self.set_grid_focus(self.grid_focus_index - 2);
        }
        self
    }

    /// Move grid focus one row down.
    ///
    pub fn focus_tile_down(&mut self) -> &mut Self {
        if self.grid_focus_index < 2 {
            self.set_grid_focus(self.grid_focus_index + 2);
        }
        self
    }

    /// Return the index of the focused portfolio item.
    ///
    pub fn item_focus_index(&self) -> usize {
        self.item_focus_index
    }

    fn visible_item_count(&self) -> usize {
        self.page
            .visible_section()
            .map(|section| catalog::content_for(section).items.len())
            .unwrap_or(0)
    }

    /// Move item focus to the next portfolio item.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let count = self.visible_item_count();
        if count > 0 {
            self.item_focus_index = (self.item_focus_index + 1) % count;
        }
        self
    }

    /// Move item focus to the previous portfolio item.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let count = self.visible_item_count();
        if count > 0 {
            self.item_focus_index = (self.item_focus_index + count - 1) % count;
        }
        self
    }

    /// Dispatch the focused portfolio item's action.
    ///
    pub fn activate_focused_item(&mut self) -> &mut Self {
        if self.transition.is_some() {
            return self;
        }
        if let Some(section) = self.page.visible_section() {
            let items = catalog::content_for(section).items;
            if let Some(item) = items.get(self.item_focus_index) {
                crate::effects::portfolio_dispatch(item.action, item);
            }
        }
        self
    }

    /// Return the ambient effects record.
    ///
    pub fn effects(&self) -> &AmbientEffects {
        &self.effects
    }

    /// Return the ambient effects record mutably.
    ///
    pub fn effects_mut(&mut self) -> &mut AmbientEffects {
        &mut self.effects
    }

    /// Scroll the presented content by the given delta.
    ///
    pub fn scroll_by(&mut self, delta: f32) -> &mut Self {
        self.effects.scroll_by(delta);
        self
    }

    /// Record the rendered tile areas for click hit tests.
    ///
    pub fn set_tile_areas(&mut self, areas: Vec<(Section, Rect)>) -> &mut Self {
        self.tile_areas = areas;
        self
    }

    /// Return the section tile at the given position, if any.
    ///
    pub fn tile_at(&self, column: u16, row: u16) -> Option<Section> {
        self.tile_areas
            .iter()
            .find(|(_, area)| area_contains(*area, column, row))
            .map(|(section, _)| *section)
    }

    /// Record the rendered portfolio item areas for click hit tests.
    ///
    pub fn set_item_areas(&mut self, areas: Vec<Rect>) -> &mut Self {
        self.item_areas = areas;
        self
    }

    /// Return the portfolio item row at the given position, if any.
    ///
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.item_areas
            .iter()
            .position(|area| area_contains(*area, column, row))
    }

    /// Activate the portfolio item at the given index.
    ///
    pub fn activate_item(&mut self, index: usize) -> &mut Self {
        self.item_focus_index = index;
        self.activate_focused_item()
    }

    /// Record the rendered back control area.
    ///
    pub fn set_back_area(&mut self, area: Option<Rect>) -> &mut Self {
        self.back_area = area;
        self
    }

    /// Return whether the given position hits the back control.
    ///
    pub fn back_at(&self, column: u16, row: u16) -> bool {
        self.back_area
            .map(|area| area_contains(area, column, row))
            .unwrap_or(false)
    }

    /// Record the rendered contact affordance area.
    ///
    pub fn set_contact_area(&mut self, area: Option<Rect>) -> &mut Self {
        self.contact_area = area;
        self
    }

    /// Return whether the given position hits the contact affordance.
    ///
    pub fn contact_at(&self, column: u16, row: u16) -> bool {
        self.contact_area
            .map(|area| area_contains(area, column, row))
            .unwrap_or(false)
    }

    /// Record the rendered modal areas.
    ///
    pub fn set_modal_areas(
        &mut self,
        area: Option<Rect>,
        close: Option<Rect>,
        links: Vec<Rect>,
    ) -> &mut Self {
        self.modal_area = area;
        self.modal_close_area = close;
        self.modal_link_areas = links;
        self
    }

    /// Return whether the given position lands inside the modal.
    ///
    pub fn modal_contains(&self, column: u16, row: u16) -> bool {
        self.modal_area
            .map(|area| area_contains(area, column, row))
            .unwrap_or(false)
    }

    /// Return whether the given position hits the modal close control.
    ///
    pub fn modal_close_at(&self, column: u16, row: u16) -> bool {
        self.modal_close_area
            .map(|area| area_contains(area, column, row))
            .unwrap_or(false)
    }

    /// Return the modal link row at the given position, if any.
    ///
    pub fn modal_link_at(&self, column: u16, row: u16) -> Option<usize> {
        self.modal_link_areas
            .iter()
            .position(|area| area_contains(*area, column, row))
    }

    /// Return whether the debug overlay is open.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Open the debug overlay.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self.debug_index = self.debug_entries.len().saturating_sub(1);
        self
    }

    /// Close the debug overlay.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Select the next debug entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() && self.debug_index + 1 < self.debug_entries.len() {
            self.debug_index += 1;
        }
        self
    }

    /// Select the previous debug entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        self.debug_index = self.debug_index.saturating_sub(1);
        self
    }

    /// Return the selected debug entry.
    ///
    pub fn get_current_debug(&self) -> Option<&String> {
        self.debug_entries.get(self.debug_index)
    }

    /// Return the selected debug index.
    ///
    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Return the captured log entries.
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }

    /// Attach the channel carrying captured log entries.
    ///
    pub fn set_log_receiver(&mut self, receiver: Receiver<String>) -> &mut Self {
        self.log_receiver = Some(receiver);
        self
    }

    /// Drain pending captured log entries into the overlay buffer.
    ///
    pub fn drain_log_entries(&mut self) -> &mut Self {
        if let Some(receiver) = self.log_receiver.take() {
            while let Ok(entry) = receiver.try_recv() {
                self.push_debug_entry(entry);
            }
            self.log_receiver = Some(receiver);
        }
        self
    }

    /// Append a captured log entry, dropping the oldest past the cap.
    ///
    pub fn push_debug_entry(&mut self, entry: String) -> &mut Self {
        self.debug_entries.push(entry);
        if self.debug_entries.len() > MAX_DEBUG_ENTRIES {
            self.debug_entries.remove(0);
            self.debug_index = self.debug_index.saturating_sub(1);
        }
        self
    }
}

fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::{ENTRANCE_HOLD, EXIT_FROM_MAIN, EXIT_FROM_SECTION};
    use std::time::Duration;

    fn ready_state() -> State {
        let mut state = State::default();
        state.initialize();
        state
    }

    /// Drive an in-flight transition to completion. The margin covers
    /// the gap between the caller's clock and the transition's own.
    fn settle(state: &mut State, start: Instant) -> Instant {
        let after_exit = start + EXIT_FROM_MAIN + Duration::from_millis(50);
        state.advance_transition(after_exit);
        let after_enter = after_exit + ENTRANCE_HOLD + Duration::from_millis(50);
        state.advance_transition(after_enter);
        after_enter
    }

    #[test]
    fn test_initial_state_shows_main() {
        let state = ready_state();
        assert_eq!(state.nav_state(), NavState::Main);
        assert_eq!(state.page().visible_ids(), vec!["mainQuadrants"]);
        assert!(state.page().aria_consistent());
    }

    #[test]
    fn test_show_section_runs_the_pipeline() {
        let mut state = ready_state();
        let start = Instant::now();
        assert!(state.show_section(Section::Branding));
        assert_eq!(state.nav_state(), NavState::Transitioning);
        // Breadcrumb updates ahead of the animation.
        assert_eq!(state.page().breadcrumb(), ["Home", "Branding"]);
        // Before the exit duration elapses, nothing has swapped.
        state.advance_transition(start + Duration::from_millis(10));
        assert!(state.page().main_visible());

        settle(&mut state, start);
        assert_eq!(state.nav_state(), NavState::Section(Section::Branding));
        assert_eq!(state.page().visible_ids(), vec!["branding-sub"]);
        assert_eq!(
            state.page().announcement(),
            "Navigated to Branding section"
        );
        assert_eq!(state.page().focused(), Some("branding-heading"));
        assert!(state.page().aria_consistent());
    }

    #[test]
    fn test_requests_during_transition_are_ignored() {
        let mut state = ready_state();
        assert!(state.show_section(Section::Standup));
        assert!(!state.show_section(Section::Writing));
        assert!(!state.show_main());
        assert!(!state.handle_activation(Section::Corporates));

        let start = Instant::now();
        settle(&mut state, start);
        // The first request won.
        assert_eq!(state.nav_state(), NavState::Section(Section::Standup));
    }

    #[test]
    fn test_show_main_is_idempotent() {
        let mut state = ready_state();
        state.announce("untouched");
        assert!(!state.show_main());
        assert_eq!(state.nav_state(), NavState::Main);
        // No announcement was replaced and no animation started.
        assert_eq!(state.page().announcement(), "untouched");
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_round_trip_restores_initial_configuration() {
        for section in Section::ALL {
            let mut state = ready_state();
            let initial_ids: Vec<String> = state
                .page()
                .visible_ids()
                .iter()
                .map(|id| id.to_string())
                .collect();

            assert!(state.show_section(section));
            settle(&mut state, Instant::now());
            assert!(state.show_main());
            settle(&mut state, Instant::now());

            assert_eq!(state.nav_state(), NavState::Main);
            let ids: Vec<String> = state
                .page()
                .visible_ids()
                .iter()
                .map(|id| id.to_string())
                .collect();
            assert_eq!(ids, initial_ids);
            assert!(state.page().aria_consistent());
        }
    }

    #[test]
    fn test_exactly_one_container_visible_throughout() {
        let mut state = ready_state();
        let start = Instant::now();
        state.show_section(Section::Writing);

        // Sampled across the exit window: still exactly one visible.
        for ms in [0u64, 100, 200, 399] {
            state.advance_transition(start + Duration::from_millis(ms));
            assert_eq!(state.page().visible_ids().len(), 1);
            assert!(state.page().aria_consistent());
        }
        settle(&mut state, start);
        assert_eq!(state.page().visible_ids().len(), 1);
    }

    #[test]
    fn test_missing_target_rolls_back_and_stays_usable() {
        let mut state = State::default();
        state.set_page(Page::with_sections(&[Section::Standup]));
        state.initialize();

        assert!(state.show_section(Section::Branding));
        settle(&mut state, Instant::now());

        // The switch was aborted at the swap: guard cleared, nothing
        // shown, no announcement.
        assert!(!state.is_transitioning());
        assert!(state.page().visible_ids().is_empty());
        assert_eq!(state.page().announcement(), "");

        // The machine still accepts requests.
        assert!(state.show_main());
        settle(&mut state, Instant::now());
        assert_eq!(state.nav_state(), NavState::Main);
        assert_eq!(state.page().visible_ids(), vec!["mainQuadrants"]);
    }

    #[test]
    fn test_missing_main_disables_navigation() {
        let mut state = State::default();
        state.set_page(Page::without_main());
        state.initialize();

        assert!(!state.navigation_enabled());
        assert!(!state.show_section(Section::Standup));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut state = State::default();
        state.initialize();
        state.show_section(Section::Writing);
        state.initialize();
        // A repeated ready signal does not reset in-flight work.
        assert!(state.is_transitioning());
    }

    #[test]
    fn test_swipe_recognition_drives_show_main() {
        let mut state = ready_state();
        state.show_section(Section::Standup);
        settle(&mut state, Instant::now());

        // Too much drift: ignored.
        state.touch_start(10.0, 10.0);
        assert!(!state.touch_end(160.0, 90.0));
        assert_eq!(state.nav_state(), NavState::Section(Section::Standup));

        // Too short: ignored.
        state.touch_start(10.0, 10.0);
        assert!(!state.touch_end(60.0, 20.0));
        assert_eq!(state.nav_state(), NavState::Section(Section::Standup));

        // Recognized: back to main with the swipe announcement.
        state.touch_start(10.0, 10.0);
        assert!(state.touch_end(160.0, 20.0));
        assert_eq!(
            state.page().announcement(),
            "Swiped back to main sections"
        );
        settle(&mut state, Instant::now());
        assert_eq!(state.nav_state(), NavState::Main);
    }

    #[test]
    fn test_swipe_on_main_grid_is_ignored() {
        let mut state = ready_state();
        state.touch_start(10.0, 10.0);
        assert!(!state.touch_end(200.0, 15.0));
        assert_eq!(state.nav_state(), NavState::Main);
    }

    #[test]
    fn test_section_to_section_switch() {
        let mut state = ready_state();
        state.show_section(Section::Standup);
        settle(&mut state, Instant::now());

        let start = Instant::now();
        assert!(state.show_section(Section::Writing));
        // Leaving a section uses the shorter exit.
        state.advance_transition(start + EXIT_FROM_SECTION + Duration::from_millis(50));
        state.advance_transition(
            start + EXIT_FROM_SECTION + ENTRANCE_HOLD + Duration::from_millis(100),
        );
        assert_eq!(state.nav_state(), NavState::Section(Section::Writing));
        assert_eq!(state.page().visible_ids(), vec!["writing-sub"]);
    }

    #[test]
    fn test_focus_returns_to_first_tile_on_main() {
        let mut state = ready_state();
        state.focus_tile_right();
        state.focus_tile_down();
        assert_eq!(state.grid_focus_index(), 3);

        state.show_section(Section::Corporates);
        settle(&mut state, Instant::now());
        state.show_main();
        settle(&mut state, Instant::now());

        assert_eq!(state.grid_focus_index(), 0);
        assert_eq!(state.page().focused(), Some("quadrant-standup"));
    }

    #[test]
    fn test_grid_focus_moves_within_bounds() {
        let mut state = ready_state();
        assert_eq!(state.grid_focus_index(), 0);
        state.focus_tile_left();
        assert_eq!(state.grid_focus_index(), 0);
        state.focus_tile_right();
        assert_eq!(state.grid_focus_index(), 1);
        state.focus_tile_down();
        assert_eq!(state.grid_focus_index(), 3);
        state.focus_tile_down();
        assert_eq!(state.grid_focus_index(), 3);
        state.focus_tile_up();
        state.focus_tile_left();
        assert_eq!(state.grid_focus_index(), 0);
    }

    #[test]
    fn test_scroll_resets_on_section_entry() {
        let mut state = ready_state();
        state.effects_mut().set_extent(40, 20);
        state.scroll_by(400.0);
        assert!(state.effects().viewport.scroll_top > 0.0);

        state.show_section(Section::Standup);
        settle(&mut state, Instant::now());
        assert_eq!(state.effects().viewport.scroll_top, 0.0);
    }
}
