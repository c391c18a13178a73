use crate::effects::SCROLL_STEP;
use crate::state::{Section, State};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                match event::read().unwrap() {
                    CrosstermEvent::Key(key) => tx_clone.send(Event::Input(key)).unwrap(),
                    CrosstermEvent::Mouse(mouse) => tx_clone.send(Event::Mouse(mouse)).unwrap(),
                    _ => (),
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns
    /// result with value true if should continue or false if exit was
    /// requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => process_key(state, event),
            Event::Mouse(event) => {
                process_mouse(state, event);
                Ok(true)
            }
            Event::Tick => {
                state.advance_spinner_index();
                state.advance_transition(Instant::now());
                state.drain_log_entries();
                Ok(true)
            }
        }
    }
}

/// Translate one key event into state mutations. Returns false when an
/// exit was requested.
///
pub fn process_key(state: &mut State, event: KeyEvent) -> Result<bool> {
    match event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return Ok(false);
        }
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return Ok(false);
        }
        KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.effects().modal().is_some() {
                debug!("Processing close contact modal event '{:?}'...", event);
                state.effects_mut().close_contact();
            } else if state.is_debug_mode() {
                debug!("Processing exit debug mode (Esc) event '{:?}'...", event);
                state.exit_debug_mode();
            } else if state.show_main() {
                debug!("Processing return to main event '{:?}'...", event);
                state.announce("Returned to main sections");
            }
        }
        KeyEvent {
            code: KeyCode::Char(digit @ '1'..='4'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.effects().modal().is_none() {
                if let Some(section) = Section::from_digit(digit) {
                    debug!("Processing section hotkey event '{:?}'...", event);
                    state.show_section(section);
                }
            }
        }
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if let Some(modal) = state.effects().modal() {
                if let Some(link) = modal.selected_link() {
                    debug!("Processing copy contact link event '{:?}'...", event);
                    crate::effects::copy_to_clipboard(link.target);
                }
            } else if state.page().main_visible() {
                debug!("Processing tile activation event '{:?}'...", event);
                state.activate_focused_tile();
            } else if state.page().visible_section().is_some() {
                debug!("Processing item activation event '{:?}'...", event);
                state.activate_focused_item();
            }
        }
        KeyEvent {
            code: KeyCode::Char('b'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            // Back control: returns without an announcement, like a
            // click on the back button.
            if state.page().visible_section().is_some() {
                debug!("Processing back control event '{:?}'...", event);
                state.show_main();
            }
        }
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.effects().modal().is_none() && state.effects().contact_visible() {
                debug!("Processing open contact modal event '{:?}'...", event);
                state.effects_mut().open_contact();
            }
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.is_debug_mode() {
                debug!("Processing exit debug mode (d) event '{:?}'...", event);
                state.exit_debug_mode();
            } else {
                debug!("Processing enter debug mode (d) event '{:?}'...", event);
                state.enter_debug_mode();
            }
        }
        KeyEvent {
            code: KeyCode::Char('y'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.is_debug_mode() {
                debug!("Processing copy debug log event '{:?}'...", event);
                if let Some(debug_entry) = state.get_current_debug() {
                    match ClipboardContext::new() {
                        Ok(mut ctx) => match ctx.set_contents(debug_entry.to_string()) {
                            Ok(_) => {
                                info!("Debug log entry copied to clipboard");
                            }
                            Err(e) => {
                                warn!("Failed to copy to clipboard: {}", e);
                            }
                        },
                        Err(e) => {
                            warn!("Failed to initialize clipboard: {}", e);
                        }
                    }
                }
            }
        }
        KeyEvent {
            code: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.page().main_visible() && state.effects().modal().is_none() {
                state.focus_tile_left();
            }
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.page().main_visible() && state.effects().modal().is_none() {
                state.focus_tile_right();
            }
        }
        KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.effects().modal().is_some() {
                if let Some(modal) = state.effects_mut().modal_mut() {
                    modal.select_previous();
                }
            } else if state.is_debug_mode() {
                state.previous_debug();
            } else if state.page().visible_section().is_some() {
                state.previous_item();
            } else if state.page().main_visible() {
                state.focus_tile_up();
            }
        }
        KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            if state.effects().modal().is_some() {
                if let Some(modal) = state.effects_mut().modal_mut() {
                    modal.select_next();
                }
            } else if state.is_debug_mode() {
                state.next_debug();
            } else if state.page().visible_section().is_some() {
                state.next_item();
            } else if state.page().main_visible() {
                state.focus_tile_down();
            }
        }
        KeyEvent {
            code: KeyCode::PageDown,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            state.scroll_by(SCROLL_STEP);
        }
        KeyEvent {
            code: KeyCode::PageUp,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            state.scroll_by(-SCROLL_STEP);
        }
        _ => {
            debug!("Skipping processing of terminal event '{:?}'...", event);
        }
    }
    Ok(true)
}

/// Translate one mouse event into state mutations. A left press starts
/// a potential drag gesture; on release the gesture is either consumed
/// as a back-swipe or resolved as a click against the recorded hit
/// areas.
///
pub fn process_mouse(state: &mut State, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.touch_start(event.column as f32, event.row as f32);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.touch_end(event.column as f32, event.row as f32) {
                debug!("Processing back-swipe gesture '{:?}'...", event);
                return;
            }
            process_click(state, event.column, event.row);
        }
        MouseEventKind::ScrollDown => {
            state.scroll_by(SCROLL_STEP);
        }
        MouseEventKind::ScrollUp => {
            state.scroll_by(-SCROLL_STEP);
        }
        _ => (),
    }
}

fn process_click(state: &mut State, column: u16, row: u16) {
    if state.effects().modal().is_some() {
        if state.modal_close_at(column, row) || !state.modal_contains(column, row) {
            debug!("Processing close contact modal click...");
            state.effects_mut().close_contact();
        } else if let Some(index) = state.modal_link_at(column, row) {
            let target = state
                .effects()
                .modal()
                .and_then(|modal| modal.links.get(index))
                .map(|link| link.target);
            if let Some(target) = target {
                debug!("Processing contact link click...");
                crate::effects::copy_to_clipboard(target);
            }
        }
        return;
    }

    if state.effects().contact_visible() && state.contact_at(column, row) {
        debug!("Processing open contact modal click...");
        state.effects_mut().open_contact();
        return;
    }

    if state.back_at(column, row) {
        debug!("Processing back control click...");
        state.show_main();
        return;
    }

    if let Some(section) = state.tile_at(column, row) {
        debug!("Processing quadrant tile click...");
        state.handle_activation(section);
        return;
    }

    if let Some(index) = state.item_at(column, row) {
        debug!("Processing portfolio item click...");
        state.activate_item(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NavState, ENTRANCE_HOLD, EXIT_FROM_MAIN};
    use std::time::Duration;

    fn ready_state() -> State {
        let mut state = State::default();
        state.initialize();
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn settle(state: &mut State) {
        let now = Instant::now();
        state.advance_transition(now + EXIT_FROM_MAIN + Duration::from_millis(50));
        state.advance_transition(
            now + EXIT_FROM_MAIN + ENTRANCE_HOLD + Duration::from_millis(100),
        );
    }

    #[test]
    fn test_digit_then_escape_round_trip() {
        let mut state = ready_state();

        assert!(process_key(&mut state, key(KeyCode::Char('2'))).unwrap());
        settle(&mut state);
        assert_eq!(state.nav_state(), NavState::Section(Section::Branding));
        assert_eq!(
            state.page().announcement(),
            "Navigated to Branding section"
        );

        assert!(process_key(&mut state, key(KeyCode::Esc)).unwrap());
        assert_eq!(state.page().announcement(), "Returned to main sections");
        settle(&mut state);
        assert_eq!(state.nav_state(), NavState::Main);
    }

    #[test]
    fn test_escape_on_main_does_not_announce() {
        let mut state = ready_state();
        state.announce("untouched");
        assert!(process_key(&mut state, key(KeyCode::Esc)).unwrap());
        assert_eq!(state.page().announcement(), "untouched");
    }

    #[test]
    fn test_quit_keys_request_exit() {
        let mut state = ready_state();
        assert!(!process_key(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(!process_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
        .unwrap());
    }

    #[test]
    fn test_unhandled_keys_pass_through() {
        let mut state = ready_state();
        assert!(process_key(&mut state, key(KeyCode::Char('z'))).unwrap());
        assert_eq!(state.nav_state(), NavState::Main);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_grid_focus_keys() {
        let mut state = ready_state();
        process_key(&mut state, key(KeyCode::Right)).unwrap();
        process_key(&mut state, key(KeyCode::Down)).unwrap();
        assert_eq!(state.grid_focus_index(), 3);
        process_key(&mut state, key(KeyCode::Char('h'))).unwrap();
        assert_eq!(state.grid_focus_index(), 2);
    }

    #[test]
    fn test_enter_activates_focused_tile() {
        let mut state = ready_state();
        process_key(&mut state, key(KeyCode::Right)).unwrap();
        process_key(&mut state, key(KeyCode::Enter)).unwrap();
        settle(&mut state);
        assert_eq!(state.nav_state(), NavState::Section(Section::Branding));
    }

    #[test]
    fn test_drag_release_far_away_is_not_a_click() {
        let mut state = ready_state();
        state.show_section(Section::Standup);
        settle(&mut state);

        // A recognized swipe consumes the release entirely.
        process_mouse(
            &mut state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 10,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
        );
        process_mouse(
            &mut state,
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column: 140,
                row: 8,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(
            state.page().announcement(),
            "Swiped back to main sections"
        );
        settle(&mut state);
        assert_eq!(state.nav_state(), NavState::Main);
    }

    #[test]
    fn test_wheel_scroll_updates_progress() {
        let mut state = ready_state();
        state.effects_mut().set_extent(40, 20);
        process_mouse(
            &mut state,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(state.effects().progress() > 0.0);
    }
}
