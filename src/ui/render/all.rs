use super::{contact, footer, grid, header, log, section, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

/// Render the whole interface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    // Hit areas are rebuilt every frame by the views that draw them.
    state.set_tile_areas(vec![]);
    state.set_item_areas(vec![]);
    state.set_back_area(None);
    state.set_contact_area(None);
    state.set_modal_areas(None, None, vec![]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    header::header(frame, chunks[0], state);

    if let Some(visible) = state.page().visible_section() {
        section::section(frame, chunks[1], state, visible);
    } else if state.page().main_visible() {
        grid::grid(frame, chunks[1], state);
    } else {
        empty_surface(frame, chunks[1], state);
    }

    footer::footer(frame, chunks[2], state);

    // Overlays render on top of everything.
    if state.effects().modal().is_some() {
        contact::modal(frame, size, state);
    }
    if state.is_debug_mode() {
        log::log(frame, super::centered_rect(80, 60, size), state);
    }
}

/// Rendered when no container is visible: a failed swap or disabled
/// navigation leaves the page intentionally blank.
///
fn empty_surface(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let hint = if state.navigation_enabled() {
        "Nothing to display. Press Esc to return to the main sections."
    } else {
        "Navigation is unavailable."
    };
    let paragraph = Paragraph::new(hint)
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, size);
}
