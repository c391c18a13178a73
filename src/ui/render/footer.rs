use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the footer: key hints plus the announcer echo.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(size);

    let hints = if state.effects().modal().is_some() {
        " j/k: choose · Enter: copy · Esc: close"
    } else if state.is_debug_mode() {
        " j/k: navigate · y: copy · d/Esc: exit log"
    } else if state.page().visible_section().is_some() {
        " Esc/b: back · j/k: items · Enter: activate · PgUp/PgDn: scroll · q: quit"
    } else {
        " 1-4: open section · arrows: focus · Enter: open · d: log · q: quit"
    };

    let mut spans = vec![];
    if state.is_transitioning() {
        spans.push(Span::styled(
            format!(" {}", spinner::frame(state)),
            styling::active_list_item_style(theme),
        ));
    }
    spans.push(Span::styled(hints, styling::muted_text_style(theme)));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let announcement = state.page().announcement();
    if !announcement.is_empty() {
        let echo = Paragraph::new(Span::styled(
            format!(" {}", announcement),
            styling::normal_text_style(theme),
        ));
        frame.render_widget(echo, chunks[1]);
    }
}
