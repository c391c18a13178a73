use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Render the log overlay according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    frame.render_widget(Clear, size);

    let theme = state.get_theme();
    let title = "Log (j/k: navigate, y: copy, d or Esc: exit)";
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let debug_entries = state.get_debug_entries();
    let items: Vec<ListItem> = if debug_entries.is_empty() {
        vec![ListItem::new("No log entries captured yet")]
    } else {
        debug_entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == state.get_debug_index() {
                    styling::active_list_item_style(theme)
                } else {
                    styling::normal_text_style(theme)
                };
                ListItem::new(Line::from(vec![Span::styled(entry.clone(), style)]))
            })
            .collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .block(block);

    let mut list_state = ListState::default();
    if !debug_entries.is_empty() {
        list_state.select(Some(state.get_debug_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
