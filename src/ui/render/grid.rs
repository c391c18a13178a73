use super::Frame;
use crate::page::catalog;
use crate::state::{Section, State, TransitionStep};
use crate::ui::widgets::styling;
use crate::utils::text_processing;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

/// Render the main quadrant grid.
///
pub fn grid(frame: &mut Frame, size: Rect, state: &mut State) {
    // The grid fills its surface; nothing to scroll here.
    state.effects_mut().set_extent(size.height, size.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let areas = [top[0], top[1], bottom[0], bottom[1]];

    let mut tile_areas = Vec::with_capacity(Section::ALL.len());
    for (index, section) in Section::ALL.iter().enumerate() {
        tile(frame, areas[index], state, *section, index);
        tile_areas.push((*section, areas[index]));
    }
    state.set_tile_areas(tile_areas);
}

fn tile(frame: &mut Frame, area: Rect, state: &State, section: Section, index: usize) {
    let theme = state.get_theme();
    let focused = state.grid_focus_index() == index;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                section.display_name(),
                styling::active_block_title_style(),
            ));
    } else {
        block = block.title(section.display_name());
    }

    let mut style = if focused {
        styling::active_list_item_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    // Fade the grid while it exits or eases back in.
    if let Some(transition) = state.transition() {
        let arriving = transition.step == TransitionStep::Enter && transition.to.is_none();
        let leaving = transition.step == TransitionStep::Exit && transition.from.is_none();
        let eased = transition.step_progress(Instant::now(), state.reduced_motion());
        if leaving || (arriving && eased < 1.0) {
            style = style.add_modifier(Modifier::DIM);
        }
    }

    let tagline = catalog::content_for(section).tagline;
    let width = area.width.saturating_sub(4) as usize;
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("[{}]", index + 1), style)),
        Line::from(""),
        Line::from(Span::styled(
            text_processing::shorten(tagline, width),
            styling::muted_text_style(theme),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
