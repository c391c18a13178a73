use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing;
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the contact modal overlay and record its hit areas.
///
pub fn modal(frame: &mut Frame, size: Rect, state: &mut State) {
    let Some(overlay) = state.effects().modal() else {
        return;
    };
    let links: Vec<(String, String)> = overlay
        .links
        .iter()
        .map(|link| {
            (
                link.label.to_string(),
                text_processing::display_target(link.target),
            )
        })
        .collect();
    let selected = overlay.selected;

    let popup_area = centered_rect(50, 50, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Get in Touch",
            styling::active_block_title_style(),
        ))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    if inner.height < 2 {
        return;
    }

    // Close control in the top-right corner of the popup frame.
    let close_area = Rect {
        x: popup_area.x + popup_area.width.saturating_sub(4),
        y: popup_area.y,
        width: 3,
        height: 1,
    };
    let close = Paragraph::new(Span::styled("[✕]", styling::normal_text_style(theme)));
    frame.render_widget(close, close_area);

    let hint = Paragraph::new(Span::styled(
        "j/k: choose · Enter/click: copy · Esc: close",
        styling::muted_text_style(theme),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(
        hint,
        Rect {
            x: inner.x,
            y: inner.y,
            width: inner.width,
            height: 1,
        },
    );

    let mut link_areas = Vec::with_capacity(links.len());
    for (index, (label, target)) in links.iter().enumerate() {
        let y = inner.y + 2 + index as u16;
        if y >= inner.y + inner.height {
            link_areas.push(Rect::default());
            continue;
        }
        let area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        link_areas.push(area);

        let style = if index == selected {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        let marker = if index == selected { "▸ " } else { "  " };
        let line = Paragraph::new(Span::styled(
            text_processing::shorten(
                &format!("{}{} — {}", marker, label, target),
                inner.width as usize,
            ),
            style,
        ));
        frame.render_widget(line, area);
    }

    state.set_modal_areas(Some(popup_area), Some(close_area), link_areas);
}
