use super::Frame;
use crate::page::catalog;
use crate::state::{Section, State, TransitionStep};
use crate::ui::widgets::styling;
use crate::utils::text_processing;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::Instant;

/// Rows occupied by one portfolio item (title, detail, spacer).
const ROWS_PER_ITEM: u16 = 3;

/// Render one section detail view.
///
pub fn section(frame: &mut Frame, size: Rect, state: &mut State, section: Section) {
    let content = catalog::content_for(section);

    // Report the content extent so the scroll progress tracks this
    // view.
    let content_rows = 3 + content.items.len() as u16 * ROWS_PER_ITEM;
    state
        .effects_mut()
        .set_extent(content_rows, size.height.saturating_sub(2));

    let theme = state.get_theme();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            content.section.display_name(),
            styling::active_block_title_style(),
        ));
    if let Some(transition) = state.transition() {
        let eased = transition.step_progress(Instant::now(), state.reduced_motion());
        let arriving = transition.step == TransitionStep::Enter && eased < 1.0;
        if transition.step == TransitionStep::Exit || arriving {
            block = block.border_style(
                styling::normal_block_border_style(theme).add_modifier(Modifier::DIM),
            );
        }
    }
    let inner = block.inner(size);
    frame.render_widget(block, size);
    if inner.height < 2 {
        return;
    }

    // Back control.
    let back_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: 1,
    };
    let back = Paragraph::new(Span::styled(
        "← Back to all sections  (Esc · b · swipe right)",
        styling::muted_text_style(theme),
    ));
    frame.render_widget(back, back_area);
    state.set_back_area(Some(back_area));

    let theme = state.get_theme();
    // Tagline.
    if inner.height > 1 {
        let tagline_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: 1,
        };
        let tagline = Paragraph::new(Span::styled(
            text_processing::shorten(content.tagline, inner.width as usize),
            styling::normal_text_style(theme),
        ));
        frame.render_widget(tagline, tagline_area);
    }

    // Items, offset by the scroll position. Hidden rows keep a
    // zero-sized placeholder so hit-test indexes stay aligned.
    let offset = state.effects().scroll_row_offset();
    let list_top = inner.y as i32 + 3;
    let list_bottom = (inner.y + inner.height) as i32;
    let focused_index = state.item_focus_index();
    let mut item_areas = Vec::with_capacity(content.items.len());
    for (index, item) in content.items.iter().enumerate() {
        let y = list_top + (index as i32 * ROWS_PER_ITEM as i32) - offset as i32;
        if y < list_top || y + 1 >= list_bottom {
            item_areas.push(Rect::default());
            continue;
        }
        let area = Rect {
            x: inner.x,
            y: y as u16,
            width: inner.width,
            height: 2,
        };
        item_areas.push(area);

        let focused = index == focused_index;
        let marker = if focused { "▸ " } else { "  " };
        let title_style = if focused {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        let title = Paragraph::new(Span::styled(
            format!("{}{}", marker, item.title),
            title_style,
        ));
        frame.render_widget(
            title,
            Rect {
                height: 1,
                ..area
            },
        );

        let detail = match item.target {
            Some(target) => format!(
                "  {} — {}",
                item.detail,
                text_processing::display_target(target)
            ),
            None => format!("  {}", item.detail),
        };
        let detail = Paragraph::new(Span::styled(
            text_processing::shorten(&detail, inner.width as usize),
            styling::muted_text_style(theme),
        ));
        frame.render_widget(
            detail,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
    state.set_item_areas(item_areas);

    // Floating contact affordance, revealed by scrolling.
    if state.effects().contact_visible() && size.width > 16 && size.height > 3 {
        let affordance = Rect {
            x: size.x + size.width - 15,
            y: size.y + size.height - 2,
            width: 13,
            height: 1,
        };
        frame.render_widget(Clear, affordance);
        let theme = state.get_theme();
        let button = Paragraph::new(Span::styled(
            "[ ✉ Contact ]",
            styling::active_list_item_style(theme),
        ));
        frame.render_widget(button, affordance);
        state.set_contact_area(Some(affordance));
    }
}
