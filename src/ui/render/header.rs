use super::Frame;
use crate::effects::parallax;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

const BANNER: &str = "NAVIN KUMAR";
const STRAPLINE: &str = "comedian · writer · host";

const DECORATION_GLYPHS: [&str; 4] = ["◇", "◆", "◈", "◇"];

/// Render the header: banner with parallax decorations, breadcrumb
/// trail, and scroll progress.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(size);

    let mut banner_spans = vec![
        Span::styled(BANNER, styling::banner_style(theme)),
        Span::raw("  "),
        Span::styled(STRAPLINE, styling::muted_text_style(theme)),
    ];
    // Decorative glyphs drift and turn with the scroll position.
    let scroll_top = state.effects().viewport.scroll_top;
    for index in 0..DECORATION_GLYPHS.len() {
        let transform = parallax(scroll_top, index);
        let drift = (transform.offset_y.abs() as usize) % 6;
        banner_spans.push(Span::raw(" ".repeat(3 + drift)));
        banner_spans.push(Span::styled(
            DECORATION_GLYPHS[transform.glyph_frame()],
            styling::muted_text_style(theme),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(banner_spans)), chunks[0]);

    let trail = state.page().breadcrumb().join(" › ");
    let breadcrumb = Paragraph::new(Span::styled(trail, styling::normal_text_style(theme)));
    frame.render_widget(breadcrumb, chunks[1]);

    let progress = state.effects().progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent.to_color()))
        .label(format!("{:.0}%", progress))
        .percent(progress.round() as u16);
    frame.render_widget(gauge, chunks[2]);
}
