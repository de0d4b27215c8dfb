use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Accessibility label of the focused rating, right aligned
    let label = state
        .cards
        .get(state.focus)
        .filter(|c| c.kind == CardKind::Input)
        .map(|c| c.state.label(&c.props))
        .unwrap_or_default();

    let used: usize = parts.iter().map(|s| s.width()).sum();
    let label_width = Span::raw(label.as_str()).width();
    let remaining = (area.width as usize).saturating_sub(used + label_width + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", label),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
