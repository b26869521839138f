use crate::app::state::{AppState, Focus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let hint = match state.focus {
        Focus::HeaderSearch | Focus::HomeSearch => "type to search · ^W word · ^U clear",
        Focus::AuthButton => "Enter/Space: account",
        Focus::StartButton => "Enter/Space: start searching",
    };
    parts.push(Span::styled(
        format!(" Tab: next · Esc: quit · {} ", hint),
        Theme::status_bar(),
    ));

    if !state.listing_query.is_empty() {
        parts.push(Span::styled(
            format!("| {} shown ", state.visible_listings().len()),
            Theme::status_bar(),
        ));
    }

    let focus_name = state.focus.name();
    let right = format!(" [{}] {} ", focus_name, state.clock);
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Theme::status_focus()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
