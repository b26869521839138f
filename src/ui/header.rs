use crate::app::state::{AppState, Focus};
use crate::components::AuthLabel;
use crate::ui::layout::AppLayout;
use crate::ui::search_box;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

pub const BRAND: &str = "HomeFinder";
/// Placeholder links; none of them navigate anywhere.
pub const NAV_LINKS: [&str; 5] = ["Buy", "Rent", "Sell", "Agents", "News"];

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(Theme::PRIMARY)),
        Span::styled(BRAND, Theme::logo()),
    ]))
    .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(logo, layout.logo);

    let mut links: Vec<Span> = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::raw("   "));
        }
        links.push(Span::styled(*link, Theme::nav_link()));
    }
    let nav = Paragraph::new(Line::from(links))
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(nav, layout.nav);

    search_box::render(
        frame,
        layout.header_search,
        &state.header_search,
        state.focus == Focus::HeaderSearch,
    );

    render_auth_button(frame, layout.auth_button, state);
}

fn render_auth_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::AuthButton;
    let style = if state.auth.is_signed_in() {
        Theme::secondary_button()
    } else {
        Theme::primary_button()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let label = state.auth.label();
    let content = match label {
        AuthLabel::Text(_) => Span::styled(label.as_str(), style),
        // Icon only, no label
        AuthLabel::Icon(_) => Span::styled(format!(" {} ", label.as_str()), style),
    };
    let button = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
