use crate::listings::{Listing, ListingKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, listing: &Listing) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type(false))
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let badge_style = match listing.kind {
        ListingKind::Sale => Theme::badge_sale(),
        ListingKind::Rent => Theme::badge_rent(),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {} ", listing.kind.badge()),
        badge_style,
    ))];
    if let Some(ref url) = listing.image_url {
        lines.push(Line::from(Span::styled(format!("▣ {}", url), Theme::muted())));
    }
    lines.push(Line::from(Span::styled(listing.price.as_str(), Theme::price())));
    lines.push(Line::from(Span::styled(listing.summary(), Theme::muted())));
    lines.push(Line::from(Span::styled(
        listing.address.as_str(),
        Theme::address(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
