use crate::app::state::{AppState, Focus};
use crate::ui::layout::{self, AppLayout};
use crate::ui::theme::Theme;
use crate::ui::{property_card, search_box};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub const HERO_TITLE: &str = "Find Your Dream Home";
pub const HERO_SUBTITLE: &str =
    "Explore a wide range of properties for sale and rent across Australia.";
pub const START_LABEL: &str = "Start Searching";
pub const POPULAR_SEARCHES: [&str; 4] = [
    "Houses for Sale in Sydney",
    "Apartments for Rent in Melbourne",
    "Land for Sale in Brisbane",
    "Commercial Properties",
];

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    search_box::render(
        frame,
        layout.home_search,
        &state.home_search,
        state.focus == Focus::HomeSearch,
    );
    render_hero(frame, layout, state);
    render_popular(frame, layout.popular);
    render_featured(frame, layout.featured, state);
}

fn render_hero(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type(false))
        .border_style(Theme::border());
    let inner = block.inner(layout.hero);
    frame.render_widget(block, layout.hero);

    let text = vec![
        Line::from(Span::styled(HERO_TITLE, Theme::hero_title())),
        Line::from(Span::styled(HERO_SUBTITLE, Theme::hero_subtitle())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);

    let focused = state.focus == Focus::StartButton;
    let button = Paragraph::new(Span::styled(START_LABEL, Theme::primary_button()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type(focused))
                .border_style(if focused {
                    Theme::border_focused()
                } else {
                    Theme::border()
                }),
        );
    frame.render_widget(button, layout.start_button);
}

fn render_popular(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Popular Searches ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(false))
        .border_style(Theme::border());

    let mut chips: Vec<Span> = Vec::new();
    for (i, label) in POPULAR_SEARCHES.iter().enumerate() {
        if i > 0 {
            chips.push(Span::raw("  "));
        }
        chips.push(Span::styled(format!(" {} ", label), Theme::chip()));
    }

    let paragraph = Paragraph::new(Line::from(chips))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_featured(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Featured Properties ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(false))
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = state.visible_listings();
    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled("No properties match", Theme::muted()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let slots = layout::card_grid(inner, visible.len());
    for (slot, listing) in slots.into_iter().zip(visible) {
        property_card::render(frame, slot, listing);
    }
}
