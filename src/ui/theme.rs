use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const INK: Color = Color::Rgb(13, 20, 28);
    pub const PRIMARY: Color = Color::Rgb(12, 127, 242);
    pub const RENT_GREEN: Color = Color::Rgb(0, 168, 107);
    pub const MIST: Color = Color::Rgb(231, 237, 244);
    pub const SLATE: Color = Color::Rgb(73, 115, 156);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn border_type(focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn nav_link() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn search_icon() -> Style {
        Style::default().fg(Self::SLATE)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::SLATE)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    /// Call-to-action buttons ("Sign In", "Start Searching").
    pub fn primary_button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_button() -> Style {
        Style::default()
            .fg(Self::INK)
            .bg(Self::MIST)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hero_title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn hero_subtitle() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn chip() -> Style {
        Style::default().fg(Self::INK).bg(Self::MIST)
    }

    pub fn badge_sale() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge_rent() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::RENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn price() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn address() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_focus() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
