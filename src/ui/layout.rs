use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one property card, borders included.
pub const CARD_HEIGHT: u16 = 7;
const START_BUTTON_WIDTH: u16 = 20;

pub struct AppLayout {
    pub logo: Rect,
    pub nav: Rect,
    pub header_search: Rect,
    pub auth_button: Rect,
    pub home_search: Rect,
    pub hero: Rect,
    pub start_button: Rect,
    pub popular: Rect,
    pub featured: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | page | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let body = main_chunks[1];
    let status_bar = main_chunks[2];

    // Header: logo | nav links | search | auth button
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(28),
            Constraint::Length(11),
        ])
        .split(header);

    // Page: search | hero | popular searches | featured grid
    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(body);

    let hero = body_chunks[1];
    // Centered under the hero title and subtitle
    let start_button = Rect {
        x: hero.x + hero.width.saturating_sub(START_BUTTON_WIDTH) / 2,
        y: hero.y + 3,
        width: START_BUTTON_WIDTH,
        height: 3,
    }
    .intersection(hero);

    AppLayout {
        logo: header_chunks[0],
        nav: header_chunks[1],
        header_search: header_chunks[2],
        auth_button: header_chunks[3],
        home_search: body_chunks[0],
        hero,
        start_button,
        popular: body_chunks[2],
        featured: body_chunks[3],
        status_bar,
    }
}

/// Number of card columns for a grid of the given width.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=89 => 2,
        _ => 3,
    }
}

/// Card slots for `count` listings inside `area`, row-major, dropping
/// whatever does not fit vertically.
pub fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.height < CARD_HEIGHT {
        return Vec::new();
    }
    let columns = grid_columns(area.width);
    let rows = (area.height / CARD_HEIGHT) as usize;
    let needed_rows = count.div_ceil(columns).min(rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); needed_rows])
        .split(area);

    let mut slots = Vec::with_capacity(count.min(needed_rows * columns));
    for row in row_areas.iter() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row);
        for cell in cells.iter() {
            if slots.len() == count {
                return slots;
            }
            slots.push(*cell);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(70), 2);
        assert_eq!(grid_columns(120), 3);
    }

    #[test]
    fn test_card_grid_wraps_rows() {
        let area = Rect::new(0, 0, 70, 20);
        let slots = card_grid(area, 3);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].y, slots[1].y);
        assert_eq!(slots[2].y, CARD_HEIGHT);
        assert_eq!(slots[2].x, 0);
    }

    #[test]
    fn test_card_grid_drops_what_does_not_fit() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(card_grid(area, 3).len(), 1);
        assert!(card_grid(Rect::new(0, 0, 40, 3), 3).is_empty());
        assert!(card_grid(area, 0).is_empty());
    }

    #[test]
    fn test_header_slots_fit_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = compute_layout(area);
        assert_eq!(layout.auth_button.width, 11);
        assert_eq!(layout.header_search.width, 28);
        assert!(layout.auth_button.right() <= area.right());
        assert_eq!(layout.status_bar.y, 39);
        assert!(hero_contains(&layout));
    }

    fn hero_contains(layout: &AppLayout) -> bool {
        layout.hero.intersection(layout.start_button) == layout.start_button
            && layout.start_button.width == START_BUTTON_WIDTH
    }
}
