mod header;
mod home;
pub mod layout;
mod property_card;
mod search_box;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, &app_layout, state);
    home::render(frame, &app_layout, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
