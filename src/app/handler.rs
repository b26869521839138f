use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::components::SearchInput;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::QueryChanged(query) => {
            state.set_query(query);
            vec![]
        }
        AppEvent::Tick => {
            state.refresh_clock();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::HeaderSearch | Focus::HomeSearch => {
            if let Some(input) = state.focused_search_mut() {
                edit_search(input, key);
            }
        }
        Focus::AuthButton => {
            if is_activate(key) {
                state.auth.handle_auth_click();
            }
        }
        Focus::StartButton => {
            if is_activate(key) {
                state.set_focus(Focus::HomeSearch);
            }
        }
    }
    vec![]
}

fn is_activate(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

fn edit_search(input: &mut SearchInput, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => input.delete_word_back(),
            KeyCode::Char('u') => input.clear(),
            KeyCode::Char('a') => input.move_home(),
            KeyCode::Char('e') => input.move_end(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let pos = Position::new(mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.viewport);

    if app_layout.auth_button.contains(pos) {
        state.set_focus(Focus::AuthButton);
        state.auth.handle_auth_click();
    } else if app_layout.header_search.contains(pos) {
        state.set_focus(Focus::HeaderSearch);
    } else if app_layout.start_button.contains(pos) {
        state.set_focus(Focus::HomeSearch);
    } else if app_layout.home_search.contains(pos) {
        state.set_focus(Focus::HomeSearch);
    }
    vec![]
}
