use crate::components::SearchInput;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEARCH_ICON: &str = "⌕ ";

pub fn render(frame: &mut Frame, area: Rect, input: &SearchInput, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt_width = SEARCH_ICON.width();
    let text_width = (inner.width as usize).saturating_sub(prompt_width);
    let cursor_column = input.cursor_column();
    let (visible, skipped) = scroll_window(input.value(), cursor_column, text_width);

    let text = if input.value().is_empty() {
        Span::styled(input.placeholder(), Theme::placeholder())
    } else {
        Span::styled(visible, Theme::input_text())
    };
    let line = Line::from(vec![Span::styled(SEARCH_ICON, Theme::search_icon()), text]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = prompt_width.saturating_add(cursor_column.saturating_sub(skipped));
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(offset);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Tail of `text` to draw so the cursor column stays inside `width` cells,
/// with the number of columns scrolled off to the left.
fn scroll_window(text: &str, cursor_column: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", cursor_column);
    }
    let skip = cursor_column.saturating_add(1).saturating_sub(width);
    let mut col = 0;
    for (i, ch) in text.char_indices() {
        if col >= skip {
            return (&text[i..], col);
        }
        col += ch.width().unwrap_or(0);
    }
    ("", col)
}
