use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the app title, and the search box when the view offers search.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State, show_search: bool) {
    let theme = state.get_theme().clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(size);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(" 轻食记 🌿", styling::banner_style(&theme))),
        Line::from(Span::styled(
            " 今天也要好好吃饭",
            styling::muted_text_style(&theme),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    if !show_search || chunks[1].height < 3 {
        return;
    }

    let active = state.is_search_mode();
    let input = state.get_search_input();
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::block_border_style(&theme, active))
            .title(Span::styled(" 🔍 ", styling::active_block_title_style(&theme))),
    );
    input.set_style(styling::normal_text_style(&theme));
    input.set_placeholder_style(styling::muted_text_style(&theme));
    input.set_cursor_line_style(Style::default());
    input.set_cursor_style(if active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(input.widget(), chunks[1]);
}
