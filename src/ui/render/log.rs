use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(" Log (d: hide) ")
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, false));

    let rows = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_log_buffer()
        .recent(rows)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry,
                styling::secondary_text_style(theme),
            )]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);

    frame.render_widget(list, size);
}
