use super::recipe_card::recipe_list;
use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "我的收藏 ❤️";

/// Render favorited recipes, or a hint when there are none.
///
pub fn favorites(frame: &mut Frame, size: Rect, state: &mut State) {
    if !state.visible_recipes().is_empty() {
        recipe_list(frame, size, state, TITLE, true);
        return;
    }

    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, false))
        .title(Span::styled(
            format!(" {} ", TITLE),
            styling::active_block_title_style(theme),
        ));
    let mut lines: Vec<Line> = (0..size.height.saturating_sub(3) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(
        "还没有收藏任何食谱哦",
        styling::muted_text_style(theme),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        size,
    );
}
