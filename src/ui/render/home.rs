use super::recipe_card::recipe_list;
use super::Frame;
use crate::recipe::CATEGORIES;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the home view: category strip, recommended recipes and the load
/// more row.
///
pub fn home(frame: &mut Frame, size: Rect, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    category_strip(frame, chunks[0], state);
    let recipes_active = *state.current_focus() == Focus::Recipes;
    recipe_list(frame, chunks[1], state, "今日推荐", recipes_active);

    if state.is_loading() {
        frame.render_widget(
            spinner::widget(state, "AI 大厨正在为您设计菜谱...", chunks[2].height),
            chunks[2],
        );
    } else if state.can_load_more() {
        let theme = state.get_theme();
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[m] ", styling::accent_style(theme)),
            Span::styled("加载更多食谱", styling::secondary_text_style(theme)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}

fn category_strip(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Categories;
    let mut spans = Vec::new();
    for (i, category) in CATEGORIES.iter().enumerate() {
        let style = if category.id == state.get_active_category_id() {
            styling::active_chip_style(theme)
        } else if focused && i == state.current_category_index() {
            styling::current_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(
            format!(" {} {} ", category.icon, category.name),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, focused))
        .title(Span::styled(" 热门分类 ", styling::active_block_title_style(theme)));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), size);
}
