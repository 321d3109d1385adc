use super::recipe_card::recipe_list;
use super::Frame;
use crate::recipe::CATEGORIES;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render the explore view: every category with its query, then the search
/// results or a spinner while a search is running.
///
pub fn explore(frame: &mut Frame, size: Rect, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CATEGORIES.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(size);

    category_list(frame, chunks[0], state);

    let recipes_active = *state.current_focus() == Focus::Recipes;
    if state.is_loading() {
        let theme = state.get_theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::block_border_style(theme, recipes_active));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(
            spinner::widget(state, "AI 正在搜索美味...", inner.height),
            inner,
        );
    } else {
        recipe_list(frame, chunks[1], state, "搜索结果", recipes_active);
    }
}

fn category_list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Categories;
    let items: Vec<ListItem> = CATEGORIES
        .iter()
        .map(|category| {
            let name_style = if category.id == state.get_active_category_id() {
                styling::active_block_title_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {}", category.icon, category.name), name_style),
                Span::raw("  "),
                Span::styled(category.query, styling::muted_text_style(theme)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.current_category_index()));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::block_border_style(theme, focused))
                .title(Span::styled(
                    " 发现更多 🌍 ",
                    styling::active_block_title_style(theme),
                )),
        )
        .highlight_style(styling::current_list_item_style(theme))
        .highlight_symbol("▎");
    frame.render_stateful_widget(list, size, &mut list_state);
}
