use super::{explore, favorites, footer, header, home, log, nav, recipe_detail, Frame};
use crate::state::{State, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

const LOG_PANEL_HEIGHT: u16 = 8;

/// Render all blocks.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let background = state.get_theme().background.to_color();
    frame.render_widget(Block::default().style(Style::default().bg(background)), size);

    let view = *state.current_view();
    let show_search = matches!(view, View::Home | View::Explore);
    let mut constraints = vec![
        Constraint::Length(if show_search { 5 } else { 2 }),
        Constraint::Min(5),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, chunks[0], state, show_search);
    match view {
        View::Home => home(frame, chunks[1], state),
        View::Explore => explore(frame, chunks[1], state),
        View::Favorites => favorites(frame, chunks[1], state),
    }
    let mut next = 2;
    if state.is_log_visible() {
        log(frame, chunks[next], state);
        next += 1;
    }
    nav(frame, chunks[next], state);
    footer(frame, chunks[next + 1], state);

    if state.has_selected_recipe() {
        recipe_detail(frame, centered_rect(80, 85, size), state);
    }
}

/// Return a rect centered in the area, sized by percentages.
///
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc::channel;

    fn draw(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        // Wide characters leave blank cells behind them
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .split_whitespace()
            .collect()
    }

    #[test]
    fn home_shows_header_categories_and_seed_recipes() {
        let screen = draw(&mut State::default());
        for text in [
            "轻食记",
            "今天也要好好吃饭",
            "热门分类",
            "高效减脂",
            "今日推荐",
            "青柠手撕鸡胸肉",
            "无米番茄烩饭",
            "加载更多食谱",
            "首页",
        ] {
            assert!(screen.contains(text), "missing '{}'", text);
        }
    }

    #[test]
    fn home_shows_loading_line_instead_of_load_more() {
        let (tx, _rx) = channel();
        let mut state = State::new(tx, LogBuffer::new(), crate::ui::Theme::default());
        state.load_recipes("低热量高饱腹感的减脂餐", false);
        let screen = draw(&mut state);
        assert!(screen.contains("AI大厨正在为您设计菜谱..."));
        assert!(!screen.contains("加载更多食谱"));
    }

    #[test]
    fn explore_lists_category_queries() {
        let mut state = State::default();
        state.set_view(View::Explore);
        let screen = draw(&mut state);
        assert!(screen.contains("发现更多"));
        assert!(screen.contains("适合宿舍只用电煮锅做的简单美食"));
        assert!(screen.contains("搜索结果"));
    }

    #[test]
    fn explore_shows_spinner_while_searching() {
        let (tx, _rx) = channel();
        let mut state = State::new(tx, LogBuffer::new(), crate::ui::Theme::default());
        state.submit_search("豆腐");
        let screen = draw(&mut state);
        assert!(screen.contains("AI正在搜索美味..."));
    }

    #[test]
    fn empty_favorites_shows_message() {
        let mut state = State::default();
        state.set_view(View::Favorites);
        let screen = draw(&mut state);
        assert!(screen.contains("我的收藏"));
        assert!(screen.contains("还没有收藏任何食谱哦"));
    }

    #[test]
    fn favorites_lists_only_favorited_recipes() {
        let mut state = State::default();
        state.toggle_favorite("seed-2");
        state.set_view(View::Favorites);
        let screen = draw(&mut state);
        assert!(screen.contains("无米番茄烩饭"));
        assert!(!screen.contains("青柠手撕鸡胸肉"));
    }

    #[test]
    fn detail_overlay_shows_sections() {
        let mut state = State::default();
        state.open_current_recipe();
        let screen = draw(&mut state);
        for text in ["青柠手撕鸡胸肉", "蛋白质", "碳水", "脂肪", "所需食材", "烹饪步骤"] {
            assert!(screen.contains(text), "missing '{}'", text);
        }
    }

    #[test]
    fn renders_on_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut state = State::default();
        state.toggle_log();
        state.open_current_recipe();
        terminal.draw(|frame| all(frame, &mut state)).unwrap();
    }
}
