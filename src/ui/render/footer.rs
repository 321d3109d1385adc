use super::Frame;
use crate::state::{State, View};
use crate::ui::ColorSpec;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label, its background and the key hints for the current
/// input mode.
///
fn controls(state: &State) -> (&'static str, ColorSpec, String) {
    let theme = state.get_theme();
    if state.is_search_mode() {
        (
            "SEARCH:",
            theme.footer_search,
            " Type to search, Enter: submit, Ctrl+U: clear, Esc: cancel".to_string(),
        )
    } else if state.has_selected_recipe() {
        (
            "RECIPE:",
            theme.footer_recipe,
            " j/k: scroll, f: favorite, y: copy shopping list, Esc: back, q: quit".to_string(),
        )
    } else {
        let mut hints = vec![
            "1/2/3 [/]: switch view",
            "Tab: switch focus",
            "j/k h/l: navigate",
            "Enter: select",
        ];
        if *state.current_view() != View::Favorites {
            hints.push("/: search");
        }
        if *state.current_view() == View::Home {
            hints.push("m: load more");
        }
        hints.extend(["f: favorite", "d: log", "q: quit"]);
        ("NORMAL:", theme.footer_normal, format!(" {}", hints.join(", ")))
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, label_bg, controls_text) = controls(state);

    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(label_bg.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
