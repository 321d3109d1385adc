use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the bottom navigation bar with the current view highlighted.
///
pub fn nav(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut spans = Vec::new();
    for (i, view) in View::ALL.iter().enumerate() {
        let style = if view == state.current_view() {
            styling::active_chip_style(theme)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.label()), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        size,
    );
}
