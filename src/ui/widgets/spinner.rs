use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered spinner line followed by the message, padded to sit in
/// the middle of an area with the given height.
///
pub fn widget<'a>(state: &State, message: &'a str, height: u16) -> Paragraph<'a> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines: Vec<Line> = (0..height.saturating_sub(1) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(frame, styling::active_block_title_style(theme)),
        Span::raw(" "),
        Span::styled(message, styling::secondary_text_style(theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}
