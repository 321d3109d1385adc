use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for a block, depending on whether it has focus.
///
pub fn block_border_style(theme: &Theme, active: bool) -> Style {
    if active {
        Style::default().fg(theme.border_active.to_color())
    } else {
        Style::default().fg(theme.border_normal.to_color())
    }
}

pub fn active_block_title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the highlighted list item.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the active category chip.
///
pub fn active_chip_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.surface.to_color())
        .bg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

/// Return the style for hints and disabled content.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn accent_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent.to_color())
}

pub fn favorite_style(theme: &Theme) -> Style {
    Style::default().fg(theme.favorite.to_color())
}

pub fn tag_style(theme: &Theme) -> Style {
    Style::default().fg(theme.secondary.to_color())
}
