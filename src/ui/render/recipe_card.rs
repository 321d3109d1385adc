use super::Frame;
use crate::recipe::Recipe;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::text_processing::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Build the lines of a recipe card. Disabled cards are drawn muted.
///
fn card_lines(
    recipe: &Recipe,
    theme: &Theme,
    favorite: bool,
    enabled: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let muted = styling::muted_text_style(theme);
    let pick = |style: Style| if enabled { style } else { muted };

    let marker = if favorite {
        Span::styled("♥ ", pick(styling::favorite_style(theme)))
    } else {
        Span::raw("  ")
    };
    let difficulty = format!("  {}", recipe.difficulty.label());
    let title_width = width.saturating_sub(2 + difficulty.chars().count() * 2);
    let title = Line::from(vec![
        marker,
        Span::styled(
            truncate_to_width(&recipe.title, title_width),
            pick(styling::heading_style(theme)),
        ),
        Span::styled(difficulty, pick(styling::accent_style(theme))),
    ]);

    let description = Line::from(Span::styled(
        format!("  {}", truncate_to_width(&recipe.description, width.saturating_sub(2))),
        pick(styling::secondary_text_style(theme)),
    ));

    let stats = Line::from(Span::styled(
        format!(
            "  🔥 {} kcal  ⏱ {} 分钟  💪 {}g 蛋白",
            recipe.calories, recipe.time_minutes, recipe.macros.protein
        ),
        pick(styling::normal_text_style(theme)),
    ));

    let tags = recipe
        .card_tags()
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ");
    let tags = Line::from(Span::styled(
        format!("  {}", truncate_to_width(&tags, width.saturating_sub(2))),
        pick(styling::tag_style(theme)),
    ));

    vec![title, description, stats, tags, Line::from("")]
}

/// Render the recipes listed by the current view as a selectable card list.
///
pub fn recipe_list(frame: &mut Frame, size: Rect, state: &mut State, title: &str, active: bool) {
    let theme = state.get_theme().clone();
    let enabled = state.cards_enabled();
    let width = size.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .visible_recipes()
        .into_iter()
        .map(|recipe| {
            ListItem::new(card_lines(
                recipe,
                &theme,
                state.is_favorite(&recipe.id),
                enabled,
                width,
            ))
        })
        .collect();

    let highlight = if enabled && active {
        styling::current_list_item_style(&theme)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::block_border_style(&theme, active))
                .title(Span::styled(
                    format!(" {} ", title),
                    styling::active_block_title_style(&theme),
                )),
        )
        .highlight_style(highlight)
        .highlight_symbol("▎");
    frame.render_stateful_widget(list, size, state.get_recipes_list_state());
}
