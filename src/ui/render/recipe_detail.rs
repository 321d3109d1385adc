use super::Frame;
use crate::recipe::Recipe;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the recipe detail overlay on top of whatever view is visible.
///
pub fn recipe_detail(frame: &mut Frame, size: Rect, state: &State) {
    if let Some(recipe) = state.get_selected_recipe() {
        let theme = state.get_theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::block_border_style(theme, true))
            .style(styling::normal_text_style(theme).bg(theme.surface.to_color()))
            .title(Span::styled(
                " 食谱详情 ",
                styling::active_block_title_style(theme),
            ));
        let paragraph = Paragraph::new(detail_lines(recipe, theme, state.is_favorite(&recipe.id)))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.get_detail_scroll(), 0));
        frame.render_widget(Clear, size);
        frame.render_widget(paragraph, size);
    }
}

fn section<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(title, styling::heading_style(theme)))
}

fn detail_lines<'a>(recipe: &'a Recipe, theme: &Theme, favorite: bool) -> Vec<Line<'a>> {
    let favorite_marker = if favorite {
        Span::styled("  ♥ 已收藏", styling::favorite_style(theme))
    } else {
        Span::styled("  ♡ 收藏 (f)", styling::muted_text_style(theme))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(recipe.title.as_str(), styling::banner_style(theme)),
            favorite_marker,
        ]),
        Line::from(vec![
            Span::styled(
                format!("🔥 {} 卡", recipe.calories),
                styling::accent_style(theme),
            ),
            Span::styled(
                format!("  ⏱ {} 分钟  {}", recipe.time_minutes, recipe.difficulty.label()),
                styling::secondary_text_style(theme),
            ),
        ]),
        Line::from(Span::styled(
            format!("分类: {}", recipe.category),
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            recipe.description.as_str(),
            styling::secondary_text_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("蛋白质 ", styling::muted_text_style(theme)),
            Span::styled(format!("{}g", recipe.macros.protein), styling::tag_style(theme)),
            Span::styled("   碳水 ", styling::muted_text_style(theme)),
            Span::styled(format!("{}g", recipe.macros.carbs), styling::tag_style(theme)),
            Span::styled("   脂肪 ", styling::muted_text_style(theme)),
            Span::styled(format!("{}g", recipe.macros.fat), styling::tag_style(theme)),
        ]),
        Line::from(""),
        section("所需食材", theme),
    ];
    lines.extend(recipe.ingredients.iter().map(|ingredient| {
        Line::from(vec![
            Span::styled("  • ", styling::tag_style(theme)),
            Span::styled(ingredient.as_str(), styling::normal_text_style(theme)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(section("烹饪步骤", theme));
    lines.extend(recipe.steps.iter().enumerate().map(|(i, step)| {
        Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), styling::accent_style(theme)),
            Span::styled(step.as_str(), styling::normal_text_style(theme)),
        ])
    }));
    if let Some(url) = &recipe.image_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("图片: {}", url),
            styling::muted_text_style(theme),
        )));
    }
    lines
}
