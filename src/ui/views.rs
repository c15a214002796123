//! Text views of recipes: list tables, the detail page and titled panels.

use ratatui::layout::Constraint;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

use super::render::{render_widget, wrap_text};
use crate::logic::{calculate_difficulty, ingredient_count, parse_nutritional_info};
use crate::state::{NutritionSummary, Recipe};
use crate::util::{format_ingredient_amount, instruction_steps};

/// Narrowest layout the views are drawn at.
pub const MIN_WIDTH: u16 = 40;

/// Clamp a `usize` into `u16` for buffer geometry.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Placeholder for missing values.
fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// What: A box that hugs its single-line text, like a heading.
///
/// Inputs:
/// - `text`: Heading text
/// - `max_width`: Upper bound for the box width
#[must_use]
pub fn title_panel(text: &str, max_width: u16) -> Vec<String> {
    let width = to_u16(text.width() + 4).clamp(6, max_width.max(6));
    render_widget(
        Paragraph::new(format!(" {text}")).block(Block::bordered()),
        width,
        3,
    )
}

/// What: A full-width bordered panel with a title and wrapped body lines.
///
/// Inputs:
/// - `title`: Border title
/// - `body`: Lines to wrap inside the panel
/// - `width`: Panel width including borders
#[must_use]
pub fn text_panel(title: &str, body: &[String], width: u16) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let inner = usize::from(width - 2);
    let lines: Vec<Line> = body
        .iter()
        .flat_map(|l| wrap_text(l, inner))
        .map(Line::from)
        .collect();
    let height = to_u16(lines.len() + 2);
    render_widget(
        Paragraph::new(lines).block(Block::bordered().title(format!(" {title} "))),
        width,
        height,
    )
}

/// What: Numbered table of recipes for selection.
///
/// Inputs:
/// - `recipes`: Recipes in display order (callers sort by difficulty first)
/// - `width`: Table width including borders
///
/// Output:
/// - Bordered table with number, title, likes, ingredient count and difficulty.
#[must_use]
pub fn recipe_table(recipes: &[Recipe], width: u16) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let header = Row::new(vec!["#", "Recipe", "Likes", "Ingredients", "Difficulty"]);
    let rows: Vec<Row> = recipes
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                (i + 1).to_string(),
                r.title.clone(),
                or_na(r.aggregate_likes),
                format!("{} ingredients", ingredient_count(r)),
                calculate_difficulty(r).to_string(),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(10),
    ];
    let height = to_u16(recipes.len() + 3);
    render_widget(
        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(Block::bordered()),
        width,
        height,
    )
}

/// Key/value lines of the recipe's basic facts.
#[must_use]
pub fn info_lines(recipe: &Recipe) -> Vec<String> {
    let cuisines = if recipe.cuisines.is_empty() {
        "N/A".to_string()
    } else {
        recipe.cuisines.join(", ")
    };
    vec![
        format!("Time:       {} minutes", or_na(recipe.ready_in_minutes)),
        format!("Servings:   {}", or_na(recipe.servings)),
        format!("Cuisine:    {cuisines}"),
        format!("Source:     {}", or_na(recipe.source_name.as_deref())),
        format!("Difficulty: {}", calculate_difficulty(recipe)),
    ]
}

/// Body lines of the health panel.
#[must_use]
pub fn health_lines(summary: &NutritionSummary) -> Vec<String> {
    let metrics = summary
        .health_metrics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        format!("Calories: {}", summary.calories),
        format!("Score: {}/100", summary.nutrition_score),
        format!("Metrics: {}", if metrics.is_empty() { "-" } else { metrics.as_str() }),
    ]
}

/// What: Bordered two-column ingredient table.
#[must_use]
pub fn ingredients_table(recipe: &Recipe, width: u16) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let rows: Vec<Row> = recipe
        .extended_ingredients
        .iter()
        .map(|ing| {
            let amount = format_ingredient_amount(ing.amount);
            let amount = format!("{amount} {}", ing.unit).trim().to_string();
            Row::new(vec![amount, ing.name.clone()])
        })
        .collect();
    let widths = [Constraint::Length(16), Constraint::Fill(1)];
    let height = to_u16(rows.len() + 3);
    render_widget(
        Table::new(rows, widths)
            .header(Row::new(vec!["Amount", "Name"]))
            .column_spacing(1)
            .block(Block::bordered().title(" Ingredients ")),
        width,
        height,
    )
}

/// Numbered instruction steps, or a placeholder line.
#[must_use]
pub fn instruction_lines(recipe: &Recipe) -> Vec<String> {
    let steps = instruction_steps(recipe.instructions.as_deref());
    if steps.is_empty() {
        return vec!["No instructions available.".to_string()];
    }
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect()
}

/// What: Full detail page for one recipe.
///
/// Details:
/// - Heading, facts, the health panel when nutrition data exists, the
///   ingredient table and the numbered instructions.
#[must_use]
pub fn recipe_details(recipe: &Recipe, width: u16) -> Vec<String> {
    let mut out = title_panel(&recipe.title, width);
    out.extend(info_lines(recipe));
    if let Some(nutrition) = &recipe.nutrition {
        let summary = parse_nutritional_info(nutrition);
        out.extend(text_panel("Health Info", &health_lines(&summary), width));
    }
    out.extend(ingredients_table(recipe, width));
    out.extend(text_panel("Instructions", &instruction_lines(recipe), width));
    out
}
