use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Direction;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;

const PLACEHOLDERS: [(&str, &str); 3] = [
    ("Category", "e.g. 食費"),
    ("Amount", "e.g. 1200"),
    ("Date", "YYYY-MM-DD"),
];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for field in FormField::all() {
        let focused = app.form_focus == *field;
        let editing = focused && app.input_mode == InputMode::Editing;
        let pointer = if focused { " ▸ " } else { "   " };

        let line = match field {
            FormField::Category | FormField::Amount | FormField::Date => {
                let value = match field {
                    FormField::Category => &app.form.category,
                    FormField::Amount => &app.form.amount,
                    _ => &app.form.date,
                };
                let shown = if editing { &app.edit_buffer } else { value };
                let mut spans = vec![
                    Span::styled(pointer, pointer_style(focused)),
                    Span::styled(format!("{:<10}", field.label()), label_style(focused)),
                ];
                if shown.is_empty() && !editing {
                    spans.push(Span::styled(placeholder(field), theme::dim_style()));
                } else {
                    spans.push(Span::styled(shown.clone(), theme::normal_style()));
                }
                if editing {
                    spans.push(Span::styled("▏", Style::default().fg(theme::YELLOW)));
                }
                Line::from(spans)
            }
            FormField::Direction => {
                let (expense_style, income_style) = match app.form.direction {
                    Direction::Expense => (
                        theme::expense_style().add_modifier(Modifier::BOLD),
                        theme::dim_style(),
                    ),
                    Direction::Income => (
                        theme::dim_style(),
                        theme::income_style().add_modifier(Modifier::BOLD),
                    ),
                };
                let expense_mark = if app.form.direction == Direction::Expense {
                    "◉"
                } else {
                    "○"
                };
                let income_mark = if app.form.direction == Direction::Income {
                    "◉"
                } else {
                    "○"
                };
                Line::from(vec![
                    Span::styled(pointer, pointer_style(focused)),
                    Span::styled(format!("{:<10}", field.label()), label_style(focused)),
                    Span::styled(format!("{expense_mark} Expense"), expense_style),
                    Span::styled("   ", theme::dim_style()),
                    Span::styled(format!("{income_mark} Income"), income_style),
                ])
            }
            FormField::Submit => {
                let style = if focused {
                    theme::selected_style().add_modifier(Modifier::BOLD)
                } else {
                    theme::dim_style()
                };
                Line::from(vec![
                    Span::styled(pointer, pointer_style(focused)),
                    Span::styled(field.label(), style),
                ])
            }
        };

        lines.push(line);
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "   Enter edits a field, Space flips the type,",
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        "   Enter on [ Add ] saves the entry.",
        theme::dim_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" New entry ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn pointer_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        theme::dim_style()
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::dim_style()
    }
}

fn placeholder(field: &FormField) -> &'static str {
    PLACEHOLDERS
        .iter()
        .find(|(label, _)| *label == field.label())
        .map(|(_, hint)| *hint)
        .unwrap_or("")
}
