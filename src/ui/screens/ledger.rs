use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::categorize;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_signed_yen, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.rows.is_empty() {
        let msg = if app.month_filter.is_some() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No entries for {}", app.filter_label()),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "H/L cycles months, :month clears the filter",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("The ledger is empty", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press 3 for the entry form or use :add <date> <category> <amount>",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Ledger (0) ", theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(app.ledger_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let amount = format_signed_yen(txn.signed_amount());
            let category = format!(
                "{} {}",
                categorize::marker(txn.category()),
                truncate(txn.category(), 28)
            );

            let style = if i == app.ledger_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("  {}", txn.date().format("%Y-%m-%d"))),
                Cell::from(category),
                Cell::from(Span::styled(amount, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let title = format!(
        " Ledger ({}) — {} ",
        app.rows.len(),
        app.filter_label()
    );
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::title_style())),
    );

    f.render_widget(table, area);
}
