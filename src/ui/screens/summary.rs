use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_signed_yen, group_digits};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(34), Constraint::Length(24)])
        .split(area);

    render_totals(f, chunks[0], app);
    render_months(f, chunks[1], app);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let balance_style = if app.totals.balance < Decimal::ZERO {
        theme::expense_style().add_modifier(Modifier::BOLD)
    } else {
        theme::income_style().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Income    ", theme::dim_style()),
            Span::styled(
                format!("+{}円", group_digits(app.totals.income)),
                theme::income_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Expenses  ", theme::dim_style()),
            Span::styled(
                format!("-{}円", group_digits(app.totals.expenses)),
                theme::expense_style(),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", "─".repeat(area.width.saturating_sub(4) as usize)),
            theme::dim_style(),
        )),
        Line::from(vec![
            Span::styled("  Balance   ", theme::dim_style()),
            Span::styled(format_signed_yen(app.totals.balance), balance_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  {} of {} entries shown ({})",
                app.rows.len(),
                app.total_count,
                app.filter_label()
            ),
            theme::dim_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Summary — {} ", app.filter_label()),
            theme::title_style(),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_months(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::with_capacity(app.months.len() + 1);

    let all_style = if app.month_filter.is_none() {
        theme::selected_style()
    } else {
        theme::normal_style()
    };
    items.push(ListItem::new(Span::styled(" all time", all_style)));

    for month in &app.months {
        let style = if app.month_filter.as_deref() == Some(month.as_str()) {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        items.push(ListItem::new(Span::styled(format!(" {month}"), style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Months (H/L) ", theme::title_style()));
    f.render_widget(List::new(items).block(block), area);
}
