use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::form::EntryForm;
use crate::ledger::Ledger;
use crate::models::Direction;
use crate::ui::app::{App, Screen};
use crate::ui::util::format_signed_yen;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit kakeibo", cmd_quit, r);
    register_command!("quit", "Quit kakeibo", cmd_quit, r);
    register_command!("s", "Go to Summary", cmd_summary, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("l", "Go to Ledger", cmd_ledger, r);
    register_command!("ledger", "Go to Ledger", cmd_ledger, r);
    register_command!(
        "a",
        "Open the entry form, or quick-add (e.g. :a 2024-05-10 食費 -1200)",
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Open the entry form, or quick-add (e.g. :add 2024-05-10 食費 -1200)",
        cmd_add,
        r
    );
    register_command!("m", "Filter by month (e.g. :m 2024-05), no arg for all", cmd_month, r);
    register_command!(
        "month",
        "Filter by month (e.g. :month 2024-05), no arg for all",
        cmd_month,
        r
    );
    register_command!("months", "List the months that have entries", cmd_months, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    app.refresh(ledger);
    Ok(())
}

fn cmd_ledger(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Ledger;
    app.refresh(ledger);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// No args: open the entry form. With args: one-line add in the original
/// sign-encoded shape — a negative amount is an expense.
fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.screen = Screen::Add;
        app.refresh(ledger);
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :add <date> <category> <amount>");
        return Ok(());
    }
    let date = parts[0];

    // Last token is the amount; the category may contain spaces.
    let rest: Vec<&str> = parts[1].rsplitn(2, ' ').collect();
    if rest.len() < 2 {
        app.set_status("Usage: :add <date> <category> <amount>");
        return Ok(());
    }
    let amount = rest[0];
    let category = rest[1];

    // An unparseable amount gets a placeholder direction; submit() rejects
    // it before the direction can matter.
    let direction = Decimal::from_str(amount)
        .map(Direction::from_signed)
        .unwrap_or(Direction::Expense);
    let form = EntryForm {
        category: category.to_string(),
        amount: amount.to_string(),
        date: date.to_string(),
        direction,
    };

    match form.submit() {
        Ok(txn) => {
            let note = format!(
                "Added {} {}",
                txn.category(),
                format_signed_yen(txn.signed_amount())
            );
            ledger.add(txn)?;
            app.refresh(ledger);
            app.set_status(note);
        }
        Err(err) => app.set_status(err.to_string()),
    }

    Ok(())
}

fn cmd_month(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_month(ledger, None);
        return Ok(());
    }

    // Accept "2024-05" as well as the shorthands "05" and "5" (current or
    // filtered year implied).
    let month = if args.len() <= 2 {
        let year = app.month_filter.as_ref().map_or_else(
            || chrono::Local::now().format("%Y").to_string(),
            |m| m[..4].to_string(),
        );
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    // Re-derive the key from the parsed date so "2024-5" still lands on
    // the zero-padded "2024-05".
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        app.set_month(ledger, Some(date.format("%Y-%m").to_string()));
    } else {
        app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-05)");
    }

    Ok(())
}

fn cmd_months(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.refresh(ledger);
    if app.months.is_empty() {
        app.set_status("No entries yet");
    } else {
        app.set_status(format!("Months with entries: {}", app.months.join(", ")));
    }
    Ok(())
}
