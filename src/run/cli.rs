use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::categorize;
use crate::form::EntryForm;
use crate::ledger::Ledger;
use crate::models::Direction;
use crate::summary::{available_months, filter_by_month, Totals};
use crate::ui::util::{format_signed_yen, group_digits};

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], ledger),
        "list" | "ls" => cli_list(&args[2..], ledger),
        "summary" | "s" => cli_summary(&args[2..], ledger),
        "months" => cli_months(ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("kakeibo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("kakeibo — local-only household ledger");
    println!();
    println!("Usage: kakeibo [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch interactive TUI");
    println!("  add <date> <category> <amount>  Record an entry (date is YYYY-MM-DD;");
    println!("                                  a negative amount is an expense)");
    println!("    --expense | --income          Force the direction regardless of sign");
    println!("  list [YYYY-MM]                  Print entries, optionally one month");
    println!("  summary [YYYY-MM]               Print income/expenses/balance");
    println!("  months                          List the months that have entries");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

fn cli_add(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();
    if positional.len() < 3 {
        anyhow::bail!("Usage: kakeibo add <date> <category> <amount> [--expense|--income]");
    }

    let date = positional[0];
    // The category may contain spaces; the amount is the last token.
    let amount = positional[positional.len() - 1];
    let category = positional[1..positional.len() - 1].join(" ");

    let direction = if args.iter().any(|a| a == "--income") {
        Direction::Income
    } else if args.iter().any(|a| a == "--expense") {
        Direction::Expense
    } else {
        // Sign encodes the direction; an unparseable amount gets a
        // placeholder that submit() rejects before it can matter.
        Decimal::from_str(amount)
            .map(Direction::from_signed)
            .unwrap_or(Direction::Expense)
    };

    let form = EntryForm {
        category,
        amount: amount.to_string(),
        date: date.to_string(),
        direction,
    };
    let txn = form.submit()?;
    let note = format!(
        "Added {} {} {} on {}",
        categorize::marker(txn.category()),
        txn.category(),
        format_signed_yen(txn.signed_amount()),
        txn.date().format("%Y-%m-%d"),
    );
    ledger.add(txn)?;
    println!("{note}");
    Ok(())
}

fn cli_list(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let month = args.first().filter(|a| !a.starts_with('-')).cloned();
    let rows = filter_by_month(ledger.transactions(), month.as_deref());

    if rows.is_empty() {
        match month {
            Some(m) => println!("No entries for {m}"),
            None => println!("The ledger is empty"),
        }
        return Ok(());
    }

    println!("{:<12} {:<24} Amount", "Date", "Category");
    println!("{}", "─".repeat(52));
    for txn in &rows {
        println!(
            "{:<12} {} {:<21} {}",
            txn.date().format("%Y-%m-%d"),
            categorize::marker(txn.category()),
            txn.category(),
            format_signed_yen(txn.signed_amount()),
        );
    }
    println!();
    println!("{} entries", rows.len());
    Ok(())
}

fn cli_summary(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let month = args.first().filter(|a| !a.starts_with('-')).cloned();
    let rows = filter_by_month(ledger.transactions(), month.as_deref());
    let totals = Totals::of(rows.iter().copied());

    let label = month.as_deref().unwrap_or("all time");
    println!("kakeibo — {label}");
    println!("{}", "─".repeat(40));
    println!("  Income:    +{}円", group_digits(totals.income));
    println!("  Expenses:  -{}円", group_digits(totals.expenses));
    println!("  Balance:   {}", format_signed_yen(totals.balance));
    println!("  Entries:   {}", rows.len());
    Ok(())
}

fn cli_months(ledger: &mut Ledger) -> Result<()> {
    let months = available_months(ledger.transactions());
    if months.is_empty() {
        println!("No entries yet");
        return Ok(());
    }

    for month in &months {
        let count = filter_by_month(ledger.transactions(), Some(month.as_str())).len();
        println!("{month}  {count} entries");
    }
    Ok(())
}
