use anyhow::Result;

use crate::form::EntryForm;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::summary::{available_months, filter_by_month, Totals};
use crate::ui::util::{clamp_scroll, format_signed_yen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Summary,
    Ledger,
    Add,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Summary, Self::Ledger, Self::Add]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "Summary"),
            Self::Ledger => write!(f, "Ledger"),
            Self::Add => write!(f, "Add"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Entry-form fields in focus order; `Submit` is the add button at the
/// bottom of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Category,
    Amount,
    Date,
    Direction,
    Submit,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Category,
            Self::Amount,
            Self::Date,
            Self::Direction,
            Self::Submit,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Direction => "Type",
            Self::Submit => "[ Add ]",
        }
    }

    /// Fields that take typed text (as opposed to toggling or submitting).
    pub(crate) fn is_text(&self) -> bool {
        matches!(self, Self::Category | Self::Amount | Self::Date)
    }

    pub(crate) fn next(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + 1) % fields.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + fields.len() - 1) % fields.len()]
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Month filter and the snapshots derived from the ledger under it.
    pub(crate) month_filter: Option<String>,
    pub(crate) months: Vec<String>,
    pub(crate) rows: Vec<Transaction>,
    pub(crate) totals: Totals,
    pub(crate) total_count: usize,

    // Ledger screen cursor
    pub(crate) ledger_index: usize,
    pub(crate) ledger_scroll: usize,

    // Entry form
    pub(crate) form: EntryForm,
    pub(crate) form_focus: FormField,
    pub(crate) edit_buffer: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Summary,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            month_filter: None,
            months: Vec::new(),
            rows: Vec::new(),
            totals: Totals::default(),
            total_count: 0,

            ledger_index: 0,
            ledger_scroll: 0,

            form: EntryForm::new(),
            form_focus: FormField::Category,
            edit_buffer: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute every snapshot from the ledger: available months, the rows
    /// under the current filter, and the totals over exactly those rows.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.months = available_months(ledger.transactions());
        self.rows = filter_by_month(ledger.transactions(), self.month_filter.as_deref())
            .into_iter()
            .cloned()
            .collect();
        self.totals = Totals::of(&self.rows);
        self.total_count = ledger.len();

        if self.ledger_index >= self.rows.len() {
            self.ledger_index = self.rows.len().saturating_sub(1);
        }
        clamp_scroll(
            self.ledger_index,
            &mut self.ledger_scroll,
            self.visible_rows.max(1),
        );
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Label for the active filter, e.g. "2024-05" or "all time".
    pub(crate) fn filter_label(&self) -> &str {
        self.month_filter.as_deref().unwrap_or("all time")
    }

    pub(crate) fn set_month(&mut self, ledger: &Ledger, month: Option<String>) {
        self.month_filter = month;
        self.ledger_index = 0;
        self.ledger_scroll = 0;
        self.refresh(ledger);
        self.set_status(format!("Showing {}", self.filter_label()));
    }

    /// Step the filter through "all time" plus every available month.
    /// Positive delta moves toward older months.
    pub(crate) fn cycle_month(&mut self, ledger: &Ledger, delta: i32) {
        self.months = available_months(ledger.transactions());
        let stops = self.months.len() + 1;
        let current = match &self.month_filter {
            None => 0,
            Some(m) => self.months.iter().position(|x| x == m).map_or(0, |i| i + 1),
        };
        let next = (current as i32 + delta).rem_euclid(stops as i32) as usize;
        let month = if next == 0 {
            None
        } else {
            Some(self.months[next - 1].clone())
        };
        self.set_month(ledger, month);
    }

    /// Run the draft through validation and, if it holds, append the new
    /// transaction and reset the form. Invalid drafts only produce a status
    /// message — the ledger and the store are untouched.
    pub(crate) fn submit_form(&mut self, ledger: &mut Ledger) -> Result<()> {
        match self.form.submit() {
            Ok(txn) => {
                let note = format!(
                    "Added {} {}",
                    txn.category(),
                    format_signed_yen(txn.signed_amount())
                );
                ledger.add(txn)?;
                self.form.clear();
                self.form_focus = FormField::Category;
                self.refresh(ledger);
                self.set_status(note);
            }
            Err(err) => self.set_status(err.to_string()),
        }
        Ok(())
    }
}
