use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::ui::app::{App, FormField, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{clamp_scroll, move_cursor};

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Editing => handle_editing_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move(app, 1),
        KeyCode::Char('k') | KeyCode::Up => handle_move(app, -1),
        KeyCode::Char('1') => switch_screen(app, ledger, Screen::Summary),
        KeyCode::Char('2') => switch_screen(app, ledger, Screen::Ledger),
        KeyCode::Char('3') => switch_screen(app, ledger, Screen::Add),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, ledger, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, ledger, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app, ledger)?,
        KeyCode::Esc => handle_escape(app, ledger),
        KeyCode::Char('H') => app.cycle_month(ledger, 1),
        KeyCode::Char('L') => app.cycle_month(ledger, -1),
        KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Char('-')
            if app.screen == Screen::Add && app.form_focus == FormField::Direction =>
        {
            app.form.direction = app.form.direction.toggled();
        }
        KeyCode::Char('g') if app.screen == Screen::Ledger => {
            app.ledger_index = 0;
            app.ledger_scroll = 0;
        }
        KeyCode::Char('G') if app.screen == Screen::Ledger => {
            app.ledger_index = app.rows.len().saturating_sub(1);
            clamp_scroll(
                app.ledger_index,
                &mut app.ledger_scroll,
                app.visible_rows.max(1),
            );
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_move(app, (app.visible_rows / 2) as i32);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_move(app, -((app.visible_rows / 2) as i32));
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let value = std::mem::take(&mut app.edit_buffer);
            match app.form_focus {
                FormField::Category => app.form.category = value,
                FormField::Amount => app.form.amount = value,
                FormField::Date => app.form.date = value,
                _ => {}
            }
            app.input_mode = InputMode::Normal;
            // Step to the next field so repeated Enter walks the form.
            app.form_focus = app.form_focus.next();
        }
        KeyCode::Esc => {
            app.edit_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.edit_buffer.push(c);
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, ledger: &Ledger, screen: Screen) {
    app.screen = screen;
    app.refresh(ledger);
    app.set_status(format!("{screen}"));
}

fn handle_move(app: &mut App, delta: i32) {
    match app.screen {
        Screen::Ledger => {
            move_cursor(&mut app.ledger_index, delta, app.rows.len());
            clamp_scroll(
                app.ledger_index,
                &mut app.ledger_scroll,
                app.visible_rows.max(1),
            );
        }
        Screen::Add => {
            app.form_focus = if delta > 0 {
                app.form_focus.next()
            } else {
                app.form_focus.prev()
            };
        }
        Screen::Summary => {}
    }
}

fn handle_enter(app: &mut App, ledger: &mut Ledger) -> Result<()> {
    if app.screen != Screen::Add {
        return Ok(());
    }
    match app.form_focus {
        field if field.is_text() => {
            app.edit_buffer = match field {
                FormField::Category => app.form.category.clone(),
                FormField::Amount => app.form.amount.clone(),
                _ => app.form.date.clone(),
            };
            app.input_mode = InputMode::Editing;
        }
        FormField::Direction => {
            app.form.direction = app.form.direction.toggled();
        }
        FormField::Submit => {
            app.submit_form(ledger)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_escape(app: &mut App, ledger: &Ledger) {
    if app.screen == Screen::Ledger && app.month_filter.is_some() {
        app.set_month(ledger, None);
    } else {
        app.status_message.clear();
    }
}
