//! Ratatui front-end.
//!
//! ```text
//! ┌ DEG INV M ─────────────────┐┌ History ─────────┐
//! │                     sin(90 ││ F1 2+2 = 4       │
//! └────────────────────────────┘│ F2 ...           │
//! [INV][DEG][MC][MR][M+][M−]    │                  │
//! ...keypad rows...             │                  │
//! ```
//!
//! The terminal is put into raw/alternate-screen mode by [`TerminalGuard`]
//! and restored when the guard drops, including on early returns.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use calc_core::{Calculator, CalculatorSettings, DisplayState, Keypad};

use crate::keys::{action_for, UiAction};

/// Owns the terminal while the TUI is running
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn acquire() -> std::io::Result<Self> {
        let terminal = ratatui::try_init()?;
        debug!("terminal acquired");
        Ok(TerminalGuard { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("terminal released");
    }
}

/// TUI state: the calculator plus keypad focus
pub struct App {
    calculator: Calculator,
    keypad: Keypad,
    focus: (usize, usize),
    should_quit: bool,
}

impl App {
    pub fn new(settings: &CalculatorSettings) -> Self {
        App {
            calculator: Calculator::with_settings(settings),
            keypad: Keypad::for_variant(settings.variant),
            focus: (0, 0),
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Calculator(command) => self.calculator.apply(command),
            UiAction::MoveFocus(rows, cols) => self.move_focus(rows, cols),
            UiAction::Activate => self.activate(),
            UiAction::Quit => self.should_quit = true,
            UiAction::None => {}
        }
    }

    fn move_focus(&mut self, rows: i32, cols: i32) {
        let keypad_rows = self.keypad.rows();
        let last_row = keypad_rows.len().saturating_sub(1);
        let row = offset(self.focus.0, rows, last_row);
        let last_col = keypad_rows[row].len().saturating_sub(1);
        let col = offset(self.focus.1, cols, last_col);
        self.focus = (row, col);
    }

    fn activate(&mut self) {
        let (row, col) = self.focus;
        if let Some(key) = self.keypad.rows().get(row).and_then(|r| r.get(col)) {
            self.calculator.apply(key.command().clone());
        }
    }
}

/// Move `value` by `delta`, clamped to `0..=max`
fn offset(value: usize, delta: i32, max: usize) -> usize {
    let moved = value as i64 + i64::from(delta);
    moved.clamp(0, max as i64) as usize
}

/// Run the TUI until the user quits
pub fn run(settings: &CalculatorSettings) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::acquire()?;
    let mut app = App::new(settings);

    while !app.should_quit {
        guard.terminal.draw(|frame| render(&app, frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle(action_for(key));
            }
        }
    }

    Ok(())
}

fn render(app: &App, frame: &mut Frame) {
    let [main, help] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(main);
    let [display_area, keypad_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(left);

    render_display(app, frame, display_area);
    render_keypad(app, frame, keypad_area);
    render_history(app, frame, right);

    let hint = "type to enter · Enter = · Esc AC · ⌫ DEL · arrows+Space keypad · F1-F10 history · q quit";
    frame.render_widget(Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)), help);
}

fn render_display(app: &App, frame: &mut Frame, area: Rect) {
    let calc = app.calculator();

    let mut status = vec![calc.angle_unit().label()];
    if calc.shift() {
        status.push("INV");
    }
    if calc.memory().is_some() {
        status.push("M");
    }

    let style = match calc.state() {
        DisplayState::Entering => Style::default().add_modifier(Modifier::BOLD),
        DisplayState::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let display = Paragraph::new(calc.display())
        .alignment(Alignment::Right)
        .style(style)
        .block(Block::bordered().title(format!(" {} ", status.join(" "))));
    frame.render_widget(display, area);
}

fn render_keypad(app: &App, frame: &mut Frame, area: Rect) {
    let calc = app.calculator();
    let rows = app.keypad.rows();
    if rows.is_empty() {
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Length(3); rows.len()]).split(area);
    for (r, (keys, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let count = keys.len().max(1) as u32;
        let key_areas = Layout::horizontal(vec![Constraint::Ratio(1, count); keys.len()]).split(*row_area);

        for (c, (key, key_area)) in keys.iter().zip(key_areas.iter()).enumerate() {
            let style = if app.focus == (r, c) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let button = Paragraph::new(key.label(calc.shift(), calc.angle_unit()))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered());
            frame.render_widget(button, *key_area);
        }
    }
}

fn render_history(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .calculator()
        .history()
        .iter_recent()
        .enumerate()
        .map(|(i, entry)| ListItem::new(format!("F{} {}", i + 1, entry.display())))
        .collect();

    let list = List::new(items).block(Block::bordered().title(" History "));
    frame.render_widget(list, area);
}
