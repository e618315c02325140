//! # Keypad CLI Application
//!
//! Terminal front-end for the calculator. Without arguments it opens a
//! Ratatui TUI; with `--eval` it evaluates one expression, prints the
//! resulting display and exits.
//!
//! ```text
//! calc_cli                         # interactive TUI, degrees
//! calc_cli --radians --basic       # TUI, radians, basic keypad
//! calc_cli --eval "sin(90)"        # prints 1
//! calc_cli --eval "1/0" --json     # prints a JSON report, exits with 1
//! ```

mod keys;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calc_core::{load_settings, AngleUnit, CalcError, Calculator, CalculatorSettings, DisplayState, Variant};

#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about = "Keypad calculator for the terminal")]
struct Args {
    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in radians instead of degrees
    #[arg(long)]
    radians: bool,

    /// Show the basic keypad instead of the scientific one
    #[arg(long)]
    basic: bool,

    /// Evaluate an expression and print the result instead of opening the TUI
    #[arg(short, long, value_name = "EXPRESSION")]
    eval: Option<String>,

    /// With --eval, print a JSON report
    #[arg(long, requires = "eval")]
    json: bool,
}

/// Outcome of a one-shot evaluation (for scripting / JSON output)
#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    expression: &'a str,
    display: &'a str,
    angle_unit: AngleUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CalcError>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // The TUI owns the terminal; only log there when explicitly asked to.
    if args.eval.is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_tracing();
    }

    let settings = resolve_settings(&args)?;
    info!(?settings, "settings resolved");

    match &args.eval {
        Some(expression) => match run_eval(expression, &settings, args.json) {
            DisplayState::Entering => Ok(ExitCode::SUCCESS),
            DisplayState::Error => Ok(ExitCode::FAILURE),
        },
        None => {
            tui::run(&settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Settings file first, then command line overrides
fn resolve_settings(args: &Args) -> anyhow::Result<CalculatorSettings> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };

    if args.radians {
        settings.angle_unit = AngleUnit::Radians;
    }
    if args.basic {
        settings.variant = Variant::Basic;
    }

    Ok(settings)
}

/// Evaluate once and print; returns the final display state
fn run_eval(expression: &str, settings: &CalculatorSettings, json: bool) -> DisplayState {
    let mut calc = Calculator::with_settings(settings);
    calc.insert(expression);
    let error = calc.evaluate_expression().err();

    if json {
        let report = EvalReport {
            expression,
            display: calc.display(),
            angle_unit: calc.angle_unit(),
            error,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", e),
        }
    } else {
        println!("{}", calc.display());
        if let Some(err) = error {
            eprintln!("{}", err);
        }
    }

    calc.state()
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG=debug` shows every evaluation; the default is WARN.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
