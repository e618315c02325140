//! # Keypad GUI Application
//!
//! Graphical calculator built with Iced. Runs natively and in the browser
//! (WASM + WebGPU).
//!
//! The window shows the display readout, the keypad for the configured
//! variant, and the recent-history shortcuts. Buttons and physical keys both
//! send a [`Command`] to the one [`Calculator`] the app owns.
//!
//! The keyboard listener is a window-level subscription that only exists
//! while the calculator is active (its window focused). Iced tears the
//! subscription down as soon as [`App::subscription`] stops returning it, so
//! no handler outlives a deactivation.

mod ui;

use iced::widget::{column, container, row, rule};
use iced::{event, keyboard, window, Element, Event, Length, Subscription};
use tracing::debug;

use calc_core::{command_for_key, Calculator, CalculatorSettings, Command, Key, Keypad};

/// Messages handled by [`App::update`]
#[derive(Debug, Clone)]
pub enum Message {
    /// Button activation or recognized key press
    Command(Command),
    /// The calculator window gained (`true`) or lost focus
    Activated(bool),
}

/// GUI state
pub struct App {
    calculator: Calculator,
    keypad: Keypad,
    active: bool,
}

impl App {
    pub fn new(settings: &CalculatorSettings) -> Self {
        App {
            calculator: Calculator::with_settings(settings),
            keypad: Keypad::for_variant(settings.variant),
            active: true,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Command(command) => {
                debug!(?command, "command");
                self.calculator.apply(command);
            }
            Message::Activated(active) => {
                debug!(active, "activation changed");
                self.active = active;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let calc = &self.calculator;

        let left = column![
            ui::display::view_display(calc),
            ui::keypad_panel::view_keypad(&self.keypad, calc.shift(), calc.angle_unit()),
        ]
        .spacing(8)
        .width(Length::FillPortion(3));

        let right = container(ui::history_panel::view_history(calc.history())).width(Length::FillPortion(2));

        container(row![left, rule::vertical(1), right].spacing(8))
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let focus = event::listen_with(focus_event);
        if self.active {
            Subscription::batch([focus, event::listen_with(keyboard_event)])
        } else {
            focus
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

/// Window focus changes, always listened to
fn focus_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Focused) => Some(Message::Activated(true)),
        Event::Window(window::Event::Unfocused) => Some(Message::Activated(false)),
        _ => None,
    }
}

/// Key presses not already consumed by a widget
fn keyboard_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            modified_key,
            modifiers,
            ..
        }) => command_for_key(to_key(&modified_key, modifiers)).map(Message::Command),
        _ => None,
    }
}

/// Reduce an Iced key to the platform-neutral key
pub fn to_key(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Key {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return Key::Other;
    }
    match key {
        keyboard::Key::Named(keyboard::key::Named::Enter) => Key::Enter,
        keyboard::Key::Named(keyboard::key::Named::Backspace) => Key::Backspace,
        keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
        keyboard::Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    }
}

fn run(settings: CalculatorSettings) -> iced::Result {
    iced::application(move || App::new(&settings), App::update, App::view)
        .subscription(App::subscription)
        .window_size((760.0, 620.0))
        .run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use calc_core::{load_settings, AngleUnit, CalculatorSettings, Variant};

    #[derive(Debug, Parser)]
    #[command(name = "calc_gui", version, about = "Keypad calculator")]
    pub struct Args {
        /// Settings file (JSON)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Start in radians instead of degrees
        #[arg(long)]
        pub radians: bool,

        /// Show the basic keypad instead of the scientific one
        #[arg(long)]
        pub basic: bool,
    }

    pub fn resolve_settings(args: &Args) -> anyhow::Result<CalculatorSettings> {
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
        info!(?settings, "settings resolved");
        Ok(settings)
    }

    /// Initializes the tracing subscriber.
    ///
    /// Default: INFO, can be overridden with RUST_LOG
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,iced=warn"));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let args = native::Args::parse();
    native::init_tracing();
    let settings = native::resolve_settings(&args)?;

    run(settings).map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();
    run(CalculatorSettings::default())
}
