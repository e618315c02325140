//! Keypad Panel
//!
//! One button per keypad key, laid out row by row. Labels depend on the
//! shift flag (sin/asin...) and the angle unit (DEG/RAD).

use iced::widget::{button, column, row, text};
use iced::{Element, Length};

use calc_core::{AngleUnit, Command, Keypad, KeypadKey};

use crate::Message;

const KEY_HEIGHT: f32 = 44.0;

/// Render the keypad grid
pub fn view_keypad(keypad: &Keypad, shift: bool, angle_unit: AngleUnit) -> Element<'_, Message> {
    let mut grid = column![].spacing(4);

    for keys in keypad.rows() {
        let mut line = row![].spacing(4);
        for key in keys {
            line = line.push(view_key(key, shift, angle_unit));
        }
        grid = grid.push(line);
    }

    grid.into()
}

fn view_key(key: &KeypadKey, shift: bool, angle_unit: AngleUnit) -> Element<'_, Message> {
    let style = match key.command() {
        Command::Evaluate => button::primary,
        Command::ClearAll | Command::DeleteOne => button::danger,
        _ => button::secondary,
    };

    // Shift key stays highlighted while active
    let style = if shift && matches!(key.command(), Command::ToggleShift) {
        button::success
    } else {
        style
    };

    button(
        text(key.label(shift, angle_unit))
            .size(16)
            .width(Length::Fill)
            .center(),
    )
    .on_press(Message::Command(key.command().clone()))
    .style(style)
    .width(Length::Fill)
    .height(Length::Fixed(KEY_HEIGHT))
    .into()
}
