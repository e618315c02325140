//! Display (Top)
//!
//! Displays:
//! - Angle unit, INV and memory indicators
//! - The display string, right-aligned, red while showing the error marker

use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::{Calculator, DisplayState};

use crate::Message;

/// Render the display readout
pub fn view_display(calc: &Calculator) -> Element<'_, Message> {
    let indicator = |label: &'static str, on: bool| {
        let color = if on { [0.2, 0.4, 0.8] } else { [0.75, 0.75, 0.75] };
        text(label).size(11).color(color)
    };

    let status = row![
        indicator(calc.angle_unit().label(), true),
        indicator("INV", calc.shift()),
        indicator("M", calc.memory().is_some()),
        Space::new().width(Length::Fill),
    ]
    .spacing(8);

    let readout = match calc.state() {
        DisplayState::Entering => text(calc.display()).size(32),
        DisplayState::Error => text(calc.display()).size(32).color([0.8, 0.2, 0.2]),
    };

    container(column![status, container(readout).align_right(Length::Fill)].spacing(4))
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
