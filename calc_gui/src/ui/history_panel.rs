//! History Panel (Right)
//!
//! Most recent evaluation first. Clicking an entry puts its result back on
//! the display.

use iced::widget::{button, column, row, scrollable, text, Space};
use iced::{Element, Length, Padding};

use calc_core::history::History;
use calc_core::Command;

use crate::Message;

/// Render the history list
pub fn view_history(history: &History) -> Element<'_, Message> {
    let header = row![
        text("History").size(14),
        Space::new().width(Length::Fill),
        button(text("Clear").size(11))
            .on_press_maybe((!history.is_empty()).then_some(Message::Command(Command::ClearHistory)))
            .style(button::text)
            .padding(Padding::from([2, 6])),
    ];

    let mut entries = column![].spacing(2);
    if history.is_empty() {
        entries = entries.push(text("No calculations yet").size(12).color([0.5, 0.5, 0.5]));
    }
    for (index, entry) in history.iter_recent().enumerate() {
        entries = entries.push(
            button(text(entry.display()).size(13))
                .on_press(Message::Command(Command::RecallHistory(index)))
                .style(button::text)
                .width(Length::Fill),
        );
    }

    column![header, scrollable(entries).height(Length::Fill)]
        .spacing(6)
        .into()
}
