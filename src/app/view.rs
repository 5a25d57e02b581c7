//! Demo layout: the indicator on a white card, centered on a dark backdrop

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::{App, Message};
use crate::ui::primitives::view_typing_indicator;
use crate::ui::theme;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let size = self.settings.indicator_size();

        let card = container(view_typing_indicator(&self.layers, self.now, size))
            .style(theme::card);

        let hint = text(format!(
            "{} {} layers · R redraw · C clear on redraw ({}) · S save",
            self.phase_marks(),
            self.layers.len(),
            if self.settings.indicator.clear_on_redraw {
                "on"
            } else {
                "off"
            }
        ))
        .size(12);

        let mut content = column![card, hint]
            .spacing(16)
            .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            content = content.push(text(status.clone()).size(11));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(theme::backdrop)
            .into()
    }
}
