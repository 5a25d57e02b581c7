//! Theme colors and container styles for the demo host

use iced::color;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Backdrop behind the indicator
pub const BACKDROP: Color = color!(0x555555);

/// Surface the indicator is drawn on
pub const CARD: Color = color!(0xffffff);

/// Hint text on the backdrop
pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);

/// Full-window backdrop
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKDROP)),
        text_color: Some(TEXT_SECONDARY),
        ..Default::default()
    }
}

/// White card hosting the indicator
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD)),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}
