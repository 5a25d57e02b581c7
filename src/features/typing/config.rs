//! Typing indicator configuration
//!
//! Values are taken as-is. Non-positive sizes and durations are accepted and
//! simply produce degenerate drawings.

use iced::{Color, Size};
use serde::{Deserialize, Serialize};

use super::layout::Insets;

/// Default size when no explicit width/height is given
pub const INTRINSIC_SIZE: Size = Size {
    width: 50.0,
    height: 36.0,
};

/// Platform "secondary label" gray
pub const SECONDARY_LABEL: Color = Color {
    r: 60.0 / 255.0,
    g: 60.0 / 255.0,
    b: 67.0 / 255.0,
    a: 0.6,
};

/// Appearance and timing of the three dots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Diameter of each dot
    pub dot_size: f32,
    /// Duration of each piece of the animation, in seconds
    pub step_duration: f64,
    /// Delay between each of the three dots starting, in seconds
    pub dot_delay: f64,
    /// Pause at the end before the whole animation repeats, in seconds
    pub end_delay: f64,
    #[serde(with = "color_hex")]
    pub dot_color: Color,
    /// Insets from the edges of the drawable rectangle
    pub margins: Insets,
    /// Remove previously drawn dots before each redraw
    pub clear_on_redraw: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            dot_size: 8.0,
            step_duration: 0.5,
            dot_delay: 0.1,
            end_delay: 0.2,
            dot_color: SECONDARY_LABEL,
            margins: Insets::uniform(8.0),
            clear_on_redraw: false,
        }
    }
}

impl IndicatorConfig {
    /// Start delay for the dot at `index` (0 = left)
    pub fn start_delay(&self, index: usize) -> f64 {
        self.dot_delay * index as f64
    }
}

/// Serialize colors as `#rrggbbaa`
pub mod color_hex {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b, a] = color.into_rgba8();
        serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| de::Error::custom(format!("invalid color: {}", s)))
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn parse(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let alpha = if hex.len() == 8 { byte(6)? } else { 255 };

        Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            alpha as f32 / 255.0,
        ))
    }
}
