//! Application messages

use iced::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// A window frame is about to be drawn
    Frame(Instant),
    /// Run another draw pass on the indicator
    Redraw,
    /// Flip whether a redraw removes the previous dots
    ToggleClearOnRedraw,
    /// Persist the current settings
    SaveSettings,
}
