//! Message handling

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(instant) => {
                let fired = self.sync_clock(instant);
                if fired > 0 && self.timers.is_empty() {
                    tracing::trace!("All bounces attached at {:.3}s", self.now);
                }
            }
            Message::Redraw => {
                self.sync_clock(Instant::now());
                self.draw();
            }
            Message::ToggleClearOnRedraw => {
                let indicator = &mut self.settings.indicator;
                indicator.clear_on_redraw = !indicator.clear_on_redraw;
                tracing::info!("clear_on_redraw = {}", indicator.clear_on_redraw);
            }
            Message::SaveSettings => match self.settings.save() {
                Ok(path) => {
                    tracing::info!("Saved settings to {}", path.display());
                    self.status = Some(format!("Saved to {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to save settings: {}", e);
                    self.status = Some(format!("Save failed: {}", e));
                }
            },
        }

        Task::none()
    }
}
