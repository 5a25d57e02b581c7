//! Demo application hosting one typing indicator

mod message;
mod update;
mod view;

use iced::keyboard;
use iced::time::Instant;
use iced::{Point, Rectangle, Subscription, Task};

use crate::features::Settings;
use crate::features::typing::{
    DOT_COUNT, DotAnimator, LayerId, LayerTree, Phase, Scheduler, TimerQueue,
};
pub use message::Message;

/// Application state
pub struct App {
    pub settings: Settings,
    /// Dots drawn so far, with their attached bounces
    pub layers: LayerTree,
    /// Pending bounce attachments, clocked in seconds since `epoch`
    pub timers: TimerQueue<LayerTree>,
    pub epoch: Instant,
    /// Clock time of the last frame
    pub now: f64,
    /// Layers added by the most recent draw pass
    pub current: Option<[LayerId; DOT_COUNT]>,
    /// Last save result shown under the indicator
    pub status: Option<String>,
}

impl App {
    /// Create the app and run the first draw pass
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut app = Self {
            settings,
            layers: LayerTree::new(),
            timers: TimerQueue::new(),
            epoch: Instant::now(),
            now: 0.0,
            current: None,
            status: None,
        };
        app.draw();

        (app, Task::none())
    }

    /// Move the timer clock to `instant`, attaching any bounces now due
    pub fn sync_clock(&mut self, instant: Instant) -> usize {
        let now = instant.saturating_duration_since(self.epoch).as_secs_f64();
        let fired = self.timers.advance_to(now, &mut self.layers);
        self.now = self.timers.now();
        fired
    }

    /// Draw pass over the indicator's full bounds, scheduled from the clock's current time
    pub fn draw(&mut self) {
        let bounds = Rectangle::new(Point::ORIGIN, self.settings.indicator_size());
        let animator = DotAnimator::new(&self.settings.indicator);
        let pass = animator.draw(bounds, &mut self.layers, &mut self.timers);
        tracing::debug!(
            "Draw at {:.3}s: period {:.3}s, start delays {:?}, {} attachment(s) pending",
            self.timers.now(),
            pass.cycle.period,
            pass.start_delays,
            self.timers.len()
        );
        self.current = Some(pass.layers);
    }

    /// One mark per dot of the latest draw: rising, falling or waiting
    pub fn phase_marks(&self) -> String {
        self.current
            .iter()
            .flatten()
            .map(|id| {
                match self.layers.get(*id).and_then(|layer| layer.phase(self.now)) {
                    Some(Phase::Rising) => '↑',
                    Some(Phase::Falling) => '↓',
                    None => '·',
                }
            })
            .collect()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let frames = iced::window::frames().map(Message::Frame);

        let keys = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => key_message(&key),
            _ => None,
        });

        Subscription::batch([frames, keys])
    }
}

/// Demo key bindings
fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(Message::Redraw),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("c") => {
            Some(Message::ToggleClearOnRedraw)
        }
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(Message::SaveSettings),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::Duration;

    fn app() -> App {
        App::new(Settings::default()).0
    }

    #[test]
    fn test_boot_draws_three_dots() {
        let app = app();
        assert_eq!(app.layers.len(), 3);
        assert_eq!(app.timers.len(), 3);
    }

    #[test]
    fn test_frames_attach_bounces() {
        let mut app = app();
        let at = app.epoch + Duration::from_millis(500);
        let _ = app.update(Message::Frame(at));

        assert!((app.now - 0.5).abs() < 1e-9);
        assert!(app.timers.is_empty());
        assert!(app.layers.layers().iter().all(|l| l.animation.is_some()));
    }

    #[test]
    fn test_redraw_accumulates_until_toggled() {
        let mut app = app();
        let _ = app.update(Message::Redraw);
        assert_eq!(app.layers.len(), 6);

        let _ = app.update(Message::ToggleClearOnRedraw);
        assert!(app.settings.indicator.clear_on_redraw);
        let _ = app.update(Message::Redraw);
        assert_eq!(app.layers.len(), 3);
    }

    #[test]
    fn test_redraw_schedules_from_current_time() {
        let mut app = app();
        let later = Instant::now();
        app.epoch = later.checked_sub(Duration::from_secs(1)).unwrap();

        // No frame since boot: the redraw itself must catch the clock up
        let _ = app.update(Message::Redraw);
        assert!(app.now >= 1.0);
        assert!(app.timers.now() >= 1.0);

        let [left, center, _] = app.current.unwrap();
        let _ = app.update(Message::Frame(later + Duration::from_secs(1)));
        let attached = |id| {
            app.layers
                .get(id)
                .and_then(|layer| layer.animation.as_ref())
                .map(|a| a.attached_at)
                .unwrap()
        };
        assert!(attached(left) >= 1.0);
        assert!((attached(center) - attached(left) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_phase_marks() {
        let mut app = app();
        assert_eq!(app.phase_marks(), "···");

        // Left starts at 0s, center 0.1s, right 0.2s; fall begins 0.25s in
        let _ = app.update(Message::Frame(app.epoch + Duration::from_millis(300)));
        assert_eq!(app.phase_marks(), "↓↑↑");
    }

    #[test]
    fn test_key_bindings() {
        let key = |c: &str| keyboard::Key::Character(c.into());
        assert!(matches!(key_message(&key("r")), Some(Message::Redraw)));
        assert!(matches!(key_message(&key("R")), Some(Message::Redraw)));
        assert!(matches!(
            key_message(&key("c")),
            Some(Message::ToggleClearOnRedraw)
        ));
        assert!(matches!(key_message(&key("s")), Some(Message::SaveSettings)));
        assert!(key_message(&key("x")).is_none());
    }
}
