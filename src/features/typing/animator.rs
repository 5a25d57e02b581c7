//! Draw pass for the three-dot indicator
//!
//! Each draw lays out three dots, adds a layer for each, and schedules the
//! shared bounce on every dot with a start delay of `index * dot_delay`.

use iced::{Point, Rectangle};

use super::config::IndicatorConfig;
use super::cycle::AnimationCycle;
use super::layer::{LayerId, LayerTree};
use super::layout;
use super::scheduler::Scheduler;

/// Number of dots in the indicator
pub const DOT_COUNT: usize = 3;

/// Result of one draw pass
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPass {
    /// Left, center and right layers
    pub layers: [LayerId; DOT_COUNT],
    /// Bounce shared by all three dots
    pub cycle: AnimationCycle,
    /// Start delay of each dot, in seconds
    pub start_delays: [f64; DOT_COUNT],
}

/// Lays out and animates the dots for one indicator
#[derive(Debug, Clone, Copy)]
pub struct DotAnimator<'a> {
    config: &'a IndicatorConfig,
}

impl<'a> DotAnimator<'a> {
    pub fn new(config: &'a IndicatorConfig) -> Self {
        Self { config }
    }

    /// Horizontal dot positions within `bounds`
    pub fn compute_layout(&self, bounds: Rectangle) -> [f32; DOT_COUNT] {
        layout::compute_layout(bounds, &self.config.margins, self.config.dot_size)
    }

    /// Bounce between `baseline_y` and `top_y` using the configured timing
    pub fn build_cycle(&self, baseline_y: f32, top_y: f32) -> AnimationCycle {
        AnimationCycle::bounce(
            baseline_y,
            top_y,
            self.config.step_duration,
            self.config.end_delay,
        )
    }

    /// Attach `cycle` to `layer` once `start_delay` has elapsed
    pub fn schedule<S: Scheduler<LayerTree>>(
        &self,
        scheduler: &mut S,
        layer: LayerId,
        cycle: AnimationCycle,
        start_delay: f64,
    ) {
        tracing::debug!("Scheduling bounce for {:?} in {:.3}s", layer, start_delay);
        scheduler.schedule(
            start_delay,
            Box::new(move |tree: &mut LayerTree, due: f64| {
                if !tree.attach(layer, cycle, due) {
                    tracing::debug!("Dropping bounce for removed layer {:?}", layer);
                }
            }),
        );
    }

    /// Lay out three dots in `bounds` and start their staggered bounce.
    ///
    /// Previously drawn dots are kept unless `clear_on_redraw` is set, so
    /// repeated draws accumulate layers.
    pub fn draw<S: Scheduler<LayerTree>>(
        &self,
        bounds: Rectangle,
        tree: &mut LayerTree,
        scheduler: &mut S,
    ) -> DrawPass {
        let config = self.config;
        if config.clear_on_redraw {
            tree.remove_all();
        }

        let xs = self.compute_layout(bounds);
        let ys = layout::resting_y(bounds, &config.margins, config.dot_size);
        let range = layout::bounce_range(bounds, &config.margins, config.dot_size);
        let cycle = self.build_cycle(range.baseline, range.top);

        let layers: [LayerId; DOT_COUNT] = std::array::from_fn(|i| {
            tree.add_sublayer(Point::new(xs[i], ys[i]), config.dot_size, config.dot_color)
        });
        let start_delays: [f64; DOT_COUNT] = std::array::from_fn(|i| config.start_delay(i));

        for (layer, delay) in layers.iter().zip(start_delays) {
            self.schedule(scheduler, *layer, cycle.clone(), delay);
        }

        tracing::info!(
            "Drew typing indicator in {:?}: {} layers, period {:.3}s",
            bounds,
            tree.len(),
            cycle.period
        );

        DrawPass {
            layers,
            cycle,
            start_delays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::typing::cycle::Phase;
    use crate::features::typing::scheduler::TimerQueue;

    fn bounds() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        }
    }

    fn attached_at(tree: &LayerTree, id: LayerId) -> Option<f64> {
        tree.get(id)
            .and_then(|layer| layer.animation.as_ref())
            .map(|a| a.attached_at)
    }

    #[test]
    fn test_reference_draw() {
        let config = IndicatorConfig::default();
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        let pass = animator.draw(bounds(), &mut tree, &mut timers);

        let positions: Vec<_> = tree.layers().iter().map(|l| l.position).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(8.0, 34.0),
                Point::new(46.0, 34.0),
                Point::new(92.0, 42.0),
            ]
        );
        assert_eq!(pass.start_delays[0], 0.0);
        assert!((pass.start_delays[1] - 0.1).abs() < 1e-9);
        assert!((pass.start_delays[2] - 0.2).abs() < 1e-9);
        assert_eq!(timers.len(), 3);
    }

    #[test]
    fn test_start_offsets_follow_delays() {
        let config = IndicatorConfig::default();
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::starting_at(10.0);

        let pass = animator.draw(bounds(), &mut tree, &mut timers);
        let [left, center, right] = pass.layers;

        // Nothing attaches synchronously
        assert_eq!(attached_at(&tree, left), None);

        timers.advance_to(10.0, &mut tree);
        assert_eq!(attached_at(&tree, left), Some(10.0));
        assert_eq!(attached_at(&tree, center), None);

        // A late frame still attaches at the exact due time
        timers.advance_to(10.5, &mut tree);
        assert_eq!(attached_at(&tree, center), Some(10.0 + config.dot_delay));
        assert_eq!(attached_at(&tree, right), Some(10.0 + config.dot_delay * 2.0));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_all_dots_share_period() {
        let config = IndicatorConfig {
            step_duration: 0.3,
            end_delay: 0.4,
            ..Default::default()
        };
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        animator.draw(bounds(), &mut tree, &mut timers);
        timers.advance_to(1.0, &mut tree);

        for layer in tree.layers() {
            let animation = layer.animation.as_ref().unwrap();
            assert!((animation.cycle.period - 1.0).abs() < 1e-9);
            assert_eq!(animation.cycle.rise.duration, 0.3);
            assert!((animation.cycle.fall.begin - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_right_dot_bounces_in_inset_rect() {
        let config = IndicatorConfig::default();
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        let pass = animator.draw(bounds(), &mut tree, &mut timers);
        let right = pass.layers[2];

        // Rests on the outer edge until its bounce starts
        let layer = tree.get(right).unwrap();
        assert_eq!(layer.presented_position(0.0).y, 42.0);

        timers.advance_to(0.2, &mut tree);
        let layer = tree.get(right).unwrap();
        assert_eq!(layer.presented_position(0.2).y, 34.0);
        assert_eq!(layer.presented_position(0.45).y, 8.0);
    }

    #[test]
    fn test_wave_phases() {
        let config = IndicatorConfig::default();
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        animator.draw(bounds(), &mut tree, &mut timers);
        timers.advance_to(0.3, &mut tree);

        // Fall begins at 0.25s after each dot's own start
        let phases: Vec<_> = tree.layers().iter().map(|l| l.phase(0.3)).collect();
        assert_eq!(
            phases,
            vec![Some(Phase::Falling), Some(Phase::Rising), Some(Phase::Rising)]
        );
    }

    #[test]
    fn test_redraw_accumulates_layers() {
        let config = IndicatorConfig::default();
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        for n in 1..=4 {
            animator.draw(bounds(), &mut tree, &mut timers);
            assert_eq!(tree.len(), 3 * n);
        }
        timers.advance_to(1.0, &mut tree);
        assert!(tree.layers().iter().all(|l| l.animation.is_some()));
    }

    #[test]
    fn test_clear_on_redraw_keeps_three_layers() {
        let config = IndicatorConfig {
            clear_on_redraw: true,
            ..Default::default()
        };
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        let first = animator.draw(bounds(), &mut tree, &mut timers);
        let second = animator.draw(bounds(), &mut tree, &mut timers);
        assert_eq!(tree.len(), 3);

        // Pending bounces for the discarded dots are dropped
        timers.advance_to(1.0, &mut tree);
        assert!(tree.get(first.layers[0]).is_none());
        assert!(
            second
                .layers
                .iter()
                .all(|id| tree.get(*id).unwrap().animation.is_some())
        );
    }

    #[test]
    fn test_degenerate_config_is_accepted() {
        let config = IndicatorConfig {
            dot_size: -4.0,
            step_duration: 0.0,
            dot_delay: -1.0,
            end_delay: 0.0,
            ..Default::default()
        };
        let animator = DotAnimator::new(&config);
        let mut tree = LayerTree::new();
        let mut timers = TimerQueue::new();

        animator.draw(bounds(), &mut tree, &mut timers);
        timers.advance_to(0.0, &mut tree);

        // Dots attach but stay at their model positions
        for layer in tree.layers() {
            assert!(layer.animation.is_some());
            assert_eq!(layer.presented_position(0.5), layer.position);
        }
    }
}
