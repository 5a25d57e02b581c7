//! Declarative bounce cycle
//!
//! An [`AnimationCycle`] describes how one dot's `y` changes over a repeating
//! period. It holds no clock; renderers sample it with the time elapsed since
//! the cycle was attached.

use super::easing::CubicBezier;
use super::spring::{SpringParams, solve_spring};

/// Fraction of the step duration at which the fall begins.
///
/// The fall overlaps the tail of the rise for a softer handoff at the apex.
pub const FALL_BEGIN_FRACTION: f64 = 0.5;

/// How a segment moves between its endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    Curve(CubicBezier),
    Spring(SpringParams),
}

/// One keyframe segment of a cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: f32,
    pub to: f32,
    /// Offset from the start of the period, in seconds
    pub begin: f64,
    pub duration: f64,
    pub timing: Timing,
}

impl Segment {
    /// Value `elapsed` seconds after the segment began, held once it ends
    fn value_at(&self, elapsed: f64) -> f32 {
        let from = self.from as f64;
        let to = self.to as f64;
        if self.duration <= 0.0 {
            return self.to;
        }

        let elapsed = elapsed.min(self.duration);
        let value = match self.timing {
            Timing::Curve(curve) => from + (to - from) * curve.ease(elapsed / self.duration),
            Timing::Spring(params) => solve_spring(from, to, &params, elapsed),
        };
        value as f32
    }
}

/// Which half of the bounce a dot is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Rising,
    Falling,
}

/// Rise-then-fall animation of a dot's `y`, repeating without end
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCycle {
    pub rise: Segment,
    pub fall: Segment,
    /// Length of one full cycle, including the end pause
    pub period: f64,
}

impl AnimationCycle {
    /// Build the bounce used by every dot
    ///
    /// The dot rises from `baseline_y` to `top_y` with ease-in-ease-out, then
    /// springs back down, repeating every `2 * step_duration + end_delay`.
    pub fn bounce(baseline_y: f32, top_y: f32, step_duration: f64, end_delay: f64) -> Self {
        Self {
            rise: Segment {
                from: baseline_y,
                to: top_y,
                begin: 0.0,
                duration: step_duration,
                timing: Timing::Curve(CubicBezier::EASE_IN_EASE_OUT),
            },
            fall: Segment {
                from: top_y,
                to: baseline_y,
                begin: step_duration * FALL_BEGIN_FRACTION,
                duration: step_duration,
                timing: Timing::Spring(SpringParams::FALL),
            },
            period: step_duration * 2.0 + end_delay,
        }
    }

    /// Whether the cycle can be sampled at all
    pub fn is_degenerate(&self) -> bool {
        !(self.period.is_finite() && self.period > 0.0)
    }

    /// Time within the current period, or `None` before attachment
    fn local_time(&self, elapsed: f64) -> Option<f64> {
        if self.is_degenerate() || elapsed < 0.0 {
            return None;
        }
        Some(elapsed % self.period)
    }

    /// The segment in control at `local` time, later segments winning
    fn active_segment(&self, local: f64) -> Option<&Segment> {
        [&self.fall, &self.rise]
            .into_iter()
            .find(|segment| local >= segment.begin)
    }

    /// Animated `y` at `elapsed` seconds after attachment.
    ///
    /// Returns `None` when the cycle does not affect the dot, in which case
    /// the dot is drawn at its model position.
    pub fn sample(&self, elapsed: f64) -> Option<f32> {
        let local = self.local_time(elapsed)?;
        let segment = self.active_segment(local)?;
        Some(segment.value_at(local - segment.begin))
    }

    /// Current phase at `elapsed` seconds after attachment
    pub fn phase(&self, elapsed: f64) -> Option<Phase> {
        let local = self.local_time(elapsed)?;
        if local >= self.fall.begin {
            Some(Phase::Falling)
        } else {
            Some(Phase::Rising)
        }
    }
}
