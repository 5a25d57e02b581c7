//! Spring settle for the falling segment
//!
//! Evaluated in closed form, so the fall can be sampled at any offset without
//! stepping a simulation. Stiffness is fixed at 100 and the fall is tuned
//! underdamped (damping 6, mass 0.5), which gives the small overshoot at the
//! baseline.
//!
//! Velocity is given relative to the travel distance `delta = to - from`:
//! `initial_velocity = 5` starts the dot at `5 * delta` per second toward the
//! target. With `v0 = initial_velocity * delta`:
//!
//! ```text
//! underdamped (damping^2 < 4 * mass * stiffness):
//!   wd = sqrt(4 * mass * stiffness - damping^2) / (2 * mass)
//!   decay = damping / (2 * mass)
//!   b = (decay * delta - v0) / wd
//!   y(t) = to - (delta * cos(wd * t) + b * sin(wd * t)) * e^(-decay * t)
//!
//! otherwise (treated as critically damped):
//!   w0 = sqrt(stiffness / mass)
//!   y(t) = to - (delta + (w0 * delta - v0) * t) * e^(-w0 * t)
//! ```

use std::f64::consts::E;

pub type Num = f64;

/// Spring parameters
///
/// `initial_velocity` is relative to the travel distance: 1.0 means the whole
/// distance per second, positive toward the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
    pub initial_velocity: Num,
}

impl SpringParams {
    /// Settle-back spring used when a dot falls
    pub const FALL: Self = Self {
        mass: 0.5,
        damping: 6.0,
        stiffness: 100.0,
        initial_velocity: 5.0,
    };

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Position of a spring released at `from` toward `to`, `t` seconds later
pub fn solve_spring(from: Num, to: Num, params: &SpringParams, t: Num) -> Num {
    let delta = to - from;
    if t <= 0.0 || delta == 0.0 {
        return if t <= 0.0 { from } else { to };
    }

    let v0 = params.initial_velocity * delta;
    let mass = params.mass;

    if params.is_overdamped() {
        let w0 = (params.stiffness / mass).sqrt();
        to - (delta + (w0 * delta - v0) * t) * E.powf(-w0 * t)
    } else {
        let wd = (4.0 * mass * params.stiffness - params.damping.powi(2)).sqrt() / (2.0 * mass);
        let decay = params.damping / (2.0 * mass);
        let b = (decay * delta - v0) / wd;
        to - (delta * (wd * t).cos() + b * (wd * t).sin()) * E.powf(-decay * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Numerical derivative step size
    const H: Num = 0.0001;

    #[test]
    fn test_fall_params() {
        let params = SpringParams::FALL;
        assert_eq!(params.damping, 6.0);
        assert_eq!(params.mass, 0.5);
        assert_eq!(params.initial_velocity, 5.0);
        assert!(!params.is_overdamped());
    }

    #[test]
    fn test_starts_at_from() {
        let params = SpringParams::FALL;
        assert_eq!(solve_spring(8.0, 34.0, &params, 0.0), 8.0);
        assert_eq!(solve_spring(8.0, 34.0, &params, -1.0), 8.0);
    }

    #[test]
    fn test_initial_velocity_is_relative_to_distance() {
        let params = SpringParams::FALL;
        let (from, to) = (8.0, 34.0);
        let v = (solve_spring(from, to, &params, H) - solve_spring(from, to, &params, 0.0)) / H;
        assert!((v - 5.0 * (to - from)).abs() < 1.0, "velocity was {}", v);
    }

    #[test]
    fn test_settles_at_target() {
        let params = SpringParams::FALL;
        let pos = solve_spring(8.0, 34.0, &params, 5.0);
        assert!((pos - 34.0).abs() < 0.01);
    }

    #[test]
    fn test_underdamped_overshoots() {
        let params = SpringParams::FALL;
        let max = (1..200)
            .map(|i| solve_spring(0.0, 10.0, &params, i as f64 * 0.005))
            .fold(f64::MIN, f64::max);
        assert!(max > 10.0);
    }

    #[test]
    fn test_overdamped_does_not_overshoot() {
        let params = SpringParams {
            mass: 1.0,
            damping: 100.0,
            stiffness: 100.0,
            initial_velocity: 0.0,
        };
        assert!(params.is_overdamped());
        for i in 1..200 {
            assert!(solve_spring(0.0, 10.0, &params, i as f64 * 0.01) <= 10.0);
        }
    }
}
