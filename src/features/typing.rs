//! Three-dot typing indicator
//!
//! Platform-independent layout and timing. The canvas primitive in
//! `ui::primitives::typing_indicator` renders what this module produces.
//!
//! - [`layout`]: where the dots go
//! - [`cycle`]: how a dot bounces over time
//! - [`scheduler`]: delayed attachment of bounces
//! - [`animator`]: the draw pass tying them together

pub mod animator;
pub mod config;
pub mod cycle;
pub mod easing;
pub mod layer;
pub mod layout;
pub mod scheduler;
pub mod spring;

pub use animator::{DOT_COUNT, DotAnimator};
pub use config::{INTRINSIC_SIZE, IndicatorConfig};
pub use cycle::Phase;
pub use layer::{LayerId, LayerTree, PresentedDot};
pub use scheduler::{Scheduler, TimerQueue};
