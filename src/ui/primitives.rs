//! Primitive UI elements - atomic building blocks
//!
//! Lowest-level pieces implementing iced's `canvas::Program` trait directly.
//! Primitives must not import from `crate::app` and use generic Message types.

pub mod typing_indicator;

pub use typing_indicator::view_typing_indicator;
