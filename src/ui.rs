//! UI module for the typing indicator demo
//!
//! - **Primitives** (`primitives`): canvas programs
//! - **Theme** (`theme`): colors and container styles

pub mod primitives;
pub mod theme;
