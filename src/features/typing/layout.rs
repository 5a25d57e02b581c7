//! Dot placement inside the indicator bounds
//!
//! The left and center dots are placed against the inset rectangle. The right
//! dot is placed against the un-inset bounds, so it sits flush with the right
//! edge and rests on the bottom edge until its bounce starts.

use iced::Rectangle;
use serde::{Deserialize, Serialize};

/// Edge insets (top, left, bottom, right)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Shrink `rect` by `insets`. Width and height may go negative.
pub fn inset(rect: Rectangle, insets: &Insets) -> Rectangle {
    Rectangle {
        x: rect.x + insets.left,
        y: rect.y + insets.top,
        width: rect.width - insets.left - insets.right,
        height: rect.height - insets.top - insets.bottom,
    }
}

fn mid_x(rect: &Rectangle) -> f32 {
    rect.x + rect.width / 2.0
}

fn max_x(rect: &Rectangle) -> f32 {
    rect.x + rect.width
}

fn max_y(rect: &Rectangle) -> f32 {
    rect.y + rect.height
}

/// Horizontal position of the left, center and right dots
pub fn compute_layout(bounds: Rectangle, margins: &Insets, dot_size: f32) -> [f32; 3] {
    let adjusted = inset(bounds, margins);
    [
        margins.left,
        mid_x(&adjusted) - dot_size / 2.0,
        max_x(&bounds) - dot_size,
    ]
}

/// Vertical position each dot is created at, before its bounce is attached
pub fn resting_y(bounds: Rectangle, margins: &Insets, dot_size: f32) -> [f32; 3] {
    let adjusted = inset(bounds, margins);
    let inner = max_y(&adjusted) - dot_size;
    [inner, inner, max_y(&bounds) - dot_size]
}

/// Vertical travel of a bounce, shared by all three dots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceRange {
    /// Resting y (bottom of the inset rectangle minus the dot)
    pub baseline: f32,
    /// Apex y (top of the inset rectangle)
    pub top: f32,
}

pub fn bounce_range(bounds: Rectangle, margins: &Insets, dot_size: f32) -> BounceRange {
    let adjusted = inset(bounds, margins);
    BounceRange {
        baseline: max_y(&adjusted) - dot_size,
        top: adjusted.y,
    }
}
