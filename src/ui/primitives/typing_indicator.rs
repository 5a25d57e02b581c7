//! Typing indicator canvas primitive
//!
//! Renders the dots of a [`LayerTree`] as they appear at a given time. Layout
//! and timing live in `features::typing`; this only paints.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Element, Point, Renderer, Size, Theme, mouse};

use crate::features::typing::{LayerTree, PresentedDot};

/// Canvas program drawing a snapshot of the indicator's layers
#[derive(Debug, Clone, Copy)]
pub struct TypingIndicator<'a> {
    layers: &'a LayerTree,
    /// Clock time to sample animations at, in seconds
    now: f64,
}

impl<'a> TypingIndicator<'a> {
    pub fn new(layers: &'a LayerTree, now: f64) -> Self {
        Self { layers, now }
    }
}

/// Circle path for a dot positioned by its top-left corner
fn dot_path(dot: &PresentedDot) -> Option<Path> {
    if !(dot.diameter > 0.0) {
        return None;
    }
    let radius = dot.diameter / 2.0;
    let center = Point::new(dot.position.x + radius, dot.position.y + radius);
    Some(Path::circle(center, radius))
}

impl<Message> Program<Message> for TypingIndicator<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        if self.layers.is_empty() {
            return vec![];
        }

        let mut frame = Frame::new(renderer, bounds.size());

        for dot in self.layers.presentation(self.now) {
            if let Some(path) = dot_path(&dot) {
                frame.fill(&path, dot.color);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Create a typing indicator element of the given size
pub fn view_typing_indicator<'a, Message: 'a>(
    layers: &'a LayerTree,
    now: f64,
    size: Size,
) -> Element<'a, Message> {
    Canvas::new(TypingIndicator::new(layers, now))
        .width(size.width)
        .height(size.height)
        .into()
}
