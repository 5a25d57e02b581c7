//! Retained dot layers owned by the indicator
//!
//! Layers hold their model position plus an optional attached cycle. The
//! renderer asks for the presentation at a given time and draws that.

use iced::{Color, Point};

use super::cycle::{AnimationCycle, Phase};

/// Handle to a layer in a [`LayerTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

/// A cycle attached to a layer, and when it was attached
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedCycle {
    pub cycle: AnimationCycle,
    pub attached_at: f64,
}

/// A filled circle, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct DotLayer {
    pub id: LayerId,
    pub position: Point,
    pub diameter: f32,
    pub color: Color,
    pub animation: Option<AttachedCycle>,
}

impl DotLayer {
    /// Position actually drawn at time `now`
    pub fn presented_position(&self, now: f64) -> Point {
        let y = self
            .animation
            .as_ref()
            .and_then(|a| a.cycle.sample(now - a.attached_at))
            .unwrap_or(self.position.y);
        Point::new(self.position.x, y)
    }

    /// Bounce phase at time `now`, if animating
    pub fn phase(&self, now: f64) -> Option<Phase> {
        self.animation
            .as_ref()
            .and_then(|a| a.cycle.phase(now - a.attached_at))
    }
}

/// What the renderer draws for one dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedDot {
    pub position: Point,
    pub diameter: f32,
    pub color: Color,
}

/// Ordered collection of dot layers
#[derive(Debug, Default)]
pub struct LayerTree {
    layers: Vec<DotLayer>,
    next_id: u64,
}

impl LayerTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, unanimated dot
    pub fn add_sublayer(&mut self, position: Point, diameter: f32, color: Color) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(DotLayer {
            id,
            position,
            diameter,
            color,
            animation: None,
        });
        id
    }

    /// Attach `cycle` to the layer, replacing any previous one.
    ///
    /// Returns `false` when the layer no longer exists.
    pub fn attach(&mut self, id: LayerId, cycle: AnimationCycle, at: f64) -> bool {
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => {
                layer.animation = Some(AttachedCycle {
                    cycle,
                    attached_at: at,
                });
                true
            }
            None => false,
        }
    }

    /// Remove every layer along with its animation
    pub fn remove_all(&mut self) {
        self.layers.clear();
    }

    pub fn get(&self, id: LayerId) -> Option<&DotLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    #[cfg(test)]
    pub fn layers(&self) -> &[DotLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Every dot as it should be drawn at `now`, in insertion order
    pub fn presentation(&self, now: f64) -> impl Iterator<Item = PresentedDot> + '_ {
        self.layers.iter().map(move |layer| PresentedDot {
            position: layer.presented_position(now),
            diameter: layer.diameter,
            color: layer.color,
        })
    }
}
