//! The seams between cube geometry and whatever actually puts pixels on the
//! screen. The core never touches a real drawing surface, it only talks to a
//! [Canvas] (to create and move quads) and an [Animator] (to tween them).
//!
//! [QuadBuffer] and [Timeline](animation::Timeline) are in-memory
//! implementations of those two traits. They're enough to produce SVG output,
//! and make it easy to see exactly what the core asked for.

pub mod animation;
pub mod config;
pub mod shading;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    render::{animation::Animation, unit::Color3},
    Point,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The flattened corners of a quad: `[x0, y0, x1, y1, x2, y2, x3, y3]`, in
/// winding order
pub type QuadCoords = [f64; 8];

/// Reference to a quad that has been registered with a [Canvas]. Handles are
/// only meaningful to the canvas that issued them.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "#{}", "self.0")]
pub struct QuadHandle(pub usize);

/// A drawing surface that can hold filled quads
pub trait Canvas {
    /// Set the fill color for every quad drawn after this call
    fn set_color(&mut self, color: Color3);

    /// Register a new quad, filled with the current color
    fn draw_quad(&mut self, coords: QuadCoords) -> QuadHandle;

    /// Move the corners of an existing quad
    fn update_quad(&mut self, handle: QuadHandle, coords: QuadCoords);
}

/// Something that can tween quads over time. Animations are fire-and-forget,
/// the caller never waits on them.
pub trait Animator {
    fn animate(&mut self, target: QuadHandle, animation: Animation);
}

/// A quad that has been drawn onto a [QuadBuffer]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DrawnQuad {
    pub color: Color3,
    pub coords: QuadCoords,
}

impl DrawnQuad {
    /// Iterate over the corners of this quad
    pub fn corners(&self) -> impl Iterator<Item = Point> + '_ {
        self.coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
    }
}

/// A [Canvas] that just keeps a list of quads in memory, in the order they
/// were drawn. Later quads are painted over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadBuffer {
    color: Color3,
    quads: Vec<DrawnQuad>,
}

impl QuadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All quads, in drawing order. A quad's index here is its handle.
    pub fn quads(&self) -> &[DrawnQuad] {
        &self.quads
    }

    pub fn get(&self, handle: QuadHandle) -> Option<&DrawnQuad> {
        self.quads.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Get the bottom-left and top-right corners of the smallest box that
    /// holds every quad. Returns `None` if nothing has been drawn.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.quads
            .iter()
            .flat_map(DrawnQuad::corners)
            .fold(None, |bounds, corner| {
                let (min, max) = bounds.unwrap_or((corner, corner));
                Some((
                    Point::new(min.x.min(corner.x), min.y.min(corner.y)),
                    Point::new(max.x.max(corner.x), max.y.max(corner.y)),
                ))
            })
    }
}

impl Canvas for QuadBuffer {
    fn set_color(&mut self, color: Color3) {
        self.color = color;
    }

    fn draw_quad(&mut self, coords: QuadCoords) -> QuadHandle {
        self.quads.push(DrawnQuad {
            color: self.color,
            coords,
        });
        QuadHandle(self.quads.len() - 1)
    }

    fn update_quad(&mut self, handle: QuadHandle, coords: QuadCoords) {
        match self.quads.get_mut(handle.0) {
            Some(quad) => quad.coords = coords,
            // A handle from some other canvas is a bug in the caller
            None => panic!(
                "Unknown quad {} (canvas has {} quads)",
                handle,
                self.quads.len()
            ),
        }
    }
}
