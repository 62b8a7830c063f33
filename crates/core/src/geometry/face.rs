use crate::{
    render::{
        animation::Animation, config::PulseConfig, Animator, Canvas,
        QuadCoords, QuadHandle,
    },
    EdgeDirection, Point, SpatialDirection,
};
use log::debug;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::ops;

/// One edge of a face: the two corners that bound it, in winding order
pub type Edge = (Point, Point);

/// The four edges of a face, indexed by [EdgeDirection]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edges([Edge; 4]);

impl Edges {
    /// Iterate over every edge, in winding order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.0.iter()
    }
}

impl ops::Index<EdgeDirection> for Edges {
    type Output = Edge;

    fn index(&self, direction: EdgeDirection) -> &Self::Output {
        &self.0[direction.index()]
    }
}

/// Whether or not a face has been handed to a canvas yet
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawState {
    NotDrawn,
    Drawn(QuadHandle),
}

/// A single flat side of a cube: a quadrilateral with four corners in
/// winding order (bottom-left, top-left, top-right, bottom-right). Edges are
/// computed once, up front, and never change.
///
/// Faces start out undrawn. Once drawn, they hold onto the handle of their
/// quad so they can be reset or animated later.
#[derive(Clone, Debug, Serialize)]
pub struct Face {
    side: SpatialDirection,
    corners: [Point; 4],
    #[serde(skip)]
    edges: Edges,
    #[serde(skip)]
    draw_state: DrawState,
}

impl Face {
    /// Tolerance for deciding that a point sits on an edge
    const EDGE_EPSILON: f64 = 1e-9;

    pub fn new(side: SpatialDirection, corners: [Point; 4]) -> Self {
        // Each edge runs from one corner to the next
        let [c0, c1, c2, c3] = corners;
        let edges = Edges([(c0, c1), (c1, c2), (c2, c3), (c3, c0)]);
        Self {
            side,
            corners,
            edges,
            draw_state: DrawState::NotDrawn,
        }
    }

    pub fn side(&self) -> SpatialDirection {
        self.side
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    pub fn edge(&self, direction: EdgeDirection) -> Edge {
        self.edges[direction]
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw_state
    }

    pub fn is_drawn(&self) -> bool {
        matches!(self.draw_state, DrawState::Drawn(_))
    }

    /// The corners flattened into `[x0, y0, x1, y1, ...]`, the format a
    /// [Canvas] expects
    pub fn coords_flat(&self) -> QuadCoords {
        let mut coords = [0.0; 8];
        for (i, corner) in self.corners.iter().enumerate() {
            coords[i * 2] = corner.x;
            coords[i * 2 + 1] = corner.y;
        }
        coords
    }

    /// Check if a point falls within this face. Points that sit exactly on an
    /// edge or corner count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let p: Point2<f64> = point.into();
        if self
            .edges
            .iter()
            .any(|&(a, b)| Self::on_segment(a.into(), b.into(), p))
        {
            return true;
        }

        // Even-odd rule: cast a ray to the right and count edge crossings
        let mut inside = false;
        for &(a, b) in self.edges.iter() {
            if (a.y > p.y) != (b.y > p.y) {
                let crossing_x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn on_segment(a: Point2<f64>, b: Point2<f64>, p: Point2<f64>) -> bool {
        let ab: Vector2<f64> = b - a;
        let ap: Vector2<f64> = p - a;
        let length_squared = ab.norm_squared();
        if length_squared == 0.0 {
            return ap.norm_squared() == 0.0;
        }

        // Collinear, and between the two ends
        let cross = ab.perp(&ap);
        if cross.abs() > Self::EDGE_EPSILON * length_squared.sqrt() {
            return false;
        }
        let dot = ap.dot(&ab);
        (0.0..=length_squared).contains(&dot)
    }

    /// Register this face with a canvas, using whatever color the canvas
    /// currently has set.
    ///
    /// ## Panics
    /// Panics if this face has already been drawn. Canvases can't re-register
    /// the same quad, so this is always a bug in the caller.
    pub fn draw(&mut self, canvas: &mut impl Canvas) -> QuadHandle {
        if let DrawState::Drawn(handle) = self.draw_state {
            panic!(
                "Trying to draw already drawn {} face (quad {})",
                self.side, handle
            );
        }

        let handle = canvas.draw_quad(self.coords_flat());
        debug!("Drew {} face as quad {}", self.side, handle);
        self.draw_state = DrawState::Drawn(handle);
        handle
    }

    /// Put a drawn face's quad back on its original corners, undoing whatever
    /// has happened to it since. Does nothing for an undrawn face.
    pub fn reset(&self, canvas: &mut impl Canvas) {
        if let DrawState::Drawn(handle) = self.draw_state {
            canvas.update_quad(handle, self.coords_flat());
        }
    }

    /// Build the two-stage pulse animation for this face: every y coordinate
    /// moves out by the configured offset, then comes back. The final
    /// keyframe is exactly [Self::coords_flat].
    pub fn pulse_animation(&self, config: &PulseConfig) -> Animation {
        let coords = self.coords_flat();
        let mut displaced = coords;
        for y in displaced.iter_mut().skip(1).step_by(2) {
            *y += config.offset;
        }

        Animation::new(coords)
            .then(displaced, config.duration, config.ease_out)
            .then(coords, config.duration, config.ease_in)
    }

    /// Hand a pulse animation for this face off to an animator.
    ///
    /// ## Panics
    /// Panics if this face hasn't been drawn, since there's no quad to
    /// animate.
    pub fn pulse(&self, animator: &mut impl Animator, config: &PulseConfig) {
        let handle = match self.draw_state {
            DrawState::Drawn(handle) => handle,
            DrawState::NotDrawn => {
                panic!("Cannot pulse {} face, it hasn't been drawn", self.side)
            }
        };
        debug!("Pulsing {} face (quad {})", self.side, handle);
        animator.animate(handle, self.pulse_animation(config));
    }
}
