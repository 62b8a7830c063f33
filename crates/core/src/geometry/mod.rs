//! Plain geometric types: screen-space points, grid positions and the
//! direction enums used to key faces and edges.
//!
//! Screen space is y-up: increasing `y` moves a point towards the top of the
//! canvas. The cube's "back" face sits up and to the right of its front face.

pub mod cube;
pub mod face;
pub mod placement;

use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// A 2D point in screen space. Points are immutable values, every
/// transformation returns a new point.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get a new point, offset from this one by the given deltas
    #[must_use]
    pub fn apply_delta(self, delta_x: f64, delta_y: f64) -> Self {
        Self::new(self.x + delta_x, self.y + delta_y)
    }

    /// Get the components of this point as an `(x, y)` tuple
    pub fn coords_flat(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(point: Point) -> Self {
        nalgebra::Point2::new(point.x, point.y)
    }
}

/// The position of a cube within its parent grid. All components are zero-
/// based indexes. `depth` moves a cube back (up and right on screen), `width`
/// moves it left, and `height` moves it up.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.depth", "self.width", "self.height")]
pub struct GridPoint {
    pub depth: u16,
    pub width: u16,
    pub height: u16,
}

impl GridPoint {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(depth: u16, width: u16, height: u16) -> Self {
        Self {
            depth,
            width,
            height,
        }
    }

    /// Get the components of this position as a `(depth, width, height)` tuple
    pub fn coords_flat(self) -> (u16, u16, u16) {
        (self.depth, self.width, self.height)
    }
}

/// The six sides of a cube. Only [Self::Front], [Self::Back], [Self::Top] and
/// [Self::Right] ever get calculated, since the other two are never visible
/// from our fixed viewpoint.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    StrumDisplay,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpatialDirection {
    Front,
    Back,
    Top,
    Right,
    Left,
    Bottom,
}

/// The four edges of a single face. Each edge is the pair of corners that
/// bounds it, in winding order.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    StrumDisplay,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EdgeDirection {
    Left,
    Top,
    Right,
    Bottom,
}

impl EdgeDirection {
    /// Every edge, in winding order. The edge at index `i` starts at corner
    /// `i` and ends at corner `i + 1` (wrapping around).
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Position of this edge in [Self::ALL]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta() {
        let point = Point::new(1.0, 2.0);
        assert_eq!(point.apply_delta(3.0, -4.0), Point::new(4.0, -2.0));
        // Original is untouched
        assert_eq!(point, Point::new(1.0, 2.0));
        assert_eq!(point.apply_delta(0.0, 0.0), point);
    }

    #[test]
    fn test_coords_flat() {
        assert_eq!(Point::new(1.5, -2.0).coords_flat(), (1.5, -2.0));
        assert_eq!(GridPoint::new(1, 2, 3).coords_flat(), (1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, 2.0).to_string(), "(1.5, 2)");
        assert_eq!(GridPoint::new(0, 1, 2).to_string(), "(0, 1, 2)");
        assert_eq!(SpatialDirection::Front.to_string(), "front");
    }

    #[test]
    fn test_edge_index() {
        for (i, edge) in EdgeDirection::ALL.iter().enumerate() {
            assert_eq!(edge.index(), i);
        }
    }
}
