//! isocube draws a grid of pseudo-3D cubes onto a flat 2D canvas. There is no
//! real projection involved: every cube is a front square, a back square
//! shifted up and to the right, and two faces stitched between them. This
//! crate contains the geometry, shading and animation logic. Actual drawing is
//! left to whatever implements [Canvas] and [Animator].
//!
//! ```
//! use isocube::{CubeGrid, QuadBuffer, SceneConfig, Timeline, TouchEvent};
//!
//! let mut grid = CubeGrid::new(SceneConfig::default()).unwrap();
//! let mut canvas = QuadBuffer::new();
//! let mut timeline = Timeline::new();
//! grid.draw(&mut canvas);
//!
//! let touch: TouchEvent = "primary@170,20".parse().unwrap();
//! grid.touched(touch, &mut canvas, &mut timeline);
//! // From here, advance the timeline and apply it to the canvas as you like
//! ```
//!
//! See [SceneConfig] for details on how the grid can be customized.

mod config;
mod error;
pub mod geometry;
mod grid;
mod input;
pub mod render;
mod transform;
mod util;

pub use crate::{
    config::{GridConfig, LayoutConfig, SceneConfig, Seed},
    error::GeometryError,
    geometry::{
        cube::{Cube, CubeFaces},
        face::{DrawState, Edge, Face},
        EdgeDirection, GridPoint, Point, SpatialDirection,
    },
    grid::CubeGrid,
    input::{TouchAction, TouchEvent},
    render::{
        animation::{Animation, Easing, Segment, Timeline},
        config::{FaceColors, PulseConfig, RenderConfig, ShadingConfig},
        unit::Color3,
        Animator, Canvas, DrawnQuad, QuadBuffer, QuadCoords, QuadHandle,
    },
    transform::{
        FixedTransform, RandomTransform, TransformPolicy, Transformation,
    },
    util::range::NumRange,
};
