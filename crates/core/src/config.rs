mod seed;

pub use seed::Seed;

use crate::render::config::RenderConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a cube grid. Two grids built from the same
/// config will always have identical geometry, and will make the same choices
/// when asked to pick a random transformation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed used to pick transformations. See [Seed] for the accepted
    /// formats.
    pub seed: Seed,

    /// Number of cubes along each axis of the grid
    #[validate]
    pub grid: GridConfig,

    /// Constants that control where each cube lands on the canvas
    #[validate]
    pub layout: LayoutConfig,

    /// Colors, shading and animation. These have no bearing on geometry.
    #[validate]
    pub render: RenderConfig,
}

/// Dimensions of the grid, in cubes
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    #[validate(range(min = 1, max = 16))]
    pub depth: u16,
    #[validate(range(min = 1, max = 16))]
    pub width: u16,
    #[validate(range(min = 1, max = 16))]
    pub height: u16,
}

impl GridConfig {
    /// Total number of cubes in the grid
    pub fn len(&self) -> usize {
        usize::from(self.depth) * usize::from(self.width) * usize::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            width: 4,
            height: 4,
        }
    }
}

/// Layout constants for the placement formula. All values are in screen
/// units. See [placement](crate::geometry::placement) for how they fit
/// together.
///
/// The defaults are tuned so that neighboring cubes line up edge to edge:
/// one step in width is `2 * spaces_x`, one step in depth is `spaces_x` in
/// both axes (matching the half-size offset of the back face), and one step
/// in height is `spaces_y`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Edge length of every cube
    #[validate(range(min = 0.001))]
    pub cube_size: f64,

    /// Horizontal grid pitch. Also used for the vertical shift per step of
    /// depth.
    #[validate(range(min = 0.0))]
    pub spaces_x: f64,

    /// Vertical grid pitch, per step of height
    #[validate(range(min = 0.0))]
    pub spaces_y: f64,

    /// Global translation applied to every cube
    pub x_offset: f64,
    pub y_offset: f64,

    /// Number of `spaces_x` steps between the left edge of the canvas and the
    /// cube at width zero. Width counts leftwards from here, two steps at a
    /// time, so this needs to be at least twice the grid width to keep every
    /// cube at a non-negative x.
    pub anchor_steps_x: f64,

    /// Fixed vertical lift for the bottom row of cubes
    pub anchor_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cube_size: 40.0,
            spaces_x: 20.0,
            spaces_y: 40.0,
            x_offset: 0.0,
            y_offset: 0.0,
            anchor_steps_x: 8.0,
            anchor_y: 5.0,
        }
    }
}
