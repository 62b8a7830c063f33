//! Maps a cube's position in the grid to the screen-space anchor of its front
//! face (the bottom-left corner).
//!
//! This is **not** a projection. It's a fixed layout rule that was tuned by
//! eye:
//!
//! ```text
//! x = (anchor_steps_x - 2 * width) * spaces_x + depth * spaces_x + x_offset
//! y = depth * spaces_x + (anchor_y + height * spaces_y) + y_offset
//! ```
//!
//! Note that depth shifts `y` by `spaces_x`, not `spaces_y`. That keeps a
//! step back in depth on the same diagonal as a cube's own back face.

use crate::{GridPoint, LayoutConfig, Point};

/// Get the bottom-left corner of the front face for the cube at the given
/// grid position
pub fn initial_point(position: GridPoint, layout: &LayoutConfig) -> Point {
    let (depth, width, height) = position.coords_flat();
    let (depth, width, height) =
        (f64::from(depth), f64::from(width), f64::from(height));

    let x = (layout.anchor_steps_x - width * 2.0) * layout.spaces_x
        + depth * layout.spaces_x
        + layout.x_offset;
    let y = depth * layout.spaces_x
        + (layout.anchor_y + height * layout.spaces_y)
        + layout.y_offset;
    Point::new(x, y)
}
