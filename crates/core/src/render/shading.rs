//! Fake directional lighting. There is no light source anywhere, each face
//! just gets a brightness multiplier based on which way it faces and where
//! its cube sits in the grid. The light "comes from" the top-front-right of
//! the grid, so top faces are brightest and cubes further back are dimmer.

use crate::{
    render::{config::ShadingConfig, unit::Color3},
    util::range::NumRange,
    GridPoint, SpatialDirection,
};

impl ShadingConfig {
    /// Multipliers never leave this range, no matter how big the grid gets
    pub const MULTIPLIER_RANGE: NumRange<f32> = NumRange::new(0.1, 1.5);

    /// Base brightness for each face direction, before grid position is
    /// taken into account
    pub fn face_factor(side: SpatialDirection) -> f32 {
        match side {
            SpatialDirection::Top => 1.0,
            SpatialDirection::Front => 0.9,
            SpatialDirection::Right => 0.75,
            SpatialDirection::Back
            | SpatialDirection::Left
            | SpatialDirection::Bottom => 0.6,
        }
    }

    /// Compute the brightness multiplier for one face of a cube. The grid
    /// indexes are **one-based**, so the cube at the front-right-bottom corner
    /// of the grid is `(1, 1, 1)`. A zero index is treated the same as one.
    ///
    /// This is a pure function of its inputs, the same face at the same
    /// position always gets the same multiplier.
    pub fn multiplier(
        &self,
        side: SpatialDirection,
        depth: u16,
        width: u16,
        height: u16,
    ) -> f32 {
        let steps = |index: u16| f32::from(index.saturating_sub(1));
        // A falloff can't go below zero, otherwise two of them would multiply
        // back into a positive
        let falloff = |rate: f32, index: u16| (1.0 - rate * steps(index)).max(0.0);

        let multiplier = Self::face_factor(side)
            * falloff(self.depth_falloff, depth)
            * falloff(self.width_falloff, width)
            * (1.0 + self.height_gain * steps(height));
        Self::MULTIPLIER_RANGE.clamp(multiplier)
    }

    /// Apply shading for a face of the cube at the given (zero-based) grid
    /// position to a base color.
    pub fn shade(
        &self,
        side: SpatialDirection,
        position: GridPoint,
        base_color: Color3,
    ) -> Color3 {
        let (depth, width, height) = position.coords_flat();
        base_color
            * self.multiplier(
                side,
                depth.saturating_add(1),
                width.saturating_add(1),
                height.saturating_add(1),
            )
    }
}
