use crate::{
    render::{animation::Easing, unit::Color3},
    SpatialDirection,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration specific to the visual presentation of cubes. None of these
/// options affect cube _geometry_, only how faces are colored and animated.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// The base color of each face, before shading is applied
    pub colors: FaceColors,

    /// Controls how face colors get darkened/lightened based on where the
    /// cube sits in the grid
    #[validate]
    pub shading: ShadingConfig,

    /// Parameters for the pulse transformation
    #[validate]
    pub pulse: PulseConfig,
}

/// Base color for each cube face. Only the front, top and right faces are
/// ever drawn, but the rest are here so every [SpatialDirection] has a color.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceColors {
    pub front: Color3,
    pub back: Color3,
    pub top: Color3,
    pub right: Color3,
    pub left: Color3,
    pub bottom: Color3,
}

impl FaceColors {
    /// Get the base color for a face
    pub fn get(&self, side: SpatialDirection) -> Color3 {
        match side {
            SpatialDirection::Front => self.front,
            SpatialDirection::Back => self.back,
            SpatialDirection::Top => self.top,
            SpatialDirection::Right => self.right,
            SpatialDirection::Left => self.left,
            SpatialDirection::Bottom => self.bottom,
        }
    }
}

impl Default for FaceColors {
    fn default() -> Self {
        Self {
            front: Color3::new_int(66, 135, 245),
            back: Color3::new_int(40, 80, 150),
            top: Color3::new_int(120, 180, 255),
            right: Color3::new_int(50, 105, 200),
            left: Color3::new_int(50, 105, 200),
            bottom: Color3::new_int(30, 60, 110),
        }
    }
}

/// Coefficients for the shading curve. See
/// [ShadingConfig::multiplier](crate::ShadingConfig::multiplier) for how
/// these combine.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShadingConfig {
    /// Fraction of brightness lost for each step back in depth
    #[validate(range(min = 0.0, max = 1.0))]
    pub depth_falloff: f32,

    /// Fraction of brightness lost for each step left in width
    #[validate(range(min = 0.0, max = 1.0))]
    pub width_falloff: f32,

    /// Fraction of brightness gained for each step up in height
    #[validate(range(min = 0.0, max = 1.0))]
    pub height_gain: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            depth_falloff: 0.08,
            width_falloff: 0.03,
            height_gain: 0.05,
        }
    }
}

/// Parameters for the pulse transformation. A pulse pushes each corner of a
/// face up by [Self::offset], then brings it back down. Each half of the
/// pulse takes [Self::duration] seconds.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PulseConfig {
    /// Distance each corner is displaced along the y axis, in screen units
    pub offset: f64,

    /// Length of each half of the pulse, in seconds
    #[validate(range(min = 0.0))]
    pub duration: f64,

    /// Easing for the outward half
    pub ease_out: Easing,

    /// Easing for the return half
    pub ease_in: Easing,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            offset: 15.0,
            duration: 0.4,
            ease_out: Easing::OutBack,
            ease_in: Easing::InBack,
        }
    }
}
