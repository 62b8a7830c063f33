use crate::{
    geometry::cube::Cube,
    input::TouchEvent,
    render::{Animator, Canvas},
    timed,
    transform::{RandomTransform, TransformPolicy},
    GridPoint, Point, SceneConfig,
};
use anyhow::Context;
use log::{debug, info};
use serde::Serialize;
use validator::Validate;

/// A full grid of cubes, built from a [SceneConfig]. Cubes are stored in
/// painter's order: the first cube in the list is the farthest back, and each
/// cube is allowed to paint over anything that came before it.
///
/// The grid owns the policy that picks a transformation whenever a cube is
/// touched. By default that's a [RandomTransform] seeded from the config, so
/// replaying the same touches on the same config always has the same result.
///
/// ## Serialization
/// Grids serialize (with the `json` feature) to their config plus the corner
/// points of every cube face. The policy isn't serialized.
#[derive(Clone, Debug, Serialize)]
pub struct CubeGrid<P = RandomTransform> {
    /// The config used to build this grid. Once the grid is built, the config
    /// can never change.
    config: SceneConfig,

    /// Every cube in the grid, in drawing order
    cubes: Vec<Cube>,

    #[serde(skip)]
    policy: P,
}

impl CubeGrid<RandomTransform> {
    /// Build a grid from the given config. Returns an error if the config is
    /// invalid.
    pub fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let policy = RandomTransform::new(&config.seed);
        Self::with_policy(config, policy)
    }
}

impl<P: TransformPolicy> CubeGrid<P> {
    /// Build a grid that uses a custom policy to pick transformations
    pub fn with_policy(config: SceneConfig, policy: P) -> anyhow::Result<Self> {
        info!("Building cube grid with config {:#?}", config);
        config.validate().context("invalid config")?;

        let cubes = timed!(
            "Cube grid construction",
            log::Level::Info,
            Self::build_cubes(&config)
        )?;

        Ok(Self {
            config,
            cubes,
            policy,
        })
    }

    /// Build every cube in painter's order. Cubes deeper in the grid are
    /// further back, and a higher width is further left, which is the hidden
    /// side. Within a column, cubes go bottom to top so that each one covers
    /// the top face of the one below it.
    fn build_cubes(config: &SceneConfig) -> anyhow::Result<Vec<Cube>> {
        let grid = &config.grid;
        let mut cubes = Vec::with_capacity(grid.len());
        for depth in (0..grid.depth).rev() {
            for width in (0..grid.width).rev() {
                for height in 0..grid.height {
                    let position = GridPoint::new(depth, width, height);
                    let cube =
                        Cube::new(position, &config.layout).with_context(
                            || format!("error building cube at {}", position),
                        )?;
                    cubes.push(cube);
                }
            }
        }
        Ok(cubes)
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// All cubes in the grid, in drawing order
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Get the cube at a specific grid position
    pub fn cube(&self, position: GridPoint) -> Option<&Cube> {
        self.cubes.iter().find(|cube| cube.position() == position)
    }

    /// Draw every cube onto a canvas, back to front
    ///
    /// ## Panics
    /// Panics if the grid has already been drawn.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        let render_config = &self.config.render;
        let cubes = &mut self.cubes;
        timed!("Cube grid drawing", {
            for cube in cubes.iter_mut() {
                cube.draw(canvas, render_config);
            }
        });
    }

    /// Find the topmost drawn cube under a point. Later cubes are painted
    /// over earlier ones, so search from the back of the list.
    pub fn cube_at(&self, point: Point) -> Option<&Cube> {
        self.cubes.iter().rev().find(|cube| cube.contains(point))
    }

    /// Dispatch a touch to whichever cube is on top at the touched point.
    /// Returns the position of the cube that was touched, or `None` if the
    /// touch didn't land on anything.
    pub fn touched(
        &mut self,
        event: TouchEvent,
        canvas: &mut impl Canvas,
        animator: &mut impl Animator,
    ) -> Option<GridPoint> {
        let cube = self
            .cubes
            .iter()
            .rev()
            .find(|cube| cube.contains(event.point));
        match cube {
            Some(cube) => {
                debug!("{} hit cube {}", event, cube.position());
                cube.touched(
                    event.action,
                    canvas,
                    animator,
                    &mut self.policy,
                    &self.config.render,
                );
                Some(cube.position())
            }
            None => {
                debug!("{} missed every cube", event);
                None
            }
        }
    }
}

impl<P> CubeGrid<P> {
    /// Serializes this grid into JSON: the config, followed by every cube and
    /// the corners of each of its faces
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing grid")
    }
}
