use crate::{
    geometry::{face::Face, placement},
    input::TouchAction,
    render::{config::RenderConfig, Animator, Canvas},
    transform::{TransformPolicy, Transformation},
    EdgeDirection, GeometryError, GridPoint, LayoutConfig, Point,
    SpatialDirection,
};
use log::debug;
use serde::Serialize;

/// The four faces of a cube that we actually calculate. The left and bottom
/// faces are never visible, so they're never built.
#[derive(Clone, Debug, Serialize)]
pub struct CubeFaces {
    pub front: Face,
    pub back: Face,
    pub top: Face,
    pub right: Face,
}

/// A single cube within a grid. The front and back faces are plain squares,
/// with the back one shifted up and to the right by half the cube size.
/// The top and right faces are then stitched together from the edges of
/// those two squares, so all four faces share corner points exactly.
#[derive(Clone, Debug, Serialize)]
pub struct Cube {
    position: GridPoint,
    size: f64,
    faces: CubeFaces,
}

impl Cube {
    /// Order in which faces get drawn. Later faces paint over earlier ones,
    /// and the front face has to end up on top.
    pub const DRAWING_ORDER: [SpatialDirection; 3] = [
        SpatialDirection::Top,
        SpatialDirection::Right,
        SpatialDirection::Front,
    ];

    /// Order in which faces get calculated. Top and right are derived from
    /// front and back, so those two have to come first.
    pub const CALCULATION_ORDER: [SpatialDirection; 4] = [
        SpatialDirection::Front,
        SpatialDirection::Back,
        SpatialDirection::Top,
        SpatialDirection::Right,
    ];

    /// Build the cube at a grid position. The front face is anchored wherever
    /// the [placement formula](placement) puts it, and the edge length is
    /// [LayoutConfig::cube_size].
    pub fn new(
        position: GridPoint,
        layout: &LayoutConfig,
    ) -> Result<Self, GeometryError> {
        Self::from_initial_point(
            position,
            placement::initial_point(position, layout),
            layout.cube_size,
        )
    }

    /// Build a cube with its front face anchored at an explicit point. The
    /// grid position is only used for shading.
    pub fn from_initial_point(
        position: GridPoint,
        front_initial_point: Point,
        size: f64,
    ) -> Result<Self, GeometryError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(GeometryError::InvalidGeometry { size });
        }

        // The back face starts at the center of the front face
        let back_initial_point =
            front_initial_point.apply_delta(size / 2.0, size / 2.0);
        let front = Face::new(
            SpatialDirection::Front,
            Self::square_corners(front_initial_point, size),
        );
        let back = Face::new(
            SpatialDirection::Back,
            Self::square_corners(back_initial_point, size),
        );
        let top = Self::bridge_face(
            SpatialDirection::Top,
            EdgeDirection::Top,
            &front,
            &back,
        );
        let right = Self::bridge_face(
            SpatialDirection::Right,
            EdgeDirection::Right,
            &front,
            &back,
        );

        debug!("Built cube {} at {}", position, front_initial_point);
        Ok(Self {
            position,
            size,
            faces: CubeFaces {
                front,
                back,
                top,
                right,
            },
        })
    }

    /// Corners of an axis-aligned square, in winding order
    fn square_corners(initial_point: Point, size: f64) -> [Point; 4] {
        [
            initial_point,                        // bottom left
            initial_point.apply_delta(0.0, size), // top left
            initial_point.apply_delta(size, size), // top right
            initial_point.apply_delta(size, 0.0), // bottom right
        ]
    }

    /// Build a face that spans the gap between the front and back squares,
    /// reusing one edge from each. The back edge gets reversed so the four
    /// corners still go around the quad in order, rather than crossing over
    /// themselves.
    fn bridge_face(
        side: SpatialDirection,
        edge: EdgeDirection,
        front: &Face,
        back: &Face,
    ) -> Face {
        let (front_start, front_end) = front.edge(edge);
        let (back_start, back_end) = back.edge(edge);
        Face::new(side, [front_start, front_end, back_end, back_start])
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Get a particular face. Returns `None` for the left and bottom faces,
    /// which are never calculated.
    pub fn face(&self, side: SpatialDirection) -> Option<&Face> {
        match side {
            SpatialDirection::Front => Some(&self.faces.front),
            SpatialDirection::Back => Some(&self.faces.back),
            SpatialDirection::Top => Some(&self.faces.top),
            SpatialDirection::Right => Some(&self.faces.right),
            SpatialDirection::Left | SpatialDirection::Bottom => None,
        }
    }

    fn face_mut(&mut self, side: SpatialDirection) -> Option<&mut Face> {
        match side {
            SpatialDirection::Front => Some(&mut self.faces.front),
            SpatialDirection::Back => Some(&mut self.faces.back),
            SpatialDirection::Top => Some(&mut self.faces.top),
            SpatialDirection::Right => Some(&mut self.faces.right),
            SpatialDirection::Left | SpatialDirection::Bottom => None,
        }
    }

    /// Iterate over every calculated face, in calculation order
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        let CubeFaces {
            front,
            back,
            top,
            right,
        } = &self.faces;
        vec![front, back, top, right].into_iter()
    }

    /// Iterate over the faces that have been drawn so far
    pub fn drawn_faces(&self) -> impl Iterator<Item = &Face> {
        self.faces().filter(|face| face.is_drawn())
    }

    /// Check if a point falls on any drawn face of this cube. Undrawn faces
    /// aren't visible, so they can't be hit.
    pub fn contains(&self, point: Point) -> bool {
        self.drawn_faces().any(|face| face.contains(point))
    }

    /// Draw the visible faces of this cube. Each face gets its base color,
    /// shaded according to the face direction and this cube's position.
    ///
    /// ## Panics
    /// Panics if the cube has already been drawn.
    pub fn draw(&mut self, canvas: &mut impl Canvas, render_config: &RenderConfig) {
        let position = self.position;
        for side in Self::DRAWING_ORDER.iter().copied() {
            let color = render_config.shading.shade(
                side,
                position,
                render_config.colors.get(side),
            );
            canvas.set_color(color);
            // Every side in the drawing order is a calculated face
            if let Some(face) = self.face_mut(side) {
                face.draw(canvas);
            }
        }
    }

    /// Move every drawn face back onto its original corners
    pub fn redraw(&self, canvas: &mut impl Canvas) {
        debug!("Redrawing cube {}", self.position);
        for face in self.drawn_faces() {
            face.reset(canvas);
        }
    }

    /// Apply a transformation to every drawn face. If no transformation is
    /// given, the policy picks one. Returns whichever transformation was
    /// applied.
    pub fn transform(
        &self,
        transformation: Option<Transformation>,
        policy: &mut impl TransformPolicy,
        animator: &mut impl Animator,
        render_config: &RenderConfig,
    ) -> Transformation {
        let transformation = transformation.unwrap_or_else(|| policy.choose());
        debug!("Applying {} to cube {}", transformation, self.position);
        for face in self.drawn_faces() {
            match transformation {
                Transformation::Pulse => {
                    face.pulse(animator, &render_config.pulse)
                }
            }
        }
        transformation
    }

    /// Respond to a touch on this cube. A secondary action resets the cube, a
    /// primary action plays a transformation chosen by the policy.
    pub fn touched(
        &self,
        action: TouchAction,
        canvas: &mut impl Canvas,
        animator: &mut impl Animator,
        policy: &mut impl TransformPolicy,
        render_config: &RenderConfig,
    ) {
        match action {
            TouchAction::Secondary => self.redraw(canvas),
            TouchAction::Primary => {
                self.transform(None, policy, animator, render_config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        render::{animation::Timeline, QuadBuffer},
        transform::FixedTransform,
    };

    fn cube(p: Point, size: f64) -> Cube {
        Cube::from_initial_point(GridPoint::ORIGIN, p, size).unwrap()
    }

    #[test]
    fn test_front_and_back_squares() {
        for &(p, size) in &[
            (Point::ORIGIN, 10.0),
            (Point::new(3.5, -2.0), 1.0),
            (Point::new(100.0, 40.0), 64.0),
        ] {
            let cube = cube(p, size);
            let front = cube.face(SpatialDirection::Front).unwrap();
            assert_eq!(
                *front.corners(),
                [
                    p,
                    p.apply_delta(0.0, size),
                    p.apply_delta(size, size),
                    p.apply_delta(size, 0.0),
                ]
            );

            let back = cube.face(SpatialDirection::Back).unwrap();
            assert_eq!(back.corners()[0], p.apply_delta(size / 2.0, size / 2.0));
        }
    }

    #[test]
    fn test_bridged_faces() {
        let cube = cube(Point::new(5.0, 5.0), 20.0);
        let front = cube.face(SpatialDirection::Front).unwrap();
        let back = cube.face(SpatialDirection::Back).unwrap();

        for &(side, edge) in &[
            (SpatialDirection::Top, EdgeDirection::Top),
            (SpatialDirection::Right, EdgeDirection::Right),
        ] {
            let face = cube.face(side).unwrap();
            let (f0, f1) = front.edge(edge);
            let (b0, b1) = back.edge(edge);
            assert_eq!(*face.corners(), [f0, f1, b1, b0]);
        }

        // Spot check actual coordinates for the top
        assert_eq!(
            *cube.face(SpatialDirection::Top).unwrap().corners(),
            [
                Point::new(5.0, 25.0),
                Point::new(25.0, 25.0),
                Point::new(35.0, 35.0),
                Point::new(15.0, 35.0),
            ]
        );
    }

    #[test]
    fn test_faces() {
        let cube = cube(Point::ORIGIN, 10.0);
        let sides: Vec<SpatialDirection> =
            cube.faces().map(Face::side).collect();
        assert_eq!(sides, Cube::CALCULATION_ORDER.to_vec());
        assert!(cube.face(SpatialDirection::Left).is_none());
        assert!(cube.face(SpatialDirection::Bottom).is_none());
    }

    #[test]
    fn test_new_from_layout() {
        let layout = LayoutConfig {
            cube_size: 25.0,
            ..Default::default()
        };
        let position = GridPoint::new(1, 2, 0);
        let cube = Cube::new(position, &layout).unwrap();
        assert_eq!(cube.position(), position);
        assert_eq!(cube.size(), 25.0);

        let anchor = placement::initial_point(position, &layout);
        let front = cube.face(SpatialDirection::Front).unwrap();
        assert_eq!(front.corners()[0], anchor);
        assert_eq!(front.corners()[2], anchor.apply_delta(25.0, 25.0));

        let bad_layout = LayoutConfig {
            cube_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            Cube::new(position, &bad_layout).unwrap_err(),
            GeometryError::InvalidGeometry { size: 0.0 }
        );
    }

    #[test]
    fn test_invalid_size() {
        for &size in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result =
                Cube::from_initial_point(GridPoint::ORIGIN, Point::ORIGIN, size);
            assert!(
                matches!(result, Err(GeometryError::InvalidGeometry { .. })),
                "size {} should be rejected",
                size
            );
        }
    }

    #[test]
    fn test_draw() {
        let mut canvas = QuadBuffer::new();
        let mut cube = cube(Point::ORIGIN, 10.0);
        assert_eq!(cube.drawn_faces().count(), 0);

        let render_config = RenderConfig::default();
        cube.draw(&mut canvas, &render_config);

        // Drawn in order, each with its own shaded color
        assert_eq!(canvas.len(), 3);
        for (quad, side) in canvas.quads().iter().zip(Cube::DRAWING_ORDER.iter()) {
            let face = cube.face(*side).unwrap();
            assert_eq!(quad.coords, face.coords_flat());
            assert_eq!(
                quad.color,
                render_config.shading.shade(
                    *side,
                    GridPoint::ORIGIN,
                    render_config.colors.get(*side)
                )
            );
        }

        let drawn: Vec<SpatialDirection> =
            cube.drawn_faces().map(Face::side).collect();
        assert_eq!(
            drawn,
            vec![
                SpatialDirection::Front,
                SpatialDirection::Top,
                SpatialDirection::Right
            ]
        );
        assert!(!cube.face(SpatialDirection::Back).unwrap().is_drawn());
    }

    #[test]
    #[should_panic(expected = "Trying to draw already drawn")]
    fn test_draw_twice() {
        let mut canvas = QuadBuffer::new();
        let mut cube = cube(Point::ORIGIN, 10.0);
        cube.draw(&mut canvas, &RenderConfig::default());
        cube.draw(&mut canvas, &RenderConfig::default());
    }

    #[test]
    fn test_contains() {
        let mut canvas = QuadBuffer::new();
        let mut cube = cube(Point::ORIGIN, 10.0);
        // Nothing drawn -> nothing to hit
        assert!(!cube.contains(Point::new(5.0, 5.0)));

        cube.draw(&mut canvas, &RenderConfig::default());
        assert!(cube.contains(Point::new(5.0, 5.0)));
        // Top face
        assert!(cube.contains(Point::new(10.0, 12.0)));
        // Right face
        assert!(cube.contains(Point::new(12.0, 8.0)));
        assert!(!cube.contains(Point::new(1000.0, 1000.0)));
        // Bottom-right corner gap, where the hidden bottom face would be
        assert!(!cube.contains(Point::new(14.0, 1.0)));
    }

    #[test]
    fn test_transform() {
        let mut canvas = QuadBuffer::new();
        let mut timeline = Timeline::new();
        let mut policy = FixedTransform(Transformation::Pulse);
        let render_config = RenderConfig::default();
        let mut cube = cube(Point::ORIGIN, 10.0);

        // Nothing drawn -> nothing to animate
        cube.transform(None, &mut policy, &mut timeline, &render_config);
        assert!(timeline.is_idle());

        cube.draw(&mut canvas, &render_config);
        let applied = cube.transform(None, &mut policy, &mut timeline, &render_config);
        assert_eq!(applied, Transformation::Pulse);
        for handle in 0..3 {
            assert!(timeline.is_animating(crate::QuadHandle(handle)));
        }
    }

    #[test]
    fn test_touched() {
        let mut canvas = QuadBuffer::new();
        let mut timeline = Timeline::new();
        let mut policy = FixedTransform(Transformation::Pulse);
        let render_config = RenderConfig::default();
        let mut cube = cube(Point::ORIGIN, 10.0);
        cube.draw(&mut canvas, &render_config);

        cube.touched(
            TouchAction::Primary,
            &mut canvas,
            &mut timeline,
            &mut policy,
            &render_config,
        );
        assert!(!timeline.is_idle());

        // Halfway through the pulse, the quads have moved
        timeline.seek(0.4);
        timeline.apply(&mut canvas);
        let front = cube.face(SpatialDirection::Front).unwrap();
        assert_ne!(canvas.quads()[2].coords, front.coords_flat());

        // Secondary action puts everything back
        cube.touched(
            TouchAction::Secondary,
            &mut canvas,
            &mut timeline,
            &mut policy,
            &render_config,
        );
        assert_eq!(canvas.quads()[2].coords, front.coords_flat());
    }
}
