use isocube::{
    Cube, CubeGrid, FixedTransform, GridConfig, GridPoint, LayoutConfig, Point,
    QuadBuffer, SceneConfig, SpatialDirection, Timeline, TouchAction,
    TouchEvent, Transformation,
};

fn scene(depth: u16, width: u16, height: u16) -> SceneConfig {
    SceneConfig {
        seed: 1337.into(),
        grid: GridConfig {
            depth,
            width,
            height,
        },
        layout: LayoutConfig {
            cube_size: 100.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The cube at the origin, with no offsets, always lands at a fixed anchor
#[test]
fn test_origin_placement() {
    let config = scene(1, 1, 1);
    let spaces_x = config.layout.spaces_x;
    let grid = CubeGrid::new(config).unwrap();
    let cube = grid.cube(GridPoint::ORIGIN).unwrap();
    let front = cube.face(SpatialDirection::Front).unwrap();

    assert_eq!(front.corners()[0], Point::new(8.0 * spaces_x, 5.0));
    assert_eq!(front.corners()[2], Point::new(8.0 * spaces_x + 100.0, 105.0));
    assert_eq!(
        cube.face(SpatialDirection::Back).unwrap().corners()[0],
        Point::new(8.0 * spaces_x + 50.0, 55.0)
    );
}

/// Every cube is built the same way, just anchored at a different point
#[test]
fn test_every_cube_is_consistent() {
    let grid = CubeGrid::new(scene(3, 3, 3)).unwrap();
    for cube in grid.cubes() {
        let front = cube.face(SpatialDirection::Front).unwrap().corners();
        let back = cube.face(SpatialDirection::Back).unwrap().corners();
        let top = cube.face(SpatialDirection::Top).unwrap().corners();
        let right = cube.face(SpatialDirection::Right).unwrap().corners();

        for (f, b) in front.iter().zip(back.iter()) {
            assert_eq!(*b, f.apply_delta(50.0, 50.0));
        }
        assert_eq!(*top, [front[1], front[2], back[2], back[1]]);
        assert_eq!(*right, [front[2], front[3], back[3], back[2]]);
    }
}

/// Build, draw, touch, animate, reset: the whole lifecycle of a grid
#[test]
fn test_touch_lifecycle() {
    let mut canvas = QuadBuffer::new();
    let mut timeline = Timeline::new();
    let mut grid = CubeGrid::with_policy(
        scene(2, 2, 2),
        FixedTransform(Transformation::Pulse),
    )
    .unwrap();
    grid.draw(&mut canvas);
    let drawn = canvas.clone();
    assert_eq!(canvas.len(), 8 * Cube::DRAWING_ORDER.len());

    // Touch the center of the frontmost, topmost cube's front face
    let target = GridPoint::new(0, 0, 1);
    let anchor = grid
        .cube(target)
        .unwrap()
        .face(SpatialDirection::Front)
        .unwrap()
        .corners()[0];
    let point = anchor.apply_delta(50.0, 50.0);
    let touched = grid.touched(
        TouchEvent::new(TouchAction::Primary, point),
        &mut canvas,
        &mut timeline,
    );
    assert_eq!(touched, Some(target));
    assert!(!timeline.is_idle());
    assert!((timeline.end_time() - 0.8).abs() < 1e-9);

    // Mid-pulse, the touched cube's faces have moved up
    timeline.seek(0.4);
    timeline.apply(&mut canvas);
    assert_ne!(canvas, drawn);

    // Once the pulse is over, everything is back where it started
    timeline.seek(timeline.end_time());
    assert!(timeline.is_idle());
    timeline.apply(&mut canvas);
    assert_eq!(canvas, drawn);

    // A secondary touch resets the cube immediately, even mid-pulse
    grid.touched(
        TouchEvent::new(TouchAction::Primary, point),
        &mut canvas,
        &mut timeline,
    );
    timeline.advance(0.4);
    timeline.apply(&mut canvas);
    assert_ne!(canvas, drawn);
    grid.touched(
        TouchEvent::new(TouchAction::Secondary, point),
        &mut canvas,
        &mut timeline,
    );
    assert_eq!(canvas, drawn);
}

#[test]
fn test_touch_miss() {
    let mut canvas = QuadBuffer::new();
    let mut timeline = Timeline::new();
    let mut grid = CubeGrid::new(scene(1, 1, 1)).unwrap();
    grid.draw(&mut canvas);

    let touched = grid.touched(
        "primary@-500,-500".parse().unwrap(),
        &mut canvas,
        &mut timeline,
    );
    assert_eq!(touched, None);
    assert!(timeline.is_idle());
}

#[cfg(feature = "json")]
#[test]
fn test_to_json() {
    let grid = CubeGrid::new(scene(1, 1, 2)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&grid.to_json()).unwrap();
    assert_eq!(json["config"]["seed"], "1337");
    assert_eq!(json["cubes"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["cubes"][0]["faces"]["front"]["side"],
        serde_json::json!("front")
    );
}
