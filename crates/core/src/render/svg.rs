use crate::render::QuadBuffer;
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

/// Blank space around the drawing, in screen units
const MARGIN: f64 = 10.0;

/// Render the current state of a quad buffer as a 2D SVG. Quads are painted
/// in drawing order. The canvas is y-up and SVG is y-down, so every y
/// coordinate gets negated; the view box is set up to match.
pub fn quads_to_svg(buffer: &QuadBuffer) -> Document {
    let mut document = Document::new().set("shape-rendering", "crispEdges");

    if let Some((min, max)) = buffer.bounds() {
        document = document.set(
            "viewBox",
            (
                // Top-left corner, after flipping y
                (min.x - MARGIN).floor(),
                (-max.y - MARGIN).floor(),
                // Width and height
                (max.x - min.x + MARGIN * 2.0).ceil(),
                (max.y - min.y + MARGIN * 2.0).ceil(),
            ),
        );
    }

    for (i, quad) in buffer.quads().iter().enumerate() {
        document = document.add(Comment::new(format!("quad #{}", i))).add(
            Polygon::new()
                .set(
                    "points",
                    quad.corners()
                        .map(|corner| (corner.x, -corner.y))
                        .collect::<Vec<_>>(),
                )
                .set("fill", quad.color.to_html()),
        );
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        render::{unit::Color3, Canvas},
        Point,
    };

    #[test]
    fn test_quads_to_svg() {
        let mut canvas = QuadBuffer::new();
        canvas.set_color(Color3::new_int(255, 0, 0));
        canvas.draw_quad([0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0]);
        assert_eq!(
            canvas.bounds(),
            Some((Point::new(0.0, 0.0), Point::new(10.0, 10.0)))
        );

        let svg = quads_to_svg(&canvas).to_string();
        assert!(svg.contains("viewBox=\"-10 -20 30 30\""), "{}", svg);
        assert!(svg.contains("fill=\"#ff0000\""), "{}", svg);
        assert!(svg.contains("<!-- quad #0 -->"), "{}", svg);
    }
}
