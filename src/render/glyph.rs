//! Turtle marker geometry
//!
//! The marker is a circular body around the turtle's position plus an arrow
//! head pointing along its heading. Geometry is computed up front so it can
//! be checked without a surface.

use glam::dvec2;

use super::defaults::{ARROW_TIP, BEND, BODY_RADIUS, HEAD_TIP, HEAD_WIDTH};
use crate::types::{CanvasPoint, Heading};

/// Point at `distance` from `center` in the direction of `radians`
/// (0 = up, clockwise).
fn polar(center: CanvasPoint, radians: f64, distance: f64) -> CanvasPoint {
    center + dvec2(distance * radians.sin(), -(distance * radians.cos()))
}

/// Body circle and arrow head for a turtle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleGlyph {
    pub center: CanvasPoint,
    pub radius: f64,
    pub tip: CanvasPoint,
    pub left: CanvasPoint,
    pub left_control: CanvasPoint,
    pub right_control: CanvasPoint,
    pub right: CanvasPoint,
}

impl TurtleGlyph {
    /// Lay out the marker for a turtle at `center` facing `heading`, drawn
    /// with a pen of `line_width` (a thicker pen gets a bigger body).
    pub fn new(center: CanvasPoint, heading: Heading, line_width: f64) -> Self {
        let radius = line_width / 2.0 + BODY_RADIUS;

        let mut radians = heading.radians();
        let tip = polar(center, radians, radius + HEAD_TIP);
        radians -= HEAD_WIDTH;
        let left = polar(center, radians, radius + ARROW_TIP);
        radians += HEAD_WIDTH / 2.0;
        let left_control = polar(center, radians, radius + BEND);
        radians += HEAD_WIDTH;
        let right_control = polar(center, radians, radius + BEND);
        radians += HEAD_WIDTH / 2.0;
        let right = polar(center, radians, radius + ARROW_TIP);

        Self {
            center,
            radius,
            tip,
            left,
            left_control,
            right_control,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: CanvasPoint, b: CanvasPoint) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn radius_grows_with_pen_width() {
        let g = TurtleGlyph::new(dvec2(0.0, 0.0), Heading::NORTH, 1.0);
        assert_eq!(g.radius, 10.5);
        let g = TurtleGlyph::new(dvec2(0.0, 0.0), Heading::NORTH, 8.0);
        assert_eq!(g.radius, 14.0);
    }

    #[test]
    fn tip_points_along_heading() {
        let c = dvec2(200.0, 200.0);
        let g = TurtleGlyph::new(c, Heading::NORTH, 1.0);
        assert!(close(g.tip, dvec2(200.0, 200.0 - 20.5)));

        let g = TurtleGlyph::new(c, Heading::new(90.0), 1.0);
        assert!(close(g.tip, dvec2(200.0 + 20.5, 200.0)));
    }

    #[test]
    fn head_is_symmetric_about_heading() {
        let c = dvec2(50.0, 50.0);
        let g = TurtleGlyph::new(c, Heading::NORTH, 1.0);
        // Facing up, left and right mirror each other across x = 50.
        assert!((g.left.x - 50.0 + (g.right.x - 50.0)).abs() < EPS);
        assert!((g.left.y - g.right.y).abs() < EPS);
        assert!((g.left_control.x - 50.0 + (g.right_control.x - 50.0)).abs() < EPS);
        assert!(g.left.x < 50.0 && g.right.x > 50.0);
    }

    #[test]
    fn flank_and_control_distances() {
        let c = dvec2(0.0, 0.0);
        let g = TurtleGlyph::new(c, Heading::new(123.0), 2.0);
        assert!(((g.left - c).length() - (g.radius + ARROW_TIP)).abs() < EPS);
        assert!(((g.right - c).length() - (g.radius + ARROW_TIP)).abs() < EPS);
        assert!(((g.left_control - c).length() - (g.radius + BEND)).abs() < EPS);
        assert!(((g.right_control - c).length() - (g.radius + BEND)).abs() < EPS);
    }
}
