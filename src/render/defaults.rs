//! Default styles and turtle glyph dimensions (all in canvas pixels)

use crate::surface::LineCap;

pub const PEN_COLOUR: &str = "#000000";
pub const LINE_WIDTH: f64 = 1.0;
pub const LINE_CAP: LineCap = LineCap::Round;
pub const FONT: &str = "normal 18pt Arial";

/// Gap between the pen's half-width and the body outline
pub const BODY_RADIUS: f64 = 10.0;
/// Line width used for the body outline
pub const BODY_LINE_WIDTH: f64 = 3.0;
/// Half-angle of the head arrow, in radians
pub const HEAD_WIDTH: f64 = 0.3;
/// How far past the body the head tip reaches
pub const HEAD_TIP: f64 = 10.0;
/// How far past the body the head flanks reach
pub const ARROW_TIP: f64 = 4.0;
/// How far past the body the head's bezier bends
pub const BEND: f64 = 6.0;
