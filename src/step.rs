//! Replaying one log entry against the turtle and the scratch surface.

use crate::command::Command;
use crate::emitter::clamp_width;
use crate::surface::Surface;
use crate::types::{CanvasPoint, Heading};

/// Nudge applied to the end of a zero-length line. Some renderers draw
/// nothing for a zero-length segment; this turns it into a visible dot.
pub const ZERO_LENGTH_BUMP: f64 = 0.1;

/// The turtle as seen during replay.
///
/// Pen colour, width and font live on the scratch surface, which is where
/// the step interpreter reads and writes them.
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    pub position: CanvasPoint,
    pub heading: Heading,
    pub pen_down: bool,
    pub visible: bool,
}

impl TurtleState {
    /// A visible turtle at `position`, facing up with its pen down.
    pub fn new(position: CanvasPoint) -> Self {
        Self {
            position,
            heading: Heading::NORTH,
            pen_down: true,
            visible: true,
        }
    }
}

/// Font descriptor in canvas order: style, size, family.
pub fn font_descriptor(family: &str, size: f64, style: &str) -> String {
    format!("{} {}pt {}", style, size, family)
}

/// Apply one command to the turtle, painting on `surface` as needed.
pub fn step<S: Surface>(turtle: &mut TurtleState, command: &Command, surface: &mut S) {
    crate::log::trace!(%command, "step");
    match command {
        Command::Forward { distance } => {
            if turtle.pen_down {
                surface.begin_path();
                surface.move_to(turtle.position);
            }
            let bump = if *distance == 0.0 {
                ZERO_LENGTH_BUMP
            } else {
                turtle.position += turtle.heading.offset(*distance);
                0.0
            };
            if turtle.pen_down {
                surface.line_to(turtle.position + glam::dvec2(0.0, bump));
                surface.stroke();
            }
        }
        Command::Turn { angle } => {
            turtle.heading = turtle.heading.turned(*angle);
        }
        Command::PenUp => turtle.pen_down = false,
        Command::PenDown => turtle.pen_down = true,
        Command::PenWidth { width } => {
            surface.set_line_width(clamp_width(*width));
        }
        Command::PenColour { colour } => {
            surface.set_stroke_style(colour);
            surface.set_fill_style(colour);
        }
        Command::HideTurtle => turtle.visible = false,
        Command::ShowTurtle => turtle.visible = true,
        Command::Print { text } => {
            surface.save();
            surface.translate(turtle.position);
            surface.rotate((turtle.heading.degrees() - 90.0).to_radians());
            surface.fill_text(text, CanvasPoint::ZERO);
            surface.restore();
        }
        Command::Font {
            family,
            size,
            style,
        } => {
            surface.set_font(&font_descriptor(family, *size, style));
        }
    }
}
