//! Scratch and display surfaces
//!
//! This module is organized into submodules:
//! - `defaults`: Default pen style and turtle glyph dimensions
//! - `glyph`: Turtle marker geometry
//!
//! Turtle drawing goes to the off-screen scratch surface. Each frame the
//! scratch surface is copied over the display surface and the turtle marker
//! is painted on top, so the marker never ends up in the drawing itself.

pub mod defaults;
pub mod glyph;

pub use glyph::TurtleGlyph;

use std::f64::consts::PI;

use crate::step::TurtleState;
use crate::surface::Surface;
use crate::types::Size;

/// The two surfaces a run paints on, always kept the same size
#[derive(Debug, Clone)]
pub struct Surfaces<S> {
    scratch: S,
    display: S,
}

impl<S: Surface> Surfaces<S> {
    pub fn new(scratch: S, display: S) -> Self {
        let mut surfaces = Self { scratch, display };
        let size = surfaces.scratch.size();
        surfaces.display.resize(size);
        surfaces
    }

    pub fn size(&self) -> Size {
        self.scratch.size()
    }

    /// Resize both surfaces. This clears them, so the pen style is restored
    /// afterwards.
    pub fn resize(&mut self, size: Size) {
        self.scratch.resize(size);
        self.display.resize(size);
        self.reset_style();
    }

    /// Black pen, 1px wide, round caps, 18pt Arial.
    pub fn reset_style(&mut self) {
        let s = &mut self.scratch;
        s.set_stroke_style(defaults::PEN_COLOUR);
        s.set_fill_style(defaults::PEN_COLOUR);
        s.set_line_width(defaults::LINE_WIDTH);
        s.set_line_cap(defaults::LINE_CAP);
        s.set_font(defaults::FONT);
    }

    pub fn scratch(&self) -> &S {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut S {
        &mut self.scratch
    }

    pub fn display_surface(&self) -> &S {
        &self.display
    }

    /// Copy the drawing to the display and put the turtle marker on top.
    pub fn display(&mut self, turtle: &TurtleState) {
        self.display.copy_from(&self.scratch);
        if !turtle.visible {
            return;
        }

        let d = &mut self.display;
        // The marker takes the pen's colour.
        d.set_stroke_style(self.scratch.stroke_style());
        d.set_fill_style(self.scratch.fill_style());

        let glyph = TurtleGlyph::new(turtle.position, turtle.heading, self.scratch.line_width());

        d.begin_path();
        d.arc(glyph.center, glyph.radius, 0.0, 2.0 * PI, false);
        d.set_line_width(defaults::BODY_LINE_WIDTH);
        d.stroke();

        d.begin_path();
        d.move_to(glyph.tip);
        d.line_to(glyph.left);
        d.bezier_curve_to(glyph.left_control, glyph.right_control, glyph.right);
        d.close_path();
        d.fill();
    }
}
