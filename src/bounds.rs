//! Dry-run canvas measurement.
//!
//! Every motion command is simulated against a virtual cursor as it is
//! emitted. The canvas only ever grows right and down, so when the cursor
//! walks off the left or top edge, the turtle's starting point is shifted by
//! the same amount to keep the whole drawing on the grown canvas.

use crate::types::{CanvasPoint, Heading, Size};

/// Virtual cursor plus the canvas size and starting origin it implies
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsEstimator {
    /// Where the turtle would be after the commands measured so far
    cursor: CanvasPoint,
    /// Where the turtle would be facing
    heading: Heading,
    /// Logical canvas size needed so far
    canvas: Size,
    /// Where the turtle must start on the grown canvas
    starting: CanvasPoint,
}

impl BoundsEstimator {
    /// Start measuring on a canvas of the given size with the turtle at its
    /// centre, facing up.
    pub fn new(canvas: Size) -> Self {
        Self {
            cursor: canvas.center(),
            heading: Heading::NORTH,
            canvas,
            starting: canvas.center(),
        }
    }

    /// Simulate moving by a signed distance along the virtual heading.
    pub fn measure_move(&mut self, distance: f64) {
        let delta = self.heading.offset(distance);
        self.cursor += delta;

        if self.cursor.x > self.canvas.w || self.cursor.x < 0.0 {
            if self.cursor.x < 0.0 {
                self.starting.x -= delta.x;
                self.cursor.x -= delta.x;
            }
            self.canvas.w += delta.x.abs();
        }

        if self.cursor.y > self.canvas.h || self.cursor.y < 0.0 {
            if self.cursor.y < 0.0 {
                self.starting.y -= delta.y;
                self.cursor.y -= delta.y;
            }
            self.canvas.h += delta.y.abs();
        }

        crate::log::trace!(
            distance,
            cursor_x = self.cursor.x,
            cursor_y = self.cursor.y,
            width = self.canvas.w,
            height = self.canvas.h,
            "measured move"
        );
    }

    /// Simulate turning by a signed angle.
    pub fn measure_rotate(&mut self, angle: f64) {
        self.heading = self.heading.turned(angle);
    }

    pub fn cursor(&self) -> CanvasPoint {
        self.cursor
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn starting(&self) -> CanvasPoint {
        self.starting
    }
}
