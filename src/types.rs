//! Strongly-typed primitives for turtle geometry.
//!
//! Canvas coordinates grow right (+x) and down (+y). Headings are in degrees,
//! 0° points up the canvas (−y) and angles increase clockwise.

use std::fmt;

use glam::{DVec2, dvec2};

/// A point in canvas space
pub type CanvasPoint = DVec2;

/// Turtle heading in degrees, always in `[0, 360)` (or NaN, which is passed
/// through untouched).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Heading(f64);

impl Heading {
    pub const NORTH: Heading = Heading(0.0);

    /// Normalize an arbitrary angle into `[0, 360)` with floored modulo.
    pub fn new(degrees: f64) -> Heading {
        let wrapped = degrees.rem_euclid(360.0);
        // A tiny negative input wraps to `360 - ε`, which rounds to 360.0.
        if wrapped >= 360.0 {
            Heading(0.0)
        } else {
            Heading(wrapped)
        }
    }

    /// Get the raw value in degrees
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The heading in radians, as `2π · degrees / 360`.
    #[inline]
    pub fn radians(self) -> f64 {
        2.0 * std::f64::consts::PI * self.0 / 360.0
    }

    /// Turn by a signed angle (positive is clockwise).
    #[inline]
    pub fn turned(self, angle: f64) -> Heading {
        Heading::new(self.0 + angle)
    }

    /// Offset travelled by moving `distance` along this heading.
    ///
    /// `dx = distance·sin(θ)`, `dy = −distance·cos(θ)`. Both the dry-run
    /// cursor and the replaying turtle go through this one function so the
    /// two never drift apart.
    pub fn offset(self, distance: f64) -> DVec2 {
        let radians = self.radians();
        dvec2(distance * radians.sin(), -(distance * radians.cos()))
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Canvas dimensions
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// The centre point of a canvas of this size
    pub fn center(self) -> CanvasPoint {
        dvec2(self.w / 2.0, self.h / 2.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}
