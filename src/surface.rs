//! Drawing surface abstraction
//!
//! `Surface` is the imperative 2D API the turtle paints through: a path is
//! built with `begin_path`/`move_to`/`line_to`/..., then painted with
//! `stroke` or `fill`, under a save/restore-able style and transform state.
//!
//! `RecordingSurface` implements it as a display list, which is what the
//! tests (and hosts that rasterize elsewhere) consume.

use std::fmt;

use glam::{DAffine2, DVec2};

use crate::types::{CanvasPoint, Size};

/// How the ends of stroked lines are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCap::Butt => write!(f, "butt"),
            LineCap::Round => write!(f, "round"),
            LineCap::Square => write!(f, "square"),
        }
    }
}

/// An imperative 2D drawing surface
pub trait Surface {
    fn size(&self) -> Size;

    /// Change the surface size. Like a canvas, this wipes the contents and
    /// resets the drawing state to its defaults.
    fn resize(&mut self, size: Size);

    /// Replace this surface's contents with `source`'s (overwrite, not blend).
    fn copy_from(&mut self, source: &Self)
    where
        Self: Sized;

    // Path building
    fn begin_path(&mut self);
    fn move_to(&mut self, point: CanvasPoint);
    fn line_to(&mut self, point: CanvasPoint);
    fn arc(&mut self, center: CanvasPoint, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool);
    fn bezier_curve_to(&mut self, control1: CanvasPoint, control2: CanvasPoint, to: CanvasPoint);
    fn close_path(&mut self);

    // Painting
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_text(&mut self, text: &str, at: CanvasPoint);

    // State
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, by: DVec2);
    fn rotate(&mut self, radians: f64);

    // Style
    fn stroke_style(&self) -> &str;
    fn set_stroke_style(&mut self, style: &str);
    fn fill_style(&self) -> &str;
    fn set_fill_style(&mut self, style: &str);
    fn line_width(&self) -> f64;
    fn set_line_width(&mut self, width: f64);
    fn line_cap(&self) -> LineCap;
    fn set_line_cap(&mut self, cap: LineCap);
    fn font(&self) -> &str;
    fn set_font(&mut self, font: &str);
}

// ============================================================================
// Recording implementation
// ============================================================================

/// A single sub-path operation, in surface (post-transform) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    MoveTo(CanvasPoint),
    LineTo(CanvasPoint),
    /// Arc around a transformed centre. Angles are recorded as given.
    Arc {
        center: CanvasPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    BezierCurveTo {
        control1: CanvasPoint,
        control2: CanvasPoint,
        to: CanvasPoint,
    },
    ClosePath,
}

/// A painted operation, with the style that was in force when it happened
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke {
        path: Vec<PathOp>,
        style: String,
        width: f64,
        cap: LineCap,
    },
    Fill {
        path: Vec<PathOp>,
        style: String,
    },
    Text {
        text: String,
        transform: DAffine2,
        font: String,
        style: String,
    },
}

/// The save/restore-able part of a surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub stroke_style: String,
    pub fill_style: String,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub font: String,
    pub transform: DAffine2,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            stroke_style: "#000000".to_string(),
            fill_style: "#000000".to_string(),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            font: "10px sans-serif".to_string(),
            transform: DAffine2::IDENTITY,
        }
    }
}

/// A surface that keeps a display list instead of pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    path: Vec<PathOp>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Everything painted since the last resize
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// The stroke operations, in paint order
    pub fn strokes(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Stroke { .. }))
    }

    fn point(&self, p: CanvasPoint) -> CanvasPoint {
        self.state.transform.transform_point2(p)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.state = SurfaceState::default();
        self.stack.clear();
        self.path.clear();
        self.ops.clear();
    }

    fn copy_from(&mut self, source: &Self) {
        self.ops.clone_from(&source.ops);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: CanvasPoint) {
        let p = self.point(point);
        self.path.push(PathOp::MoveTo(p));
    }

    fn line_to(&mut self, point: CanvasPoint) {
        let p = self.point(point);
        self.path.push(PathOp::LineTo(p));
    }

    fn arc(&mut self, center: CanvasPoint, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) {
        let center = self.point(center);
        self.path.push(PathOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn bezier_curve_to(&mut self, control1: CanvasPoint, control2: CanvasPoint, to: CanvasPoint) {
        let op = PathOp::BezierCurveTo {
            control1: self.point(control1),
            control2: self.point(control2),
            to: self.point(to),
        };
        self.path.push(op);
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::ClosePath);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            path: self.path.clone(),
            style: self.state.stroke_style.clone(),
            width: self.state.line_width,
            cap: self.state.line_cap,
        });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill {
            path: self.path.clone(),
            style: self.state.fill_style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, at: CanvasPoint) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            transform: self.state.transform * DAffine2::from_translation(at),
            font: self.state.font.clone(),
            style: self.state.fill_style.clone(),
        });
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, by: DVec2) {
        self.state.transform = self.state.transform * DAffine2::from_translation(by);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * DAffine2::from_angle(radians);
    }

    fn stroke_style(&self) -> &str {
        &self.state.stroke_style
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.state.stroke_style = style.to_string();
    }

    fn fill_style(&self) -> &str {
        &self.state.fill_style
    }

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill_style = style.to_string();
    }

    fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Zero, negative, infinite and NaN widths are ignored, as on a canvas.
    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn line_cap(&self) -> LineCap {
        self.state.line_cap
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn font(&self) -> &str {
        &self.state.font
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }
}
