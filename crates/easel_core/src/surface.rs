//! Drawing surface contract
//!
//! The [`Surface`] trait is the capability set a host drawing surface must
//! expose: immediate-mode path construction, fill/stroke/text painting,
//! gradient creation, and a set of sticky style fields. Rasterization, path
//! filling, gradient interpolation, and text metrics all live behind this
//! trait; nothing on this side of it touches pixels.
//!
//! Style state is persistent: a style setter mutates the surface and the
//! value stays in effect until the next setter call. Callers that want
//! per-draw isolation must re-apply their style on every draw.
//!
//! [`RecordingSurface`] records every call as a [`SurfaceCommand`] and is
//! the reference implementation used throughout the test suite.

use std::cell::RefCell;
use std::rc::Rc;

use crate::brush::Brush;
use crate::color::Color;
use crate::geometry::Point;
use crate::gradient::Gradient;

// ─────────────────────────────────────────────────────────────────────────────
// Style Field Types
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text baseline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

// ─────────────────────────────────────────────────────────────────────────────
// Surface Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A host 2D drawing surface
///
/// Implementations own the actual rendering. All coordinates are in the
/// surface's own units; angles are radians and are passed through without
/// normalization.
pub trait Surface {
    // ─────────────────────────────────────────────────────────────────────
    // Path Construction
    // ─────────────────────────────────────────────────────────────────────

    /// Start a fresh path, discarding any open one
    fn begin_path(&mut self);

    /// Close the current path
    fn close_path(&mut self);

    /// Move the path cursor without drawing
    fn move_to(&mut self, x: f32, y: f32);

    /// Add a straight segment from the cursor to (x, y)
    fn line_to(&mut self, x: f32, y: f32);

    /// Add an arc around (x, y) between two angles
    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
    );

    /// Add an axis-aligned rectangle with top-left corner (x, y)
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    // ─────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────

    /// Fill the current path with the current fill style
    fn fill(&mut self);

    /// Stroke the current path with the current stroke style
    fn stroke(&mut self);

    /// Fill text at (x, y) with the current fill style, font, alignment,
    /// and baseline
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    // ─────────────────────────────────────────────────────────────────────
    // Gradient Objects
    // ─────────────────────────────────────────────────────────────────────

    /// Create a linear gradient along the axis from (x0, y0) to (x1, y1)
    fn create_linear_gradient(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Gradient;

    /// Create a radial gradient between a start circle and an end circle
    #[allow(clippy::too_many_arguments)]
    fn create_radial_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        r0: f32,
        x1: f32,
        y1: f32,
        r1: f32,
    ) -> Gradient;

    // ─────────────────────────────────────────────────────────────────────
    // Sticky Style State
    // ─────────────────────────────────────────────────────────────────────

    /// Set the stroke width
    fn set_line_width(&mut self, width: f32);

    /// Set the stroke brush
    fn set_stroke_style(&mut self, brush: Brush);

    /// Set the fill brush (also used by `fill_text`)
    fn set_fill_style(&mut self, brush: Brush);

    /// Set the line cap style
    fn set_line_cap(&mut self, cap: LineCap);

    /// Set the font, as a free-form spec string the surface interprets
    /// (e.g. `"20px Georgia"`)
    fn set_font(&mut self, font: &str);

    /// Set the text baseline
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Set the text alignment
    fn set_text_align(&mut self, align: TextAlign);
}

/// A shared, replaceable handle to a drawing surface
///
/// The whole API is single-threaded and synchronous; the handle is not
/// `Send`.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

// ─────────────────────────────────────────────────────────────────────────────
// Recording Surface
// ─────────────────────────────────────────────────────────────────────────────

/// One recorded surface operation
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    // Path construction
    BeginPath,
    ClosePath,
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    Arc {
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    // Painting
    Fill,
    Stroke,
    FillText {
        text: String,
        x: f32,
        y: f32,
    },

    // Gradient objects
    CreateLinearGradient {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    },
    CreateRadialGradient {
        x0: f32,
        y0: f32,
        r0: f32,
        x1: f32,
        y1: f32,
        r1: f32,
    },

    // Style state
    SetLineWidth(f32),
    SetStrokeStyle(Brush),
    SetFillStyle(Brush),
    SetLineCap(LineCap),
    SetFont(String),
    SetTextBaseline(TextBaseline),
    SetTextAlign(TextAlign),
}

/// A surface that records every call for later inspection
///
/// Besides the command log it keeps the sticky style fields observable, so
/// tests can assert both what was called and what state a real surface
/// would be left in.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,

    // Sticky style fields, with the conventional surface defaults
    pub line_width: f32,
    pub stroke_style: Brush,
    pub fill_style: Brush,
    pub line_cap: LineCap,
    pub font: String,
    pub text_baseline: TextBaseline,
    pub text_align: TextAlign,
}

impl RecordingSurface {
    /// Create a new recording surface with default style state
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            line_width: 1.0,
            stroke_style: Brush::Solid(Color::BLACK),
            fill_style: Brush::Solid(Color::BLACK),
            line_cap: LineCap::Butt,
            font: "10px sans-serif".to_string(),
            text_baseline: TextBaseline::Alphabetic,
            text_align: TextAlign::Left,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear the command log; style state is left as-is
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(SurfaceCommand::ClosePath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::LineTo { x, y });
    }

    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
    ) {
        self.commands.push(SurfaceCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(SurfaceCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn create_linear_gradient(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Gradient {
        self.commands
            .push(SurfaceCommand::CreateLinearGradient { x0, y0, x1, y1 });
        Gradient::linear(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn create_radial_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        r0: f32,
        x1: f32,
        y1: f32,
        r1: f32,
    ) -> Gradient {
        self.commands.push(SurfaceCommand::CreateRadialGradient {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
        });
        Gradient::radial(Point::new(x0, y0), r0, Point::new(x1, y1), r1)
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
        self.line_width = width;
    }

    fn set_stroke_style(&mut self, brush: Brush) {
        self.commands
            .push(SurfaceCommand::SetStrokeStyle(brush.clone()));
        self.stroke_style = brush;
    }

    fn set_fill_style(&mut self, brush: Brush) {
        self.commands
            .push(SurfaceCommand::SetFillStyle(brush.clone()));
        self.fill_style = brush;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(SurfaceCommand::SetLineCap(cap));
        self.line_cap = cap;
    }

    fn set_font(&mut self, font: &str) {
        self.commands
            .push(SurfaceCommand::SetFont(font.to_string()));
        self.font = font.to_string();
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(SurfaceCommand::SetTextBaseline(baseline));
        self.text_baseline = baseline;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(SurfaceCommand::SetTextAlign(align));
        self.text_align = align;
    }
}
