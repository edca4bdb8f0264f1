//! Per-call styling options

use easel_core::{Brush, LineCap, TextAlign, TextBaseline};

/// Styling applied to the surface before a draw call
///
/// Every field is optional; unset fields leave the surface's corresponding
/// style field untouched. Applied style is sticky on the surface: it stays
/// in effect until some later call overwrites it. Primitives apply their
/// options once per invocation, so passing the default (all-unset) options
/// means drawing with whatever style the surface was left in.
///
/// Fill is gated on the `fill_style` field being *set*, not on its value:
/// `Some(Brush::Solid(Color::TRANSPARENT))` still fills.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    pub line_width: Option<f32>,
    pub stroke_style: Option<Brush>,
    pub fill_style: Option<Brush>,
    pub line_cap: Option<LineCap>,
    pub font: Option<String>,
    pub text_baseline: Option<TextBaseline>,
    pub text_align: Option<TextAlign>,
}

impl StyleOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Set the stroke brush
    pub fn with_stroke_style(mut self, brush: impl Into<Brush>) -> Self {
        self.stroke_style = Some(brush.into());
        self
    }

    /// Set the fill brush (presence of this field is what enables fill)
    pub fn with_fill_style(mut self, brush: impl Into<Brush>) -> Self {
        self.fill_style = Some(brush.into());
        self
    }

    /// Set the line cap style
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    /// Set the font spec string
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the text baseline
    pub fn with_text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.text_baseline = Some(baseline);
        self
    }

    /// Set the text alignment
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
}
