//! Circle row and pyramid layout helpers
//!
//! Composites built from [`circle_with_text`](Canvas::circle_with_text):
//! a left-to-right row of labelled circles, and a pyramid of such rows
//! stepping down and right. Spacing is derived from the circle radius, so
//! rows scale with the circles themselves.

use easel_core::Color;

use crate::canvas::Canvas;
use crate::style::StyleOptions;

/// Spacing multiplier between successive circle centers in a row
const CIRCLE_SPACING: f32 = 3.0;

/// The placeholder item; always rendered with emphasis styling
pub const PLACEHOLDER: &str = "?";

const EMPHASIS_LINE_WIDTH: f32 = 3.0;
const EMPHASIS_FONT: &str = "20px Georgia";

/// Styling forced onto placeholder items, regardless of caller options
fn emphasis_options() -> StyleOptions {
    StyleOptions::new()
        .with_stroke_style(Color::RED)
        .with_line_width(EMPHASIS_LINE_WIDTH)
        .with_font(EMPHASIS_FONT)
}

impl Canvas {
    /// Draw `items` as a row of labelled circles starting at (x, y)
    ///
    /// Each circle's center is `3 * radius` right of the previous one; y is
    /// constant across the row. Items equal to [`PLACEHOLDER`] are drawn
    /// with the emphasis styling (red stroke, line width 3, `20px Georgia`,
    /// red text) instead of the caller's `text_fill` and `options`.
    ///
    /// Returns the x where the next circle would start, so rows can be
    /// chained.
    pub fn sequence_of_circles(
        &self,
        items: &[&str],
        x: f32,
        y: f32,
        radius: f32,
        text_fill: Color,
        options: &StyleOptions,
    ) -> f32 {
        let mut next_x = x;
        for item in items {
            if *item == PLACEHOLDER {
                self.circle_with_text(next_x, y, radius, item, Color::RED, &emphasis_options());
            } else {
                self.circle_with_text(next_x, y, radius, item, text_fill, options);
            }
            next_x += CIRCLE_SPACING * radius;
        }
        next_x
    }

    /// Draw `rows` as a pyramid of circle rows starting at (x, y)
    ///
    /// Rows may differ in length. Each row is drawn with
    /// [`sequence_of_circles`](Self::sequence_of_circles); the next row
    /// starts `radius * 3 / 2` further right and `2 * radius` further down,
    /// producing a left-inset, downward-stepped shape.
    pub fn pyramid_of_circles(
        &self,
        rows: &[&[&str]],
        x: f32,
        y: f32,
        radius: f32,
        text_fill: Color,
        options: &StyleOptions,
    ) {
        tracing::trace!(rows = rows.len(), "drawing circle pyramid");
        let mut row_x = x;
        let mut row_y = y;
        for row in rows {
            self.sequence_of_circles(row, row_x, row_y, radius, text_fill, options);
            row_x += radius * CIRCLE_SPACING / 2.0;
            row_y += radius * (CIRCLE_SPACING - 1.0);
        }
    }
}
