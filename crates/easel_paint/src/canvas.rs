//! The drawing facade
//!
//! [`Canvas`] wraps a shared drawing surface and exposes styled primitives
//! on top of it. Every primitive runs the same envelope: begin a fresh
//! path, apply the caller's [`StyleOptions`], build the geometry, fill if a
//! fill style was supplied, stroke, close the path. No call leaves the
//! surface with an open path.
//!
//! The canvas never owns the surface. It holds a shared handle supplied by
//! the embedder and can be pointed at a different surface at any time.

use std::rc::Rc;

use easel_core::{Brush, Color, Gradient, HostError, SharedSurface, Surface, SurfaceHost};

use crate::style::StyleOptions;

/// A convenience facade over a 2D drawing surface
pub struct Canvas {
    surface: SharedSurface,
}

impl Canvas {
    /// Create a canvas drawing to `surface`
    pub fn new(surface: SharedSurface) -> Self {
        Self { surface }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Surface Management
    // ─────────────────────────────────────────────────────────────────────

    /// Point the canvas at a different surface
    pub fn set_surface(&mut self, surface: SharedSurface) {
        self.surface = surface;
    }

    /// Resolve a surface from `host` by id and draw to it from now on
    ///
    /// Lookup failures are the host's errors and propagate unmodified; the
    /// current surface is kept on failure.
    pub fn set_surface_from_id(
        &mut self,
        host: &dyn SurfaceHost,
        id: &str,
    ) -> Result<(), HostError> {
        let surface = host.surface_2d(id)?;
        tracing::debug!(id, "swapping drawing surface");
        self.surface = surface;
        Ok(())
    }

    /// The surface currently drawn to
    pub fn surface(&self) -> SharedSurface {
        Rc::clone(&self.surface)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Styling
    // ─────────────────────────────────────────────────────────────────────

    /// Apply every set field of `options` onto the surface's style state
    ///
    /// Unset fields are skipped. Applied values are sticky on the surface:
    /// they persist beyond this call until overwritten later.
    pub fn set_styling_properties(&self, options: &StyleOptions) {
        let mut surface = self.surface.borrow_mut();
        Self::apply_options(&mut *surface, options);
    }

    fn apply_options(surface: &mut dyn Surface, options: &StyleOptions) {
        if let Some(width) = options.line_width {
            surface.set_line_width(width);
        }
        if let Some(brush) = &options.stroke_style {
            surface.set_stroke_style(brush.clone());
        }
        if let Some(brush) = &options.fill_style {
            surface.set_fill_style(brush.clone());
        }
        if let Some(cap) = options.line_cap {
            surface.set_line_cap(cap);
        }
        if let Some(font) = &options.font {
            surface.set_font(font);
        }
        if let Some(baseline) = options.text_baseline {
            surface.set_text_baseline(baseline);
        }
        if let Some(align) = options.text_align {
            surface.set_text_align(align);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Gradient Builders
    // ─────────────────────────────────────────────────────────────────────

    /// Build a linear gradient with two color stops
    ///
    /// Requests the gradient from the surface, registers the stops, and
    /// returns it for use as a fill or stroke brush. Draws nothing. Stop
    /// positions are forwarded uninterpreted; values outside `[0.0, 1.0]`
    /// render however the surface decides.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_linear_gradient(
        &self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stop_color_0: Color,
        stop_pos_0: f32,
        stop_color_1: Color,
        stop_pos_1: f32,
    ) -> Gradient {
        let mut gradient = self
            .surface
            .borrow_mut()
            .create_linear_gradient(x0, y0, x1, y1);
        gradient.add_color_stop(stop_pos_0, stop_color_0);
        gradient.add_color_stop(stop_pos_1, stop_color_1);
        gradient
    }

    /// Build a radial gradient with two color stops
    ///
    /// The axis runs between a start circle (center (x0, y0), radius r0)
    /// and an end circle (center (x1, y1), radius r1). Same contract as
    /// [`generate_linear_gradient`](Self::generate_linear_gradient).
    #[allow(clippy::too_many_arguments)]
    pub fn generate_radial_gradient(
        &self,
        x0: f32,
        y0: f32,
        r0: f32,
        x1: f32,
        y1: f32,
        r1: f32,
        stop_color_0: Color,
        stop_pos_0: f32,
        stop_color_1: Color,
        stop_pos_1: f32,
    ) -> Gradient {
        let mut gradient = self
            .surface
            .borrow_mut()
            .create_radial_gradient(x0, y0, r0, x1, y1, r1);
        gradient.add_color_stop(stop_pos_0, stop_color_0);
        gradient.add_color_stop(stop_pos_1, stop_color_1);
        gradient
    }

    // ─────────────────────────────────────────────────────────────────────
    // Drawing Primitives
    // ─────────────────────────────────────────────────────────────────────

    /// Stroke a line segment from (x1, y1) to (x2, y2)
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, options: &StyleOptions) {
        let mut surface = self.surface.borrow_mut();
        surface.begin_path();
        Self::apply_options(&mut *surface, options);
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        surface.stroke();
        surface.close_path();
    }

    /// Stroke an arc around (x, y) between two angles in radians
    ///
    /// Angles are passed through without normalization.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counter_clockwise: bool,
        options: &StyleOptions,
    ) {
        let mut surface = self.surface.borrow_mut();
        surface.begin_path();
        Self::apply_options(&mut *surface, options);
        surface.arc(x, y, radius, start_angle, end_angle, counter_clockwise);
        surface.stroke();
        surface.close_path();
    }

    /// Draw an axis-aligned rectangle with top-left corner (x, y)
    ///
    /// Filled only when `options.fill_style` is set; fill runs before the
    /// stroke.
    pub fn rect(&self, x: f32, y: f32, width: f32, height: f32, options: &StyleOptions) {
        let mut surface = self.surface.borrow_mut();
        surface.begin_path();
        Self::apply_options(&mut *surface, options);
        surface.rect(x, y, width, height);
        if options.fill_style.is_some() {
            surface.fill();
        }
        surface.stroke();
        surface.close_path();
    }

    /// Draw a full circle centered on (x, y)
    ///
    /// A closed clockwise arc from 0 to 2π. Filled only when
    /// `options.fill_style` is set.
    pub fn circle(&self, x: f32, y: f32, radius: f32, options: &StyleOptions) {
        let mut surface = self.surface.borrow_mut();
        surface.begin_path();
        Self::apply_options(&mut *surface, options);
        surface.arc(x, y, radius, 0.0, std::f32::consts::TAU, false);
        if options.fill_style.is_some() {
            surface.fill();
        }
        surface.stroke();
        surface.close_path();
    }

    /// Draw a circle with `text` rendered at its center
    ///
    /// The circle itself follows the [`circle`](Self::circle) contract.
    /// After the conditional fill, the surface's fill style is forcibly set
    /// to `text_fill` for the text (the circle fill has already run with
    /// the caller's brush). Font, alignment, and baseline are whatever the
    /// surface currently holds; set them through `options` if the defaults
    /// are not wanted.
    pub fn circle_with_text(
        &self,
        x: f32,
        y: f32,
        radius: f32,
        text: &str,
        text_fill: impl Into<Brush>,
        options: &StyleOptions,
    ) {
        let mut surface = self.surface.borrow_mut();
        surface.begin_path();
        Self::apply_options(&mut *surface, options);
        surface.arc(x, y, radius, 0.0, std::f32::consts::TAU, false);
        if options.fill_style.is_some() {
            surface.fill();
        }
        surface.set_fill_style(text_fill.into());
        surface.fill_text(text, x, y);
        surface.stroke();
        surface.close_path();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use easel_core::{
        Brush, Color, InMemoryHost, LineCap, RecordingSurface, SurfaceCommand, TextAlign,
    };

    use super::*;

    fn recording_canvas() -> (Canvas, Rc<RefCell<RecordingSurface>>) {
        let surface = Rc::new(RefCell::new(RecordingSurface::new()));
        let canvas = Canvas::new(surface.clone());
        (canvas, surface)
    }

    #[test]
    fn test_line_is_stroke_only() {
        let (canvas, surface) = recording_canvas();

        // Even a fill style on the options must not trigger a fill
        canvas.line(
            0.0,
            0.0,
            10.0,
            20.0,
            &StyleOptions::new().with_fill_style(Color::RED),
        );

        let surface = surface.borrow();
        assert!(!surface.commands().contains(&SurfaceCommand::Fill));
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::SetFillStyle(Brush::Solid(Color::RED)),
                SurfaceCommand::MoveTo { x: 0.0, y: 0.0 },
                SurfaceCommand::LineTo { x: 10.0, y: 20.0 },
                SurfaceCommand::Stroke,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_arc_passes_angles_through_unnormalized() {
        let (canvas, surface) = recording_canvas();

        canvas.arc(5.0, 5.0, 4.0, -1.0, 7.5, true, &StyleOptions::new());

        let surface = surface.borrow();
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::Arc {
                    x: 5.0,
                    y: 5.0,
                    radius: 4.0,
                    start_angle: -1.0,
                    end_angle: 7.5,
                    counter_clockwise: true,
                },
                SurfaceCommand::Stroke,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_rect_fills_only_when_fill_style_is_set() {
        let (canvas, surface) = recording_canvas();

        canvas.rect(0.0, 0.0, 10.0, 10.0, &StyleOptions::new());
        assert!(!surface.borrow().commands().contains(&SurfaceCommand::Fill));

        surface.borrow_mut().clear();
        canvas.rect(
            0.0,
            0.0,
            10.0,
            10.0,
            &StyleOptions::new().with_fill_style(Color::GREEN),
        );
        assert!(surface.borrow().commands().contains(&SurfaceCommand::Fill));
    }

    #[test]
    fn test_fill_is_gated_on_presence_not_value() {
        let (canvas, surface) = recording_canvas();

        // A transparent fill brush still counts as "fill style set"
        canvas.rect(
            0.0,
            0.0,
            10.0,
            10.0,
            &StyleOptions::new().with_fill_style(Color::TRANSPARENT),
        );
        assert!(surface.borrow().commands().contains(&SurfaceCommand::Fill));
    }

    #[test]
    fn test_rect_fill_runs_before_stroke() {
        let (canvas, surface) = recording_canvas();

        canvas.rect(
            1.0,
            2.0,
            3.0,
            4.0,
            &StyleOptions::new().with_fill_style(Color::BLUE),
        );

        let surface = surface.borrow();
        let fill_at = surface
            .commands()
            .iter()
            .position(|c| *c == SurfaceCommand::Fill)
            .unwrap();
        let stroke_at = surface
            .commands()
            .iter()
            .position(|c| *c == SurfaceCommand::Stroke)
            .unwrap();
        assert!(fill_at < stroke_at);
        assert!(surface.commands().contains(&SurfaceCommand::Rect {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        }));
    }

    #[test]
    fn test_circle_is_a_closed_clockwise_arc() {
        let (canvas, surface) = recording_canvas();

        canvas.circle(50.0, 60.0, 25.0, &StyleOptions::new());

        let surface = surface.borrow();
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::Arc {
                    x: 50.0,
                    y: 60.0,
                    radius: 25.0,
                    start_angle: 0.0,
                    end_angle: std::f32::consts::TAU,
                    counter_clockwise: false,
                },
                SurfaceCommand::Stroke,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_circle_with_text_renders_text_at_center() {
        let (canvas, surface) = recording_canvas();

        canvas.circle_with_text(
            30.0,
            40.0,
            10.0,
            "7",
            Color::BLUE,
            &StyleOptions::new().with_fill_style(Color::WHITE),
        );

        let surface = surface.borrow();
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::BeginPath,
                SurfaceCommand::SetFillStyle(Brush::Solid(Color::WHITE)),
                SurfaceCommand::Arc {
                    x: 30.0,
                    y: 40.0,
                    radius: 10.0,
                    start_angle: 0.0,
                    end_angle: std::f32::consts::TAU,
                    counter_clockwise: false,
                },
                // Circle fill uses the caller's brush...
                SurfaceCommand::Fill,
                // ...then the text fill is forced for the text only
                SurfaceCommand::SetFillStyle(Brush::Solid(Color::BLUE)),
                SurfaceCommand::FillText {
                    text: "7".to_string(),
                    x: 30.0,
                    y: 40.0,
                },
                SurfaceCommand::Stroke,
                SurfaceCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_circle_with_text_without_fill_style_skips_circle_fill() {
        let (canvas, surface) = recording_canvas();

        canvas.circle_with_text(0.0, 0.0, 5.0, "x", Color::BLACK, &StyleOptions::new());

        let surface = surface.borrow();
        assert!(!surface.commands().contains(&SurfaceCommand::Fill));
        assert!(surface.commands().contains(&SurfaceCommand::FillText {
            text: "x".to_string(),
            x: 0.0,
            y: 0.0,
        }));
    }

    #[test]
    fn test_styling_mutates_exactly_the_set_fields() {
        let (canvas, surface) = recording_canvas();

        canvas.set_styling_properties(&StyleOptions::new().with_line_width(4.0));

        {
            let surface = surface.borrow();
            assert_eq!(surface.commands(), &[SurfaceCommand::SetLineWidth(4.0)]);
            assert_eq!(surface.line_width, 4.0);
            // Untouched fields keep their defaults
            assert_eq!(surface.stroke_style, Brush::Solid(Color::BLACK));
            assert_eq!(surface.text_align, TextAlign::Left);
        }

        surface.borrow_mut().clear();
        canvas.set_styling_properties(&StyleOptions::new());
        assert!(surface.borrow().commands().is_empty());
    }

    #[test]
    fn test_applied_style_is_sticky_across_draws() {
        let (canvas, surface) = recording_canvas();

        canvas.set_styling_properties(
            &StyleOptions::new()
                .with_line_cap(LineCap::Round)
                .with_font("12px serif"),
        );
        canvas.line(0.0, 0.0, 1.0, 1.0, &StyleOptions::new());

        let surface = surface.borrow();
        assert_eq!(surface.line_cap, LineCap::Round);
        assert_eq!(surface.font, "12px serif");
    }

    #[test]
    fn test_repeated_draws_are_independent() {
        let (canvas, surface) = recording_canvas();
        let options = StyleOptions::new().with_fill_style(Color::RED);

        canvas.circle(10.0, 10.0, 5.0, &options);
        let count = surface.borrow().commands().len();
        canvas.circle(10.0, 10.0, 5.0, &options);

        assert_eq!(surface.borrow().commands().len(), count * 2);
    }

    #[test]
    fn test_generate_linear_gradient_registers_two_stops() {
        let (canvas, surface) = recording_canvas();

        let gradient =
            canvas.generate_linear_gradient(0.0, 0.0, 100.0, 0.0, Color::RED, 0.0, Color::BLUE, 1.0);

        assert_eq!(gradient.stops().len(), 2);
        assert_eq!(gradient.stops()[0].offset, 0.0);
        assert_eq!(gradient.stops()[0].color, Color::RED);
        assert_eq!(gradient.stops()[1].offset, 1.0);
        assert_eq!(gradient.stops()[1].color, Color::BLUE);

        // The builder requests the gradient but draws nothing
        let surface = surface.borrow();
        assert_eq!(
            surface.commands(),
            &[SurfaceCommand::CreateLinearGradient {
                x0: 0.0,
                y0: 0.0,
                x1: 100.0,
                y1: 0.0,
            }]
        );
    }

    #[test]
    fn test_generate_radial_gradient_builds_distinct_objects() {
        let (canvas, _surface) = recording_canvas();

        let a =
            canvas.generate_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, 50.0, Color::RED, 0.2, Color::BLUE, 0.8);
        let mut b =
            canvas.generate_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, 50.0, Color::RED, 0.2, Color::BLUE, 0.8);

        assert_eq!(a, b);
        b.add_color_stop(1.0, Color::WHITE);
        // Mutating one handle leaves the other untouched
        assert_eq!(a.stops().len(), 2);
        assert_eq!(b.stops().len(), 3);
    }

    #[test]
    fn test_gradient_used_as_fill_style() {
        let (canvas, surface) = recording_canvas();

        let gradient =
            canvas.generate_linear_gradient(0.0, 0.0, 0.0, 40.0, Color::WHITE, 0.0, Color::BLACK, 1.0);
        surface.borrow_mut().clear();

        canvas.rect(
            0.0,
            0.0,
            40.0,
            40.0,
            &StyleOptions::new().with_fill_style(gradient.clone()),
        );

        let surface = surface.borrow();
        assert!(surface.commands().contains(&SurfaceCommand::Fill));
        assert_eq!(surface.fill_style, Brush::Gradient(gradient));
    }

    #[test]
    fn test_set_surface_from_id_swaps_on_hit() {
        let (mut canvas, old_surface) = recording_canvas();

        let new_surface = Rc::new(RefCell::new(RecordingSurface::new()));
        let mut host = InMemoryHost::new();
        host.insert("panel", new_surface.clone());

        canvas.set_surface_from_id(&host, "panel").unwrap();
        canvas.line(0.0, 0.0, 1.0, 1.0, &StyleOptions::new());

        assert!(old_surface.borrow().commands().is_empty());
        assert_eq!(new_surface.borrow().commands().len(), 5);
    }

    #[test]
    fn test_set_surface_from_id_propagates_miss_and_keeps_surface() {
        let (mut canvas, surface) = recording_canvas();
        let host = InMemoryHost::new();

        let err = canvas.set_surface_from_id(&host, "missing").unwrap_err();
        assert_eq!(err.to_string(), "no drawing surface with id `missing`");

        // Still drawing to the original surface
        canvas.line(0.0, 0.0, 1.0, 1.0, &StyleOptions::new());
        assert_eq!(surface.borrow().commands().len(), 5);
    }
}
