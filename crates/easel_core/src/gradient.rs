//! Gradient objects handed out by a drawing surface

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::Point;

/// A color stop along a gradient axis
///
/// Offsets are normally in `[0.0, 1.0]` but are stored uninterpreted;
/// what an out-of-range offset renders as is up to the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A gradient created by a drawing surface
///
/// Surfaces hand these out through [`Surface::create_linear_gradient`] and
/// [`Surface::create_radial_gradient`]; the caller registers stops and then
/// uses the gradient as a [`Brush`]. The gradient is owned by the caller;
/// nothing caches or reuses it across calls.
///
/// [`Surface::create_linear_gradient`]: crate::surface::Surface::create_linear_gradient
/// [`Surface::create_radial_gradient`]: crate::surface::Surface::create_radial_gradient
/// [`Brush`]: crate::brush::Brush
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear gradient along the axis between two points
    Linear {
        start: Point,
        end: Point,
        stops: SmallVec<[GradientStop; 2]>,
    },
    /// Radial gradient between a start circle and an end circle
    Radial {
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
        stops: SmallVec<[GradientStop; 2]>,
    },
}

impl Gradient {
    /// Create a linear gradient with no stops yet
    pub fn linear(start: Point, end: Point) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: SmallVec::new(),
        }
    }

    /// Create a radial gradient with no stops yet
    pub fn radial(
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
    ) -> Self {
        Gradient::Radial {
            start_center,
            start_radius,
            end_center,
            end_radius,
            stops: SmallVec::new(),
        }
    }

    /// Register a color stop at the given offset
    pub fn add_color_stop(&mut self, offset: f32, color: Color) {
        let stops = match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        };
        stops.push(GradientStop::new(offset, color));
    }

    /// The registered color stops, in registration order
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        }
    }
}
