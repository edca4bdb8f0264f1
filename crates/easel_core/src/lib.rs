//! Easel Core
//!
//! Foundational types for the Easel drawing API:
//!
//! - **Surface contract**: the [`Surface`] trait every host drawing surface
//!   implements, covering path construction, fill/stroke/text, gradient
//!   creation, and sticky style state
//! - **Recording surface**: [`RecordingSurface`] logs every call as a
//!   [`SurfaceCommand`], for tests and headless embedders
//! - **Host lookup**: [`SurfaceHost`] resolves surfaces by string id;
//!   [`InMemoryHost`] is the registry-backed implementation
//! - **Visual types**: [`Color`], [`Point`], [`Gradient`], [`Brush`], and
//!   the style field enums
//!
//! # Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use easel_core::{RecordingSurface, Surface};
//!
//! let surface = Rc::new(RefCell::new(RecordingSurface::new()));
//!
//! surface.borrow_mut().begin_path();
//! surface.borrow_mut().move_to(0.0, 0.0);
//! surface.borrow_mut().line_to(10.0, 10.0);
//! surface.borrow_mut().stroke();
//! surface.borrow_mut().close_path();
//!
//! assert_eq!(surface.borrow().commands().len(), 5);
//! ```

pub mod brush;
pub mod color;
pub mod geometry;
pub mod gradient;
pub mod host;
pub mod surface;

pub use brush::Brush;
pub use color::Color;
pub use geometry::Point;
pub use gradient::{Gradient, GradientStop};
pub use host::{HostError, InMemoryHost, SurfaceHost};
pub use surface::{
    LineCap, RecordingSurface, SharedSurface, Surface, SurfaceCommand, TextAlign, TextBaseline,
};
