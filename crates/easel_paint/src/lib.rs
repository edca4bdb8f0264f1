//! Easel Paint
//!
//! A convenience facade over a 2D drawing surface: styled primitives
//! (lines, arcs, rectangles, circles, text-in-circle), two-stop gradient
//! builders, and layout helpers that arrange labelled circles in rows and
//! pyramids.
//!
//! The facade owns no pixels. It drives a surface supplied by the embedder
//! through the [`easel_core::Surface`] trait; rasterization, gradient
//! interpolation, and text metrics are entirely the surface's.
//!
//! # Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use easel_core::{Color, RecordingSurface};
//! use easel_paint::{Canvas, StyleOptions};
//!
//! let surface = Rc::new(RefCell::new(RecordingSurface::new()));
//! let canvas = Canvas::new(surface.clone());
//!
//! canvas.circle(
//!     40.0,
//!     40.0,
//!     25.0,
//!     &StyleOptions::new().with_fill_style(Color::BLUE),
//! );
//!
//! let next_x = canvas.sequence_of_circles(
//!     &["1", "2", "?"],
//!     0.0,
//!     100.0,
//!     10.0,
//!     Color::BLACK,
//!     &StyleOptions::new(),
//! );
//! assert_eq!(next_x, 90.0);
//! assert!(!surface.borrow().commands().is_empty());
//! ```

pub mod canvas;
pub mod layout;
pub mod style;

pub use canvas::Canvas;
pub use layout::PLACEHOLDER;
pub use style::StyleOptions;
