//! Host environment surface lookup
//!
//! Surfaces live in some host environment (a window, a widget tree, an
//! embedder's registry) and are resolved by string id. The lookup is the
//! host's concern; failures are reported as [`HostError`] and propagate to
//! the caller untouched; nothing here catches, wraps, or retries.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::surface::SharedSurface;

/// Errors produced while resolving a drawing surface by id
#[derive(Error, Debug)]
pub enum HostError {
    /// No surface is registered under the requested id
    #[error("no drawing surface with id `{0}`")]
    UnknownSurface(String),

    /// The surface exists but cannot provide a 2D drawing context
    #[error("surface `{0}` cannot provide a 2D context")]
    ContextUnavailable(String),
}

/// A host environment that can resolve drawing surfaces by id
pub trait SurfaceHost {
    /// Resolve the surface registered under `id` and yield its 2D context
    fn surface_2d(&self, id: &str) -> Result<SharedSurface, HostError>;
}

/// An in-memory id → surface registry
///
/// The simplest possible host: embedders register surfaces up front and
/// resolve them by id later. Also the host used throughout the test suite.
#[derive(Default)]
pub struct InMemoryHost {
    surfaces: FxHashMap<String, SharedSurface>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under `id`, replacing any previous one
    pub fn insert(&mut self, id: impl Into<String>, surface: SharedSurface) {
        let id = id.into();
        tracing::trace!(id = id.as_str(), "registering drawing surface");
        self.surfaces.insert(id, surface);
    }

    /// Remove the surface registered under `id`
    pub fn remove(&mut self, id: &str) -> Option<SharedSurface> {
        self.surfaces.remove(id)
    }
}

impl SurfaceHost for InMemoryHost {
    fn surface_2d(&self, id: &str) -> Result<SharedSurface, HostError> {
        self.surfaces
            .get(id)
            .cloned()
            .ok_or_else(|| HostError::UnknownSurface(id.to_string()))
    }
}
