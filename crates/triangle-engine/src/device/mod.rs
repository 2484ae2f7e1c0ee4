//! OpenGL context + function loading.
//!
//! This module is responsible for:
//! - creating the GL display/surface/context for a window
//! - loading GL entry points through glow
//! - exposing the narrow `GlApi` surface the engine issues commands through

mod api;
mod context;
mod error;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{GlApi, Present};
pub use context::{ContextInit, RenderingContext};
pub use error::WindowCreationFailed;
