//! Triangle engine crate.
//!
//! Owns the window + OpenGL runtime pieces, the shader pipeline builder, the
//! vertex buffer, and the frame loop used by the `hello-triangle` binary.

pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod paint;
pub mod pipeline;
pub mod render;
pub mod window;
