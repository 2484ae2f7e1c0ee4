//! Color model.
//!
//! Colors are straight (non-premultiplied) RGBA in `[0, 1]`, which is what
//! `glClearColor` consumes.

pub mod color;

pub use color::Color;
