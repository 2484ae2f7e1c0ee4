//! Render loop.
//!
//! `FrameLoop` is a two-state machine (Running → Terminated) driven once per
//! redraw by the application. It owns the `TriangleScene`: the uploaded
//! triangle and the linked program.

mod config;
mod frame_loop;
mod scene;

pub use config::{RendererConfig, DRAW_ENV_VAR};
pub use frame_loop::{FrameLoop, LoopState};
pub use scene::TriangleScene;
