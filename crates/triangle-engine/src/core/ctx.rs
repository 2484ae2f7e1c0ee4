use crate::device::RenderingContext;
use crate::input::{InputFrame, InputState};
use crate::window::WindowState;

/// Context passed to `core::App::on_init`.
pub struct InitCtx<'a> {
    pub rendering: &'a RenderingContext,
    pub window: &'a WindowState,
}

impl<'a> InitCtx<'a> {
    #[inline]
    pub fn gl(&self) -> &'a glow::Context {
        self.rendering.gl()
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub rendering: &'a RenderingContext,
    pub window: &'a mut WindowState,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
}

impl<'a> FrameCtx<'a> {
    #[inline]
    pub fn gl(&self) -> &'a glow::Context {
        self.rendering.gl()
    }
}
