use anyhow::Result;
use winit::event::WindowEvent;

use crate::device::RenderingContext;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once, after the window and GL context exist.
    ///
    /// An error here is fatal for the run.
    fn on_init(&mut self, ctx: &InitCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame.
    ///
    /// An error ends the run and is returned from `Runtime::run`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl>;

    /// Called once before the context is destroyed; release GL objects here.
    fn on_exit(&mut self, rendering: &RenderingContext) {
        let _ = rendering;
    }
}
