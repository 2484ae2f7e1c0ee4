use anyhow::{Context, Result};
use triangle_engine::core::{App, AppControl, FrameCtx, InitCtx};
use triangle_engine::device::RenderingContext;
use triangle_engine::render::{FrameLoop, LoopState, RendererConfig, TriangleScene};

use crate::shaders::{FRAGMENT_SHADER, TRIANGLE_VERTICES, VERTEX_SHADER};

pub struct TriangleApp {
    config: RendererConfig,
    frame_loop: Option<FrameLoop<glow::Context>>,
}

impl TriangleApp {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            frame_loop: None,
        }
    }
}

impl App for TriangleApp {
    fn on_init(&mut self, ctx: &InitCtx<'_>) -> Result<()> {
        let scene =
            TriangleScene::build(ctx.gl(), &VERTEX_SHADER, &FRAGMENT_SHADER, &TRIANGLE_VERTICES)
                .context("failed to upload triangle geometry")?;

        let size = ctx.window.size();
        log::info!(
            "rendering at {}x{}, draw call {}",
            size.width,
            size.height,
            if self.config.draw_triangle { "on" } else { "off" }
        );

        self.frame_loop = Some(FrameLoop::new(self.config.clone(), scene));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        let Some(frame_loop) = self.frame_loop.as_mut() else {
            return Ok(AppControl::Exit);
        };

        let gl = ctx.gl();
        let state = frame_loop.iterate(gl, ctx.rendering, ctx.window, ctx.input, ctx.input_frame)?;
        Ok(control_for(state))
    }

    fn on_exit(&mut self, rendering: &RenderingContext) {
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.shutdown(rendering.gl());
            log::info!("exiting after {} frames", frame_loop.frames());
        }
    }
}

fn control_for(state: LoopState) -> AppControl {
    match state {
        LoopState::Running => AppControl::Continue,
        LoopState::Terminated => AppControl::Exit,
    }
}
