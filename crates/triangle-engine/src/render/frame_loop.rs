use anyhow::Result;

use crate::device::{GlApi, Present};
use crate::input::{InputFrame, InputState, Key};
use crate::window::WindowState;

use super::config::RendererConfig;
use super::scene::TriangleScene;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The per-frame render loop.
///
/// Owns the scene (program + buffer) for as long as it runs. Each
/// [`iterate`](FrameLoop::iterate) is one pass of: input → clear → (draw) →
/// present. OS event polling between iterations belongs to the runtime.
pub struct FrameLoop<G: GlApi> {
    state: LoopState,
    config: RendererConfig,
    scene: Option<TriangleScene<G>>,
    frames: u64,
}

impl<G: GlApi> FrameLoop<G> {
    /// Starts in `Running`; the scene must already be built.
    pub fn new(config: RendererConfig, scene: TriangleScene<G>) -> Self {
        Self {
            state: LoopState::Running,
            config,
            scene: Some(scene),
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames presented so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn scene(&self) -> Option<&TriangleScene<G>> {
        self.scene.as_ref()
    }

    /// Runs one iteration.
    ///
    /// Escape (held, or pressed since the last iteration) latches the
    /// window's close flag. A set close flag ends the loop before anything is
    /// drawn. Once `Terminated`, further calls do nothing.
    pub fn iterate<P>(
        &mut self,
        gl: &G,
        presenter: &P,
        window: &mut WindowState,
        input: &InputState,
        input_frame: &InputFrame,
    ) -> Result<LoopState>
    where
        P: Present + ?Sized,
    {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        if input.key_down(Key::Escape) || input_frame.key_pressed(Key::Escape) {
            window.request_close();
        }

        if window.close_requested() {
            log::debug!("close requested after {} frames", self.frames);
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        gl.clear_color(self.config.clear_color.to_array());
        gl.clear_color_buffer();

        if self.config.draw_triangle {
            if let Some(scene) = &self.scene {
                scene.draw(gl);
            }
        }

        presenter.present()?;
        self.frames += 1;

        Ok(self.state)
    }

    /// Terminates the loop and releases the scene's GL objects.
    ///
    /// Safe to call more than once.
    pub fn shutdown(&mut self, gl: &G) {
        self.state = LoopState::Terminated;
        if let Some(scene) = self.scene.take() {
            scene.release(gl);
            log::debug!("scene released");
        }
    }
}
