use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, InitCtx};
use crate::device::{ContextInit, RenderingContext, WindowCreationFailed};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};

use super::state::WindowState;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Drawable size in physical pixels; also the GL viewport.
    pub initial_size: PhysicalSize<u32>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            initial_size: PhysicalSize::new(800, 800),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, hands the context to `app`, and pumps events until
    /// the app asks to exit.
    ///
    /// Returns `WindowCreationFailed` (inside the `anyhow::Error`) when the
    /// window or its GL context cannot be created.
    pub fn run<A>(config: RuntimeConfig, context_init: ContextInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, context_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.into_result()
    }
}

/// Per-window resources.
///
/// Field order is drop order: the GL context goes before the window.
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    window_state: WindowState,

    rendering: RenderingContext,
    window: Window,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    context_init: ContextInit,
    app: A,

    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, context_init: ContextInit, app: A) -> Self {
        Self {
            config,
            context_init,
            app,
            entry: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> std::result::Result<WindowEntry, WindowCreationFailed> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowCreationFailed::new(e.to_string()))?;

        let rendering = RenderingContext::new(&window, &self.context_init)
            .map_err(|e| WindowCreationFailed::new(format!("{e:#}")))?;

        let window_state = WindowState::new(window.inner_size());
        log::debug!(
            "window {:?} created at {}x{}",
            window.id(),
            window_state.size().width,
            window_state.size().height
        );

        Ok(WindowEntry {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            window_state,
            rendering,
            window,
        })
    }

    /// Records a fatal error for `Runtime::run` to return and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.failure = Some(err);
        self.shutdown(event_loop);
    }

    /// Folds a frame callback's result into the run. Returns `true` when the
    /// loop should stop; an error is kept as the run's failure.
    fn after_frame(&mut self, control: Result<AppControl>) -> bool {
        match control {
            Ok(AppControl::Continue) => false,
            Ok(AppControl::Exit) => true,
            Err(e) => {
                self.failure = Some(e.context("frame failed"));
                true
            }
        }
    }

    fn into_result(mut self) -> Result<()> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Lets the app release its GL objects, then drops context and window.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.entry.take() {
            self.app.on_exit(&entry.rendering);
            drop(entry);
            log::debug!("window resources released");
        }
        self.exit_requested = true;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let init = {
            let ctx = InitCtx {
                rendering: &entry.rendering,
                window: &entry.window_state,
            };
            self.app.on_init(&ctx)
        };
        entry.window.request_redraw();
        self.entry = Some(entry);

        if let Err(e) = init {
            self.fail(event_loop, e.context("application initialization failed"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // No frame limiting: poll and redraw continuously.
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.window.id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry.input_state.apply_event(&mut entry.input_frame, ev);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match &event {
            // Observed by the frame loop at the top of the next iteration.
            WindowEvent::CloseRequested => {
                entry.window_state.request_close();
                entry.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let control = {
                    let mut ctx = FrameCtx {
                        rendering: &entry.rendering,
                        window: &mut entry.window_state,
                        input: &entry.input_state,
                        input_frame: &entry.input_frame,
                    };
                    self.app.on_frame(&mut ctx)
                };

                // Clear per-frame deltas after the frame is consumed.
                entry.input_frame.clear();

                if self.after_frame(control) {
                    self.shutdown(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // OS-initiated teardown that bypassed `shutdown`.
        if let Some(entry) = self.entry.take() {
            self.app.on_exit(&entry.rendering);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct IdleApp;

    impl App for IdleApp {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
            Ok(AppControl::Continue)
        }
    }

    fn state() -> AppState<IdleApp> {
        AppState::new(RuntimeConfig::default(), ContextInit::default(), IdleApp)
    }

    #[test]
    fn continue_keeps_running() {
        let mut st = state();
        assert!(!st.after_frame(Ok(AppControl::Continue)));
        assert!(st.into_result().is_ok());
    }

    #[test]
    fn exit_is_a_clean_stop() {
        let mut st = state();
        assert!(st.after_frame(Ok(AppControl::Exit)));
        assert!(st.into_result().is_ok());
    }

    #[test]
    fn frame_error_stops_and_fails_the_run() {
        let mut st = state();
        assert!(st.after_frame(Err(anyhow!("failed to swap buffers"))));

        let err = st.into_result().unwrap_err();
        assert_eq!(err.to_string(), "frame failed");
        assert!(format!("{err:#}").contains("failed to swap buffers"));
    }
}
