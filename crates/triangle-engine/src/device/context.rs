use std::ffi::CStr;
use std::num::NonZeroU32;

use anyhow::{Context, Result};
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::Window;

use super::api::{GlApi, Present};

/// Initialization parameters for the OpenGL context.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Requested `(major, minor)` OpenGL version.
    pub gl_version: (u8, u8),

    /// Request a core profile (no fixed-function entry points).
    pub core_profile: bool,

    /// Wait for vertical blank on present.
    ///
    /// Off by default: the frame loop runs unthrottled.
    pub vsync: bool,
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            gl_version: (3, 3),
            core_profile: true,
            vsync: false,
        }
    }
}

/// Owns the GL surface, the current context and the loaded function table.
///
/// This type is the explicit rendering context handed to every component.
/// Field order matters: the surface and context are dropped before the
/// window that created them, which the runtime keeps alongside.
pub struct RenderingContext {
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl RenderingContext {
    /// Creates a context for `window`, makes it current and loads GL.
    pub fn new(window: &Window, init: &ContextInit) -> Result<Self> {
        let display_handle = window
            .display_handle()
            .context("window has no display handle")?
            .as_raw();
        let window_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let display = unsafe { Display::new(display_handle, display_preference(window_handle)) }
            .context("failed to open GL display")?;

        let template = ConfigTemplateBuilder::new()
            .compatible_with_native_window(window_handle)
            .with_alpha_size(8)
            .build();
        let config = unsafe { display.find_configs(template) }
            .context("failed to enumerate GL configs")?
            .next()
            .context("no GL config is compatible with the window")?;

        let size = window.inner_size();
        let width = NonZeroU32::new(size.width).context("window has zero width")?;
        let height = NonZeroU32::new(size.height).context("window has zero height")?;
        let surface_attributes =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(window_handle, width, height);
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create GL window surface")?;

        let (major, minor) = init.gl_version;
        let profile = if init.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(Some(window_handle));
        let context = unsafe { display.create_context(&config, &context_attributes) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} context"))?
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s: &CStr| display.get_proc_address(s))
        };
        log_driver_info(&gl);

        GlApi::viewport(&gl, size.width as i32, size.height as i32);

        Ok(Self { gl, surface, context })
    }

    /// Loaded GL function table. The context is current for as long as `self` lives.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

impl Present for RenderingContext {
    fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

#[cfg(target_os = "windows")]
fn display_preference(window: raw_window_handle::RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Wgl(Some(window))
}

#[cfg(target_os = "macos")]
fn display_preference(_window: raw_window_handle::RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_preference(_window: raw_window_handle::RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

fn log_driver_info(gl: &glow::Context) {
    let (vendor, renderer, version) = unsafe {
        (
            gl.get_parameter_string(glow::VENDOR),
            gl.get_parameter_string(glow::RENDERER),
            gl.get_parameter_string(glow::VERSION),
        )
    };
    log::info!("OpenGL {version} ({renderer}, {vendor})");
}
