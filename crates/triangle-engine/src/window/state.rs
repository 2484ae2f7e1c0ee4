use winit::dpi::PhysicalSize;

/// Provider-side window state the frame loop reads and writes.
///
/// The size is fixed at creation; resizing is not tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    size: PhysicalSize<u32>,
    close_requested: bool,
}

impl WindowState {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            size,
            close_requested: false,
        }
    }

    /// Drawable size in physical pixels (also the GL viewport).
    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    #[inline]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Latches the close flag. It is never cleared.
    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::debug!("window close requested");
        }
        self.close_requested = true;
    }
}
