use std::fmt;

/// The window or its GL context could not be created.
///
/// Fatal for the runtime: `Runtime::run` returns it (inside `anyhow::Error`)
/// and the binary maps it to a failure exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowCreationFailed {
    pub reason: String,
}

impl WindowCreationFailed {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for WindowCreationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to create window: {}", self.reason)
    }
}

impl std::error::Error for WindowCreationFailed {}
