use crate::paint::Color;

/// Environment variable that turns on the triangle draw call.
pub const DRAW_ENV_VAR: &str = "TRIANGLE_DRAW";

/// Frame loop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Color the framebuffer is cleared to every frame.
    pub clear_color: Color,

    /// Issue a draw of the uploaded triangle between clear and present.
    ///
    /// Off by default: frames are clear-only.
    pub draw_triangle: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::TEAL,
            draw_triangle: false,
        }
    }
}

impl RendererConfig {
    /// Defaults, with `draw_triangle` taken from `TRIANGLE_DRAW` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(DRAW_ENV_VAR) {
            match parse_flag(&value) {
                Some(flag) => config.draw_triangle = flag,
                None => log::warn!("ignoring {DRAW_ENV_VAR}={value:?}: expected a boolean"),
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
