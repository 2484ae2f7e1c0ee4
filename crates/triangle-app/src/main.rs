mod app;
mod shaders;

use triangle_engine::device::{ContextInit, WindowCreationFailed};
use triangle_engine::logging::{init_logging, LoggingConfig};
use triangle_engine::render::RendererConfig;
use triangle_engine::window::{Runtime, RuntimeConfig};

use app::TriangleApp;

fn main() {
    init_logging(LoggingConfig::default());

    let app = TriangleApp::new(RendererConfig::from_env());

    if let Err(err) = Runtime::run(RuntimeConfig::default(), ContextInit::default(), app) {
        log::error!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}

/// Process status for a failed run: -1 when no window could be opened,
/// 1 for anything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<WindowCreationFailed>().is_some() {
        -1
    } else {
        1
    }
}
