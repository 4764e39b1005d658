mod app;
mod config;

use dusk_engine::logging::init_logging;
use dusk_engine::window::Runtime;

use crate::app::ViewerApp;
use crate::config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    let config = ViewerConfig::default();
    init_logging(config.logging.clone());

    log::info!("controls: space = pause, +/- = train speed, esc = quit");

    let app = ViewerApp::new(config.canvas, config.clear);
    Runtime::run(config.runtime, config.gpu, app)
}
