use winit::dpi::LogicalSize;

use dusk_engine::coords::Viewport;
use dusk_engine::device::GpuInit;
use dusk_engine::logging::LoggingConfig;
use dusk_engine::paint::Color;
use dusk_engine::window::RuntimeConfig;
use dusk_scene::animation::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Everything the viewer needs before the window opens.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    /// Logical canvas the scene is recorded against; stretched to the surface.
    pub canvas: Viewport,
    pub clear: Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "Sunset Cityscape".to_string(),
                initial_size: LogicalSize::new(VIEWPORT_WIDTH as f64, VIEWPORT_HEIGHT as f64),
                resizable: false,
                ..RuntimeConfig::default()
            },
            // Scene colors are authored for direct output, no sRGB encode.
            gpu: GpuInit {
                prefer_srgb: false,
                ..GpuInit::default()
            },
            logging: LoggingConfig::default(),
            canvas: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            clear: Color::rgb(0.0, 0.0, 0.02),
        }
    }
}
