mod app;
mod controls;
mod palette;

use anyhow::Result;
use gable_engine::device::GpuInit;
use gable_engine::logging::{init_logging, LoggingConfig};
use gable_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::app::HouseApp;
use crate::controls::Controls;
use crate::palette::Palette;

const TITLE: &str = "gable";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("WASD / arrows move the house, 1/2/3 switch triangles/lines/points, Esc quits");

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    // Linear surface: the palette is defined in plain framebuffer values.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(
        config,
        gpu_init,
        HouseApp::new(TITLE, Controls::default(), Palette::default()),
    )
}
