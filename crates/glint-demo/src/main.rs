use glint_engine::device::GpuInit;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

mod app;
mod assets;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("starting glint-demo v{}", env!("CARGO_PKG_VERSION"));

    let config = RuntimeConfig {
        title: "glint [wgpu + winit]".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
    };

    // The quad renderer binds both textures through a fixed-size binding array.
    let gpu_init = GpuInit {
        required_features: wgpu::Features::TEXTURE_BINDING_ARRAY,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, app::DemoApp::new())
}
