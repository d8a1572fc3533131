use anyhow::{Context, Result};

use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::device::FrameStats;
use glint_engine::input::Key;
use glint_engine::render::quad::QuadRenderer;
use glint_engine::render::{load_wgsl, ImageData};

use crate::assets::asset_path;

/// Demo application: two textured quads, W to switch the front texture,
/// R to dump a diagnostics report.
pub struct DemoApp {
    scene: Option<Scene>,
}

struct Scene {
    renderer: QuadRenderer,
}

impl Scene {
    /// Loads the shader and both images from the assets directory.
    fn load() -> Result<Self> {
        let shader = load_wgsl(asset_path("quad.wgsl")?)?;
        let ember = ImageData::from_file(asset_path("ember.png")?)?;
        let frost = ImageData::from_file(asset_path("frost.png")?)?;

        Ok(Self {
            renderer: QuadRenderer::new(shader, [ember, frost]),
        })
    }
}

impl DemoApp {
    pub fn new() -> Self {
        Self { scene: None }
    }

    fn ensure_scene(&mut self) -> Result<&mut Scene> {
        if self.scene.is_none() {
            self.scene = Some(Scene::load()?);
        }
        self.scene.as_mut().context("scene missing after load")
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let scene = match self.ensure_scene() {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("failed to load demo assets: {e:#}");
                return AppControl::Exit;
            }
        };

        if ctx.input_frame.keys_pressed.contains(&Key::W) {
            scene.renderer.toggle_front();
            log::info!("switching texture (front slot {})", scene.renderer.front());
        }

        // Fires on press and on OS key-repeat, so holding R streams reports.
        if ctx.input_frame.key_activated(Key::R) {
            let (lw, lh) = ctx.window.logical_size();
            let size = ctx.gpu.size();
            log::info!(
                "window: {}x{} physical ({:.0}x{:.0} logical)",
                size.width,
                size.height,
                lw,
                lh
            );
            ctx.gpu.log_report(Some(FrameStats {
                frames: ctx.time.frame_index,
                elapsed: ctx.time.elapsed,
            }));
        }

        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            scene.renderer.render(rctx, target);
        })
    }
}
