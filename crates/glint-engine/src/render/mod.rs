//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu and are responsible for their own
//! GPU resources (pipelines, buffers, bind groups). CPU-side assets (decoded
//! images, shader sources) are loaded through this module and handed to a
//! renderer, which uploads them lazily on first use.

mod ctx;
mod image;
mod shader;
mod texture;

pub mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use image::ImageData;
pub use shader::load_wgsl;
pub use texture::Texture2d;
