use super::image::ImageData;
use super::RenderCtx;

/// A sampled 2D texture with its default view.
///
/// Owns the decoded pixels alongside the GPU objects created from them, so
/// CPU and GPU copies share one lifetime.
pub struct Texture2d {
    pub image: ImageData,
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl Texture2d {
    /// Uploads decoded image data into a new RGBA8 texture.
    ///
    /// The texture is created with `TEXTURE_BINDING | COPY_DST` usage and a
    /// single mip level; pixel data goes through the queue's staging path.
    pub fn from_image(ctx: &RenderCtx<'_>, image: ImageData, label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.bytes_per_row()),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            image,
            texture,
            view,
        }
    }

    /// Texture extent, derived from the owned image.
    pub fn size(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.image.width,
            height: self.image.height,
            depth_or_array_layers: 1,
        }
    }
}
