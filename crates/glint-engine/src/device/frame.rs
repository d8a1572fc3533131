/// A single acquired frame: the surface texture, its default view, and the
/// command encoder recording into it.
///
/// Short-lived by design. Hand it back to [`Gpu::submit`] promptly; an
/// unsubmitted frame holds the surface texture and blocks the next acquire.
///
/// [`Gpu::submit`]: super::Gpu::submit
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
