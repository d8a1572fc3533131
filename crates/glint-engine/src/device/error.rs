/// What the frame loop should do after a failed surface acquire.
///
/// Produced by [`Gpu::handle_surface_error`]; the three variants cover every
/// `wgpu::SurfaceError`.
///
/// [`Gpu::handle_surface_error`]: super::Gpu::handle_surface_error
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
