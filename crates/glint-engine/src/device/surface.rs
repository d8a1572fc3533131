use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface format, preferring sRGB variants when asked to.
///
/// Falls back to the first advertised format; surfaces with an empty format
/// list are unusable and yield `None`.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Folds a resize into the surface configuration.
///
/// Returns `true` when the surface must be reconfigured. A 0x0 size (minimized
/// window) only updates the tracked size; configuration is deferred until a
/// non-empty size arrives.
pub(crate) fn resize_config(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

/// Maps an acquisition error to the action the frame loop should take.
///
/// The caller performs the actual reconfigure for `Reconfigured`; this function
/// is deliberately side-effect free.
pub(crate) fn classify_surface_error(err: wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── choose_surface_format ─────────────────────────────────────────────

    #[test]
    fn format_prefers_srgb_when_available() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn format_falls_back_to_first_without_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8Unorm,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn format_honors_prefer_srgb_false() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn format_empty_list_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── choose_alpha_mode ─────────────────────────────────────────────────

    #[test]
    fn alpha_mode_uses_request_when_supported() {
        let supported = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ];
        assert_eq!(
            choose_alpha_mode(&supported, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn alpha_mode_falls_back_to_first_supported() {
        let supported = [wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&supported, Some(wgpu::CompositeAlphaMode::PostMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&supported, None), wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn alpha_mode_defaults_to_auto_when_list_is_empty() {
        assert_eq!(choose_alpha_mode(&[], None), wgpu::CompositeAlphaMode::Auto);
    }

    // ── resize_config ─────────────────────────────────────────────────────

    #[test]
    fn resize_updates_config_and_requests_reconfigure() {
        let mut cfg = config(640, 480);
        let mut size = PhysicalSize::new(640, 480);

        assert!(resize_config(&mut cfg, &mut size, PhysicalSize::new(800, 600)));
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(size, PhysicalSize::new(800, 600));
    }

    #[test]
    fn resize_to_zero_is_deferred() {
        let mut cfg = config(640, 480);
        let mut size = PhysicalSize::new(640, 480);

        assert!(!resize_config(&mut cfg, &mut size, PhysicalSize::new(0, 0)));
        // Config keeps the last valid extent; only the tracked size changes.
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(size, PhysicalSize::new(0, 0));
    }

    #[test]
    fn resize_with_one_zero_axis_is_deferred() {
        let mut cfg = config(640, 480);
        let mut size = PhysicalSize::new(640, 480);

        assert!(!resize_config(&mut cfg, &mut size, PhysicalSize::new(800, 0)));
        assert_eq!((cfg.width, cfg.height), (640, 480));
    }

    // ── classify_surface_error ────────────────────────────────────────────

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(
            classify_surface_error(wgpu::SurfaceError::Lost),
            SurfaceErrorAction::Reconfigured
        );
        assert_eq!(
            classify_surface_error(wgpu::SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigured
        );
    }

    #[test]
    fn timeout_skips_frame() {
        assert_eq!(
            classify_surface_error(wgpu::SurfaceError::Timeout),
            SurfaceErrorAction::SkipFrame
        );
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert_eq!(
            classify_surface_error(wgpu::SurfaceError::OutOfMemory),
            SurfaceErrorAction::Fatal
        );
    }
}
